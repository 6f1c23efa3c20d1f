use std::fmt;

use super::{Board, GameState, Square};

/// Text diagram with rank 8 on top, uppercase for White
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let ch = match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => piece.to_colored_char(color),
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.side_to_move)?;
        if let Some(target) = self.en_passant {
            write!(f, ", en passant {target}")?;
        }
        Ok(())
    }
}
