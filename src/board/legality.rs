//! Legality filter: pseudo-legal moves minus those that leave the mover's king attacked.

use super::{Color, GameState, Move, Piece, Square, SquareSet};

impl GameState {
    /// Legal destinations of the piece on `from`.
    ///
    /// Empty if `from` is empty or holds a piece of the side not to move.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        match self.board.color_on(from) {
            Some(color) if color == self.side_to_move => self.legal_moves_for(from),
            _ => SquareSet::EMPTY,
        }
    }

    /// Legal destinations of the piece on `from`, whichever side owns it
    pub(crate) fn legal_moves_for(&self, from: Square) -> SquareSet {
        self.pseudo_legal_moves(from)
            .iter()
            .filter(|&to| !self.exposes_king(from, to))
            .collect()
    }

    /// Whether moving `from` to `to` would leave the mover's own king attacked.
    ///
    /// Simulates the move on a scratch copy of the board; the live board is
    /// never touched. A side without a king has nothing to expose.
    #[must_use]
    pub fn exposes_king(&self, from: Square, to: Square) -> bool {
        let mut scratch = self.board;
        let Some(moved) = scratch.relocate(from, to, self.en_passant) else {
            return false;
        };
        let king = if moved.piece == Piece::King {
            Some(to)
        } else {
            scratch.king_square(moved.color)
        };
        king.is_some_and(|sq| scratch.is_square_attacked(sq, moved.color.opponent()))
    }

    /// Whether `from` to `to` is a legal move for the side to move
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.legal_moves(from).contains(to)
    }

    /// Every legal move of the side to move, grouped by origin square
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces(self.side_to_move)
            .flat_map(|(from, _)| {
                self.legal_moves_for(from)
                    .iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Whether any piece of `color` has a legal move
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces(color)
            .any(|(from, _)| !self.legal_moves_for(from).is_empty())
    }
}
