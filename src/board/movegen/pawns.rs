use super::super::{Color, GameState, Piece, Square, SquareSet};

/// The two forward diagonals of a pawn, occupied or not
pub(crate) fn pawn_attacks(from: Square, color: Color) -> SquareSet {
    let dir = color.pawn_direction();
    [-1, 1]
        .iter()
        .filter_map(|&dc| from.offset(dir, dc))
        .collect()
}

impl GameState {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.board.is_empty(one) {
                moves.insert(one);
                if from.row() == color.pawn_start_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.board.is_empty(two) {
                            moves.insert(two);
                        }
                    }
                }
            }
        }

        for to in pawn_attacks(from, color) {
            match self.board.piece_at(to) {
                Some((target_color, _)) if target_color != color => moves.insert(to),
                None if self.is_en_passant_capture(from, to, color) => moves.insert(to),
                _ => {}
            }
        }

        moves
    }

    /// True if a `color` pawn on `from` moving diagonally to `to` captures en passant.
    ///
    /// The pawn being taken sits beside `from`, on `to`'s column.
    pub(crate) fn is_en_passant_capture(&self, from: Square, to: Square, color: Color) -> bool {
        self.en_passant == Some(to)
            && from.col() != to.col()
            && self.board.piece_at(Square(from.row(), to.col())) == Some((color.opponent(), Piece::Pawn))
    }
}
