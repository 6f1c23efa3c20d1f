//! Pseudo-legal move generation and attack coverage.
//!
//! Move generation answers "where may this piece go by its movement rules";
//! attack coverage answers "which squares does this piece threaten". The two
//! share the per-piece primitives in the submodules but differ for pawns,
//! whose pushes are not attacks and whose diagonals are attacks even when
//! empty.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use pawns::pawn_attacks;
pub(crate) use sliders::SliderType;

use super::attack_tables::{king_targets, knight_targets};
use super::{Board, Color, GameState, Piece, Square, SquareSet};

impl Board {
    /// Squares attacked by the piece on `from`, whatever occupies them.
    ///
    /// Empty if `from` is empty. Castling never attacks, and a pawn attacks
    /// its two forward diagonals only.
    #[must_use]
    pub fn attacks_from(&self, from: Square) -> SquareSet {
        let Some((color, piece)) = self.piece_at(from) else {
            return SquareSet::EMPTY;
        };
        match piece {
            Piece::Pawn => pawn_attacks(from, color),
            Piece::Knight => knight_targets(from),
            Piece::Bishop => self.slider_attacks(from, SliderType::Bishop),
            Piece::Rook => self.slider_attacks(from, SliderType::Rook),
            Piece::Queen => self.slider_attacks(from, SliderType::Queen),
            Piece::King => king_targets(from),
        }
    }

    /// Union of the squares attacked by every piece of `by`
    #[must_use]
    pub fn attacked_squares(&self, by: Color) -> SquareSet {
        self.pieces(by)
            .fold(SquareSet::EMPTY, |acc, (sq, _)| acc.union(self.attacks_from(sq)))
    }
}

impl GameState {
    /// Destinations of the piece on `from` by movement rules alone.
    ///
    /// Ignores whether the move would leave the mover's king attacked and
    /// whose turn it is. Empty if `from` is empty.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> SquareSet {
        let Some((color, piece)) = self.board.piece_at(from) else {
            return SquareSet::EMPTY;
        };
        match piece {
            Piece::Pawn => self.pawn_moves(from, color),
            Piece::Knight => self.board.knight_moves(from, color),
            Piece::Bishop => self.board.slider_moves(from, color, SliderType::Bishop),
            Piece::Rook => self.board.slider_moves(from, color, SliderType::Rook),
            Piece::Queen => self.board.slider_moves(from, color, SliderType::Queen),
            Piece::King => self.king_moves(from, color),
        }
    }
}
