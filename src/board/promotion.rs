//! Promotion choice providers.
//!
//! The engine never talks to a UI. A presentation layer that wants to ask
//! the player which piece to take plugs in its own `PromotionPolicy`; the
//! default promotes to a queen without asking.

use super::{Color, Piece, Square};

/// Picks the piece a pawn becomes when it reaches the far rank.
pub trait PromotionPolicy {
    /// Piece for a `color` pawn promoting on `square`.
    ///
    /// Returning a pawn or king makes the move fail with
    /// `MoveError::InvalidPromotion`.
    fn choose(&mut self, color: Color, square: Square) -> Piece;
}

/// Always promote to a queen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoQueen;

impl PromotionPolicy for AutoQueen {
    fn choose(&mut self, _color: Color, _square: Square) -> Piece {
        Piece::Queen
    }
}

/// Always promote to the same piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedPromotion(pub Piece);

impl PromotionPolicy for FixedPromotion {
    fn choose(&mut self, _color: Color, _square: Square) -> Piece {
        self.0
    }
}

/// Any closure can answer the question, e.g. one that opens a dialog.
impl<F> PromotionPolicy for F
where
    F: FnMut(Color, Square) -> Piece,
{
    fn choose(&mut self, color: Color, square: Square) -> Piece {
        self(color, square)
    }
}
