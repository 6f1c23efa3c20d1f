//! Move types and the record of an applied move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;
use super::status::GameStatus;

/// A move as the presentation layer sees it: a piece travelling from one square to another.
///
/// Castling is a king move of two columns; the rook follows as a side effect.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

/// Coordinate notation, e.g. `e2e4`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// What kind of state transition a move performed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
}

/// Everything the caller needs to redraw after a move was applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub mv: Move,
    /// Color that made the move
    pub color: Color,
    /// Kind of the moving piece before any promotion
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    pub promotion: Option<Piece>,
    /// Status of the position for the side now to move
    pub status: GameStatus,
}

impl MoveOutcome {
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }
}
