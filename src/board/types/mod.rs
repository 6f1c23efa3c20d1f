//! Core chess types.
//!
//! This module contains the value types shared by the rules engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, col) board coordinate
//! - `SquareSet` - 64-bit set of destination or attacked squares
//! - `Move`, `MoveKind` and `MoveOutcome` - move input and applied-move record
//! - `CastlingRights` and `CastleSide` - castling state
//! - `GameStatus` - check/checkmate/stalemate classification

mod castling;
mod moves;
mod piece;
mod square;
mod square_set;
mod status;

// Re-export all public types
pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveOutcome};
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
pub use status::GameStatus;
