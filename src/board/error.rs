//! Error types for rules engine operations.
//!
//! Every error here is a caller-input error. The engine never aborts; a
//! rejected request leaves the game state untouched.

use std::fmt;

use super::types::{Color, Piece, Square};

/// Error type for rejected move requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not among the legal moves of `from` in the current position
    IllegalMove { from: Square, to: Square },
    /// A pawn may only promote to a queen, rook, bishop or knight
    InvalidPromotion { piece: Piece },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move '{from}{to}'")
            }
            MoveError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote to {piece}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions rejected by `GameBuilder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// More than one king of the same color
    TooManyKings { color: Color, count: usize },
    /// A pawn on row 0 or row 7, where it could never have stood
    PawnOnBackRank { square: Square },
    /// En passant target that is occupied or not on a skipped-square row
    InvalidEnPassant { square: Square },
    /// A piece placed on, or cleared from, a square outside the grid
    OffBoard { square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::TooManyKings { color, count } => {
                write!(f, "{color} has {count} kings, at most one is allowed")
            }
            PositionError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank square {square}")
            }
            PositionError::InvalidEnPassant { square } => {
                write!(f, "Invalid en passant target {square}")
            }
            PositionError::OffBoard { square } => {
                write!(f, "Square {square} is off the board")
            }
        }
    }
}

impl std::error::Error for PositionError {}
