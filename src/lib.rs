//! Rules engine for standard chess.
//!
//! Keeps board state, generates legal moves, applies them, and reports
//! check, checkmate and stalemate. Rendering and input handling belong to the
//! caller.

/// Logs through the `log` crate when the `logging` feature is enabled,
/// and compiles to nothing otherwise.
#[cfg(feature = "logging")]
#[macro_export]
#[doc(hidden)]
macro_rules! rules_log {
    ($level:ident, $($arg:tt)+) => {
        ::log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
#[doc(hidden)]
macro_rules! rules_log {
    ($level:ident, $($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

pub mod board;
pub mod sync;

pub use board::{
    Board, CastleSide, Color, Game, GameBuilder, GameState, GameStatus, Move, MoveError,
    MoveOutcome, Piece, Square, SquareSet,
};
pub use sync::SharedGame;
