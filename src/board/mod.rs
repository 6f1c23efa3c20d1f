//! Chess board representation and rules.
//!
//! Uses a plain 8x8 grid of optional pieces, small enough to copy for every
//! legality check. Supports the full rules of standard chess play including
//! castling, en passant and promotion; draws by repetition or the fifty-move
//! rule are not tracked.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameState, Square};
//!
//! let state = GameState::new();
//! let knight = Square(7, 1); // b1
//! println!("b1 knight has {} legal moves", state.legal_moves(knight).len());
//! assert_eq!(state.side_to_move(), Color::White);
//! ```

mod attack_tables;
mod builder;
mod display;
mod error;
mod evaluator;
mod game;
mod legality;
mod make_move;
mod movegen;
mod perft;
pub mod prelude;
pub mod promotion;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameBuilder;
pub use error::{MoveError, PositionError, SquareError};
pub use game::Game;
pub use promotion::{AutoQueen, FixedPromotion, PromotionPolicy};
pub use state::{Board, GameState};
pub use types::{
    CastleSide, CastlingRights, Color, GameStatus, Move, MoveKind, MoveOutcome, Piece, Square,
    SquareSet, SquareSetIter, PROMOTION_PIECES,
};
