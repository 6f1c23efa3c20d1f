//! Game status classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// State of the game from the point of view of the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The side to move has legal moves and is not in check
    Ongoing,
    /// The given color is in check but can respond
    Check(Color),
    Checkmate { winner: Color },
    /// The given color has no legal move and is not in check
    Stalemate(Color),
    /// The given color has no king on the board
    KingMissing(Color),
}

impl GameStatus {
    /// Returns true if no further moves should be played
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate(_) | GameStatus::KingMissing(_)
        )
    }

    /// The winning color, if the game was decided
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            GameStatus::KingMissing(loser) => Some(loser.opponent()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "Ongoing"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            GameStatus::Stalemate(color) => write!(f, "Stalemate, {color} cannot move"),
            GameStatus::KingMissing(color) => write!(f, "{color} has no king"),
        }
    }
}
