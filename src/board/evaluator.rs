//! Check, checkmate and stalemate detection.
//!
//! Every query is total: a color without a king is never in check, mated or
//! stalemated, and `status` reports the missing king instead.

use super::{Color, GameState, GameStatus};

impl GameState {
    /// True iff `color`'s king is attacked by the opponent. False if the king is absent.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.board.is_square_attacked(king, color.opponent()))
    }

    /// In check with no legal move
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, king present, and no legal move
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.king_square(color).is_some()
            && !self.is_in_check(color)
            && !self.has_legal_move(color)
    }

    /// Classify the position for the side to move
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;
        for color in [side, side.opponent()] {
            if self.king_square(color).is_none() {
                return GameStatus::KingMissing(color);
            }
        }

        match (self.is_in_check(side), self.has_legal_move(side)) {
            (true, false) => GameStatus::Checkmate {
                winner: side.opponent(),
            },
            (false, false) => GameStatus::Stalemate(side),
            (true, true) => GameStatus::Check(side),
            (false, true) => GameStatus::Ongoing,
        }
    }
}
