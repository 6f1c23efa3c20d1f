//! The engine surface a presentation layer talks to.

use std::fmt;

use super::promotion::{AutoQueen, PromotionPolicy};
use super::{
    Color, GameState, GameStatus, Move, MoveError, MoveOutcome, Piece, Square, SquareSet,
};

/// A game in progress together with its promotion policy.
///
/// # Example
/// ```
/// use chess_rules::{Game, Square};
///
/// let mut game = Game::new();
/// let e2: Square = "e2".parse().unwrap();
/// let e4: Square = "e4".parse().unwrap();
/// assert!(game.legal_moves(e2).contains(e4));
/// game.apply_move(e2, e4, None).unwrap();
/// assert_eq!(game.state().en_passant_target(), "e3".parse().ok());
/// ```
pub struct Game {
    state: GameState,
    promotion: Box<dyn PromotionPolicy + Send>,
}

impl Game {
    /// A new game from the initial position, promoting to queens
    #[must_use]
    pub fn new() -> Self {
        Game::from_state(GameState::new())
    }

    /// Continue from an existing position
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Game {
            state,
            promotion: Box::new(AutoQueen),
        }
    }

    /// Replace the promotion policy
    #[must_use]
    pub fn with_promotion_policy<P>(mut self, policy: P) -> Self
    where
        P: PromotionPolicy + Send + 'static,
    {
        self.promotion = Box::new(policy);
        self
    }

    pub(crate) fn with_boxed_policy(mut self, policy: Box<dyn PromotionPolicy + Send>) -> Self {
        self.promotion = policy;
        self
    }

    pub fn set_promotion_policy<P>(&mut self, policy: P)
    where
        P: PromotionPolicy + Send + 'static,
    {
        self.promotion = Box::new(policy);
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Reset to the initial position. The promotion policy is kept.
    pub fn new_game(&mut self) -> &GameState {
        crate::rules_log!(debug, "new game");
        self.state = GameState::new();
        &self.state
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    #[must_use]
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        self.state.legal_moves(from)
    }

    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.state.all_legal_moves()
    }

    /// Apply a move for the side to move.
    ///
    /// An explicit `promotion` wins; otherwise the policy is asked, and only
    /// when the move actually promotes.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveOutcome, MoveError> {
        if !self.state.is_legal(from, to) {
            crate::rules_log!(debug, "rejected illegal move {} to {}", from, to);
            return Err(MoveError::IllegalMove { from, to });
        }

        let promotion = match promotion {
            Some(piece) => Some(piece),
            None if self.state.is_promotion(from, to) => {
                Some(self.promotion.choose(self.state.side_to_move(), to))
            }
            None => None,
        };

        self.state.apply_checked(from, to, promotion)
    }

    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        self.state.is_in_check(color)
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.state.is_checkmate(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.state.is_stalemate(color)
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.state.king_square(color)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl From<GameState> for Game {
    fn from(state: GameState) -> Self {
        Game::from_state(state)
    }
}
