//! Fluent builder for constructing positions.
//!
//! Allows setting up arbitrary positions piece by piece, for puzzles,
//! tests and editors.
//!
//! # Example
//! ```
//! use chess_rules::{Color, GameBuilder, Piece, Square};
//!
//! let state = GameBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build_state()
//!     .unwrap();
//! assert_eq!(state.king_square(Color::Black), Some(Square(0, 4)));
//! ```

use super::promotion::{AutoQueen, PromotionPolicy};
use super::{
    Board, CastleSide, CastlingRights, Color, Game, GameState, Piece, PositionError, Square,
};

/// A fluent builder for `GameState` and `Game` positions.
pub struct GameBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    off_board: Option<Square>,
    promotion: Box<dyn PromotionPolicy + Send>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Start from an empty board with White to move and no castling rights.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            off_board: None,
            promotion: Box::new(AutoQueen),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.board = Board::starting();
        builder.castling = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.note_off_board(square);
        self.board.set_piece(square, color, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.note_off_board(square);
        self.board.clear(square);
        self
    }

    /// Remember the first off-board square so `validate` can report it.
    fn note_off_board(&mut self, square: Square) {
        if !square.is_on_board() && self.off_board.is_none() {
            self.off_board = Some(square);
        }
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights wholesale.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling.set(color, CastleSide::Kingside);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling.set(color, CastleSide::Queenside);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    /// Promotion policy used by the `Game` produced by `build`.
    #[must_use]
    pub fn promotion_policy<P>(mut self, policy: P) -> Self
    where
        P: PromotionPolicy + Send + 'static,
    {
        self.promotion = Box::new(policy);
        self
    }

    /// Validate and produce the bare position.
    pub fn build_state(&self) -> Result<GameState, PositionError> {
        self.validate()?;
        Ok(GameState {
            board: self.board,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
        })
    }

    /// Validate and produce a game carrying the configured promotion policy.
    pub fn build(self) -> Result<Game, PositionError> {
        let state = self.build_state()?;
        Ok(Game::from_state(state).with_boxed_policy(self.promotion))
    }

    fn validate(&self) -> Result<(), PositionError> {
        if let Some(square) = self.off_board {
            return Err(PositionError::OffBoard { square });
        }

        for color in Color::BOTH {
            let count = self
                .board
                .pieces(color)
                .filter(|&(_, piece)| piece == Piece::King)
                .count();
            if count > 1 {
                return Err(PositionError::TooManyKings { color, count });
            }
        }

        for color in Color::BOTH {
            if let Some((square, _)) = self
                .board
                .pieces(color)
                .find(|&(sq, piece)| piece == Piece::Pawn && (sq.row() == 0 || sq.row() == 7))
            {
                return Err(PositionError::PawnOnBackRank { square });
            }
        }

        if let Some(square) = self.en_passant {
            if !square.is_on_board()
                || !(square.row() == 2 || square.row() == 5)
                || !self.board.is_empty(square)
            {
                return Err(PositionError::InvalidEnPassant { square });
            }
        }

        Ok(())
    }
}
