#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// 8x8 grid of optional pieces.
///
/// The board is a small `Copy` value, so "what if" simulations work on an
/// owned scratch copy and never touch the live position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial placement: Black on rows 0-1, White on rows 6-7
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(Color::Black.back_rank(), col), Color::Black, *piece);
            board.set_piece(Square(Color::White.back_rank(), col), Color::White, *piece);
            board.set_piece(Square(Color::Black.pawn_start_rank(), col), Color::Black, Piece::Pawn);
            board.set_piece(Square(Color::White.pawn_start_rank(), col), Color::White, Piece::Pawn);
        }
        board
    }

    /// Occupant of a square
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares.get(sq.0)?.get(sq.1).copied().flatten()
    }

    /// True for an unoccupied square, and for any square off the board
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    fn cell_mut(&mut self, sq: Square) -> Option<&mut Option<(Color, Piece)>> {
        self.squares.get_mut(sq.0)?.get_mut(sq.1)
    }

    /// No-op for an off-board square
    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        if let Some(cell) = self.cell_mut(sq) {
            *cell = Some((color, piece));
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.cell_mut(sq)?.take()
    }

    /// Location of a color's king, or `None` if it is absent
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Every piece of a color with its square, in square index order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Number of pieces of a color
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

/// The complete persistent state of a game.
///
/// Callers read it freely but mutate it only through `apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
}

impl GameState {
    /// Standard initial placement, White to move, all castling rights, no en passant target
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Square skipped by the pawn that just advanced two squares, if any
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board.king_square(color)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
