use super::{
    Board, CastleSide, Color, GameState, Move, MoveError, MoveKind, MoveOutcome, Piece, Square,
};

/// What `Board::relocate` did to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Relocation {
    pub(crate) color: Color,
    pub(crate) piece: Piece,
    pub(crate) captured: Option<Piece>,
    pub(crate) kind: MoveKind,
}

impl Board {
    /// Move the occupant of `from` to `to`, performing the castling rook hop
    /// and en passant removal when the geometry calls for them.
    ///
    /// Touches the grid only. Shared by move application and by the legality
    /// filter's scratch simulation so both see the same resulting position.
    /// Returns `None` if `from` is empty.
    pub(crate) fn relocate(
        &mut self,
        from: Square,
        to: Square,
        en_passant: Option<Square>,
    ) -> Option<Relocation> {
        let (color, piece) = self.piece_at(from)?;
        let mut captured = None;
        let mut kind = MoveKind::Normal;

        match piece {
            Piece::King if from.col().abs_diff(to.col()) == 2 => {
                let side = if to.col() > from.col() {
                    CastleSide::Kingside
                } else {
                    CastleSide::Queenside
                };
                let rook_from = Square(from.row(), side.rook_col());
                let rook_to = Square(from.row(), side.rook_target_col());
                if let Some((rook_color, rook)) = self.clear(rook_from) {
                    self.set_piece(rook_to, rook_color, rook);
                }
                kind = MoveKind::Castle(side);
            }
            Piece::Pawn if Some(to) == en_passant && from.col() != to.col() && self.is_empty(to) => {
                // The captured pawn stands beside `from`, not on `to`
                captured = self
                    .clear(Square(from.row(), to.col()))
                    .map(|(_, taken)| taken);
                kind = MoveKind::EnPassant;
            }
            Piece::Pawn if from.row().abs_diff(to.row()) == 2 => {
                kind = MoveKind::DoublePawnPush;
            }
            _ => {}
        }

        if let Some((_, taken)) = self.clear(to) {
            captured = Some(taken);
        }
        self.clear(from);
        self.set_piece(to, color, piece);

        Some(Relocation {
            color,
            piece,
            captured,
            kind,
        })
    }
}

impl GameState {
    /// Whether moving the piece on `from` to `to` lands a pawn on its promotion row
    #[must_use]
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        matches!(
            self.board.piece_at(from),
            Some((color, Piece::Pawn)) if to.row() == color.promotion_rank()
        )
    }

    /// Apply a legal move for the side to move.
    ///
    /// `promotion` picks the piece a promoting pawn becomes; `None` means
    /// Queen. It is ignored for non-promoting moves. On error the state is
    /// left untouched.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveOutcome, MoveError> {
        if !self.is_legal(from, to) {
            crate::rules_log!(debug, "rejected illegal move {} to {}", from, to);
            return Err(MoveError::IllegalMove { from, to });
        }
        self.apply_checked(from, to, promotion)
    }

    /// `apply_move` minus the legality check, for callers that already ran it.
    pub(crate) fn apply_checked(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveOutcome, MoveError> {
        let promotion = if self.is_promotion(from, to) {
            let piece = promotion.unwrap_or(Piece::Queen);
            if !piece.is_promotion_choice() {
                crate::rules_log!(debug, "rejected promotion of {}{} to {}", from, to, piece);
                return Err(MoveError::InvalidPromotion { piece });
            }
            Some(piece)
        } else {
            None
        };

        let moved = self
            .play(from, to, promotion)
            .ok_or(MoveError::IllegalMove { from, to })?;
        let status = self.status();

        let mv = Move::new(from, to);
        crate::rules_log!(debug, "{} played {} ({:?})", moved.color, mv, moved.kind);
        if status.is_over() {
            crate::rules_log!(info, "game over: {}", status);
        }

        Ok(MoveOutcome {
            mv,
            color: moved.color,
            piece: moved.piece,
            captured: moved.captured,
            kind: moved.kind,
            promotion,
            status,
        })
    }

    /// Mutate the state for a move already known to be legal: grid,
    /// castling rights, en passant target, promotion and turn handoff.
    pub(crate) fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Option<Relocation> {
        let moved = self.board.relocate(from, to, self.en_passant)?;

        self.revoke_castling_rights(from, to, moved);

        self.en_passant = match moved.kind {
            MoveKind::DoublePawnPush => Some(Square((from.row() + to.row()) / 2, from.col())),
            _ => None,
        };

        if let Some(piece) = promotion {
            self.board.set_piece(to, moved.color, piece);
        }

        self.side_to_move = moved.color.opponent();
        Some(moved)
    }

    /// Rights are only ever removed: a king move drops both of its color's
    /// rights, a rook leaving its home corner drops that side, and a capture
    /// landing on an enemy home corner drops the enemy's side.
    fn revoke_castling_rights(&mut self, from: Square, to: Square, moved: Relocation) {
        let color = moved.color;
        match moved.piece {
            Piece::King => self.castling.remove_color(color),
            Piece::Rook if from.row() == color.back_rank() => {
                if let Some(side) = CastleSide::from_rook_col(from.col()) {
                    self.castling.remove(color, side);
                }
            }
            _ => {}
        }

        let opponent = color.opponent();
        if to.row() == opponent.back_rank() {
            if let Some(side) = CastleSide::from_rook_col(to.col()) {
                self.castling.remove(opponent, side);
            }
        }
    }
}
