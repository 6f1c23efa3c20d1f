use super::super::attack_tables::{king_targets, knight_targets, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Board, CastleSide, Color, GameState, Piece, Square, SquareSet};

impl GameState {
    pub(crate) fn king_moves(&self, from: Square, color: Color) -> SquareSet {
        let mut moves: SquareSet = king_targets(from)
            .iter()
            .filter(|&to| self.board.color_on(to) != Some(color))
            .collect();

        if from == Square(color.back_rank(), 4) {
            for side in CastleSide::BOTH {
                if self.can_castle(color, side) {
                    moves.insert(Square(from.row(), side.king_target_col()));
                }
            }
        }

        moves
    }

    /// Whether `color` may castle toward `side` right now.
    ///
    /// The right must be held, king and rook must stand on their home squares,
    /// every square between them must be empty, and none of the squares the
    /// king stands on, crosses or lands on may be attacked.
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let row = color.back_rank();
        if !self.castling.has(color, side)
            || self.board.piece_at(Square(row, 4)) != Some((color, Piece::King))
            || self.board.piece_at(Square(row, side.rook_col())) != Some((color, Piece::Rook))
        {
            return false;
        }

        let between = match side {
            CastleSide::Kingside => 5..7,
            CastleSide::Queenside => 1..4,
        };
        if !between.into_iter().all(|col| self.board.is_empty(Square(row, col))) {
            return false;
        }

        let king_path = match side {
            CastleSide::Kingside => 4..=6,
            CastleSide::Queenside => 2..=4,
        };
        let opponent = color.opponent();
        king_path
            .into_iter()
            .all(|col| !self.board.is_square_attacked(Square(row, col), opponent))
    }
}

impl Board {
    /// Whether any piece of `by` attacks `target`.
    ///
    /// Looks outward from `target` with the same primitives `attacks_from`
    /// uses: a pawn of `by` attacks `target` if it sits one step behind it
    /// diagonally, relative to `by`'s forward direction.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        if !target.is_on_board() {
            return false;
        }
        let behind = -by.pawn_direction();
        let pawn_attack = [-1, 1].iter().any(|&dc| {
            target
                .offset(behind, dc)
                .is_some_and(|src| self.piece_at(src) == Some((by, Piece::Pawn)))
        });
        if pawn_attack {
            return true;
        }

        if knight_targets(target)
            .iter()
            .any(|src| self.piece_at(src) == Some((by, Piece::Knight)))
        {
            return true;
        }

        if king_targets(target)
            .iter()
            .any(|src| self.piece_at(src) == Some((by, Piece::King)))
        {
            return true;
        }

        let rook_like = ROOK_DIRECTIONS.iter().any(|&dir| {
            matches!(
                self.first_blocker(target, dir),
                Some((color, Piece::Rook | Piece::Queen)) if color == by
            )
        });
        if rook_like {
            return true;
        }

        BISHOP_DIRECTIONS.iter().any(|&dir| {
            matches!(
                self.first_blocker(target, dir),
                Some((color, Piece::Bishop | Piece::Queen)) if color == by
            )
        })
    }
}
