use super::{GameState, Move, Piece, PROMOTION_PIECES};

impl GameState {
    /// Count legal move paths of length `depth` from this position.
    ///
    /// Each promotion choice counts as a separate move, so results match
    /// published perft tables.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for mv in self.all_legal_moves() {
            if self.is_promotion(mv.from, mv.to) {
                for piece in PROMOTION_PIECES {
                    nodes += self.perft_child(mv, Some(piece), depth);
                }
            } else {
                nodes += self.perft_child(mv, None, depth);
            }
        }
        nodes
    }

    fn perft_child(&self, mv: Move, promotion: Option<Piece>, depth: usize) -> u64 {
        if depth == 1 {
            return 1;
        }
        let mut child = *self;
        match child.play(mv.from, mv.to, promotion) {
            Some(_) => child.perft(depth - 1),
            None => 0,
        }
    }
}
