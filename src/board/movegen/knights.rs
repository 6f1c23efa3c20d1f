use super::super::attack_tables::knight_targets;
use super::super::{Board, Color, Square, SquareSet};

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> SquareSet {
        knight_targets(from)
            .iter()
            .filter(|&to| self.color_on(to) != Some(color))
            .collect()
    }
}
