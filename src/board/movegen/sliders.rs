use super::super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Board, Color, Piece, Square, SquareSet};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Board {
    /// Ray-cast destinations: empty squares, plus the first blocker if it is an enemy
    pub(crate) fn slider_moves(&self, from: Square, color: Color, slider: SliderType) -> SquareSet {
        self.ray_cast(from, slider, Some(color))
    }

    /// Ray-cast coverage: empty squares plus the first blocker of either color
    pub(crate) fn slider_attacks(&self, from: Square, slider: SliderType) -> SquareSet {
        self.ray_cast(from, slider, None)
    }

    fn ray_cast(&self, from: Square, slider: SliderType, own: Option<Color>) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        for &(dr, dc) in slider.directions() {
            let mut cursor = from.offset(dr, dc);
            while let Some(sq) = cursor {
                match self.piece_at(sq) {
                    None => targets.insert(sq),
                    Some((color, _)) => {
                        if own != Some(color) {
                            targets.insert(sq);
                        }
                        break;
                    }
                }
                cursor = sq.offset(dr, dc);
            }
        }
        targets
    }

    /// First piece met walking from `from` (exclusive) in direction `(dr, dc)`
    pub(crate) fn first_blocker(&self, from: Square, (dr, dc): (isize, isize)) -> Option<(Color, Piece)> {
        let mut cursor = from.offset(dr, dc);
        while let Some(sq) = cursor {
            if let Some(occupant) = self.piece_at(sq) {
                return Some(occupant);
            }
            cursor = sq.offset(dr, dc);
        }
        None
    }
}
