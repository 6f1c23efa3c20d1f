use once_cell::sync::Lazy;

use super::{Square, SquareSet};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = KING_OFFSETS;

fn jump_table(offsets: &[(isize, isize)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for sq in Square::all() {
        table[sq.as_index()] = offsets
            .iter()
            .filter_map(|&(dr, dc)| sq.offset(dr, dc))
            .collect();
    }
    table
}

/// Squares a knight on each square reaches on an empty board
pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| jump_table(&KNIGHT_OFFSETS));

/// Squares adjacent to each square
pub(crate) static KING_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| jump_table(&KING_OFFSETS));

#[inline]
fn jump_targets(table: &[SquareSet; 64], sq: Square) -> SquareSet {
    if sq.is_on_board() {
        table[sq.as_index()]
    } else {
        SquareSet::EMPTY
    }
}

#[inline]
pub(crate) fn knight_targets(sq: Square) -> SquareSet {
    jump_targets(&KNIGHT_TARGETS, sq)
}

#[inline]
pub(crate) fn king_targets(sq: Square) -> SquareSet {
    jump_targets(&KING_TARGETS, sq)
}
