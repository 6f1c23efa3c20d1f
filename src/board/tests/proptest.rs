//! Property-based tests using proptest.
//!
//! Each property drives a random legal playout from the initial position
//! and checks an invariant after every move.

use crate::board::{
    CastleSide, Color, GameState, GameStatus, MoveError, MoveKind, Piece, Square,
    PROMOTION_PIECES,
};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=60usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play one random legal move, picking a random promotion piece when needed.
/// Returns `None` once the side to move has no legal move.
fn random_step(state: &mut GameState, rng: &mut StdRng) -> Option<crate::board::MoveOutcome> {
    let moves = state.all_legal_moves();
    let mv = *moves.choose(rng)?;
    let promotion = PROMOTION_PIECES.choose(rng).copied();
    Some(
        state
            .apply_move(mv.from, mv.to, promotion)
            .expect("generated move must apply"),
    )
}

proptest! {
    /// Property: no generated move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_never_expose_king(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let mover = state.side_to_move();
            for mv in state.all_legal_moves() {
                prop_assert!(!state.exposes_king(mv.from, mv.to), "{} exposes the king", mv);
                let mut child = state;
                child.apply_move(mv.from, mv.to, None).unwrap();
                prop_assert!(!child.is_in_check(mover), "{} left {} in check", mv, mover);
            }
            if random_step(&mut state, &mut rng).is_none() {
                break;
            }
        }
    }

    /// Property: checkmate and stalemate never hold together, and status agrees with both
    #[test]
    fn prop_terminal_states_are_exclusive(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            for color in Color::BOTH {
                prop_assert!(!(state.is_checkmate(color) && state.is_stalemate(color)));
            }
            let side = state.side_to_move();
            match state.status() {
                GameStatus::Checkmate { winner } => {
                    prop_assert_eq!(winner, side.opponent());
                    prop_assert!(state.is_checkmate(side));
                }
                GameStatus::Stalemate(color) => {
                    prop_assert_eq!(color, side);
                    prop_assert!(state.is_stalemate(side));
                }
                GameStatus::Check(color) => prop_assert!(state.is_in_check(color)),
                GameStatus::Ongoing => prop_assert!(state.has_legal_move(side)),
                GameStatus::KingMissing(_) => prop_assert!(false, "king captured in legal play"),
            }
            if random_step(&mut state, &mut rng).is_none() {
                break;
            }
        }
    }

    /// Property: an en passant target exists only right after a double push, behind the pushed pawn
    #[test]
    fn prop_en_passant_target_follows_double_push(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let Some(outcome) = random_step(&mut state, &mut rng) else {
                break;
            };
            match outcome.kind {
                MoveKind::DoublePawnPush => {
                    let (from, to) = (outcome.mv.from, outcome.mv.to);
                    let target = Square((from.row() + to.row()) / 2, from.col());
                    prop_assert_eq!(state.en_passant_target(), Some(target));
                    prop_assert!(state.board().is_empty(target));
                }
                _ => prop_assert_eq!(state.en_passant_target(), None),
            }
        }
    }

    /// Property: castling rights are never regained
    #[test]
    fn prop_castling_rights_only_shrink(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let before = state.castling_rights();
            if random_step(&mut state, &mut rng).is_none() {
                break;
            }
            let after = state.castling_rights();
            for color in Color::BOTH {
                for side in CastleSide::BOTH {
                    prop_assert!(before.has(color, side) || !after.has(color, side));
                }
            }
        }
    }

    /// Property: no pawn ever remains on a promotion row, and each side keeps exactly one king
    #[test]
    fn prop_board_stays_well_formed(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            for color in Color::BOTH {
                let kings = state
                    .board()
                    .pieces(color)
                    .filter(|&(_, piece)| piece == Piece::King)
                    .count();
                prop_assert_eq!(kings, 1);
                for (square, piece) in state.board().pieces(color) {
                    if piece == Piece::Pawn {
                        prop_assert!(square.row() != 0 && square.row() != 7, "pawn on {}", square);
                    }
                }
            }
            if random_step(&mut state, &mut rng).is_none() {
                break;
            }
        }
    }

    /// Property: a move outside the legal set is rejected and changes nothing
    #[test]
    fn prop_illegal_moves_rejected(
        seed in seed_strategy(),
        num_moves in 0..30usize,
        from in 0..64usize,
        to in 0..64usize
    ) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            if random_step(&mut state, &mut rng).is_none() {
                break;
            }
        }

        let (from, to) = (Square::from_index(from), Square::from_index(to));
        if !state.is_legal(from, to) {
            let before = state;
            prop_assert_eq!(
                state.apply_move(from, to, None),
                Err(MoveError::IllegalMove { from, to })
            );
            prop_assert_eq!(state, before);
        }
    }

    /// Property: perft(1) equals the number of legal moves, counting each promotion choice
    #[test]
    fn prop_perft_one_counts_moves(seed in seed_strategy(), num_moves in 0..40usize) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            if random_step(&mut state, &mut rng).is_none() {
                break;
            }
        }

        let expected: u64 = state
            .all_legal_moves()
            .iter()
            .map(|mv| if state.is_promotion(mv.from, mv.to) { 4 } else { 1 })
            .sum();
        prop_assert_eq!(state.perft(1), expected);
    }
}
