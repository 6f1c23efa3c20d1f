//! Check, checkmate, stalemate and game status tests.

use super::{position, sq};
use crate::board::{Color, GameState, GameStatus, Square};

#[test]
fn test_initial_position_is_ongoing() {
    let state = GameState::new();
    assert!(!state.is_in_check(Color::White));
    assert!(!state.is_in_check(Color::Black));
    assert!(!state.is_checkmate(Color::White));
    assert!(!state.is_stalemate(Color::White));
    assert_eq!(state.status(), GameStatus::Ongoing);
    assert!(!state.status().is_over());
}

#[test]
fn test_check_is_reported_for_side_to_move() {
    let state = position("4k3/8/8/8/8/8/8/4R1K1", Color::Black, "-", None);
    assert!(state.is_in_check(Color::Black));
    assert!(!state.is_in_check(Color::White));
    assert!(!state.is_checkmate(Color::Black));
    assert_eq!(state.status(), GameStatus::Check(Color::Black));
}

#[test]
fn test_fools_mate() {
    let state = position(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR",
        Color::White,
        "KQkq",
        None,
    );
    assert!(state.is_in_check(Color::White));
    assert!(state.is_checkmate(Color::White));
    assert!(!state.is_stalemate(Color::White));
    for (from, _) in state.board().pieces(Color::White) {
        assert!(state.legal_moves(from).is_empty(), "{from} should be frozen");
    }
    assert_eq!(
        state.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(state.status().winner(), Some(Color::Black));
}

#[test]
fn test_back_rank_mate() {
    let state = position("3R2k1/5ppp/8/8/8/8/8/6K1", Color::Black, "-", None);
    assert!(state.is_checkmate(Color::Black));
    assert!(state.all_legal_moves().is_empty());
    assert_eq!(
        state.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_back_rank_check_with_escape_is_not_mate() {
    // h7 pawn advanced: the king gets air on h7
    let state = position("3R2k1/5pp1/7p/8/8/8/8/6K1", Color::Black, "-", None);
    assert!(state.is_in_check(Color::Black));
    assert!(!state.is_checkmate(Color::Black));
    assert_eq!(state.legal_moves(sq("g8")).iter().collect::<Vec<_>>(), [sq("h7")]);
}

#[test]
fn test_queen_stalemate() {
    let state = position("k7/8/1Q6/8/8/8/8/7K", Color::Black, "-", None);
    assert!(!state.is_in_check(Color::Black));
    assert!(state.is_stalemate(Color::Black));
    assert!(!state.is_checkmate(Color::Black));
    assert!(!state.is_stalemate(Color::White));
    assert_eq!(state.status(), GameStatus::Stalemate(Color::Black));
    assert!(state.status().is_over());
    assert_eq!(state.status().winner(), None);
}

#[test]
fn test_stalemate_with_blocked_pawn() {
    // Black king boxed in by the queen, the only pawn is blocked
    let state = position("k7/8/1Q6/8/8/p7/P7/7K", Color::Black, "-", None);
    assert!(state.pseudo_legal_moves(sq("a3")).is_empty());
    assert_eq!(state.status(), GameStatus::Stalemate(Color::Black));
}

#[test]
fn test_no_stalemate_when_another_piece_can_move() {
    let state = position("k7/8/1Q6/8/8/8/7p/K7", Color::Black, "-", None);
    assert!(!state.is_stalemate(Color::Black));
    assert_eq!(state.status(), GameStatus::Ongoing);
}

#[test]
fn test_missing_king_is_never_check_mate_or_stalemate() {
    let state = position("r7/8/8/8/8/8/8/4K3", Color::Black, "-", None);
    assert_eq!(state.king_square(Color::Black), None);
    assert!(!state.is_in_check(Color::Black));
    assert!(!state.is_checkmate(Color::Black));
    assert!(!state.is_stalemate(Color::Black));
    assert_eq!(state.status(), GameStatus::KingMissing(Color::Black));
    assert_eq!(state.status().winner(), Some(Color::White));
}

#[test]
fn test_missing_king_of_side_not_to_move() {
    let state = position("8/8/8/8/8/8/8/4K3", Color::White, "-", None);
    assert_eq!(state.status(), GameStatus::KingMissing(Color::Black));
    assert!(state.has_legal_move(Color::White));
}

#[test]
fn test_empty_board_has_no_checks() {
    let state = position("8/8/8/8/8/8/8/8", Color::White, "-", None);
    for color in Color::BOTH {
        assert!(!state.is_in_check(color));
        assert!(!state.is_checkmate(color));
        assert!(!state.is_stalemate(color));
        assert!(!state.has_legal_move(color));
    }
    assert_eq!(state.status(), GameStatus::KingMissing(Color::White));
}

#[test]
fn test_check_query_is_independent_of_turn() {
    // White queen checks the black king, but it is White's turn
    let state = position("4k3/8/8/8/8/8/8/4QK2", Color::White, "-", None);
    assert!(state.is_in_check(Color::Black));
    assert_eq!(state.king_square(Color::Black), Some(Square(0, 4)));
    assert_eq!(state.status(), GameStatus::Ongoing);
}
