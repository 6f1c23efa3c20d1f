//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal moves and attack coverage per piece
//! - `legality.rs` - Pins, checks and the king-exposure filter
//! - `evaluator.rs` - Check, checkmate, stalemate and missing kings
//! - `make_move.rs` - State transitions: castling, en passant, promotion
//! - `perft.rs` - Node counts against published tables
//! - `proptest.rs` - Property-based tests

mod evaluator;
mod proptest;

use crate::board::{CastleSide, CastlingRights, Color, GameBuilder, GameState, Piece, Square};

/// Builder preloaded with a FEN-style piece placement ("rnbqkbnr/pppppppp/8/...").
///
/// The first segment is rank 8, i.e. row 0.
pub(super) fn placement(layout: &str) -> GameBuilder {
    let mut builder = GameBuilder::new();
    for (row, rank) in layout.split('/').enumerate() {
        let mut col = 0;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_char(ch).expect("unknown piece character in layout");
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            builder = builder.piece(Square(row, col), color, piece);
            col += 1;
        }
    }
    builder
}

/// Castling rights from "KQkq"-style text, "-" for none
pub(super) fn rights(text: &str) -> CastlingRights {
    let mut rights = CastlingRights::none();
    for ch in text.chars() {
        match ch {
            'K' => rights.set(Color::White, CastleSide::Kingside),
            'Q' => rights.set(Color::White, CastleSide::Queenside),
            'k' => rights.set(Color::Black, CastleSide::Kingside),
            'q' => rights.set(Color::Black, CastleSide::Queenside),
            _ => {}
        }
    }
    rights
}

/// Full position: placement, side to move, castling rights, en passant target
pub(super) fn position(layout: &str, side: Color, castling: &str, en_passant: Option<&str>) -> GameState {
    let mut builder = placement(layout).side_to_move(side).castling(rights(castling));
    if let Some(target) = en_passant {
        builder = builder.en_passant(sq(target));
    }
    builder.build_state().expect("valid test position")
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square name")
}

/// Destination set as sorted algebraic names, for readable assertions
pub(super) fn names(set: crate::board::SquareSet) -> Vec<String> {
    let mut names: Vec<String> = set.iter().map(|s| s.to_string()).collect();
    names.sort();
    names
}

#[test]
fn test_placement_helper_matches_starting_position() {
    let state = position(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        Color::White,
        "KQkq",
        None,
    );
    assert_eq!(state, GameState::new());
}

#[test]
fn test_initial_position() {
    let state = GameState::new();
    let board = state.board();

    assert_eq!(board.count(Color::White), 16);
    assert_eq!(board.count(Color::Black), 16);
    for col in 0..8 {
        assert_eq!(board.piece_at(Square(1, col)), Some((Color::Black, Piece::Pawn)));
        assert_eq!(board.piece_at(Square(6, col)), Some((Color::White, Piece::Pawn)));
    }
    for row in 2..6 {
        for col in 0..8 {
            assert!(board.is_empty(Square(row, col)));
        }
    }
    assert_eq!(state.side_to_move(), Color::White);
    assert_eq!(state.castling_rights(), CastlingRights::all());
    assert_eq!(state.en_passant_target(), None);
    assert_eq!(state.king_square(Color::White), Some(sq("e1")));
    assert_eq!(state.king_square(Color::Black), Some(sq("e8")));
}

#[test]
fn test_board_display() {
    let text = GameState::new().board().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "8 | r | n | b | q | k | b | n | r |");
    assert_eq!(lines[15], "1 | R | N | B | Q | K | B | N | R |");
    assert_eq!(lines.last().copied(), Some("    a   b   c   d   e   f   g   h"));
}

#[cfg(feature = "serde")]
#[test]
fn test_state_serde_roundtrip() {
    let mut state = GameState::new();
    state.apply_move(sq("e2"), sq("e4"), None).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}
