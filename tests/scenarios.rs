//! Fixed move sequences played against a fresh engine, checking placements,
//! turn handling and the final outcome.

use piezas::game::{GameEngine, Piece, Player};
use piezas::script::play_moves;

fn played(moves: &[i32]) -> GameEngine {
    let mut engine = GameEngine::new();
    play_moves(&mut engine, moves);
    engine
}

#[test]
fn test_fresh_board_is_blank() {
    let mut engine = played(&[0, 1, 2, 3, 0]);
    engine.reset();
    for row in 0..3 {
        for col in 0..4 {
            assert_eq!(engine.piece_at(row, col), Piece::Blank);
        }
    }
    assert_eq!(engine.drop_piece(1), Piece::X);
}

#[test]
fn test_first_drop_is_x_at_bottom() {
    let mut engine = GameEngine::new();
    let piece = engine.drop_piece(0);
    assert_eq!(piece, Piece::X);
    assert_eq!(engine.piece_at(0, 0), piece);
}

#[test]
fn test_second_drop_stacks_o() {
    let mut engine = GameEngine::new();
    engine.drop_piece(0);
    let piece = engine.drop_piece(0);
    assert_eq!(piece, Piece::O);
    assert_eq!(engine.piece_at(1, 0), piece);
}

#[test]
fn test_overfilled_column_loses_turn() {
    let mut engine = played(&[0, 0, 0]);
    let before = *engine.board();

    assert_eq!(engine.drop_piece(0), Piece::Blank);
    assert_eq!(*engine.board(), before);
    assert_eq!(engine.current_player(), Player::X);
    // X moves next because O spent the turn on the full column
    assert_eq!(engine.drop_piece(1), Piece::X);
}

#[test]
fn test_every_column_top_rejects() {
    for col in 0..4 {
        let mut engine = GameEngine::new();
        for _ in 0..3 {
            assert!(engine.drop_piece(col).is_player());
        }
        assert_eq!(engine.drop_piece(col), Piece::Blank);
    }
}

#[test]
fn test_out_of_bounds_drops() {
    let mut engine = GameEngine::new();
    for col in [-5, -1, 4, 100] {
        assert_eq!(engine.drop_piece(col), Piece::Invalid);
    }
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.legal_columns().len(), 4);
}

#[test]
fn test_turn_skip_fills_columns_alike() {
    // Four drops per column: the fourth is rejected and costs O its turn, so
    // every column ends up X, O, X from the bottom.
    let moves: Vec<i32> = (0..4).flat_map(|col| [col; 4]).collect();
    let engine = played(&moves);
    for col in 0..4 {
        assert_eq!(engine.piece_at(0, col), Piece::X);
        assert_eq!(engine.piece_at(1, col), Piece::O);
        assert_eq!(engine.piece_at(2, col), Piece::X);
    }
    // Both sides have a full-width row
    assert_eq!(engine.game_state(), Piece::Blank);
}

#[test]
fn test_leading_invalid_drop_swaps_colours() {
    let mut moves = vec![-1];
    moves.extend((0..4).flat_map(|col| [col; 4]));
    let engine = played(&moves);
    assert_eq!(engine.piece_at(0, 0), Piece::O);
    assert_eq!(engine.piece_at(1, 3), Piece::X);
    assert_eq!(engine.game_state(), Piece::Blank);
}

#[test]
fn test_not_over_with_blank_cells() {
    assert_eq!(GameEngine::new().game_state(), Piece::Invalid);
    // X already holds the whole bottom row
    let engine = played(&[0, 0, 1, 0, 2, 1, 3]);
    assert_eq!(engine.game_state(), Piece::Invalid);
}

#[test]
fn test_x_wins_with_bottom_row() {
    // 2 [O|O|X|O]
    // 1 [O|O|X|O]
    // 0 [X|X|X|X]
    let engine = played(&[0, 0, 1, 0, 2, 1, 3, 1, 2, 3, 2, 3]);
    assert_eq!(engine.game_state(), Piece::X);
}

#[test]
fn test_x_wins_with_column() {
    // 2 [X|X|O|O]
    // 1 [X|O|O|X]
    // 0 [X|O|X|O]
    let engine = played(&[0, 1, 0, 3, 0, 1, 2, 2, 3, 3, 1, 2]);
    assert_eq!(engine.piece_at(2, 0), Piece::X);
    assert_eq!(engine.game_state(), Piece::X);
}

#[test]
fn test_o_wins_with_row() {
    // 2 [X|X|O|X]
    // 1 [O|O|O|O]
    // 0 [X|X|X|O]
    let engine = played(&[0, 3, 1, 0, 2, 1, 0, 2, 1, 3, 3, 2]);
    assert_eq!(engine.game_state(), Piece::O);
}

#[test]
fn test_o_wins_with_column() {
    // 2 [O|X|X|O]
    // 1 [X|O|X|O]
    // 0 [X|X|O|O]
    let engine = played(&[0, 3, 1, 3, 0, 1, 1, 2, 2, 3, 2, 0]);
    assert_eq!(engine.game_state(), Piece::O);
}

#[test]
fn test_checkerboard_draw() {
    let moves: Vec<i32> = (0..4).flat_map(|col| [col; 3]).collect();
    let engine = played(&moves);
    for row in 0..3 {
        for col in 0..4 {
            let expected = if (row + col) % 2 == 0 { Piece::X } else { Piece::O };
            assert_eq!(engine.piece_at(row, col), expected);
        }
    }
    assert_eq!(engine.game_state(), Piece::Blank);
}

#[test]
fn test_column_tie() {
    // 2 [X|X|O|O]
    // 1 [X|X|O|O]
    // 0 [X|X|O|O]
    let engine = played(&[0, 2, 0, 2, 0, 2, 1, 3, 1, 3, 1, 3]);
    assert_eq!(engine.piece_at(2, 0), Piece::X);
    assert_eq!(engine.piece_at(2, 3), Piece::O);
    assert_eq!(engine.game_state(), Piece::Blank);
}
