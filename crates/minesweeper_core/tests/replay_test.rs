//! Tests for replay reconstruction from a recorded move log.

use minesweeper_core::{MineField, RecordedMove, Replay};

fn mv(move_number: i32, x: i32, y: i32) -> RecordedMove {
    RecordedMove { move_number, x, y }
}

#[test]
fn test_replay_reapplies_moves_in_order() {
    let field = MineField::from_positions(3, 3, [8]).expect("Rebuild failed");
    let mut replay = Replay::new(field, vec![mv(1, 0, 0), mv(2, 1, 2)]);

    assert!(!replay.is_finished());
    let first = replay.step().expect("First move");
    assert_eq!(first.move_number, 1);
    assert!(replay.board().is_opened(0, 0));
    assert!(!replay.board().is_opened(1, 2));

    let second = replay.step().expect("Second move");
    assert_eq!(second.move_number, 2);
    assert!(replay.board().is_opened(1, 2));

    assert!(replay.is_finished());
    assert!(replay.step().is_none());
}

#[test]
fn test_replay_without_moves_finishes_immediately() {
    let field = MineField::from_positions(3, 3, [0]).expect("Rebuild failed");
    let mut replay = Replay::new(field, Vec::new());
    assert!(replay.is_finished());
    assert!(replay.step().is_none());
}

#[test]
fn test_replay_skips_sentinel_coordinates() {
    let field = MineField::from_positions(3, 3, [8]).expect("Rebuild failed");
    let mut replay = Replay::new(field, vec![mv(1, -1, -1), mv(2, 0, 0)]);
    replay.step();
    assert_eq!(replay.board().opened_count(), 0, "Sentinel move is a no-op");
    replay.step();
    assert!(replay.board().is_opened(0, 0));
}

#[test]
fn test_replay_reproduces_terminal_explosion() {
    let field = MineField::from_positions(3, 3, [4]).expect("Rebuild failed");
    let moves = vec![mv(1, 0, 0), mv(2, 1, 1)];
    let board = Replay::new(field, moves).run_to_end();
    assert_eq!(board.exploded(), Some(4));
}

#[test]
fn test_replay_is_deterministic() {
    let field = MineField::from_positions(4, 4, [5, 10]).expect("Rebuild failed");
    let moves = vec![mv(1, 0, 0), mv(2, 3, 3), mv(3, 0, 3)];
    let a = Replay::new(field.clone(), moves.clone()).run_to_end();
    let b = Replay::new(field, moves).run_to_end();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(a.is_opened(x, y), b.is_opened(x, y));
        }
    }
    assert_eq!(a.opened_count(), b.opened_count());
    assert_eq!(a.exploded(), b.exploded());
}
