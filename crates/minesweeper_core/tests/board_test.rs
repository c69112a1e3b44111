//! Tests for mine layout generation and board reveal logic.

use minesweeper_core::{BoardError, BoardState, MineField, Reveal};

#[test]
fn test_generate_unique_in_range() {
    for &(w, h, m) in &[(10u32, 10u32, 10u32), (5, 8, 12), (3, 3, 8)] {
        let field = MineField::generate(w, h, m).expect("Generation failed");
        let positions = field.positions();
        assert_eq!(positions.len(), m as usize, "Exactly m mines");
        assert!(positions.iter().all(|&p| p < w * h), "All indices in range");
        // BTreeSet backing guarantees uniqueness, but check the count anyway
        let mut deduped = positions.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), positions.len());
    }
}

#[test]
fn test_generate_rejects_full_board() {
    let result = MineField::generate(4, 4, 16);
    assert!(matches!(result, Err(BoardError::TooManyMines { .. })));
    let result = MineField::generate(4, 4, 100);
    assert!(matches!(result, Err(BoardError::TooManyMines { .. })));
}

#[test]
fn test_generate_rejects_zero_dimension() {
    assert!(matches!(
        MineField::generate(0, 5, 1),
        Err(BoardError::EmptyBoard { .. })
    ));
}

#[test]
fn test_from_positions_round_trip() {
    let field = MineField::from_positions(5, 5, [3, 7, 12]).expect("Rebuild failed");
    assert_eq!(field.positions(), vec![3, 7, 12]);
    assert_eq!(field.mines_count(), 3);
    assert!(field.is_mine(3, 0)); // index 3
    assert!(field.is_mine(2, 1)); // index 7
    assert!(field.is_mine(2, 2)); // index 12
}

#[test]
fn test_from_positions_rejects_out_of_range() {
    let result = MineField::from_positions(5, 5, [3, 25]);
    assert!(matches!(
        result,
        Err(BoardError::IndexOutOfRange { index: 25, .. })
    ));
}

#[test]
fn test_adjacency_clipped_at_corner() {
    // 3x3 board, mines everywhere except the top-left corner itself.
    let mines: Vec<u32> = (1..9).collect();
    let field = MineField::from_positions(3, 3, mines).expect("Rebuild failed");
    // Corner sees only its 3 in-bounds neighbors.
    assert_eq!(field.adjacent_mines(0, 0), 3);
    // Center sees all 8.
    assert!(field.is_mine(1, 1));
    let field = MineField::from_positions(3, 3, [0, 1, 2, 3, 5, 6, 7, 8]).expect("Rebuild failed");
    assert_eq!(field.adjacent_mines(1, 1), 8);
}

#[test]
fn test_adjacency_never_counts_outside_board() {
    // Single mine at the far corner of a 2x2 board.
    let field = MineField::from_positions(2, 2, [3]).expect("Rebuild failed");
    assert_eq!(field.adjacent_mines(0, 0), 1);
    assert_eq!(field.adjacent_mines(1, 0), 1);
    assert_eq!(field.adjacent_mines(0, 1), 1);
}

#[test]
fn test_reveal_mine_explodes() {
    let field = MineField::from_positions(3, 3, [4]).expect("Rebuild failed");
    let mut board = BoardState::new(field);
    assert_eq!(board.reveal(1, 1), Reveal::Exploded);
    assert_eq!(board.exploded(), Some(4));
    // Terminal board ignores further reveals.
    assert_eq!(board.reveal(0, 0), Reveal::Ignored);
}

#[test]
fn test_flood_fill_opens_bounded_region() {
    // 4x4 with a single mine in the far corner: revealing the opposite
    // corner flood-fills every safe cell (the zero region reaches the
    // numbered fringe around the mine).
    let field = MineField::from_positions(4, 4, [15]).expect("Rebuild failed");
    let mut board = BoardState::new(field);
    match board.reveal(0, 0) {
        Reveal::Opened { newly_opened } => assert_eq!(newly_opened, 15),
        other => panic!("Expected flood fill, got {other:?}"),
    }
    assert!(board.is_won());
    assert!(!board.is_opened(3, 3), "Mine must never be opened");
}

#[test]
fn test_flood_fill_stops_at_numbered_cells() {
    // 5x1 strip with a mine at the right end: cells 0..2 are zero-adjacency,
    // cell 3 is the numbered fringe, the mine itself stays closed.
    let field = MineField::from_positions(5, 1, [4]).expect("Rebuild failed");
    let mut board = BoardState::new(field);
    match board.reveal(0, 0) {
        Reveal::Opened { newly_opened } => assert_eq!(newly_opened, 4),
        other => panic!("Expected flood fill, got {other:?}"),
    }
    assert_eq!(board.adjacency(3, 0), 1);
    assert!(!board.is_opened(4, 0));
}

#[test]
fn test_no_cell_opened_twice() {
    let field = MineField::from_positions(4, 4, [15]).expect("Rebuild failed");
    let mut board = BoardState::new(field);
    board.reveal(0, 0);
    let count = board.opened_count();
    // Re-revealing an opened cell is a no-op.
    assert_eq!(board.reveal(0, 0), Reveal::Ignored);
    assert_eq!(board.reveal(1, 1), Reveal::Ignored);
    assert_eq!(board.opened_count(), count);
}

#[test]
fn test_win_triggers_exactly_at_threshold() {
    // 2x2 with one mine: three safe cells, none adjacent-zero (every safe
    // cell touches the mine), so each reveal opens exactly one cell.
    let field = MineField::from_positions(2, 2, [3]).expect("Rebuild failed");
    let mut board = BoardState::new(field);
    assert!(!board.is_won());
    board.reveal(0, 0);
    assert!(!board.is_won(), "Not won before the threshold");
    board.reveal(1, 0);
    assert!(!board.is_won(), "Not won before the threshold");
    board.reveal(0, 1);
    assert!(board.is_won(), "Won exactly at safe_cells opened");
}

#[test]
fn test_lost_board_is_not_won() {
    let field = MineField::from_positions(2, 2, [3]).expect("Rebuild failed");
    let mut board = BoardState::new(field);
    board.reveal(0, 0);
    board.reveal(1, 0);
    board.reveal(0, 1);
    assert!(board.is_won());
    let mut lost = BoardState::new(MineField::from_positions(2, 2, [3]).expect("Rebuild failed"));
    lost.reveal(1, 1);
    assert!(!lost.is_won());
}
