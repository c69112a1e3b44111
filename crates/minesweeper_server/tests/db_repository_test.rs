//! Tests for database repository operations.

use minesweeper_core::Outcome;
use tempfile::NamedTempFile;

use minesweeper_server::{GameRepository, NewGame, NewMove, run_migrations};

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
fn setup_test_db() -> (NamedTempFile, GameRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    run_migrations(&db_path).expect("Migrations failed");

    let repo = GameRepository::new(db_path).expect("Failed to create repository");
    (db_file, repo)
}

fn new_game(player: &str, positions: &[u32]) -> NewGame {
    NewGame::new(player.to_string(), 10, 10, positions.len() as i32, positions)
}

#[test]
fn test_create_game_starts_playing() {
    let (_db, repo) = setup_test_db();
    let game = repo
        .create_game(new_game("Alice", &[1, 2, 3]))
        .expect("Create failed");
    assert!(*game.id() > 0);
    assert_eq!(game.outcome(), "playing");
    assert_eq!(game.parse_outcome().expect("Parse failed"), Outcome::Playing);
    assert_eq!(*game.width(), 10);
    assert_eq!(*game.mines_count(), 3);
}

#[test]
fn test_mine_positions_round_trip() {
    let (_db, repo) = setup_test_db();
    let created = repo
        .create_game(new_game("Bob", &[3, 7, 12]))
        .expect("Create failed");

    let fetched = repo
        .get_game(*created.id())
        .expect("Query failed")
        .expect("Game missing");
    let mut positions = fetched.mine_positions_vec().expect("Decode failed");
    positions.sort_unstable();
    assert_eq!(positions, vec![3, 7, 12]);
    // The stored blob itself is handed back untouched.
    assert_eq!(fetched.mine_positions(), created.mine_positions());
}

#[test]
fn test_get_game_not_found() {
    let (_db, repo) = setup_test_db();
    let found = repo.get_game(999_999).expect("Query failed");
    assert!(found.is_none());
}

#[test]
fn test_list_games_most_recent_first() {
    let (_db, repo) = setup_test_db();
    let first = repo
        .create_game(new_game("Alpha", &[0]))
        .expect("Create failed");
    let second = repo
        .create_game(new_game("Beta", &[0]))
        .expect("Create failed");
    let third = repo
        .create_game(new_game("Gamma", &[0]))
        .expect("Create failed");

    let games = repo.list_games().expect("List failed");
    assert_eq!(games.len(), 3);
    assert_eq!(games[0].id(), third.id());
    assert_eq!(games[1].id(), second.id());
    assert_eq!(games[2].id(), first.id());
}

#[test]
fn test_update_outcome_last_write_wins() {
    let (_db, repo) = setup_test_db();
    let game = repo
        .create_game(new_game("Carol", &[0]))
        .expect("Create failed");

    repo.update_outcome(*game.id(), Outcome::Win)
        .expect("Update failed");
    repo.update_outcome(*game.id(), Outcome::Loss)
        .expect("Update failed");

    let fetched = repo
        .get_game(*game.id())
        .expect("Query failed")
        .expect("Game missing");
    assert_eq!(fetched.outcome(), "loss");
}

#[test]
fn test_record_move_and_list_ascending() {
    let (_db, repo) = setup_test_db();
    let game = repo
        .create_game(new_game("Dave", &[5]))
        .expect("Create failed");

    // Inserted out of order; listing sorts by move number.
    for (number, x, y) in [(2, 1, 0), (1, 0, 0), (3, 2, 0)] {
        repo.record_move(NewMove::new(*game.id(), number, x, y, "ok".to_string()))
            .expect("Record failed");
    }

    let moves = repo.list_moves(*game.id()).expect("List failed");
    assert_eq!(moves.len(), 3);
    assert_eq!(*moves[0].move_number(), 1);
    assert_eq!(*moves[1].move_number(), 2);
    assert_eq!(*moves[2].move_number(), 3);
}

#[test]
fn test_non_terminal_move_keeps_outcome() {
    let (_db, repo) = setup_test_db();
    let game = repo
        .create_game(new_game("Eve", &[5]))
        .expect("Create failed");

    repo.record_move(NewMove::new(*game.id(), 1, 0, 0, "ok".to_string()))
        .expect("Record failed");

    let fetched = repo
        .get_game(*game.id())
        .expect("Query failed")
        .expect("Game missing");
    assert_eq!(fetched.outcome(), "playing");
}

#[test]
fn test_explode_move_patches_loss() {
    let (_db, repo) = setup_test_db();
    let game = repo
        .create_game(new_game("Frank", &[5]))
        .expect("Create failed");

    repo.record_move(NewMove::new(*game.id(), 1, 5, 0, "explode".to_string()))
        .expect("Record failed");

    let fetched = repo
        .get_game(*game.id())
        .expect("Query failed")
        .expect("Game missing");
    assert_eq!(fetched.outcome(), "loss");
}

#[test]
fn test_win_move_patches_win() {
    let (_db, repo) = setup_test_db();
    let game = repo
        .create_game(new_game("Grace", &[5]))
        .expect("Create failed");

    repo.record_move(NewMove::new(*game.id(), 1, 0, 0, "win".to_string()))
        .expect("Record failed");

    let fetched = repo
        .get_game(*game.id())
        .expect("Query failed")
        .expect("Game missing");
    assert_eq!(fetched.outcome(), "win");
}

#[test]
fn test_unrecognized_result_stored_verbatim() {
    let (_db, repo) = setup_test_db();
    let game = repo
        .create_game(new_game("Hank", &[5]))
        .expect("Create failed");

    let mv = repo
        .record_move(NewMove::new(*game.id(), 1, -1, -1, "unknown".to_string()))
        .expect("Record failed");
    assert_eq!(mv.result(), "unknown");
    assert!(mv.parse_result().is_err());

    let fetched = repo
        .get_game(*game.id())
        .expect("Query failed")
        .expect("Game missing");
    assert_eq!(fetched.outcome(), "playing");
}

#[test]
fn test_moves_after_terminal_are_accepted() {
    let (_db, repo) = setup_test_db();
    let game = repo
        .create_game(new_game("Ivy", &[5]))
        .expect("Create failed");

    repo.record_move(NewMove::new(*game.id(), 1, 5, 0, "explode".to_string()))
        .expect("Record failed");
    // Nothing rejects a move recorded after the terminal one; a
    // non-terminal result leaves the outcome alone.
    repo.record_move(NewMove::new(*game.id(), 2, 0, 0, "ok".to_string()))
        .expect("Record failed");

    let moves = repo.list_moves(*game.id()).expect("List failed");
    assert_eq!(moves.len(), 2);
    let fetched = repo
        .get_game(*game.id())
        .expect("Query failed")
        .expect("Game missing");
    assert_eq!(fetched.outcome(), "loss");
}
