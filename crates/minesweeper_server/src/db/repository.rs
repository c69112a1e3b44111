//! Database repository for game sessions and move logs.

use diesel::prelude::*;
use minesweeper_core::{MoveResult, Outcome};
use tracing::{debug, info, instrument, warn};

use crate::db::{DbError, Game, Move, NewGame, NewMove, schema};

/// Database repository for session and move operations.
///
/// Each call opens its own connection and drops it on return — no pooling,
/// no cross-call transactions.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Creates a new repository connected to the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating GameRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Creates a new session row with outcome `playing`.
    ///
    /// The width/height/mines_count relationship is deliberately not
    /// validated here — the board bound is a client-side contract.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, game), fields(player = %game.player_name(), width = game.width(), height = game.height()))]
    pub fn create_game(&self, game: NewGame) -> Result<Game, DbError> {
        debug!("Creating game session");
        let mut conn = self.connection()?;

        let game = diesel::insert_into(schema::games::table)
            .values(&game)
            .returning(Game::as_returning())
            .get_result(&mut conn)?;

        info!(game_id = game.id(), player = %game.player_name(), "Game created");
        Ok(game)
    }

    /// Gets a session by id. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_game(&self, id: i32) -> Result<Option<Game>, DbError> {
        debug!(game_id = id, "Looking up game");
        let mut conn = self.connection()?;

        let game = schema::games::table
            .find(id)
            .first::<Game>(&mut conn)
            .optional()?;

        if game.is_none() {
            debug!(game_id = id, "Game not found");
        }

        Ok(game)
    }

    /// Lists all sessions, most recent first. Unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_games(&self) -> Result<Vec<Game>, DbError> {
        debug!("Listing all games");
        let mut conn = self.connection()?;

        let games = schema::games::table
            .order(schema::games::id.desc())
            .load::<Game>(&mut conn)?;

        info!(count = games.len(), "Games loaded");
        Ok(games)
    }

    /// Patches a session's outcome. Unguarded — last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn update_outcome(&self, id: i32, outcome: Outcome) -> Result<(), DbError> {
        debug!(game_id = id, outcome = outcome.as_str(), "Updating outcome");
        let mut conn = self.connection()?;

        diesel::update(schema::games::table.find(id))
            .set(schema::games::outcome.eq(outcome.as_str()))
            .execute(&mut conn)?;

        info!(game_id = id, outcome = outcome.as_str(), "Outcome updated");
        Ok(())
    }

    /// Appends a move to a session's log.
    ///
    /// When the recorded result is a terminal marker (`explode` or `win`),
    /// the parent session's outcome is patched on the same connection
    /// before this returns, so the patch is observable to any read issued
    /// after the append's response. Unrecognized result strings are stored
    /// as-is and never touch the outcome. `move_number` is trusted as
    /// supplied — no monotonicity or uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, mv), fields(game_id = mv.game_id(), move_number = mv.move_number(), result = %mv.result()))]
    pub fn record_move(&self, mv: NewMove) -> Result<Move, DbError> {
        debug!("Recording move");
        let mut conn = self.connection()?;

        let mv = diesel::insert_into(schema::moves::table)
            .values(&mv)
            .returning(Move::as_returning())
            .get_result(&mut conn)?;

        match MoveResult::parse(mv.result()) {
            Ok(result) => {
                if let Some(outcome) = Outcome::from_terminal(result) {
                    diesel::update(schema::games::table.find(mv.game_id()))
                        .set(schema::games::outcome.eq(outcome.as_str()))
                        .execute(&mut conn)?;
                    info!(
                        game_id = mv.game_id(),
                        outcome = outcome.as_str(),
                        "Terminal move patched session outcome"
                    );
                }
            }
            Err(_) => {
                warn!(result = %mv.result(), move_id = mv.id(), "Unrecognized result recorded as-is");
            }
        }

        info!(
            move_id = mv.id(),
            game_id = mv.game_id(),
            move_number = mv.move_number(),
            "Move recorded"
        );
        Ok(mv)
    }

    /// Gets all moves for a session, ascending by move number.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_moves(&self, game_id: i32) -> Result<Vec<Move>, DbError> {
        debug!(game_id, "Loading move log");
        let mut conn = self.connection()?;

        let moves = schema::moves::table
            .filter(schema::moves::game_id.eq(game_id))
            .order(schema::moves::move_number.asc())
            .load::<Move>(&mut conn)?;

        info!(game_id, count = moves.len(), "Moves loaded");
        Ok(moves)
    }
}
