//! Database models for recorded game sessions and their move logs.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use minesweeper_core::{MoveResult, Outcome};
use tracing::instrument;

use crate::db::{DbError, schema};

/// Recorded game session database model.
///
/// `mine_positions` holds the serialized JSON array exactly as the client
/// sent it; reads hand it back verbatim.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::games)]
pub struct Game {
    id: i32,
    created_at: NaiveDateTime,
    player_name: String,
    width: i32,
    height: i32,
    mines_count: i32,
    mine_positions: String,
    outcome: String,
}

impl Game {
    /// Parses the stored outcome string into an [`Outcome`] enum.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn parse_outcome(&self) -> Result<Outcome, DbError> {
        Outcome::parse(self.outcome()).map_err(|e| DbError::new(e.to_string()))
    }

    /// Decodes the serialized mine position list.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the stored blob is not a JSON integer array.
    #[instrument(skip(self))]
    pub fn mine_positions_vec(&self) -> Result<Vec<u32>, DbError> {
        serde_json::from_str(self.mine_positions())
            .map_err(|e| DbError::new(format!("Invalid mine_positions: {}", e)))
    }
}

/// Insertable game model for creating new sessions.
#[derive(Debug, Clone, Insertable, Getters)]
#[diesel(table_name = schema::games)]
pub struct NewGame {
    player_name: String,
    width: i32,
    height: i32,
    mines_count: i32,
    mine_positions: String,
    outcome: String,
}

impl NewGame {
    /// Builds an insertable session with outcome `playing`, serializing the
    /// position list to the stored JSON form.
    #[instrument(skip(mine_positions), fields(mines = mine_positions.len()))]
    pub fn new(
        player_name: String,
        width: i32,
        height: i32,
        mines_count: i32,
        mine_positions: &[u32],
    ) -> Self {
        Self {
            player_name,
            width,
            height,
            mines_count,
            mine_positions: serde_json::to_string(mine_positions)
                .unwrap_or_else(|_| "[]".to_string()),
            outcome: Outcome::Playing.as_str().to_string(),
        }
    }
}

/// Recorded move database model.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable, Getters)]
#[diesel(table_name = schema::moves)]
#[diesel(belongs_to(Game))]
pub struct Move {
    id: i32,
    game_id: i32,
    move_number: i32,
    x: i32,
    y: i32,
    result: String,
}

impl Move {
    /// Parses the stored result string into a [`MoveResult`] enum.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] for unrecognized values — including the
    /// `"unknown"` sentinel, which is stored as-is but carries no meaning.
    #[instrument(skip(self), fields(result = %self.result))]
    pub fn parse_result(&self) -> Result<MoveResult, DbError> {
        MoveResult::parse(self.result()).map_err(|e| DbError::new(e.to_string()))
    }
}

/// Insertable move model for appending to a session's log.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::moves)]
pub struct NewMove {
    game_id: i32,
    move_number: i32,
    x: i32,
    y: i32,
    result: String,
}
