//! JSON request and response bodies for the HTTP surface.
//!
//! Absent request fields are silently defaulted rather than rejected:
//! dimensions and mine count fall back to 10, coordinates to the `-1`
//! sentinel, the move result to `"unknown"`. The TUI client deserializes
//! the same response types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::db::{Game, Move};

fn default_dimension() -> i32 {
    10
}

fn default_coordinate() -> i32 {
    -1
}

fn default_result() -> String {
    "unknown".to_string()
}

/// Body of `POST /games`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameBody {
    /// Player display name; may be empty.
    #[serde(default)]
    pub player_name: String,
    /// Board width in cells.
    #[serde(default = "default_dimension")]
    pub width: i32,
    /// Board height in cells.
    #[serde(default = "default_dimension")]
    pub height: i32,
    /// Declared mine count. Not checked against `mine_positions` — the
    /// board bound is a client-side contract.
    #[serde(default = "default_dimension")]
    pub mines_count: i32,
    /// Mine cell indices (`y*width + x`).
    #[serde(default)]
    pub mine_positions: Vec<u32>,
}

/// Body of `POST /step/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepBody {
    /// Client-assigned sequence number, trusted as-is.
    #[serde(default)]
    pub move_number: i32,
    /// Target cell x coordinate.
    #[serde(default = "default_coordinate")]
    pub x: i32,
    /// Target cell y coordinate.
    #[serde(default = "default_coordinate")]
    pub y: i32,
    /// Move result string; `explode` and `win` are terminal markers.
    #[serde(default = "default_result")]
    pub result: String,
}

/// Session record as returned by `GET /games` and embedded in the detail
/// response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameBody {
    /// Session id.
    pub id: i32,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Player display name.
    pub player_name: String,
    /// Board width in cells.
    pub width: i32,
    /// Board height in cells.
    pub height: i32,
    /// Declared mine count.
    pub mines_count: i32,
    /// Serialized mine position list, returned verbatim as stored.
    pub mine_positions: String,
    /// Session outcome: `playing`, `win`, or `loss`.
    pub outcome: String,
}

impl From<&Game> for GameBody {
    fn from(game: &Game) -> Self {
        Self {
            id: *game.id(),
            created_at: *game.created_at(),
            player_name: game.player_name().clone(),
            width: *game.width(),
            height: *game.height(),
            mines_count: *game.mines_count(),
            mine_positions: game.mine_positions().clone(),
            outcome: game.outcome().clone(),
        }
    }
}

/// Session with its embedded move log (`GET /games/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDetailBody {
    /// The session record.
    #[serde(flatten)]
    pub game: GameBody,
    /// Recorded moves, ascending by move number.
    pub moves: Vec<MoveBody>,
}

/// One recorded move in a detail response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveBody {
    /// Move row id.
    pub id: i32,
    /// Client-assigned sequence number.
    pub move_number: i32,
    /// Target cell x coordinate.
    pub x: i32,
    /// Target cell y coordinate.
    pub y: i32,
    /// Recorded result string.
    pub result: String,
}

impl From<&Move> for MoveBody {
    fn from(mv: &Move) -> Self {
        Self {
            id: *mv.id(),
            move_number: *mv.move_number(),
            x: *mv.x(),
            y: *mv.y(),
            result: mv.result().clone(),
        }
    }
}

/// Response to `POST /games`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedBody {
    /// Id of the created session.
    pub id: i32,
}

/// Response to `POST /step/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBody {
    /// Always `"ok"` on success.
    pub status: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}
