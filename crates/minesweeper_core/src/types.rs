//! Domain enums shared by the board model, the storage layer, and clients.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned when a stored enum string is not a recognized value.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid {kind} value: '{value}'")]
pub struct ParseValueError {
    kind: &'static str,
    value: String,
}

impl ParseValueError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Terminal classification of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Session is still being played.
    Playing,
    /// Player opened every safe cell.
    Win,
    /// Player revealed a mine.
    Loss,
}

impl Outcome {
    /// Converts the outcome to the string stored in the database and sent
    /// over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Win => "win",
            Self::Loss => "loss",
        }
    }

    /// Parses an outcome from its stored string form.
    ///
    /// # Errors
    ///
    /// Returns [`ParseValueError`] if the string is not a valid outcome.
    #[instrument(skip(s), fields(s = %s))]
    pub fn parse(s: &str) -> Result<Self, ParseValueError> {
        match s {
            "playing" => Ok(Self::Playing),
            "win" => Ok(Self::Win),
            "loss" => Ok(Self::Loss),
            _ => Err(ParseValueError::new("outcome", s)),
        }
    }

    /// Maps a terminal move result onto the session outcome it implies.
    ///
    /// Non-terminal results map to `None` and leave the session untouched.
    pub fn from_terminal(result: MoveResult) -> Option<Self> {
        match result {
            MoveResult::Ok => None,
            MoveResult::Explode => Some(Self::Loss),
            MoveResult::Win => Some(Self::Win),
        }
    }
}

/// Result of a single recorded move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveResult {
    /// Safe cell opened, game continues.
    Ok,
    /// A mine was revealed; terminal.
    Explode,
    /// The last safe cell was opened; terminal.
    Win,
}

impl MoveResult {
    /// Converts the result to its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Explode => "explode",
            Self::Win => "win",
        }
    }

    /// Parses a move result from its wire string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseValueError`] for unrecognized values, including the
    /// `"unknown"` sentinel the API records verbatim for absent fields.
    #[instrument(skip(s), fields(s = %s))]
    pub fn parse(s: &str) -> Result<Self, ParseValueError> {
        match s {
            "ok" => Ok(Self::Ok),
            "explode" => Ok(Self::Explode),
            "win" => Ok(Self::Win),
            _ => Err(ParseValueError::new("move result", s)),
        }
    }

    /// Whether this result ends the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Explode | Self::Win)
    }
}
