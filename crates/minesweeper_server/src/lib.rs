//! Minesweeper persistence backend.
//!
//! Records completed game sessions and their move histories for later
//! replay. Sessions carry the client-generated board configuration (the
//! mine layout travels as a serialized position list and is stored
//! verbatim); moves are an append-only log per session, and a terminal
//! move patches the session outcome atomically with the append.
//!
//! # Architecture
//!
//! - **db**: diesel/SQLite repository — `games` and `moves` tables, one
//!   connection per operation, embedded migrations.
//! - **api**: axum router exposing session/move CRUD plus the embedded
//!   browser client page. The client is trusted on move content; that
//!   boundary is isolated behind [`MoveValidator`].
//!
//! # Example
//!
//! ```no_run
//! use minesweeper_server::{AppState, GameRepository, router, run_migrations};
//!
//! # fn example() -> anyhow::Result<()> {
//! run_migrations("minesweeper.db")?;
//! let repo = GameRepository::new("minesweeper.db".to_string())?;
//! let app = router(AppState::new(repo));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod db;
mod pages;

// Crate-level exports - HTTP surface
pub use api::{
    ApiError, AppState, CreateGameBody, CreatedBody, ErrorBody, GameBody, GameDetailBody, MoveBody,
    MoveValidator, StatusBody, StepBody, TrustingValidator, router,
};

// Crate-level exports - persistence
pub use db::{DbError, Game, GameRepository, Move, NewGame, NewMove, run_migrations};
