//! Database persistence layer for game sessions and move logs.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

use diesel::Connection;
use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{info, instrument};

pub use error::DbError;
pub use models::{Game, Move, NewGame, NewMove};
pub use repository::GameRepository;

/// Embedded schema migrations, applied at startup.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies any pending schema migrations to the database at `db_path`.
///
/// Idempotent — the create-if-missing step run once when the server boots.
///
/// # Errors
///
/// Returns [`DbError`] if the database cannot be opened or a migration
/// fails to apply.
#[instrument(skip(db_path), fields(db_path = %db_path))]
pub fn run_migrations(db_path: &str) -> Result<(), DbError> {
    let mut conn = SqliteConnection::establish(db_path)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::new(format!("Migration error: {}", e)))?;
    info!(count = applied.len(), "Migrations applied");
    Ok(())
}
