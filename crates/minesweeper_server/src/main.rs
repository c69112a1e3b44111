//! Minesweeper game server.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use minesweeper_server::{AppState, GameRepository, router, run_migrations};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Minesweeper server with recorded-session replay.
#[derive(Parser, Debug)]
#[command(name = "minesweeper_server")]
#[command(about = "Minesweeper game server with recorded-session replay", long_about = None)]
#[command(version)]
struct Cli {
    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Path to the database file (created if it doesn't exist)
    #[arg(long, default_value = "minesweeper.db")]
    db_path: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    info!(db_path = %cli.db_path, "Preparing database");
    run_migrations(&cli.db_path)?;
    let repo = GameRepository::new(cli.db_path)?;

    let app = router(AppState::new(repo));

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Server ready at http://{}:{}/", cli.host, cli.port);
    axum::serve(listener, app).await?;

    Ok(())
}
