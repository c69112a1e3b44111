//! Terminal client for the minesweeper server.

#![warn(missing_docs)]

mod client;
mod controller;
mod screen;
mod screens;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use client::ApiClient;
use controller::GameController;

/// Minesweeper terminal client.
#[derive(Parser, Debug)]
#[command(name = "minesweeper_tui")]
#[command(about = "Play minesweeper and replay recorded sessions", long_about = None)]
#[command(version)]
struct Cli {
    /// Game server URL
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(server_url = %cli.server_url, "Starting minesweeper TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = GameController::new(ApiClient::new(cli.server_url));
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}
