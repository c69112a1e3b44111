//! Controller — the state machine driving the multi-screen client.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use minesweeper_core::{BoardState, MineField, RecordedMove, Replay};
use minesweeper_server::CreateGameBody;
use ratatui::{Terminal, backend::Backend};
use tracing::{error, info, instrument, warn};

use crate::client::ApiClient;
use crate::screen::{GameConfig, Screen, ScreenTransition};
use crate::screens::{GamesListScreen, InGameScreen, MenuScreen, NewGameScreen, ReplayScreen};

/// Active screen in the client state machine.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MenuScreen),
    NewGame(NewGameScreen),
    GamesList(GamesListScreen),
    InGame(InGameScreen),
    Replay(ReplayScreen),
}

/// Controller that drives the screen state machine.
///
/// Call [`GameController::run`] to start the event loop. All network work
/// happens here, triggered by the transitions screens return; screens
/// themselves stay synchronous.
#[derive(Debug)]
pub struct GameController {
    client: ApiClient,
}

impl GameController {
    /// Creates a controller talking to the given server.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Runs the client event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting client event loop");

        let mut screen = ActiveScreen::Menu(MenuScreen::new());

        loop {
            // Advance any in-progress replay before drawing.
            if let ActiveScreen::Replay(s) = &mut screen {
                s.tick(Instant::now());
            }

            terminal.draw(|f| match &screen {
                ActiveScreen::Menu(s) => s.render(f),
                ActiveScreen::NewGame(s) => s.render(f),
                ActiveScreen::GamesList(s) => s.render(f),
                ActiveScreen::InGame(s) => s.render(f),
                ActiveScreen::Replay(s) => s.render(f),
            })?;

            // Poll with a short timeout so the replay cadence stays smooth.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::Menu(s) => s.handle_key(key),
                    ActiveScreen::NewGame(s) => s.handle_key(key),
                    ActiveScreen::GamesList(s) => s.handle_key(key),
                    ActiveScreen::InGame(s) => s.handle_key(key),
                    ActiveScreen::Replay(s) => s.handle_key(key),
                };

                // Stream any moves the play screen queued. Failures are
                // logged and the game continues locally.
                if let ActiveScreen::InGame(s) = &mut screen {
                    let game_id = s.game_id();
                    for step in s.take_pending() {
                        if let Err(e) = self.client.record_step(game_id, &step).await {
                            warn!(error = %e, game_id, "Failed to record move");
                        }
                    }
                }

                // Leaving the replay screen must clear its pending timer.
                if !matches!(transition, ScreenTransition::Stay)
                    && let ActiveScreen::Replay(s) = &mut screen
                {
                    s.stop();
                }

                match transition {
                    ScreenTransition::Stay => {}
                    ScreenTransition::GoToMenu => {
                        screen = ActiveScreen::Menu(MenuScreen::new());
                    }
                    ScreenTransition::GoToNewGame => {
                        screen = ActiveScreen::NewGame(NewGameScreen::new());
                    }
                    ScreenTransition::GoToGamesList => {
                        screen = ActiveScreen::GamesList(self.load_games_list().await);
                    }
                    ScreenTransition::StartGame(config) => {
                        match self.start_game(&config).await {
                            Ok(in_game) => screen = ActiveScreen::InGame(in_game),
                            Err(e) => {
                                warn!(error = %e, "Failed to start game");
                                if let ActiveScreen::NewGame(form) = &mut screen {
                                    form.set_error(format!("Server error: {e}"));
                                }
                            }
                        }
                    }
                    ScreenTransition::StartReplay { game_id } => {
                        match self.load_replay(game_id).await {
                            Ok(replay) => screen = ActiveScreen::Replay(replay),
                            // Replay failures are logged only, never surfaced.
                            Err(e) => error!(error = %e, game_id, "Failed to load replay"),
                        }
                    }
                    ScreenTransition::Quit => {
                        info!("Quitting");
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Generates the mine layout locally, creates the session, and builds
    /// the play screen.
    #[instrument(skip(self, config), fields(size = config.size, mines = config.mines))]
    async fn start_game(&self, config: &GameConfig) -> Result<InGameScreen> {
        let field = MineField::generate(config.size, config.size, config.mines)?;
        let body = CreateGameBody {
            player_name: config.player_name.clone(),
            width: config.size as i32,
            height: config.size as i32,
            mines_count: config.mines as i32,
            mine_positions: field.positions(),
        };
        let game_id = self.client.create_game(&body).await?;
        Ok(InGameScreen::new(
            game_id,
            config.player_name.clone(),
            BoardState::new(field),
        ))
    }

    /// Fetches the games list; a network failure becomes an inline message.
    async fn load_games_list(&self) -> GamesListScreen {
        match self.client.list_games().await {
            Ok(games) => GamesListScreen::new(games),
            Err(e) => {
                warn!(error = %e, "Failed to fetch games list");
                GamesListScreen::with_error("Network error".to_string())
            }
        }
    }

    /// Fetches a recorded session and rebuilds its board purely from the
    /// stored dimensions and mine positions.
    #[instrument(skip(self))]
    async fn load_replay(&self, game_id: i32) -> Result<ReplayScreen> {
        let detail = self.client.get_game(game_id).await?;
        let width = u32::try_from(detail.game.width)?;
        let height = u32::try_from(detail.game.height)?;
        let positions: Vec<u32> = serde_json::from_str(&detail.game.mine_positions)?;
        let field = MineField::from_positions(width, height, positions)?;
        let moves = detail
            .moves
            .iter()
            .map(|mv| RecordedMove {
                move_number: mv.move_number,
                x: mv.x,
                y: mv.y,
            })
            .collect();
        info!(game_id, "Replay loaded");
        Ok(ReplayScreen::new(
            detail.game,
            Replay::new(field, moves),
            Instant::now(),
        ))
    }
}
