//! HTTP client for the minesweeper server's REST API.

use anyhow::Result;
use minesweeper_server::{CreateGameBody, CreatedBody, GameBody, GameDetailBody, StepBody};
use tracing::{debug, info, instrument};

/// Typed HTTP game client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Creates a client against the given base URL (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Creates a session from a client-generated board configuration and
    /// returns its id.
    #[instrument(skip(self, body), fields(player = %body.player_name, width = body.width))]
    pub async fn create_game(&self, body: &CreateGameBody) -> Result<i32> {
        debug!("Creating game session");
        let response = self
            .client
            .post(format!("{}/games", self.base_url))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Create failed: HTTP {}", response.status());
        }

        let created: CreatedBody = response.json().await?;
        info!(game_id = created.id, "Game session created");
        Ok(created.id)
    }

    /// Streams one move to the session's log.
    #[instrument(skip(self, step), fields(move_number = step.move_number, x = step.x, y = step.y, result = %step.result))]
    pub async fn record_step(&self, game_id: i32, step: &StepBody) -> Result<()> {
        debug!(game_id, "Recording move");
        let response = self
            .client
            .post(format!("{}/step/{}", self.base_url, game_id))
            .json(step)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Step failed: HTTP {}", response.status());
        }
        Ok(())
    }

    /// Lists all recorded sessions, most recent first.
    #[instrument(skip(self))]
    pub async fn list_games(&self) -> Result<Vec<GameBody>> {
        debug!("Fetching games list");
        let games: Vec<GameBody> = self
            .client
            .get(format!("{}/games", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(count = games.len(), "Games fetched");
        Ok(games)
    }

    /// Fetches one session with its embedded move log.
    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: i32) -> Result<GameDetailBody> {
        debug!(game_id, "Fetching game detail");
        let detail: GameDetailBody = self
            .client
            .get(format!("{}/games/{}", self.base_url, game_id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(game_id, moves = detail.moves.len(), "Game detail fetched");
        Ok(detail)
    }
}
