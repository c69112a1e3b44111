//! Stateless request/response mapping over the game repository.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{debug, info, instrument};

use crate::api::error::ApiError;
use crate::api::types::{
    CreateGameBody, CreatedBody, ErrorBody, GameBody, GameDetailBody, MoveBody, StatusBody,
    StepBody,
};
use crate::api::validate::{MoveValidator, TrustingValidator};
use crate::db::{GameRepository, NewGame, NewMove};
use crate::pages;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    repo: GameRepository,
    validator: Arc<dyn MoveValidator>,
}

impl AppState {
    /// Creates state with the shipped trust-the-client move policy.
    pub fn new(repo: GameRepository) -> Self {
        Self::with_validator(repo, Arc::new(TrustingValidator))
    }

    /// Creates state with a custom move validator.
    pub fn with_validator(repo: GameRepository, validator: Arc<dyn MoveValidator>) -> Self {
        Self { repo, validator }
    }
}

/// Builds the HTTP router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_redirect))
        .route("/index.html", get(pages::index_page))
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", get(get_game))
        .route("/step/{id}", post(record_step))
        .fallback(not_found)
        .with_state(state)
}

async fn index_redirect() -> Redirect {
    Redirect::to("/index.html")
}

/// Lists all recorded sessions, most recent first, without their moves.
#[instrument(skip(state))]
async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameBody>>, ApiError> {
    let games = state.repo.list_games()?;
    debug!(count = games.len(), "Listing games");
    Ok(Json(games.iter().map(GameBody::from).collect()))
}

/// Returns one session with its move log embedded.
#[instrument(skip(state))]
async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GameDetailBody>, ApiError> {
    let game = state.repo.get_game(id)?.ok_or(ApiError::NotFound)?;
    let moves = state.repo.list_moves(id)?;
    Ok(Json(GameDetailBody {
        game: GameBody::from(&game),
        moves: moves.iter().map(MoveBody::from).collect(),
    }))
}

/// Creates a session from the client-generated board configuration.
#[instrument(skip(state, body), fields(player = %body.player_name, width = body.width, height = body.height, mines = body.mines_count))]
async fn create_game(
    State(state): State<AppState>,
    Json(body): Json<CreateGameBody>,
) -> Result<Json<CreatedBody>, ApiError> {
    let game = state.repo.create_game(NewGame::new(
        body.player_name,
        body.width,
        body.height,
        body.mines_count,
        &body.mine_positions,
    ))?;
    info!(game_id = game.id(), "Game session created");
    Ok(Json(CreatedBody { id: *game.id() }))
}

/// Appends a move to a session's log.
///
/// The session must exist — moves against unknown ids are rejected with a
/// 404, uniformly. A terminal result patches the session outcome before
/// the response is produced.
#[instrument(skip(state, body), fields(game_id = id, move_number = body.move_number, x = body.x, y = body.y, result = %body.result))]
async fn record_step(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<StepBody>,
) -> Result<Json<StatusBody>, ApiError> {
    let game = state.repo.get_game(id)?.ok_or(ApiError::NotFound)?;
    state
        .validator
        .validate(&game, &body)
        .map_err(|reason| ApiError::Rejected { reason })?;
    state.repo.record_move(NewMove::new(
        id,
        body.move_number,
        body.x,
        body.y,
        body.result,
    ))?;
    Ok(Json(StatusBody {
        status: "ok".to_string(),
    }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not Found".to_string(),
        }),
    )
}
