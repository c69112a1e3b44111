//! Tests driving the HTTP router in-process.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::NamedTempFile;
use tower::ServiceExt;

use minesweeper_server::{AppState, GameRepository, router, run_migrations};

fn setup_app() -> (NamedTempFile, Router) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    run_migrations(&db_path).expect("Migrations failed");
    let repo = GameRepository::new(db_path).expect("Failed to create repository");
    (db_file, router(AppState::new(repo)))
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Request build failed");
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Request build failed");
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Body read failed")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_create_play_and_replay_scenario() {
    let (_db, app) = setup_app();

    // Create a session.
    let (status, body) = send_json(
        &app,
        "POST",
        "/games",
        json!({
            "player_name": "Anon",
            "width": 10,
            "height": 10,
            "mines_count": 10,
            "mine_positions": [0, 11, 22, 33, 44, 55, 66, 77, 88, 99],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().expect("Missing id");

    // A non-terminal move leaves the session playing.
    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/step/{id}"),
        json!({"move_number": 1, "x": 0, "y": 0, "result": "ok"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(&app, &format!("/games/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "playing");

    // The terminal move flips the outcome before the response returns.
    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/step/{id}"),
        json!({"move_number": 2, "x": 5, "y": 5, "result": "explode"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, &format!("/games/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "loss");
    let moves = body["moves"].as_array().expect("Missing moves");
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0]["move_number"], 1);
    assert_eq!(moves[1]["move_number"], 2);
    assert_eq!(moves[1]["result"], "explode");
}

#[tokio::test]
async fn test_mine_positions_returned_verbatim() {
    let (_db, app) = setup_app();

    let (_, body) = send_json(
        &app,
        "POST",
        "/games",
        json!({"player_name": "", "width": 5, "height": 5, "mines_count": 3,
               "mine_positions": [3, 7, 12]}),
    )
    .await;
    let id = body["id"].as_i64().expect("Missing id");

    let (_, body) = get(&app, &format!("/games/{id}")).await;
    // Stored and returned as the serialized string, not re-encoded.
    let positions = body["mine_positions"].as_str().expect("Expected string");
    let decoded: Vec<u32> = serde_json::from_str(positions).expect("Decode failed");
    assert_eq!(decoded, vec![3, 7, 12]);
}

#[tokio::test]
async fn test_list_games_without_moves() {
    let (_db, app) = setup_app();

    for name in ["first", "second"] {
        send_json(
            &app,
            "POST",
            "/games",
            json!({"player_name": name, "width": 5, "height": 5,
                   "mines_count": 1, "mine_positions": [0]}),
        )
        .await;
    }

    let (status, body) = get(&app, "/games").await;
    assert_eq!(status, StatusCode::OK);
    let games = body.as_array().expect("Expected array");
    assert_eq!(games.len(), 2);
    // Most recent first, and the list view embeds no move log.
    assert_eq!(games[0]["player_name"], "second");
    assert!(games[0].get("moves").is_none());
}

#[tokio::test]
async fn test_get_unknown_game_is_404() {
    let (_db, app) = setup_app();
    let (status, body) = get(&app, "/games/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Game not found");
}

#[tokio::test]
async fn test_step_unknown_game_is_404() {
    let (_db, app) = setup_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/step/999999",
        json!({"move_number": 1, "x": 0, "y": 0, "result": "ok"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Game not found");
}

#[tokio::test]
async fn test_absent_fields_are_defaulted() {
    let (_db, app) = setup_app();

    let (status, body) = send_json(&app, "POST", "/games", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().expect("Missing id");

    let (status, _) = send_json(&app, "POST", &format!("/step/{id}"), json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/games/{id}")).await;
    assert_eq!(body["player_name"], "");
    assert_eq!(body["width"], 10);
    assert_eq!(body["height"], 10);
    assert_eq!(body["mines_count"], 10);
    assert_eq!(body["outcome"], "playing");
    let moves = body["moves"].as_array().expect("Missing moves");
    assert_eq!(moves[0]["x"], -1);
    assert_eq!(moves[0]["y"], -1);
    assert_eq!(moves[0]["result"], "unknown");
}

#[tokio::test]
async fn test_unmatched_route_is_404() {
    let (_db, app) = setup_app();
    let (status, body) = get(&app, "/no/such/route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_root_redirects_to_client_page() {
    let (_db, app) = setup_app();
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("Request build failed");
    let response = app.clone().oneshot(request).await.expect("Request failed");
    assert!(response.status().is_redirection());
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/index.html")
    );
}
