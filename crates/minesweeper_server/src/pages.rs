//! Embedded static client page.

use axum::http::header;
use axum::response::IntoResponse;

/// Serves the bundled single-page browser client.
pub async fn index_page() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("index.html"),
    )
}
