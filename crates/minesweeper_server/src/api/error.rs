//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};

use crate::api::types::ErrorBody;
use crate::db::DbError;

/// Failures surfaced by the HTTP layer.
///
/// Storage failures are reported verbatim as a 500 — no retries, no
/// transient/permanent distinction.
#[derive(Debug, Display, Error, From)]
pub enum ApiError {
    /// Unknown session id.
    #[display("Game not found")]
    NotFound,
    /// A move validator refused the move.
    #[display("{reason}")]
    Rejected {
        /// Why the validator refused.
        reason: String,
    },
    /// Underlying persistence failure.
    #[display("{_0}")]
    Storage(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Rejected { .. } => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
