//! HTTP API layer: routing, wire types, error mapping, move validation.

mod error;
mod routes;
mod types;
mod validate;

pub use error::ApiError;
pub use routes::{AppState, router};
pub use types::{
    CreateGameBody, CreatedBody, ErrorBody, GameBody, GameDetailBody, MoveBody, StatusBody,
    StepBody,
};
pub use validate::{MoveValidator, TrustingValidator};
