// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::services::upstream::UpstreamError;

// What the client sees when the upstream call fails. Upstream detail stays
// in the server log.
const UPSTREAM_APOLOGY: &str = "I'm unable to process your request at the moment.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "upstream completion failed");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_APOLOGY.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
