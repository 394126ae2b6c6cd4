use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::flash::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(#[from] FetchError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The exact 400 body for malformed leaderboard window parameters.
    pub fn invalid_query() -> Self {
        AppError::BadRequest("Invalid or missing query parameters".into())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(e) => {
                tracing::error!("Upstream fetch failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch trading history".into(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
