use crate::model::GenerationResult;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures of a single proxied generation request.
///
/// Every variant is terminal for the request and reaches the browser as a
/// `500` with `{ "success": false, "error": <Display> }`.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The backend answered with a failure status or `success: false`.
    #[error("{message}")]
    Backend { status: StatusCode, message: String },

    /// The backend could not be reached.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a body that is not the expected JSON.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("Backend reported success without a video_id")]
    MissingVideoId,

    /// The inbound body could not be read as `{ "prompt": string }`.
    #[error("{0}")]
    InvalidRequest(String),
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(GenerationResult::failed(self.to_string()))).into_response()
    }
}
