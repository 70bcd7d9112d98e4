use crate::AppState;
use crate::error::ProxyError;
use crate::model::{GenerationRequest, GenerationResult};
use crate::ui::INDEX_HTML;
use axum::body::Bytes;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json};
use tracing::{error, info};

pub const HEALTH_MESSAGE: &str = "AI Video Gateway is running!";

/// `POST /api/generate_video`
///
/// The body is read as raw bytes so that a missing or wrong `Content-Type`
/// does not short-circuit into an axum rejection; every failure, including
/// an unparsable body, is reported through the JSON envelope.
#[axum::debug_handler]
pub async fn generate_video(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<GenerationResult>, ProxyError> {
    let request = parse_request(&body)?;

    match state.backend.generate_video(&request).await {
        Ok(video_id) => {
            info!(%video_id, "Video generation succeeded");
            Ok(Json(GenerationResult::succeeded(video_id)))
        }
        Err(error) => {
            error!(%error, "Video generation failed");
            Err(error)
        }
    }
}

fn parse_request(body: &[u8]) -> Result<GenerationRequest, ProxyError> {
    serde_json::from_slice(body).map_err(|error| ProxyError::InvalidRequest(error.to_string()))
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, HEALTH_MESSAGE)
}

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
