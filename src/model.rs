use serde::{Deserialize, Serialize};

pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Prompt submitted by the browser and forwarded verbatim to the backend.
///
/// An empty prompt asks the backend to pick a trending topic on its own. A
/// missing `prompt` field deserializes as empty, which is what the backend
/// sees in that case anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Envelope returned by `POST /api/generate_video`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn succeeded(video_id: impl Into<String>) -> Self {
        Self {
            success: true,
            video_id: Some(video_id.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            video_id: None,
            error: Some(error.into()),
        }
    }
}

/// Body returned by the backend's `/generate_video` route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl BackendResponse {
    /// Backend error message, falling back to [`UNKNOWN_ERROR`] when absent or empty.
    pub fn error_message(&self) -> String {
        self.error
            .as_deref()
            .filter(|error| !error.is_empty())
            .unwrap_or(UNKNOWN_ERROR)
            .to_string()
    }
}
