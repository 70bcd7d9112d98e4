use crate::error::ProxyError;
use crate::model::{BackendResponse, GenerationRequest};
use tracing::{debug, info, warn};

pub const GENERATE_VIDEO_PATH: &str = "/generate_video";

/// HTTP client for the external video-generation backend.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    generate_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        // Host proxy variables never apply to the backend hop.
        let http = reqwest::Client::builder().no_proxy().build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        let generate_url = format!("{}{GENERATE_VIDEO_PATH}", base_url.trim_end_matches('/'));
        Self { http, generate_url }
    }

    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }

    /// Forward one request to the backend and return its `video_id`.
    ///
    /// A non-success status or `success: false` is reported as
    /// [`ProxyError::Backend`]. A body that is not JSON is a decode error
    /// even when the status already signals failure.
    pub async fn generate_video(&self, request: &GenerationRequest) -> Result<String, ProxyError> {
        info!(
            url = %self.generate_url,
            prompt_len = request.prompt.len(),
            "Forwarding generation request to backend"
        );

        let response = self
            .http
            .post(&self.generate_url)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let reply: BackendResponse = serde_json::from_slice(&bytes)?;
        debug!(%status, success = reply.success, "Backend replied");

        if !status.is_success() || !reply.success {
            let message = reply.error_message();
            warn!(%status, %message, "Backend reported failure");
            return Err(ProxyError::Backend { status, message });
        }

        match reply.video_id {
            Some(video_id) => {
                info!(%video_id, "Backend produced video");
                Ok(video_id)
            }
            None => Err(ProxyError::MissingVideoId),
        }
    }
}
