use super::progress::{ProgressTick, with_progress};
use super::state::{Event, GenerationState, normalize_prompt};
use crate::model::{GenerationRequest, GenerationResult};
use std::time::Duration;
use tracing::{debug, warn};

pub const GENERATE_VIDEO_ROUTE: &str = "/api/generate_video";

/// Talks to the gateway's proxy route and walks a [`GenerationState`]
/// through one submission.
#[derive(Debug, Clone)]
pub struct PromptClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PromptClient {
    pub fn new(gateway_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().no_proxy().build()?;
        Ok(Self::with_client(http, gateway_url))
    }

    pub fn with_client(http: reqwest::Client, gateway_url: &str) -> Self {
        let endpoint = format!("{}{GENERATE_VIDEO_ROUTE}", gateway_url.trim_end_matches('/'));
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post one prompt and decode the envelope, whatever the status code.
    pub async fn post_prompt(&self, prompt: &str) -> reqwest::Result<GenerationResult> {
        let request = GenerationRequest::new(normalize_prompt(prompt));
        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        debug!(status = %response.status(), "Gateway replied");
        response.json().await
    }

    /// Run one submission, reporting every state the view passes through.
    pub async fn submit(
        &self,
        prompt: &str,
        mut on_state: impl FnMut(&GenerationState),
    ) -> GenerationState {
        let state = GenerationState::Idle.update(Event::Submit);
        on_state(&state);

        let outcome = self.post_prompt(prompt).await;
        self.finish(state, outcome, on_state)
    }

    /// Same as [`PromptClient::submit`], with the decorative ticker running
    /// next to the request.
    pub async fn submit_with_progress(
        &self,
        prompt: &str,
        period: Duration,
        mut on_state: impl FnMut(&GenerationState),
        on_tick: impl FnMut(ProgressTick),
    ) -> GenerationState {
        let state = GenerationState::Idle.update(Event::Submit);
        on_state(&state);

        let outcome = with_progress(self.post_prompt(prompt), period, on_tick).await;
        self.finish(state, outcome, on_state)
    }

    fn finish(
        &self,
        state: GenerationState,
        outcome: reqwest::Result<GenerationResult>,
        mut on_state: impl FnMut(&GenerationState),
    ) -> GenerationState {
        let event = match outcome {
            Ok(result) => Event::Completed(result),
            Err(error) => {
                warn!(endpoint = %self.endpoint, %error, "Failed to reach gateway");
                Event::ConnectionFailed
            }
        };

        let state = state.update(event);
        on_state(&state);
        state
    }
}
