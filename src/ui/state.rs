use crate::model::{GenerationResult, UNKNOWN_ERROR};
use std::fmt;

pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";
pub const CONNECTION_ERROR: &str = "Error connecting to backend.";

/// Front-end view of one generation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    Idle,
    Submitting,
    Succeeded { video_id: String },
    Failed { message: String },
}

/// Inputs to [`GenerationState::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Submit,
    Completed(GenerationResult),
    /// The gateway could not be reached or answered with something unreadable.
    ConnectionFailed,
}

impl GenerationState {
    /// Apply one event and return the next state.
    ///
    /// Submitting always discards the previous outcome. Completions that
    /// arrive when nothing is in flight are ignored.
    pub fn update(self, event: Event) -> Self {
        match (self, event) {
            (_, Event::Submit) => Self::Submitting,
            (Self::Submitting, Event::Completed(result)) => Self::from_result(result),
            (Self::Submitting, Event::ConnectionFailed) => Self::Failed {
                message: CONNECTION_ERROR.to_string(),
            },
            (state, _) => state,
        }
    }

    fn from_result(result: GenerationResult) -> Self {
        match result {
            GenerationResult {
                success: true,
                video_id: Some(video_id),
                ..
            } => Self::Succeeded { video_id },
            GenerationResult { error, .. } => Self::Failed {
                message: error
                    .filter(|error| !error.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn video_url(&self) -> Option<String> {
        match self {
            Self::Succeeded { video_id } => Some(watch_url(video_id)),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("Enter a topic (leave blank for auto)"),
            Self::Submitting => f.write_str("Generating..."),
            Self::Succeeded { video_id } => write!(f, "Video uploaded: {}", watch_url(video_id)),
            Self::Failed { message } => write!(f, "Error: {message}"),
        }
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{video_id}")
}

/// Blank prompts are sent as `""` so the backend picks a topic itself.
pub fn normalize_prompt(prompt: &str) -> &str {
    if prompt.trim().is_empty() { "" } else { prompt }
}
