//! Front-end side of the gateway: the browser page served at `/`, plus a
//! native client that drives the same state machine from a terminal.

pub mod client;
pub mod progress;
pub mod state;

pub use client::{GENERATE_VIDEO_ROUTE, PromptClient};
pub use progress::{PROGRESS_STEPS, ProgressTick, TICK_INTERVAL, progress_ticks, with_progress};
pub use state::{CONNECTION_ERROR, Event, GenerationState, normalize_prompt, watch_url};

/// Browser page. Its script mirrors [`GenerationState`]: a submit clears the
/// last outcome, then exactly one of link or error is shown.
pub const INDEX_HTML: &str = include_str!("index.html");
