pub mod api;
pub mod app_state;
pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod ui;

use axum::Router;
use axum::extract::Extension;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

//
// Re-export
//
pub use api::{generate_video, health, index, log_request_errors};
pub use app_state::AppState;
pub use backend::BackendClient;
pub use config::Config;
pub use error::ProxyError;
pub use model::{BackendResponse, GenerationRequest, GenerationResult, UNKNOWN_ERROR};
pub use ui::{GenerationState, PromptClient};

/// Build the gateway's routes around `state`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/generate_video", post(generate_video))
        .layer(axum::middleware::from_fn(api::log_request_errors))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(&config)?;
    let app = router(state);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Gateway listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
