use crate::backend::BackendClient;
use crate::config::Config;
use tracing::info;

/// Shared, read-only state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let backend = BackendClient::new(&config.backend_url)?;
        info!(backend_url = %backend.generate_url(), "Backend client ready");
        Ok(Self { backend })
    }
}
