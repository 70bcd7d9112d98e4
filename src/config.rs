use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gateway configuration, loaded from CLI flags, environment, or a config file
///
/// Example configuration file content
/// # AI Video Gateway Configuration
///
/// # Server configuration
/// listen_on_port = 3000
/// bind_address = "0.0.0.0"
///
/// # Video generation backend
/// backend_url = "http://127.0.0.1:5000"
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, env = "LISTEN_ON_PORT", default_value_t = 3000)]
    #[serde(default = "default_port")]
    pub listen_on_port: u16,

    /// Address to bind the HTTP listener to
    #[arg(short, long, default_value = "0.0.0.0")]
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Base URL of the video generation backend
    #[arg(long, env = "BACKEND_URL", default_value = "http://127.0.0.1:5000")]
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Configuration file path
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_on_port: default_port(),
            bind_address: default_bind_address(),
            backend_url: default_backend_url(),
            config: None,
        }
    }
}

impl Config {
    /// Load configuration from CLI args, optionally merging with a config file
    pub fn load() -> Result<Self> {
        let mut config = Config::parse();

        if let Some(config_path) = &config.config {
            let file_config = Self::from_file(Path::new(config_path))?;
            config = config.merge_with_file(file_config);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Merge with file config, CLI args take precedence unless left at their default
    pub fn merge_with_file(mut self, file_config: Config) -> Self {
        if self.listen_on_port == default_port() {
            self.listen_on_port = file_config.listen_on_port;
        }
        if self.bind_address == default_bind_address() {
            self.bind_address = file_config.bind_address;
        }
        if self.backend_url == default_backend_url() {
            self.backend_url = file_config.backend_url;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.backend_url.is_empty() {
            return Err(anyhow::anyhow!("Backend URL cannot be empty"));
        }
        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "Backend URL must start with http:// or https://"
            ));
        }
        if self.bind_address.is_empty() {
            return Err(anyhow::anyhow!("Bind address cannot be empty"));
        }

        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.listen_on_port)
    }
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_backend_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
