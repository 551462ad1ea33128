pub mod constants;

use std::env;
use std::path::PathBuf;

use crate::kitten::model_paths::resolve_cache_dir;
use constants::{DEFAULT_HOST, DEFAULT_MODEL_REPO, DEFAULT_PORT};

/// Runtime configuration for the HTTP server and the model loader
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Hugging Face repository id of the KittenTTS model
    pub model_repo: String,
    /// Directory used as the Hugging Face cache
    pub cache_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model_repo: DEFAULT_MODEL_REPO.to_string(),
            cache_dir: resolve_cache_dir(None),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("HOST") {
            if !host.trim().is_empty() {
                config.host = host.trim().to_string();
            }
        }

        if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            config.port = port;
        }

        if let Ok(repo) = env::var("KITTEN_MODEL") {
            if !repo.trim().is_empty() {
                config.model_repo = repo.trim().to_string();
            }
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
