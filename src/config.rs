//! Client configuration
//!
//! Settings come from an optional TOML file (`easyrecipe.toml`), then the
//! `EASYRECIPE_API_URL` environment variable, then explicit overrides such as
//! the `--api-url` flag. Every field has a default, so a missing file is not
//! an error.
//!
//! ```toml
//! log_level = "info"
//!
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [storage]
//! identity_file = ".easyrecipe/identity.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "EASYRECIPE_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

// ============= API Configuration =============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

// ============= Storage Configuration =============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File holding the persisted identity token (native client only)
    #[serde(default = "default_identity_file")]
    pub identity_file: PathBuf,
}

fn default_identity_file() -> PathBuf {
    PathBuf::from(".easyrecipe/identity.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            identity_file: default_identity_file(),
        }
    }
}

// ============= Errors =============

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for crate::types::AppError {
    fn from(err: ConfigError) -> Self {
        crate::types::AppError::Config(err.to_string())
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file that must exist.
    #[cfg(feature = "native")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    #[cfg(feature = "native")]
    pub fn load_or_default<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::FileNotFound(path)) => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    #[cfg(feature = "native")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply the environment value and then the explicit override; the last
    /// one present wins.
    pub fn with_overrides(mut self, env_url: Option<String>, flag_url: Option<String>) -> Self {
        let present = |u: &String| !u.trim().is_empty();
        if let Some(url) = flag_url.filter(present).or(env_url.filter(present)) {
            self.api.base_url = url.trim().to_string();
        }
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                url
            )));
        }
        if self.storage.identity_file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage.identity_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
