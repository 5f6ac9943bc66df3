//! Server configuration
//!
//! Loaded from a JSON file; every field has a default, so `{}` is a valid
//! configuration.

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::executor::DEFAULT_PAGE_SIZE;
use crate::observability::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// shipyard server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipyardConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Log output format (default: json)
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Page size used when a listing does not ask for one (default: 3)
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE.get()
}

impl Default for ShipyardConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            default_page_size: default_page_size(),
        }
    }
}

impl ShipyardConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: ShipyardConfig = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".into()));
        }

        if self.default_page_size == 0 {
            return Err(ConfigError::Invalid("default_page_size must be > 0".into()));
        }

        if self.host.is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".into()));
        }

        Ok(())
    }

    /// Create a default config with the given port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.default_page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
