//! Configuration for safety-rs
//!
//! Only the service around the scorer is configurable. Word lists,
//! deductions and band thresholds are fixed.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{Result, SafetyError};

/// Log output formats understood by the binary
pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Main service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SafetyConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Cross-origin configuration
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "127.0.0.1:5000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Attach CORS headers to every route
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Allowed origins; empty allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive, overridden by RUST_LOG when set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// One of "pretty", "compact" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "safety_rs=info,tower_http=info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl SafetyConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SafetyError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SafetyError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Create a default development configuration
    pub fn development() -> Self {
        Self::default()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.listen_addr.parse::<SocketAddr>().map_err(|e| {
            SafetyError::Config(format!(
                "Invalid listen address '{}': {}",
                self.server.listen_addr, e
            ))
        })?;

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(SafetyError::Config(format!(
                "Unknown log format '{}', expected one of {:?}",
                self.logging.format, LOG_FORMATS
            )));
        }

        for origin in &self.cors.allowed_origins {
            HeaderValue::from_str(origin).map_err(|e| {
                SafetyError::Config(format!("Invalid CORS origin '{}': {}", origin, e))
            })?;
        }

        Ok(())
    }
}
