//! Configuration error types.

use thiserror::Error;

/// Errors produced while reading a store configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML syntax or shape error.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the storefront cannot render.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
