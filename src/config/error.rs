//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A required environment variable was not set.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },

    /// The API key was set but blank.
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// The catalog URL is not an http(s) URL.
    #[error("invalid catalog URL '{value}': must start with http:// or https://")]
    InvalidCatalogUrl { value: String },

    /// The catalog timeout must be at least one second.
    #[error("catalog timeout must be greater than zero")]
    InvalidTimeout,
}
