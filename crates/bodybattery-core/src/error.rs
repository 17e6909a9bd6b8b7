//! Error types for bodybattery-core.
//!
//! Each component reports its own error enum; [`CoreError`] is the umbrella
//! for operations that cross component boundaries, such as a form
//! submission that validates input and then talks to the server.

use std::path::PathBuf;
use thiserror::Error;

/// Umbrella error for cross-component operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// API request failures
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration failures
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Form input failures
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Failures from the journal API client.
///
/// The three observable failure classes of a request each get their own
/// variant; none of them is ever swallowed by the client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, TLS, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status.
    #[error("server returned HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("malformed response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL is not a usable URL.
    #[error("invalid base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to re-serialize configuration during a key update
    #[error("failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Key does not exist in the configuration schema
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// The per-user config directory is unavailable
    #[error("cannot determine config directory: {0}")]
    NoConfigDir(String),
}

/// Form input that cannot become a draft entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A rating lies outside the journal's 1-10 domain.
    #[error("'{field}' must be between 1 and 10, got {value}")]
    OutOfRange { field: &'static str, value: i32 },

    /// A rating was never entered.
    #[error("'{field}' is required")]
    Missing { field: &'static str },

    /// A field name that is not part of the entry shape.
    #[error("unknown field name: {0}")]
    UnknownField(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
