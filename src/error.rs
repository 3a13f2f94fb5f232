//! Error types for prismaop

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for prismaop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// Placeholder shown when an error response carries no usable body
pub const NO_RESPONSE_BODY: &str = "No response body";

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status} {category} for {url}: {body}")]
    Http {
        status: u16,
        category: &'static str,
        url: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Login succeeded but no token was received")]
    MissingToken,

    #[error("Authentication token not found. Please login first.")]
    NotAuthenticated,
}

impl ApiError {
    /// Build an HTTP status error, substituting a placeholder for an empty body.
    pub fn http(status: StatusCode, url: impl Into<String>, body: Option<String>) -> Self {
        let body = body
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| NO_RESPONSE_BODY.to_string());

        ApiError::Http {
            status: status.as_u16(),
            category: status_category(status),
            url: url.into(),
            body,
        }
    }
}

/// Human-readable class of an HTTP status code.
pub fn status_category(status: StatusCode) -> &'static str {
    if status.is_client_error() {
        "Client Error"
    } else if status.is_server_error() {
        "Server Error"
    } else if status.is_redirection() {
        "Redirect"
    } else if status.is_informational() {
        "Informational"
    } else {
        "Unexpected Status"
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let detail = with_causes(&err);
        if err.is_timeout() {
            ApiError::Network(format!("Request timed out: {}", detail))
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to API: {}", detail))
        } else if err.is_decode() {
            ApiError::InvalidResponse(detail)
        } else {
            ApiError::Network(detail)
        }
    }
}

/// Render an error followed by its `source()` chain, skipping repeats.
pub fn with_causes(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(
        "{0} is still set to its placeholder value. Please update the API URL, access key, and secret key with your actual details."
    )]
    Placeholder(&'static str),

    #[error("{0} is not configured. Pass --{1} or set {2}.")]
    Missing(&'static str, &'static str, &'static str),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Report writing errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report to {}: {source}. Check permissions or path.", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
