//! Error types for the Airtable records exporter.
//!
//! Each stage of an export run has its own error enum so callers can tell a
//! bad environment apart from a failed fetch or a failed write without
//! matching on message text.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to load {name}: {message}")]
    EnvParse { name: String, message: String },

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Errors raised while fetching pages from the record-listing API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network failure, connection reset or request timeout
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Body is not JSON or does not have the page shape
    #[error("malformed response body: {0}")]
    ResponseFormat(String),

    /// Server kept handing out continuation tokens past the page cap
    #[error("pagination did not finish within {max_pages} pages")]
    PaginationLimitExceeded { max_pages: usize },
}

/// Errors raised while writing the export report.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Collection could not be serialized
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Report could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(name: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::EnvParse {
            name: name.into(),
            message: err.to_string(),
        }
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl FetchError {
    /// Creates a status error from HTTP status and response body.
    pub fn http_status(status: reqwest::StatusCode, body: String) -> Self {
        Self::HttpStatus {
            status: status.as_u16(),
            message: body,
        }
    }

    /// Creates a response format error.
    pub fn response_format(err: impl std::fmt::Display) -> Self {
        Self::ResponseFormat(err.to_string())
    }

    /// Whether another attempt at the same request may succeed.
    ///
    /// Transport failures, 5xx and 429 are transient. Everything else,
    /// including a body that failed to parse, is final.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::HttpStatus { status, .. } => *status == 429 || (500..600).contains(status),
            Self::ResponseFormat(_) | Self::PaginationLimitExceeded { .. } => false,
        }
    }
}

impl OutputError {
    /// Creates a write error for the given destination.
    pub fn write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
