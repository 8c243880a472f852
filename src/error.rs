//! Error types for etsi-deliverables
//!
//! Failures fall into two groups:
//! - Transport failures (request could not be sent, non-success HTTP status)
//! - Decode failures (a page body is not the expected JSON record list)
//!
//! Both abort the whole fetch. Data-quality problems inside a record (bad dates,
//! unparsable work-item ids, short descriptors) are not errors; the record parser
//! degrades them to explicit defaults and logs a warning instead.

use thiserror::Error;

/// Result type alias for etsi-deliverables operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for etsi-deliverables
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "endpoint")
        key: Option<String>,
    },

    /// The HTTP request for a search page failed before a response arrived
    #[error("failed to get ETSI search results: {0}")]
    Network(#[from] reqwest::Error),

    /// The search endpoint answered with a non-success status
    #[error("ETSI search returned HTTP {status} for page {page}")]
    HttpStatus {
        /// HTTP status code returned by the server
        status: u16,
        /// The page number that was requested
        page: u32,
    },

    /// A search page body could not be decoded as a record list
    #[error("failed to decode ETSI search results for page {page}: {source}")]
    Decode {
        /// The page number whose body failed to decode
        page: u32,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error (output listing or config encoding)
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid or unreadable configuration
    Config,
    /// Request failed or server rejected it
    Transport,
    /// Server response had an unexpected shape
    Decode,
    /// Local failure (I/O, output encoding)
    Local,
}

impl Error {
    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config { .. } => ErrorCategory::Config,
            Error::Network(_) | Error::HttpStatus { .. } => ErrorCategory::Transport,
            Error::Decode { .. } => ErrorCategory::Decode,
            Error::Serialization(_) | Error::Io(_) => ErrorCategory::Local,
        }
    }

    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Network(e) if e.is_timeout() => "timeout",
            Error::Network(_) => "network_error",
            Error::HttpStatus { .. } => "http_status",
            Error::Decode { .. } => "decode_error",
            Error::Serialization(_) => "serialization_error",
            Error::Io(_) => "io_error",
        }
    }

    /// Shorthand for a [`Error::Config`] tied to a configuration key
    pub(crate) fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }
}
