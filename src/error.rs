//! Error types for the postcode API client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the postcode API client
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing input, detected before any network call
    #[error("invalid input: {message}")]
    Validation { message: String },

    /// The HTTP exchange could not be completed
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-200/non-404 status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Structural mismatch between paginated responses
    #[error("merge failed: {message}")]
    Merge { message: String },

    /// The response body was not valid JSON
    #[error("failed to parse JSON response: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A next-page link was not a valid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Runtime construction failed in the blocking adapter
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an API error from a status code and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a merge error
    pub fn merge(message: impl Into<String>) -> Self {
        Self::Merge {
            message: message.into(),
        }
    }

    /// Check if this error was raised before any request was issued
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The HTTP status code behind an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for the postcode API client
pub type Result<T> = std::result::Result<T, Error>;
