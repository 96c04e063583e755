//! Error types for the notes client.
//!
//! [`ApiError`] is what every flow returns. Its `Display` text is shown to the
//! user as-is, both in the inline error region and in the toast, so variants
//! carry user-facing wording rather than debug detail.

use thiserror::Error;

/// A client-side check that failed before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Age must be a whole number")]
    AgeNotANumber,
    #[error("Age must be between 1 and 150")]
    AgeOutOfRange,
}

/// Failure of a flow: validation, transport, or a non-success API response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),
    /// `ok: false` from the server, with its message or the operation's fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected response from the server (HTTP {status})")]
    UnexpectedResponse { status: u16 },
    #[error("Login succeeded but the server returned no token")]
    MissingToken,
    #[error(transparent)]
    Store(#[from] store::StoreError),
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// HTTP status of the response that caused the error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } | ApiError::UnexpectedResponse { status } => {
                Some(*status)
            }
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Invalid API configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}
