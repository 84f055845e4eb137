//! Error types for the narrator crate.

use thiserror::Error;

/// Primary error type for all narrator operations.
#[derive(Error, Debug)]
pub enum NarratorError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl NarratorError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether another attempt could succeed when retry is enabled.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited | Self::Network(_) | Self::Timeout(_) => true,
            Self::Api { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NarratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        assert!(NarratorError::api(500, "oops").is_retryable());
        assert!(NarratorError::api(503, "unavailable").is_retryable());
        assert!(NarratorError::RateLimited.is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        assert!(!NarratorError::api(400, "bad request").is_retryable());
        assert!(!NarratorError::Authentication("bad key".into()).is_retryable());
        assert!(!NarratorError::InvalidArgument("empty text".into()).is_retryable());
    }
}
