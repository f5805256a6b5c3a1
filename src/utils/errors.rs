//! Error handling for Domovoy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Domovoy client
#[derive(Error, Debug)]
pub enum DomovoyError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("No offline handler for {method} {path}")]
    FallbackUnavailable { method: String, path: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected response shape: {0}")]
    InvalidResponse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for Domovoy operations
pub type Result<T> = std::result::Result<T, DomovoyError>;

impl DomovoyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            DomovoyError::Http(_) => true,
            DomovoyError::Unauthorized => false,
            DomovoyError::Server { .. } => true,
            DomovoyError::FallbackUnavailable { .. } => false,
            DomovoyError::Config(_) => false,
            DomovoyError::InvalidInput(_) => false,
            DomovoyError::InvalidResponse(_) => false,
            DomovoyError::NotFound(_) => false,
            DomovoyError::Serialization(_) => false,
            DomovoyError::Io(_) => true,
            DomovoyError::UrlParse(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        assert!(!DomovoyError::Unauthorized.is_recoverable());
        assert!(!DomovoyError::InvalidInput("empty title".into()).is_recoverable());
        assert!(DomovoyError::Server { status: 503, message: "busy".into() }.is_recoverable());
    }

    #[test]
    fn test_fallback_unavailable_message() {
        let err = DomovoyError::FallbackUnavailable {
            method: "POST".into(),
            path: "/gigachat/chat".into(),
        };
        assert_eq!(err.to_string(), "No offline handler for POST /gigachat/chat");
    }
}
