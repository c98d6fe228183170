//! Error types for the Folio application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Folio application.
///
/// Gateway implementations normalize transport-specific failures into these
/// variants at the boundary, so controllers and the CLI never pattern-match
/// on HTTP or I/O shapes.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FolioError {
    /// Authentication failure (bad credentials, expired/invalid session)
    #[error("authentication error: {0}")]
    Auth(String),

    /// The gateway rejected a resource operation.
    /// Carries the server-supplied detail when the response body had one.
    #[error("resource error: {}", .detail.as_deref().unwrap_or("request failed"))]
    Resource { detail: Option<String> },

    /// Gateway unreachable (connect failure, timeout).
    /// Callers treat this like `Resource`; kept separate for logging.
    #[error("network error: {0}")]
    Network(String),

    /// IO error (session files, config files)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FolioError {
    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a Resource error with a server-supplied detail
    pub fn resource(detail: impl Into<String>) -> Self {
        Self::Resource {
            detail: Some(detail.into()),
        }
    }

    /// Creates a Resource error without detail
    pub fn resource_generic() -> Self {
        Self::Resource { detail: None }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an Auth error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns the message to show next to the action that failed.
    ///
    /// Prefers the gateway's own detail text when it sent one.
    pub fn display_message(&self) -> String {
        match self {
            Self::Resource {
                detail: Some(detail),
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, FolioError>`.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message_prefers_gateway_detail() {
        let err = FolioError::resource("Invalid post ID");
        assert_eq!(err.display_message(), "Invalid post ID");
    }

    #[test]
    fn display_message_falls_back_without_detail() {
        let err = FolioError::resource_generic();
        assert_eq!(err.display_message(), "resource error: request failed");
    }

    #[test]
    fn network_errors_are_distinguishable() {
        let err = FolioError::network("connection refused");
        assert!(err.is_network());
        assert!(!err.is_auth());
    }
}
