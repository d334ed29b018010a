//! Error types for the Compare and Comply client.
//!
//! Every failure surfaces to the caller; nothing is retried or locally
//! recovered. Validation errors are raised before any network activity.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the Compare and Comply client.
#[derive(Error, Debug)]
pub enum Error {
    /// A required options field (or a required options object) was missing or
    /// empty. Raised synchronously, before the request is built.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying HTTP layer failed (connectivity, timeout, TLS).
    /// Propagated unchanged; the client performs no retry or backoff.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service returned a non-2xx response.
    #[error("service error ({status}): {message}")]
    Service {
        /// HTTP status code returned by the service.
        status: StatusCode,
        /// Server-provided message body, verbatim.
        message: String,
    },

    /// IAM token exchange failed.
    #[error("authentication failed: {0}")]
    Authentication(String),
}

impl Error {
    pub(crate) fn required(field: &str) -> Self {
        Error::InvalidArgument(format!("{field} cannot be empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message() {
        let err = Error::required("feedback_id");
        assert_eq!(
            err.to_string(),
            "invalid argument: feedback_id cannot be empty"
        );
    }

    #[test]
    fn test_service_error_display() {
        let err = Error::Service {
            status: StatusCode::NOT_FOUND,
            message: "no such batch".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("no such batch"));
    }
}
