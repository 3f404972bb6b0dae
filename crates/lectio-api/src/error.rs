//! Internal error types for selection service requests.
//!
//! Mapped to [`SelectionError`](lectio_core::SelectionError) at the port
//! boundary.

use thiserror::Error;

/// Result type alias for selection service requests.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed with an HTTP error status and no readable error body.
    #[error("Selection service request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The service rejected the request with an `{"error": ..}` body.
    #[error("Selection service returned {status}: {message}")]
    Service {
        /// HTTP status code
        status: u16,
        /// The service's own message
        message: String,
    },

    /// The service returned an unexpected payload.
    #[error("Invalid response from selection service: {message}")]
    InvalidResponse { message: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status attached to this error, if any.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequestFailed { status, .. } | Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = ApiError::ApiRequestFailed {
            status: 502,
            url: "http://localhost:5000/books".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("/books"));
        assert_eq!(error.status(), Some(502));
    }

    #[test]
    fn test_service_error_message() {
        let error = ApiError::Service {
            status: 400,
            message: "Translation parameter is required".to_string(),
        };
        assert!(error.to_string().contains("Translation parameter is required"));
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_invalid_response_has_no_status() {
        let error = ApiError::InvalidResponse {
            message: "expected a list".to_string(),
        };
        assert_eq!(error.status(), None);
    }
}
