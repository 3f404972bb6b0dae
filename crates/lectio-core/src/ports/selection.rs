//! Selection service port: translations, books and chapters for the menus.
//!
//! Implemented by `DefaultSelectionClient` in `lectio-api`. Errors here are
//! transport-agnostic; the adapter maps its HTTP failures onto them.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Translation;

/// Errors returned by [`SelectionServicePort`] operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The requested translation or book does not exist.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// A required parameter was missing or rejected.
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// The service is throttling this client.
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    /// Network failure or server error.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The service answered with an unexpected payload.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// The client is misconfigured (bad base URL, etc.).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Result alias for selection port operations.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Port for the three menu endpoints.
#[async_trait]
pub trait SelectionServicePort: Send + Sync {
    /// All available translations.
    async fn translations(&self) -> SelectionResult<Vec<Translation>>;

    /// Book names for a translation, in canonical order.
    async fn books(&self, translation: &str) -> SelectionResult<Vec<String>>;

    /// Chapter numbers (as strings) for a book in a translation.
    async fn chapters(&self, book: &str, translation: &str) -> SelectionResult<Vec<String>>;
}
