//! Port trait implementation for `SelectionClient`.
//!
//! Implements the core-owned `SelectionServicePort` and maps internal errors
//! onto core `SelectionError`.

use async_trait::async_trait;
use lectio_core::{SelectionError, SelectionServicePort, Translation};
use lectio_core::ports::SelectionResult;

use crate::client::SelectionClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `SelectionError`.
fn map_error(err: ApiError) -> SelectionError {
    match err {
        ApiError::Service { status, message } => by_status(status, message),
        ApiError::ApiRequestFailed { status, url } => {
            by_status(status, format!("request failed with status {status}: {url}"))
        }
        ApiError::InvalidResponse { message } => SelectionError::InvalidResponse { message },
        ApiError::Network(e) => SelectionError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => SelectionError::Configuration {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => SelectionError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

fn by_status(status: u16, message: String) -> SelectionError {
    match status {
        404 => SelectionError::NotFound { message },
        400 => SelectionError::BadRequest { message },
        429 => SelectionError::RateLimited { message },
        _ => SelectionError::Network { message },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> SelectionServicePort for SelectionClient<B> {
    async fn translations(&self) -> SelectionResult<Vec<Translation>> {
        self.fetch_translations().await.map_err(map_error)
    }

    async fn books(&self, translation: &str) -> SelectionResult<Vec<String>> {
        self.fetch_books(translation).await.map_err(map_error)
    }

    async fn chapters(&self, book: &str, translation: &str) -> SelectionResult<Vec<String>> {
        self.fetch_chapters(book, translation).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use crate::models::ApiConfig;
    use serde_json::json;

    fn port(backend: FakeBackend) -> Box<dyn SelectionServicePort> {
        Box::new(SelectionClient::with_backend(ApiConfig::default(), backend))
    }

    #[tokio::test]
    async fn test_books_through_port() {
        let port = port(FakeBackend::new().with_json("/books", json!(["Genesis", "Exodus"])));
        assert_eq!(port.books("web").await.unwrap(), ["Genesis", "Exodus"]);
    }

    #[tokio::test]
    async fn test_service_messages_map_by_status() {
        let port = port(
            FakeBackend::new()
                .with_status("/books", 404, r#"{"error": "Translation not found"}"#)
                .with_status("/chapters", 429, r#"{"error": "Too many requests"}"#)
                .with_status("/translations", 500, "oops"),
        );

        assert_eq!(
            port.books("xyz").await.unwrap_err(),
            SelectionError::NotFound {
                message: "Translation not found".to_string()
            }
        );
        assert!(matches!(
            port.chapters("Ruth", "web").await.unwrap_err(),
            SelectionError::RateLimited { .. }
        ));
        assert!(matches!(
            port.translations().await.unwrap_err(),
            SelectionError::Network { message } if message.contains("500")
        ));
    }

    #[tokio::test]
    async fn test_missing_parameter_is_bad_request() {
        let port = port(FakeBackend::new());
        assert!(matches!(
            port.chapters("", "web").await.unwrap_err(),
            SelectionError::BadRequest { message } if message.contains("book")
        ));
    }

    #[test]
    fn test_invalid_url_maps_to_configuration() {
        let err = map_error(ApiError::InvalidUrl(url::ParseError::EmptyHost));
        assert!(matches!(err, SelectionError::Configuration { .. }));
    }
}
