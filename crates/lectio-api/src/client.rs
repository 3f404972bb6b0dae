//! Selection service client.

use lectio_core::Translation;

use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{ApiConfig, ChapterNumber};
use crate::url::{build_books_url, build_chapters_url, build_translations_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default selection client using the reqwest HTTP backend.
pub type DefaultSelectionClient = SelectionClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the translation, book and chapter endpoints.
///
/// Generic over the HTTP backend for testing. Use [`DefaultSelectionClient`]
/// in production code.
pub struct SelectionClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultSelectionClient {
    /// Create a client. Fails if the base URL does not parse.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let config = ApiConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&config)?;
        tracing::debug!(base_url = %config.base_url, "Selection client ready");
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> SelectionClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }

    pub(crate) async fn fetch_translations(&self) -> ApiResult<Vec<Translation>> {
        let url = build_translations_url(&self.config);
        let translations: Vec<Translation> = self.backend.get_json(&url).await?;
        tracing::debug!(count = translations.len(), "Fetched translations");
        Ok(translations)
    }

    pub(crate) async fn fetch_books(&self, translation: &str) -> ApiResult<Vec<String>> {
        require("translation", translation)?;
        let url = build_books_url(&self.config, translation);
        let books: Vec<String> = self.backend.get_json(&url).await?;
        tracing::debug!(translation, count = books.len(), "Fetched books");
        Ok(books)
    }

    pub(crate) async fn fetch_chapters(
        &self,
        book: &str,
        translation: &str,
    ) -> ApiResult<Vec<String>> {
        require("book", book)?;
        require("translation", translation)?;
        let url = build_chapters_url(&self.config, book, translation);
        let chapters: Vec<ChapterNumber> = self.backend.get_json(&url).await?;
        tracing::debug!(book, translation, count = chapters.len(), "Fetched chapters");
        Ok(chapters.into_iter().map(ChapterNumber::into_label).collect())
    }
}

/// Reject empty parameters before they reach the wire.
fn require(name: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Service {
            status: 400,
            message: format!("{name} parameter is required"),
        });
    }
    Ok(())
}
