//! URL construction helpers for the selection service.
//!
//! Endpoints are resolved below the configured base path, so a service
//! mounted at `https://host/bible/` is queried at `https://host/bible/books`.

use url::Url;

use crate::models::ApiConfig;

fn endpoint(config: &ApiConfig, name: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{name}"));
    url.set_query(None);
    url
}

/// `GET /translations`
pub fn build_translations_url(config: &ApiConfig) -> Url {
    endpoint(config, "translations")
}

/// `GET /books?translation=ID`
pub fn build_books_url(config: &ApiConfig, translation: &str) -> Url {
    let mut url = endpoint(config, "books");
    url.query_pairs_mut().append_pair("translation", translation);
    url
}

/// `GET /chapters?book=NAME&translation=ID`
pub fn build_chapters_url(config: &ApiConfig, book: &str, translation: &str) -> Url {
    let mut url = endpoint(config, "chapters");
    url.query_pairs_mut()
        .append_pair("book", book)
        .append_pair("translation", translation);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_at(base: &str) -> ApiConfig {
        ApiConfig {
            base_url: Url::parse(base).unwrap(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_translations_url() {
        let url = build_translations_url(&ApiConfig::default());
        assert_eq!(url.as_str(), "http://localhost:5000/translations");
    }

    #[test]
    fn test_books_url_encodes_translation() {
        let url = build_books_url(&ApiConfig::default(), "web c");
        assert_eq!(url.as_str(), "http://localhost:5000/books?translation=web+c");
    }

    #[test]
    fn test_chapters_url() {
        let url = build_chapters_url(&ApiConfig::default(), "1 John", "kjv");
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/chapters?book=1+John&translation=kjv"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let url = build_books_url(&config_at("https://example.org/bible/?x=1"), "web");
        assert_eq!(url.as_str(), "https://example.org/bible/books?translation=web");
    }
}
