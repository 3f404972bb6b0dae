//! Chapter and translation navigation over the reading page address.
//!
//! The reading page is addressed as `/read?translation=..&book=..&chapter=..`.
//! Moving between chapters rewrites only the `chapter` parameter; switching
//! translation rebuilds the address from the current book and chapter.

use thiserror::Error;
use url::Url;

use crate::menu::Passage;

/// Path of the reading page relative to the service root.
pub const READ_PATH: &str = "read";

/// Errors produced while deriving a new page address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Invalid page address: {0}")]
    InvalidAddress(#[from] url::ParseError),

    #[error("Page address has no usable chapter (found {found:?})")]
    InvalidChapter { found: Option<String> },

    #[error("Chapter {0} is out of range")]
    ChapterOutOfRange(i64),
}

/// Passage parameters read from a page address. Any may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassageQuery {
    pub translation: Option<String>,
    pub book: Option<String>,
    pub chapter: Option<String>,
}

/// The address of a reading page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAddress {
    url: Url,
}

impl PageAddress {
    pub fn parse(address: &str) -> Result<Self, NavigationError> {
        Ok(Self {
            url: Url::parse(address)?,
        })
    }

    pub const fn from_url(url: Url) -> Self {
        Self { url }
    }

    pub const fn as_url(&self) -> &Url {
        &self.url
    }

    fn param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    pub fn passage(&self) -> PassageQuery {
        PassageQuery {
            translation: self.param("translation"),
            book: self.param("book"),
            chapter: self.param("chapter"),
        }
    }

    /// Address of the chapter `delta` away from the current one.
    ///
    /// All other query parameters are kept in place.
    pub fn with_chapter_delta(&self, delta: i64) -> Result<Self, NavigationError> {
        let found = self.param("chapter");
        let current: i64 = found
            .as_deref()
            .and_then(|c| c.trim().parse().ok())
            .ok_or_else(|| NavigationError::InvalidChapter {
                found: found.clone(),
            })?;

        let next = current.saturating_add(delta);
        if next < 1 {
            return Err(NavigationError::ChapterOutOfRange(next));
        }

        // First `chapter` is replaced in place, duplicates are dropped.
        let mut replaced = false;
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter_map(|(k, v)| {
                if k != "chapter" {
                    return Some((k.into_owned(), v.into_owned()));
                }
                if replaced {
                    return None;
                }
                replaced = true;
                Some((k.into_owned(), next.to_string()))
            })
            .collect();

        let mut url = self.url.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        tracing::debug!(from = current, to = next, "Chapter navigation");
        Ok(Self { url })
    }

    /// Reading address for the same book and chapter in another translation.
    pub fn with_translation(&self, translation: &str) -> Result<Self, NavigationError> {
        let passage = self.passage();
        let mut url = self.url.join(&format!("/{READ_PATH}"))?;
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.append_pair("translation", translation);
            if let Some(book) = passage.book.as_deref() {
                query.append_pair("book", book);
            }
            if let Some(chapter) = passage.chapter.as_deref() {
                query.append_pair("chapter", chapter);
            }
        }
        Ok(Self { url })
    }
}

impl std::fmt::Display for PageAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.url, f)
    }
}

/// Reading address for a chosen passage under `base`.
pub fn read_url(base: &Url, passage: &Passage) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{READ_PATH}"));
    url.query_pairs_mut()
        .clear()
        .append_pair("translation", &passage.translation)
        .append_pair("book", &passage.book)
        .append_pair("chapter", &passage.chapter);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(address: &str) -> PageAddress {
        PageAddress::parse(address).unwrap()
    }

    #[test]
    fn reads_passage_parameters() {
        let passage =
            page("http://localhost:5000/read?book=1%20John&chapter=4&translation=kjv").passage();
        assert_eq!(passage.book.as_deref(), Some("1 John"));
        assert_eq!(passage.chapter.as_deref(), Some("4"));
        assert_eq!(passage.translation.as_deref(), Some("kjv"));
    }

    #[test]
    fn next_chapter_keeps_other_parameters_in_place() {
        let next = page("http://localhost:5000/read?book=John&chapter=3&translation=web")
            .with_chapter_delta(1)
            .unwrap();
        assert_eq!(
            next.as_url().as_str(),
            "http://localhost:5000/read?book=John&chapter=4&translation=web"
        );
    }

    #[test]
    fn previous_chapter() {
        let prev = page("http://localhost:5000/read?book=John&chapter=3")
            .with_chapter_delta(-1)
            .unwrap();
        assert_eq!(prev.passage().chapter.as_deref(), Some("2"));
    }

    #[test]
    fn cannot_go_before_first_chapter() {
        let err = page("http://localhost:5000/read?book=John&chapter=1")
            .with_chapter_delta(-1)
            .unwrap_err();
        assert_eq!(err, NavigationError::ChapterOutOfRange(0));
    }

    #[test]
    fn missing_or_garbled_chapter_is_rejected() {
        let err = page("http://localhost:5000/read?book=John")
            .with_chapter_delta(1)
            .unwrap_err();
        assert_eq!(err, NavigationError::InvalidChapter { found: None });

        let err = page("http://localhost:5000/read?chapter=three")
            .with_chapter_delta(1)
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::InvalidChapter {
                found: Some("three".to_string())
            }
        );
    }

    #[test]
    fn duplicate_chapter_parameters_collapse() {
        let next = page("http://h/read?chapter=2&book=Ruth&chapter=9")
            .with_chapter_delta(1)
            .unwrap();
        assert_eq!(next.as_url().query(), Some("chapter=3&book=Ruth"));
    }

    #[test]
    fn switching_translation_rebuilds_read_address() {
        let current =
            page("http://localhost:5000/read?chapter=3&book=Song%20of%20Solomon&translation=web&x=1");
        let switched = current.with_translation("kjv").unwrap();
        assert_eq!(
            switched.as_url().as_str(),
            "http://localhost:5000/read?translation=kjv&book=Song+of+Solomon&chapter=3"
        );
    }

    #[test]
    fn switching_translation_omits_missing_parameters() {
        let switched = page("http://localhost:5000/").with_translation("web").unwrap();
        assert_eq!(switched.as_url().query(), Some("translation=web"));
    }

    #[test]
    fn read_url_keeps_base_prefix() {
        let base = Url::parse("https://example.org/bible/").unwrap();
        let passage = Passage {
            translation: "web".to_string(),
            book: "Genesis".to_string(),
            chapter: "1".to_string(),
        };
        assert_eq!(
            read_url(&base, &passage).as_str(),
            "https://example.org/bible/read?translation=web&book=Genesis&chapter=1"
        );
    }

    #[test]
    fn invalid_address_is_reported() {
        assert!(matches!(
            PageAddress::parse("not a url"),
            Err(NavigationError::InvalidAddress(_))
        ));
    }
}
