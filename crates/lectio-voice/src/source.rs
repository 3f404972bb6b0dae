//! Verse sources.
//!
//! A chapter file is either plain text (one verse per non-blank line) or
//! JSON: a list of strings, or `{"verses": [{"text": ".."}, ..]}`. Verse text
//! is whitespace-normalized the way rendered page text is.

use std::path::PathBuf;

use lectio_core::{VerseSource, VerseSourceError};
use serde::Deserialize;

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn normalize_verse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChapterDocument {
    Plain(Vec<String>),
    Structured { verses: Vec<VerseEntry> },
}

#[derive(Deserialize)]
struct VerseEntry {
    text: String,
}

/// Parse chapter content into ordered verse texts.
///
/// Verses that are blank after normalization are kept when they come from
/// JSON, since their position is still a verse index.
pub fn parse_verses(content: &str) -> Result<Vec<String>, VerseSourceError> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        let document: ChapterDocument = serde_json::from_str(trimmed)
            .map_err(|e| VerseSourceError::Malformed(e.to_string()))?;
        let verses = match document {
            ChapterDocument::Plain(verses) => verses,
            ChapterDocument::Structured { verses } => {
                verses.into_iter().map(|entry| entry.text).collect()
            }
        };
        return Ok(verses.iter().map(|v| normalize_verse(v)).collect());
    }

    Ok(content
        .lines()
        .map(normalize_verse)
        .filter(|line| !line.is_empty())
        .collect())
}

/// Fixed list of verses.
#[derive(Debug, Clone, Default)]
pub struct StaticVerseSource {
    verses: Vec<String>,
}

impl StaticVerseSource {
    pub fn new<I, S>(verses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verses: verses.into_iter().map(Into::into).collect(),
        }
    }
}

impl VerseSource for StaticVerseSource {
    fn verses(&mut self) -> Result<Vec<String>, VerseSourceError> {
        Ok(self.verses.clone())
    }
}

/// Chapter file re-read on every Play, so edits show up on the next run.
#[derive(Debug, Clone)]
pub struct FileVerseSource {
    path: PathBuf,
}

impl FileVerseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl VerseSource for FileVerseSource {
    fn verses(&mut self) -> Result<Vec<String>, VerseSourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            VerseSourceError::Unavailable(format!("{}: {e}", self.path.display()))
        })?;
        let verses = parse_verses(&content)?;
        tracing::debug!(path = %self.path.display(), count = verses.len(), "Loaded verses");
        Ok(verses)
    }
}
