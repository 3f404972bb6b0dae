//! Scripture catalog records returned by the selection service.

use serde::{Deserialize, Serialize};

/// A Bible translation offered by the selection service.
///
/// Only `identifier` and `name` drive the menus; the upstream catalog also
/// reports a language, which is kept when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Short identifier used in query parameters (e.g. `"web"`, `"kjv"`).
    pub identifier: String,

    /// Human-readable name shown in the menu.
    pub name: String,

    /// Language name, if the service reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Translation {
    /// Convenience constructor used by adapters and tests.
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            language: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_upstream_record_and_ignores_unknown_fields() {
        let json = r#"{
            "identifier": "web",
            "name": "World English Bible",
            "language": "English",
            "language_code": "eng",
            "license": "Public Domain"
        }"#;

        let translation: Translation = serde_json::from_str(json).unwrap();
        assert_eq!(translation.identifier, "web");
        assert_eq!(translation.name, "World English Bible");
        assert_eq!(translation.language.as_deref(), Some("English"));
    }

    #[test]
    fn language_is_optional() {
        let translation: Translation =
            serde_json::from_str(r#"{"identifier": "kjv", "name": "King James Version"}"#).unwrap();
        assert_eq!(translation, Translation::new("kjv", "King James Version"));
    }
}
