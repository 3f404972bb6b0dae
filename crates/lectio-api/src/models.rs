//! Internal wire types and client configuration.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::{ApiClientConfig, USER_AGENT};
use crate::error::ApiResult;

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_retries: u8,
    pub retry_base_delay_ms: u64,
}

impl ApiConfig {
    pub fn from_public(config: &ApiClientConfig) -> ApiResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            user_agent: USER_AGENT.to_string(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
        })
    }
}

#[cfg(test)]
impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(lectio_core::DEFAULT_BASE_URL).unwrap(),
            user_agent: "lectio-test".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay_ms: 500,
        }
    }
}

/// Chapter entry as the service sends it: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChapterNumber {
    Number(u64),
    Text(String),
}

impl ChapterNumber {
    pub fn into_label(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }
}

/// `{"error": "..."}` body the service returns on failures.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapters_accept_numbers_and_strings() {
        let chapters: Vec<ChapterNumber> = serde_json::from_str(r#"[1, "2", " 3 "]"#).unwrap();
        let labels: Vec<String> = chapters.into_iter().map(ChapterNumber::into_label).collect();
        assert_eq!(labels, ["1", "2", "3"]);
    }

    #[test]
    fn test_error_body() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "Book parameter is required"}"#).unwrap();
        assert_eq!(body.error, "Book parameter is required");
    }

    #[test]
    fn test_config_rejects_bad_base_url() {
        let config = ApiClientConfig::new().with_base_url("not a url");
        assert!(ApiConfig::from_public(&config).is_err());
    }
}
