//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the CLI: settings are resolved and validated, and the selection service
//! client is built. Command handlers receive the composed [`CliContext`].

use std::sync::Arc;
use std::time::Duration;

use lectio_api::{ApiClientConfig, DefaultSelectionClient};
use lectio_core::{EngineKind, ReaderSettings, SelectionServicePort, validate_settings};
use url::Url;

use crate::error::CliError;

/// Overrides gathered from flags and environment.
///
/// Anything left `None` falls back to [`ReaderSettings::default`].
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub base_url: Option<String>,
    pub lang: Option<String>,
    pub rate: Option<f32>,
    pub pitch: Option<f32>,
    pub engine: Option<EngineKind>,
    pub transcript_wpm: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub retries: Option<u8>,
}

impl CliConfig {
    /// Resolve and validate reader settings.
    pub fn settings(&self) -> Result<ReaderSettings, CliError> {
        let mut settings = ReaderSettings::default();
        if let Some(base_url) = &self.base_url {
            settings.base_url.clone_from(base_url);
        }
        if let Some(lang) = &self.lang {
            settings.speech.lang.clone_from(lang);
        }
        if let Some(rate) = self.rate {
            settings.speech.rate = rate;
        }
        if let Some(pitch) = self.pitch {
            settings.speech.pitch = pitch;
        }
        if let Some(engine) = self.engine {
            settings.engine = engine;
        }
        if let Some(wpm) = self.transcript_wpm {
            settings.transcript_wpm = wpm;
        }

        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Selection client configuration for resolved `settings`.
    pub fn api_config(&self, settings: &ReaderSettings) -> ApiClientConfig {
        let mut api = ApiClientConfig::new().with_base_url(&settings.base_url);
        if let Some(secs) = self.timeout_secs {
            api = api.with_timeout(Duration::from_secs(secs));
        }
        if let Some(retries) = self.retries {
            api = api.with_max_retries(retries);
        }
        api
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub settings: ReaderSettings,
    pub selection: Arc<dyn SelectionServicePort>,
}

impl CliContext {
    /// Root address of the selection service, already validated.
    pub fn base_url(&self) -> Result<Url, CliError> {
        Url::parse(&self.settings.base_url)
            .map_err(|e| CliError::Config(format!("{}: {e}", self.settings.base_url)))
    }
}

/// Wire the selection client for `config`.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let settings = config.settings()?;
    let client = DefaultSelectionClient::new(&config.api_config(&settings))
        .map_err(|e| CliError::Config(e.to_string()))?;

    tracing::debug!(base_url = %settings.base_url, engine = %settings.engine, "CLI bootstrapped");

    Ok(CliContext {
        settings,
        selection: Arc::new(client),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let settings = CliConfig::default().settings().unwrap();
        assert_eq!(settings, ReaderSettings::default());
    }

    #[test]
    fn test_overrides_apply() {
        let config = CliConfig {
            base_url: Some("https://bible.example.org/".to_string()),
            lang: Some("en-GB".to_string()),
            rate: Some(0.8),
            engine: Some(EngineKind::Transcript),
            transcript_wpm: Some(240),
            ..Default::default()
        };
        let settings = config.settings().unwrap();
        assert_eq!(settings.base_url, "https://bible.example.org/");
        assert_eq!(settings.speech.lang, "en-GB");
        assert_eq!(settings.engine, EngineKind::Transcript);
        assert_eq!(settings.transcript_wpm, 240);
    }

    #[test]
    fn test_invalid_override_is_config_error() {
        let config = CliConfig {
            pitch: Some(3.0),
            ..Default::default()
        };
        let err = config.settings().unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_request_tuning_reaches_client_config() {
        let config = CliConfig {
            timeout_secs: Some(5),
            retries: Some(0),
            ..Default::default()
        };
        let settings = config.settings().unwrap();
        let api = format!("{:?}", config.api_config(&settings));
        assert!(api.contains("timeout: 5s"), "{api}");
        assert!(api.contains("max_retries: 0"), "{api}");
    }

    #[test]
    fn test_bootstrap_builds_context() {
        let ctx = bootstrap(&CliConfig::default()).unwrap();
        assert_eq!(ctx.base_url().unwrap().as_str(), "http://localhost:5000/");
    }
}
