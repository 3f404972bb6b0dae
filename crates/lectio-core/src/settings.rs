//! Reader settings and validation.
//!
//! Pure domain types: the CLI fills these from flags, environment and
//! defaults, then calls [`validate_settings`] before wiring anything up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::SpeechParams;

/// Default address of the selection service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default reading pace of the transcript engine.
pub const DEFAULT_TRANSCRIPT_WPM: u32 = 180;

/// Which speech engine to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Local synthesizer if one is installed, otherwise the transcript engine.
    #[default]
    Auto,

    /// Local synthesizer program only (`espeak-ng`, `espeak`, `say`).
    Command,

    /// Print verses with reading-time pacing instead of speaking.
    Transcript,
}

impl EngineKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Command => "command",
            Self::Transcript => "transcript",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "command" => Ok(Self::Command),
            "transcript" => Ok(Self::Transcript),
            other => Err(SettingsError::UnknownEngine(other.to_string())),
        }
    }
}

/// Reader configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderSettings {
    /// Root address of the selection service.
    pub base_url: String,

    /// Voice parameters applied to every verse.
    pub speech: SpeechParams,

    /// Speech engine selection.
    pub engine: EngineKind,

    /// Words per minute for the transcript engine.
    pub transcript_wpm: u32,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            speech: SpeechParams::default(),
            engine: EngineKind::default(),
            transcript_wpm: DEFAULT_TRANSCRIPT_WPM,
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum SettingsError {
    #[error("Base URL is not a valid address: {0}")]
    InvalidBaseUrl(String),

    #[error("Language tag cannot be empty")]
    EmptyLanguage,

    #[error("Speech rate must be between 0.1 and 10, got {0}")]
    InvalidRate(f32),

    #[error("Speech pitch must be between 0 and 2, got {0}")]
    InvalidPitch(f32),

    #[error("Transcript pace must be between 40 and 1000 words per minute, got {0}")]
    InvalidWordsPerMinute(u32),

    #[error("Unknown speech engine '{0}' (expected auto, command or transcript)")]
    UnknownEngine(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &ReaderSettings) -> Result<(), SettingsError> {
    if url::Url::parse(&settings.base_url).is_err() {
        return Err(SettingsError::InvalidBaseUrl(settings.base_url.clone()));
    }

    if settings.speech.lang.trim().is_empty() {
        return Err(SettingsError::EmptyLanguage);
    }

    // Web Speech ranges
    if !(0.1..=10.0).contains(&settings.speech.rate) {
        return Err(SettingsError::InvalidRate(settings.speech.rate));
    }
    if !(0.0..=2.0).contains(&settings.speech.pitch) {
        return Err(SettingsError::InvalidPitch(settings.speech.pitch));
    }

    if !(40..=1000).contains(&settings.transcript_wpm) {
        return Err(SettingsError::InvalidWordsPerMinute(settings.transcript_wpm));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = ReaderSettings::default();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.engine, EngineKind::Auto);
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_validate_rate_out_of_range() {
        let mut settings = ReaderSettings::default();
        settings.speech.rate = 12.0;
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidRate(_))
        ));
    }

    #[test]
    fn test_validate_pitch_out_of_range() {
        let mut settings = ReaderSettings::default();
        settings.speech.pitch = -0.5;
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidPitch(_))
        ));
    }

    #[test]
    fn test_validate_empty_language() {
        let mut settings = ReaderSettings::default();
        settings.speech.lang = "  ".to_string();
        assert_eq!(validate_settings(&settings), Err(SettingsError::EmptyLanguage));
    }

    #[test]
    fn test_validate_bad_base_url() {
        let settings = ReaderSettings {
            base_url: "localhost".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_validate_wpm() {
        let settings = ReaderSettings {
            transcript_wpm: 5,
            ..Default::default()
        };
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::InvalidWordsPerMinute(5))
        );
    }

    #[test]
    fn test_engine_kind_parsing() {
        assert_eq!("auto".parse::<EngineKind>(), Ok(EngineKind::Auto));
        assert_eq!(" Transcript ".parse::<EngineKind>(), Ok(EngineKind::Transcript));
        assert_eq!(EngineKind::Command.to_string(), "command");
        assert!(matches!(
            "festival".parse::<EngineKind>(),
            Err(SettingsError::UnknownEngine(name)) if name == "festival"
        ));
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: ReaderSettings =
            serde_json::from_str(r#"{"engine": "transcript", "speech": {"rate": 1.5}}"#).unwrap();
        assert_eq!(settings.engine, EngineKind::Transcript);
        assert_eq!(settings.speech.lang, "en-US");
        assert!((settings.speech.rate - 1.5).abs() < f32::EPSILON);
        assert_eq!(settings.transcript_wpm, DEFAULT_TRANSCRIPT_WPM);
    }
}
