//! CLI-specific error types and exit codes.

use lectio_core::{MenuError, NavigationError, SelectionError, SettingsError};
use lectio_voice::PlaybackError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad argument values.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (terminal, stdin).
    #[error("IO error: {0}")]
    Io(String),

    /// Settings did not validate.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The selection service failed or refused.
    #[error("Selection service: {0}")]
    Service(String),

    /// The chapter file could not be read or parsed.
    #[error("{0}")]
    Input(String),

    /// No speech engine on this system.
    #[error("{0}")]
    Unavailable(String),

    /// Playback stopped on an engine failure.
    #[error("Playback error: {0}")]
    Playback(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Io(_) => 74,          // EX_IOERR
            Self::Config(_) => 78,      // EX_CONFIG
            Self::Service(_) => 69,     // EX_UNAVAILABLE
            Self::Input(_) => 66,       // EX_NOINPUT
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Playback(_) => 1,
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<SelectionError> for CliError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::NotFound { .. } | SelectionError::BadRequest { .. } => {
                Self::Arguments(err.to_string())
            }
            SelectionError::Configuration { message } => Self::Config(message),
            _ => Self::Service(err.to_string()),
        }
    }
}

impl From<MenuError> for CliError {
    fn from(err: MenuError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<NavigationError> for CliError {
    fn from(err: NavigationError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<PlaybackError> for CliError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::EngineUnavailable => Self::Unavailable(err.to_string()),
            PlaybackError::Source(_) => Self::Input(err.to_string()),
            PlaybackError::Dispatch(_) => Self::Playback(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
