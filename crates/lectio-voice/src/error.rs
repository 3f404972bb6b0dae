//! Playback error types.

use lectio_core::{SpeechEngineError, VerseSourceError};

/// Errors that can occur when starting or advancing playback.
///
/// An empty verse source is deliberately not an error: Play completes
/// trivially and the controller returns to idle.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// No speech engine exists in this environment.
    #[error("Text-to-speech is not available: install espeak-ng or use the transcript engine")]
    EngineUnavailable,

    /// Verses could not be captured.
    #[error("Could not read verses: {0}")]
    Source(#[from] VerseSourceError),

    /// The engine refused a unit.
    #[error(transparent)]
    Dispatch(#[from] SpeechEngineError),
}
