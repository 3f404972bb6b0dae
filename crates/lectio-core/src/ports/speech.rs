//! Speech playback ports: engine, verse source and view.
//!
//! The playback controller in `lectio-voice` operates on trait objects
//! (`Box<dyn SpeechEngine>`, `Box<dyn VerseSource>`, `Box<dyn PlaybackView>`)
//! so that engines and front ends can be swapped without touching the state
//! machine.

use thiserror::Error;

use crate::domain::{IndicatorState, SpeechUnit};

// ── Errors ─────────────────────────────────────────────────────────

/// Failure to hand a unit to the speech engine.
#[derive(Debug, Error)]
pub enum SpeechEngineError {
    /// The engine could not start the utterance (process spawn, device, etc.).
    #[error("Failed to start utterance: {0}")]
    Dispatch(String),
}

/// Failure to capture verses.
#[derive(Debug, Error)]
pub enum VerseSourceError {
    /// The backing content could not be read.
    #[error("Verse source unavailable: {0}")]
    Unavailable(String),

    /// The backing content was read but has an unexpected shape.
    #[error("Malformed verse content: {0}")]
    Malformed(String),
}

// ── Speech engine ──────────────────────────────────────────────────

/// Backend-agnostic text-to-speech engine.
///
/// `speak` is fire-and-forget: it returns as soon as the utterance has been
/// handed off. When the utterance ends naturally the engine fires
/// [`SpeechUnit::completion`]. `cancel_all` halts anything in flight and must
/// guarantee that no completion fires afterwards for the cancelled units.
pub trait SpeechEngine: Send {
    /// Short engine name for logs (e.g. `"espeak-ng"`).
    fn name(&self) -> &str;

    /// Begin speaking `unit`.
    fn speak(&mut self, unit: &SpeechUnit) -> Result<(), SpeechEngineError>;

    /// Abort in-flight and queued utterances without firing their completions.
    fn cancel_all(&mut self);
}

// ── Verse source ───────────────────────────────────────────────────

/// Ordered verse texts, captured at the moment playback starts.
pub trait VerseSource: Send {
    fn verses(&mut self) -> Result<Vec<String>, VerseSourceError>;
}

// ── View ───────────────────────────────────────────────────────────

/// The user-facing side of playback: play/pause indicator plus notices.
pub trait PlaybackView: Send {
    /// Set the play/pause indicator. Called on every state transition.
    fn show(&mut self, state: IndicatorState);

    /// Surface a blocking, user-visible notice.
    fn notice(&mut self, message: &str);
}
