//! Verse playback for lectio.
//!
//! [`PlaybackController`] reads an ordered list of verses aloud one at a time
//! through a [`SpeechEngine`](lectio_core::SpeechEngine), with play/pause
//! toggling and a resume bookmark. Engine adapters live in [`engine`], verse
//! sources in [`source`].

#![deny(unused_crate_dependencies)]

pub mod controller;
pub mod engine;
pub mod error;
pub mod source;

// Re-export key types for convenience
pub use controller::{
    ENGINE_UNAVAILABLE_NOTICE, PlaybackConfig, PlaybackController, PlaybackHandle, PlaybackStatus,
};
pub use engine::{CommandSpeechEngine, SynthesizerProgram, TranscriptSpeechEngine, detect_engine};
pub use error::PlaybackError;
pub use source::{FileVerseSource, StaticVerseSource, normalize_verse, parse_verses};

// Used by the integration tests only
#[cfg(test)]
use mockall as _;
