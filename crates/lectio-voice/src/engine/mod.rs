//! Speech engine adapters.
//!
//! Two implementations of [`SpeechEngine`]:
//!
//! | Engine                       | Module         | Audible | Needs        |
//! |------------------------------|----------------|---------|--------------|
//! | [`CommandSpeechEngine`]      | [`command`]    |  ✓      | `espeak-ng`, `espeak` or `say` on `PATH` |
//! | [`TranscriptSpeechEngine`]   | [`transcript`] |         | nothing      |
//!
//! Both run utterances as tokio tasks and fire the unit's completion signal
//! from there, so a tokio runtime must be current when `speak` is called.

pub mod command;
pub mod transcript;

pub use command::{CommandSpeechEngine, SynthesizerProgram};
pub use transcript::TranscriptSpeechEngine;

use lectio_core::{EngineKind, SpeechEngine};

/// Build the engine for `kind`, or `None` if that engine cannot run here.
///
/// `wpm` is the transcript engine's reading pace.
pub fn detect_engine(kind: EngineKind, wpm: u32) -> Option<Box<dyn SpeechEngine>> {
    match kind {
        EngineKind::Command => CommandSpeechEngine::detect().map(boxed),
        EngineKind::Transcript => Some(boxed(TranscriptSpeechEngine::stdout(wpm))),
        EngineKind::Auto => {
            if let Some(engine) = CommandSpeechEngine::detect() {
                return Some(boxed(engine));
            }
            tracing::warn!("No speech synthesizer found, falling back to transcript output");
            Some(boxed(TranscriptSpeechEngine::stdout(wpm)))
        }
    }
}

fn boxed<E: SpeechEngine + 'static>(engine: E) -> Box<dyn SpeechEngine> {
    Box::new(engine)
}
