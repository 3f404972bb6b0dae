//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - No process or audio implementation details
//! - Speech engines report completion through the unit's signal, never by return value

pub mod selection;
pub mod speech;

pub use selection::{SelectionError, SelectionResult, SelectionServicePort};
pub use speech::{PlaybackView, SpeechEngine, SpeechEngineError, VerseSource, VerseSourceError};
