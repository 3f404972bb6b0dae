//! Domain types.

pub mod passage;
pub mod speech;

pub use passage::Translation;
pub use speech::{
    CompletionSignal, IndicatorState, PlaybackEvent, SpeechParams, SpeechUnit, UnitTicket,
};
