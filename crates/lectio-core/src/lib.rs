//! Core domain types and port definitions for lectio.
//!
//! This crate has no I/O of its own. It defines:
//!
//! - the speech playback vocabulary shared by the controller and the engine
//!   adapters ([`domain::speech`]),
//! - the ports the playback controller and the menu glue consume
//!   ([`ports`]),
//! - the pure select-menu model ([`menu`]) and page-address navigation
//!   ([`navigation`]),
//! - reader settings and their validation ([`settings`]).

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod menu;
pub mod navigation;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    CompletionSignal, IndicatorState, PlaybackEvent, SpeechParams, SpeechUnit, Translation,
    UnitTicket,
};
pub use menu::{Menu, MenuError, MenuOption, Passage, SelectionCascade};
pub use navigation::{NavigationError, PageAddress, PassageQuery, read_url};
pub use ports::{
    PlaybackView, SelectionError, SelectionServicePort, SpeechEngine, SpeechEngineError,
    VerseSource, VerseSourceError,
};
pub use settings::{
    DEFAULT_BASE_URL, DEFAULT_TRANSCRIPT_WPM, EngineKind, ReaderSettings, SettingsError,
    validate_settings,
};
