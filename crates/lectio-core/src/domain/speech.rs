//! Speech playback vocabulary shared by the controller and engine adapters.
//!
//! A [`SpeechUnit`] is one verse handed to a speech engine. It carries a
//! [`CompletionSignal`] that the engine fires when the utterance ends
//! naturally; the signal posts [`PlaybackEvent::UnitFinished`] back onto the
//! controller's event channel. Cancelled utterances must never fire it.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Default language tag for utterances.
pub const DEFAULT_LANG: &str = "en-US";

/// Default speaking rate (1.0 = the engine's normal speed).
pub const DEFAULT_RATE: f32 = 1.0;

/// Default pitch (1.0 = the engine's normal pitch).
pub const DEFAULT_PITCH: f32 = 1.0;

// ── Voice parameters ───────────────────────────────────────────────

/// Voice parameters applied to every unit of a playback run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechParams {
    /// BCP 47 language tag (e.g. `"en-US"`).
    pub lang: String,

    /// Rate multiplier, 0.1–10.0.
    pub rate: f32,

    /// Pitch multiplier, 0.0–2.0.
    pub pitch: f32,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
        }
    }
}

// ── Events ─────────────────────────────────────────────────────────

/// Identifies one dispatched unit: the playback run it belongs to and the
/// absolute index of the verse it speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitTicket {
    /// Monotonic playback run number (bumped on every Play).
    pub run: u64,

    /// Absolute verse index within the verse source.
    pub verse: usize,
}

/// Messages consumed by the playback controller.
///
/// User entry points and engine completions share one channel so that a
/// single consumer applies every transition in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Play/pause toggle.
    Play,

    /// Explicit stop.
    Stop,

    /// Stop and forget the resume bookmark.
    Rewind,

    /// The engine finished speaking the unit with this ticket.
    UnitFinished(UnitTicket),

    /// Stop consuming events.
    Shutdown,
}

/// One-shot completion notice attached to a [`SpeechUnit`].
#[derive(Debug, Clone)]
pub struct CompletionSignal {
    ticket: UnitTicket,
    tx: mpsc::UnboundedSender<PlaybackEvent>,
}

impl CompletionSignal {
    /// Create a signal that reports `ticket` on `tx`.
    pub const fn new(ticket: UnitTicket, tx: mpsc::UnboundedSender<PlaybackEvent>) -> Self {
        Self { ticket, tx }
    }

    /// Ticket this signal reports.
    pub const fn ticket(&self) -> UnitTicket {
        self.ticket
    }

    /// Report natural completion (best-effort: a dropped controller is not an error).
    pub fn fire(self) {
        if self.tx.send(PlaybackEvent::UnitFinished(self.ticket)).is_err() {
            tracing::debug!(
                run = self.ticket.run,
                verse = self.ticket.verse,
                "Playback controller gone, completion dropped"
            );
        }
    }
}

// ── Speech unit ────────────────────────────────────────────────────

/// A verse queued for audible playback.
///
/// Immutable once built; the engine receives it by reference and clones the
/// completion signal it needs.
#[derive(Debug, Clone)]
pub struct SpeechUnit {
    text: String,
    params: SpeechParams,
    signal: CompletionSignal,
}

impl SpeechUnit {
    pub fn new(text: impl Into<String>, params: SpeechParams, signal: CompletionSignal) -> Self {
        Self {
            text: text.into(),
            params,
            signal,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn params(&self) -> &SpeechParams {
        &self.params
    }

    pub const fn ticket(&self) -> UnitTicket {
        self.signal.ticket()
    }

    /// A handle the engine fires when this unit ends naturally.
    pub fn completion(&self) -> CompletionSignal {
        self.signal.clone()
    }
}

// ── Indicator ──────────────────────────────────────────────────────

/// Two-state play/pause affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndicatorState {
    /// Idle: pressing the button starts playback.
    Play,

    /// Playing: pressing the button stops playback.
    Pause,
}

impl IndicatorState {
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
        }
    }
}
