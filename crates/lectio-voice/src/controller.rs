//! Verse playback controller: sequential read-aloud with pause/resume.
//!
//! The controller is a two-state machine:
//!
//! ```text
//!   Idle ──Play──▶ Playing ──(unit finished, more left)──▶ Playing
//!    ▲                │
//!    └──Stop / Play / last unit finished / dispatch failure──┘
//! ```
//!
//! Play captures the verses from the [`VerseSource`], queues one
//! [`SpeechUnit`] per verse from the resume bookmark onwards, and hands the
//! first to the [`SpeechEngine`]. Each unit's completion posts
//! [`PlaybackEvent::UnitFinished`] onto the controller's channel; only then is
//! the next unit dispatched, so at most one unit is ever in flight.
//!
//! The bookmark (`last_played`) moves only when a unit finishes naturally. A
//! stop cancels the engine, and the interrupted unit never reports, so the
//! bookmark stays where it was.

use lectio_core::{
    CompletionSignal, IndicatorState, PlaybackEvent, PlaybackView, SpeechEngine, SpeechParams,
    SpeechUnit, UnitTicket, VerseSource,
};
use tokio::sync::mpsc;

use crate::error::PlaybackError;

/// Notice shown when Play is pressed without a speech engine.
pub const ENGINE_UNAVAILABLE_NOTICE: &str = "Your system does not support text-to-speech.";

// ── State ──────────────────────────────────────────────────────────

/// Externally visible controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Playing,
}

/// Configuration for the playback controller.
#[derive(Debug, Clone, Default)]
pub struct PlaybackConfig {
    /// Voice parameters stamped onto every unit.
    pub speech: SpeechParams,
}

// ── Handle ─────────────────────────────────────────────────────────

/// Cloneable sender for user entry points (play toggle, stop, shutdown).
#[derive(Debug, Clone)]
pub struct PlaybackHandle {
    tx: mpsc::UnboundedSender<PlaybackEvent>,
}

impl PlaybackHandle {
    /// Play/pause toggle.
    pub fn toggle(&self) {
        self.send(PlaybackEvent::Play);
    }

    pub fn stop(&self) {
        self.send(PlaybackEvent::Stop);
    }

    /// Stop and restart from the first verse on the next toggle.
    pub fn rewind(&self) {
        self.send(PlaybackEvent::Rewind);
    }

    pub fn shutdown(&self) {
        self.send(PlaybackEvent::Shutdown);
    }

    fn send(&self, event: PlaybackEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!(?event, "Playback controller dropped");
        }
    }
}

// ── Controller ─────────────────────────────────────────────────────

/// Owns all playback state for one reading session.
pub struct PlaybackController {
    config: PlaybackConfig,

    /// `None` when the environment has no speech engine.
    engine: Option<Box<dyn SpeechEngine>>,

    source: Box<dyn VerseSource>,

    view: Box<dyn PlaybackView>,

    is_playing: bool,

    /// Units for the current run; `queue[i]` speaks verse `start_index + i`.
    queue: Vec<SpeechUnit>,

    /// Position in `queue` of the unit speaking or about to speak.
    current_index: usize,

    /// Absolute verse index of `queue[0]`.
    start_index: usize,

    /// Resume bookmark: absolute index of the last verse that finished.
    last_played: Option<usize>,

    /// Bumped on every Play; stale tickets from earlier runs never match.
    run: u64,

    /// Ticket of the unit currently handed to the engine.
    in_flight: Option<UnitTicket>,

    /// Failure that halted playback inside the event loop, where there is
    /// no caller to return it to.
    halted: Option<PlaybackError>,

    /// Completion signals post here.
    event_tx: mpsc::UnboundedSender<PlaybackEvent>,
}

impl PlaybackController {
    /// Create an idle controller.
    ///
    /// Returns the controller and the receiving end of its event channel.
    /// Feed received events to [`handle_event`](Self::handle_event), or let
    /// [`run`](Self::run) / [`run_until_idle`](Self::run_until_idle) do it.
    #[must_use]
    pub fn new(
        config: PlaybackConfig,
        engine: Option<Box<dyn SpeechEngine>>,
        source: Box<dyn VerseSource>,
        view: Box<dyn PlaybackView>,
    ) -> (Self, mpsc::UnboundedReceiver<PlaybackEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let controller = Self {
            config,
            engine,
            source,
            view,
            is_playing: false,
            queue: Vec::new(),
            current_index: 0,
            start_index: 0,
            last_played: None,
            run: 0,
            in_flight: None,
            halted: None,
            event_tx,
        };

        (controller, event_rx)
    }

    /// A sender for user entry points.
    pub fn handle(&self) -> PlaybackHandle {
        PlaybackHandle {
            tx: self.event_tx.clone(),
        }
    }

    pub const fn status(&self) -> PlaybackStatus {
        if self.is_playing {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Idle
        }
    }

    pub const fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Resume bookmark (`None` = never played).
    pub const fn last_played_index(&self) -> Option<usize> {
        self.last_played
    }

    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub const fn in_flight(&self) -> Option<UnitTicket> {
        self.in_flight
    }

    pub const fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// The failure that last halted playback from the event loop, if any.
    /// Taking it clears it.
    pub const fn take_error(&mut self) -> Option<PlaybackError> {
        self.halted.take()
    }

    // ── Entry points ───────────────────────────────────────────────

    /// Play/pause toggle.
    ///
    /// While playing this is a stop. While idle it starts a new run from the
    /// bookmark (or from the first verse if nothing has finished yet).
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        if self.is_playing {
            tracing::debug!(run = self.run, "Play pressed while playing, stopping");
            self.stop();
            return Ok(());
        }

        if self.engine.is_none() {
            tracing::warn!("Play refused: no speech engine");
            self.view.notice(ENGINE_UNAVAILABLE_NOTICE);
            return Err(PlaybackError::EngineUnavailable);
        }

        let verses = match self.source.verses() {
            Ok(verses) => verses,
            Err(e) => {
                tracing::warn!(error = %e, "Play refused: verse source failed");
                self.view.notice(&e.to_string());
                return Err(e.into());
            }
        };

        let start = self.last_played.unwrap_or(0);
        self.run += 1;
        let run = self.run;
        let total = verses.len();

        let queue: Vec<SpeechUnit> = verses
            .into_iter()
            .enumerate()
            .skip(start)
            .map(|(verse, text)| {
                let ticket = UnitTicket { run, verse };
                SpeechUnit::new(
                    text,
                    self.config.speech.clone(),
                    CompletionSignal::new(ticket, self.event_tx.clone()),
                )
            })
            .collect();

        self.queue = queue;
        self.start_index = start;
        self.current_index = 0;
        self.is_playing = true;
        self.view.show(IndicatorState::Pause);

        tracing::info!(run, start, total, queued = self.queue.len(), "Playback started");

        if self.queue.is_empty() {
            tracing::debug!(run, "Nothing to play");
            self.stop();
            return Ok(());
        }

        self.dispatch_current()
    }

    /// Stop playback and cancel the engine.
    ///
    /// The bookmark is left alone. Safe to call while idle.
    pub fn stop(&mut self) {
        let was_playing = self.is_playing;

        self.is_playing = false;
        if let Some(engine) = self.engine.as_mut() {
            engine.cancel_all();
        }
        self.queue.clear();
        self.in_flight = None;
        self.view.show(IndicatorState::Play);

        if was_playing {
            tracing::info!(run = self.run, bookmark = ?self.last_played, "Playback stopped");
        }
    }

    /// Forget the resume bookmark so the next Play starts at the first verse.
    pub fn reset_bookmark(&mut self) {
        tracing::debug!(bookmark = ?self.last_played, "Bookmark reset");
        self.last_played = None;
    }

    /// Completion of the unit with `ticket`.
    ///
    /// Completions that do not match the in-flight unit (cancelled, or from
    /// an earlier run) are ignored.
    pub fn on_unit_finished(&mut self, ticket: UnitTicket) {
        if self.in_flight != Some(ticket) {
            tracing::debug!(
                run = ticket.run,
                verse = ticket.verse,
                "Ignoring stale completion"
            );
            return;
        }

        self.in_flight = None;
        self.last_played = Some(ticket.verse);
        self.current_index += 1;

        if self.current_index < self.queue.len() {
            if let Err(e) = self.dispatch_current() {
                tracing::debug!(error = %e, "Playback halted");
                self.halted = Some(e);
            }
        } else {
            tracing::info!(run = self.run, last = ticket.verse, "Reached end of verses");
            self.stop();
        }
    }

    // ── Event loop ─────────────────────────────────────────────────

    /// Apply one event. Returns `false` on [`PlaybackEvent::Shutdown`].
    pub fn handle_event(&mut self, event: PlaybackEvent) -> bool {
        match event {
            PlaybackEvent::Play => {
                if let Err(e) = self.play() {
                    tracing::debug!(error = %e, "Play did not start");
                    self.halted = Some(e);
                }
            }
            PlaybackEvent::Stop => self.stop(),
            PlaybackEvent::Rewind => {
                self.stop();
                self.reset_bookmark();
            }
            PlaybackEvent::UnitFinished(ticket) => self.on_unit_finished(ticket),
            PlaybackEvent::Shutdown => {
                self.stop();
                return false;
            }
        }
        true
    }

    /// Consume events until shutdown.
    pub async fn run(&mut self, events: &mut mpsc::UnboundedReceiver<PlaybackEvent>) {
        while let Some(event) = events.recv().await {
            if !self.handle_event(event) {
                break;
            }
        }
    }

    /// Consume events until the controller is idle (or shut down).
    pub async fn run_until_idle(&mut self, events: &mut mpsc::UnboundedReceiver<PlaybackEvent>) {
        while self.is_playing {
            let Some(event) = events.recv().await else {
                break;
            };
            if !self.handle_event(event) {
                break;
            }
        }
    }

    // ── Internal helpers ───────────────────────────────────────────

    /// Hand `queue[current_index]` to the engine.
    fn dispatch_current(&mut self) -> Result<(), PlaybackError> {
        let (Some(unit), Some(engine)) = (self.queue.get(self.current_index), self.engine.as_mut())
        else {
            self.stop();
            return Ok(());
        };

        let ticket = unit.ticket();
        match engine.speak(unit) {
            Ok(()) => {
                self.in_flight = Some(ticket);
                tracing::debug!(
                    run = ticket.run,
                    verse = ticket.verse,
                    position = self.current_index,
                    "Dispatched verse"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(verse = ticket.verse, error = %e, "Speech engine rejected verse");
                self.view.notice(&e.to_string());
                self.stop();
                Err(e.into())
            }
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        if self.is_playing {
            self.stop();
        }
    }
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("status", &self.status())
            .field("run", &self.run)
            .field("queued", &self.queue.len())
            .field("current_index", &self.current_index)
            .field("start_index", &self.start_index)
            .field("last_played", &self.last_played)
            .field("in_flight", &self.in_flight)
            .field("engine", &self.engine.as_ref().map(|e| e.name().to_string()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticVerseSource;

    struct NullView;

    impl PlaybackView for NullView {
        fn show(&mut self, _state: IndicatorState) {}
        fn notice(&mut self, _message: &str) {}
    }

    fn controller_without_engine() -> PlaybackController {
        let (controller, _rx) = PlaybackController::new(
            PlaybackConfig::default(),
            None,
            Box::new(StaticVerseSource::new(["In the beginning"])),
            Box::new(NullView),
        );
        controller
    }

    #[test]
    fn controller_creates_in_idle_state() {
        let controller = controller_without_engine();
        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert_eq!(controller.last_played_index(), None);
        assert_eq!(controller.queue_len(), 0);
        assert!(!controller.has_engine());
    }

    #[test]
    fn play_without_engine_is_refused() {
        let mut controller = controller_without_engine();
        let err = controller.play().unwrap_err();
        assert!(matches!(err, PlaybackError::EngineUnavailable));
        assert_eq!(controller.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn stop_while_idle_is_harmless() {
        let mut controller = controller_without_engine();
        controller.stop();
        controller.stop();
        assert_eq!(controller.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn shutdown_event_ends_loop() {
        let mut controller = controller_without_engine();
        assert!(controller.handle_event(PlaybackEvent::Stop));
        assert!(!controller.handle_event(PlaybackEvent::Shutdown));
    }

    #[test]
    fn stray_completion_while_idle_is_ignored() {
        let mut controller = controller_without_engine();
        controller.on_unit_finished(UnitTicket { run: 0, verse: 0 });
        assert_eq!(controller.last_played_index(), None);
    }
}
