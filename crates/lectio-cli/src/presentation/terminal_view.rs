//! Playback indicator and notices on the terminal.

use std::io::Write;

use lectio_core::{IndicatorState, PlaybackView};

/// Writes indicator changes and notices to stderr so stdout stays the
/// transcript.
pub struct TerminalView<W: Write + Send> {
    out: W,
    last: Option<IndicatorState>,
}

impl TerminalView<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub const fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> PlaybackView for TerminalView<W> {
    fn show(&mut self, state: IndicatorState) {
        // Stop while idle re-sends Play.
        if self.last == Some(state) {
            return;
        }
        self.last = Some(state);
        let hint = match state {
            IndicatorState::Pause => "playing",
            IndicatorState::Play => "stopped",
        };
        if let Err(e) = writeln!(self.out, "{} {hint}", state.icon()) {
            tracing::debug!(error = %e, "Indicator write failed");
        }
    }

    fn notice(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "! {message}") {
            tracing::debug!(error = %e, "Notice write failed");
        }
    }
}
