//! Transcript engine: prints each verse and paces completions by reading time.
//!
//! Useful where no synthesizer is installed, and deterministic enough for
//! tests under a paused tokio clock.

use std::io::Write;
use std::time::Duration;

use lectio_core::{SpeechEngine, SpeechEngineError, SpeechUnit};
use tokio::task::JoinHandle;

/// Prints verses instead of speaking them.
pub struct TranscriptSpeechEngine {
    writer: Box<dyn Write + Send>,
    wpm: u32,
    pending: Option<JoinHandle<()>>,
}

impl TranscriptSpeechEngine {
    pub fn new(writer: Box<dyn Write + Send>, wpm: u32) -> Self {
        Self {
            writer,
            wpm: wpm.max(1),
            pending: None,
        }
    }

    /// Transcript on standard output.
    pub fn stdout(wpm: u32) -> Self {
        Self::new(Box::new(std::io::stdout()), wpm)
    }

    /// Time it takes to read `text` at this engine's pace scaled by `rate`.
    pub fn reading_time(&self, text: &str, rate: f32) -> Duration {
        let words = text.split_whitespace().count().max(1);
        let rate = f64::from(rate).max(0.1);
        #[allow(clippy::cast_precision_loss)]
        let seconds = words as f64 * 60.0 / (f64::from(self.wpm) * rate);
        Duration::from_secs_f64(seconds)
    }
}

impl SpeechEngine for TranscriptSpeechEngine {
    fn name(&self) -> &str {
        "transcript"
    }

    fn speak(&mut self, unit: &SpeechUnit) -> Result<(), SpeechEngineError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| SpeechEngineError::Dispatch(format!("no async runtime: {e}")))?;

        self.cancel_all();

        writeln!(self.writer, "{}. {}", unit.ticket().verse + 1, unit.text())
            .and_then(|()| self.writer.flush())
            .map_err(|e| SpeechEngineError::Dispatch(format!("transcript write failed: {e}")))?;

        let delay = self.reading_time(unit.text(), unit.params().rate);
        let signal = unit.completion();
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            signal.fire();
        }));

        Ok(())
    }

    fn cancel_all(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for TranscriptSpeechEngine {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl std::fmt::Debug for TranscriptSpeechEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptSpeechEngine")
            .field("wpm", &self.wpm)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use lectio_core::{CompletionSignal, PlaybackEvent, SpeechParams, UnitTicket};
    use tokio::sync::mpsc;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn unit(verse: usize, text: &str, tx: &mpsc::UnboundedSender<PlaybackEvent>) -> SpeechUnit {
        SpeechUnit::new(
            text,
            SpeechParams::default(),
            CompletionSignal::new(UnitTicket { run: 1, verse }, tx.clone()),
        )
    }

    #[test]
    fn reading_time_scales_with_words_and_rate() {
        let engine = TranscriptSpeechEngine::new(Box::new(std::io::sink()), 60);
        assert_eq!(engine.reading_time("one two three", 1.0), Duration::from_secs(3));
        assert_eq!(engine.reading_time("one two three", 3.0), Duration::from_secs(1));
        assert_eq!(engine.reading_time("", 1.0), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn prints_verse_and_fires_after_reading_time() {
        let buffer = SharedBuffer::default();
        let mut engine = TranscriptSpeechEngine::new(Box::new(buffer.clone()), 60);
        let (tx, mut rx) = mpsc::unbounded_channel();

        engine.speak(&unit(2, "Jesus wept.", &tx)).unwrap();
        assert_eq!(buffer.contents(), "3. Jesus wept.\n");

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(
            rx.try_recv().unwrap(),
            PlaybackEvent::UnitFinished(UnitTicket { run: 1, verse: 2 })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_unit_never_fires() {
        let mut engine = TranscriptSpeechEngine::new(Box::new(std::io::sink()), 60);
        let (tx, mut rx) = mpsc::unbounded_channel();

        engine.speak(&unit(0, "In the beginning", &tx)).unwrap();
        engine.cancel_all();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }
}
