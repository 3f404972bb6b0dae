//! Local synthesizer program engine.
//!
//! Each unit runs as one child process (`espeak-ng "text"`, `say "text"`).
//! Process exit is the natural end of the utterance. Cancellation kills the
//! child before returning and the watcher task exits without firing the
//! completion.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use lectio_core::{SpeechEngine, SpeechEngineError, SpeechParams, SpeechUnit};
use tokio::process::Child;

/// espeak's default words per minute.
const ESPEAK_BASE_WPM: f32 = 175.0;

/// espeak's default pitch (0–99 scale).
const ESPEAK_BASE_PITCH: f32 = 50.0;

/// How often the watcher checks whether the synthesizer has exited.
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// The running synthesizer, shared between the engine and its watcher task.
/// Whoever takes the child out owns its fate.
type SharedChild = Arc<Mutex<Option<Child>>>;

fn lock(child: &SharedChild) -> MutexGuard<'_, Option<Child>> {
    child.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Supported synthesizer programs, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesizerProgram {
    EspeakNg,
    Espeak,
    Say,
}

impl SynthesizerProgram {
    pub const ALL: [Self; 3] = [Self::EspeakNg, Self::Espeak, Self::Say];

    pub const fn binary(self) -> &'static str {
        match self {
            Self::EspeakNg => "espeak-ng",
            Self::Espeak => "espeak",
            Self::Say => "say",
        }
    }

    /// Command-line arguments for one utterance.
    pub fn args(self, text: &str, params: &SpeechParams) -> Vec<String> {
        let wpm = words_per_minute(params.rate).to_string();
        // Leading '-' would be taken as an option.
        let text = if text.starts_with('-') {
            format!(" {text}")
        } else {
            text.to_string()
        };

        match self {
            Self::EspeakNg | Self::Espeak => vec![
                "-v".to_string(),
                params.lang.to_ascii_lowercase(),
                "-s".to_string(),
                wpm,
                "-p".to_string(),
                espeak_pitch(params.pitch).to_string(),
                text,
            ],
            Self::Say => vec!["-r".to_string(), wpm, text],
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn words_per_minute(rate: f32) -> u32 {
    (ESPEAK_BASE_WPM * rate).round().clamp(80.0, 450.0) as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn espeak_pitch(pitch: f32) -> u32 {
    (ESPEAK_BASE_PITCH * pitch).round().clamp(0.0, 99.0) as u32
}

/// Speaks units through a local synthesizer program.
#[derive(Debug)]
pub struct CommandSpeechEngine {
    program: SynthesizerProgram,
    path: PathBuf,

    /// The in-flight utterance, if any.
    current: Option<SharedChild>,
}

impl CommandSpeechEngine {
    /// Use `program` at `path` without checking it exists.
    pub fn new(program: SynthesizerProgram, path: impl Into<PathBuf>) -> Self {
        Self {
            program,
            path: path.into(),
            current: None,
        }
    }

    /// First supported synthesizer found on `PATH`.
    pub fn detect() -> Option<Self> {
        SynthesizerProgram::ALL.into_iter().find_map(|program| {
            which::which(program.binary()).ok().map(|path| {
                tracing::info!(program = program.binary(), path = %path.display(), "Found speech synthesizer");
                Self::new(program, path)
            })
        })
    }

    pub const fn program(&self) -> SynthesizerProgram {
        self.program
    }
}

impl SpeechEngine for CommandSpeechEngine {
    fn name(&self) -> &str {
        self.program.binary()
    }

    fn speak(&mut self, unit: &SpeechUnit) -> Result<(), SpeechEngineError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| SpeechEngineError::Dispatch(format!("no async runtime: {e}")))?;

        // One utterance at a time.
        self.cancel_all();

        let child = tokio::process::Command::new(&self.path)
            .args(self.program.args(unit.text(), unit.params()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                SpeechEngineError::Dispatch(format!("{}: {e}", self.path.display()))
            })?;

        let shared: SharedChild = Arc::new(Mutex::new(Some(child)));
        let watched = Arc::clone(&shared);
        let signal = unit.completion();
        let program = self.program.binary();

        runtime.spawn(async move {
            loop {
                tokio::time::sleep(EXIT_POLL_INTERVAL).await;

                let exit = {
                    let mut guard = lock(&watched);
                    let Some(child) = guard.as_mut() else {
                        // Cancelled: the engine took and killed the child.
                        return;
                    };
                    match child.try_wait() {
                        Ok(None) => continue,
                        Ok(Some(status)) => {
                            guard.take();
                            Ok(status)
                        }
                        Err(e) => {
                            guard.take();
                            Err(e)
                        }
                    }
                };

                match exit {
                    Ok(status) if !status.success() => {
                        tracing::warn!(program, %status, "Synthesizer exited with failure");
                    }
                    Err(e) => tracing::warn!(program, error = %e, "Waiting on synthesizer failed"),
                    Ok(_) => {}
                }
                signal.fire();
                return;
            }
        });

        self.current = Some(shared);
        Ok(())
    }

    fn cancel_all(&mut self) {
        let Some(shared) = self.current.take() else {
            return;
        };
        // None means the utterance already finished.
        if let Some(mut child) = lock(&shared).take() {
            if let Err(e) = child.start_kill() {
                tracing::debug!(program = self.program.binary(), error = %e, "Synthesizer already gone");
            }
            // The runtime reaps the dropped child.
        }
    }
}

impl Drop for CommandSpeechEngine {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
