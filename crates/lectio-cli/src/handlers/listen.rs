//! Listen command handler: read a chapter file aloud.
//!
//! Without `--interactive` playback runs to the last verse; Ctrl+C stops it.
//! With `--interactive` each line on stdin is a command: empty line toggles
//! play/pause, `s` stops, `r` rewinds to the first verse, `q` quits.

use anyhow::Result;
use lectio_core::{PlaybackEvent, PlaybackView, ReaderSettings};
use lectio_voice::{FileVerseSource, PlaybackConfig, PlaybackController, detect_engine};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::commands::ListenArgs;
use crate::error::CliError;
use crate::presentation::TerminalView;

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenCommand {
    Toggle,
    Stop,
    Rewind,
    Quit,
}

impl ListenCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "p" | "play" | "pause" => Some(Self::Toggle),
            "s" | "stop" => Some(Self::Stop),
            "r" | "rewind" => Some(Self::Rewind),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Controller for the chapter file in `args`.
pub fn build_controller(
    settings: &ReaderSettings,
    args: &ListenArgs,
    view: Box<dyn PlaybackView>,
) -> (PlaybackController, UnboundedReceiver<PlaybackEvent>) {
    let engine = detect_engine(settings.engine, settings.transcript_wpm);
    if let Some(engine) = &engine {
        tracing::info!(engine = engine.name(), file = %args.file.display(), "Listening");
    }

    PlaybackController::new(
        PlaybackConfig {
            speech: settings.speech.clone(),
        },
        engine,
        Box::new(FileVerseSource::new(&args.file)),
        view,
    )
}

/// Play from the bookmark to the last verse.
pub async fn play_to_end(
    controller: &mut PlaybackController,
    events: &mut UnboundedReceiver<PlaybackEvent>,
) -> Result<(), CliError> {
    controller.play()?;
    controller.run_until_idle(events).await;
    match controller.take_error() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

pub async fn execute(settings: &ReaderSettings, args: &ListenArgs) -> Result<()> {
    let (mut controller, mut events) =
        build_controller(settings, args, Box::new(TerminalView::stderr()));

    if args.interactive {
        return interactive(&mut controller, &mut events).await;
    }

    tokio::select! {
        result = play_to_end(&mut controller, &mut events) => result?,
        signal = tokio::signal::ctrl_c() => {
            signal.map_err(CliError::from)?;
            controller.stop();
            // Let the engine's cancel task reach the synthesizer.
            tokio::task::yield_now().await;
        }
    }
    Ok(())
}

async fn interactive(
    controller: &mut PlaybackController,
    events: &mut UnboundedReceiver<PlaybackEvent>,
) -> Result<()> {
    eprintln!("Enter: play/pause  s: stop  r: rewind  q: quit");

    let handle = controller.handle();
    let input = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => match ListenCommand::parse(&line) {
                    Some(ListenCommand::Toggle) => handle.toggle(),
                    Some(ListenCommand::Stop) => handle.stop(),
                    Some(ListenCommand::Rewind) => handle.rewind(),
                    Some(ListenCommand::Quit) => break,
                    None => eprintln!("? {}", line.trim()),
                },
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "Reading stdin failed");
                    break;
                }
            }
        }
        handle.shutdown();
    });

    controller.handle().toggle();
    tokio::select! {
        () = controller.run(events) => {}
        signal = tokio::signal::ctrl_c() => {
            signal.map_err(CliError::from)?;
            controller.stop();
            // Let the engine's cancel task reach the synthesizer.
            tokio::task::yield_now().await;
        }
    }

    input.abort();
    Ok(())
}
