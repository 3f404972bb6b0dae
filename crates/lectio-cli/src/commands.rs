//! Commands enum and argument groups.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use lectio_core::EngineKind;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List available translations
    Translations,

    /// List the books of a translation
    Books {
        /// Translation identifier (e.g. "web")
        #[arg(short, long)]
        translation: String,
    },

    /// List the chapters of a book
    Chapters {
        /// Translation identifier
        #[arg(short, long)]
        translation: String,
        /// Book name (e.g. "1 John")
        #[arg(short, long)]
        book: String,
    },

    /// Print the reading address for a passage, checked against the menus
    Read {
        #[arg(short, long)]
        translation: String,
        #[arg(short, long)]
        book: String,
        #[arg(short, long)]
        chapter: String,
    },

    /// Read a chapter file aloud, verse by verse
    Listen(ListenArgs),

    /// Rewrite a reading address to another chapter or translation
    Nav(NavArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListenArgs {
    /// Chapter file: one verse per line, or JSON
    pub file: PathBuf,

    /// Speech engine
    #[arg(long, env = "LECTIO_ENGINE")]
    pub engine: Option<EngineKind>,

    /// Language tag for the voice (e.g. "en-GB")
    #[arg(long, env = "LECTIO_LANG")]
    pub lang: Option<String>,

    /// Speaking rate multiplier (0.1 - 10)
    #[arg(long, env = "LECTIO_RATE")]
    pub rate: Option<f32>,

    /// Pitch multiplier (0 - 2)
    #[arg(long, env = "LECTIO_PITCH")]
    pub pitch: Option<f32>,

    /// Words per minute for the transcript engine
    #[arg(long)]
    pub wpm: Option<u32>,

    /// Enter toggles play/pause, q quits
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NavArgs {
    /// Current reading address
    pub url: String,

    #[command(flatten)]
    pub target: NavTarget,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct NavTarget {
    /// Next chapter
    #[arg(long)]
    pub next: bool,

    /// Previous chapter
    #[arg(long)]
    pub prev: bool,

    /// Same book and chapter in another translation
    #[arg(long)]
    pub translation: Option<String>,
}
