//! Command-line reader for lectio.
//!
//! Menus from the selection service, read-aloud playback of a chapter, and
//! reading-address navigation. `main.rs` is the composition root; handlers
//! receive a [`CliContext`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, ListenArgs, NavArgs, NavTarget};
pub use error::CliError;
pub use parser::Cli;
