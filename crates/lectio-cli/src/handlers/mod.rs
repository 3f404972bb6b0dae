//! Command handlers.
//!
//! Handlers are thin: parse CLI input, call the core or a port, and format
//! the result for the terminal. Errors are returned as [`CliError`] wrapped
//! in `anyhow` so `main` can pick the exit code.
//!
//! [`CliError`]: crate::error::CliError

pub mod listen;
pub mod menus;
pub mod nav;
