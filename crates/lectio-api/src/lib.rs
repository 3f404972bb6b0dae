//! Selection service client for lectio.
//!
//! Fetches the translation, book and chapter lists that populate the reading
//! page's menus. Use [`DefaultSelectionClient`] through the
//! [`SelectionServicePort`](lectio_core::SelectionServicePort) trait.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultSelectionClient is meant to be used through SelectionServicePort,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultSelectionClient;

// Configuration
pub use config::ApiClientConfig;

// Errors surfaced by client construction
pub use error::ApiError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
