//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: menu contents come from `lectio-core`.

pub mod menu;
pub mod terminal_view;

pub use menu::{format_menu, print_menu};
pub use terminal_view::TerminalView;
