//! bookworm-tui - Terminal UI for bookworm
//!
//! This crate renders the presenter's state stream with ratatui: it polls
//! terminal events, feeds them through the update function, and draws one of
//! the four view states (initial message, progress, results list, error).

pub mod event;
pub mod markup;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
