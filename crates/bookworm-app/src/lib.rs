//! bookworm-app - Application state and orchestration for bookworm
//!
//! This crate implements the TEA (The Elm Architecture) pattern for input
//! handling, the search presenter (an observable Loading -> Content | Error
//! state machine), the repository wrapping the book-search REST call, and
//! configuration loading. The transport it hands the repository is built by
//! the platform trust verifier; no trust configuration is assembled here.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod presenter;
pub mod repository;
pub mod state;
pub mod transport;

// Re-export primary types
pub use config::{SearchSettings, Settings};
pub use handler::{update, UpdateAction};
pub use input_key::InputKey;
pub use message::Message;
pub use presenter::SearchPresenter;
pub use repository::{LocalSearchBackend, SearchBackend, SearchRepository};
pub use state::AppState;
