//! # bookworm-core - Core Domain Types
//!
//! Foundation crate for bookworm. Provides the search domain types, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SearchSection`] - One raw section from the book-search API response
//! - [`ResultSummary`] - Display-ready entry (title + first snippet)
//! - [`ViewState`] - What the UI should currently show
//!   (Initial, Loading, Content, Error)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Request-failure and infrastructure error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use bookworm_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all bookworm crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{ResultSummary, SearchSection, ViewState};
