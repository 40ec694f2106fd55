//! Shared types for the quoting core
//!
//! Catalog snapshot models, quote value types, quote actions and the
//! unified error type. Any host (web, CLI, batch job) exchanges these with
//! the `quote-engine` crate.

pub mod error;
pub mod models;
pub mod quote;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
