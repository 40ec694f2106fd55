//! Quote Module
//!
//! Explicit reducer over `QuoteState` plus the builder that derives a
//! `Quote` from it.

pub mod appliers;
mod builder;
mod reducer;

pub use builder::build_quote;
pub use reducer::{reduce, reduce_all, reduce_with_policy};
pub use appliers::ActionApplier;
