//! Utilities: logging setup and display formatting

pub mod format;
pub mod logger;

pub use format::{format_currency, format_term};
