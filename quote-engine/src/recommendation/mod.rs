//! Recommendation Module
//!
//! Payment-target search across packages and financing plans.

mod matcher;

pub use matcher::*;
