//! Catalog snapshot models
//!
//! Read-only value types supplied by the catalog provider for each
//! computation. The quoting core never mutates them.

pub mod equipment;
pub mod financing;
pub mod package;

pub use equipment::*;
pub use financing::*;
pub use package::*;
