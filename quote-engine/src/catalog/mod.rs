//! Catalog snapshot, flattening and lookup

mod aggregator;
pub mod defaults;
mod index;
mod snapshot;

pub use aggregator::*;
pub use index::CatalogIndex;
pub use snapshot::CatalogSnapshot;
