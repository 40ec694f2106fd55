//! Quote Engine - pricing and financing core for in-home equipment sales
//!
//! # Architecture
//!
//! Pure, synchronous components a host (web UI, CLI, batch job) re-invokes
//! on every input change:
//!
//! - **Catalog** (`catalog`): flattens the category-keyed catalog snapshot
//! - **Pricing** (`pricing`): bundle discounts and manual price overrides
//! - **Financing** (`financing`): monthly payment amortization
//! - **Recommendations** (`recommendation`): payment-target search
//! - **Quote** (`quote`): explicit reducer over the quote-in-progress
//!
//! # Layout
//!
//! ```text
//! quote-engine/src/
//! ├── core/            # Config
//! ├── catalog/         # Snapshot, flattening, lookup, seed data
//! ├── pricing/         # Bundle resolver, overrides, policy, money helpers
//! ├── financing/       # Amortization
//! ├── recommendation/  # Matcher
//! ├── quote/           # Reducer, appliers, builder
//! └── utils/           # Logger, formatting
//! ```

pub mod catalog;
pub mod core;
pub mod financing;
pub mod pricing;
pub mod quote;
pub mod recommendation;
pub mod utils;

pub use catalog::{CatalogIndex, CatalogSnapshot};
pub use crate::core::Config;
pub use financing::{
    PaymentBreakdown, compute_monthly_payment, compute_total_cost, compute_total_interest,
};
pub use pricing::{QuotePolicy, ResolvedPrice, apply_delta, apply_override, resolve_price};
pub use quote::{build_quote, reduce, reduce_with_policy};
pub use recommendation::{RankedMatch, find_recommendations, top_recommendations};
pub use shared::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and initialize logging
pub fn setup_environment() -> AppResult<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    config.validate()?;

    tracing::debug!(environment = %config.environment, policy = ?config.policy, "Configuration loaded");
    Ok(config)
}
