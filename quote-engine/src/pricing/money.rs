//! Money helpers
//!
//! Prices stay plain `f64` through the core: totals are straight sums and
//! override candidates follow their formulas without rounding. Rounding to
//! cents happens only for display (`utils::format`).

use shared::error::{AppError, AppResult};

/// Validate that a monetary input is finite (not NaN, not Infinity)
#[inline]
pub fn require_finite(value: f64, field_name: &str) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::invalid_amount(field_name, value))
    }
}

/// Plain sum of prices, in iteration order
pub fn sum_prices(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().sum()
}
