//! Quote policy
//!
//! Business thresholds shared by the override manager, the recommendation
//! matcher and the quote builder. `Default` carries the values sales
//! operations run with; hosts may load others through `Config`.

use serde::{Deserialize, Serialize};

/// Discount percentage above which an override needs manager sign-off
pub const APPROVAL_THRESHOLD_PERCENT: f64 = 10.0;
/// Recommendation acceptance band around the target (0.2 = ±20%)
pub const MATCH_BAND: f64 = 0.2;
/// Number of recommendations shown to the sales rep
pub const RECOMMENDATION_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuotePolicy {
    pub approval_threshold_percent: f64,
    pub match_band: f64,
    pub recommendation_limit: usize,
}

impl Default for QuotePolicy {
    fn default() -> Self {
        Self {
            approval_threshold_percent: APPROVAL_THRESHOLD_PERCENT,
            match_band: MATCH_BAND,
            recommendation_limit: RECOMMENDATION_LIMIT,
        }
    }
}

impl QuotePolicy {
    /// Inclusive payment band `[target × (1 − band), target × (1 + band)]`
    pub fn payment_band(&self, target: f64) -> (f64, f64) {
        (target * (1.0 - self.match_band), target * (1.0 + self.match_band))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band_is_twenty_percent() {
        let (low, high) = QuotePolicy::default().payment_band(150.0);
        assert!((low - 120.0).abs() < 1e-9);
        assert!((high - 180.0).abs() < 1e-9);
    }
}
