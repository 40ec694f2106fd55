//! Price Override Manager
//!
//! Manual price adjustments on top of the resolved price.
//!
//! State transitions: `NONE → OVERRIDDEN` on a validated discount or markup,
//! `OVERRIDDEN → NONE` when a later request matches the original price.

use shared::error::{AppError, AppResult};
use shared::quote::{DeltaMode, PriceOverride};
use tracing::{debug, warn};

use super::money::require_finite;
use super::policy::QuotePolicy;

/// Validate and build an override with the default policy
///
/// Returns `Ok(None)` when the requested price equals the original price:
/// the override is cleared, whatever the reason says.
pub fn apply_override(
    original_price: f64,
    requested_price: f64,
    reason: &str,
) -> AppResult<Option<PriceOverride>> {
    apply_override_with_policy(original_price, requested_price, reason, &QuotePolicy::default())
}

pub fn apply_override_with_policy(
    original_price: f64,
    requested_price: f64,
    reason: &str,
    policy: &QuotePolicy,
) -> AppResult<Option<PriceOverride>> {
    require_finite(original_price, "original price")?;
    require_finite(requested_price, "requested price")?;
    if requested_price < 0.0 {
        return Err(AppError::negative_price(requested_price));
    }
    if requested_price == original_price {
        debug!(original_price, "Override matches original price, cleared");
        return Ok(None);
    }

    let reason = reason.trim();
    if requested_price < original_price && reason.is_empty() {
        return Err(AppError::discount_reason_required()
            .with_detail("original_price", original_price)
            .with_detail("requested_price", requested_price));
    }

    let discount_percent = discount_percent(original_price, requested_price);
    let requires_approval = discount_percent > policy.approval_threshold_percent;

    if requires_approval {
        warn!(
            original_price,
            requested_price,
            discount_percent,
            reason,
            "Override exceeds approval threshold, manager approval required"
        );
    } else {
        debug!(
            original_price,
            requested_price,
            discount_percent,
            "Override applied"
        );
    }

    Ok(Some(PriceOverride {
        original_price,
        overridden_price: requested_price,
        reason: reason.to_string(),
        discount_percent,
        requires_approval,
    }))
}

/// `(original − overridden) / original × 100`, zero when there is no original price
fn discount_percent(original_price: f64, overridden_price: f64) -> f64 {
    if original_price <= 0.0 {
        return 0.0;
    }
    (original_price - overridden_price) / original_price * 100.0
}

/// Candidate price after taking an amount or percentage off
///
/// The result never goes below zero and is not rounded. A non-positive or
/// non-finite `value` leaves the original price unchanged. The candidate is
/// normally passed on to [`apply_override`].
pub fn apply_delta(original_price: f64, value: f64, mode: DeltaMode) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return original_price;
    }

    let candidate = match mode {
        DeltaMode::Amount => original_price - value,
        DeltaMode::Percentage => original_price * (1.0 - value / 100.0),
    };

    candidate.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_same_price_clears_override() {
        assert_eq!(apply_override(1000.0, 1000.0, "").unwrap(), None);
        assert_eq!(apply_override(1000.0, 1000.0, "seasonal").unwrap(), None);
    }

    #[test]
    fn test_discount_without_reason_fails() {
        let err = apply_override(1000.0, 850.0, "").unwrap_err();
        assert_eq!(err.code, ErrorCode::DiscountReasonRequired);
        assert_eq!(err.to_string(), "reason required for discount");

        let err = apply_override(1000.0, 850.0, "   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::DiscountReasonRequired);
    }

    #[test]
    fn test_small_discount_needs_no_approval() {
        let ov = apply_override(1000.0, 950.0, "seasonal").unwrap().unwrap();
        assert_eq!(ov.overridden_price, 950.0);
        assert_eq!(ov.discount_percent, 5.0);
        assert!(!ov.requires_approval);
    }

    #[test]
    fn test_large_discount_needs_approval() {
        let ov = apply_override(1000.0, 800.0, "competitive-match").unwrap().unwrap();
        assert_eq!(ov.discount_percent, 20.0);
        assert!(ov.requires_approval);
        assert_eq!(ov.reason, "competitive-match");
    }

    #[test]
    fn test_exactly_ten_percent_needs_no_approval() {
        let ov = apply_override(1000.0, 900.0, "loyalty-discount").unwrap().unwrap();
        assert!(!ov.requires_approval);

        let ov = apply_override(1000.0, 899.99, "loyalty-discount").unwrap().unwrap();
        assert!(ov.requires_approval);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = apply_override(1000.0, -1.0, "other").unwrap_err();
        assert_eq!(err.code, ErrorCode::NegativePrice);
        assert_eq!(err.to_string(), "negative price");
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let err = apply_override(1000.0, f64::NAN, "other").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);
    }

    #[test]
    fn test_markup_needs_no_reason() {
        let ov = apply_override(1000.0, 1100.0, "").unwrap().unwrap();
        assert!(ov.is_markup());
        assert_eq!(ov.discount_percent, -10.0);
        assert!(!ov.requires_approval);
    }

    #[test]
    fn test_zero_original_price() {
        let ov = apply_override(0.0, 250.0, "").unwrap().unwrap();
        assert_eq!(ov.discount_percent, 0.0);
        assert!(!ov.requires_approval);
    }

    #[test]
    fn test_custom_threshold() {
        let policy = QuotePolicy {
            approval_threshold_percent: 4.0,
            ..QuotePolicy::default()
        };
        let ov = apply_override_with_policy(1000.0, 950.0, "seasonal", &policy)
            .unwrap()
            .unwrap();
        assert!(ov.requires_approval);
    }

    #[test]
    fn test_delta_amount() {
        assert_eq!(apply_delta(1000.0, 150.0, DeltaMode::Amount), 850.0);
        assert_eq!(apply_delta(1000.0, 1500.0, DeltaMode::Amount), 0.0);
    }

    #[test]
    fn test_delta_percentage() {
        assert_eq!(apply_delta(14995.0, 10.0, DeltaMode::Percentage), 13495.5);
        assert_eq!(apply_delta(1000.0, 150.0, DeltaMode::Percentage), 0.0);
    }

    #[test]
    fn test_delta_ignores_non_positive_value() {
        assert_eq!(apply_delta(1000.0, 0.0, DeltaMode::Amount), 1000.0);
        assert_eq!(apply_delta(1000.0, -50.0, DeltaMode::Percentage), 1000.0);
        assert_eq!(apply_delta(1000.0, f64::NAN, DeltaMode::Amount), 1000.0);
    }

    #[test]
    fn test_delta_then_override() {
        let candidate = apply_delta(1000.0, 15.0, DeltaMode::Percentage);
        assert_eq!(candidate, 850.0);
        let ov = apply_override(1000.0, candidate, "volume-discount").unwrap().unwrap();
        assert!(ov.requires_approval);
    }

    #[test]
    fn test_sub_cent_delta_is_a_real_discount() {
        let candidate = apply_delta(1000.0, 0.001, DeltaMode::Amount);
        assert!(candidate < 1000.0);
        assert!((candidate - 999.999).abs() < 1e-9);

        let err = apply_override(1000.0, candidate, "").unwrap_err();
        assert_eq!(err.code, ErrorCode::DiscountReasonRequired);
    }

    #[test]
    fn test_huge_values_do_not_panic() {
        let ov = apply_override(0.01, 7e28, "").unwrap().unwrap();
        assert!(ov.is_markup());
        assert!(!ov.requires_approval);

        assert_eq!(apply_delta(1e27, 1e27, DeltaMode::Percentage), 0.0);
        assert_eq!(apply_delta(1e30, 5e29, DeltaMode::Amount), 5e29);
    }

    #[test]
    fn test_non_finite_original_rejected() {
        let err = apply_override(f64::INFINITY, 100.0, "bulk").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);
    }
}
