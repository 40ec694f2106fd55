//! Amortization Engine
//!
//! Converts a principal, an annual rate and a financing product into a
//! monthly payment:
//!
//! - Revolving: `principal × payment_factor`, term irrelevant
//! - Installment, 0%: `principal / term`
//! - Installment, >0%: `P × r(1+r)^n / ((1+r)^n − 1)` with `r = rate / 100 / 12`
//!
//! All arithmetic is unrounded `f64`; rounding for display belongs to the
//! caller. Degenerate inputs (term 0 on an installment product, non-finite
//! principal or rate) yield a zero payment that is logged and flagged in
//! [`PaymentBreakdown::zero_fallback`].

use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::FinancingProduct;
use tracing::{debug, warn};

/// Below this magnitude the amortization denominator is treated as zero
const DENOMINATOR_EPSILON: f64 = 1e-12;

/// Monthly payment plus the totals a contract shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub monthly_payment: f64,
    /// Payment × term, installment products only
    pub total_cost: Option<f64>,
    /// Total cost − principal, installment products only
    pub total_interest: Option<f64>,
    /// The payment is a guarded zero, not a real figure
    pub zero_fallback: bool,
}

impl PaymentBreakdown {
    fn fallback() -> Self {
        Self {
            monthly_payment: 0.0,
            total_cost: None,
            total_interest: None,
            zero_fallback: true,
        }
    }
}

/// Monthly payment for a financing product
pub fn compute_monthly_payment(principal: f64, annual_rate_percent: f64, product: FinancingProduct) -> f64 {
    payment_breakdown(principal, annual_rate_percent, product).monthly_payment
}

/// Monthly payment for a raw catalog term (0 = revolving account)
pub fn monthly_payment_for_term(
    principal: f64,
    annual_rate_percent: f64,
    term: u32,
    payment_factor: Option<f64>,
) -> f64 {
    compute_monthly_payment(
        principal,
        annual_rate_percent,
        FinancingProduct::from_term(term, payment_factor),
    )
}

/// `monthly_payment × term_months`
///
/// Only meaningful for installment products with a positive term; callers
/// must not use it for revolving accounts.
pub fn compute_total_cost(monthly_payment: f64, term_months: u32) -> f64 {
    monthly_payment * f64::from(term_months)
}

/// Interest paid over the life of an installment loan
pub fn compute_total_interest(principal: f64, monthly_payment: f64, term_months: u32) -> f64 {
    compute_total_cost(monthly_payment, term_months) - principal
}

/// Monthly payment with totals and the zero-fallback flag
pub fn payment_breakdown(
    principal: f64,
    annual_rate_percent: f64,
    product: FinancingProduct,
) -> PaymentBreakdown {
    if !principal.is_finite() || !annual_rate_percent.is_finite() {
        warn!(
            principal,
            annual_rate_percent,
            ?product,
            "Non-finite financing input, monthly payment falls back to 0"
        );
        return PaymentBreakdown::fallback();
    }

    match product {
        FinancingProduct::Revolving { payment_factor } => {
            if !payment_factor.is_finite() {
                warn!(payment_factor, "Non-finite payment factor, monthly payment falls back to 0");
                return PaymentBreakdown::fallback();
            }
            let monthly_payment = principal * payment_factor;
            debug!(principal, payment_factor, monthly_payment, "Revolving payment");
            PaymentBreakdown {
                monthly_payment,
                total_cost: None,
                total_interest: None,
                zero_fallback: false,
            }
        }
        FinancingProduct::Installment { term_months } => {
            if term_months == 0 {
                warn!(
                    principal,
                    annual_rate_percent,
                    "Installment product with term 0, monthly payment falls back to 0"
                );
                return PaymentBreakdown::fallback();
            }

            let monthly_payment = installment_payment(principal, annual_rate_percent, term_months);
            let total_cost = compute_total_cost(monthly_payment, term_months);
            debug!(
                principal,
                annual_rate_percent,
                term_months,
                monthly_payment,
                "Installment payment"
            );
            PaymentBreakdown {
                monthly_payment,
                total_cost: Some(total_cost),
                total_interest: Some(total_cost - principal),
                zero_fallback: false,
            }
        }
    }
}

/// Custom annual rates must be finite and non-negative
pub fn validate_rate(rate: f64) -> AppResult<()> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::InvalidRate).with_detail("rate", rate))
    }
}

/// Level payment for a positive term
fn installment_payment(principal: f64, annual_rate_percent: f64, term_months: u32) -> f64 {
    let n = f64::from(term_months);
    if annual_rate_percent == 0.0 {
        return principal / n;
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powf(n);
    let denominator = growth - 1.0;
    if denominator.abs() < DENOMINATOR_EPSILON {
        return principal / n;
    }

    principal * (monthly_rate * growth) / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installment(term_months: u32) -> FinancingProduct {
        FinancingProduct::Installment { term_months }
    }

    #[test]
    fn test_zero_rate_installment() {
        assert_eq!(compute_monthly_payment(12000.0, 0.0, installment(24)), 500.0);
    }

    #[test]
    fn test_revolving_uses_payment_factor() {
        let product = FinancingProduct::Revolving { payment_factor: 0.01 };
        assert_eq!(compute_monthly_payment(12000.0, 9.9, product), 120.0);
        assert_eq!(monthly_payment_for_term(12000.0, 9.9, 0, Some(0.01)), 120.0);
    }

    #[test]
    fn test_revolving_default_factor() {
        let payment = monthly_payment_for_term(14995.0, 9.9, 0, None);
        assert!((payment - 149.95).abs() < 1e-9, "got {payment}");
    }

    #[test]
    fn test_standard_amortization() {
        let payment = compute_monthly_payment(10000.0, 6.0, installment(36));
        assert!((payment - 304.22).abs() < 0.01, "got {payment}");
    }

    #[test]
    fn test_long_term_amortization() {
        // 12% over 12 months: classic EMI reference value
        let payment = compute_monthly_payment(100_000.0, 12.0, installment(12));
        assert!((payment - 8884.88).abs() < 0.01, "got {payment}");
    }

    #[test]
    fn test_term_zero_installment_falls_back_to_zero() {
        let breakdown = payment_breakdown(12000.0, 6.0, installment(0));
        assert_eq!(breakdown.monthly_payment, 0.0);
        assert!(breakdown.zero_fallback);

        let breakdown = payment_breakdown(12000.0, 0.0, installment(0));
        assert_eq!(breakdown.monthly_payment, 0.0);
        assert!(breakdown.zero_fallback);
    }

    #[test]
    fn test_non_finite_inputs_fall_back_to_zero() {
        assert!(payment_breakdown(f64::NAN, 6.0, installment(12)).zero_fallback);
        assert!(payment_breakdown(1000.0, f64::INFINITY, installment(12)).zero_fallback);
    }

    #[test]
    fn test_tiny_rate_uses_straight_division() {
        let payment = compute_monthly_payment(1200.0, 1e-15, installment(12));
        assert!((payment - 100.0).abs() < 1e-6, "got {payment}");
    }

    #[test]
    fn test_breakdown_totals() {
        let breakdown = payment_breakdown(12000.0, 0.0, installment(24));
        assert_eq!(breakdown.total_cost, Some(12000.0));
        assert_eq!(breakdown.total_interest, Some(0.0));
        assert!(!breakdown.zero_fallback);

        let revolving = payment_breakdown(12000.0, 9.9, FinancingProduct::Revolving { payment_factor: 0.01 });
        assert_eq!(revolving.total_cost, None);
        assert_eq!(revolving.total_interest, None);
    }

    #[test]
    fn test_total_cost_and_interest() {
        assert_eq!(compute_total_cost(304.22, 36), 304.22 * 36.0);
        let payment = compute_monthly_payment(10000.0, 6.0, installment(36));
        let interest = compute_total_interest(10000.0, payment, 36);
        assert!((interest - 951.90).abs() < 0.05, "got {interest}");
    }

    #[test]
    fn test_repeatable_bit_identical() {
        let a = compute_monthly_payment(21695.0, 8.9, installment(240));
        let b = compute_monthly_payment(21695.0, 8.9, installment(240));
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(0.0).is_ok());
        assert!(validate_rate(10.9).is_ok());
        for rate in [-0.5, f64::NAN, f64::INFINITY] {
            assert_eq!(validate_rate(rate).unwrap_err().code, ErrorCode::InvalidRate);
        }
    }
}
