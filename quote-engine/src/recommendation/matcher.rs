//! Recommendation Matcher
//!
//! Searches every (package × financing option × term) combination for the
//! ones whose monthly payment lands near a target the sales rep types in.
//! Matches inside the inclusive band `target × (1 ± band)` are ranked by
//! distance to the target; ties fall back to package id, option id and term
//! so the order never depends on input order.

use std::cmp::Ordering;

use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{FinancingOption, FinancingProduct, Package};
use tracing::debug;

use crate::financing::{compute_monthly_payment, validate_rate};
use crate::pricing::QuotePolicy;

/// One candidate package + financing plan + term
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    pub package: Package,
    pub option: FinancingOption,
    pub term: u32,
    pub product: FinancingProduct,
    /// Annual rate the payment was computed with
    pub rate: f64,
    pub monthly_payment: f64,
    /// |monthly_payment - target|
    pub distance: f64,
    /// Package savings against standalone prices
    pub savings: f64,
}

/// All matches for `target`, each option priced at its own rate
pub fn find_recommendations(
    target: f64,
    packages: &[Package],
    options: &[FinancingOption],
) -> AppResult<Vec<RankedMatch>> {
    find_recommendations_with_policy(target, packages, options, None, &QuotePolicy::default())
}

/// All matches for `target`, every option priced at `custom_rate` when given
pub fn find_recommendations_with_rate(
    target: f64,
    packages: &[Package],
    options: &[FinancingOption],
    custom_rate: Option<f64>,
) -> AppResult<Vec<RankedMatch>> {
    find_recommendations_with_policy(target, packages, options, custom_rate, &QuotePolicy::default())
}

pub fn find_recommendations_with_policy(
    target: f64,
    packages: &[Package],
    options: &[FinancingOption],
    custom_rate: Option<f64>,
    policy: &QuotePolicy,
) -> AppResult<Vec<RankedMatch>> {
    if target.is_nan() || target <= 0.0 {
        return Err(AppError::non_positive_target(target));
    }
    if !target.is_finite() {
        return Err(AppError::invalid_amount("target", target));
    }
    if let Some(rate) = custom_rate {
        validate_rate(rate)?;
    }

    let (low, high) = policy.payment_band(target);
    let mut matches = Vec::new();

    for package in packages {
        for option in options {
            let rate = custom_rate.unwrap_or(option.interest_rate);
            for &term in &option.terms {
                let product = option.product_for_term(term);
                let monthly_payment = compute_monthly_payment(package.package_price, rate, product);
                if monthly_payment < low || monthly_payment > high {
                    continue;
                }
                matches.push(RankedMatch {
                    package: package.clone(),
                    option: option.clone(),
                    term,
                    product,
                    rate,
                    monthly_payment,
                    distance: (monthly_payment - target).abs(),
                    savings: package.savings(),
                });
            }
        }
    }

    matches.sort_by(compare_matches);

    debug!(
        target,
        low,
        high,
        packages = packages.len(),
        options = options.len(),
        matches = matches.len(),
        "Recommendations searched"
    );
    Ok(matches)
}

/// Best `policy.recommendation_limit` matches
pub fn top_recommendations(
    target: f64,
    packages: &[Package],
    options: &[FinancingOption],
    custom_rate: Option<f64>,
    policy: &QuotePolicy,
) -> AppResult<Vec<RankedMatch>> {
    let mut matches = find_recommendations_with_policy(target, packages, options, custom_rate, policy)?;
    matches.truncate(policy.recommendation_limit);
    Ok(matches)
}

fn compare_matches(a: &RankedMatch, b: &RankedMatch) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.package.id.cmp(&b.package.id))
        .then_with(|| a.option.id.cmp(&b.option.id))
        .then_with(|| a.term.cmp(&b.term))
}
