//! Quote builder
//!
//! Derives the full [`Quote`] from a quote state. Nothing is cached: hosts
//! call this after every reduced action.

use shared::quote::{Quote, QuoteState, QuoteWarning};
use tracing::debug;

use crate::financing::payment_breakdown;
use crate::pricing::resolve_price;

pub fn build_quote(state: &QuoteState) -> Quote {
    let resolved = resolve_price(&state.selection);
    let original_price = resolved.total;
    let effective_price = state
        .price_override
        .as_ref()
        .map_or(original_price, |o| o.overridden_price);

    let mut warnings = Vec::new();
    let mut computed_monthly_payment = 0.0;
    let mut total_cost = None;
    let mut total_interest = None;

    if let Some(choice) = &state.financing {
        match choice.product() {
            Some(product) => {
                let breakdown = payment_breakdown(effective_price, choice.rate(), product);
                if breakdown.zero_fallback {
                    warnings.push(QuoteWarning::ZeroPaymentFallback {
                        detail: format!(
                            "{} at {}% on {effective_price} has no computable payment",
                            choice.option.name,
                            choice.rate()
                        ),
                    });
                }
                computed_monthly_payment = breakdown.monthly_payment;
                total_cost = breakdown.total_cost;
                total_interest = breakdown.total_interest;
            }
            None => warnings.push(QuoteWarning::TermNotSelected),
        }
    }

    let requires_approval = state
        .price_override
        .as_ref()
        .is_some_and(|o| o.requires_approval);
    if let Some(applied) = state.price_override.as_ref().filter(|o| o.requires_approval) {
        warnings.push(QuoteWarning::ManagerApprovalRequired {
            discount_percent: applied.discount_percent,
        });
    }

    debug!(
        original_price,
        effective_price,
        computed_monthly_payment,
        warnings = warnings.len(),
        "Quote built"
    );

    Quote {
        selection: state.selection.clone(),
        price_override: state.price_override.clone(),
        financing_choice: state.financing.clone(),
        original_price,
        effective_price,
        savings: resolved.savings,
        computed_monthly_payment,
        total_cost,
        total_interest,
        requires_approval,
        warnings,
    }
}
