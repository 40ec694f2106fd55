//! Price override appliers
//!
//! Overrides are validated against the price the current selection resolves
//! to. A request equal to that price clears the override.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::quote::{DeltaMode, QuoteState};

use crate::pricing::{QuotePolicy, apply_delta, apply_override_with_policy, resolve_price};
use super::ActionApplier;

/// ApplyOverride applier
pub struct ApplyOverrideApplier {
    pub requested_price: f64,
    pub reason: String,
}

impl ActionApplier for ApplyOverrideApplier {
    fn apply(&self, state: &mut QuoteState, policy: &QuotePolicy) -> AppResult<()> {
        let original_price = resolved_price(state)?;
        state.price_override =
            apply_override_with_policy(original_price, self.requested_price, &self.reason, policy)?;
        Ok(())
    }
}

/// ApplyDelta applier
///
/// Takes an amount or percentage off the resolved price, then validates the
/// result like any other override.
pub struct ApplyDeltaApplier {
    pub value: f64,
    pub mode: DeltaMode,
    pub reason: String,
}

impl ActionApplier for ApplyDeltaApplier {
    fn apply(&self, state: &mut QuoteState, policy: &QuotePolicy) -> AppResult<()> {
        let original_price = resolved_price(state)?;
        let requested_price = apply_delta(original_price, self.value, self.mode);
        state.price_override =
            apply_override_with_policy(original_price, requested_price, &self.reason, policy)?;
        Ok(())
    }
}

/// ClearOverride applier
pub struct ClearOverrideApplier;

impl ActionApplier for ClearOverrideApplier {
    fn apply(&self, state: &mut QuoteState, _policy: &QuotePolicy) -> AppResult<()> {
        state.price_override = None;
        Ok(())
    }
}

fn resolved_price(state: &QuoteState) -> AppResult<f64> {
    if state.selection.is_empty() {
        return Err(AppError::new(ErrorCode::SelectionEmpty));
    }
    Ok(resolve_price(&state.selection).total)
}
