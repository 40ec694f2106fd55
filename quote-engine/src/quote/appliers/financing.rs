//! Financing appliers

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::FinancingOption;
use shared::quote::{FinancingChoice, QuoteState};
use tracing::debug;

use crate::financing::validate_rate;
use crate::pricing::QuotePolicy;
use super::ActionApplier;

/// ChooseFinancing applier
///
/// Starts a fresh choice: the custom rate is reset and a single-term option
/// (including a revolving account) gets its term picked right away.
pub struct ChooseFinancingApplier {
    pub option: FinancingOption,
}

impl ActionApplier for ChooseFinancingApplier {
    fn apply(&self, state: &mut QuoteState, _policy: &QuotePolicy) -> AppResult<()> {
        let mut choice = FinancingChoice::new(self.option.clone());
        if let [only] = self.option.terms.as_slice() {
            debug!(option_id = %self.option.id, term = *only, "Single-term option, term auto-selected");
            choice.term = Some(*only);
        }
        state.financing = Some(choice);
        Ok(())
    }
}

/// SelectTerm applier
pub struct SelectTermApplier {
    pub term: u32,
}

impl ActionApplier for SelectTermApplier {
    fn apply(&self, state: &mut QuoteState, _policy: &QuotePolicy) -> AppResult<()> {
        let choice = chosen_financing(state)?;
        ensure_term_offered(&choice.option, self.term)?;
        choice.term = Some(self.term);
        Ok(())
    }
}

/// SetCustomRate applier
pub struct SetCustomRateApplier {
    pub rate: Option<f64>,
}

impl ActionApplier for SetCustomRateApplier {
    fn apply(&self, state: &mut QuoteState, _policy: &QuotePolicy) -> AppResult<()> {
        let choice = chosen_financing(state)?;
        if let Some(rate) = self.rate {
            validate_rate(rate)?;
        }
        choice.custom_rate = self.rate;
        Ok(())
    }
}

fn chosen_financing(state: &mut QuoteState) -> AppResult<&mut FinancingChoice> {
    state
        .financing
        .as_mut()
        .ok_or_else(|| AppError::new(ErrorCode::NoFinancingSelected))
}

pub(crate) fn ensure_term_offered(option: &FinancingOption, term: u32) -> AppResult<()> {
    if option.offers_term(term) {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::TermNotOffered)
            .with_detail("option_id", option.id.as_str())
            .with_detail("term", term))
    }
}
