//! Recommendation and reset appliers

use shared::error::AppResult;
use shared::models::{FinancingOption, Package};
use shared::quote::{FinancingChoice, QuoteState, Selection};

use super::financing::ensure_term_offered;
use crate::pricing::QuotePolicy;
use super::ActionApplier;

/// ApplyRecommendation applier
///
/// Installs the recommended package, option and term in one step, with the
/// option's own rate pinned as the custom rate.
pub struct ApplyRecommendationApplier {
    pub package: Package,
    pub option: FinancingOption,
    pub term: u32,
}

impl ActionApplier for ApplyRecommendationApplier {
    fn apply(&self, state: &mut QuoteState, _policy: &QuotePolicy) -> AppResult<()> {
        ensure_term_offered(&self.option, self.term)?;

        state.selection = Selection::package(self.package.clone());
        state.price_override = None;
        state.financing = Some(FinancingChoice {
            option: self.option.clone(),
            term: Some(self.term),
            custom_rate: Some(self.option.interest_rate),
        });
        Ok(())
    }
}

/// Reset applier
pub struct ResetApplier;

impl ActionApplier for ResetApplier {
    fn apply(&self, state: &mut QuoteState, _policy: &QuotePolicy) -> AppResult<()> {
        *state = QuoteState::default();
        Ok(())
    }
}
