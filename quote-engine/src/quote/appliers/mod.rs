//! Quote action appliers
//!
//! Each applier implements the `ActionApplier` trait and handles one
//! `QuoteAction` variant.

use enum_dispatch::enum_dispatch;
use shared::error::AppResult;
use shared::quote::{QuoteAction, QuoteState};

use crate::pricing::QuotePolicy;

/// Applies one quote action to a state
///
/// Appliers mutate the state they are given and return an error when the
/// action is invalid for it. The reducer always hands them a scratch copy,
/// so a partially applied action never escapes.
#[enum_dispatch]
pub trait ActionApplier {
    fn apply(&self, state: &mut QuoteState, policy: &QuotePolicy) -> AppResult<()>;
}

mod financing;
mod lifecycle;
mod price_override;
mod selection;

pub use financing::{ChooseFinancingApplier, SelectTermApplier, SetCustomRateApplier};
pub use lifecycle::{ApplyRecommendationApplier, ResetApplier};
pub use price_override::{ApplyDeltaApplier, ApplyOverrideApplier, ClearOverrideApplier};
pub use selection::{AddItemApplier, ClearSelectionApplier, RemoveItemApplier, SelectPackageApplier};

/// Dispatches to the concrete applier for an action
#[enum_dispatch(ActionApplier)]
pub enum QuoteApplier {
    SelectPackage(SelectPackageApplier),
    AddItem(AddItemApplier),
    RemoveItem(RemoveItemApplier),
    ClearSelection(ClearSelectionApplier),
    ChooseFinancing(ChooseFinancingApplier),
    SelectTerm(SelectTermApplier),
    SetCustomRate(SetCustomRateApplier),
    ApplyOverride(ApplyOverrideApplier),
    ApplyDelta(ApplyDeltaApplier),
    ClearOverride(ClearOverrideApplier),
    ApplyRecommendation(ApplyRecommendationApplier),
    Reset(ResetApplier),
}

/// The only place that matches on `QuoteAction`
impl From<QuoteAction> for QuoteApplier {
    fn from(action: QuoteAction) -> Self {
        match action {
            QuoteAction::SelectPackage { package } => SelectPackageApplier { package }.into(),
            QuoteAction::AddItem { item } => AddItemApplier { item }.into(),
            QuoteAction::RemoveItem { item_id } => RemoveItemApplier { item_id }.into(),
            QuoteAction::ClearSelection => ClearSelectionApplier.into(),
            QuoteAction::ChooseFinancing { option } => ChooseFinancingApplier { option }.into(),
            QuoteAction::SelectTerm { term } => SelectTermApplier { term }.into(),
            QuoteAction::SetCustomRate { rate } => SetCustomRateApplier { rate }.into(),
            QuoteAction::ApplyOverride {
                requested_price,
                reason,
            } => ApplyOverrideApplier {
                requested_price,
                reason,
            }
            .into(),
            QuoteAction::ApplyDelta {
                value,
                mode,
                reason,
            } => ApplyDeltaApplier { value, mode, reason }.into(),
            QuoteAction::ClearOverride => ClearOverrideApplier.into(),
            QuoteAction::ApplyRecommendation {
                package,
                option,
                term,
            } => ApplyRecommendationApplier {
                package,
                option,
                term,
            }
            .into(),
            QuoteAction::Reset => ResetApplier.into(),
        }
    }
}

/// Apply an action in place
pub fn apply_action(
    state: &mut QuoteState,
    action: QuoteAction,
    policy: &QuotePolicy,
) -> AppResult<()> {
    QuoteApplier::from(action).apply(state, policy)
}
