//! Quote reducer
//!
//! `reduce(state, action) → state'`. The action runs against a copy of the
//! state, so a rejected action leaves the caller's state untouched.

use shared::error::AppResult;
use shared::quote::{QuoteAction, QuoteState};
use tracing::debug;

use super::appliers::apply_action;
use crate::pricing::QuotePolicy;

/// Apply one action with the default policy
pub fn reduce(state: &QuoteState, action: QuoteAction) -> AppResult<QuoteState> {
    reduce_with_policy(state, action, &QuotePolicy::default())
}

pub fn reduce_with_policy(
    state: &QuoteState,
    action: QuoteAction,
    policy: &QuotePolicy,
) -> AppResult<QuoteState> {
    let name = action.name();
    let selection_changed = action.changes_selection();
    let mut next = state.clone();

    match apply_action(&mut next, action, policy) {
        Ok(()) => {
            debug!(
                action = name,
                selection_changed,
                has_override = next.has_override(),
                "Quote action applied"
            );
            Ok(next)
        }
        Err(e) => {
            debug!(action = name, code = %e.code, error = %e, "Quote action rejected");
            Err(e)
        }
    }
}

/// Fold a sequence of actions, stopping at the first rejection
pub fn reduce_all<I>(state: &QuoteState, actions: I, policy: &QuotePolicy) -> AppResult<QuoteState>
where
    I: IntoIterator<Item = QuoteAction>,
{
    actions
        .into_iter()
        .try_fold(state.clone(), |current, action| reduce_with_policy(&current, action, policy))
}
