//! Quote-in-progress state
//!
//! The single immutable value a host keeps while a sales rep builds a
//! quote. It only changes through the quote reducer, which keeps the
//! selection, override and financing choice mutually consistent.

use serde::{Deserialize, Serialize};

use super::types::{FinancingChoice, PriceOverride, Selection};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteState {
    #[serde(default)]
    pub selection: Selection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_override: Option<PriceOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing: Option<FinancingChoice>,
}

impl QuoteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_override(&self) -> bool {
        self.price_override.is_some()
    }

    /// Financing option chosen and a term picked
    pub fn is_financing_complete(&self) -> bool {
        self.financing
            .as_ref()
            .is_some_and(|choice| choice.term.is_some())
    }
}
