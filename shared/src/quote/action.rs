//! Quote actions
//!
//! Inputs that change a quote in progress. A host turns UI events into
//! these values and feeds them, one at a time, to the quote reducer.

use serde::{Deserialize, Serialize};

use super::types::DeltaMode;
use crate::models::{EquipmentItem, FinancingOption, Package};

/// Action variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteAction {
    // ========== Selection ==========
    SelectPackage {
        package: Package,
    },
    AddItem {
        item: EquipmentItem,
    },
    /// Removes the first selected item with this id
    RemoveItem {
        item_id: String,
    },
    ClearSelection,

    // ========== Financing ==========
    ChooseFinancing {
        option: FinancingOption,
    },
    SelectTerm {
        term: u32,
    },
    /// None restores the option's own rate
    SetCustomRate {
        rate: Option<f64>,
    },

    // ========== Price override ==========
    ApplyOverride {
        requested_price: f64,
        #[serde(default)]
        reason: String,
    },
    ApplyDelta {
        value: f64,
        mode: DeltaMode,
        #[serde(default)]
        reason: String,
    },
    ClearOverride,

    // ========== Recommendation / lifecycle ==========
    ApplyRecommendation {
        package: Package,
        option: FinancingOption,
        term: u32,
    },
    Reset,
}

impl QuoteAction {
    /// Stable name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectPackage { .. } => "SELECT_PACKAGE",
            Self::AddItem { .. } => "ADD_ITEM",
            Self::RemoveItem { .. } => "REMOVE_ITEM",
            Self::ClearSelection => "CLEAR_SELECTION",
            Self::ChooseFinancing { .. } => "CHOOSE_FINANCING",
            Self::SelectTerm { .. } => "SELECT_TERM",
            Self::SetCustomRate { .. } => "SET_CUSTOM_RATE",
            Self::ApplyOverride { .. } => "APPLY_OVERRIDE",
            Self::ApplyDelta { .. } => "APPLY_DELTA",
            Self::ClearOverride => "CLEAR_OVERRIDE",
            Self::ApplyRecommendation { .. } => "APPLY_RECOMMENDATION",
            Self::Reset => "RESET",
        }
    }

    /// Whether the action changes what is being bought
    pub fn changes_selection(&self) -> bool {
        matches!(
            self,
            Self::SelectPackage { .. }
                | Self::AddItem { .. }
                | Self::RemoveItem { .. }
                | Self::ClearSelection
                | Self::ApplyRecommendation { .. }
                | Self::Reset
        )
    }
}
