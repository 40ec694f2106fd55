//! Quote value types
//!
//! Everything a host holds between recomputations: the selection, the
//! optional manual price override, the financing choice, and the derived
//! [`Quote`].

use serde::{Deserialize, Serialize};

use crate::models::{EquipmentItem, FinancingOption, FinancingProduct, Package};

/// What the customer is buying: one package or an ad-hoc item list
///
/// The two are mutually exclusive; choosing one replaces the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    Package { package: Package },
    Items { items: Vec<EquipmentItem> },
}

impl Default for Selection {
    fn default() -> Self {
        Self::Items { items: Vec::new() }
    }
}

impl Selection {
    pub fn package(package: Package) -> Self {
        Self::Package { package }
    }

    pub fn items(items: Vec<EquipmentItem>) -> Self {
        Self::Items { items }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Package { .. } => false,
            Self::Items { items } => items.is_empty(),
        }
    }

    pub fn as_package(&self) -> Option<&Package> {
        match self {
            Self::Package { package } => Some(package),
            Self::Items { .. } => None,
        }
    }

    /// Selected items; empty for package selections
    pub fn as_items(&self) -> &[EquipmentItem] {
        match self {
            Self::Package { .. } => &[],
            Self::Items { items } => items,
        }
    }
}

/// How a discount delta is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaMode {
    /// Subtract a fixed amount
    Amount,
    /// Take a percentage off
    Percentage,
}

/// Manual price adjustment on top of the resolved price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceOverride {
    pub original_price: f64,
    pub overridden_price: f64,
    pub reason: String,
    /// (original - overridden) / original * 100; negative for markups
    pub discount_percent: f64,
    /// Discount exceeds the manager approval threshold
    pub requires_approval: bool,
}

impl PriceOverride {
    /// original_price - overridden_price
    pub fn discount_amount(&self) -> f64 {
        self.original_price - self.overridden_price
    }

    pub fn is_markup(&self) -> bool {
        self.overridden_price > self.original_price
    }
}

/// Chosen financing plan, term and optional custom rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingChoice {
    pub option: FinancingOption,
    /// None until a term has been picked (0 = revolving)
    #[serde(default)]
    pub term: Option<u32>,
    /// Rate entered by the sales rep, replaces the option's rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rate: Option<f64>,
}

impl FinancingChoice {
    pub fn new(option: FinancingOption) -> Self {
        Self {
            option,
            term: None,
            custom_rate: None,
        }
    }

    /// Annual rate used for payment calculation
    pub fn rate(&self) -> f64 {
        self.custom_rate.unwrap_or(self.option.interest_rate)
    }

    /// Product type for the chosen term, None while no term is chosen
    pub fn product(&self) -> Option<FinancingProduct> {
        self.term.map(|term| self.option.product_for_term(term))
    }
}

/// Condition a host should surface instead of trusting the numbers blindly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteWarning {
    /// A guarded fallback produced a $0 monthly payment
    ZeroPaymentFallback { detail: String },
    /// Financing option chosen but no term yet
    TermNotSelected,
    /// Override discount exceeds the approval threshold
    ManagerApprovalRequired { discount_percent: f64 },
}

/// Fully derived quote, recomputed from scratch on every input change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub selection: Selection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_override: Option<PriceOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing_choice: Option<FinancingChoice>,
    /// Resolved price before any manual override
    pub original_price: f64,
    /// Overridden price if present, else the original price
    pub effective_price: f64,
    /// Bundle or package savings against standalone prices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
    pub computed_monthly_payment: f64,
    /// Payment x term, installment terms only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    /// Total cost minus effective price, installment terms only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_interest: Option<f64>,
    pub requires_approval: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<QuoteWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_default_is_empty_items() {
        let selection = Selection::default();
        assert!(selection.is_empty());
        assert!(selection.as_package().is_none());
        assert!(selection.as_items().is_empty());
    }

    #[test]
    fn test_package_selection_is_never_empty() {
        let selection = Selection::package(Package::new("p1", "Basic", vec![], 0.0, 0.0));
        assert!(!selection.is_empty());
        assert!(selection.as_items().is_empty());
    }

    #[test]
    fn test_financing_choice_rate_and_product() {
        let mut choice = FinancingChoice::new(FinancingOption::new("fin4", "YGrene", 8.9, vec![120]));
        assert_eq!(choice.rate(), 8.9);
        assert_eq!(choice.product(), None);

        choice.term = Some(120);
        choice.custom_rate = Some(6.5);
        assert_eq!(choice.rate(), 6.5);
        assert_eq!(
            choice.product(),
            Some(FinancingProduct::Installment { term_months: 120 })
        );
    }

    #[test]
    fn test_selection_serde_tag() {
        let json = serde_json::to_value(Selection::items(vec![])).unwrap();
        assert_eq!(json["kind"], "items");
    }
}
