//! Financing Option Model

use serde::{Deserialize, Serialize};

/// Term value that marks a revolving account in catalog data
pub const REVOLVING_TERM: u32 = 0;

/// Share of principal billed per period on revolving accounts without an explicit factor
pub const DEFAULT_PAYMENT_FACTOR: f64 = 0.01;

/// Financing plan offered to customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingOption {
    pub id: String,
    pub name: String,
    /// Annual percentage rate, 0 = interest-free
    #[serde(default)]
    pub interest_rate: f64,
    /// Offered terms in months; 0 marks a revolving account
    #[serde(default)]
    pub terms: Vec<u32>,
    /// Revolving payment factor, only meaningful when `terms` contains 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FinancingOption {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        interest_rate: f64,
        terms: Vec<u32>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            interest_rate,
            terms,
            payment_factor: None,
            description: None,
        }
    }

    pub fn with_payment_factor(mut self, factor: f64) -> Self {
        self.payment_factor = Some(factor);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn offers_term(&self, term: u32) -> bool {
        self.terms.contains(&term)
    }

    pub fn is_revolving(&self) -> bool {
        self.offers_term(REVOLVING_TERM)
    }

    /// Product type for one of this option's terms
    pub fn product_for_term(&self, term: u32) -> FinancingProduct {
        FinancingProduct::from_term(term, self.payment_factor)
    }
}

/// Financing product type, replacing the `0` term sentinel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum FinancingProduct {
    /// Fixed-term loan paid off with level payments
    Installment { term_months: u32 },
    /// Open-ended account billed as a share of principal
    Revolving { payment_factor: f64 },
}

impl FinancingProduct {
    /// Map a raw catalog term onto a product (0 = revolving)
    pub fn from_term(term: u32, payment_factor: Option<f64>) -> Self {
        if term == REVOLVING_TERM {
            Self::Revolving {
                payment_factor: payment_factor.unwrap_or(DEFAULT_PAYMENT_FACTOR),
            }
        } else {
            Self::Installment { term_months: term }
        }
    }

    pub fn is_revolving(&self) -> bool {
        matches!(self, Self::Revolving { .. })
    }

    /// Fixed term in months, None for revolving accounts
    pub fn term_months(&self) -> Option<u32> {
        match self {
            Self::Installment { term_months } => Some(*term_months),
            Self::Revolving { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_term_routes_sentinel_to_revolving() {
        assert_eq!(
            FinancingProduct::from_term(0, None),
            FinancingProduct::Revolving {
                payment_factor: DEFAULT_PAYMENT_FACTOR
            }
        );
        assert_eq!(
            FinancingProduct::from_term(0, Some(0.02)),
            FinancingProduct::Revolving {
                payment_factor: 0.02
            }
        );
        assert_eq!(
            FinancingProduct::from_term(24, Some(0.02)),
            FinancingProduct::Installment { term_months: 24 }
        );
    }

    #[test]
    fn test_option_helpers() {
        let ispc = FinancingOption::new("fin2", "ISPC", 9.9, vec![0]);
        assert!(ispc.is_revolving());
        assert!(ispc.product_for_term(0).is_revolving());
        assert_eq!(ispc.product_for_term(0).term_months(), None);

        let ygrene = FinancingOption::new("fin4", "YGrene", 8.9, vec![120, 180]);
        assert!(!ygrene.is_revolving());
        assert!(ygrene.offers_term(180));
        assert!(!ygrene.offers_term(240));
    }

    #[test]
    fn test_product_serde_tag() {
        let json = serde_json::to_string(&FinancingProduct::Installment { term_months: 36 }).unwrap();
        assert_eq!(json, r#"{"type":"INSTALLMENT","termMonths":36}"#);

        let revolving: FinancingProduct =
            serde_json::from_str(r#"{"type":"REVOLVING","paymentFactor":0.02}"#).unwrap();
        assert_eq!(
            revolving,
            FinancingProduct::Revolving {
                payment_factor: 0.02
            }
        );
    }

    #[test]
    fn test_deserialize_option_defaults() {
        let option: FinancingOption =
            serde_json::from_str(r#"{"id": "fin9", "name": "Promo"}"#).unwrap();
        assert_eq!(option.interest_rate, 0.0);
        assert!(option.terms.is_empty());
        assert_eq!(option.payment_factor, None);
    }
}
