//! Package Model

use serde::{Deserialize, Serialize};

/// Pre-built equipment bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    /// Member item ids in display order (duplicates allowed)
    #[serde(default)]
    pub items: Vec<String>,
    /// Sum of member standalone prices at authoring time, not recomputed
    #[serde(default)]
    pub individual_price: f64,
    /// Discounted bundle price
    #[serde(default)]
    pub package_price: f64,
}

impl Package {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        items: Vec<String>,
        individual_price: f64,
        package_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items,
            individual_price,
            package_price,
        }
    }

    /// individual_price - package_price (may be negative, not enforced)
    pub fn savings(&self) -> f64 {
        self.individual_price - self.package_price
    }
}
