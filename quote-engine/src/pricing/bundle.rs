//! Bundle Discount Resolver
//!
//! Turns a selection into its aggregate price.
//!
//! - Package selections cost the package price; savings are the package's
//!   individual price minus its package price.
//! - Item lists qualify for bundle pricing only when they contain at least
//!   one primary (conditioner) and one secondary (filter) item. Primary items
//!   then contribute their full price and every other item contributes its
//!   package price when it has one.

use serde::Serialize;
use shared::models::{EquipmentItem, ItemRole, Package};
use shared::quote::Selection;
use tracing::{debug, warn};

use super::money::sum_prices;

/// Price one selected item contributed to the total
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemContribution {
    pub item_id: String,
    pub role: ItemRole,
    pub standalone_price: f64,
    pub contributed_price: f64,
}

/// Result of price resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPrice {
    pub total: f64,
    /// Per-item contributions (item-list selections only)
    pub contributions: Vec<ItemContribution>,
    /// Savings against standalone prices, when a bundle or package applies
    pub savings: Option<f64>,
    pub bundle_applied: bool,
}

impl ResolvedPrice {
    fn empty() -> Self {
        Self {
            total: 0.0,
            contributions: Vec::new(),
            savings: None,
            bundle_applied: false,
        }
    }
}

/// Whether an item list triggers bundle pricing
pub fn qualifies_for_bundle(items: &[EquipmentItem]) -> bool {
    let has_primary = items.iter().any(|i| i.role() == ItemRole::Primary);
    let has_secondary = items.iter().any(|i| i.role() == ItemRole::Secondary);
    has_primary && has_secondary
}

/// Resolve the aggregate price of a selection
pub fn resolve_price(selection: &Selection) -> ResolvedPrice {
    match selection {
        Selection::Package { package } => resolve_package_price(package),
        Selection::Items { items } => resolve_items_price(items),
    }
}

/// Package price and savings (individual price is taken as authored)
pub fn resolve_package_price(package: &Package) -> ResolvedPrice {
    let savings = package.savings();

    debug!(
        package_id = %package.id,
        package_price = package.package_price,
        savings,
        "Resolved package price"
    );

    ResolvedPrice {
        total: package.package_price,
        contributions: Vec::new(),
        savings: Some(savings),
        bundle_applied: true,
    }
}

/// Ad-hoc item list price with bundle discount when eligible
pub fn resolve_items_price(items: &[EquipmentItem]) -> ResolvedPrice {
    if items.is_empty() {
        return ResolvedPrice::empty();
    }

    let bundle = qualifies_for_bundle(items);

    let contributions: Vec<ItemContribution> = items
        .iter()
        .map(|item| {
            let role = item.role();
            let contributed_price = match (bundle, role) {
                (true, ItemRole::Primary) | (false, _) => item.price,
                (true, _) => item.package_price.unwrap_or(item.price),
            };
            ItemContribution {
                item_id: item.id.clone(),
                role,
                standalone_price: item.price,
                contributed_price,
            }
        })
        .collect();

    let total = sum_prices(contributions.iter().map(|c| c.contributed_price));
    let savings = bundle.then(|| sum_prices(items.iter().map(|i| i.price)) - total);
    if !total.is_finite() {
        warn!(items = items.len(), total, "Item list total is not finite");
    }

    debug!(
        items = items.len(),
        bundle_applied = bundle,
        total,
        "Resolved item list price"
    );

    ResolvedPrice {
        total,
        contributions,
        savings,
        bundle_applied: bundle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditioner() -> EquipmentItem {
        // package price on a primary item must be ignored
        EquipmentItem::new("c1", "EC5 Conditioner", "conditioner", 8000.0).with_package_price(5000.0)
    }

    fn filter() -> EquipmentItem {
        EquipmentItem::new("f1", "QRS Carbon", "filter", 2200.0).with_package_price(1400.0)
    }

    fn ro() -> EquipmentItem {
        EquipmentItem::new("d1", "UltreFiner", "drinking", 2400.0).with_package_price(1595.0)
    }

    fn alkaline() -> EquipmentItem {
        EquipmentItem::new("d2", "Alkaline", "drinking", 800.0)
    }

    #[test]
    fn test_bundle_applies_with_primary_and_secondary() {
        let items = vec![conditioner(), filter(), ro(), alkaline()];
        let resolved = resolve_items_price(&items);

        assert!(resolved.bundle_applied);
        // 8000 + 1400 + 1595 + 800
        assert_eq!(resolved.total, 11795.0);
        // 13400 - 11795
        assert_eq!(resolved.savings, Some(1605.0));
        assert_eq!(resolved.contributions[0].contributed_price, 8000.0);
        assert_eq!(resolved.contributions[3].contributed_price, 800.0);
    }

    #[test]
    fn test_no_bundle_without_secondary() {
        let items = vec![conditioner(), ro()];
        let resolved = resolve_items_price(&items);

        assert!(!resolved.bundle_applied);
        assert_eq!(resolved.total, 10400.0);
        assert_eq!(resolved.savings, None);
    }

    #[test]
    fn test_no_bundle_without_primary() {
        let items = vec![filter(), ro()];
        assert_eq!(resolve_items_price(&items).total, 4600.0);
    }

    #[test]
    fn test_duplicate_items_each_contribute() {
        let items = vec![conditioner(), filter(), filter()];
        assert_eq!(resolve_items_price(&items).total, 10800.0);
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let resolved = resolve_price(&Selection::default());
        assert_eq!(resolved.total, 0.0);
        assert!(resolved.contributions.is_empty());
        assert!(!resolved.bundle_applied);
    }

    #[test]
    fn test_package_selection() {
        let package = Package::new(
            "pkg2",
            "Premium Basic City",
            vec!["c1".into(), "f1".into(), "d1".into()],
            12600.0,
            10995.0,
        );
        let resolved = resolve_price(&Selection::package(package.clone()));

        assert_eq!(resolved.total, package.package_price);
        assert_eq!(resolved.savings, Some(package.individual_price - package.package_price));
        assert!(resolved.contributions.is_empty());
    }

    #[test]
    fn test_resolution_does_not_mutate_and_is_repeatable() {
        let items = vec![conditioner(), filter(), ro()];
        let before = items.clone();
        let first = resolve_items_price(&items);
        let second = resolve_items_price(&items);

        assert_eq!(items, before);
        assert_eq!(first.total.to_bits(), second.total.to_bits());
    }

    #[test]
    fn test_sub_cent_prices_are_not_rounded() {
        let items = vec![EquipmentItem::new("a1", "Sample", "addon", 19.995)];
        assert_eq!(resolve_items_price(&items).total, 19.995);
    }

    #[test]
    fn test_huge_prices_do_not_panic() {
        let items = vec![
            EquipmentItem::new("x1", "Big", "upgrade", 5e28),
            EquipmentItem::new("x2", "Big", "upgrade", 5e28),
        ];
        assert_eq!(resolve_items_price(&items).total, 1e29);

        let items = vec![EquipmentItem::new("x3", "Bigger", "upgrade", 1e30)];
        assert_eq!(resolve_items_price(&items).total, 1e30);

        let package = Package::new("pkgx", "Huge", vec![], 2e30, 1e30);
        let resolved = resolve_package_price(&package);
        assert_eq!(resolved.total, 1e30);
        assert_eq!(resolved.savings, Some(1e30));
    }
}
