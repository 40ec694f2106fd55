//! Selection appliers
//!
//! Any change to what is being bought drops the price override, since it
//! was validated against the previous price.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{EquipmentItem, Package};
use shared::quote::{QuoteState, Selection};

use crate::pricing::QuotePolicy;
use super::ActionApplier;

/// SelectPackage applier
///
/// Replaces any item list and drops the financing choice.
pub struct SelectPackageApplier {
    pub package: Package,
}

impl ActionApplier for SelectPackageApplier {
    fn apply(&self, state: &mut QuoteState, _policy: &QuotePolicy) -> AppResult<()> {
        state.selection = Selection::package(self.package.clone());
        state.price_override = None;
        state.financing = None;
        Ok(())
    }
}

/// AddItem applier
///
/// Adding to a package selection starts a fresh item list.
pub struct AddItemApplier {
    pub item: EquipmentItem,
}

impl ActionApplier for AddItemApplier {
    fn apply(&self, state: &mut QuoteState, _policy: &QuotePolicy) -> AppResult<()> {
        match &mut state.selection {
            Selection::Items { items } => items.push(self.item.clone()),
            Selection::Package { .. } => state.selection = Selection::items(vec![self.item.clone()]),
        }
        state.price_override = None;
        Ok(())
    }
}

/// RemoveItem applier
pub struct RemoveItemApplier {
    pub item_id: String,
}

impl ActionApplier for RemoveItemApplier {
    fn apply(&self, state: &mut QuoteState, _policy: &QuotePolicy) -> AppResult<()> {
        let Selection::Items { items } = &mut state.selection else {
            return Err(item_not_selected(&self.item_id));
        };
        let Some(pos) = items.iter().position(|item| item.id == self.item_id) else {
            return Err(item_not_selected(&self.item_id));
        };
        items.remove(pos);
        state.price_override = None;
        Ok(())
    }
}

fn item_not_selected(item_id: &str) -> AppError {
    AppError::new(ErrorCode::ItemNotSelected).with_detail("item_id", item_id)
}

/// ClearSelection applier
pub struct ClearSelectionApplier;

impl ActionApplier for ClearSelectionApplier {
    fn apply(&self, state: &mut QuoteState, _policy: &QuotePolicy) -> AppResult<()> {
        state.selection = Selection::default();
        state.price_override = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::FinancingOption;
    use shared::quote::{FinancingChoice, PriceOverride};

    fn conditioner() -> EquipmentItem {
        EquipmentItem::new("c1", "EC5", "conditioner", 8000.0)
    }

    fn filter() -> EquipmentItem {
        EquipmentItem::new("f1", "QRS", "filter", 2200.0).with_package_price(1400.0)
    }

    fn overridden_state() -> QuoteState {
        QuoteState {
            selection: Selection::items(vec![conditioner()]),
            price_override: Some(PriceOverride {
                original_price: 8000.0,
                overridden_price: 7500.0,
                reason: "promo".to_string(),
                discount_percent: 6.25,
                requires_approval: false,
            }),
            financing: Some(FinancingChoice::new(FinancingOption::new("fin1", "Card", 0.0, vec![24]))),
        }
    }

    #[test]
    fn test_select_package_clears_override_and_financing() {
        let mut state = overridden_state();
        let package = Package::new("pkg2", "Basic", vec!["c1".into()], 12600.0, 10995.0);
        SelectPackageApplier { package: package.clone() }
            .apply(&mut state, &QuotePolicy::default())
            .unwrap();
        assert_eq!(state.selection.as_package(), Some(&package));
        assert!(state.price_override.is_none());
        assert!(state.financing.is_none());
    }

    #[test]
    fn test_add_item_keeps_financing() {
        let mut state = overridden_state();
        AddItemApplier { item: filter() }
            .apply(&mut state, &QuotePolicy::default())
            .unwrap();
        assert_eq!(state.selection.as_items().len(), 2);
        assert!(state.price_override.is_none());
        assert!(state.financing.is_some());
    }

    #[test]
    fn test_add_item_replaces_package() {
        let mut state = QuoteState {
            selection: Selection::package(Package::new("pkg2", "Basic", vec![], 0.0, 0.0)),
            ..QuoteState::default()
        };
        AddItemApplier { item: filter() }
            .apply(&mut state, &QuotePolicy::default())
            .unwrap();
        assert!(state.selection.as_package().is_none());
        assert_eq!(state.selection.as_items(), &[filter()]);
    }

    #[test]
    fn test_remove_item_removes_first_match_only() {
        let mut state = QuoteState {
            selection: Selection::items(vec![filter(), conditioner(), filter()]),
            ..QuoteState::default()
        };
        RemoveItemApplier { item_id: "f1".to_string() }
            .apply(&mut state, &QuotePolicy::default())
            .unwrap();
        let ids: Vec<_> = state.selection.as_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["c1", "f1"]);
    }

    #[test]
    fn test_remove_missing_item_fails() {
        let mut state = overridden_state();
        let err = RemoveItemApplier { item_id: "zz".to_string() }
            .apply(&mut state, &QuotePolicy::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ItemNotSelected);
    }

    #[test]
    fn test_clear_selection() {
        let mut state = overridden_state();
        ClearSelectionApplier.apply(&mut state, &QuotePolicy::default()).unwrap();
        assert!(state.selection.is_empty());
        assert!(state.price_override.is_none());
    }
}
