//! Catalog lookup by item id

use std::collections::HashMap;

use shared::models::{CatalogEntry, EquipmentItem, Package};
use tracing::warn;

/// Id → item lookup over a flattened catalog
///
/// When the same id is listed under several categories the first listing wins.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
    by_id: HashMap<String, usize>,
}

impl CatalogIndex {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            by_id.entry(entry.item.id.clone()).or_insert(pos);
        }
        Self { entries, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&EquipmentItem> {
        self.get_entry(id).map(|entry| &entry.item)
    }

    pub fn get_entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Items listed under one category key
    pub fn by_category<'a>(&'a self, category_key: &'a str) -> impl Iterator<Item = &'a EquipmentItem> {
        self.entries
            .iter()
            .filter(move |entry| entry.category_key == category_key)
            .map(|entry| &entry.item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Member items of a package, in package order
    ///
    /// Duplicate ids yield the item twice; ids missing from the catalog are
    /// skipped.
    pub fn resolve_package_items(&self, package: &Package) -> Vec<&EquipmentItem> {
        package
            .items
            .iter()
            .filter_map(|id| {
                let item = self.get(id);
                if item.is_none() {
                    warn!(package_id = %package.id, item_id = %id, "Package references unknown item");
                }
                item
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, key: &str, price: f64) -> CatalogEntry {
        CatalogEntry {
            item: EquipmentItem::new(id, id.to_uppercase(), "filter", price),
            category_key: key.to_string(),
        }
    }

    #[test]
    fn test_first_listing_wins() {
        let index = CatalogIndex::new(vec![entry("f1", "filters", 2200.0), entry("f1", "promo", 999.0)]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("f1").unwrap().price, 2200.0);
        assert_eq!(index.get_entry("f1").unwrap().category_key, "filters");
        assert!(index.get("zz").is_none());
    }

    #[test]
    fn test_resolve_package_items_keeps_order_and_duplicates() {
        let index = CatalogIndex::new(vec![
            entry("c1", "conditioners", 8000.0),
            entry("f1", "filters", 2200.0),
        ]);
        let package = Package::new(
            "p1",
            "Test",
            vec!["f1".into(), "ghost".into(), "c1".into(), "f1".into()],
            12400.0,
            10000.0,
        );
        let ids: Vec<_> = index
            .resolve_package_items(&package)
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, ["f1", "c1", "f1"]);
    }

    #[test]
    fn test_by_category() {
        let index = CatalogIndex::new(vec![
            entry("c1", "conditioners", 8000.0),
            entry("f1", "filters", 2200.0),
            entry("f2", "filters", 3000.0),
        ]);
        assert_eq!(index.by_category("filters").count(), 2);
        assert_eq!(index.by_category("addons").count(), 0);
    }
}
