//! Catalog Aggregator
//!
//! Flattens a category-keyed catalog document into one list of items, each
//! tagged with the key it was listed under. Categories that are not arrays
//! and elements without a usable `id` are skipped, never fatal.
//! No deduplication; output follows key order, then item order.

use serde::Deserialize;
use serde_json::{Map, Value};
use shared::models::{CatalogEntry, EquipmentItem};
use tracing::{debug, warn};

/// Flatten a raw catalog document (`{"conditioners": [...], ...}`)
pub fn flatten(catalog: &Map<String, Value>) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();

    for (category_key, value) in catalog {
        let Some(items) = value.as_array() else {
            warn!(category_key = %category_key, "Catalog category is not a list, skipping");
            continue;
        };

        for (index, raw) in items.iter().enumerate() {
            if !has_id(raw) {
                debug!(category_key = %category_key, index, "Catalog element has no id, skipping");
                continue;
            }
            match EquipmentItem::deserialize(raw) {
                Ok(item) => entries.push(CatalogEntry {
                    item,
                    category_key: category_key.clone(),
                }),
                Err(e) => warn!(
                    category_key = %category_key,
                    index,
                    error = %e,
                    "Malformed catalog item, skipping"
                ),
            }
        }
    }

    debug!(categories = catalog.len(), items = entries.len(), "Catalog flattened");
    entries
}

/// An element counts as an item when it is an object with a non-empty id
fn has_id(raw: &Value) -> bool {
    match raw.get("id") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(id)) => !id.is_empty(),
        Some(Value::Number(id)) => id.as_f64().is_some_and(|n| n != 0.0),
        Some(_) => true,
    }
}

/// Flatten any JSON value; anything but an object yields an empty list
pub fn flatten_value(catalog: &Value) -> Vec<CatalogEntry> {
    match catalog.as_object() {
        Some(map) => flatten(map),
        None => {
            warn!("Catalog document is not an object, nothing to flatten");
            Vec::new()
        }
    }
}

/// Flatten already-typed categories, preserving iteration order
pub fn flatten_categories<'a, I>(categories: I) -> Vec<CatalogEntry>
where
    I: IntoIterator<Item = (&'a str, &'a [EquipmentItem])>,
{
    categories
        .into_iter()
        .flat_map(|(key, items)| {
            items.iter().map(move |item| CatalogEntry {
                item: item.clone(),
                category_key: key.to_string(),
            })
        })
        .collect()
}
