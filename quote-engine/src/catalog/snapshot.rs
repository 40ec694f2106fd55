//! Catalog snapshot loading
//!
//! A snapshot is the read-only data the quoting core works from: the raw
//! category-keyed catalog, the packages and the financing plans. Hosts load
//! one per session; nothing here writes back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::models::{CatalogEntry, FinancingOption, Package};
use shared::{AppError, AppResult};
use tracing::info;

use super::{CatalogIndex, defaults, flatten};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    /// Category key → item list, kept raw so malformed entries can be skipped
    #[serde(default)]
    pub catalog: Map<String, Value>,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub financing_options: Vec<FinancingOption>,
}

impl CatalogSnapshot {
    /// Seed snapshot shipped with the engine
    pub fn defaults() -> Self {
        let catalog = match defaults::default_catalog() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            catalog,
            packages: defaults::default_packages(),
            financing_options: defaults::default_financing_options(),
        }
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Failed to read catalog {}: {e}", path.display()))
                .with_detail("path", path.display().to_string())
        })?;
        let snapshot = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            categories = snapshot.catalog.len(),
            packages = snapshot.packages.len(),
            financing_options = snapshot.financing_options.len(),
            "Catalog snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Load from `path` when given, otherwise use the seed snapshot
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::defaults()),
        }
    }

    /// Flattened equipment list
    pub fn entries(&self) -> Vec<CatalogEntry> {
        flatten(&self.catalog)
    }

    pub fn index(&self) -> CatalogIndex {
        CatalogIndex::new(self.entries())
    }

    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|package| package.id == id)
    }

    pub fn financing_option(&self, id: &str) -> Option<&FinancingOption> {
        self.financing_options.iter().find(|option| option.id == id)
    }
}
