//! Equipment Item Model

use serde::{Deserialize, Deserializer, Serialize};

/// Category tag of the primary bundle role
pub const PRIMARY_CATEGORY: &str = "conditioner";
/// Category tag of the secondary bundle role
pub const SECONDARY_CATEGORY: &str = "filter";

/// Role an item plays in bundle pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemRole {
    /// Always contributes its full price (conditioner)
    Primary,
    /// Required alongside a primary item to trigger the bundle (filter)
    Secondary,
    Other,
}

/// Equipment catalog entry (read-only snapshot from the catalog provider)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    /// Catalog id; numeric ids are read as their decimal text
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Role tag: "conditioner", "filter", "drinking", "upgrade", "addon", ...
    #[serde(default)]
    pub category: String,
    /// Standalone price
    #[serde(default)]
    pub price: f64,
    /// Discounted price when bundled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_price: Option<f64>,
    /// Descriptive subscription text, no computational role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_info: Option<String>,
}

impl EquipmentItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            package_price: None,
            subscription_info: None,
        }
    }

    pub fn with_package_price(mut self, package_price: f64) -> Self {
        self.package_price = Some(package_price);
        self
    }

    pub fn with_subscription_info(mut self, info: impl Into<String>) -> Self {
        self.subscription_info = Some(info.into());
        self
    }

    /// Bundle role derived from the category tag
    pub fn role(&self) -> ItemRole {
        match self.category.as_str() {
            PRIMARY_CATEGORY => ItemRole::Primary,
            SECONDARY_CATEGORY => ItemRole::Secondary,
            _ => ItemRole::Other,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Unsigned(id) => id.to_string(),
        RawId::Signed(id) => id.to_string(),
        RawId::Float(id) => id.to_string(),
    })
}

/// Equipment item tagged with the catalog category key it was listed under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub item: EquipmentItem,
    /// Key of the category map the item came from (e.g. "drinkingWater")
    pub category_key: String,
}
