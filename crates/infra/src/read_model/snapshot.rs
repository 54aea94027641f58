//! Serializable catalog snapshot (seed data for the in-memory store).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopdesk_catalog::{
    Category, CategoryTemplate, CustomerRole, Discount, Language, Manufacturer, Product,
    ProductCategory, ProductManufacturer, Store, Vendor,
};
use shopdesk_core::{CustomerRoleId, LanguageId, StoreId};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Translation of one entity property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedProperty {
    pub entity_id: u32,
    pub language_id: LanguageId,
    pub locale_key_group: String,
    pub locale_key: String,
    pub locale_value: String,
}

/// UI resource string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleStringResource {
    pub language_id: LanguageId,
    pub name: String,
    pub value: String,
}

/// SEO slug of an entity. `language_id = None` is the standard slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub entity_id: u32,
    pub entity_name: String,
    pub slug: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub language_id: Option<LanguageId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreMapping {
    pub entity_id: u32,
    pub entity_name: String,
    pub store_id: StoreId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclRecord {
    pub entity_id: u32,
    pub entity_name: String,
    pub customer_role_id: CustomerRoleId,
}

/// Everything the in-memory catalog holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub product_categories: Vec<ProductCategory>,
    pub product_manufacturers: Vec<ProductManufacturer>,
    pub category_templates: Vec<CategoryTemplate>,
    pub discounts: Vec<Discount>,
    pub stores: Vec<Store>,
    pub customer_roles: Vec<CustomerRole>,
    pub languages: Vec<Language>,
    pub manufacturers: Vec<Manufacturer>,
    pub vendors: Vec<Vendor>,
    pub localized_properties: Vec<LocalizedProperty>,
    pub locale_string_resources: Vec<LocaleStringResource>,
    pub url_records: Vec<UrlRecord>,
    pub store_mappings: Vec<StoreMapping>,
    pub acl_records: Vec<AclRecord>,
    /// Language used for resource strings; the first published language when unset.
    pub working_language_id: Option<LanguageId>,
}

impl CatalogSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

fn default_true() -> bool {
    true
}
