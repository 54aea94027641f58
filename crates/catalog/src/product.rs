use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopdesk_core::{Entity, ManufacturerId, ProductId, VendorId};

use crate::support::StoreMappingSupported;

/// Product kind. Discriminants are the ids admin forms post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    SimpleProduct = 5,
    GroupedProduct = 10,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::SimpleProduct, ProductType::GroupedProduct];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Variant name, used to build localization resource keys.
    pub fn name(self) -> &'static str {
        match self {
            ProductType::SimpleProduct => "SimpleProduct",
            ProductType::GroupedProduct => "GroupedProduct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub sku: String,
    pub product_type: ProductType,
    #[serde(default)]
    pub vendor_id: Option<VendorId>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub limited_to_stores: bool,
    #[serde(default)]
    pub display_order: i32,
    pub created_on_utc: DateTime<Utc>,
    pub updated_on_utc: DateTime<Utc>,
}

impl Product {
    /// A published simple product; mostly for tests and seeding.
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            short_description: String::new(),
            sku: String::new(),
            product_type: ProductType::SimpleProduct,
            vendor_id: None,
            price: 0.0,
            stock_quantity: 0,
            published: true,
            deleted: false,
            limited_to_stores: false,
            display_order: 0,
            created_on_utc: now,
            updated_on_utc: now,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;
    const ENTITY_NAME: &'static str = "Product";

    fn id(&self) -> ProductId {
        self.id
    }
}

impl StoreMappingSupported for Product {
    fn limited_to_stores(&self) -> bool {
        self.limited_to_stores
    }
}

/// Link between a product and a manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductManufacturer {
    pub product_id: ProductId,
    pub manufacturer_id: ManufacturerId,
    #[serde(default)]
    pub display_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_type_ids_round_trip() {
        assert_eq!(ProductType::from_id(5), Some(ProductType::SimpleProduct));
        assert_eq!(ProductType::from_id(10), Some(ProductType::GroupedProduct));
        assert_eq!(ProductType::from_id(7), None);
        assert_eq!(ProductType::GroupedProduct.id(), 10);
    }
}
