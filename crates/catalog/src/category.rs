use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopdesk_core::{
    CategoryId, CategoryTemplateId, DiscountId, Entity, PictureId, ProductCategoryId, ProductId,
};

use crate::support::{AclSupported, DiscountSupported, StoreMappingSupported};

/// Catalog category as persisted by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_template_id: CategoryTemplateId,
    #[serde(default)]
    pub meta_keywords: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub meta_title: String,
    /// `None` for a root category.
    #[serde(default)]
    pub parent_category_id: Option<CategoryId>,
    #[serde(default)]
    pub picture_id: Option<PictureId>,
    pub page_size: u32,
    #[serde(default)]
    pub allow_customers_to_select_page_size: bool,
    #[serde(default)]
    pub page_size_options: String,
    #[serde(default)]
    pub price_ranges: String,
    #[serde(default)]
    pub show_on_home_page: bool,
    #[serde(default)]
    pub include_in_top_menu: bool,
    #[serde(default)]
    pub subject_to_acl: bool,
    #[serde(default)]
    pub limited_to_stores: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub display_order: i32,
    pub created_on_utc: DateTime<Utc>,
    pub updated_on_utc: DateTime<Utc>,
    #[serde(default)]
    pub applied_discount_ids: Vec<DiscountId>,
}

impl Category {
    /// A published root category with neutral defaults; mostly for tests and seeding.
    pub fn new(id: CategoryId, name: impl Into<String>, template: CategoryTemplateId) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            description: String::new(),
            category_template_id: template,
            meta_keywords: String::new(),
            meta_description: String::new(),
            meta_title: String::new(),
            parent_category_id: None,
            picture_id: None,
            page_size: 6,
            allow_customers_to_select_page_size: true,
            page_size_options: "6, 3, 9".to_string(),
            price_ranges: String::new(),
            show_on_home_page: false,
            include_in_top_menu: false,
            subject_to_acl: false,
            limited_to_stores: false,
            published: true,
            deleted: false,
            display_order: 0,
            created_on_utc: now,
            updated_on_utc: now,
            applied_discount_ids: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: CategoryId) -> Self {
        self.parent_category_id = Some(parent);
        self
    }

    pub fn with_display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }
}

impl Entity for Category {
    type Id = CategoryId;
    const ENTITY_NAME: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }
}

impl AclSupported for Category {}

impl StoreMappingSupported for Category {
    fn limited_to_stores(&self) -> bool {
        self.limited_to_stores
    }
}

impl DiscountSupported for Category {
    fn applied_discount_ids(&self) -> &[DiscountId] {
        &self.applied_discount_ids
    }
}

/// Link between a product and a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: ProductCategoryId,
    pub product_id: ProductId,
    pub category_id: CategoryId,
    #[serde(default)]
    pub is_featured_product: bool,
    #[serde(default)]
    pub display_order: i32,
}

impl Entity for ProductCategory {
    type Id = ProductCategoryId;
    const ENTITY_NAME: &'static str = "ProductCategory";

    fn id(&self) -> ProductCategoryId {
        self.id
    }
}
