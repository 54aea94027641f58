//! Category admin models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopdesk_catalog::{Category, Product};
use shopdesk_core::{
    CategoryId, CategoryTemplateId, LanguageId, PictureId, ProductCategoryId, ProductId,
    SelectListItem, VendorId,
};

use super::common::{
    AclSelection, AclSupportedModel, DiscountSelection, DiscountSupportedModel, GridPaging,
    ListModel, LocaleModel, StoreMappingSupportedModel, StoreSelection,
};

/// Filters of the category grid. `search_store_id = 0` means all stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySearchModel {
    pub search_category_name: String,
    pub search_store_id: u32,
    pub available_stores: Vec<SelectListItem>,
    #[serde(flatten)]
    pub paging: GridPaging,
}

pub type CategoryListModel = ListModel<CategoryModel>;

/// Edit form (and grid row) of a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryModel {
    /// `None` for a category that has not been saved yet.
    pub id: Option<CategoryId>,
    pub name: String,
    pub description: String,
    pub category_template_id: Option<CategoryTemplateId>,
    pub meta_keywords: String,
    pub meta_description: String,
    pub meta_title: String,
    pub se_name: String,
    pub parent_category_id: Option<CategoryId>,
    pub picture_id: Option<PictureId>,
    pub page_size: u32,
    pub allow_customers_to_select_page_size: bool,
    pub page_size_options: String,
    pub price_ranges: String,
    pub show_on_home_page: bool,
    pub include_in_top_menu: bool,
    pub published: bool,
    pub deleted: bool,
    pub display_order: i32,
    pub created_on_utc: Option<DateTime<Utc>>,
    pub updated_on_utc: Option<DateTime<Utc>>,
    pub breadcrumb: String,
    pub locales: Vec<CategoryLocalizedModel>,
    pub available_category_templates: Vec<SelectListItem>,
    pub available_categories: Vec<SelectListItem>,
    #[serde(flatten)]
    pub acl: AclSelection,
    #[serde(flatten)]
    pub stores: StoreSelection,
    #[serde(flatten)]
    pub discounts: DiscountSelection,
    pub category_product_search_model: CategoryProductSearchModel,
}

impl From<&Category> for CategoryModel {
    fn from(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone(),
            category_template_id: Some(category.category_template_id),
            meta_keywords: category.meta_keywords.clone(),
            meta_description: category.meta_description.clone(),
            meta_title: category.meta_title.clone(),
            parent_category_id: category.parent_category_id,
            picture_id: category.picture_id,
            page_size: category.page_size,
            allow_customers_to_select_page_size: category.allow_customers_to_select_page_size,
            page_size_options: category.page_size_options.clone(),
            price_ranges: category.price_ranges.clone(),
            show_on_home_page: category.show_on_home_page,
            include_in_top_menu: category.include_in_top_menu,
            published: category.published,
            deleted: category.deleted,
            display_order: category.display_order,
            created_on_utc: Some(category.created_on_utc),
            updated_on_utc: Some(category.updated_on_utc),
            ..Self::default()
        }
    }
}

impl AclSupportedModel for CategoryModel {
    fn acl_selection_mut(&mut self) -> &mut AclSelection {
        &mut self.acl
    }
}

impl StoreMappingSupportedModel for CategoryModel {
    fn store_selection_mut(&mut self) -> &mut StoreSelection {
        &mut self.stores
    }
}

impl DiscountSupportedModel for CategoryModel {
    fn discount_selection_mut(&mut self) -> &mut DiscountSelection {
        &mut self.discounts
    }
}

/// Translations of a category for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryLocalizedModel {
    pub language_id: Option<LanguageId>,
    pub name: String,
    pub description: String,
    pub meta_keywords: String,
    pub meta_description: String,
    pub meta_title: String,
    pub se_name: String,
}

impl LocaleModel for CategoryLocalizedModel {
    fn set_language_id(&mut self, language_id: LanguageId) {
        self.language_id = Some(language_id);
    }
}

/// Filters of the "products in this category" grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryProductSearchModel {
    pub category_id: Option<CategoryId>,
    #[serde(flatten)]
    pub paging: GridPaging,
}

pub type CategoryProductListModel = ListModel<CategoryProductModel>;

/// Row of the "products in this category" grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProductModel {
    pub id: ProductCategoryId,
    pub category_id: CategoryId,
    pub product_id: ProductId,
    /// `None` when the product no longer resolves.
    pub product_name: Option<String>,
    pub is_featured_product: bool,
    pub display_order: i32,
}

/// Filters of the "add product to category" popup. Zero ids mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddProductToCategorySearchModel {
    pub search_product_name: String,
    pub search_category_id: u32,
    pub search_manufacturer_id: u32,
    pub search_store_id: u32,
    pub search_vendor_id: u32,
    pub search_product_type_id: u32,
    pub available_categories: Vec<SelectListItem>,
    pub available_manufacturers: Vec<SelectListItem>,
    pub available_stores: Vec<SelectListItem>,
    pub available_vendors: Vec<SelectListItem>,
    pub available_product_types: Vec<SelectListItem>,
    #[serde(flatten)]
    pub paging: GridPaging,
}

pub type AddProductToCategoryListModel = ListModel<ProductModel>;

/// Product row of the "add product to category" popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductModel {
    pub id: ProductId,
    pub name: String,
    pub short_description: String,
    pub sku: String,
    pub product_type_id: u32,
    pub vendor_id: Option<VendorId>,
    pub price: f64,
    pub stock_quantity: i32,
    pub published: bool,
    pub limited_to_stores: bool,
    pub display_order: i32,
    pub created_on_utc: DateTime<Utc>,
    pub updated_on_utc: DateTime<Utc>,
}

impl From<&Product> for ProductModel {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            short_description: product.short_description.clone(),
            sku: product.sku.clone(),
            product_type_id: product.product_type.id(),
            vendor_id: product.vendor_id,
            price: product.price,
            stock_quantity: product.stock_quantity,
            published: product.published,
            limited_to_stores: product.limited_to_stores,
            display_order: product.display_order,
            created_on_utc: product.created_on_utc,
            updated_on_utc: product.updated_on_utc,
        }
    }
}
