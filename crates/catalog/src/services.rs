//! Collaborator services the admin layer reads from.
//!
//! Every trait is object safe so factories can hold `Arc<dyn ...>` handles.
//! Side-table lookups (localization, ACL, store mapping, URL records) are keyed
//! by `(entity name, raw id)`; see [`shopdesk_core::Entity`].

use shopdesk_core::{
    CategoryId, CustomerRoleId, LanguageId, ManufacturerId, PageRequest, PagedList, ProductId,
    StoreId, VendorId,
};

use crate::category::{Category, ProductCategory};
use crate::directory::{CategoryTemplate, CustomerRole, Language, Manufacturer, Store, Vendor};
use crate::discount::{Discount, DiscountType};
use crate::product::Product;
use crate::tree::{BREADCRUMB_SEPARATOR, format_breadcrumb};

/// Category lookup criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    /// Case-insensitive substring of the category name.
    pub name: Option<String>,
    /// Keep only categories visible in this store.
    pub store_id: Option<StoreId>,
    /// Include unpublished categories.
    pub show_hidden: bool,
}

pub trait CategoryService: Send + Sync {
    /// Categories matching `filter`, ordered for tree display, then paged.
    fn get_all_categories(&self, filter: &CategoryFilter, page: PageRequest) -> PagedList<Category>;

    fn get_category_by_id(&self, id: CategoryId) -> Option<Category>;

    /// Product mappings of a category, ordered by display order.
    fn get_product_categories_by_category_id(
        &self,
        category_id: CategoryId,
        show_hidden: bool,
        page: PageRequest,
    ) -> PagedList<ProductCategory>;

    /// Ancestor path of `category`, root first.
    fn get_formatted_breadcrumb(&self, category: &Category) -> String {
        format_breadcrumb(category, |id| self.get_category_by_id(id), BREADCRUMB_SEPARATOR)
    }
}

/// Product search criteria. `None` / empty means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearchFilter {
    pub category_ids: Vec<CategoryId>,
    pub manufacturer_id: Option<ManufacturerId>,
    pub store_id: Option<StoreId>,
    pub vendor_id: Option<VendorId>,
    /// Raw product type id as posted by the form; an unknown id matches nothing.
    pub product_type_id: Option<u32>,
    /// Case-insensitive substring of the product name or SKU.
    pub keywords: Option<String>,
    /// Include unpublished products.
    pub show_hidden: bool,
}

pub trait ProductService: Send + Sync {
    fn get_product_by_id(&self, id: ProductId) -> Option<Product>;

    fn search_products(&self, filter: &ProductSearchFilter, page: PageRequest) -> PagedList<Product>;
}

pub trait DiscountService: Send + Sync {
    /// Discounts of the given type (all types when `None`). Expired discounts
    /// are only returned when `show_hidden` is set.
    fn get_all_discounts(&self, discount_type: Option<DiscountType>, show_hidden: bool) -> Vec<Discount>;
}

pub trait LocalizationService: Send + Sync {
    /// Resource string for the working language; the key itself when missing.
    fn get_resource(&self, key: &str) -> String;

    /// Stored translation of one entity property, without falling back to the
    /// entity's own value.
    fn get_localized_value(
        &self,
        language_id: LanguageId,
        entity_id: u32,
        key_group: &str,
        key: &str,
    ) -> Option<String>;
}

pub trait LanguageService: Send + Sync {
    fn get_all_languages(&self, show_hidden: bool) -> Vec<Language>;
}

pub trait UrlRecordService: Send + Sync {
    /// Active SEO slug of an entity. `language_id = None` is the standard slug.
    fn get_active_slug(
        &self,
        entity_id: u32,
        entity_name: &str,
        language_id: Option<LanguageId>,
    ) -> Option<String>;
}

pub trait StoreService: Send + Sync {
    fn get_all_stores(&self) -> Vec<Store>;
}

pub trait StoreMappingService: Send + Sync {
    fn get_store_ids_with_access(&self, entity_name: &str, entity_id: u32) -> Vec<StoreId>;
}

pub trait CustomerService: Send + Sync {
    fn get_all_customer_roles(&self, show_hidden: bool) -> Vec<CustomerRole>;
}

pub trait AclService: Send + Sync {
    fn get_customer_role_ids_with_access(&self, entity_name: &str, entity_id: u32) -> Vec<CustomerRoleId>;
}

pub trait ManufacturerService: Send + Sync {
    fn get_all_manufacturers(&self, show_hidden: bool) -> Vec<Manufacturer>;
}

pub trait VendorService: Send + Sync {
    fn get_all_vendors(&self, show_hidden: bool) -> Vec<Vendor>;
}

pub trait CategoryTemplateService: Send + Sync {
    fn get_all_category_templates(&self) -> Vec<CategoryTemplate>;
}
