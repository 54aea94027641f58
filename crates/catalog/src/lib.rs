//! Catalog domain module.
//!
//! Entities read by the admin layer and the collaborator service traits it
//! calls into. Persistence and lifecycle belong to whoever implements the
//! traits; this crate holds no IO.

pub mod category;
pub mod directory;
pub mod discount;
pub mod product;
pub mod services;
pub mod support;
pub mod tree;

pub use category::{Category, ProductCategory};
pub use directory::{CategoryTemplate, CustomerRole, Language, Manufacturer, Store, Vendor};
pub use discount::{Discount, DiscountType};
pub use product::{Product, ProductManufacturer, ProductType};
pub use services::{
    AclService, CategoryFilter, CategoryService, CategoryTemplateService, CustomerService,
    DiscountService, LanguageService, LocalizationService, ManufacturerService, ProductSearchFilter,
    ProductService, StoreMappingService, StoreService, UrlRecordService, VendorService,
};
pub use support::{AclSupported, DiscountSupported, StoreMappingSupported};
pub use tree::{BREADCRUMB_SEPARATOR, format_breadcrumb, sort_for_tree};
