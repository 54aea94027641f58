//! View-models rendered by admin screens.

pub mod catalog;
pub mod common;

pub use catalog::{
    AddProductToCategoryListModel, AddProductToCategorySearchModel, CategoryListModel,
    CategoryLocalizedModel, CategoryModel, CategoryProductListModel, CategoryProductModel,
    CategoryProductSearchModel, CategorySearchModel, ProductModel,
};
pub use common::{
    AclSelection, AclSupportedModel, DiscountSelection, DiscountSupportedModel, GridPaging,
    ListModel, LocaleModel, StoreMappingSupportedModel, StoreSelection,
};
