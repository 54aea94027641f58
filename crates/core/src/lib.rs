//! `shopdesk-core`: shared building blocks for the admin layer.
//!
//! No IO lives here: errors, identifiers, paging and option-list primitives.

pub mod entity;
pub mod error;
pub mod id;
pub mod paging;
pub mod select_list;

pub use entity::Entity;
pub use error::{require, DomainError, DomainResult};
pub use id::{
    CategoryId, CategoryTemplateId, CustomerRoleId, DiscountId, LanguageId, ManufacturerId,
    PictureId, ProductCategoryId, ProductId, StoreId, VendorId,
};
pub use paging::{PageRequest, PagedList};
pub use select_list::SelectListItem;
