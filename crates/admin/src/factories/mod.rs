//! Model factories.

pub mod acl;
pub mod base;
pub mod category;
pub mod discount;
pub mod localized;
pub mod store_mapping;

pub use acl::AclSupportedModelFactory;
pub use base::BaseAdminModelFactory;
pub use category::CategoryModelFactory;
pub use discount::DiscountSupportedModelFactory;
pub use localized::LocalizedModelFactory;
pub use store_mapping::StoreMappingSupportedModelFactory;
