//! Admin view-model assembly.
//!
//! Factories turn catalog entities into flat models for admin screens and fill
//! the option lists those screens need. They hold no state beyond their
//! collaborator handles and perform no writes.

pub mod factories;
pub mod models;
pub mod services;
pub mod settings;

pub use factories::{
    AclSupportedModelFactory, BaseAdminModelFactory, CategoryModelFactory,
    DiscountSupportedModelFactory, LocalizedModelFactory, StoreMappingSupportedModelFactory,
};
pub use services::AdminServices;
pub use settings::{AdminAreaSettings, CatalogSettings};
