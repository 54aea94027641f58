//! In-memory catalog read model backing every collaborator service.

pub mod catalog_store;
pub mod snapshot;

pub use catalog_store::InMemoryCatalog;
pub use snapshot::{
    AclRecord, CatalogSnapshot, LocaleStringResource, LocalizedProperty, SnapshotError,
    StoreMapping, UrlRecord,
};
