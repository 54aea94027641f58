//! Infrastructure layer: in-memory implementations of the catalog services.

pub mod read_model;

pub use read_model::{CatalogSnapshot, InMemoryCatalog, SnapshotError};
