use std::sync::Arc;

use shopdesk_admin::{AdminServices, CategoryModelFactory};
use shopdesk_catalog::{Category, CategoryService};
use shopdesk_core::CategoryId;
use shopdesk_infra::InMemoryCatalog;

use crate::config::AppConfig;

/// Handles shared by every request.
#[derive(Clone)]
pub struct AppServices {
    pub category_models: CategoryModelFactory,
    categories: Arc<dyn CategoryService>,
}

impl AppServices {
    pub fn new(services: &AdminServices, config: &AppConfig) -> Self {
        Self {
            category_models: CategoryModelFactory::new(
                services,
                config.catalog.clone(),
                config.admin_area.clone(),
            ),
            categories: services.categories.clone(),
        }
    }

    /// Wire every collaborator to one in-memory catalog.
    pub fn from_catalog(catalog: Arc<InMemoryCatalog>, config: &AppConfig) -> Self {
        Self::new(&AdminServices::from_backend(catalog), config)
    }

    pub fn category(&self, id: CategoryId) -> Option<Category> {
        self.categories.get_category_by_id(id).filter(|c| !c.deleted)
    }
}
