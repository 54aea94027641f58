use std::sync::Arc;

use shopdesk_catalog::{StoreMappingService, StoreMappingSupported, StoreService};
use shopdesk_core::SelectListItem;

use crate::models::StoreMappingSupportedModel;
use crate::services::AdminServices;

/// Fills store selectors.
#[derive(Clone)]
pub struct StoreMappingSupportedModelFactory {
    store_mappings: Arc<dyn StoreMappingService>,
    stores: Arc<dyn StoreService>,
}

impl StoreMappingSupportedModelFactory {
    pub fn new(services: &AdminServices) -> Self {
        Self {
            store_mappings: services.store_mappings.clone(),
            stores: services.stores.clone(),
        }
    }

    pub fn prepare_model_stores<M, E>(&self, model: &mut M, entity: Option<&E>, ignore_store_mappings: bool)
    where
        M: StoreMappingSupportedModel,
        E: StoreMappingSupported,
    {
        let selection = model.store_selection_mut();

        if let Some(entity) = entity.filter(|_| !ignore_store_mappings) {
            selection.selected_store_ids = self
                .store_mappings
                .get_store_ids_with_access(E::ENTITY_NAME, entity.raw_id());
        }

        let selected = &selection.selected_store_ids;
        selection.available_stores = self
            .stores
            .get_all_stores()
            .into_iter()
            .map(|store| SelectListItem::new(store.name, store.id).selected(selected.contains(&store.id)))
            .collect();
    }
}
