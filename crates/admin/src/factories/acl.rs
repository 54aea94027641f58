use std::sync::Arc;

use shopdesk_catalog::{AclService, AclSupported, CustomerService};
use shopdesk_core::SelectListItem;

use crate::models::AclSupportedModel;
use crate::services::AdminServices;

/// Fills customer-role selectors.
#[derive(Clone)]
pub struct AclSupportedModelFactory {
    acl: Arc<dyn AclService>,
    customers: Arc<dyn CustomerService>,
}

impl AclSupportedModelFactory {
    pub fn new(services: &AdminServices) -> Self {
        Self {
            acl: services.acl.clone(),
            customers: services.customers.clone(),
        }
    }

    /// Select the roles `entity` is restricted to (unless `ignore_acl_mappings`)
    /// and list every customer role, inactive ones included.
    pub fn prepare_model_customer_roles<M, E>(&self, model: &mut M, entity: Option<&E>, ignore_acl_mappings: bool)
    where
        M: AclSupportedModel,
        E: AclSupported,
    {
        let selection = model.acl_selection_mut();

        if let Some(entity) = entity.filter(|_| !ignore_acl_mappings) {
            selection.selected_customer_role_ids = self
                .acl
                .get_customer_role_ids_with_access(E::ENTITY_NAME, entity.raw_id());
        }

        let selected = &selection.selected_customer_role_ids;
        selection.available_customer_roles = self
            .customers
            .get_all_customer_roles(true)
            .into_iter()
            .map(|role| SelectListItem::new(role.name, role.id).selected(selected.contains(&role.id)))
            .collect();
    }
}
