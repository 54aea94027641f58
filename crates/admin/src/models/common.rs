//! Building blocks shared by admin models.

use serde::{Deserialize, Serialize};

use shopdesk_core::{CustomerRoleId, DiscountId, LanguageId, PageRequest, SelectListItem, StoreId};

use crate::settings::AdminAreaSettings;

/// Grid paging state carried by every search model. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridPaging {
    pub page: u32,
    pub page_size: u32,
    pub available_page_sizes: String,
}

impl Default for GridPaging {
    fn default() -> Self {
        let settings = AdminAreaSettings::default();
        Self {
            page: 1,
            page_size: settings.default_grid_page_size,
            available_page_sizes: settings.grid_page_sizes,
        }
    }
}

impl GridPaging {
    /// Reset to the first page with the configured grid sizes.
    pub fn set_grid_page_size(&mut self, settings: &AdminAreaSettings) {
        self.page = 1;
        self.page_size = settings.default_grid_page_size;
        self.available_page_sizes = settings.grid_page_sizes.clone();
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_one_based(self.page, self.page_size)
    }
}

/// One page of grid rows plus the total number of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListModel<T> {
    pub data: Vec<T>,
    pub total: usize,
}

impl<T> Default for ListModel<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

/// Per-language slice of a localizable model.
pub trait LocaleModel: Default {
    fn set_language_id(&mut self, language_id: LanguageId);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclSelection {
    pub selected_customer_role_ids: Vec<CustomerRoleId>,
    pub available_customer_roles: Vec<SelectListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSelection {
    pub selected_store_ids: Vec<StoreId>,
    pub available_stores: Vec<SelectListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountSelection {
    pub selected_discount_ids: Vec<DiscountId>,
    pub available_discounts: Vec<SelectListItem>,
}

/// Model with a customer-role selector.
pub trait AclSupportedModel {
    fn acl_selection_mut(&mut self) -> &mut AclSelection;
}

/// Model with a store selector.
pub trait StoreMappingSupportedModel {
    fn store_selection_mut(&mut self) -> &mut StoreSelection;
}

/// Model with a discount selector.
pub trait DiscountSupportedModel {
    fn discount_selection_mut(&mut self) -> &mut DiscountSelection;
}
