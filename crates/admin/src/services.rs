use std::sync::Arc;

use shopdesk_catalog::{
    AclService, CategoryService, CategoryTemplateService, CustomerService, DiscountService,
    LanguageService, LocalizationService, ManufacturerService, ProductService, StoreMappingService,
    StoreService, UrlRecordService, VendorService,
};

/// Collaborator handles shared by all admin factories.
#[derive(Clone)]
pub struct AdminServices {
    pub categories: Arc<dyn CategoryService>,
    pub products: Arc<dyn ProductService>,
    pub discounts: Arc<dyn DiscountService>,
    pub localization: Arc<dyn LocalizationService>,
    pub languages: Arc<dyn LanguageService>,
    pub url_records: Arc<dyn UrlRecordService>,
    pub stores: Arc<dyn StoreService>,
    pub store_mappings: Arc<dyn StoreMappingService>,
    pub customers: Arc<dyn CustomerService>,
    pub acl: Arc<dyn AclService>,
    pub manufacturers: Arc<dyn ManufacturerService>,
    pub vendors: Arc<dyn VendorService>,
    pub category_templates: Arc<dyn CategoryTemplateService>,
}

impl AdminServices {
    /// Use one backend for every collaborator.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: CategoryService
            + ProductService
            + DiscountService
            + LocalizationService
            + LanguageService
            + UrlRecordService
            + StoreService
            + StoreMappingService
            + CustomerService
            + AclService
            + ManufacturerService
            + VendorService
            + CategoryTemplateService
            + 'static,
    {
        Self {
            categories: backend.clone(),
            products: backend.clone(),
            discounts: backend.clone(),
            localization: backend.clone(),
            languages: backend.clone(),
            url_records: backend.clone(),
            stores: backend.clone(),
            store_mappings: backend.clone(),
            customers: backend.clone(),
            acl: backend.clone(),
            manufacturers: backend.clone(),
            vendors: backend.clone(),
            category_templates: backend,
        }
    }
}

impl core::fmt::Debug for AdminServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdminServices").finish_non_exhaustive()
    }
}
