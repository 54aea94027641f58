//! Category admin screens: grid, edit form, product mappings and the
//! "add product" popup.

use std::sync::Arc;

use shopdesk_catalog::{
    Category, CategoryFilter, CategoryService, DiscountService, DiscountType, LocalizationService,
    ProductSearchFilter, ProductService, UrlRecordService,
};
use shopdesk_core::{
    CategoryId, DomainError, DomainResult, Entity, LanguageId, ManufacturerId, StoreId, VendorId, require,
};

use crate::factories::{
    AclSupportedModelFactory, BaseAdminModelFactory, DiscountSupportedModelFactory,
    LocalizedModelFactory, StoreMappingSupportedModelFactory,
};
use crate::models::{
    AddProductToCategoryListModel, AddProductToCategorySearchModel, CategoryListModel,
    CategoryLocalizedModel, CategoryModel, CategoryProductListModel, CategoryProductModel,
    CategoryProductSearchModel, CategorySearchModel, ListModel, ProductModel,
};
use crate::services::AdminServices;
use crate::settings::{AdminAreaSettings, CatalogSettings};

/// Resource naming the "no parent" option of the parent-category drop-down.
pub const NO_PARENT_RESOURCE: &str = "Admin.Catalog.Categories.Fields.Parent.None";

/// Builds the search, list and edit models of the category admin screens.
#[derive(Clone)]
pub struct CategoryModelFactory {
    catalog_settings: CatalogSettings,
    admin_area_settings: AdminAreaSettings,
    base: BaseAdminModelFactory,
    acl: AclSupportedModelFactory,
    store_mapping: StoreMappingSupportedModelFactory,
    discount_supported: DiscountSupportedModelFactory,
    localized: LocalizedModelFactory,
    categories: Arc<dyn CategoryService>,
    discounts: Arc<dyn DiscountService>,
    localization: Arc<dyn LocalizationService>,
    products: Arc<dyn ProductService>,
    url_records: Arc<dyn UrlRecordService>,
}

impl CategoryModelFactory {
    pub fn new(
        services: &AdminServices,
        catalog_settings: CatalogSettings,
        admin_area_settings: AdminAreaSettings,
    ) -> Self {
        Self {
            catalog_settings,
            admin_area_settings,
            base: BaseAdminModelFactory::new(services),
            acl: AclSupportedModelFactory::new(services),
            store_mapping: StoreMappingSupportedModelFactory::new(services),
            discount_supported: DiscountSupportedModelFactory::new(),
            localized: LocalizedModelFactory::new(services),
            categories: services.categories.clone(),
            discounts: services.discounts.clone(),
            localization: services.localization.clone(),
            products: services.products.clone(),
            url_records: services.url_records.clone(),
        }
    }

    /// Category grid filters: store drop-down and grid paging.
    pub fn prepare_category_search_model(
        &self,
        model: Option<CategorySearchModel>,
    ) -> DomainResult<CategorySearchModel> {
        let mut model = require(model, "model")?;

        self.base.prepare_stores(&mut model.available_stores, true, None);
        model.paging.set_grid_page_size(&self.admin_area_settings);

        Ok(model)
    }

    /// One page of the category grid, each row carrying its breadcrumb.
    pub fn prepare_category_list_model(
        &self,
        search_model: Option<&CategorySearchModel>,
    ) -> DomainResult<CategoryListModel> {
        let search_model = require(search_model, "searchModel")?;

        let filter = CategoryFilter {
            name: Some(search_model.search_category_name.clone()).filter(|n| !n.trim().is_empty()),
            store_id: StoreId::from_raw(search_model.search_store_id),
            show_hidden: true,
        };
        let categories = self
            .categories
            .get_all_categories(&filter, search_model.paging.page_request());

        let total = categories.total_count;
        let data: Vec<CategoryModel> = categories
            .iter()
            .map(|category| {
                let mut row = CategoryModel::from(category);
                row.breadcrumb = self.categories.get_formatted_breadcrumb(category);
                row
            })
            .collect();

        tracing::debug!(rows = data.len(), total, "category list prepared");
        Ok(ListModel { data, total })
    }

    /// Category edit form.
    ///
    /// With a `category` the form starts from the mapped entity (unless a
    /// posted `model` is given) and its translations; without one it gets the
    /// new-category defaults. `exclude_properties` keeps posted selections and
    /// skips locale preparation, for redisplaying a rejected form.
    pub fn prepare_category_model(
        &self,
        model: Option<CategoryModel>,
        category: Option<&Category>,
        exclude_properties: bool,
    ) -> DomainResult<CategoryModel> {
        let mut model = match (model, category) {
            (Some(model), _) => model,
            (None, Some(category)) => {
                let mut model = CategoryModel::from(category);
                model.se_name = self
                    .url_records
                    .get_active_slug(category.raw_id(), Category::ENTITY_NAME, None)
                    .unwrap_or_default();
                model
            }
            (None, None) => return Err(DomainError::missing("model")),
        };

        match category {
            Some(category) => {
                model.category_product_search_model = self.prepare_category_product_search_model(
                    Some(std::mem::take(&mut model.category_product_search_model)),
                    Some(category),
                )?;
            }
            None => {
                model.page_size = self.catalog_settings.default_category_page_size;
                model.page_size_options = self.catalog_settings.default_category_page_size_options.clone();
                model.published = true;
                model.include_in_top_menu = true;
                model.allow_customers_to_select_page_size = true;
            }
        }

        if !exclude_properties {
            let configure = category.map(|category| {
                move |locale: &mut CategoryLocalizedModel, language_id: LanguageId| {
                    self.localize_category(locale, category, language_id)
                }
            });
            model.locales = self.localized.prepare_localized_models(configure);
        }

        self.base
            .prepare_category_templates(&mut model.available_category_templates, false, None);

        let no_parent = self.localization.get_resource(NO_PARENT_RESOURCE);
        self.base
            .prepare_categories(&mut model.available_categories, true, Some(&no_parent));

        let available_discounts = self
            .discounts
            .get_all_discounts(Some(DiscountType::AssignedToCategories), true);
        self.discount_supported.prepare_model_discounts(
            &mut model,
            category,
            &available_discounts,
            exclude_properties,
        );

        self.acl
            .prepare_model_customer_roles(&mut model, category, exclude_properties);
        self.store_mapping
            .prepare_model_stores(&mut model, category, exclude_properties);

        tracing::debug!(
            category_id = ?category.map(|c| c.id),
            locales = model.locales.len(),
            "category model prepared"
        );
        Ok(model)
    }

    fn localize_category(&self, locale: &mut CategoryLocalizedModel, category: &Category, language_id: LanguageId) {
        let value = |key: &str| {
            self.localization
                .get_localized_value(language_id, category.raw_id(), Category::ENTITY_NAME, key)
                .unwrap_or_default()
        };

        locale.name = value("Name");
        locale.description = value("Description");
        locale.meta_keywords = value("MetaKeywords");
        locale.meta_description = value("MetaDescription");
        locale.meta_title = value("MetaTitle");
        locale.se_name = self
            .url_records
            .get_active_slug(category.raw_id(), Category::ENTITY_NAME, Some(language_id))
            .unwrap_or_default();
    }

    /// Filters of the "products in this category" grid.
    pub fn prepare_category_product_search_model(
        &self,
        model: Option<CategoryProductSearchModel>,
        category: Option<&Category>,
    ) -> DomainResult<CategoryProductSearchModel> {
        let mut model = require(model, "model")?;

        if let Some(category) = category {
            model.category_id = Some(category.id);
        }
        model.paging.set_grid_page_size(&self.admin_area_settings);

        Ok(model)
    }

    /// One page of the products mapped to `category`.
    pub fn prepare_category_product_list_model(
        &self,
        search_model: Option<&CategoryProductSearchModel>,
        category: Option<&Category>,
    ) -> DomainResult<CategoryProductListModel> {
        let search_model = require(search_model, "searchModel")?;
        let category = require(category, "category")?;

        let product_categories = self.categories.get_product_categories_by_category_id(
            category.id,
            true,
            search_model.paging.page_request(),
        );

        let total = product_categories.total_count;
        let data: Vec<CategoryProductModel> = product_categories
            .into_iter()
            .map(|pc| CategoryProductModel {
                id: pc.id,
                category_id: pc.category_id,
                product_id: pc.product_id,
                product_name: self.products.get_product_by_id(pc.product_id).map(|p| p.name),
                is_featured_product: pc.is_featured_product,
                display_order: pc.display_order,
            })
            .collect();

        tracing::debug!(category_id = %category.id, rows = data.len(), total, "category products prepared");
        Ok(ListModel { data, total })
    }

    /// Filters of the "add product to category" popup.
    pub fn prepare_add_product_to_category_search_model(
        &self,
        model: Option<AddProductToCategorySearchModel>,
    ) -> DomainResult<AddProductToCategorySearchModel> {
        let mut model = require(model, "model")?;

        self.base.prepare_categories(&mut model.available_categories, true, None);
        self.base.prepare_manufacturers(&mut model.available_manufacturers, true, None);
        self.base.prepare_stores(&mut model.available_stores, true, None);
        self.base.prepare_vendors(&mut model.available_vendors, true, None);
        self.base.prepare_product_types(&mut model.available_product_types, true, None);
        model.paging.set_grid_page_size(&self.admin_area_settings);

        Ok(model)
    }

    /// One page of products matching the popup filters.
    pub fn prepare_add_product_to_category_list_model(
        &self,
        search_model: Option<&AddProductToCategorySearchModel>,
    ) -> DomainResult<AddProductToCategoryListModel> {
        let search_model = require(search_model, "searchModel")?;

        let filter = ProductSearchFilter {
            category_ids: CategoryId::from_raw(search_model.search_category_id)
                .into_iter()
                .collect(),
            manufacturer_id: ManufacturerId::from_raw(search_model.search_manufacturer_id),
            store_id: StoreId::from_raw(search_model.search_store_id),
            vendor_id: VendorId::from_raw(search_model.search_vendor_id),
            product_type_id: Some(search_model.search_product_type_id).filter(|id| *id > 0),
            keywords: Some(search_model.search_product_name.clone()).filter(|k| !k.trim().is_empty()),
            show_hidden: true,
        };
        let products = self
            .products
            .search_products(&filter, search_model.paging.page_request());

        let total = products.total_count;
        let data: Vec<ProductModel> = products.iter().map(ProductModel::from).collect();

        tracing::debug!(rows = data.len(), total, "add-product list prepared");
        Ok(ListModel { data, total })
    }
}
