use std::collections::HashMap;
use std::sync::Arc;

use shopdesk_catalog::{
    BREADCRUMB_SEPARATOR, CategoryFilter, CategoryService, CategoryTemplateService,
    LocalizationService, ManufacturerService, ProductType, StoreService, VendorService,
    format_breadcrumb,
};
use shopdesk_core::{PageRequest, SelectListItem};

use crate::services::AdminServices;

/// Resource used for the leading "All" item when no text is given.
pub const ALL_ITEM_RESOURCE: &str = "Admin.Common.All";

/// Populates the drop-down lists shared by admin screens.
#[derive(Clone)]
pub struct BaseAdminModelFactory {
    categories: Arc<dyn CategoryService>,
    category_templates: Arc<dyn CategoryTemplateService>,
    localization: Arc<dyn LocalizationService>,
    manufacturers: Arc<dyn ManufacturerService>,
    stores: Arc<dyn StoreService>,
    vendors: Arc<dyn VendorService>,
}

impl BaseAdminModelFactory {
    pub fn new(services: &AdminServices) -> Self {
        Self {
            categories: services.categories.clone(),
            category_templates: services.category_templates.clone(),
            localization: services.localization.clone(),
            manufacturers: services.manufacturers.clone(),
            stores: services.stores.clone(),
            vendors: services.vendors.clone(),
        }
    }

    /// Insert the "All"/"None" item (value `"0"`) at the top of `items`.
    fn prepare_default_item(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
        default_item_text: Option<&str>,
    ) {
        if !with_special_default_item {
            return;
        }

        let text = match default_item_text {
            Some(text) => text.to_string(),
            None => self.localization.get_resource(ALL_ITEM_RESOURCE),
        };
        items.insert(0, SelectListItem::new(text, 0));
    }

    pub fn prepare_stores(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
        default_item_text: Option<&str>,
    ) {
        items.extend(
            self.stores
                .get_all_stores()
                .into_iter()
                .map(|store| SelectListItem::new(store.name, store.id)),
        );
        self.prepare_default_item(items, with_special_default_item, default_item_text);
    }

    pub fn prepare_category_templates(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
        default_item_text: Option<&str>,
    ) {
        items.extend(
            self.category_templates
                .get_all_category_templates()
                .into_iter()
                .map(|template| SelectListItem::new(template.name, template.id)),
        );
        self.prepare_default_item(items, with_special_default_item, default_item_text);
    }

    /// Every category (hidden ones included) in tree order, labelled with its breadcrumb.
    pub fn prepare_categories(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
        default_item_text: Option<&str>,
    ) {
        let filter = CategoryFilter {
            show_hidden: true,
            ..CategoryFilter::default()
        };
        let categories = self.categories.get_all_categories(&filter, PageRequest::all()).items;
        let by_id: HashMap<_, _> = categories.iter().map(|c| (c.id, c)).collect();

        items.extend(categories.iter().map(|category| {
            let text = format_breadcrumb(
                category,
                |id| by_id.get(&id).map(|c| (*c).clone()),
                BREADCRUMB_SEPARATOR,
            );
            SelectListItem::new(text, category.id)
        }));
        self.prepare_default_item(items, with_special_default_item, default_item_text);
    }

    pub fn prepare_manufacturers(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
        default_item_text: Option<&str>,
    ) {
        items.extend(
            self.manufacturers
                .get_all_manufacturers(true)
                .into_iter()
                .map(|m| SelectListItem::new(m.name, m.id)),
        );
        self.prepare_default_item(items, with_special_default_item, default_item_text);
    }

    pub fn prepare_vendors(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
        default_item_text: Option<&str>,
    ) {
        items.extend(
            self.vendors
                .get_all_vendors(true)
                .into_iter()
                .map(|v| SelectListItem::new(v.name, v.id)),
        );
        self.prepare_default_item(items, with_special_default_item, default_item_text);
    }

    /// Product types labelled with `Enums.ProductType.<Variant>` resources.
    pub fn prepare_product_types(
        &self,
        items: &mut Vec<SelectListItem>,
        with_special_default_item: bool,
        default_item_text: Option<&str>,
    ) {
        items.extend(ProductType::ALL.into_iter().map(|product_type| {
            let text = self
                .localization
                .get_resource(&format!("Enums.ProductType.{}", product_type.name()));
            SelectListItem::new(text, product_type.id())
        }));
        self.prepare_default_item(items, with_special_default_item, default_item_text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_catalog::{Category, CategoryTemplate, Language, Store};
    use shopdesk_core::{CategoryId, CategoryTemplateId, LanguageId, StoreId};
    use shopdesk_infra::read_model::LocaleStringResource;
    use shopdesk_infra::{CatalogSnapshot, InMemoryCatalog};

    fn factory(snapshot: CatalogSnapshot) -> BaseAdminModelFactory {
        let services = AdminServices::from_backend(Arc::new(InMemoryCatalog::from_snapshot(snapshot)));
        BaseAdminModelFactory::new(&services)
    }

    fn texts(items: &[SelectListItem]) -> Vec<&str> {
        items.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn stores_get_a_localized_all_item_first() {
        let f = factory(CatalogSnapshot {
            stores: vec![
                Store { id: StoreId::new(2), name: "Outlet".to_string(), display_order: 1 },
                Store { id: StoreId::new(1), name: "Main".to_string(), display_order: 0 },
            ],
            languages: vec![Language {
                id: LanguageId::new(1),
                name: "English".to_string(),
                language_culture: "en-US".to_string(),
                published: true,
                display_order: 0,
            }],
            locale_string_resources: vec![LocaleStringResource {
                language_id: LanguageId::new(1),
                name: ALL_ITEM_RESOURCE.to_string(),
                value: "All".to_string(),
            }],
            ..CatalogSnapshot::default()
        });

        let mut items = Vec::new();
        f.prepare_stores(&mut items, true, None);

        assert_eq!(texts(&items), vec!["All", "Main", "Outlet"]);
        assert!(items[0].is_default_item());
        assert_eq!(items[1].value, "1");
    }

    #[test]
    fn default_item_can_be_suppressed_or_renamed() {
        let f = factory(CatalogSnapshot {
            category_templates: vec![CategoryTemplate {
                id: CategoryTemplateId::new(1),
                name: "Products in Grid or Lines".to_string(),
                view_path: "CategoryTemplate.ProductsInGridOrLines".to_string(),
                display_order: 1,
            }],
            ..CatalogSnapshot::default()
        });

        let mut plain = Vec::new();
        f.prepare_category_templates(&mut plain, false, None);
        assert_eq!(texts(&plain), vec!["Products in Grid or Lines"]);

        let mut renamed = Vec::new();
        f.prepare_category_templates(&mut renamed, true, Some("[None]"));
        assert_eq!(texts(&renamed), vec!["[None]", "Products in Grid or Lines"]);
    }

    #[test]
    fn categories_are_labelled_with_breadcrumbs() {
        let template = CategoryTemplateId::new(1);
        let mut hidden = Category::new(CategoryId::new(3), "Drafts", template).with_parent(CategoryId::new(1));
        hidden.published = false;

        let f = factory(CatalogSnapshot {
            categories: vec![
                Category::new(CategoryId::new(2), "Notebooks", template).with_parent(CategoryId::new(1)),
                Category::new(CategoryId::new(1), "Computers", template),
                hidden,
            ],
            ..CatalogSnapshot::default()
        });

        let mut items = Vec::new();
        f.prepare_categories(&mut items, true, Some("None"));

        assert_eq!(
            texts(&items),
            vec!["None", "Computers", "Computers >> Notebooks", "Computers >> Drafts"]
        );
        assert_eq!(items[2].value, "2");
    }

    #[test]
    fn product_types_fall_back_to_resource_keys() {
        let f = factory(CatalogSnapshot::default());

        let mut items = Vec::new();
        f.prepare_product_types(&mut items, true, None);

        assert_eq!(
            texts(&items),
            vec![
                ALL_ITEM_RESOURCE,
                "Enums.ProductType.SimpleProduct",
                "Enums.ProductType.GroupedProduct"
            ]
        );
        assert_eq!(items[1].value, "5");
        assert_eq!(items[2].value, "10");
    }
}
