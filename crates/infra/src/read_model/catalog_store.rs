use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use chrono::Utc;

use shopdesk_catalog::{
    AclService, Category, CategoryFilter, CategoryService, CategoryTemplate,
    CategoryTemplateService, CustomerRole, CustomerService, Discount, DiscountService,
    DiscountType, Language, LanguageService, LocalizationService, Manufacturer,
    ManufacturerService, Product, ProductCategory, ProductSearchFilter, ProductService, Store,
    StoreMappingService, StoreMappingSupported, StoreService, UrlRecordService, Vendor,
    VendorService, sort_for_tree,
};
use shopdesk_core::{
    CategoryId, CustomerRoleId, LanguageId, PageRequest, PagedList, ProductId, StoreId,
};

use super::snapshot::CatalogSnapshot;

/// In-memory catalog for tests/dev. Implements every collaborator service.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    inner: RwLock<CatalogSnapshot>,
}

impl InMemoryCatalog {
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        tracing::debug!(
            categories = snapshot.categories.len(),
            products = snapshot.products.len(),
            languages = snapshot.languages.len(),
            "catalog snapshot loaded"
        );
        Self {
            inner: RwLock::new(snapshot),
        }
    }

    /// Mutate the contents in place.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut CatalogSnapshot),
    {
        let mut data = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut data);
    }

    fn data(&self) -> RwLockReadGuard<'_, CatalogSnapshot> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

fn visible_in_store<E: StoreMappingSupported>(data: &CatalogSnapshot, entity: &E, store: StoreId) -> bool {
    !entity.limited_to_stores()
        || data.store_mappings.iter().any(|m| {
            m.entity_name == E::ENTITY_NAME && m.entity_id == entity.raw_id() && m.store_id == store
        })
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn normalized_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

impl CategoryService for InMemoryCatalog {
    fn get_all_categories(&self, filter: &CategoryFilter, page: PageRequest) -> PagedList<Category> {
        let data = self.data();
        let name = normalized_term(filter.name.as_deref());

        let matches: Vec<Category> = data
            .categories
            .iter()
            .filter(|c| !c.deleted)
            .filter(|c| filter.show_hidden || c.published)
            .filter(|c| name.as_deref().is_none_or(|n| contains_ci(&c.name, n)))
            .filter(|c| filter.store_id.is_none_or(|s| visible_in_store(&data, *c, s)))
            .cloned()
            .collect();

        PagedList::paginate(sort_for_tree(matches), page)
    }

    fn get_category_by_id(&self, id: CategoryId) -> Option<Category> {
        self.data().categories.iter().find(|c| c.id == id).cloned()
    }

    fn get_product_categories_by_category_id(
        &self,
        category_id: CategoryId,
        show_hidden: bool,
        page: PageRequest,
    ) -> PagedList<ProductCategory> {
        let data = self.data();

        let mut matches: Vec<ProductCategory> = data
            .product_categories
            .iter()
            .filter(|pc| pc.category_id == category_id)
            .filter(|pc| {
                data.products
                    .iter()
                    .find(|p| p.id == pc.product_id)
                    .is_some_and(|p| !p.deleted && (show_hidden || p.published))
            })
            .cloned()
            .collect();
        matches.sort_by_key(|pc| (pc.display_order, pc.id));

        PagedList::paginate(matches, page)
    }
}

impl ProductService for InMemoryCatalog {
    fn get_product_by_id(&self, id: ProductId) -> Option<Product> {
        self.data().products.iter().find(|p| p.id == id).cloned()
    }

    fn search_products(&self, filter: &ProductSearchFilter, page: PageRequest) -> PagedList<Product> {
        let data = self.data();
        let keywords = normalized_term(filter.keywords.as_deref());

        let category_position = |p: &Product| {
            data.product_categories
                .iter()
                .filter(|pc| pc.product_id == p.id && filter.category_ids.contains(&pc.category_id))
                .map(|pc| pc.display_order)
                .min()
        };
        let manufacturer_position = |p: &Product| {
            data.product_manufacturers
                .iter()
                .filter(|pm| pm.product_id == p.id && Some(pm.manufacturer_id) == filter.manufacturer_id)
                .map(|pm| pm.display_order)
                .min()
        };

        let mut matches: Vec<(i32, Product)> = data
            .products
            .iter()
            .filter(|p| !p.deleted)
            .filter(|p| filter.show_hidden || p.published)
            .filter(|p| filter.category_ids.is_empty() || category_position(*p).is_some())
            .filter(|p| filter.manufacturer_id.is_none() || manufacturer_position(*p).is_some())
            .filter(|p| filter.store_id.is_none_or(|s| visible_in_store(&data, *p, s)))
            .filter(|p| filter.vendor_id.is_none() || p.vendor_id == filter.vendor_id)
            .filter(|p| filter.product_type_id.is_none_or(|t| p.product_type.id() == t))
            .filter(|p| {
                keywords
                    .as_deref()
                    .is_none_or(|k| contains_ci(&p.name, k) || contains_ci(&p.sku, k))
            })
            .map(|p| {
                let position = if filter.category_ids.is_empty() {
                    manufacturer_position(p).unwrap_or(0)
                } else {
                    category_position(p).unwrap_or(0)
                };
                (position, p.clone())
            })
            .collect();
        matches.sort_by(|(pa, a), (pb, b)| {
            pa.cmp(pb).then_with(|| a.name.cmp(&b.name)).then_with(|| a.id.cmp(&b.id))
        });

        PagedList::paginate(matches.into_iter().map(|(_, p)| p).collect(), page)
    }
}

impl DiscountService for InMemoryCatalog {
    fn get_all_discounts(&self, discount_type: Option<DiscountType>, show_hidden: bool) -> Vec<Discount> {
        let now = Utc::now();
        self.data()
            .discounts
            .iter()
            .filter(|d| discount_type.is_none_or(|t| d.discount_type == t))
            .filter(|d| show_hidden || d.is_active_at(now))
            .cloned()
            .collect()
    }
}

impl LocalizationService for InMemoryCatalog {
    fn get_resource(&self, key: &str) -> String {
        let data = self.data();
        let language = data.working_language_id.or_else(|| {
            data.languages
                .iter()
                .filter(|l| l.published)
                .min_by_key(|l| (l.display_order, l.id))
                .map(|l| l.id)
        });

        language
            .and_then(|lang| {
                data.locale_string_resources
                    .iter()
                    .find(|r| r.language_id == lang && r.name.eq_ignore_ascii_case(key))
            })
            .map(|r| r.value.clone())
            .unwrap_or_else(|| {
                tracing::debug!(key, "resource string not found");
                key.to_string()
            })
    }

    fn get_localized_value(
        &self,
        language_id: LanguageId,
        entity_id: u32,
        key_group: &str,
        key: &str,
    ) -> Option<String> {
        self.data()
            .localized_properties
            .iter()
            .find(|p| {
                p.language_id == language_id
                    && p.entity_id == entity_id
                    && p.locale_key_group == key_group
                    && p.locale_key == key
            })
            .map(|p| p.locale_value.clone())
            .filter(|v| !v.is_empty())
    }
}

impl LanguageService for InMemoryCatalog {
    fn get_all_languages(&self, show_hidden: bool) -> Vec<Language> {
        let mut languages: Vec<Language> = self
            .data()
            .languages
            .iter()
            .filter(|l| show_hidden || l.published)
            .cloned()
            .collect();
        languages.sort_by_key(|l| (l.display_order, l.id));
        languages
    }
}

impl UrlRecordService for InMemoryCatalog {
    fn get_active_slug(
        &self,
        entity_id: u32,
        entity_name: &str,
        language_id: Option<LanguageId>,
    ) -> Option<String> {
        self.data()
            .url_records
            .iter()
            .find(|u| {
                u.is_active
                    && u.entity_id == entity_id
                    && u.entity_name == entity_name
                    && u.language_id == language_id
            })
            .map(|u| u.slug.clone())
    }
}

impl StoreService for InMemoryCatalog {
    fn get_all_stores(&self) -> Vec<Store> {
        let mut stores = self.data().stores.clone();
        stores.sort_by_key(|s| (s.display_order, s.id));
        stores
    }
}

impl StoreMappingService for InMemoryCatalog {
    fn get_store_ids_with_access(&self, entity_name: &str, entity_id: u32) -> Vec<StoreId> {
        self.data()
            .store_mappings
            .iter()
            .filter(|m| m.entity_name == entity_name && m.entity_id == entity_id)
            .map(|m| m.store_id)
            .collect()
    }
}

impl CustomerService for InMemoryCatalog {
    fn get_all_customer_roles(&self, show_hidden: bool) -> Vec<CustomerRole> {
        let mut roles: Vec<CustomerRole> = self
            .data()
            .customer_roles
            .iter()
            .filter(|r| show_hidden || r.active)
            .cloned()
            .collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        roles
    }
}

impl AclService for InMemoryCatalog {
    fn get_customer_role_ids_with_access(&self, entity_name: &str, entity_id: u32) -> Vec<CustomerRoleId> {
        self.data()
            .acl_records
            .iter()
            .filter(|r| r.entity_name == entity_name && r.entity_id == entity_id)
            .map(|r| r.customer_role_id)
            .collect()
    }
}

impl ManufacturerService for InMemoryCatalog {
    fn get_all_manufacturers(&self, show_hidden: bool) -> Vec<Manufacturer> {
        let mut manufacturers: Vec<Manufacturer> = self
            .data()
            .manufacturers
            .iter()
            .filter(|m| !m.deleted && (show_hidden || m.published))
            .cloned()
            .collect();
        manufacturers.sort_by_key(|m| (m.display_order, m.id));
        manufacturers
    }
}

impl VendorService for InMemoryCatalog {
    fn get_all_vendors(&self, show_hidden: bool) -> Vec<Vendor> {
        let mut vendors: Vec<Vendor> = self
            .data()
            .vendors
            .iter()
            .filter(|v| !v.deleted && (show_hidden || v.active))
            .cloned()
            .collect();
        vendors.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        vendors
    }
}

impl CategoryTemplateService for InMemoryCatalog {
    fn get_all_category_templates(&self) -> Vec<CategoryTemplate> {
        let mut templates = self.data().category_templates.clone();
        templates.sort_by_key(|t| (t.display_order, t.id));
        templates
    }
}
