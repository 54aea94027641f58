use std::sync::Arc;

use shopdesk_catalog::LanguageService;
use shopdesk_core::LanguageId;

use crate::models::LocaleModel;
use crate::services::AdminServices;

/// Builds one locale model per language.
#[derive(Clone)]
pub struct LocalizedModelFactory {
    languages: Arc<dyn LanguageService>,
}

impl LocalizedModelFactory {
    pub fn new(services: &AdminServices) -> Self {
        Self {
            languages: services.languages.clone(),
        }
    }

    /// Every language (unpublished included) gets an entry; `configure` fills
    /// in the translated values when present.
    pub fn prepare_localized_models<T, F>(&self, configure: Option<F>) -> Vec<T>
    where
        T: LocaleModel,
        F: Fn(&mut T, LanguageId),
    {
        self.languages
            .get_all_languages(true)
            .into_iter()
            .map(|language| {
                let mut locale = T::default();
                locale.set_language_id(language.id);
                if let Some(configure) = &configure {
                    configure(&mut locale, language.id);
                }
                locale
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryLocalizedModel;
    use shopdesk_catalog::Language;
    use shopdesk_infra::{CatalogSnapshot, InMemoryCatalog};

    fn language(id: u32, published: bool) -> Language {
        Language {
            id: LanguageId::new(id),
            name: format!("lang-{id}"),
            language_culture: "en-US".to_string(),
            published,
            display_order: id as i32,
        }
    }

    fn factory() -> LocalizedModelFactory {
        let catalog = InMemoryCatalog::from_snapshot(CatalogSnapshot {
            languages: vec![language(1, true), language(2, false)],
            ..CatalogSnapshot::default()
        });
        LocalizedModelFactory::new(&AdminServices::from_backend(Arc::new(catalog)))
    }

    #[test]
    fn one_locale_per_language_including_unpublished() {
        let locales: Vec<CategoryLocalizedModel> =
            factory().prepare_localized_models(None::<fn(&mut CategoryLocalizedModel, LanguageId)>);

        let ids: Vec<_> = locales.iter().map(|l| l.language_id).collect();
        assert_eq!(ids, vec![Some(LanguageId::new(1)), Some(LanguageId::new(2))]);
        assert!(locales.iter().all(|l| l.name.is_empty()));
    }

    #[test]
    fn configure_runs_for_each_language() {
        let locales: Vec<CategoryLocalizedModel> = factory().prepare_localized_models(Some(
            |locale: &mut CategoryLocalizedModel, id: LanguageId| locale.name = format!("name-{id}"),
        ));

        let names: Vec<_> = locales.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["name-1", "name-2"]);
    }
}
