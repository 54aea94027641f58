use shopdesk_catalog::{Discount, DiscountSupported};
use shopdesk_core::SelectListItem;

use crate::models::DiscountSupportedModel;

/// Fills discount selectors from an already fetched discount list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountSupportedModelFactory;

impl DiscountSupportedModelFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn prepare_model_discounts<M, E>(
        &self,
        model: &mut M,
        entity: Option<&E>,
        available_discounts: &[Discount],
        ignore_applied_discounts: bool,
    ) where
        M: DiscountSupportedModel,
        E: DiscountSupported,
    {
        let selection = model.discount_selection_mut();

        if let Some(entity) = entity.filter(|_| !ignore_applied_discounts) {
            selection.selected_discount_ids = entity.applied_discount_ids().to_vec();
        }

        let selected = &selection.selected_discount_ids;
        selection.available_discounts = available_discounts
            .iter()
            .map(|d| SelectListItem::new(d.name.clone(), d.id).selected(selected.contains(&d.id)))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryModel;
    use shopdesk_catalog::{Category, DiscountType};
    use shopdesk_core::{CategoryId, CategoryTemplateId, DiscountId};

    fn discounts() -> Vec<Discount> {
        vec![
            Discount::new(DiscountId::new(1), "Spring sale", DiscountType::AssignedToCategories),
            Discount::new(DiscountId::new(2), "Clearance", DiscountType::AssignedToCategories),
        ]
    }

    #[test]
    fn applied_discounts_are_selected() {
        let mut category = Category::new(CategoryId::new(1), "Books", CategoryTemplateId::new(1));
        category.applied_discount_ids = vec![DiscountId::new(2)];
        let mut model = CategoryModel::default();

        DiscountSupportedModelFactory::new().prepare_model_discounts(&mut model, Some(&category), &discounts(), false);

        assert_eq!(model.discounts.selected_discount_ids, vec![DiscountId::new(2)]);
        let flags: Vec<bool> = model.discounts.available_discounts.iter().map(|i| i.selected).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn posted_selection_survives_when_ignoring_the_entity() {
        let mut category = Category::new(CategoryId::new(1), "Books", CategoryTemplateId::new(1));
        category.applied_discount_ids = vec![DiscountId::new(2)];
        let mut model = CategoryModel::default();
        model.discounts.selected_discount_ids = vec![DiscountId::new(1)];

        DiscountSupportedModelFactory::new().prepare_model_discounts(&mut model, Some(&category), &discounts(), true);

        assert_eq!(model.discounts.selected_discount_ids, vec![DiscountId::new(1)]);
        assert!(model.discounts.available_discounts[0].selected);
        assert!(!model.discounts.available_discounts[1].selected);
    }
}
