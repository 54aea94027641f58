use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopdesk_core::DiscountId;

/// What a discount is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    AssignedToOrderTotal = 1,
    AssignedToSkus = 2,
    AssignedToCategories = 5,
    AssignedToManufacturers = 6,
    AssignedToShipping = 10,
    AssignedToOrderSubTotal = 20,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub id: DiscountId,
    pub name: String,
    pub discount_type: DiscountType,
    #[serde(default)]
    pub start_date_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date_utc: Option<DateTime<Utc>>,
}

impl Discount {
    pub fn new(id: DiscountId, name: impl Into<String>, discount_type: DiscountType) -> Self {
        Self {
            id,
            name: name.into(),
            discount_type,
            start_date_utc: None,
            end_date_utc: None,
        }
    }

    /// Whether the discount's validity window contains `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.start_date_utc.is_none_or(|start| start <= now)
            && self.end_date_utc.is_none_or(|end| end >= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn open_ended_discount_is_always_active() {
        let d = Discount::new(DiscountId::new(1), "10% off", DiscountType::AssignedToCategories);
        assert!(d.is_active_at(Utc::now()));
    }

    #[test]
    fn expired_discount_is_inactive() {
        let now = Utc::now();
        let mut d = Discount::new(DiscountId::new(1), "old", DiscountType::AssignedToCategories);
        d.end_date_utc = Some(now - Duration::days(1));
        assert!(!d.is_active_at(now));
    }
}
