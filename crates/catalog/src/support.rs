//! Capabilities an entity can opt into (ACL, store mapping, discounts).

use shopdesk_core::{DiscountId, Entity};

/// Entity whose visibility can be restricted to customer roles.
pub trait AclSupported: Entity {}

/// Entity whose visibility can be restricted to stores.
pub trait StoreMappingSupported: Entity {
    fn limited_to_stores(&self) -> bool;
}

/// Entity that discounts can be applied to.
pub trait DiscountSupported: Entity {
    fn applied_discount_ids(&self) -> &[DiscountId];
}
