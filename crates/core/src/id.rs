//! Strongly-typed identifiers used across the catalog.
//!
//! Identifiers are positive integers. Raw value `0` is reserved by admin forms
//! to mean "none" / "any", so it never names a real record; use
//! [`CategoryId::from_raw`] (and friends) to turn a form value into an
//! optional id.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! int_id {
    ($(#[$meta:meta])* $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(u32);

        impl $t {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Map a form value to an id; `0` means "not set".
            pub fn from_raw(raw: u32) -> Option<Self> {
                (raw != 0).then_some(Self(raw))
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = u32::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Self::from_raw(raw)
                    .ok_or_else(|| DomainError::invalid_id(format!("{}: must be positive", $name)))
            }
        }
    };
}

int_id!(CategoryId, "CategoryId");
int_id!(ProductId, "ProductId");
int_id!(
    /// Identifier of a product-category mapping row.
    ProductCategoryId,
    "ProductCategoryId"
);
int_id!(CategoryTemplateId, "CategoryTemplateId");
int_id!(DiscountId, "DiscountId");
int_id!(StoreId, "StoreId");
int_id!(CustomerRoleId, "CustomerRoleId");
int_id!(LanguageId, "LanguageId");
int_id!(ManufacturerId, "ManufacturerId");
int_id!(VendorId, "VendorId");
int_id!(PictureId, "PictureId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_an_identifier() {
        assert_eq!(StoreId::from_raw(0), None);
        assert_eq!(StoreId::from_raw(4), Some(StoreId::new(4)));
        assert!("0".parse::<CategoryId>().is_err());
    }

    #[test]
    fn parse_reports_the_id_kind() {
        let err = "abc".parse::<CategoryId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("CategoryId")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!("12".parse::<CategoryId>().unwrap().get(), 12);
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
