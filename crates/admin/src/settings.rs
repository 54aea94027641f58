//! Settings consumed by the factories.

use serde::{Deserialize, Serialize};

/// Catalog defaults applied to new categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub default_category_page_size: u32,
    /// Comma separated, e.g. `"6, 3, 9"`.
    pub default_category_page_size_options: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            default_category_page_size: 6,
            default_category_page_size_options: "6, 3, 9".to_string(),
        }
    }
}

/// Admin grid defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminAreaSettings {
    pub default_grid_page_size: u32,
    /// Comma separated page sizes offered by grids.
    pub grid_page_sizes: String,
}

impl Default for AdminAreaSettings {
    fn default() -> Self {
        Self {
            default_grid_page_size: 15,
            grid_page_sizes: "10, 15, 20, 50, 100".to_string(),
        }
    }
}
