//! Process configuration read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use shopdesk_admin::{AdminAreaSettings, CatalogSettings};
use shopdesk_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "SHOPDESK_BIND_ADDR";
pub const SEED_PATH_VAR: &str = "SHOPDESK_SEED_PATH";
pub const LOG_FORMAT_VAR: &str = "SHOPDESK_LOG_FORMAT";
pub const CATEGORY_PAGE_SIZE_VAR: &str = "SHOPDESK_DEFAULT_CATEGORY_PAGE_SIZE";
pub const CATEGORY_PAGE_SIZE_OPTIONS_VAR: &str = "SHOPDESK_DEFAULT_CATEGORY_PAGE_SIZE_OPTIONS";
pub const GRID_PAGE_SIZE_VAR: &str = "SHOPDESK_DEFAULT_GRID_PAGE_SIZE";
pub const GRID_PAGE_SIZES_VAR: &str = "SHOPDESK_GRID_PAGE_SIZES";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog snapshot loaded at startup.
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
    pub catalog: CatalogSettings,
    pub admin_area: AdminAreaSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unparsable values are
    /// logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_defaults = CatalogSettings::default();
        let admin_defaults = AdminAreaSettings::default();
        let default_bind: SocketAddr = DEFAULT_BIND_ADDR
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080)));

        Self {
            bind_addr: parsed(&lookup, BIND_ADDR_VAR).unwrap_or(default_bind),
            seed_path: non_empty(&lookup, SEED_PATH_VAR).map(PathBuf::from),
            log_format: non_empty(&lookup, LOG_FORMAT_VAR)
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
            catalog: CatalogSettings {
                default_category_page_size: parsed(&lookup, CATEGORY_PAGE_SIZE_VAR)
                    .unwrap_or(catalog_defaults.default_category_page_size),
                default_category_page_size_options: non_empty(&lookup, CATEGORY_PAGE_SIZE_OPTIONS_VAR)
                    .unwrap_or(catalog_defaults.default_category_page_size_options),
            },
            admin_area: AdminAreaSettings {
                default_grid_page_size: parsed(&lookup, GRID_PAGE_SIZE_VAR)
                    .unwrap_or(admin_defaults.default_grid_page_size),
                grid_page_sizes: non_empty(&lookup, GRID_PAGE_SIZES_VAR)
                    .unwrap_or(admin_defaults.grid_page_sizes),
            },
        }
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = non_empty(lookup, key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting; using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]);
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.seed_path, None);
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.catalog, CatalogSettings::default());
        assert_eq!(cfg.admin_area, AdminAreaSettings::default());
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let cfg = config(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (SEED_PATH_VAR, "/tmp/catalog.json"),
            (LOG_FORMAT_VAR, "pretty"),
            (CATEGORY_PAGE_SIZE_VAR, "12"),
            (CATEGORY_PAGE_SIZE_OPTIONS_VAR, "12, 24"),
            (GRID_PAGE_SIZE_VAR, "50"),
            (GRID_PAGE_SIZES_VAR, "25, 50"),
        ]);
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(cfg.seed_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert_eq!(cfg.catalog.default_category_page_size, 12);
        assert_eq!(cfg.catalog.default_category_page_size_options, "12, 24");
        assert_eq!(cfg.admin_area.default_grid_page_size, 50);
        assert_eq!(cfg.admin_area.grid_page_sizes, "25, 50");
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let cfg = config(&[(BIND_ADDR_VAR, "not an address"), (CATEGORY_PAGE_SIZE_VAR, "-3"), (SEED_PATH_VAR, "  ")]);
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.catalog.default_category_page_size, 6);
        assert_eq!(cfg.seed_path, None);
    }
}
