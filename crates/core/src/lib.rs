pub mod catalog;
pub mod config;
pub mod franchise;
pub mod metrics;
pub mod presentation;
pub mod testing;

pub use catalog::{
    parse_catalog_csv, parse_release_date, Catalog, CatalogConfig, CatalogError, CatalogLoader,
    CatalogRecord, CatalogSource, CsvSource, HttpCsvSource, LoadFailurePolicy, ReleaseDate,
    ReleasePartition,
};
pub use config::{
    load_config, load_config_from_str, validate_config, AssetsConfig, Config, ConfigError,
    HubOverride, ServerConfig,
};
pub use franchise::{Franchise, Hub, HubRegistry};
