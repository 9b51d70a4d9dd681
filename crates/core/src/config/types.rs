use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{CatalogConfig, LoadFailurePolicy};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Per-hub overrides keyed by franchise slug.
    #[serde(default)]
    pub hubs: HashMap<String, HubOverride>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Where franchise CSVs and posters live.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Prefix for every hub's base path when fetching its CSV.
    #[serde(default = "default_asset_root")]
    pub asset_root: String,
    /// Served as static files at `/` when set.
    #[serde(default)]
    pub public_dir: Option<PathBuf>,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl AssetsConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            asset_root: default_asset_root(),
            public_dir: None,
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_asset_root() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    5
}

/// Replaces fields of a franchise's built-in catalog settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HubOverride {
    #[serde(default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub csv_file_name: Option<String>,
    #[serde(default)]
    pub posters_dir: Option<String>,
    #[serde(default)]
    pub on_load_failure: Option<LoadFailurePolicy>,
}

impl HubOverride {
    pub fn apply(&self, mut config: CatalogConfig) -> CatalogConfig {
        if let Some(base_path) = &self.base_path {
            config.base_path = base_path.clone();
        }
        if let Some(csv_file_name) = &self.csv_file_name {
            config.csv_file_name = csv_file_name.clone();
        }
        if let Some(posters_dir) = &self.posters_dir {
            config.posters_dir = posters_dir.clone();
        }
        if let Some(policy) = self.on_load_failure {
            config.on_load_failure = policy;
        }
        config
    }
}
