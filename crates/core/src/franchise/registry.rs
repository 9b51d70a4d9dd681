//! The set of live hubs, one cached catalog loader per franchise.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use super::Franchise;
use crate::catalog::{CatalogConfig, CatalogError, CatalogLoader, CsvSource};
use crate::config::Config;

/// A franchise and its catalog loader.
pub struct Hub {
    franchise: Franchise,
    loader: CatalogLoader,
}

impl Hub {
    pub fn new(franchise: Franchise, config: CatalogConfig, source: Arc<dyn CsvSource>) -> Self {
        Self {
            franchise,
            loader: CatalogLoader::new(config, source),
        }
    }

    pub fn franchise(&self) -> Franchise {
        self.franchise
    }

    pub fn slug(&self) -> &'static str {
        self.franchise.slug()
    }

    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    pub fn config(&self) -> &CatalogConfig {
        self.loader.config()
    }
}

/// All hubs, in [`Franchise::ALL`] order.
pub struct HubRegistry {
    hubs: Vec<Hub>,
}

impl HubRegistry {
    /// Hubs with their built-in settings.
    pub fn new(source: Arc<dyn CsvSource>) -> Self {
        Self::from_config(&Config::default(), source)
    }

    /// Hubs with the configured fetch timeout and per-hub overrides applied.
    pub fn from_config(config: &Config, source: Arc<dyn CsvSource>) -> Self {
        let timeout = config.assets.fetch_timeout();
        let hubs = Franchise::ALL
            .into_iter()
            .map(|franchise| {
                let mut catalog = franchise.catalog_config().with_fetch_timeout(timeout);
                if let Some(hub_override) = config.hubs.get(franchise.slug()) {
                    catalog = hub_override.apply(catalog);
                }
                Hub::new(franchise, catalog, Arc::clone(&source))
            })
            .collect();

        Self { hubs }
    }

    pub fn get(&self, slug: &str) -> Option<&Hub> {
        self.hubs.iter().find(|hub| hub.slug() == slug)
    }

    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    /// Load every hub concurrently, returning the failures.
    ///
    /// Only hubs with a propagating failure policy can fail here.
    pub async fn warm_all(&self) -> Vec<(Franchise, CatalogError)> {
        let results = join_all(
            self.hubs
                .iter()
                .map(|hub| async move { (hub.franchise, hub.loader.load().await) }),
        )
        .await;

        let mut failures = Vec::new();
        for (franchise, result) in results {
            match result {
                Ok(catalog) => info!(
                    hub = franchise.slug(),
                    records = catalog.len(),
                    source = ?catalog.source(),
                    "Hub warmed"
                ),
                Err(e) => {
                    warn!(hub = franchise.slug(), error = %e, "Hub failed to warm");
                    failures.push((franchise, e));
                }
            }
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, LoadFailurePolicy};
    use crate::config::HubOverride;
    use crate::testing::{fixtures, MockCsvSource};
    use std::time::Duration;

    #[test]
    fn test_registry_has_every_franchise() {
        let registry = HubRegistry::new(Arc::new(MockCsvSource::new()));
        assert_eq!(registry.hubs().len(), Franchise::ALL.len());
        assert_eq!(
            registry.get("star-wars").unwrap().franchise(),
            Franchise::StarWars
        );
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_from_config_applies_timeout_and_overrides() {
        let mut config = Config::default();
        config.assets.fetch_timeout_secs = 12;
        config.hubs.insert(
            "rocky".to_string(),
            HubOverride {
                base_path: Some("/boxing".to_string()),
                ..Default::default()
            },
        );

        let registry = HubRegistry::from_config(&config, Arc::new(MockCsvSource::new()));
        let rocky = registry.get("rocky").unwrap().config();
        assert_eq!(rocky.resource_path(), "/boxing/rocky.csv");
        assert_eq!(rocky.fetch_timeout, Duration::from_secs(12));

        let pixar = registry.get("pixar").unwrap().config();
        assert_eq!(pixar.resource_path(), "/pixar/pixar.csv");
    }

    #[tokio::test]
    async fn test_hubs_share_one_source_but_cache_separately() {
        let source = Arc::new(MockCsvSource::new());
        source
            .set_response("/rocky/rocky.csv", fixtures::ROCKY_CSV)
            .await;

        let registry = HubRegistry::new(Arc::clone(&source) as Arc<dyn CsvSource>);
        let rocky = registry.get("rocky").unwrap().loader().load().await.unwrap();
        let pixar = registry.get("pixar").unwrap().loader().load().await.unwrap();

        assert_eq!(rocky.source(), CatalogSource::Fetched);
        assert_eq!(pixar.source(), CatalogSource::Fallback);
        assert_eq!(source.fetch_count().await, 2);
    }

    #[tokio::test]
    async fn test_warm_all_reports_propagating_failures() {
        let source = Arc::new(MockCsvSource::new());
        source
            .set_response("/harry-potter/harrypotter.csv", fixtures::HARRY_POTTER_CSV)
            .await;

        let registry = HubRegistry::new(source);
        let failures = registry.warm_all().await;

        // Everything but The Boys has either a CSV or a fallback.
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Franchise::TheBoys);
        assert_eq!(
            registry.get("the-boys").unwrap().config().on_load_failure,
            LoadFailurePolicy::Propagate
        );
        assert!(registry.get("harry-potter").unwrap().loader().cached().is_some());
    }
}
