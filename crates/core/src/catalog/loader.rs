//! Single-flight, cache-once catalog loading.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, error, info, warn};

use super::parse::parse_catalog_csv;
use super::query::{
    find_by_exact_name, find_by_normalized_title, partition_by_release_status, search_columns,
    summarize, CatalogSummary, ReleasePartition,
};
use super::source::CsvSource;
use super::types::{Catalog, CatalogConfig, CatalogRecord, CatalogSource, LoadFailurePolicy, RawRow};
use super::CatalogError;
use crate::metrics::{CATALOG_FETCH_DURATION, CATALOG_LOADS, CATALOG_RECORDS};

type LoadResult = Result<Arc<Catalog>, CatalogError>;
type LoadAttempt = Shared<BoxFuture<'static, LoadResult>>;

/// Loads one franchise catalog and keeps it for the life of the process.
///
/// Concurrent first calls to [`load`](Self::load) share a single fetch and
/// all receive its result, success or error. Once populated, the same
/// `Arc<Catalog>` is returned forever. When the policy is
/// [`LoadFailurePolicy::Propagate`] a failed load leaves the cache empty, so
/// a call made after the failure settled fetches again.
pub struct CatalogLoader {
    config: Arc<CatalogConfig>,
    source: Arc<dyn CsvSource>,
    cache: OnceCell<Arc<Catalog>>,
    in_flight: Mutex<Option<LoadAttempt>>,
}

impl CatalogLoader {
    pub fn new(config: CatalogConfig, source: Arc<dyn CsvSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
            cache: OnceCell::new(),
            in_flight: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The cached catalog, without triggering a load.
    pub fn cached(&self) -> Option<Arc<Catalog>> {
        self.cache.get().cloned()
    }

    /// Load the catalog, fetching it on first use.
    pub async fn load(&self) -> LoadResult {
        if let Some(catalog) = self.cache.get() {
            debug!("Serving cached catalog: hub={}", self.config.slug);
            return Ok(Arc::clone(catalog));
        }

        let attempt = {
            let mut in_flight = self.in_flight.lock().await;
            if let Some(catalog) = self.cache.get() {
                return Ok(Arc::clone(catalog));
            }
            match in_flight.as_ref() {
                Some(attempt) => attempt.clone(),
                None => {
                    let attempt = populate(Arc::clone(&self.config), Arc::clone(&self.source))
                        .boxed()
                        .shared();
                    *in_flight = Some(attempt.clone());
                    attempt
                }
            }
        };

        let result = attempt.clone().await;

        let mut in_flight = self.in_flight.lock().await;
        if let Ok(catalog) = &result {
            // Later waiters of the same attempt find it already set.
            let _ = self.cache.set(Arc::clone(catalog));
        }
        if in_flight.as_ref().is_some_and(|current| current.ptr_eq(&attempt)) {
            *in_flight = None;
        }

        result
    }

    // =========================================================================
    // Queries (served from the cache)
    // =========================================================================

    pub async fn partition(&self, now: NaiveDate) -> Result<ReleasePartition, CatalogError> {
        let catalog = self.load().await?;
        Ok(partition_by_release_status(catalog.records(), now))
    }

    /// Search over this franchise's configured search columns.
    pub async fn search(&self, term: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
        let catalog = self.load().await?;
        Ok(search_columns(
            catalog.records(),
            term,
            self.config.search_columns,
        ))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<CatalogRecord>, CatalogError> {
        let catalog = self.load().await?;
        Ok(find_by_exact_name(catalog.records(), name).cloned())
    }

    pub async fn find_by_title(&self, title: &str) -> Result<Option<CatalogRecord>, CatalogError> {
        let catalog = self.load().await?;
        Ok(find_by_normalized_title(catalog.records(), title).cloned())
    }

    pub async fn summary(&self, now: NaiveDate) -> Result<CatalogSummary, CatalogError> {
        let catalog = self.load().await?;
        Ok(summarize(catalog.records(), now))
    }
}

async fn populate(config: Arc<CatalogConfig>, source: Arc<dyn CsvSource>) -> LoadResult {
    let slug = config.slug.as_str();

    let timer = CATALOG_FETCH_DURATION.with_label_values(&[slug]).start_timer();
    let fetched = fetch_records(&config, source.as_ref()).await;
    timer.observe_duration();

    let catalog = match fetched {
        Ok(records) => {
            info!(
                "Loaded catalog: hub={}, records={}, path={}",
                slug,
                records.len(),
                config.resource_path()
            );
            CATALOG_LOADS.with_label_values(&[slug, "fetched"]).inc();
            Catalog::new(slug, CatalogSource::Fetched, records)
        }
        Err(e) => match config.on_load_failure {
            LoadFailurePolicy::Fallback => {
                warn!(
                    "Catalog load failed, serving fallback data: hub={}, rows={}, error={}",
                    slug,
                    config.fallback.len(),
                    e
                );
                CATALOG_LOADS.with_label_values(&[slug, "fallback"]).inc();
                let rows = config.fallback.iter().map(|row| row.to_raw_row());
                Catalog::new(slug, CatalogSource::Fallback, normalize(&config, rows))
            }
            LoadFailurePolicy::Propagate => {
                error!("Catalog load failed: hub={}, error={}", slug, e);
                CATALOG_LOADS.with_label_values(&[slug, "failed"]).inc();
                return Err(e);
            }
        },
    };

    CATALOG_RECORDS
        .with_label_values(&[slug])
        .set(catalog.len() as i64);

    Ok(Arc::new(catalog))
}

async fn fetch_records(
    config: &CatalogConfig,
    source: &dyn CsvSource,
) -> Result<Vec<CatalogRecord>, CatalogError> {
    let path = config.resource_path();
    let timeout = config.fetch_timeout;

    let text = tokio::time::timeout(timeout, source.fetch(&path))
        .await
        .map_err(|_| CatalogError::Timeout {
            url: path.clone(),
            after: timeout,
        })??;

    let rows = parse_catalog_csv(&text)?;
    Ok(normalize(config, rows))
}

fn normalize(config: &CatalogConfig, rows: impl IntoIterator<Item = RawRow>) -> Vec<CatalogRecord> {
    let mut dropped = 0usize;
    let records: Vec<CatalogRecord> = rows
        .into_iter()
        .map(CatalogRecord::from_row)
        .filter(|record| {
            let keep = !config.drop_empty_names || !record.name().is_empty();
            if !keep {
                dropped += 1;
            }
            keep
        })
        .collect();

    if dropped > 0 {
        debug!(
            "Dropped rows without a name: hub={}, dropped={}",
            config.slug, dropped
        );
    }
    records
}
