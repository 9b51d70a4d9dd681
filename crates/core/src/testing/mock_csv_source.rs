//! Mock CSV source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, CsvSource};

/// Mock implementation of the CsvSource trait.
///
/// Provides controllable behavior for testing:
/// - Serve configured CSV bodies by path
/// - Count fetch attempts for cache assertions
/// - Simulate failures and slow responses
///
/// Unknown paths fail like a missing file, with a 404.
///
/// # Example
///
/// ```rust,ignore
/// use moviehub_core::testing::{MockCsvSource, fixtures};
///
/// let source = MockCsvSource::new();
/// source.set_response("/rocky/rocky.csv", fixtures::ROCKY_CSV).await;
///
/// let text = source.fetch("/rocky/rocky.csv").await?;
/// assert_eq!(source.fetch_count().await, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCsvSource {
    /// CSV bodies keyed by requested path.
    responses: Arc<RwLock<HashMap<String, String>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
    /// Errors returned for every fetch of a path.
    path_errors: Arc<RwLock<HashMap<String, CatalogError>>>,
    /// Simulated latency before each response.
    delay: Arc<RwLock<Option<Duration>>>,
    /// Every path fetched, in order.
    requests: Arc<RwLock<Vec<String>>>,
}

impl MockCsvSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `path`.
    pub async fn set_response(&self, path: impl Into<String>, body: impl Into<String>) {
        self.responses.write().await.insert(path.into(), body.into());
    }

    /// Make the next fetch fail with `error`.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make every fetch of `path` fail with `error`.
    pub async fn set_path_error(&self, path: impl Into<String>, error: CatalogError) {
        self.path_errors.write().await.insert(path.into(), error);
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Number of fetch attempts, including failed ones.
    pub async fn fetch_count(&self) -> usize {
        self.requests.read().await.len()
    }

    pub async fn requested_paths(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }

    pub async fn clear(&self) {
        self.responses.write().await.clear();
        self.path_errors.write().await.clear();
        self.requests.write().await.clear();
        *self.next_error.write().await = None;
        *self.delay.write().await = None;
    }
}

#[async_trait]
impl CsvSource for MockCsvSource {
    async fn fetch(&self, path: &str) -> Result<String, CatalogError> {
        self.requests.write().await.push(path.to_string());

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        if let Some(error) = self.path_errors.read().await.get(path) {
            return Err(error.clone());
        }

        self.responses
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| CatalogError::Fetch {
                status: 404,
                url: path.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_configured_body() {
        let source = MockCsvSource::new();
        source.set_response("/a.csv", "Name\nA\n").await;

        assert_eq!(source.fetch("/a.csv").await.unwrap(), "Name\nA\n");
        assert_eq!(source.requested_paths().await, vec!["/a.csv".to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let source = MockCsvSource::new();
        let err = source.fetch("/missing.csv").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_next_error_is_consumed() {
        let source = MockCsvSource::new();
        source.set_response("/a.csv", "Name\n").await;
        source
            .set_next_error(CatalogError::Network("reset".to_string()))
            .await;

        assert!(source.fetch("/a.csv").await.is_err());
        assert!(source.fetch("/a.csv").await.is_ok());
        assert_eq!(source.fetch_count().await, 2);
    }

    #[tokio::test]
    async fn test_path_error_persists() {
        let source = MockCsvSource::new();
        source
            .set_path_error(
                "/a.csv",
                CatalogError::Fetch {
                    status: 503,
                    url: "/a.csv".to_string(),
                },
            )
            .await;

        assert_eq!(source.fetch("/a.csv").await.unwrap_err().status(), Some(503));
        assert_eq!(source.fetch("/a.csv").await.unwrap_err().status(), Some(503));

        source.clear().await;
        assert_eq!(source.fetch_count().await, 0);
    }
}
