//! Where catalog CSV text comes from.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::CatalogError;

/// Fetches the text of a catalog resource.
///
/// Implemented over HTTP by [`HttpCsvSource`] and by
/// [`MockCsvSource`](crate::testing::MockCsvSource) in tests.
#[async_trait]
pub trait CsvSource: Send + Sync {
    /// Fetch the resource at `path` (`{basePath}/{csvFileName}`).
    async fn fetch(&self, path: &str) -> Result<String, CatalogError>;
}

/// Fetches catalog CSV files with HTTP GET relative to a public asset root.
pub struct HttpCsvSource {
    client: Client,
    asset_root: String,
    timeout: Duration,
}

impl HttpCsvSource {
    /// Create a source rooted at `asset_root` (e.g. `https://hubs.example.com`).
    pub fn new(asset_root: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(concat!("moviehub/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            client,
            asset_root: asset_root.into(),
            timeout,
        })
    }

    /// Absolute URL for a resource path. Absolute URLs pass through.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.asset_root.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl CsvSource for HttpCsvSource {
    async fn fetch(&self, path: &str) -> Result<String, CatalogError> {
        let url = self.resolve(path);

        debug!("Fetching catalog CSV: url='{}'", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.request_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Fetch {
                status: status.as_u16(),
                url,
            });
        }

        response.text().await.map_err(|e| self.request_error(&url, e))
    }
}

impl HttpCsvSource {
    fn request_error(&self, url: &str, e: reqwest::Error) -> CatalogError {
        if e.is_timeout() {
            CatalogError::Timeout {
                url: url.to_string(),
                after: self.timeout,
            }
        } else {
            CatalogError::Network(e.to_string())
        }
    }
}
