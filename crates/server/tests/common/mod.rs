//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock CSV source injected, so hubs can be exercised without an
//! asset server.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use moviehub_core::{testing::MockCsvSource, Config, CsvSource, HubRegistry};
use moviehub_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use moviehub_core::testing::fixtures;

/// Test fixture for E2E testing with a mock CSV source.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_rocky_sections() {
///     let fixture = TestFixture::new().await;
///     fixture.serve_csv("/rocky/rocky.csv", fixtures::ROCKY_CSV).await;
///
///     let response = fixture.get("/api/v1/hubs/rocky/sections").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock CSV source - configure catalog bodies and failures
    pub source: Arc<MockCsvSource>,
    /// Static files directory, kept alive for the fixture's lifetime
    pub public_dir: Option<TempDir>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Raw response, for non-JSON bodies
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestFixture {
    /// Create a new test fixture with default configuration.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// Create a test fixture with custom configuration.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let source = Arc::new(MockCsvSource::new());

        let mut config = test_config.config;
        config.server.host = std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST);

        let public_dir = if test_config.static_files.is_empty() {
            None
        } else {
            let dir = TempDir::new().expect("Failed to create temp dir");
            for (name, contents) in &test_config.static_files {
                let path = dir.path().join(name);
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).expect("Failed to create static dir");
                }
                std::fs::write(&path, contents).expect("Failed to write static file");
            }
            config.assets.public_dir = Some(dir.path().to_path_buf());
            Some(dir)
        };

        let hubs = HubRegistry::from_config(&config, Arc::clone(&source) as Arc<dyn CsvSource>);
        let state = Arc::new(AppState::new(config, hubs));
        let router = create_router(state);

        Self {
            router,
            source,
            public_dir,
        }
    }

    /// Serve a CSV body at `path`.
    pub async fn serve_csv(&self, path: &str, body: &str) {
        self.source.set_response(path, body).await;
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let raw = self.get_raw(path).await;

        let body: Value = if raw.body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&raw.body).unwrap_or(Value::Null)
        };

        TestResponse {
            status: raw.status,
            body,
        }
    }

    /// Send a GET request and keep the body as text.
    pub async fn get_raw(&self, path: &str) -> RawResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        RawResponse {
            status,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}

/// Configuration for test fixture.
#[derive(Debug, Clone, Default)]
pub struct TestConfig {
    /// Server configuration handed to the hubs and router
    pub config: Config,
    /// Files written under a temporary public directory, as (relative path, contents)
    pub static_files: Vec<(String, String)>,
}

impl TestConfig {
    /// Create config that serves the given files statically.
    pub fn with_static_files(files: &[(&str, &str)]) -> Self {
        Self {
            config: Config::default(),
            static_files: files
                .iter()
                .map(|(name, contents)| (name.to_string(), contents.to_string()))
                .collect(),
        }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
