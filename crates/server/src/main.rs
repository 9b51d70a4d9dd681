use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviehub_core::{load_config, validate_config, CsvSource, HttpCsvSource, HubRegistry};
use moviehub_server::{api::create_router, state::AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("MOVIEHUB_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Asset root: {}", config.assets.asset_root);
    match &config.assets.public_dir {
        Some(dir) => info!("Serving static files from {:?}", dir),
        None => info!("Static file serving disabled"),
    }

    // CSV fetching goes through the asset root
    let source: Arc<dyn CsvSource> = Arc::new(
        HttpCsvSource::new(
            config.assets.asset_root.clone(),
            config.assets.fetch_timeout(),
        )
        .context("Failed to create CSV source")?,
    );

    let hubs = HubRegistry::from_config(&config, source);
    info!("Registered {} hubs", hubs.hubs().len());

    let state = Arc::new(AppState::new(config.clone(), hubs));

    // Warm catalogs in the background; requests also load on demand
    let warm_state = Arc::clone(&state);
    tokio::spawn(async move {
        let failures = warm_state.hubs().warm_all().await;
        if !failures.is_empty() {
            warn!(
                "{} hub(s) unavailable at startup, will retry on request",
                failures.len()
            );
        }
    });

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
