use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::{handlers, hubs, middleware::metrics_middleware};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let public_dir = state.config().assets.public_dir.clone();

    // API routes
    let api_routes = Router::new()
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Hubs
        .route("/hubs", get(hubs::list_hubs))
        .route("/hubs/{slug}/movies", get(hubs::list_movies))
        .route("/hubs/{slug}/movies/{name}", get(hubs::get_movie))
        .route("/hubs/{slug}/sections", get(hubs::get_sections))
        .route("/hubs/{slug}/summary", get(hubs::get_summary))
        .layer(middleware::from_fn(metrics_middleware))
        .with_state(state);

    let router = Router::new().nest("/api/v1", api_routes);

    // Posters, CSVs and the front end, when served from this process
    let router = match public_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
