//! Franchise hub API handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use moviehub_core::{
    catalog::{columns, CatalogSummary},
    presentation::{rating_to_star_buckets, trailer_embed_url, Badge, StarBuckets},
    Catalog, CatalogError, CatalogRecord, CatalogSource, Hub,
};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MovieQueryParams {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HubInfo {
    pub slug: &'static str,
    pub name: &'static str,
    pub posters_dir: String,
    /// Whether the catalog is already cached.
    pub loaded: bool,
}

/// A record plus its resolved poster.
#[derive(Debug, Serialize)]
pub struct MovieCard {
    #[serde(flatten)]
    pub record: CatalogRecord,
    pub poster_path: String,
}

#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub hub: &'static str,
    pub source: CatalogSource,
    pub movies: Vec<MovieCard>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub hub: &'static str,
    pub source: CatalogSource,
    pub upcoming: Vec<MovieCard>,
    pub released: Vec<MovieCard>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub hub: &'static str,
    pub name: &'static str,
    pub source: CatalogSource,
    #[serde(flatten)]
    pub summary: CatalogSummary,
}

#[derive(Debug, Serialize)]
pub struct RatingView {
    pub raw: String,
    /// Absent when the rating is `N/A` or unreadable.
    pub stars: Option<StarBuckets>,
}

#[derive(Debug, Serialize)]
pub struct MovieDetailResponse {
    pub hub: &'static str,
    #[serde(flatten)]
    pub card: MovieCard,
    pub upcoming: bool,
    pub ratings: BTreeMap<&'static str, RatingView>,
    pub trailer_embed_url: Option<String>,
    pub badge: Option<Badge>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ============================================================================
// Helpers
// ============================================================================

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn find_hub<'a>(state: &'a AppState, slug: &str) -> Result<&'a Hub, ApiError> {
    state
        .hub(slug)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, format!("unknown hub: {slug}")))
}

async fn load(hub: &Hub) -> Result<Arc<Catalog>, ApiError> {
    hub.loader().load().await.map_err(|e| load_failed(hub, e))
}

fn load_failed(hub: &Hub, e: CatalogError) -> ApiError {
    warn!(hub = hub.slug(), error = %e, "Catalog unavailable");
    error(
        StatusCode::BAD_GATEWAY,
        format!("failed to load {} catalog: {}", hub.slug(), e),
    )
}

fn card(hub: &Hub, record: CatalogRecord) -> MovieCard {
    MovieCard {
        poster_path: hub.config().poster_path(record.name()),
        record,
    }
}

fn cards(hub: &Hub, records: Vec<CatalogRecord>) -> Vec<MovieCard> {
    records.into_iter().map(|r| card(hub, r)).collect()
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/hubs
pub async fn list_hubs(State(state): State<Arc<AppState>>) -> Json<Vec<HubInfo>> {
    let hubs = state
        .hubs()
        .hubs()
        .iter()
        .map(|hub| HubInfo {
            slug: hub.slug(),
            name: hub.franchise().display_name(),
            posters_dir: hub.config().poster_base(),
            loaded: hub.loader().cached().is_some(),
        })
        .collect();
    Json(hubs)
}

/// GET /api/v1/hubs/{slug}/movies
///
/// All titles in catalog order, filtered by `search` when given.
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<MovieQueryParams>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let hub = find_hub(&state, &slug)?;
    let catalog = load(hub).await?;

    let records = match params.search.as_deref() {
        Some(term) => hub.loader().search(term).await.map_err(|e| load_failed(hub, e))?,
        None => catalog.records().to_vec(),
    };

    let movies = cards(hub, records);
    Ok(Json(MovieListResponse {
        hub: hub.slug(),
        source: catalog.source(),
        total: movies.len(),
        movies,
    }))
}

/// GET /api/v1/hubs/{slug}/sections
pub async fn get_sections(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<SectionsResponse>, ApiError> {
    let hub = find_hub(&state, &slug)?;
    let catalog = load(hub).await?;
    let partition = hub
        .loader()
        .partition(today())
        .await
        .map_err(|e| load_failed(hub, e))?;

    Ok(Json(SectionsResponse {
        hub: hub.slug(),
        source: catalog.source(),
        upcoming: cards(hub, partition.upcoming),
        released: cards(hub, partition.released),
    }))
}

/// GET /api/v1/hubs/{slug}/summary
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let hub = find_hub(&state, &slug)?;
    let catalog = load(hub).await?;
    let summary = hub
        .loader()
        .summary(today())
        .await
        .map_err(|e| load_failed(hub, e))?;

    Ok(Json(SummaryResponse {
        hub: hub.slug(),
        name: hub.franchise().display_name(),
        source: catalog.source(),
        summary,
    }))
}

/// GET /api/v1/hubs/{slug}/movies/{name}
///
/// Matches the exact name first, then a punctuation-insensitive title such
/// as `rocky-balboa`.
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path((slug, name)): Path<(String, String)>,
) -> Result<Json<MovieDetailResponse>, ApiError> {
    let hub = find_hub(&state, &slug)?;
    let loader = hub.loader();

    let record = match loader.find_by_name(&name).await.map_err(|e| load_failed(hub, e))? {
        Some(record) => Some(record),
        None => loader.find_by_title(&name).await.map_err(|e| load_failed(hub, e))?,
    };
    let record = record.ok_or_else(|| {
        error(
            StatusCode::NOT_FOUND,
            format!("no title {name:?} in {}", hub.slug()),
        )
    })?;

    let ratings = columns::RATINGS
        .iter()
        .map(|&column| {
            let raw = record.get(column);
            (
                column,
                RatingView {
                    raw: raw.to_string(),
                    stars: rating_to_star_buckets(raw),
                },
            )
        })
        .collect();

    Ok(Json(MovieDetailResponse {
        hub: hub.slug(),
        upcoming: record.release_date().is_after(today()),
        trailer_embed_url: trailer_embed_url(record.trailer()),
        badge: hub.franchise().badge(&record),
        ratings,
        card: card(hub, record),
    }))
}
