//! Franchise catalogs loaded from static CSV resources.
//!
//! A catalog is fetched once per process through a [`CsvSource`], parsed into
//! [`CatalogRecord`]s with normalized release dates, and cached behind its
//! [`CatalogLoader`]. Failed loads either substitute the franchise's static
//! fallback rows or surface the error, depending on [`LoadFailurePolicy`].

mod date;
mod loader;
mod parse;
mod query;
mod source;
mod types;

pub use date::{expand_two_digit_year, parse_release_date, ReleaseDate};
pub use loader::CatalogLoader;
pub use parse::parse_catalog_csv;
pub use query::*;
pub use source::{CsvSource, HttpCsvSource};
pub use types::*;

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The resource responded with a non-2xx status.
    #[error("Failed to fetch {url}: HTTP {status}")]
    Fetch { status: u16, url: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured fetch timeout.
    #[error("Timed out fetching {url} after {after:?}")]
    Timeout { url: String, after: Duration },

    /// The CSV text is structurally malformed.
    #[error("Malformed CSV at line {line}: {message}")]
    Parse { line: u64, message: String },
}

impl CatalogError {
    /// True for every failure that happened before any text was parsed.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Network(_) | Self::Timeout { .. }
        )
    }

    /// HTTP status of a rejected fetch, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}
