//! Catalog data model.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::date::{parse_release_date, ReleaseDate};
use crate::presentation::{build_image_path, title_to_image_filename, FilenameRule};

/// Column names observed across franchise CSV files.
pub mod columns {
    pub const NAME: &str = "Name";
    pub const RELEASE_DATE: &str = "Release Date";
    pub const CRITIC_RATING: &str = "Critic Rating";
    pub const AUDIENCE_RATING: &str = "Audience Rating";
    pub const MY_RATING: &str = "My Rating";
    pub const TRAILER: &str = "Trailer";

    /// Rating columns in display order.
    pub const RATINGS: [&str; 3] = [CRITIC_RATING, AUDIENCE_RATING, MY_RATING];
}

/// One CSV data line keyed by trimmed header name.
pub type RawRow = BTreeMap<String, String>;

/// What to do when a catalog cannot be fetched or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFailurePolicy {
    /// Serve the static fallback rows as if they had been fetched.
    #[default]
    Fallback,
    /// Return the error to the caller and leave the cache empty.
    Propagate,
}

/// A hard-coded catalog row used when live data is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRow {
    pub name: &'static str,
    pub release_date: &'static str,
    pub critic_rating: &'static str,
    pub audience_rating: &'static str,
    pub my_rating: &'static str,
    pub trailer: &'static str,
}

impl FallbackRow {
    pub fn to_raw_row(&self) -> RawRow {
        [
            (columns::NAME, self.name),
            (columns::RELEASE_DATE, self.release_date),
            (columns::CRITIC_RATING, self.critic_rating),
            (columns::AUDIENCE_RATING, self.audience_rating),
            (columns::MY_RATING, self.my_rating),
            (columns::TRAILER, self.trailer),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }
}

/// Default time allowed for a single catalog fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Static description of one franchise catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Franchise slug, used for logging and metric labels.
    pub slug: String,
    /// Resource base path, e.g. `/rocky`.
    pub base_path: String,
    /// CSV resource name under `base_path`.
    pub csv_file_name: String,
    /// Poster directory. Relative values live under `base_path`,
    /// values starting with `/` are rooted at the asset root.
    pub posters_dir: String,
    /// How poster filenames are derived from titles.
    pub filename_rule: FilenameRule,
    /// Rows served when the live catalog is unavailable.
    pub fallback: &'static [FallbackRow],
    pub on_load_failure: LoadFailurePolicy,
    /// Drop records whose `Name` is empty.
    pub drop_empty_names: bool,
    /// Columns matched by substring search.
    pub search_columns: &'static [&'static str],
    pub fetch_timeout: Duration,
}

impl CatalogConfig {
    pub fn new(
        slug: impl Into<String>,
        base_path: impl Into<String>,
        csv_file_name: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            base_path: base_path.into(),
            csv_file_name: csv_file_name.into(),
            posters_dir: "movieposters".to_string(),
            filename_rule: FilenameRule::STANDARD,
            fallback: &[],
            on_load_failure: LoadFailurePolicy::Fallback,
            drop_empty_names: true,
            search_columns: &[columns::NAME],
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_posters_dir(mut self, posters_dir: impl Into<String>) -> Self {
        self.posters_dir = posters_dir.into();
        self
    }

    pub fn with_filename_rule(mut self, rule: FilenameRule) -> Self {
        self.filename_rule = rule;
        self
    }

    pub fn with_fallback(mut self, rows: &'static [FallbackRow]) -> Self {
        self.fallback = rows;
        self
    }

    pub fn with_failure_policy(mut self, policy: LoadFailurePolicy) -> Self {
        self.on_load_failure = policy;
        self
    }

    pub fn with_search_columns(mut self, columns: &'static [&'static str]) -> Self {
        self.search_columns = columns;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// `{base_path}/{csv_file_name}`
    pub fn resource_path(&self) -> String {
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            self.csv_file_name.trim_start_matches('/')
        )
    }

    /// Directory that poster images are served from.
    pub fn poster_base(&self) -> String {
        if self.posters_dir.starts_with('/') {
            self.posters_dir.clone()
        } else {
            format!(
                "{}/{}",
                self.base_path.trim_end_matches('/'),
                self.posters_dir
            )
        }
    }

    /// Poster image path for a title.
    pub fn poster_path(&self, name: &str) -> String {
        let filename = title_to_image_filename(name, &self.filename_rule);
        build_image_path(&self.poster_base(), &filename)
    }
}

/// One title's normalized data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRecord {
    #[serde(flatten)]
    fields: RawRow,
    #[serde(rename = "parsedReleaseDate")]
    release_date: ReleaseDate,
}

impl CatalogRecord {
    /// Build a record from a parsed row, normalizing the release date.
    pub fn from_row(fields: RawRow) -> Self {
        let release_date =
            parse_release_date(fields.get(columns::RELEASE_DATE).map(String::as_str));
        Self {
            fields,
            release_date,
        }
    }

    /// Value of a column, empty when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.get(columns::NAME)
    }

    /// The release date exactly as it appeared in the CSV.
    pub fn release_date_raw(&self) -> &str {
        self.get(columns::RELEASE_DATE)
    }

    pub fn release_date(&self) -> ReleaseDate {
        self.release_date
    }

    pub fn trailer(&self) -> &str {
        self.get(columns::TRAILER)
    }

    pub fn fields(&self) -> &RawRow {
        &self.fields
    }
}

/// Where a catalog's records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Fetched,
    Fallback,
}

/// The loaded, immutable record set of one franchise.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    slug: String,
    source: CatalogSource,
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn new(slug: impl Into<String>, source: CatalogSource, records: Vec<CatalogRecord>) -> Self {
        Self {
            slug: slug.into(),
            source,
            records,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
