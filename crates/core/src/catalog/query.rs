//! Read-only queries over loaded records.
//!
//! All functions here are pure: they never fetch and never fail.

use chrono::NaiveDate;
use serde::Serialize;

use super::types::{columns, CatalogRecord};

/// Records split by release status relative to a reference day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReleasePartition {
    /// Released after the reference day, soonest first.
    pub upcoming: Vec<CatalogRecord>,
    /// Released on or before the reference day (or undated), newest first.
    pub released: Vec<CatalogRecord>,
}

impl ReleasePartition {
    pub fn total(&self) -> usize {
        self.upcoming.len() + self.released.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    Descending,
}

/// Headline numbers for a hub's home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub upcoming: usize,
    pub released: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_upcoming: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_released: Option<String>,
}

/// Split records into upcoming and released.
///
/// A record is upcoming only when its date is strictly after `now`; undated
/// records are always released. Both halves keep catalog order for ties.
pub fn partition_by_release_status(records: &[CatalogRecord], now: NaiveDate) -> ReleasePartition {
    let (upcoming, released): (Vec<_>, Vec<_>) = records
        .iter()
        .cloned()
        .partition(|record| record.release_date().is_after(now));

    ReleasePartition {
        upcoming: sorted(upcoming, SortOrder::Ascending),
        released: sorted(released, SortOrder::Descending),
    }
}

/// Stable sort by parsed release date.
pub fn sort_by_release_date(records: &[CatalogRecord], order: SortOrder) -> Vec<CatalogRecord> {
    sorted(records.to_vec(), order)
}

fn sorted(mut records: Vec<CatalogRecord>, order: SortOrder) -> Vec<CatalogRecord> {
    match order {
        SortOrder::Ascending => records.sort_by_key(|r| r.release_date()),
        SortOrder::Descending => records.sort_by(|a, b| b.release_date().cmp(&a.release_date())),
    }
    records
}

/// Case-insensitive substring search over `Name`.
pub fn search(records: &[CatalogRecord], term: &str) -> Vec<CatalogRecord> {
    search_columns(records, term, &[columns::NAME])
}

/// Case-insensitive substring search over the given columns.
///
/// An empty term matches every record. Whitespace in the term is significant.
pub fn search_columns(records: &[CatalogRecord], term: &str, columns: &[&str]) -> Vec<CatalogRecord> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            columns
                .iter()
                .any(|column| record.get(column).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Exact `Name` match. Percent-encoded input is decoded first.
pub fn find_by_exact_name<'a>(records: &'a [CatalogRecord], name: &str) -> Option<&'a CatalogRecord> {
    let decoded = urlencoding::decode(name)
        .map(|d| d.into_owned())
        .unwrap_or_else(|_| name.to_string());

    records
        .iter()
        .find(|record| record.name() == decoded)
        .or_else(|| records.iter().find(|record| record.name() == name))
}

/// Lower-case ASCII alphanumerics only: `"Godzilla vs. Kong"` → `"godzillavskong"`.
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Match on [`normalize_title`] of both sides.
pub fn find_by_normalized_title<'a>(
    records: &'a [CatalogRecord],
    title: &str,
) -> Option<&'a CatalogRecord> {
    let wanted = normalize_title(title);
    if wanted.is_empty() {
        return None;
    }
    records
        .iter()
        .find(|record| normalize_title(record.name()) == wanted)
}

/// Counts plus the nearest titles on either side of `now`.
pub fn summarize(records: &[CatalogRecord], now: NaiveDate) -> CatalogSummary {
    let partition = partition_by_release_status(records, now);
    CatalogSummary {
        total: partition.total(),
        upcoming: partition.upcoming.len(),
        released: partition.released.len(),
        next_upcoming: partition.upcoming.first().map(|r| r.name().to_string()),
        latest_released: partition.released.first().map(|r| r.name().to_string()),
    }
}
