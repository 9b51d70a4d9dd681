//! Testing utilities and a mock CSV source for integration tests.
//!
//! Lets hubs be exercised end to end without a real asset server.
//!
//! # Example
//!
//! ```rust,ignore
//! use moviehub_core::testing::{fixtures, MockCsvSource};
//!
//! let source = Arc::new(MockCsvSource::new());
//! source.set_response("/rocky/rocky.csv", fixtures::ROCKY_CSV).await;
//!
//! let registry = HubRegistry::new(source);
//! ```

mod mock_csv_source;

pub use mock_csv_source::MockCsvSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{columns, CatalogRecord, RawRow};

    /// A small Rocky catalog with one blank row and one unreleased title.
    pub const ROCKY_CSV: &str = "\
Name,Release Date,Critic Rating,Audience Rating,My Rating,Trailer
Rocky,11/21/1976,93%,4.5/5,5/5,https://www.youtube.com/watch?v=7RYpJAUMo2M
Rocky II,6/15/1979,71%,4/5,4/5,
,,,,,
Rocky IV,11/27/1985,38%,4.5/5,3/5,https://youtu.be/yLLQvF7QOy0
\"Rocky Balboa\",12/20/2006,77%,4/5,N/A,
Rocky Returns,TBD,,,,
The Next Round,1/1/2099,,,,
";

    /// A Harry Potter catalog where some titles have punctuation in their names.
    pub const HARRY_POTTER_CSV: &str = "\
Name,Release Date,Critic Rating,Audience Rating,My Rating,Trailer
Harry Potter and the Sorcerer's Stone,11/16/2001,81%,4.5/5,4/5,
Harry Potter and the Chamber of Secrets,11/15/2002,82%,4/5,3.5/5,
\"Harry Potter and the Deathly Hallows: Part 2\",7/15/2011,96%,4.5/5,5/5,
";

    /// Builds a record with only `Name` and `Release Date` set.
    pub fn record(name: &str, release_date: &str) -> CatalogRecord {
        let mut row = RawRow::new();
        row.insert(columns::NAME.to_string(), name.to_string());
        row.insert(columns::RELEASE_DATE.to_string(), release_date.to_string());
        CatalogRecord::from_row(row)
    }

    /// Builds a record from column/value pairs.
    pub fn record_with(fields: &[(&str, &str)]) -> CatalogRecord {
        CatalogRecord::from_row(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
