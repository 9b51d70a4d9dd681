//! Pure formatting helpers for the hub pages.
//!
//! Nothing here does I/O or fails: malformed input yields `None` or an
//! empty-ish but well-formed value.

mod filename;
mod rating;
mod thresholds;
mod trailer;

pub use filename::{build_image_path, title_to_image_filename, FilenameRule, ImageExtension};
pub use rating::{parse_rating, rating_to_star_buckets, Rating, StarBuckets, DEFAULT_DENOMINATOR};
pub use thresholds::{Badge, ThresholdTable, Tier, CHAMPIONSHIP_TITLES, KARATE_BELTS};
pub use trailer::trailer_embed_url;
