//! Rating strings like `"4.5/5"`, `"7/10"` or `"93%"`.

use serde::Serialize;

/// Out-of value assumed when a rating has no usable denominator.
pub const DEFAULT_DENOMINATOR: u32 = 5;

/// A numeric rating and the scale it is on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    pub value: f64,
    pub out_of: u32,
}

impl Rating {
    /// Position on the scale, clamped to `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.out_of == 0 {
            return 0.0;
        }
        (self.value / f64::from(self.out_of)).clamp(0.0, 1.0)
    }
}

/// Star counts for a rating. `full + half + empty == out_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarBuckets {
    pub full: u32,
    pub half: u32,
    pub empty: u32,
}

/// Parse a rating string. `"N/A"`, empty and non-numeric input give `None`.
///
/// Percentages are rescaled onto [`DEFAULT_DENOMINATOR`] stars.
pub fn parse_rating(raw: &str) -> Option<Rating> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("n/a") {
        return None;
    }

    if let Some(percent) = raw.strip_suffix('%') {
        let percent: f64 = percent.trim().parse().ok().filter(|v: &f64| v.is_finite())?;
        return Some(Rating {
            value: percent / 100.0 * f64::from(DEFAULT_DENOMINATOR),
            out_of: DEFAULT_DENOMINATOR,
        });
    }

    let (numerator, denominator) = match raw.split_once('/') {
        Some((n, d)) => (n, Some(d)),
        None => (raw, None),
    };

    let value: f64 = numerator
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())?;

    let out_of = denominator
        .and_then(|d| d.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d >= 1.0)
        .map(|d| d.floor() as u32)
        .unwrap_or(DEFAULT_DENOMINATOR);

    Some(Rating { value, out_of })
}

/// Bucket a rating into full, half and empty stars.
///
/// `full = floor(value)`, one half star when the remainder is at least 0.5,
/// and the rest of the scale empty. Values are clamped to the scale.
pub fn rating_to_star_buckets(raw: &str) -> Option<StarBuckets> {
    let rating = parse_rating(raw)?;
    let value = rating.value.clamp(0.0, f64::from(rating.out_of));

    let full = value.floor() as u32;
    let half = u32::from(value - f64::from(full) >= 0.5 && full < rating.out_of);
    let empty = rating.out_of - full - half;

    Some(StarBuckets { full, half, empty })
}
