//! Release date normalization.
//!
//! CSV files mix US `M/D/YY(YY)` dates with ISO dates, spelled-out month
//! names and bare years. Anything that cannot be read degrades to
//! [`ReleaseDate::Unknown`], which sorts before every real date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use tracing::warn;

/// A parsed release date, or the sentinel for an unreadable one.
///
/// `Unknown` orders before every `Known` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseDate {
    Unknown,
    Known(NaiveDate),
}

impl ReleaseDate {
    /// Day zero of the reference calendar.
    pub fn epoch() -> NaiveDate {
        DateTime::<Utc>::UNIX_EPOCH.date_naive()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Known(date) => Some(*date),
            Self::Unknown => None,
        }
    }

    /// The date, with the sentinel shown as the epoch.
    pub fn or_epoch(&self) -> NaiveDate {
        self.date().unwrap_or_else(Self::epoch)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Strictly later than `day`. The sentinel is never later.
    pub fn is_after(&self, day: NaiveDate) -> bool {
        matches!(self, Self::Known(date) if *date > day)
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(date) => serializer.serialize_some(&date.format("%Y-%m-%d").to_string()),
            Self::Unknown => serializer.serialize_none(),
        }
    }
}

/// Formats tried after the US slash form, in order.
const FREE_FORM_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%m-%d-%Y",
];

/// Parse a raw `Release Date` value. Never fails.
pub fn parse_release_date(raw: Option<&str>) -> ReleaseDate {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return ReleaseDate::Unknown;
    };

    if raw.contains('/') {
        if let Some(date) = parse_us_slash_date(raw) {
            return ReleaseDate::Known(date);
        }
    }

    if let Some(date) = parse_free_form(raw) {
        return ReleaseDate::Known(date);
    }

    warn!(raw, "Unparseable release date, falling back to epoch sentinel");
    ReleaseDate::Unknown
}

/// `0..=49` become 20xx, `50..=99` become 19xx, anything else is kept.
pub fn expand_two_digit_year(year: i32) -> i32 {
    match year {
        0..=49 => 2000 + year,
        50..=99 => 1900 + year,
        _ => year,
    }
}

fn parse_us_slash_date(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };

    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;
    if year < 0 {
        return None;
    }

    NaiveDate::from_ymd_opt(expand_two_digit_year(year), month, day)
}

fn parse_free_form(raw: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    if let Some(date) = FREE_FORM_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
    {
        return Some(date);
    }

    // "June 1984"
    if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {raw}"), "%d %B %Y") {
        return Some(date);
    }

    // "1984"
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(y: i32, m: u32, d: u32) -> ReleaseDate {
        ReleaseDate::Known(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_empty_and_absent_are_sentinel() {
        assert_eq!(parse_release_date(None), ReleaseDate::Unknown);
        assert_eq!(parse_release_date(Some("")), ReleaseDate::Unknown);
        assert_eq!(parse_release_date(Some("   ")), ReleaseDate::Unknown);
    }

    #[test]
    fn test_us_slash_date() {
        assert_eq!(parse_release_date(Some("12/3/1976")), known(1976, 12, 3));
        assert_eq!(parse_release_date(Some("05/25/1977")), known(1977, 5, 25));
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(parse_release_date(Some("2/29/2000")), known(2000, 2, 29));
    }

    #[test]
    fn test_non_leap_year_feb_29_is_sentinel() {
        assert_eq!(parse_release_date(Some("2/29/2001")), ReleaseDate::Unknown);
    }

    #[test]
    fn test_invalid_month_and_day_fall_through_to_sentinel() {
        assert_eq!(parse_release_date(Some("13/40/2020")), ReleaseDate::Unknown);
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_release_date(Some("1/1/49")), known(2049, 1, 1));
        assert_eq!(parse_release_date(Some("1/1/50")), known(1950, 1, 1));
        assert_eq!(parse_release_date(Some("6/22/84")), known(1984, 6, 22));
        assert_eq!(parse_release_date(Some("7/3/07")), known(2007, 7, 3));
    }

    #[test]
    fn test_negative_year_is_sentinel() {
        assert_eq!(parse_release_date(Some("1/1/-5")), ReleaseDate::Unknown);
        assert_eq!(parse_release_date(Some("6/15/-1979")), ReleaseDate::Unknown);
    }

    #[test]
    fn test_expand_two_digit_year_keeps_full_years() {
        assert_eq!(expand_two_digit_year(0), 2000);
        assert_eq!(expand_two_digit_year(99), 1999);
        assert_eq!(expand_two_digit_year(1984), 1984);
    }

    #[test]
    fn test_slash_with_year_first_uses_free_form() {
        assert_eq!(parse_release_date(Some("2020/12/25")), known(2020, 12, 25));
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_release_date(Some("2024-03-29")), known(2024, 3, 29));
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(
            parse_release_date(Some("2023-12-01T00:00:00Z")),
            known(2023, 12, 1)
        );
    }

    #[test]
    fn test_month_name_formats() {
        assert_eq!(parse_release_date(Some("May 25, 1977")), known(1977, 5, 25));
        assert_eq!(parse_release_date(Some("Nov 3, 1954")), known(1954, 11, 3));
        assert_eq!(parse_release_date(Some("3 November 1954")), known(1954, 11, 3));
    }

    #[test]
    fn test_month_and_year_is_first_of_month() {
        assert_eq!(parse_release_date(Some("June 1984")), known(1984, 6, 1));
    }

    #[test]
    fn test_bare_year_is_january_first() {
        assert_eq!(parse_release_date(Some("2027")), known(2027, 1, 1));
    }

    #[test]
    fn test_garbage_is_sentinel() {
        assert_eq!(parse_release_date(Some("TBA")), ReleaseDate::Unknown);
        assert_eq!(parse_release_date(Some("a/b/c")), ReleaseDate::Unknown);
    }

    #[test]
    fn test_sentinel_orders_before_every_date() {
        let ancient = known(1, 1, 1);
        assert!(ReleaseDate::Unknown < ancient);
        assert!(known(1954, 11, 3) < known(2014, 5, 16));
    }

    #[test]
    fn test_sentinel_is_never_after() {
        assert!(!ReleaseDate::Unknown.is_after(NaiveDate::MIN));
        assert_eq!(ReleaseDate::Unknown.or_epoch(), ReleaseDate::epoch());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_value(known(1977, 5, 25)).unwrap(),
            serde_json::json!("1977-05-25")
        );
        assert_eq!(
            serde_json::to_value(ReleaseDate::Unknown).unwrap(),
            serde_json::Value::Null
        );
    }
}
