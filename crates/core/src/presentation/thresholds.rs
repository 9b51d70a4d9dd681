//! Franchise badges chosen by rating thresholds.

use serde::Serialize;

use super::rating::parse_rating;

/// A label with a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub color: &'static str,
}

/// One row of a threshold table: applies from `min_ratio` upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier<T> {
    pub min_ratio: f64,
    pub value: T,
}

/// Ordered tiers, highest `min_ratio` first. The first tier the rating
/// reaches wins.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<T: 'static> {
    tiers: &'static [Tier<T>],
}

impl<T> ThresholdTable<T> {
    pub const fn new(tiers: &'static [Tier<T>]) -> Self {
        Self { tiers }
    }

    /// Look up by a ratio in `0.0..=1.0`.
    pub fn lookup(&self, ratio: f64) -> Option<&'static T> {
        self.tiers
            .iter()
            .find(|tier| ratio >= tier.min_ratio)
            .map(|tier| &tier.value)
    }

    /// Look up by a raw rating string such as `"4/5"`.
    pub fn lookup_rating(&self, raw: &str) -> Option<&'static T> {
        parse_rating(raw).and_then(|rating| self.lookup(rating.ratio()))
    }

    pub fn tiers(&self) -> &'static [Tier<T>] {
        self.tiers
    }
}

const fn tier(min_ratio: f64, label: &'static str, color: &'static str) -> Tier<Badge> {
    Tier {
        min_ratio,
        value: Badge { label, color },
    }
}

/// Karate Kid belt rank by rating.
pub static KARATE_BELTS: ThresholdTable<Badge> = ThresholdTable::new(&[
    tier(0.9, "Black Belt", "#111111"),
    tier(0.8, "Brown Belt", "#8b4513"),
    tier(0.7, "Purple Belt", "#800080"),
    tier(0.6, "Blue Belt", "#1e90ff"),
    tier(0.5, "Green Belt", "#228b22"),
    tier(0.4, "Orange Belt", "#ff8c00"),
    tier(0.3, "Yellow Belt", "#ffd700"),
    tier(0.0, "White Belt", "#f5f5f5"),
]);

/// Rocky championship title by rating.
pub static CHAMPIONSHIP_TITLES: ThresholdTable<Badge> = ThresholdTable::new(&[
    tier(0.9, "Undisputed Heavyweight Champion", "#d4af37"),
    tier(0.8, "Heavyweight Champion", "#c0c0c0"),
    tier(0.6, "Title Contender", "#cd7f32"),
    tier(0.4, "Journeyman", "#8b0000"),
    tier(0.0, "Club Fighter", "#555555"),
]);
