//! The ten franchise hubs and their catalog settings.

mod fallback;
mod registry;

pub use registry::{Hub, HubRegistry};

use serde::{Deserialize, Serialize};

use crate::catalog::{columns, CatalogConfig, CatalogRecord, LoadFailurePolicy};
use crate::presentation::{Badge, FilenameRule, ImageExtension, CHAMPIONSHIP_TITLES, KARATE_BELTS};

const NAME_AND_RELEASE_DATE: &[&str] = &[columns::NAME, columns::RELEASE_DATE];

/// Shared poster directory at the asset root.
const SHARED_POSTERS: &str = "/posters";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Franchise {
    Chipmunks,
    DespicableMe,
    Godzilla,
    HarryPotter,
    KarateKid,
    Pixar,
    Rocky,
    StarWars,
    TheBoys,
    Transformers,
}

impl Franchise {
    pub const ALL: [Franchise; 10] = [
        Self::Chipmunks,
        Self::DespicableMe,
        Self::Godzilla,
        Self::HarryPotter,
        Self::KarateKid,
        Self::Pixar,
        Self::Rocky,
        Self::StarWars,
        Self::TheBoys,
        Self::Transformers,
    ];

    pub fn all() -> &'static [Franchise] {
        &Self::ALL
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Chipmunks => "chipmunks",
            Self::DespicableMe => "despicable-me",
            Self::Godzilla => "godzilla",
            Self::HarryPotter => "harry-potter",
            Self::KarateKid => "karate-kid",
            Self::Pixar => "pixar",
            Self::Rocky => "rocky",
            Self::StarWars => "star-wars",
            Self::TheBoys => "the-boys",
            Self::Transformers => "transformers",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Chipmunks => "Alvin and the Chipmunks",
            Self::DespicableMe => "Despicable Me",
            Self::Godzilla => "Godzilla",
            Self::HarryPotter => "Harry Potter",
            Self::KarateKid => "The Karate Kid",
            Self::Pixar => "Pixar",
            Self::Rocky => "Rocky",
            Self::StarWars => "Star Wars",
            Self::TheBoys => "The Boys",
            Self::Transformers => "Transformers",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.slug() == slug)
    }

    /// Built-in catalog settings, before any configuration overrides.
    pub fn catalog_config(&self) -> CatalogConfig {
        let base = CatalogConfig::new(self.slug(), format!("/{}", self.slug()), self.csv_file_name());

        match self {
            Self::Chipmunks => base.with_fallback(fallback::CHIPMUNKS),
            Self::DespicableMe => base.with_fallback(fallback::DESPICABLE_ME),
            Self::Godzilla => base
                .with_posters_dir(SHARED_POSTERS)
                .with_fallback(fallback::GODZILLA),
            Self::HarryPotter => base
                .with_filename_rule(FilenameRule::STANDARD.with_stripped(":,.?!'"))
                .with_failure_policy(LoadFailurePolicy::Propagate),
            Self::KarateKid => base
                .with_filename_rule(FilenameRule::STRIP_PARENS)
                .with_fallback(fallback::KARATE_KID),
            Self::Pixar => base
                .with_posters_dir(SHARED_POSTERS)
                .with_filename_rule(
                    FilenameRule::STANDARD
                        .with_stripped(":,.?!'")
                        .with_extension(ImageExtension::Jpg),
                )
                .with_fallback(fallback::PIXAR),
            Self::Rocky => base.with_fallback(fallback::ROCKY),
            Self::StarWars => base
                .with_filename_rule(FilenameRule::STANDARD.with_extension(ImageExtension::Jpg))
                .with_search_columns(NAME_AND_RELEASE_DATE)
                .with_fallback(fallback::STAR_WARS),
            Self::TheBoys => base.with_failure_policy(LoadFailurePolicy::Propagate),
            Self::Transformers => base
                .with_posters_dir(SHARED_POSTERS)
                .with_filename_rule(
                    FilenameRule::STANDARD
                        .with_separator('-')
                        .with_extension(ImageExtension::Jpg),
                )
                .with_fallback(fallback::TRANSFORMERS),
        }
    }

    fn csv_file_name(&self) -> &'static str {
        match self {
            Self::Chipmunks => "chipmunks.csv",
            Self::DespicableMe => "despicableme.csv",
            Self::Godzilla => "godzilla.csv",
            Self::HarryPotter => "harrypotter.csv",
            Self::KarateKid => "karatekid.csv",
            Self::Pixar => "pixar.csv",
            Self::Rocky => "rocky.csv",
            Self::StarWars => "starwars.csv",
            Self::TheBoys => "theboys.csv",
            Self::Transformers => "transformers.csv",
        }
    }

    /// Franchise-specific badge for a title, from its `My Rating`.
    pub fn badge(&self, record: &CatalogRecord) -> Option<Badge> {
        let table = match self {
            Self::KarateKid => &KARATE_BELTS,
            Self::Rocky => &CHAMPIONSHIP_TITLES,
            _ => return None,
        };
        table.lookup_rating(record.get(columns::MY_RATING)).copied()
    }
}

impl std::fmt::Display for Franchise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
