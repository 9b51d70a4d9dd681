//! Poster filenames and image paths.
//!
//! Filenames must match the assets on disk, so every franchise keeps its own
//! punctuation and separator rule instead of sharing one.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageExtension {
    Png,
    Jpg,
}

impl ImageExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }
}

/// How a title becomes a poster filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilenameRule {
    /// Replaces each space.
    pub separator: char,
    /// Characters removed outright.
    pub stripped: &'static str,
    pub extension: ImageExtension,
}

impl FilenameRule {
    pub const STANDARD: Self = Self {
        separator: '_',
        stripped: ":,.?!",
        extension: ImageExtension::Png,
    };

    /// Also strips parentheses, for titles carrying a year like `(1984)`.
    pub const STRIP_PARENS: Self = Self {
        separator: '_',
        stripped: ":,.?!()",
        extension: ImageExtension::Png,
    };

    pub const fn with_separator(self, separator: char) -> Self {
        Self { separator, ..self }
    }

    pub const fn with_stripped(self, stripped: &'static str) -> Self {
        Self { stripped, ..self }
    }

    pub const fn with_extension(self, extension: ImageExtension) -> Self {
        Self { extension, ..self }
    }
}

impl Default for FilenameRule {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// `"Rocky Balboa"` → `"Rocky_Balboa.png"` under [`FilenameRule::STANDARD`].
///
/// A title with nothing left after stripping becomes `untitled.<ext>`.
pub fn title_to_image_filename(name: &str, rule: &FilenameRule) -> String {
    let stem: String = name
        .chars()
        .filter(|c| !rule.stripped.contains(*c))
        .map(|c| if c == ' ' { rule.separator } else { c })
        .collect();

    let stem = if stem.trim_matches(rule.separator).is_empty() {
        "untitled"
    } else {
        stem.as_str()
    };

    format!("{}.{}", stem, rule.extension.as_str())
}

/// Join an image directory and a filename into a path.
///
/// Never fails: empty segments are skipped and the result always starts with
/// `/` unless `base_path` is an absolute URL.
pub fn build_image_path(base_path: &str, filename: &str) -> String {
    let base = base_path.trim().trim_end_matches('/');
    let filename = filename.trim().trim_start_matches('/');

    if base.starts_with("http://") || base.starts_with("https://") {
        return if filename.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, filename)
        };
    }

    let segments: Vec<&str> = base
        .split('/')
        .chain(filename.split('/'))
        .filter(|s| !s.is_empty())
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rule() {
        assert_eq!(
            title_to_image_filename("Rocky Balboa", &FilenameRule::STANDARD),
            "Rocky_Balboa.png"
        );
        assert_eq!(
            title_to_image_filename("Star Wars: A New Hope", &FilenameRule::STANDARD),
            "Star_Wars_A_New_Hope.png"
        );
        assert_eq!(
            title_to_image_filename("Monsters, Inc.", &FilenameRule::STANDARD),
            "Monsters_Inc.png"
        );
    }

    #[test]
    fn test_standard_rule_keeps_parentheses() {
        assert_eq!(
            title_to_image_filename("Godzilla (2014)", &FilenameRule::STANDARD),
            "Godzilla_(2014).png"
        );
    }

    #[test]
    fn test_strip_parens_rule() {
        let filename =
            title_to_image_filename("The Karate Kid (1984)", &FilenameRule::STRIP_PARENS);
        assert_eq!(filename, "The_Karate_Kid_1984.png");
        assert!(!filename.contains('(') && !filename.contains(')'));
    }

    #[test]
    fn test_custom_separator_and_extension() {
        let rule = FilenameRule::STANDARD
            .with_separator('-')
            .with_extension(ImageExtension::Jpg);
        assert_eq!(
            title_to_image_filename("Transformers: Dark of the Moon", &rule),
            "Transformers-Dark-of-the-Moon.jpg"
        );
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(
            title_to_image_filename("", &FilenameRule::STANDARD),
            "untitled.png"
        );
        assert_eq!(
            title_to_image_filename("?!", &FilenameRule::STANDARD),
            "untitled.png"
        );
    }

    #[test]
    fn test_build_image_path() {
        assert_eq!(
            build_image_path("/rocky/movieposters", "Rocky.png"),
            "/rocky/movieposters/Rocky.png"
        );
        assert_eq!(
            build_image_path("/posters/", "/Up.jpg"),
            "/posters/Up.jpg"
        );
    }

    #[test]
    fn test_build_image_path_empty_input() {
        assert_eq!(build_image_path("", ""), "/");
        assert_eq!(build_image_path("", "Up.jpg"), "/Up.jpg");
        assert_eq!(build_image_path("/posters", ""), "/posters");
    }

    #[test]
    fn test_build_image_path_absolute_url() {
        assert_eq!(
            build_image_path("https://cdn.example.com/posters/", "Up.jpg"),
            "https://cdn.example.com/posters/Up.jpg"
        );
    }
}
