//! Trailer links.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{11})",
    )
    .unwrap()
});

/// Embeddable URL for a YouTube trailer link.
///
/// Returns `None` for empty input and for links that are not a YouTube video.
pub fn trailer_embed_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| format!("https://www.youtube.com/embed/{}", id.as_str()))
}
