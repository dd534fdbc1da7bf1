//! Internet Archive rewrite: ask the mirror for the raw capture instead of the replay page.

use regex::Regex;
use std::sync::OnceLock;

const ARCHIVE_HOST_MARKER: &str = "//web.archive.org/";

fn archive_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"web\.archive\.org/web/(\d*)/(.*)").expect("archive pattern is valid")
    })
}

/// Rewrites `.../web/<timestamp>/<original>` to `https://web.archive.org/web/<timestamp>id_/<original>`.
///
/// Anything else, including URLs that already carry the `id_` flag, is returned unchanged.
pub fn rewrite_archive_url(url: &str) -> String {
    if !url.contains(ARCHIVE_HOST_MARKER) {
        return url.to_string();
    }
    match archive_regex().captures(url) {
        Some(caps) => {
            let timestamp = caps.get(1).map_or("", |m| m.as_str());
            let original = caps.get(2).map_or("", |m| m.as_str());
            format!("https://web.archive.org/web/{timestamp}id_/{original}")
        }
        None => url.to_string(),
    }
}
