//! URL modeling for previews.
//!
//! Turns a raw anchor href into an absolute, directly fetchable resource URL:
//! sanitize, rewrite archive-mirror captures, resolve against the page URL,
//! then check it can be embedded without mixed-content blocking. Registry
//! bookkeeping happens in [`crate::session::PageSession::process_url`].

mod archive;
mod protocol;
mod sanitize;

pub use archive::rewrite_archive_url;
pub use protocol::is_embeddable;
pub use sanitize::{escape_attr, sanitize_href};

use serde::Serialize;
use url::Url;

/// Wiki gallery pages look like media files but are HTML.
const WIKIMEDIA_FILE_PAGE: &str = "commons.wikimedia.org/wiki/File:";

/// Why a link gets no preview at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Already previewed on this page.
    Duplicate,
    /// A Wikimedia Commons file description page, not the file.
    WikimediaPage,
    /// Could not be resolved to an absolute URL.
    Unresolvable,
    /// Refused by the href sanitizer.
    Unsafe,
}

/// Outcome of normalizing one href.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Normalized {
    /// Registered; build the category preview for this URL.
    Accepted(String),
    /// Mixed content; show the explanatory error preview instead.
    Insecure(String),
    Skipped(SkipReason),
}

/// Rewrites and resolves a sanitized href against the document base URL.
///
/// The base is the page URL unless the document carries a `<base href>`.
/// Returns `None` if the href cannot be joined onto `base`.
pub fn resolve_href(href: &str, base: &Url) -> Option<String> {
    let rewritten = rewrite_archive_url(href);
    match base.join(&rewritten) {
        Ok(u) => Some(u.to_string()),
        Err(e) => {
            tracing::debug!(href = %rewritten, "cannot resolve href: {e}");
            None
        }
    }
}

pub fn is_wikimedia_file_page(url: &str) -> bool {
    url.contains(WIKIMEDIA_FILE_PAGE)
}

/// `"https:"` style protocol of a page URL, as used by [`is_embeddable`].
pub fn page_protocol(page_url: &Url) -> String {
    format!("{}:", page_url.scheme())
}
