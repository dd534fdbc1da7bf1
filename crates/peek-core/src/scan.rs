//! Single pass over a page's anchors.
//!
//! Categories are visited in [`LinkCategory::ALL`] order and anchors within a
//! category in document order; that order is the registry insertion order.

use scraper::{Html, Selector};
use serde::Serialize;

use crate::badge::BadgeChannel;
use crate::classify::LinkCategory;
use crate::error::ScanError;
use crate::preview::PreviewDescriptor;
use crate::session::{LinkOutcome, PageSession};

/// Everything one scan produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub page_url: String,
    /// Every matched anchor, in processing order.
    pub links: Vec<LinkOutcome>,
    /// Registry length after the scan (what the badge shows).
    pub preview_count: usize,
}

impl ScanReport {
    /// Anchors that get a popup, with their preview.
    pub fn attached(&self) -> impl Iterator<Item = (&LinkOutcome, &PreviewDescriptor)> {
        self.links
            .iter()
            .filter_map(|l| l.preview.as_ref().map(|p| (l, p)))
    }
}

fn category_selector(category: LinkCategory) -> Result<Selector, ScanError> {
    selector(&category.selector_list())
}

fn selector(list: &str) -> Result<Selector, ScanError> {
    Selector::parse(list).map_err(|e| ScanError::Selector {
        selector: list.to_string(),
        message: e.to_string(),
    })
}

/// First `<base href>` of the document, as written.
fn document_base_href(document: &Html) -> Result<Option<String>, ScanError> {
    let base = selector("base[href]")?;
    Ok(document
        .select(&base)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(String::from))
}

/// Scans `document` and runs every matching anchor through `session`.
///
/// A `<base href>` in the document becomes the session's resolution base first.
pub fn scan_document<B: BadgeChannel>(
    document: &Html,
    session: &mut PageSession<B>,
) -> Result<ScanReport, ScanError> {
    if let Some(href) = document_base_href(document)? {
        session.set_document_base(&href);
    }

    let mut links = Vec::new();

    for category in LinkCategory::ALL {
        let selector = category_selector(category)?;
        for anchor in document.select(&selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            links.push(session.preview_link(category, href));
        }
    }

    tracing::debug!(
        links = links.len(),
        previews = session.preview_count(),
        "scan finished for {}",
        session.page_url()
    );

    Ok(ScanReport {
        page_url: session.page_url().to_string(),
        links,
        preview_count: session.preview_count(),
    })
}

/// Parses `html` and scans it.
pub fn scan_html<B: BadgeChannel>(
    html: &str,
    session: &mut PageSession<B>,
) -> Result<ScanReport, ScanError> {
    let document = Html::parse_document(html);
    scan_document(&document, session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_selector_parses() {
        for category in LinkCategory::ALL {
            assert!(category_selector(category).is_ok(), "{category}");
        }
    }

    #[test]
    fn first_base_href_wins() {
        let doc = Html::parse_document(
            r#"<head><base target="_blank"><base href="/a/"><base href="/b/"></head>"#,
        );
        assert_eq!(document_base_href(&doc).unwrap().as_deref(), Some("/a/"));
        let doc = Html::parse_document("<p>no base</p>");
        assert_eq!(document_base_href(&doc).unwrap(), None);
    }
}
