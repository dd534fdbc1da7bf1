//! `peek check <href> --page-url <url>` – classify and normalize one link.

use anyhow::{Context, Result};
use peek_core::badge::NullBadge;
use peek_core::config::PeekConfig;
use peek_core::{matching_categories, LinkOutcome, PageSession};

/// Runs `href` through every category it matches, on one session, as a page scan would.
pub(crate) fn check_outcomes(
    cfg: &PeekConfig,
    href: &str,
    page_url: &str,
) -> Result<Vec<LinkOutcome>> {
    let mut session = PageSession::new(page_url, cfg.popup.clone(), NullBadge)?;
    Ok(matching_categories(href)
        .into_iter()
        .map(|category| session.preview_link(category, href))
        .collect())
}

pub fn run_check(cfg: &PeekConfig, href: &str, page_url: &str) -> Result<()> {
    let outcomes = check_outcomes(cfg, href, page_url)?;
    if outcomes.is_empty() {
        println!("No preview category matches {href}");
        return Ok(());
    }
    let json = serde_json::to_string_pretty(&outcomes).context("serialize link outcomes")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use peek_core::url_model::{Normalized, SkipReason};
    use peek_core::LinkCategory;

    #[test]
    fn hosted_pdf_runs_both_categories() {
        let outcomes = check_outcomes(
            &PeekConfig::default(),
            "https://docs.google.com/d/x.pdf",
            "https://example.com/",
        )
        .unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].category, LinkCategory::Pdf);
        assert_eq!(
            outcomes[0].normalized,
            Normalized::Accepted("https://docs.google.com/d/x.pdf".to_string())
        );
        assert!(outcomes[0].preview.is_some());
        assert_eq!(outcomes[1].category, LinkCategory::HostedViewer);
        assert_eq!(
            outcomes[1].normalized,
            Normalized::Skipped(SkipReason::Duplicate)
        );
    }

    #[test]
    fn unmatched_href_has_no_outcomes() {
        let outcomes =
            check_outcomes(&PeekConfig::default(), "/about.html", "https://example.com/").unwrap();
        assert!(outcomes.is_empty());
    }

    #[test]
    fn bad_page_url_is_an_error() {
        assert!(check_outcomes(&PeekConfig::default(), "a.mp4", "not a url").is_err());
    }
}
