//! `peek scan <file> --page-url <url>` – list the previews a saved page would get.

use anyhow::{Context, Result};
use peek_core::badge::{BadgeChannel, JsonLinesBadge, NullBadge};
use peek_core::config::PeekConfig;
use peek_core::preview::PreviewContent;
use peek_core::url_model::{Normalized, SkipReason};
use peek_core::{scan_html, LinkOutcome, PageSession, ScanReport};
use std::io::{self, Read};
use std::path::Path;

fn read_page(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .context("read page from stdin")?;
        return Ok(html);
    }
    std::fs::read_to_string(path).with_context(|| format!("read page: {}", path.display()))
}

fn scan_with<B: BadgeChannel>(
    html: &str,
    page_url: &str,
    cfg: &PeekConfig,
    badge: B,
) -> Result<ScanReport> {
    let mut session = PageSession::new(page_url, cfg.popup.clone(), badge)?;
    Ok(scan_html(html, &mut session)?)
}

/// Short result column for the table view.
pub(crate) fn outcome_label(link: &LinkOutcome) -> String {
    if link.reverted {
        return "not a document".to_string();
    }
    match (&link.normalized, &link.preview) {
        (Normalized::Insecure(_), _) => "insecure".to_string(),
        (Normalized::Skipped(reason), _) => match reason {
            SkipReason::Duplicate => "duplicate",
            SkipReason::WikimediaPage => "wiki page",
            SkipReason::Unresolvable => "unresolvable",
            SkipReason::Unsafe => "unsafe",
        }
        .to_string(),
        (Normalized::Accepted(_), Some(p)) => match &p.content {
            PreviewContent::Html(_) => "preview".to_string(),
            PreviewContent::Text(_) => "message".to_string(),
        },
        (Normalized::Accepted(_), None) => "no viewer".to_string(),
    }
}

fn print_table(report: &ScanReport) {
    if report.links.is_empty() {
        println!("No previewable links on {}", report.page_url);
        return;
    }
    println!("{:<14} {:<14} {}", "CATEGORY", "RESULT", "LINK");
    for link in &report.links {
        let shown = match &link.normalized {
            Normalized::Accepted(u) | Normalized::Insecure(u) => u.as_str(),
            Normalized::Skipped(_) => link.href.as_str(),
        };
        println!(
            "{:<14} {:<14} {}",
            link.category.to_string(),
            outcome_label(link),
            shown
        );
    }
    println!(
        "{} popup(s), badge count {}",
        report.attached().count(),
        report.preview_count
    );
}

pub fn run_scan(
    cfg: &PeekConfig,
    path: &Path,
    page_url: &str,
    json: bool,
    badge_messages: bool,
) -> Result<()> {
    let html = read_page(path)?;
    let report = if badge_messages {
        scan_with(&html, page_url, cfg, JsonLinesBadge::new(io::stderr()))?
    } else {
        scan_with(&html, page_url, cfg, NullBadge)?
    };

    if json {
        let out = serde_json::to_string_pretty(&report).context("serialize scan report")?;
        println!("{out}");
    } else {
        print_table(&report);
    }
    Ok(())
}
