//! Per-page state: the preview registry and the badge it drives.
//!
//! One `PageSession` covers one page view. It is created when the page is
//! scanned and dropped on navigation; nothing is persisted.

use serde::Serialize;
use url::Url;

use crate::badge::{BadgeChannel, BadgeMessage, BadgeRequest, BadgeResponse};
use crate::classify::LinkCategory;
use crate::config::PopupConfig;
use crate::error::ScanError;
use crate::preview::{self, IdExtraction, PreviewDescriptor};
use crate::registry::PreviewRegistry;
use crate::url_model::{self, Normalized, SkipReason};

/// What happened to one matched anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkOutcome {
    pub category: LinkCategory,
    /// Raw `href` attribute as found in the page.
    pub href: String,
    pub normalized: Normalized,
    /// Registration was undone because the link was not a real hosted document.
    pub reverted: bool,
    /// Popup to attach, if any.
    pub preview: Option<PreviewDescriptor>,
}

pub struct PageSession<B: BadgeChannel> {
    page_url: Url,
    /// Relative hrefs resolve against this; the page URL unless `<base href>` overrides it.
    base_url: Url,
    page_protocol: String,
    popup: PopupConfig,
    registry: PreviewRegistry,
    badge: B,
}

impl<B: BadgeChannel> PageSession<B> {
    /// Starts a session for `page_url` and resets the badge.
    pub fn new(page_url: &str, popup: PopupConfig, badge: B) -> Result<Self, ScanError> {
        let parsed = Url::parse(page_url).map_err(|source| ScanError::InvalidPageUrl {
            url: page_url.to_string(),
            source,
        })?;
        Self::with_url(parsed, popup, badge)
    }

    pub fn with_url(page_url: Url, popup: PopupConfig, mut badge: B) -> Result<Self, ScanError> {
        match page_url.scheme() {
            "http" | "https" => {}
            other => return Err(ScanError::UnsupportedPageScheme(other.to_string())),
        }
        badge.send(BadgeMessage::reset());
        Ok(Self {
            page_protocol: url_model::page_protocol(&page_url),
            base_url: page_url.clone(),
            page_url,
            popup,
            registry: PreviewRegistry::new(),
            badge,
        })
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Applies a document `<base href>`, resolved against the page URL.
    ///
    /// Only http(s) bases are honoured; anything else leaves the base unchanged.
    pub fn set_document_base(&mut self, href: &str) -> bool {
        let Some(href) = url_model::sanitize_href(href) else {
            return false;
        };
        match self.page_url.join(&href) {
            Ok(base) if matches!(base.scheme(), "http" | "https") => {
                tracing::debug!(base = %base, "using document base URL");
                self.base_url = base;
                true
            }
            Ok(base) => {
                tracing::debug!(base = %base, "ignoring non-web document base");
                false
            }
            Err(e) => {
                tracing::debug!(href = %href, "cannot resolve document base: {e}");
                false
            }
        }
    }

    pub fn registry(&self) -> &PreviewRegistry {
        &self.registry
    }

    pub fn preview_count(&self) -> usize {
        self.registry.len()
    }

    pub fn badge(&self) -> &B {
        &self.badge
    }

    pub fn into_badge(self) -> B {
        self.badge
    }

    /// Answers a query from the badge owner.
    pub fn handle_request(&self, request: &BadgeRequest) -> BadgeResponse {
        match request {
            BadgeRequest::GetPreviews => BadgeResponse {
                data: self.registry.len().to_string(),
            },
        }
    }

    /// Normalizes a raw href and registers it if it deserves a preview.
    pub fn process_url(&mut self, raw_href: &str) -> Normalized {
        let Some(href) = url_model::sanitize_href(raw_href) else {
            tracing::debug!(href = raw_href, "href refused by sanitizer");
            return Normalized::Skipped(SkipReason::Unsafe);
        };

        let Some(url) = url_model::resolve_href(&href, &self.base_url) else {
            return Normalized::Skipped(SkipReason::Unresolvable);
        };

        if !url_model::is_embeddable(&url, &self.page_protocol) {
            tracing::warn!(
                "Cannot generate a preview for {} because it is not served over HTTPS.",
                url
            );
            return Normalized::Insecure(url);
        }

        if self.registry.contains(&url) {
            return Normalized::Skipped(SkipReason::Duplicate);
        }
        if url_model::is_wikimedia_file_page(&url) {
            return Normalized::Skipped(SkipReason::WikimediaPage);
        }

        self.registry.insert(&url);
        self.badge.send(BadgeMessage::change(self.registry.len()));
        Normalized::Accepted(url)
    }

    /// Drops a registered URL and tells the badge. Unknown URLs are ignored.
    pub fn unregister(&mut self, url: &str) -> bool {
        if !self.registry.remove(url) {
            return false;
        }
        self.badge.send(BadgeMessage::change(self.registry.len()));
        true
    }

    /// Runs one anchor through normalization and the category's preview builder.
    pub fn preview_link(&mut self, category: LinkCategory, raw_href: &str) -> LinkOutcome {
        let normalized = self.process_url(raw_href);
        let mut reverted = false;

        let preview = match &normalized {
            Normalized::Insecure(_) => Some(preview::insecure_preview(&self.popup)),
            Normalized::Skipped(reason) => {
                tracing::debug!(href = raw_href, ?reason, "no preview");
                None
            }
            Normalized::Accepted(url) => {
                tracing::info!(%category, "Found {} link: {}", category.label(), url);
                match category {
                    LinkCategory::Video => Some(preview::video_preview(url, &self.popup)),
                    LinkCategory::Audio => Some(preview::audio_preview(url, &self.popup)),
                    LinkCategory::Document => preview::document_preview(url, &self.popup),
                    LinkCategory::Pdf => Some(preview::pdf_preview(url, &self.popup)),
                    LinkCategory::HostedViewer => match preview::extract_file_id(url) {
                        IdExtraction::Found { shape, id } => {
                            tracing::debug!(?shape, id = %id, "hosted document id");
                            Some(preview::hosted_viewer_preview(&id, &self.popup))
                        }
                        IdExtraction::Unrecognized => {
                            tracing::debug!(url = %url, "not a hosted document; reverting");
                            self.unregister(url);
                            reverted = true;
                            None
                        }
                    },
                }
            }
        };

        LinkOutcome {
            category,
            href: raw_href.to_string(),
            normalized,
            reverted,
            preview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::RecordingBadge;
    use crate::preview::{MountAction, PreviewContent};

    fn session(page: &str) -> PageSession<RecordingBadge> {
        PageSession::new(page, PopupConfig::default(), RecordingBadge::default()).unwrap()
    }

    #[test]
    fn new_session_resets_badge() {
        let s = session("https://example.com/");
        assert_eq!(s.badge().messages, vec![BadgeMessage::reset()]);
        assert_eq!(s.preview_count(), 0);
    }

    #[test]
    fn rejects_non_http_pages() {
        let err = PageSession::new("file:///tmp/x.html", PopupConfig::default(), RecordingBadge::default())
            .err()
            .unwrap();
        assert!(matches!(err, ScanError::UnsupportedPageScheme(s) if s == "file"));
        assert!(matches!(
            PageSession::new("::", PopupConfig::default(), RecordingBadge::default()),
            Err(ScanError::InvalidPageUrl { .. })
        ));
    }

    #[test]
    fn process_url_registers_and_notifies() {
        let mut s = session("https://example.com/page");
        assert_eq!(
            s.process_url("media/a.mp4"),
            Normalized::Accepted("https://example.com/media/a.mp4".to_string())
        );
        assert_eq!(s.preview_count(), 1);
        assert_eq!(s.badge().messages.last(), Some(&BadgeMessage::change(1)));
    }

    #[test]
    fn process_url_deduplicates_after_resolution() {
        let mut s = session("https://example.com/");
        assert!(matches!(s.process_url("a.mp4"), Normalized::Accepted(_)));
        assert_eq!(
            s.process_url("./a.mp4"),
            Normalized::Skipped(SkipReason::Duplicate)
        );
        assert_eq!(s.preview_count(), 1);
        // reset + one change
        assert_eq!(s.badge().messages.len(), 2);
    }

    #[test]
    fn process_url_skips_wikimedia_file_pages() {
        let mut s = session("https://example.com/");
        assert_eq!(
            s.process_url("https://commons.wikimedia.org/wiki/File:Example.mp4"),
            Normalized::Skipped(SkipReason::WikimediaPage)
        );
        assert_eq!(s.preview_count(), 0);
    }

    #[test]
    fn process_url_flags_mixed_content() {
        let mut s = session("https://example.com/");
        assert_eq!(
            s.process_url("http://cdn.test/a.mp4"),
            Normalized::Insecure("http://cdn.test/a.mp4".to_string())
        );
        assert_eq!(s.preview_count(), 0);
        assert_eq!(s.badge().messages.len(), 1);
    }

    #[test]
    fn process_url_allows_http_on_http_page() {
        let mut s = session("http://example.com/");
        assert_eq!(
            s.process_url("http://cdn.test/a.mp4"),
            Normalized::Accepted("http://cdn.test/a.mp4".to_string())
        );
    }

    #[test]
    fn process_url_refuses_script_hrefs() {
        let mut s = session("https://example.com/");
        assert_eq!(
            s.process_url("javascript:play('.mp4')"),
            Normalized::Skipped(SkipReason::Unsafe)
        );
    }

    #[test]
    fn insecure_link_gets_error_preview() {
        let mut s = session("https://example.com/");
        let out = s.preview_link(LinkCategory::Video, "http://cdn.test/a.mp4");
        let preview = out.preview.unwrap();
        assert!(matches!(preview.content, PreviewContent::Text(_)));
        assert!(!preview.interactive);
    }

    #[test]
    fn video_link_gets_autoplay_player() {
        let mut s = session("https://example.com/");
        let out = s.preview_link(LinkCategory::Video, "https://cdn.test/a.mp4");
        let preview = out.preview.unwrap();
        assert!(matches!(preview.on_show, Some(MountAction::PlayMedia { .. })));
    }

    #[test]
    fn document_link_registers_without_preview() {
        let mut s = session("https://example.com/");
        let out = s.preview_link(LinkCategory::Document, "report.docx");
        assert!(out.preview.is_none());
        assert!(!out.reverted);
        assert_eq!(s.preview_count(), 1);
    }

    #[test]
    fn hosted_viewer_link_builds_viewer() {
        let mut s = session("https://example.com/");
        let out = s.preview_link(
            LinkCategory::HostedViewer,
            "https://docs.google.com/document/d/ABC123/edit",
        );
        match out.preview.unwrap().content {
            PreviewContent::Html(html) => assert!(html.contains("srcid=ABC123&amp;")),
            other => panic!("expected html, got {other:?}"),
        }
        assert_eq!(s.preview_count(), 1);
    }

    #[test]
    fn hosted_viewer_false_positive_is_reverted() {
        let mut s = session("https://example.com/");
        s.preview_link(LinkCategory::Pdf, "https://cdn.test/a.pdf");
        let before = s.preview_count();

        let out = s.preview_link(LinkCategory::HostedViewer, "https://docs.google.com/document/u/0/");
        assert!(out.reverted);
        assert!(out.preview.is_none());
        assert_eq!(s.preview_count(), before);
        let tail: Vec<_> = s.badge().messages.iter().rev().take(2).cloned().collect();
        assert_eq!(tail, vec![BadgeMessage::change(1), BadgeMessage::change(2)]);
    }

    #[test]
    fn document_base_changes_resolution_not_page_protocol() {
        let mut s = session("https://example.com/blog/post");
        assert!(s.set_document_base("http://cdn.example.org/"));
        assert_eq!(s.base_url().as_str(), "http://cdn.example.org/");
        assert_eq!(
            s.process_url("a.mp4"),
            Normalized::Insecure("http://cdn.example.org/a.mp4".to_string())
        );
        assert_eq!(s.preview_count(), 0);
    }

    #[test]
    fn relative_document_base_joins_page_url() {
        let mut s = session("https://example.com/blog/post");
        assert!(s.set_document_base("/static/"));
        assert_eq!(
            s.process_url("clip.webm"),
            Normalized::Accepted("https://example.com/static/clip.webm".to_string())
        );
    }

    #[test]
    fn unusable_document_base_is_ignored() {
        let mut s = session("https://example.com/blog/post");
        assert!(!s.set_document_base("javascript:void(0)"));
        assert!(!s.set_document_base("ftp://files.example.com/"));
        assert_eq!(s.base_url(), s.page_url());
    }

    #[test]
    fn unregister_unknown_url_sends_nothing() {
        let mut s = session("https://example.com/");
        assert!(!s.unregister("https://cdn.test/never.mp4"));
        assert_eq!(s.badge().messages.len(), 1);
    }

    #[test]
    fn get_previews_reports_count_as_string() {
        let mut s = session("https://example.com/");
        s.process_url("a.mp3");
        s.process_url("b.mp3");
        let resp = s.handle_request(&BadgeRequest::GetPreviews);
        assert_eq!(resp.data, "2");
    }
}
