//! Link categories and the href patterns that select them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkCategory {
    Video,
    Audio,
    Document,
    Pdf,
    HostedViewer,
}

/// How a category recognizes an href.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefPattern {
    Suffix(&'static str),
    Prefix(&'static str),
}

impl HrefPattern {
    pub fn matches(&self, href: &str) -> bool {
        match self {
            HrefPattern::Suffix(s) => href.ends_with(s),
            HrefPattern::Prefix(p) => href.starts_with(p),
        }
    }

    /// CSS attribute selector for anchors matching this pattern.
    pub fn selector(&self) -> String {
        match self {
            HrefPattern::Suffix(s) => format!("a[href$=\"{s}\"]"),
            HrefPattern::Prefix(p) => format!("a[href^=\"{p}\"]"),
        }
    }
}

use HrefPattern::{Prefix, Suffix};

const VIDEO: &[HrefPattern] = &[
    Suffix(".webm"),
    Suffix(".mp4"),
    Suffix(".m4v"),
    Suffix(".ogg"),
    Suffix(".ogv"),
];

const AUDIO: &[HrefPattern] = &[
    Suffix(".mp3"),
    Suffix(".m4a"),
    Suffix(".oga"),
    Suffix(".wav"),
];

const DOCUMENT: &[HrefPattern] = &[
    Suffix(".doc"),
    Suffix(".docx"),
    Suffix(".xls"),
    Suffix(".xlsx"),
    Suffix(".ppt"),
    Suffix(".pptx"),
    Suffix(".rtf"),
];

const PDF: &[HrefPattern] = &[Suffix(".pdf")];

const HOSTED_VIEWER: &[HrefPattern] = &[
    Prefix("https://docs.google.com/d"),
    Prefix("https://drive.google.com/open"),
];

impl LinkCategory {
    /// Scan order: every video link is handled before any audio link, and so on.
    pub const ALL: [LinkCategory; 5] = [
        LinkCategory::Video,
        LinkCategory::Audio,
        LinkCategory::Document,
        LinkCategory::Pdf,
        LinkCategory::HostedViewer,
    ];

    pub fn patterns(self) -> &'static [HrefPattern] {
        match self {
            LinkCategory::Video => VIDEO,
            LinkCategory::Audio => AUDIO,
            LinkCategory::Document => DOCUMENT,
            LinkCategory::Pdf => PDF,
            LinkCategory::HostedViewer => HOSTED_VIEWER,
        }
    }

    /// Comma-joined selector list for this category's anchors.
    pub fn selector_list(self) -> String {
        self.patterns()
            .iter()
            .map(HrefPattern::selector)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn matches(self, href: &str) -> bool {
        self.patterns().iter().any(|p| p.matches(href))
    }

    /// Word used in log lines ("Found video link: ...").
    pub fn label(self) -> &'static str {
        match self {
            LinkCategory::Video => "video",
            LinkCategory::Audio => "audio",
            LinkCategory::Document => "document",
            LinkCategory::Pdf => "PDF",
            LinkCategory::HostedViewer => "Google Docs",
        }
    }
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkCategory::Video => "video",
            LinkCategory::Audio => "audio",
            LinkCategory::Document => "document",
            LinkCategory::Pdf => "pdf",
            LinkCategory::HostedViewer => "hosted_viewer",
        };
        f.write_str(s)
    }
}

/// First category (in scan order) whose patterns match the raw href.
pub fn classify_href(href: &str) -> Option<LinkCategory> {
    LinkCategory::ALL.into_iter().find(|c| c.matches(href))
}

/// Every category whose patterns match the raw href, in scan order.
///
/// A page scan visits the same anchor once per category listed here.
pub fn matching_categories(href: &str) -> Vec<LinkCategory> {
    LinkCategory::ALL
        .into_iter()
        .filter(|c| c.matches(href))
        .collect()
}
