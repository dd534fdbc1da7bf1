//! Google Docs / Drive links: recover the file id and embed the public viewer.

use super::PreviewDescriptor;
use crate::config::PopupConfig;
use crate::url_model::escape_attr;
use serde::Serialize;

/// Id yielded by mis-matched search-result links; never a real file id.
const FALSE_POSITIVE_ID: &str = "ht";

/// Known Google Docs URL layouts, in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkShape {
    /// `.../d/<id>/edit`
    Edit,
    /// `.../open?id=<id>`
    Open,
    /// `.../document/d/<id>/preview`
    Preview,
    /// `.../viewer?srcid=<id>&...`
    Viewer,
    /// `.../d/<id>/viewform`
    Form,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum IdExtraction {
    Found { shape: LinkShape, id: String },
    /// The link only looked like a hosted document.
    Unrecognized,
}

struct ShapeRule {
    shape: LinkShape,
    matches: fn(&str) -> bool,
    extract: fn(&str) -> Option<&str>,
}

const SHAPES: [ShapeRule; 5] = [
    ShapeRule {
        shape: LinkShape::Edit,
        matches: has_edit,
        extract: edit_id,
    },
    ShapeRule {
        shape: LinkShape::Open,
        matches: has_open,
        extract: open_id,
    },
    ShapeRule {
        shape: LinkShape::Preview,
        matches: has_preview,
        extract: preview_id,
    },
    ShapeRule {
        shape: LinkShape::Viewer,
        matches: has_viewer,
        extract: viewer_id,
    },
    ShapeRule {
        shape: LinkShape::Form,
        matches: any_url,
        extract: form_id,
    },
];

fn has_edit(url: &str) -> bool {
    url.contains("/edit")
}

fn has_open(url: &str) -> bool {
    url.contains("/open")
}

fn has_preview(url: &str) -> bool {
    url.contains("/preview")
}

fn has_viewer(url: &str) -> bool {
    url.contains("/viewer")
}

fn any_url(_url: &str) -> bool {
    true
}

fn edit_id(url: &str) -> Option<&str> {
    between_last(url, "/d/", "/edit")
}

fn preview_id(url: &str) -> Option<&str> {
    between_last(url, "/document/d/", "/preview")
}

fn viewer_id(url: &str) -> Option<&str> {
    between_last(url, "srcid=", "&")
}

fn form_id(url: &str) -> Option<&str> {
    between_last(url, "/d/", "/viewform")
}

/// Text between the last `start` marker and the last `end` marker.
fn between_last<'a>(url: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = url.rfind(start)? + start.len();
    let to = url.rfind(end)?;
    if from > to {
        return None;
    }
    url.get(from..to)
}

/// `open?id=<id>` runs to the next parameter or fragment.
fn open_id(url: &str) -> Option<&str> {
    const MARKER: &str = "/open?id=";
    let from = url.rfind(MARKER)? + MARKER.len();
    let rest = url.get(from..)?;
    let len = rest.find(['&', '#']).unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Finds the file id in a Google Docs / Drive URL.
///
/// Only the first shape whose marker appears in the URL is tried; if its
/// boundaries are missing the link is [`IdExtraction::Unrecognized`].
pub fn extract_file_id(url: &str) -> IdExtraction {
    let Some(rule) = SHAPES.iter().find(|r| (r.matches)(url)) else {
        return IdExtraction::Unrecognized;
    };
    match (rule.extract)(url) {
        Some(id) if !id.is_empty() && id != FALSE_POSITIVE_ID => IdExtraction::Found {
            shape: rule.shape,
            id: id.to_string(),
        },
        _ => IdExtraction::Unrecognized,
    }
}

pub fn viewer_url(id: &str) -> String {
    format!(
        "https://docs.google.com/viewer?srcid={id}&pid=explorer&efh=false&a=v&chrome=false&embedded=true"
    )
}

pub fn hosted_viewer_preview(id: &str, popup: &PopupConfig) -> PreviewDescriptor {
    let viewer = format!("<embed src=\"{}\">", escape_attr(&viewer_url(id)));
    PreviewDescriptor::embed(viewer, popup)
}
