//! Preview descriptors: what the popup shows and how it behaves.
//!
//! Builders are pure functions of a normalized URL and the popup settings.
//! Whatever renders the popup interprets the descriptor, including the
//! optional [`MountAction`] to run once the popup content is mounted.

mod document;
mod hosted;
mod media;

pub use document::{document_preview, pdf_preview};
pub use hosted::{extract_file_id, hosted_viewer_preview, viewer_url, IdExtraction, LinkShape};
pub use media::{audio_preview, video_preview};

use serde::Serialize;

use crate::config::PopupConfig;

pub const INSECURE_MESSAGE: &str =
    "Peek cannot preview this link because it is served over an insecure connection.";

/// Restrictions applied to every inline player.
pub(crate) const PLAYER_CONTROLS_LIST: &str = "nodownload nofullscreen noremoteplayback";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PreviewContent {
    Text(String),
    Html(String),
}

/// Side effect to perform after the popup content is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MountAction {
    /// Find `selector` inside the popup and start playback.
    PlayMedia { selector: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewDescriptor {
    pub content: PreviewContent,
    pub interactive: bool,
    pub arrow: bool,
    pub theme: Option<String>,
    /// `[show_ms, hide_ms]`
    pub delay: [u64; 2],
    pub on_show: Option<MountAction>,
}

impl PreviewDescriptor {
    /// Interactive, themed popup holding an embeddable HTML fragment.
    pub fn embed(html: String, popup: &PopupConfig) -> Self {
        Self {
            content: PreviewContent::Html(html),
            interactive: true,
            arrow: true,
            theme: Some(popup.theme.clone()),
            delay: [popup.show_delay_ms, popup.hide_delay_ms],
            on_show: None,
        }
    }

    pub fn with_on_show(mut self, action: MountAction) -> Self {
        self.on_show = Some(action);
        self
    }
}

/// Popup explaining that a mixed-content link cannot be previewed.
pub fn insecure_preview(popup: &PopupConfig) -> PreviewDescriptor {
    PreviewDescriptor {
        content: PreviewContent::Text(INSECURE_MESSAGE.to_string()),
        interactive: false,
        arrow: true,
        theme: None,
        delay: [popup.show_delay_ms, popup.hide_delay_ms],
        on_show: None,
    }
}
