//! Inline video and audio players.

use super::{MountAction, PreviewDescriptor, PLAYER_CONTROLS_LIST};
use crate::config::PopupConfig;
use crate::url_model::escape_attr;

/// Muted video player that starts playing once the popup is shown.
pub fn video_preview(url: &str, popup: &PopupConfig) -> PreviewDescriptor {
    let player = format!(
        "<video controls muted controlsList=\"{PLAYER_CONTROLS_LIST}\"><source src=\"{}\"></video>",
        escape_attr(url)
    );
    PreviewDescriptor::embed(player, popup).with_on_show(MountAction::PlayMedia {
        selector: "video".to_string(),
    })
}

pub fn audio_preview(url: &str, popup: &PopupConfig) -> PreviewDescriptor {
    let player = format!(
        "<audio controls controlsList=\"{PLAYER_CONTROLS_LIST}\"><source src=\"{}\"></audio>",
        escape_attr(url)
    );
    PreviewDescriptor::embed(player, popup)
}
