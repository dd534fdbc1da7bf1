//! Badge messaging: the toolbar indicator shows how many previews a page has.
//!
//! Messages keep the extension wire shape (`{"method": ..., "key": ...}`) so a
//! host process can forward them unchanged.

use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BadgeMethod {
    /// Sent once when a page session starts.
    ResetIcon,
    /// Registry length changed.
    ChangeIcon,
}

/// Outbound notification to the badge owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeMessage {
    pub method: BadgeMethod,
    /// Registry length as a decimal string; empty for `resetIcon`.
    pub key: String,
}

impl BadgeMessage {
    pub fn reset() -> Self {
        Self {
            method: BadgeMethod::ResetIcon,
            key: String::new(),
        }
    }

    pub fn change(count: usize) -> Self {
        Self {
            method: BadgeMethod::ChangeIcon,
            key: count.to_string(),
        }
    }
}

/// Inbound query from the badge owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum BadgeRequest {
    GetPreviews,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeResponse {
    pub data: String,
}

/// Receiver of badge notifications.
pub trait BadgeChannel {
    fn send(&mut self, message: BadgeMessage);
}

/// Drops every message.
#[derive(Debug, Default)]
pub struct NullBadge;

impl BadgeChannel for NullBadge {
    fn send(&mut self, _message: BadgeMessage) {}
}

/// Keeps every message in order.
#[derive(Debug, Default)]
pub struct RecordingBadge {
    pub messages: Vec<BadgeMessage>,
}

impl BadgeChannel for RecordingBadge {
    fn send(&mut self, message: BadgeMessage) {
        self.messages.push(message);
    }
}

impl<C: BadgeChannel + ?Sized> BadgeChannel for &mut C {
    fn send(&mut self, message: BadgeMessage) {
        (**self).send(message)
    }
}

/// Writes each message as one JSON line.
pub struct JsonLinesBadge<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesBadge<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BadgeChannel for JsonLinesBadge<W> {
    fn send(&mut self, message: BadgeMessage) {
        let res = serde_json::to_writer(&mut self.out, &message)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = res {
            tracing::warn!("failed to write badge message {:?}: {}", message, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_icon_wire_shape() {
        let json = serde_json::to_string(&BadgeMessage::change(3)).unwrap();
        assert_eq!(json, r#"{"method":"changeIcon","key":"3"}"#);
    }

    #[test]
    fn reset_icon_wire_shape() {
        let json = serde_json::to_string(&BadgeMessage::reset()).unwrap();
        assert_eq!(json, r#"{"method":"resetIcon","key":""}"#);
        let parsed: BadgeMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, BadgeMessage::reset());
    }

    #[test]
    fn get_previews_request_parses() {
        let req: BadgeRequest = serde_json::from_str(r#"{"method":"getPreviews"}"#).unwrap();
        assert_eq!(req, BadgeRequest::GetPreviews);
    }

    #[test]
    fn json_lines_badge_writes_one_line_per_message() {
        let mut badge = JsonLinesBadge::new(Vec::new());
        badge.send(BadgeMessage::reset());
        badge.send(BadgeMessage::change(1));
        let out = String::from_utf8(badge.into_inner()).unwrap();
        assert_eq!(
            out,
            "{\"method\":\"resetIcon\",\"key\":\"\"}\n{\"method\":\"changeIcon\",\"key\":\"1\"}\n"
        );
    }
}
