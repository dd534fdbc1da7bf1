//! Office documents and PDFs.

use super::PreviewDescriptor;
use crate::config::PopupConfig;
use crate::url_model::escape_attr;

/// Office documents are detected and registered but have no viewer yet.
pub fn document_preview(_url: &str, _popup: &PopupConfig) -> Option<PreviewDescriptor> {
    None
}

/// PDF rendered by the browser's own viewer with its toolbar hidden.
pub fn pdf_preview(url: &str, popup: &PopupConfig) -> PreviewDescriptor {
    let viewer = format!("<embed src=\"{}#toolbar=0\">", escape_attr(url));
    PreviewDescriptor::embed(viewer, popup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewContent;

    #[test]
    fn pdf_embed_hides_toolbar() {
        let p = pdf_preview("https://a.test/paper.pdf", &PopupConfig::default());
        assert_eq!(
            p.content,
            PreviewContent::Html("<embed src=\"https://a.test/paper.pdf#toolbar=0\">".to_string())
        );
        assert!(p.interactive);
        assert_eq!(p.on_show, None);
    }

    #[test]
    fn documents_have_no_preview() {
        assert!(document_preview("https://a.test/report.docx", &PopupConfig::default()).is_none());
    }
}
