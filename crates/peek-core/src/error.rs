//! Library error type for scanning a page.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid page URL {url:?}: {source}")]
    InvalidPageUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Previews only make sense for pages served over http or https.
    #[error("page URL must use http or https, got scheme {0:?}")]
    UnsupportedPageScheme(String),

    #[error("invalid anchor selector {selector:?}: {message}")]
    Selector { selector: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ScanError::UnsupportedPageScheme("file".to_string());
        assert_eq!(
            err.to_string(),
            "page URL must use http or https, got scheme \"file\""
        );

        let source = url::Url::parse("not a url").unwrap_err();
        let err = ScanError::InvalidPageUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid page URL \"not a url\""));
    }
}
