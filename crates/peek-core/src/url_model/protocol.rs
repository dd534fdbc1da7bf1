//! Mixed-content guard.

/// Lowercased scheme of `s` (text before the first `:`), if it looks like one.
fn scheme_of(s: &str) -> Option<String> {
    let (scheme, _) = s.trim().split_once(':')?;
    if scheme.is_empty()
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    Some(scheme.to_ascii_lowercase())
}

/// Normalizes a page protocol given as `"https:"` or `"https"`.
fn page_scheme(page_protocol: &str) -> Option<String> {
    let p = page_protocol.trim();
    let p = p.strip_suffix(':').unwrap_or(p);
    if p.is_empty() || p.contains(':') {
        return None;
    }
    Some(p.to_ascii_lowercase())
}

/// True if a resource at `resource_url` may be embedded in a page served over
/// `page_protocol` without triggering mixed-content blocking.
///
/// HTTPS resources are always fine; HTTP resources only on HTTP pages.
/// Anything without a recognizable scheme on either side is rejected.
pub fn is_embeddable(resource_url: &str, page_protocol: &str) -> bool {
    let (Some(resource), Some(page)) = (scheme_of(resource_url), page_scheme(page_protocol)) else {
        return false;
    };
    match resource.as_str() {
        "https" => page == "http" || page == "https",
        "http" => page == "http",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_resource_always_accepted() {
        assert!(is_embeddable("https://cdn.test/a.mp4", "https:"));
        assert!(is_embeddable("https://cdn.test/a.mp4", "http:"));
        assert!(is_embeddable("HTTPS://cdn.test/a.mp4", "https"));
    }

    #[test]
    fn http_resource_only_on_http_page() {
        assert!(is_embeddable("http://cdn.test/a.mp4", "http:"));
        assert!(!is_embeddable("http://cdn.test/a.mp4", "https:"));
    }

    #[test]
    fn https_in_query_does_not_count() {
        assert!(!is_embeddable(
            "http://cdn.test/a.mp4?next=https://other.test",
            "https:"
        ));
    }

    #[test]
    fn missing_scheme_rejected() {
        assert!(!is_embeddable("//cdn.test/a.mp4", "https:"));
        assert!(!is_embeddable("cdn.test/a.mp4", "https:"));
        assert!(!is_embeddable("https://cdn.test/a.mp4", ""));
        assert!(!is_embeddable("", "http:"));
    }

    #[test]
    fn other_schemes_rejected() {
        assert!(!is_embeddable("ftp://cdn.test/a.mp4", "http:"));
        assert!(!is_embeddable("https://cdn.test/a.mp4", "file:"));
    }
}
