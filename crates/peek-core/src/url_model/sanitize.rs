//! Href sanitization before any URL handling.

/// Schemes that never produce a renderable resource.
const REFUSED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Sanitizes a raw `href` attribute value for safe use as a URL.
///
/// - Trims leading/trailing ASCII whitespace
/// - Removes control characters (tabs and newlines included), as URL parsers do
/// - Refuses empty results and script/data schemes
pub fn sanitize_href(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .chars()
        .filter(|c| !c.is_control())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let lower = cleaned.to_ascii_lowercase();
    if REFUSED_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return None;
    }

    Some(cleaned)
}

/// Escapes a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
