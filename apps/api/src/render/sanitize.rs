//! Output escaping for generated documents.
//!
//! Three contexts, three functions:
//! - text content → `sanitize` (angle brackets only; everything else verbatim)
//! - attribute values → `escape_attr`, or `safe_url` for `href` / `src`
//! - CSS values → `css_color`
//!
//! Every user-supplied string that reaches a template goes through exactly
//! one of these. Templates never interpolate raw record fields.

/// Accent used when a theme color cannot be safely interpolated into CSS.
pub const DEFAULT_ACCENT: &str = "#22d3ee";

/// Escapes `<` and `>` so text content cannot open tags. Ampersands and quotes
/// are left alone: entity sequences typed by the user render as entities.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a value for use inside a double- or single-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Allow-lists the URL scheme and attribute-escapes the result.
///
/// Accepted: `http:`, `https:`, `mailto:`, scheme-less relative paths and fragments,
/// and `data:image/...` URIs (uploaded avatars and project images). Anything else
/// becomes `#`. The URL is not otherwise validated.
pub fn safe_url(url: &str) -> String {
    let trimmed = url.trim();
    if is_allowed_url(trimmed) {
        escape_attr(trimmed)
    } else {
        "#".to_string()
    }
}

fn is_allowed_url(url: &str) -> bool {
    // Browsers drop ASCII whitespace and control chars inside the scheme ("java\tscript:").
    let compact: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();

    let scheme_end = compact.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(idx) if compact.as_bytes()[idx] == b':' => {
            let scheme = &compact[..idx];
            match scheme {
                "http" | "https" | "mailto" => true,
                "data" => compact[idx + 1..].starts_with("image/"),
                _ => false,
            }
        }
        // No scheme: relative path, query or fragment.
        _ => true,
    }
}

/// Returns `color` if it only contains characters valid in a CSS color value,
/// otherwise [`DEFAULT_ACCENT`].
pub fn css_color(color: &str) -> String {
    let trimmed = color.trim();
    let safe = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' '));
    if safe {
        trimmed.to_string()
    } else {
        DEFAULT_ACCENT.to_string()
    }
}
