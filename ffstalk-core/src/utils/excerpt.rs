//! One-line summaries of upstream bodies for error logs.
//!
//! When the upstream is down its CDN answers with a full HTML error page
//! instead of JSON. Logging that page verbatim buries the one useful line,
//! so HTML bodies are reduced to their `<title>` and everything else is
//! flattened onto a single line and clipped.

/// Longest excerpt, in chars, before clipping.
const EXCERPT_CHARS: usize = 200;

/// Summarize `body` for a log line.
pub fn body_excerpt(body: &str) -> String {
    let trimmed = body.trim_start();
    if trimmed.starts_with('<') {
        if let Some(title) = html_title(trimmed) {
            return format!("HTML page \"{title}\" ({} bytes)", body.len());
        }
    }

    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_CHARS {
        return flat;
    }
    let clipped: String = flat.chars().take(EXCERPT_CHARS).collect();
    format!("{clipped}… ({} bytes)", body.len())
}

/// Text of the first non-empty `<title>` element.
fn html_title(html: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets valid for `html`
    let lower = html.to_ascii_lowercase();
    let open = lower.find("<title")?;
    let text_start = open + lower[open..].find('>')? + 1;
    let text_end = text_start + lower[text_start..].find("</title>")?;
    Some(html[text_start..text_end].trim()).filter(|title| !title.is_empty())
}
