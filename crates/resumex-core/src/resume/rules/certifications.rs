//! Teaching certification extraction.

use super::patterns::CERT_PATTERNS;

/// Fallback summary used when a certification keyword matched but no
/// surrounding context could be captured.
pub const CERT_FALLBACK: &str = "TEFL/TESOL/CELTA certification mentioned";

/// Extract certification mentions.
///
/// Returns `None` when nothing matched; otherwise the `"; "`-joined context
/// snippets (up to 50 characters around each match), or [`CERT_FALLBACK`]
/// if no usable context was found. `Some(_)` implies the candidate has
/// certifications.
pub fn extract_certifications(text: &str) -> Option<String> {
    let mut snippets: Vec<String> = Vec::new();
    let mut matched = false;

    for pattern in CERT_PATTERNS.iter() {
        if let Some(found) = pattern.find(text) {
            matched = true;
            if let Some(snippet) = context_snippet(text, found.start(), found.end()) {
                if !snippets.contains(&snippet) {
                    snippets.push(snippet);
                }
            }
        }
    }

    if !matched {
        None
    } else if snippets.is_empty() {
        Some(CERT_FALLBACK.to_string())
    } else {
        Some(snippets.join("; "))
    }
}

/// Up to 50 characters of context centered on a match, whitespace-collapsed.
fn context_snippet(text: &str, start: usize, end: usize) -> Option<String> {
    let mut snip_start = start.saturating_sub(25);
    while !text.is_char_boundary(snip_start) {
        snip_start -= 1;
    }
    let mut snip_end = (end + 25).min(text.len());
    while !text.is_char_boundary(snip_end) {
        snip_end -= 1;
    }

    let snippet = text[snip_start..snip_end]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if snippet.is_empty() {
        None
    } else {
        Some(snippet)
    }
}
