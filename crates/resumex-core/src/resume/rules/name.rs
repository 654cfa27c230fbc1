//! Candidate name extraction.
//!
//! Strategies run in priority order and stop at the first plausible result.
//! Every candidate, from every strategy, must be longer than 3 characters
//! and split into at least two tokens; failures fall through to the next
//! pattern in the chain.

use std::path::Path;
use tracing::debug;

use super::char_window;
use super::patterns::{
    CANDIDATE_LABEL, CAPITALIZED_RUN, GENERATED_FILENAME, NAME_BEFORE_CONTACT, NAME_LABEL,
    NAME_LINE, NAME_SHAPE, PERSONAL_SECTION, RESUME_OF, RESUME_PREFIX,
};
use crate::models::config::ExtractionConfig;

/// Section-header vocabulary that disqualifies a capitalized run from being
/// read as a name in the last-resort scan.
const HEADER_VOCAB: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "education",
    "contact",
    "profile",
    "experience",
    "objective",
    "summary",
    "university",
    "college",
];

struct NameContext<'a> {
    text: &'a str,
    head: String,
    file_stem: Option<&'a str>,
    email: Option<&'a str>,
    config: &'a ExtractionConfig,
}

type Strategy = for<'a> fn(&NameContext<'a>) -> Option<String>;

/// Extract the candidate's name from resume text, optionally using the
/// originating file name as the highest-priority hint.
pub fn extract_name(
    text: &str,
    file_path: Option<&Path>,
    email: Option<&str>,
    config: &ExtractionConfig,
) -> Option<String> {
    let head = text
        .lines()
        .take(config.max_name_scan_lines)
        .collect::<Vec<_>>()
        .join("\n");
    let file_stem = file_path
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str());

    let ctx = NameContext {
        text,
        head,
        file_stem,
        email,
        config,
    };

    const STRATEGIES: &[(&str, Strategy)] = &[
        ("filename", from_filename),
        ("personal-section", from_personal_section),
        ("document-head", from_document_head),
        ("full-document", from_full_document),
        ("leading-capitals", from_leading_capitals),
    ];

    for (label, strategy) in STRATEGIES {
        if let Some(name) = strategy(&ctx) {
            debug!("name extracted via {} strategy", label);
            return Some(name);
        }
    }
    None
}

/// Validate and title-case a raw candidate.
fn accept(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.len() <= 3 {
        return None;
    }
    if trimmed.contains('@') || trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }
    Some(
        tokens
            .iter()
            .map(|t| title_case(t))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Parse a name out of the file name, unless it looks auto-generated.
fn from_filename(ctx: &NameContext) -> Option<String> {
    let stem = ctx.file_stem?;
    if GENERATED_FILENAME.is_match(stem) {
        debug!("file name {:?} looks auto-generated, skipping", stem);
        return None;
    }
    let stripped = RESUME_PREFIX.replace(stem, "");
    let spaced = split_camel_case(&stripped).replace(['_', '-'], " ");
    accept(&spaced)
}

fn split_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = c.is_lowercase();
        out.push(c);
    }
    out
}

/// Look for a name label shortly after a personal-information header.
fn from_personal_section(ctx: &NameContext) -> Option<String> {
    let header = PERSONAL_SECTION.find(ctx.text)?;
    let window = char_window(ctx.text, header.end(), ctx.config.section_window);
    let caps = NAME_LABEL.captures(window)?;
    accept(&caps[1])
}

fn from_document_head(ctx: &NameContext) -> Option<String> {
    scan_patterns(&ctx.head, ctx.email)
}

fn from_full_document(ctx: &NameContext) -> Option<String> {
    scan_patterns(ctx.text, ctx.email)
}

/// The shared pattern sequence used for both the document head and the full
/// document. Each pattern's first match is validated; failures continue the
/// chain.
fn scan_patterns(text: &str, email: Option<&str>) -> Option<String> {
    if let Some(caps) = RESUME_OF.captures(text) {
        if let Some(name) = accept(&caps[1]) {
            return Some(name);
        }
    }
    for label in [&*NAME_LABEL, &*CANDIDATE_LABEL] {
        if let Some(caps) = label.captures(text) {
            if let Some(name) = accept(&caps[1]) {
                return Some(name);
            }
        }
    }
    if let Some(caps) = NAME_LINE.captures(text) {
        if let Some(name) = accept(&caps[1]) {
            return Some(name);
        }
    }
    if let Some(caps) = NAME_BEFORE_CONTACT.captures(text) {
        if let Some(name) = accept(&caps[1]) {
            return Some(name);
        }
    }
    if let Some(caps) = NAME_SHAPE.captures(text) {
        if let Some(name) = accept(&caps[1]) {
            return Some(name);
        }
    }
    if let Some(email) = email {
        if let Some(name) = near_email(text, email) {
            return Some(name);
        }
    }
    None
}

/// Look for a capitalized run directly before or after the extracted email.
fn near_email(text: &str, email: &str) -> Option<String> {
    let idx = text.find(email)?;

    let before = &text[..idx];
    let start = before
        .char_indices()
        .rev()
        .take(60)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0);
    if let Some(caps) = CAPITALIZED_RUN.captures_iter(&before[start..]).last() {
        if let Some(name) = accept(&caps[1]) {
            return Some(name);
        }
    }

    let after = &text[idx + email.len()..];
    let after_window = char_window(after, 0, 60);
    if let Some(caps) = CAPITALIZED_RUN.captures(after_window) {
        if let Some(name) = accept(&caps[1]) {
            return Some(name);
        }
    }

    None
}

/// Last resort: scan the leading characters for any multi-token capitalized
/// run, preferring ones free of section-header vocabulary.
fn from_leading_capitals(ctx: &NameContext) -> Option<String> {
    let window = char_window(ctx.text, 0, ctx.config.name_scan_window);
    let runs: Vec<&str> = CAPITALIZED_RUN
        .captures_iter(window)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    for run in runs.iter().filter(|r| !contains_header_vocab(r)) {
        if let Some(name) = accept(run) {
            return Some(name);
        }
    }
    // Filtering eliminated everything; fall back to the raw matches.
    for run in &runs {
        if let Some(name) = accept(run) {
            return Some(name);
        }
    }
    None
}

fn contains_header_vocab(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    HEADER_VOCAB.iter().any(|w| lower.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str, path: Option<&str>) -> Option<String> {
        let config = ExtractionConfig::default();
        extract_name(text, path.map(Path::new), None, &config)
    }

    #[test]
    fn test_name_from_filename() {
        assert_eq!(
            extract("irrelevant body", Some("/uploads/Resume_Jane_Doe.pdf")),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_name_from_camel_case_filename() {
        assert_eq!(
            extract("irrelevant body", Some("JohnSmith.docx")),
            Some("John Smith".to_string())
        );
    }

    #[test]
    fn test_generated_filename_skipped() {
        let text = "Name: Alice Brown\nalice@example.com";
        assert_eq!(
            extract(text, Some("/tmp/Resume202504170332.pdf")),
            Some("Alice Brown".to_string())
        );
    }

    #[test]
    fn test_name_label() {
        assert_eq!(
            extract("Full Name: John Q. Smith\nPhone: 555-123-4567", None),
            Some("John Q. Smith".to_string())
        );
    }

    #[test]
    fn test_personal_section_label() {
        let text = "Summary of qualifications\n\nPersonal Information\nName: Maria Garcia\nSeoul";
        assert_eq!(extract(text, None), Some("Maria Garcia".to_string()));
    }

    #[test]
    fn test_resume_of() {
        assert_eq!(
            extract("Curriculum Vitae of Peter Parker\n...", None),
            Some("Peter Parker".to_string())
        );
    }

    #[test]
    fn test_lone_capitalized_line() {
        let text = "Jane Ellen Doe\n\nTeaching professional with broad experience";
        assert_eq!(extract(text, None), Some("Jane Ellen Doe".to_string()));
    }

    #[test]
    fn test_single_token_rejected() {
        // "Jane" alone never qualifies; chain keeps going and finds nothing.
        assert_eq!(extract("Jane\n\nteaching since forever", None), None);
    }

    #[test]
    fn test_uppercase_name_retitled() {
        let text = "Name: JOHN SMITH\njohn@example.com";
        assert_eq!(extract(text, None), Some("John Smith".to_string()));
    }

    #[test]
    fn test_leading_capitals_filters_header_vocab() {
        // No labels, no lone capitalized line, no mixed-case word pairs; the
        // all-caps runs only qualify for the last-resort scan, where the
        // first run carries header vocabulary and must be skipped.
        let text = "UNIVERSITY GRADUATE, DAVID CHEN, TEFL CERTIFIED, 2024 intake";
        assert_eq!(extract(text, None), Some("David Chen".to_string()));
    }
}
