//! Phone number extraction.
//!
//! A labeled value ("Phone: ...") always takes precedence over unlabeled
//! phone-shaped substrings. Unlabeled shapes are tried in a fixed order,
//! each filtered for digit plausibility before the first survivor wins.

use super::patterns::{PHONE_LABELED, PHONE_SHAPES};

/// Extract the first plausible phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    if let Some(caps) = PHONE_LABELED.captures(text) {
        let raw = caps.get(1).unwrap().as_str();
        if plausible(raw) {
            return Some(normalize(raw));
        }
    }

    for pattern in PHONE_SHAPES.iter() {
        for m in pattern.find_iter(text) {
            if plausible(m.as_str()) {
                return Some(normalize(m.as_str()));
            }
        }
    }

    None
}

/// Reject candidates with too few digits or degenerate digit runs.
fn plausible(candidate: &str) -> bool {
    let digits: Vec<char> = candidate.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 7 {
        return false;
    }
    !(digits.iter().all(|&c| c == '0') || digits.iter().all(|&c| c == '1'))
}

/// Trim, collapse internal whitespace, and strip stray separators from the
/// ends of a matched phone string.
fn normalize(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| matches!(c, '-' | '.' | ',' | ';' | ':' | '/'))
        .trim()
        .to_string()
}
