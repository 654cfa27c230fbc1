//! Native-speaker and military-background flags.
//!
//! Both flags are true-or-absent: a matching declaration yields
//! `Some(true)`, anything else yields `None`. Downstream consumers rely on
//! the absence of the field, so these never produce `Some(false)`.

use super::patterns::{MILITARY_PATTERNS, NATIVE_SPEAKER_PATTERNS};

/// True if a native-English-speaker declaration appears in the text.
pub fn native_english_speaker(text: &str) -> Option<bool> {
    NATIVE_SPEAKER_PATTERNS
        .iter()
        .any(|p| p.is_match(text))
        .then_some(true)
}

/// True if a military-service pattern appears in the text.
pub fn military_experience(text: &str) -> Option<bool> {
    MILITARY_PATTERNS
        .iter()
        .any(|p| p.is_match(text))
        .then_some(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_native_speaker_declarations() {
        assert_eq!(native_english_speaker("Native English speaker"), Some(true));
        assert_eq!(native_english_speaker("english mother tongue"), Some(true));
        assert_eq!(native_english_speaker("First language: English"), Some(true));
        assert_eq!(native_english_speaker("L1: English, L2: Korean"), Some(true));
    }

    #[test]
    fn test_native_speaker_absent_not_false() {
        assert_eq!(native_english_speaker("fluent in English"), None);
    }

    #[test]
    fn test_military_patterns() {
        assert_eq!(military_experience("U.S. Army veteran"), Some(true));
        assert_eq!(military_experience("served in the Korean military"), Some(true));
        assert_eq!(military_experience("Air Force, 2009-2013"), Some(true));
    }

    #[test]
    fn test_military_absent_not_false() {
        assert_eq!(military_experience("taught at a naval history museum"), None);
    }
}
