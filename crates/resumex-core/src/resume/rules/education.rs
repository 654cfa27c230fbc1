//! Degree tier and degree field extraction.

use tracing::debug;

use super::char_window;
use super::patterns::{DEGREE_TIERS, EDUCATION_SECTION, FIELD_KEYWORDS, FIELD_LABELED, TIER_FIELD};
use crate::models::candidate::Degree;

/// Extract the education tier and subject area from resume text.
pub fn extract_education(text: &str, education_window: usize) -> (Option<Degree>, Option<String>) {
    (extract_degree(text, education_window), extract_field(text))
}

/// Find the degree tier, preferring the text right after an education
/// section header and falling back to the whole document.
fn extract_degree(text: &str, window: usize) -> Option<Degree> {
    if let Some(header) = EDUCATION_SECTION.find(text) {
        let section = char_window(text, header.end(), window);
        if let Some(degree) = match_tier(section) {
            debug!("degree {} found in education section", degree);
            return Some(degree);
        }
    }
    match_tier(text)
}

fn match_tier(text: &str) -> Option<Degree> {
    DEGREE_TIERS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(degree, _)| *degree)
}

/// Extract the subject area: labeled patterns first, keyword
/// canonicalization as the fallback.
fn extract_field(text: &str) -> Option<String> {
    for pattern in [&*FIELD_LABELED, &*TIER_FIELD] {
        if let Some(caps) = pattern.captures(text) {
            let field = caps[1].trim();
            if field.len() >= 2 {
                return Some(field.to_string());
            }
        }
    }

    FIELD_KEYWORDS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(name, _)| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WINDOW: usize = 200;

    #[test]
    fn test_degree_in_education_section() {
        let text = "Skills: grading\n\nEducation:\nMaster of Arts, Seoul National University\n";
        let (degree, _) = extract_education(text, WINDOW);
        assert_eq!(degree, Some(Degree::Master));
    }

    #[test]
    fn test_degree_anywhere_without_section() {
        let text = "Holds a bachelor's degree and eight years in the classroom.";
        let (degree, _) = extract_education(text, WINDOW);
        assert_eq!(degree, Some(Degree::Bachelor));
    }

    #[test]
    fn test_tier_priority_order() {
        // Bachelor is checked before Master; the first matching tier wins.
        let text = "B.A. 2010, M.A. 2014";
        let (degree, _) = extract_education(text, WINDOW);
        assert_eq!(degree, Some(Degree::Bachelor));
    }

    #[test]
    fn test_phd_abbreviations() {
        let (degree, _) = extract_education("Ph.D. in Applied Linguistics", WINDOW);
        assert_eq!(degree, Some(Degree::Phd));
    }

    #[test]
    fn test_high_school() {
        let (degree, _) = extract_education("high school diploma, 2001", WINDOW);
        assert_eq!(degree, Some(Degree::HighSchool));
    }

    #[test]
    fn test_no_degree() {
        let (degree, _) = extract_education("ten years of sales work", WINDOW);
        assert_eq!(degree, None);
    }

    #[test]
    fn test_field_from_labeled_pattern() {
        let (_, field) = extract_education("Master's degree in English\n5 years teaching", WINDOW);
        assert_eq!(field.as_deref(), Some("English"));
    }

    #[test]
    fn test_field_terminated_by_from() {
        let (_, field) =
            extract_education("major in English Literature from Oxford University.", WINDOW);
        assert_eq!(field.as_deref(), Some("English Literature"));
    }

    #[test]
    fn test_field_keyword_fallback() {
        let (_, field) = extract_education("Focused on instructional design projects", WINDOW);
        assert_eq!(field.as_deref(), Some("Education"));
    }

    #[test]
    fn test_field_keyword_language_acquisition() {
        let (_, field) = extract_education("Research area: language acquisition", WINDOW);
        assert_eq!(field.as_deref(), Some("Linguistics"));
    }

    #[test]
    fn test_no_field() {
        let (_, field) = extract_education("warehouse operations supervisor", WINDOW);
        assert_eq!(field, None);
    }
}
