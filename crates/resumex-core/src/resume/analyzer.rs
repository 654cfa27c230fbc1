//! Heuristic resume analyzer combining the per-field rule extractors.

use std::path::Path;

use tracing::debug;

use super::rules;
use super::CandidateExtractor;
use crate::models::candidate::CandidateInfo;
use crate::models::config::ExtractionConfig;

/// Deterministic, regex-driven candidate extractor.
///
/// Pure and total: any text in, a (possibly sparse) [`CandidateInfo`] out.
/// Fields whose patterns found nothing are simply absent.
pub struct HeuristicAnalyzer {
    config: ExtractionConfig,
}

impl HeuristicAnalyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Create an analyzer with explicit extraction settings.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Run every field extractor over the text and assemble the record.
    pub fn analyze(&self, text: &str, file_path: Option<&Path>) -> CandidateInfo {
        // Whitespace-collapsed copy for flat pattern matching; the original
        // text keeps its line structure for the line-oriented strategies.
        let normalized = normalize_whitespace(text);
        let lowercase = text.to_lowercase();

        let email = rules::extract_email(&normalized);
        let phone = rules::extract_phone(&normalized);
        let name = rules::extract_name(text, file_path, email.as_deref(), &self.config);
        let (degree, degree_field) = rules::extract_education(text, self.config.education_window);
        let years_experience = rules::extract_years(&normalized, self.config.max_years);
        let certifications = rules::extract_certifications(text);
        let native_english_speaker = rules::native_english_speaker(&lowercase);
        let military_experience = rules::military_experience(&lowercase);

        debug!(
            "heuristic extraction: name={} email={} phone={} degree={}",
            name.is_some(),
            email.is_some(),
            phone.is_some(),
            degree.is_some(),
        );

        CandidateInfo {
            has_certifications: certifications.is_some(),
            certifications,
            name,
            email,
            phone,
            degree,
            degree_field,
            years_experience,
            native_english_speaker,
            military_experience,
            ..Default::default()
        }
    }
}

impl Default for HeuristicAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateExtractor for HeuristicAnalyzer {
    fn extract_from_text(&self, text: &str) -> CandidateInfo {
        self.analyze(text, None)
    }

    fn extract_with_path(&self, text: &str, path: &Path) -> CandidateInfo {
        self.analyze(text, Some(path))
    }
}

/// Collapse whitespace runs to single spaces and trim.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::Degree;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = "Name: John Q. Smith\n\
                           Email: john@x.com\n\
                           Phone: (555) 123-4567\n\
                           Master's degree in English\n\
                           5 years of teaching experience\n\
                           TEFL certified\n\
                           Native English speaker\n\
                           U.S. Army veteran";

    #[test]
    fn test_full_fixture() {
        let analyzer = HeuristicAnalyzer::new();
        let info = analyzer.analyze(FIXTURE, None);

        assert_eq!(info.name.as_deref(), Some("John Q. Smith"));
        assert_eq!(info.email.as_deref(), Some("john@x.com"));
        assert_eq!(info.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(info.degree, Some(Degree::Master));
        assert_eq!(info.degree_field.as_deref(), Some("English"));
        assert_eq!(info.years_experience, Some(5));
        assert!(info.has_certifications);
        assert!(info.certifications.is_some());
        assert_eq!(info.native_english_speaker, Some(true));
        assert_eq!(info.military_experience, Some(true));
        assert_eq!(info.status, "new");
        assert_eq!(info.id, None);
    }

    #[test]
    fn test_empty_text_yields_sparse_record() {
        let analyzer = HeuristicAnalyzer::new();
        let info = analyzer.analyze("", None);

        assert_eq!(info.name, None);
        assert_eq!(info.email, None);
        assert_eq!(info.phone, None);
        assert_eq!(info.degree, None);
        assert_eq!(info.years_experience, None);
        assert!(!info.has_certifications);
        assert_eq!(info.certifications, None);
        // true-or-absent flags must be absent, not false
        assert_eq!(info.native_english_speaker, None);
        assert_eq!(info.military_experience, None);
        assert_eq!(info.status, "new");
    }

    #[test]
    fn test_filename_beats_content_name() {
        let analyzer = HeuristicAnalyzer::new();
        let info = analyzer.extract_with_path(FIXTURE, Path::new("Resume_Jane_Doe.pdf"));
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_generated_filename_falls_back_to_content() {
        let analyzer = HeuristicAnalyzer::new();
        let info = analyzer.extract_with_path(FIXTURE, Path::new("Resume202504170332.pdf"));
        assert_eq!(info.name.as_deref(), Some("John Q. Smith"));
    }

    #[test]
    fn test_labeled_phone_beats_shaped_phone() {
        let text = "fax 555-999-8888\nPhone: 555-123-4567\nSeoul";
        let analyzer = HeuristicAnalyzer::new();
        let info = analyzer.analyze(text, None);
        assert_eq!(info.phone.as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn test_round_trip_through_file_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candidate.txt");
        std::fs::write(&path, FIXTURE).unwrap();

        let text = crate::text::extract_text(&path);
        let info = HeuristicAnalyzer::new().extract_with_path(&text, &path);

        assert_eq!(info.name.as_deref(), Some("John Q. Smith"));
        assert_eq!(info.email.as_deref(), Some("john@x.com"));
        assert_eq!(info.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(info.degree, Some(Degree::Master));
        assert_eq!(info.degree_field.as_deref(), Some("English"));
        assert_eq!(info.years_experience, Some(5));
        assert!(info.has_certifications);
        assert_eq!(info.native_english_speaker, Some(true));
        assert_eq!(info.military_experience, Some(true));
        assert_eq!(info.status, "new");
    }

    #[test]
    fn test_no_background_keywords_leaves_flags_absent() {
        let text = "Name: Plain Person\nten seasons of farm work";
        let analyzer = HeuristicAnalyzer::new();
        let info = analyzer.analyze(text, None);
        assert_eq!(info.native_english_speaker, None);
        assert_eq!(info.military_experience, None);
        assert!(!info.has_certifications);
    }
}
