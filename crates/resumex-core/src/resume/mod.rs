//! Candidate field extraction module.

mod analyzer;
pub mod rules;

pub use analyzer::HeuristicAnalyzer;

use std::path::Path;

use crate::models::candidate::CandidateInfo;

/// Trait for candidate field extractors.
pub trait CandidateExtractor {
    /// Extract candidate fields from resume text.
    fn extract_from_text(&self, text: &str) -> CandidateInfo;

    /// Extract candidate fields from resume text, using the originating
    /// file name as an additional name hint.
    fn extract_with_path(&self, text: &str, path: &Path) -> CandidateInfo;
}
