//! Core library for resume analysis.
//!
//! This crate provides:
//! - File text extraction (PDF, plain text, best-effort Word)
//! - Heuristic candidate field extraction (contact details, education,
//!   experience, certifications, background flags)
//! - The candidate data model shared with the AI-assisted path

pub mod error;
pub mod models;
pub mod resume;
pub mod text;

pub use error::{Result, ResumexError, TextError};
pub use models::candidate::{CandidateInfo, Degree};
pub use models::config::{AiConfig, ExtractionConfig, ResumexConfig};
pub use resume::{CandidateExtractor, HeuristicAnalyzer};
pub use text::extract_text;
