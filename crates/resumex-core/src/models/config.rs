//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the resumex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumexConfig {
    /// Heuristic extraction configuration.
    pub extraction: ExtractionConfig,

    /// AI-assisted path configuration.
    pub ai: AiConfig,
}

/// Heuristic extraction configuration.
///
/// The defaults match the documented extraction behavior and are not
/// expected to change in normal use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of leading lines scanned by the name heuristics.
    pub max_name_scan_lines: usize,

    /// Characters scanned by the leading-capitals name fallback.
    pub name_scan_window: usize,

    /// Characters scanned after a personal-information section header.
    pub section_window: usize,

    /// Characters scanned after an education section header.
    pub education_window: usize,

    /// Exclusive upper bound for accepted years of experience.
    pub max_years: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_name_scan_lines: 10,
            name_scan_window: 400,
            section_window: 300,
            education_window: 200,
            max_years: 50,
        }
    }
}

/// Configuration for the AI-assisted extractor and ranker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// API key; falls back to the `OPENAI_API_KEY` environment variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier sent to the chat-completion endpoint.
    pub model: String,

    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,

    /// Maximum number of candidates returned by the ranker.
    pub max_rank_candidates: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            max_rank_candidates: 10,
        }
    }
}

impl ResumexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| crate::ResumexError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| crate::ResumexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResumexConfig::default();
        assert_eq!(config.extraction.max_years, 50);
        assert_eq!(config.extraction.max_name_scan_lines, 10);
        assert_eq!(config.ai.max_rank_candidates, 10);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ResumexConfig =
            serde_json::from_str(r#"{"ai": {"model": "gpt-4o"}}"#).unwrap();
        assert_eq!(config.ai.model, "gpt-4o");
        assert_eq!(config.ai.max_rank_candidates, 10);
        assert_eq!(config.extraction.max_years, 50);
    }
}
