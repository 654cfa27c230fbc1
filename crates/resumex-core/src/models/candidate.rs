//! Candidate data model produced by both extraction paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest education tier inferred from resume text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Degree {
    Bachelor,
    Master,
    #[serde(rename = "PhD")]
    Phd,
    Associate,
    #[serde(rename = "High School")]
    HighSchool,
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Degree::Bachelor => "Bachelor",
            Degree::Master => "Master",
            Degree::Phd => "PhD",
            Degree::Associate => "Associate",
            Degree::HighSchool => "High School",
        };
        f.write_str(s)
    }
}

impl FromStr for Degree {
    type Err = ();

    /// Lenient parse used when mapping free-text replies back to a tier.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower.contains("bachelor") {
            Ok(Degree::Bachelor)
        } else if lower.contains("master") {
            Ok(Degree::Master)
        } else if lower.contains("phd") || lower.contains("ph.d") || lower.contains("doctor") {
            Ok(Degree::Phd)
        } else if lower.contains("associate") {
            Ok(Degree::Associate)
        } else if lower.contains("high school") || lower.contains("secondary") {
            Ok(Degree::HighSchool)
        } else {
            Err(())
        }
    }
}

/// A candidate record extracted from a resume.
///
/// Fields that could not be extracted are simply absent; there is no
/// "extraction failed" state. `native_english_speaker` and
/// `military_experience` are true-or-absent (never explicit `false`), while
/// `has_certifications` always carries an explicit boolean. Consumers of the
/// serialized form rely on this asymmetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInfo {
    /// Persistence identifier. Never produced by extraction; assigned by the
    /// caller and used as the lookup key when ranking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Best-guess full name, title-cased, at least two tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// First email address found in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First plausible phone number, normalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Highest education tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<Degree>,

    /// Subject area of the degree, free text or canonicalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_field: Option<String>,

    /// Years of professional experience, sanity-bounded to (0, 50).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,

    /// Whether any certification keyword matched.
    #[serde(default)]
    pub has_certifications: bool,

    /// Context snippets around certification matches, `"; "`-joined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,

    /// True if a native-speaker declaration matched; absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_english_speaker: Option<bool>,

    /// True if a military-service pattern matched; absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub military_experience: Option<bool>,

    /// Opaque interview/test score block carried through from the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency_scores: Option<serde_json::Value>,

    /// Workflow status; always `"new"` on fresh extractions.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "new".to_string()
}

impl Default for CandidateInfo {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            email: None,
            phone: None,
            degree: None,
            degree_field: None,
            years_experience: None,
            has_certifications: false,
            certifications: None,
            native_english_speaker: None,
            military_experience: None,
            proficiency_scores: None,
            status: default_status(),
        }
    }
}

impl CandidateInfo {
    /// Fill absent fields from another record.
    ///
    /// The receiver acts as the baseline (typically the heuristic result)
    /// and `other` as the enrichment (typically the AI result); fields the
    /// baseline already has are kept.
    pub fn enrich(&mut self, other: CandidateInfo) {
        if self.name.is_none() {
            self.name = other.name;
        }
        if self.email.is_none() {
            self.email = other.email;
        }
        if self.phone.is_none() {
            self.phone = other.phone;
        }
        if self.degree.is_none() {
            self.degree = other.degree;
        }
        if self.degree_field.is_none() {
            self.degree_field = other.degree_field;
        }
        if self.years_experience.is_none() {
            self.years_experience = other.years_experience;
        }
        if !self.has_certifications && other.has_certifications {
            self.has_certifications = true;
            self.certifications = other.certifications;
        }
        if self.native_english_speaker.is_none() {
            self.native_english_speaker = other.native_english_speaker;
        }
        if self.military_experience.is_none() {
            self.military_experience = other.military_experience;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_degree_serialization() {
        assert_eq!(serde_json::to_string(&Degree::Phd).unwrap(), "\"PhD\"");
        assert_eq!(
            serde_json::to_string(&Degree::HighSchool).unwrap(),
            "\"High School\""
        );
        assert_eq!(
            serde_json::to_string(&Degree::Bachelor).unwrap(),
            "\"Bachelor\""
        );
    }

    #[test]
    fn test_degree_from_str() {
        assert_eq!("Master's Degree".parse::<Degree>(), Ok(Degree::Master));
        assert_eq!("ph.d. candidate".parse::<Degree>(), Ok(Degree::Phd));
        assert_eq!("high school diploma".parse::<Degree>(), Ok(Degree::HighSchool));
        assert!("trade school".parse::<Degree>().is_err());
    }

    #[test]
    fn test_sparse_serialization_skips_absent_fields() {
        let info = CandidateInfo {
            email: Some("a@b.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&info).unwrap();

        assert!(json.contains("\"email\""));
        assert!(json.contains("\"status\":\"new\""));
        assert!(!json.contains("native_english_speaker"));
        assert!(!json.contains("military_experience"));
        // has_certifications is always explicit, even when false
        assert!(json.contains("\"has_certifications\":false"));
    }

    #[test]
    fn test_enrich_keeps_baseline_fields() {
        let mut base = CandidateInfo {
            email: Some("found@here.com".to_string()),
            ..Default::default()
        };
        let ai = CandidateInfo {
            email: Some("other@there.com".to_string()),
            name: Some("Jane Doe".to_string()),
            years_experience: Some(4),
            ..Default::default()
        };

        base.enrich(ai);

        assert_eq!(base.email.as_deref(), Some("found@here.com"));
        assert_eq!(base.name.as_deref(), Some("Jane Doe"));
        assert_eq!(base.years_experience, Some(4));
    }
}
