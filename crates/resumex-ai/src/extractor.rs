//! AI-assisted candidate extraction.

use serde_json::{Map, Value};
use tracing::debug;

use resumex_core::models::candidate::{CandidateInfo, Degree};

use crate::client::ChatClient;
use crate::error::{AiError, AiResult};
use crate::reply;

/// Fixed instruction describing the exact field set the service must reply
/// with. Kept in lockstep with [`CandidateInfo`].
const EXTRACT_SYSTEM: &str = "You are a resume analysis assistant. Extract candidate \
information from the resume text and reply with a single JSON object using exactly these \
keys: name, email, phone, degree (one of \"Bachelor\", \"Master\", \"PhD\", \"Associate\", \
\"High School\"), degree_field, years_experience (integer), has_certifications (boolean), \
certifications, native_english_speaker (boolean), military_experience (boolean). \
Use null for anything the resume does not state. Reply with JSON only.";

/// Candidate extractor backed by an external chat-completion service.
///
/// Unlike the heuristic analyzer this path fails hard: network and parse
/// errors propagate to the caller.
pub struct AiExtractor<'a> {
    client: &'a ChatClient,
}

impl<'a> AiExtractor<'a> {
    /// Create an extractor over an existing client.
    pub fn new(client: &'a ChatClient) -> Self {
        Self { client }
    }

    /// Extract candidate fields from resume text via the external service.
    pub async fn extract(&self, text: &str) -> AiResult<CandidateInfo> {
        let reply = self.client.complete(EXTRACT_SYSTEM, text).await?;
        debug!("received extraction reply ({} chars)", reply.len());
        parse_candidate(&reply)
    }
}

/// Parse a model reply into a candidate record.
///
/// Lenient on shape: keys may be snake_case or camelCase, years may be a
/// number or a numeric string (unparsable input coerces to 0), echoed
/// identifiers are discarded, and `status` is always stamped `"new"`.
pub(crate) fn parse_candidate(reply: &str) -> AiResult<CandidateInfo> {
    let value = reply::extract_json_object(reply)?;
    let obj = value
        .as_object()
        .ok_or_else(|| AiError::MalformedReply("expected a JSON object".to_string()))?;

    let degree = text_field(obj, "degree", "degree")
        .and_then(|s| s.parse::<Degree>().ok());
    let years_experience = field(obj, "years_experience", "yearsExperience")
        .filter(|v| !v.is_null())
        .map(reply::coerce_years);
    let certifications = text_field(obj, "certifications", "certifications");
    let has_certifications = field(obj, "has_certifications", "hasCertifications")
        .and_then(Value::as_bool)
        .unwrap_or(false)
        || certifications.is_some();

    Ok(CandidateInfo {
        // never trust an echoed identifier
        id: None,
        name: text_field(obj, "name", "name"),
        email: text_field(obj, "email", "email"),
        phone: text_field(obj, "phone", "phone"),
        degree,
        degree_field: text_field(obj, "degree_field", "degreeField"),
        years_experience,
        has_certifications,
        certifications,
        native_english_speaker: flag(field(obj, "native_english_speaker", "nativeEnglishSpeaker")),
        military_experience: flag(field(obj, "military_experience", "militaryExperience")),
        proficiency_scores: None,
        status: "new".to_string(),
    })
}

fn field<'v>(obj: &'v Map<String, Value>, snake: &str, camel: &str) -> Option<&'v Value> {
    obj.get(snake).or_else(|| obj.get(camel))
}

fn text_field(obj: &Map<String, Value>, snake: &str, camel: &str) -> Option<String> {
    field(obj, snake, camel)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// True-or-absent coercion for the background flags.
fn flag(value: Option<&Value>) -> Option<bool> {
    match value.and_then(Value::as_bool) {
        Some(true) => Some(true),
        _ => None,
    }
}
