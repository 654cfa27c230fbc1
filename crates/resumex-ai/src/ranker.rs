//! Candidate ranking via an external chat-completion service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use resumex_core::models::candidate::{CandidateInfo, Degree};

use crate::client::ChatClient;
use crate::error::{AiError, AiResult};
use crate::reply;

/// Fixed ranking rubric: education outweighs experience, which outweighs
/// certifications, native-speaker status, military experience, and
/// proficiency scores, in that order.
const RANK_SYSTEM: &str = "You are a hiring assistant ranking instructor candidates. \
Rank the candidates from strongest to weakest, weighing education highest, then years of \
experience, then certifications, then native English speaker status, then military \
experience, then proficiency scores. Reply with a single JSON object of the form \
{\"ranked_ids\": [1, 2, 3], \"rationale\": \"...\"} where ranked_ids lists candidate ids \
in rank order. Reply with JSON only.";

/// Ordered ranking result.
#[derive(Debug, Serialize)]
pub struct Ranking {
    /// Candidates in the order returned by the service, unresolvable ids
    /// dropped, truncated to the configured limit.
    pub ranked: Vec<CandidateInfo>,
    /// Free-text explanation from the service.
    pub rationale: String,
}

/// Reduced per-candidate field set sent to the ranking service. Contact
/// details are deliberately omitted; they carry no ranking signal.
#[derive(Serialize)]
struct CandidateProjection<'a> {
    id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    degree: Option<Degree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    degree_field: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    years_experience: Option<u32>,
    has_certifications: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    certifications: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    native_english_speaker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    military_experience: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proficiency_scores: Option<&'a Value>,
    status: &'a str,
}

#[derive(Deserialize)]
struct RankReply {
    #[serde(alias = "rankedIds", alias = "ordered_ids", alias = "orderedIds")]
    ranked_ids: Vec<Value>,
    #[serde(default, alias = "explanation", alias = "reasoning")]
    rationale: String,
}

/// Candidate ranker backed by an external chat-completion service.
pub struct CandidateRanker<'a> {
    client: &'a ChatClient,
    limit: usize,
}

impl<'a> CandidateRanker<'a> {
    /// Create a ranker over an existing client with the default limit of 10.
    pub fn new(client: &'a ChatClient) -> Self {
        Self { client, limit: 10 }
    }

    /// Override the maximum number of ranked candidates returned.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Rank candidates via the external service.
    ///
    /// Candidates without an `id` cannot be mapped back from the reply and
    /// are skipped from the projection. Failure of the call or reply parse
    /// propagates to the caller.
    pub async fn rank(&self, candidates: Vec<CandidateInfo>) -> AiResult<Ranking> {
        if candidates.is_empty() {
            return Ok(Ranking {
                ranked: Vec::new(),
                rationale: String::new(),
            });
        }

        // Serialize inside a scope so the projections' borrows end before
        // the candidates move into the id lookup.
        let user = {
            let projections: Vec<CandidateProjection> =
                candidates.iter().filter_map(project).collect();
            let skipped = candidates.len() - projections.len();
            if skipped > 0 {
                warn!("{} candidate(s) without an id skipped from ranking", skipped);
            }
            if projections.is_empty() {
                return Err(AiError::Configuration(
                    "no candidates with ids to rank".to_string(),
                ));
            }
            serde_json::to_string_pretty(&projections)
                .map_err(|e| AiError::MalformedReply(e.to_string()))?
        };
        let reply = self.client.complete(RANK_SYSTEM, &user).await?;

        resolve_ranking(&reply, candidates, self.limit)
    }
}

fn project(candidate: &CandidateInfo) -> Option<CandidateProjection<'_>> {
    Some(CandidateProjection {
        id: candidate.id?,
        degree: candidate.degree,
        degree_field: candidate.degree_field.as_deref(),
        years_experience: candidate.years_experience,
        has_certifications: candidate.has_certifications,
        certifications: candidate.certifications.as_deref(),
        native_english_speaker: candidate.native_english_speaker,
        military_experience: candidate.military_experience,
        proficiency_scores: candidate.proficiency_scores.as_ref(),
        status: &candidate.status,
    })
}

/// Map the reply's id order back to full candidate records, silently
/// dropping ids that do not resolve and capping the result at `limit`.
pub(crate) fn resolve_ranking(
    reply: &str,
    candidates: Vec<CandidateInfo>,
    limit: usize,
) -> AiResult<Ranking> {
    let value = reply::extract_json_object(reply)?;
    let parsed: RankReply =
        serde_json::from_value(value).map_err(|e| AiError::MalformedReply(e.to_string()))?;

    let mut by_id: HashMap<i64, CandidateInfo> = candidates
        .into_iter()
        .filter_map(|c| c.id.map(|id| (id, c)))
        .collect();

    let mut ranked = Vec::new();
    for raw in parsed.ranked_ids {
        if ranked.len() >= limit {
            break;
        }
        let Some(id) = coerce_id(&raw) else {
            debug!("ignoring non-numeric candidate id {:?}", raw);
            continue;
        };
        match by_id.remove(&id) {
            Some(candidate) => ranked.push(candidate),
            None => debug!("dropping unresolvable candidate id {}", id),
        }
    }

    Ok(Ranking {
        ranked,
        rationale: parsed.rationale,
    })
}

fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidate(id: i64) -> CandidateInfo {
        CandidateInfo {
            id: Some(id),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_preserves_reply_order() {
        let candidates = vec![candidate(1), candidate(2), candidate(3)];
        let reply = r#"{"ranked_ids": [3, 1, 2], "rationale": "strongest education first"}"#;

        let ranking = resolve_ranking(reply, candidates, 10).unwrap();
        let ids: Vec<i64> = ranking.ranked.iter().filter_map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(ranking.rationale, "strongest education first");
    }

    #[test]
    fn test_unresolvable_ids_dropped_and_capped_at_limit() {
        let candidates: Vec<CandidateInfo> = (1..=15).map(candidate).collect();
        // 15 entries, 3 of which do not resolve to any candidate
        let reply = r#"{"ranked_ids": [1, 100, 2, 3, 101, 4, 5, 6, 102, 7, 8, 9, 10, 11, 12],
                        "rationale": "by rubric"}"#;

        let ranking = resolve_ranking(reply, candidates, 10).unwrap();
        let ids: Vec<i64> = ranking.ranked.iter().filter_map(|c| c.id).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_string_ids_coerced() {
        let candidates = vec![candidate(7), candidate(8)];
        let reply = r#"{"ranked_ids": ["8", "7"], "rationale": ""}"#;

        let ranking = resolve_ranking(reply, candidates, 10).unwrap();
        let ids: Vec<i64> = ranking.ranked.iter().filter_map(|c| c.id).collect();
        assert_eq!(ids, vec![8, 7]);
    }

    #[test]
    fn test_duplicate_ids_resolve_once() {
        let candidates = vec![candidate(1), candidate(2)];
        let reply = r#"{"ranked_ids": [2, 2, 1], "rationale": ""}"#;

        let ranking = resolve_ranking(reply, candidates, 10).unwrap();
        let ids: Vec<i64> = ranking.ranked.iter().filter_map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_missing_ranked_ids_is_an_error() {
        let candidates = vec![candidate(1)];
        assert!(resolve_ranking(r#"{"rationale": "no list"}"#, candidates, 10).is_err());
    }

    #[tokio::test]
    async fn test_rank_empty_candidates_short_circuits() {
        use resumex_core::models::config::AiConfig;

        let config = AiConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        let client = crate::ChatClient::new(&config).unwrap();

        // No request goes out for an empty candidate list.
        let ranking = CandidateRanker::new(&client).rank(Vec::new()).await.unwrap();
        assert!(ranking.ranked.is_empty());
        assert_eq!(ranking.rationale, "");
    }
}
