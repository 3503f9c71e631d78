use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::InputError;
use crate::model::Classification;
use crate::model::method_output::{FacetScore, MethodDetail, MethodKind, MethodOutput};
use crate::model::thresholds::{
    ClassificationThresholds, NEUTRAL_SCORE, clip_score, clip01, round_to,
};

pub const DEFAULT_RATER_CONFIDENCE: f64 = 0.5;

pub const DOMAIN_PROMPT: &str = "\
You are an expert personality psychologist scoring an interview transcript
for EXTRAVERSION: sociability, assertiveness, positive emotionality and
engagement with the external world.

Produce a SINGLE overall Extraversion rating on a 1.0-5.0 scale
(1 = very low, 3 = average or mixed, 5 = very high).

Higher: social activities, friends, groups; enthusiastic and positive tone;
assertive, confident language; excitement-seeking; long, vivid answers.
Lower: preference for solitude and small groups; reserved, cautious or
hedging language; routine preference; short, measured answers.

Rate behavioural evidence, not self-claims. Absence of evidence means 3.0.
Most people score 2.5-3.5. Scattered signals pull toward 3.0.

Respond with JSON only:
{\"score\": 3.5, \"classification\": \"Medium\", \"confidence\": 0.7,
 \"evidence\": \"two or three sentences\"}

classification: score <= 2.3 Low, score <= 3.6 Medium, otherwise High.
confidence: 0.0-0.3 uncertain, 0.4-0.6 moderate, 0.7-1.0 clear evidence.
";

pub const FACET_PROMPT: &str = "\
You are an expert personality psychologist. Rate the user on each of the
six Extraversion facets on a 1-5 scale:
  E1 Friendliness, E2 Gregariousness, E3 Assertiveness,
  E4 Activity Level, E5 Excitement-Seeking, E6 Cheerfulness.

Respond with JSON only:
{\"facet_scores\": [
  {\"facet_code\": \"E1\", \"facet_name\": \"Friendliness\", \"score\": 3.5, \"evidence\": \"...\"}
]}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingLevel {
    Domain,
    Facet,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RaterError {
    #[error("no recorded response for {0:?}-level rating")]
    NoResponse(RatingLevel),

    #[error("rater model failed: {0}")]
    Model(String),
}

pub trait RaterModel {
    fn complete(
        &self,
        level: RatingLevel,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, RaterError>;
}

/// Replays replies captured from a model run, one file per rating level.
#[derive(Debug, Clone, Default)]
pub struct RecordedResponses {
    pub domain: Option<String>,
    pub facet: Option<String>,
}

impl RecordedResponses {
    pub fn from_files(
        domain: Option<&Path>,
        facet: Option<&Path>,
    ) -> Result<Self, InputError> {
        let read = |p: Option<&Path>| -> Result<Option<String>, InputError> {
            match p {
                Some(path) => Ok(Some(std::fs::read_to_string(path)?)),
                None => Ok(None),
            }
        };
        Ok(Self {
            domain: read(domain)?,
            facet: read(facet)?,
        })
    }
}

impl RaterModel for RecordedResponses {
    fn complete(
        &self,
        level: RatingLevel,
        _system_prompt: &str,
        _user_message: &str,
    ) -> Result<String, RaterError> {
        let reply = match level {
            RatingLevel::Domain => self.domain.as_ref(),
            RatingLevel::Facet => self.facet.as_ref(),
        };
        reply.cloned().ok_or(RaterError::NoResponse(level))
    }
}

fn user_message(transcript: &str) -> String {
    format!("INTERVIEW TRANSCRIPT (user responses only):\n\n{transcript}")
}

pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    if !text.starts_with("```") {
        return text;
    }
    let body = match text.split_once('\n') {
        Some((_, rest)) => rest,
        None => return "",
    };
    match body.rfind("```") {
        Some(end) => &body[..end],
        None => body,
    }
}

fn number_field(value: &Value, key: &str) -> Option<f64> {
    match value.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainRating {
    pub score: f64,
    pub classification: Classification,
    pub confidence: f64,
    pub evidence: String,
}

pub fn parse_domain_response(
    raw: &str,
    thresholds: &ClassificationThresholds,
) -> Result<DomainRating, String> {
    let value: Value = serde_json::from_str(strip_code_fence(raw)).map_err(|e| e.to_string())?;
    let score = number_field(&value, "score")
        .filter(|s| s.is_finite())
        .ok_or_else(|| "missing or non-numeric 'score'".to_string())?;
    let score = clip_score(score);

    let classification = value
        .get("classification")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Classification>().ok())
        .unwrap_or_else(|| thresholds.classify(score));
    let confidence = number_field(&value, "confidence")
        .filter(|c| c.is_finite())
        .unwrap_or(DEFAULT_RATER_CONFIDENCE);
    let evidence = value
        .get("evidence")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(DomainRating {
        score,
        classification,
        confidence: clip01(confidence),
        evidence,
    })
}

pub fn score_domain_level(
    transcript: &str,
    model: &dyn RaterModel,
    thresholds: &ClassificationThresholds,
) -> MethodOutput {
    if transcript.trim().is_empty() {
        let mut out = MethodOutput::neutral(MethodKind::RaterDomain, None);
        out.detail = MethodDetail::Rater {
            evidence: "empty transcript; no evidence to score".to_string(),
        };
        return out;
    }

    let message = user_message(transcript);
    let reply = match model.complete(RatingLevel::Domain, DOMAIN_PROMPT, &message) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "domain-level rater failed");
            return MethodOutput::failed(MethodKind::RaterDomain, format!("rater failed: {e}"));
        }
    };

    match parse_domain_response(&reply, thresholds) {
        Ok(rating) => MethodOutput {
            method: MethodKind::RaterDomain,
            score: round_to(rating.score, 2),
            classification: rating.classification,
            confidence: round_to(rating.confidence, 3),
            warning: None,
            error: None,
            detail: MethodDetail::Rater {
                evidence: rating.evidence,
            },
        },
        Err(e) => {
            // Unparseable replies still vote, but with zero weight.
            tracing::warn!(error = %e, "could not parse rater reply");
            let mut out = MethodOutput::neutral(MethodKind::RaterDomain, None);
            out.detail = MethodDetail::Rater {
                evidence: format!("rater parse error: {e}; defaulting to neutral"),
            };
            out
        }
    }
}

#[derive(Debug, Deserialize)]
struct FacetReply {
    facet_scores: Vec<FacetScore>,
}

pub fn parse_facet_response(raw: &str) -> Result<Vec<FacetScore>, String> {
    let reply: FacetReply =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| e.to_string())?;
    Ok(reply
        .facet_scores
        .into_iter()
        .map(|mut f| {
            f.score = clip_score(f.score);
            f
        })
        .collect())
}

pub fn score_facet_level(
    transcript: &str,
    model: &dyn RaterModel,
    thresholds: &ClassificationThresholds,
) -> MethodOutput {
    if transcript.trim().is_empty() {
        let mut out = MethodOutput::neutral(MethodKind::RaterFacet, None);
        out.detail = MethodDetail::Facets {
            facet_scores: Vec::new(),
        };
        return out;
    }

    let parsed = model
        .complete(RatingLevel::Facet, FACET_PROMPT, &user_message(transcript))
        .map_err(|e| e.to_string())
        .and_then(|reply| parse_facet_response(&reply));

    let facet_scores = match parsed {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!(error = %e, "facet-level rater failed");
            return MethodOutput::failed(MethodKind::RaterFacet, e);
        }
    };

    let overall = if facet_scores.is_empty() {
        NEUTRAL_SCORE
    } else {
        facet_scores.iter().map(|f| f.score).sum::<f64>() / facet_scores.len() as f64
    };

    MethodOutput {
        method: MethodKind::RaterFacet,
        score: round_to(overall, 2),
        classification: thresholds.classify(overall),
        confidence: 0.0,
        warning: None,
        error: None,
        detail: MethodDetail::Facets { facet_scores },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_rater_score.rs"]
mod tests;
