use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::model::Classification;
use crate::model::thresholds::round_to;
use crate::session::{find_latest_session, is_valid_session_id, load_session, write_record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Keying {
    #[serde(rename = "+")]
    Positive,
    #[serde(rename = "-")]
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionnaireItem {
    /// Position in the 50-item IPIP Big Five Markers form.
    pub position: u32,
    pub text: &'static str,
    pub keying: Keying,
}

const fn item(position: u32, text: &'static str, keying: Keying) -> QuestionnaireItem {
    QuestionnaireItem {
        position,
        text,
        keying,
    }
}

const EXTRAVERSION_ITEMS: &[QuestionnaireItem] = &[
    item(1, "Am the life of the party.", Keying::Positive),
    item(6, "Don't talk a lot.", Keying::Negative),
    item(11, "Feel comfortable around people.", Keying::Positive),
    item(16, "Keep in the background.", Keying::Negative),
    item(21, "Start conversations.", Keying::Positive),
    item(26, "Have little to say.", Keying::Negative),
    item(31, "Talk to a lot of different people at parties.", Keying::Positive),
    item(36, "Don't like to draw attention to myself.", Keying::Negative),
    item(41, "Don't mind being the center of attention.", Keying::Positive),
    item(46, "Am quiet around strangers.", Keying::Negative),
];

pub fn extraversion_items() -> &'static [QuestionnaireItem] {
    EXTRAVERSION_ITEMS
}

pub const LIKERT_LABELS: [&str; 5] = [
    "Very Inaccurate",
    "Moderately Inaccurate",
    "Neither Accurate Nor Inaccurate",
    "Moderately Accurate",
    "Very Accurate",
];

pub fn likert_label(raw: u8) -> Option<&'static str> {
    LIKERT_LABELS.get(usize::from(raw).checked_sub(1)?).copied()
}

pub fn reverse_score(raw: u8) -> u8 {
    6 - raw
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub position: u32,
    pub text: String,
    pub keying: Keying,
    pub raw: u8,
    pub scored: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfReportResult {
    pub domain_score: f64,
    pub responses: Vec<ItemResponse>,
}

pub fn score_questionnaire(raw: &[u8]) -> Result<SelfReportResult, InputError> {
    if raw.len() != EXTRAVERSION_ITEMS.len() {
        return Err(InputError::InvalidInput(format!(
            "expected {} responses, got {}",
            EXTRAVERSION_ITEMS.len(),
            raw.len()
        )));
    }
    let mut responses = Vec::with_capacity(raw.len());
    for (item, &answer) in EXTRAVERSION_ITEMS.iter().zip(raw) {
        if !(1..=5).contains(&answer) {
            return Err(InputError::InvalidInput(format!(
                "response {answer} to item {} is outside 1-5",
                item.position
            )));
        }
        let scored = match item.keying {
            Keying::Positive => answer,
            Keying::Negative => reverse_score(answer),
        };
        responses.push(ItemResponse {
            position: item.position,
            text: item.text.to_string(),
            keying: item.keying,
            raw: answer,
            scored,
        });
    }
    let total: u32 = responses.iter().map(|r| u32::from(r.scored)).sum();
    Ok(SelfReportResult {
        domain_score: f64::from(total) / responses.len() as f64,
        responses,
    })
}

/// Parses `"4,2,5,..."` into raw answers.
pub fn parse_responses(s: &str) -> Result<Vec<u8>, InputError> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<u8>()
                .map_err(|_| InputError::InvalidInput(format!("not a 1-5 response: {p:?}")))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkedSession {
    pub ai_score: Option<f64>,
    pub ai_classification: Option<Classification>,
}

/// Stores `score` (2 dp) in the newest log for `session_id` under `dir`.
/// Returns `None` when no such session was saved.
pub fn attach_self_report(
    dir: &Path,
    session_id: &str,
    score: f64,
) -> Result<Option<LinkedSession>, InputError> {
    if !is_valid_session_id(session_id) {
        return Err(InputError::InvalidInput(format!(
            "invalid session id {session_id:?}"
        )));
    }
    let Some(path) = find_latest_session(dir, session_id)? else {
        return Ok(None);
    };

    let mut record = load_session(&path)?;
    record.scoring.self_report_score = Some(round_to(score, 2));
    write_record(&path, &record)?;
    tracing::info!(path = %path.display(), "attached self-report score");

    let assessment = record.scoring.assessment.as_ref();
    Ok(Some(LinkedSession {
        ai_score: assessment.map(|a| a.ensemble.fused_score),
        ai_classification: assessment.map(|a| a.score_classification),
    }))
}

#[cfg(test)]
#[path = "../../tests/src_inline/evaluation/self_report.rs"]
mod tests;
