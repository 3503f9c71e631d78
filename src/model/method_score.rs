use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::model::classification::Classification;
use crate::model::thresholds::{MAX_SCORE, MIN_SCORE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMethodScore")]
pub struct MethodScore {
    method_name: String,
    score: f64,
    classification: Classification,
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct RawMethodScore {
    method_name: String,
    score: f64,
    classification: Classification,
    confidence: f64,
}

impl TryFrom<RawMethodScore> for MethodScore {
    type Error = ScoreError;

    fn try_from(raw: RawMethodScore) -> Result<Self, Self::Error> {
        MethodScore::new(raw.method_name, raw.score, raw.classification, raw.confidence)
    }
}

impl MethodScore {
    pub fn new(
        method_name: impl Into<String>,
        score: f64,
        classification: Classification,
        confidence: f64,
    ) -> Result<Self, ScoreError> {
        let method_name = method_name.into();
        if method_name.trim().is_empty() {
            return Err(ScoreError::EmptyMethodName);
        }
        if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(ScoreError::ScoreOutOfRange {
                method: method_name,
                value: score,
            });
        }
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(ScoreError::ConfidenceOutOfRange {
                method: method_name,
                value: confidence,
            });
        }
        Ok(Self {
            method_name,
            score,
            classification,
            confidence,
        })
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/method_score.rs"]
mod tests;
