use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::model::classification::Classification;
use crate::model::method_score::MethodScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    #[serde(rename = "feature_based")]
    FeatureBased,
    #[serde(rename = "embedding")]
    Embedding,
    #[serde(rename = "llm_domain")]
    RaterDomain,
    #[serde(rename = "llm_facet")]
    RaterFacet,
}

impl MethodKind {
    pub fn name(self) -> &'static str {
        match self {
            MethodKind::FeatureBased => "feature_based",
            MethodKind::Embedding => "embedding",
            MethodKind::RaterDomain => "llm_domain",
            MethodKind::RaterFacet => "llm_facet",
        }
    }

    /// Facet-level rating is reported alongside the ensemble but never fused.
    pub fn is_fused(self) -> bool {
        !matches!(self, MethodKind::RaterFacet)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: String,
    pub value: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetScore {
    pub facet_code: String,
    pub facet_name: String,
    pub score: f64,
    #[serde(default)]
    pub evidence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodDetail {
    Features {
        contributions: Vec<FeatureContribution>,
        raw_unclipped_score: f64,
    },
    Embedding {
        model_id: String,
        high_similarity: f64,
        low_similarity: f64,
        balance: f64,
    },
    Rater {
        evidence: String,
    },
    Facets {
        facet_scores: Vec<FacetScore>,
    },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodOutput {
    pub method: MethodKind,
    pub score: f64,
    pub classification: Classification,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub detail: MethodDetail,
}

impl MethodOutput {
    pub fn neutral(method: MethodKind, confidence_note: Option<String>) -> Self {
        Self {
            method,
            score: crate::model::thresholds::NEUTRAL_SCORE,
            classification: Classification::Medium,
            confidence: 0.0,
            warning: confidence_note,
            error: None,
            detail: MethodDetail::Empty,
        }
    }

    pub fn failed(method: MethodKind, error: impl Into<String>) -> Self {
        let mut out = Self::neutral(method, None);
        out.error = Some(error.into());
        out
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The fusion input for this output; `None` for failed or unfused methods.
    pub fn method_score(&self) -> Option<Result<MethodScore, ScoreError>> {
        if !self.is_ok() || !self.method.is_fused() {
            return None;
        }
        Some(MethodScore::new(
            self.method.name(),
            self.score,
            self.classification,
            self.confidence,
        ))
    }
}
