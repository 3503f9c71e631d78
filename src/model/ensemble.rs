use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::classification::Classification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionMethod {
    ConfidenceWeightedMean,
    ArithmeticMean,
}

impl FusionMethod {
    pub fn name(self) -> &'static str {
        match self {
            FusionMethod::ConfidenceWeightedMean => "confidence_weighted_mean",
            FusionMethod::ArithmeticMean => "arithmetic_mean",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairAgreement {
    pub first: String,
    pub second: String,
    pub agree: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleResult {
    pub fused_score: f64,
    pub fused_classification: Classification,
    pub overall_confidence: f64,
    pub per_method_agreement: Vec<PairAgreement>,
    pub fusion_method: FusionMethod,
    pub methods_used: usize,
    pub methods_agree: bool,
    pub classification_votes: BTreeMap<Classification, usize>,
}

impl EnsembleResult {
    pub fn agreement_rate(&self) -> f64 {
        if self.per_method_agreement.is_empty() {
            return 1.0;
        }
        let agreeing = self
            .per_method_agreement
            .iter()
            .filter(|p| p.agree)
            .count();
        agreeing as f64 / self.per_method_agreement.len() as f64
    }

    pub fn pair(&self, first: &str, second: &str) -> Option<&PairAgreement> {
        self.per_method_agreement.iter().find(|p| {
            (p.first == first && p.second == second) || (p.first == second && p.second == first)
        })
    }
}
