use serde::Serialize;

use crate::model::EnsembleResult;
use crate::pipeline::stage5_fuse::Assessment;

#[derive(Serialize)]
struct AssessmentDocument<'a> {
    tool: &'static str,
    version: &'static str,
    #[serde(flatten)]
    assessment: &'a Assessment,
    agreement_rate: f64,
    individual_scores: Vec<(&'static str, f64)>,
}

pub fn render_assessment_json(assessment: &Assessment) -> serde_json::Result<String> {
    let doc = AssessmentDocument {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        assessment,
        agreement_rate: assessment.ensemble.agreement_rate(),
        individual_scores: assessment.individual_scores(),
    };
    serde_json::to_string_pretty(&doc)
}

pub fn render_ensemble_json(result: &EnsembleResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
