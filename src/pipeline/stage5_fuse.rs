use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::error::FuseError;
use crate::model::classification::tie_break_order;
use crate::model::method_output::MethodOutput;
use crate::model::thresholds::{clip_score, clip01};
use crate::model::{Classification, EnsembleResult, FusionMethod, MethodScore, PairAgreement};
use crate::pipeline::stage1_features::{LinguisticFeatures, extract_features};
use crate::pipeline::stage2_feature_score::score_with_features;
use crate::pipeline::stage3_embedding_score::{EmbeddingProvider, score_with_embeddings};
use crate::pipeline::stage4_rater_score::{RaterModel, score_domain_level, score_facet_level};

pub fn fuse(scores: &[MethodScore]) -> Result<EnsembleResult, FuseError> {
    if scores.is_empty() {
        return Err(FuseError::InsufficientInput);
    }

    let votes = vote_counts(scores);
    let per_method_agreement = pairwise_agreement(scores);
    let methods_agree = votes.len() == 1;

    if let [only] = scores {
        return Ok(EnsembleResult {
            fused_score: only.score(),
            fused_classification: only.classification(),
            overall_confidence: only.confidence(),
            per_method_agreement,
            fusion_method: if only.confidence() > 0.0 {
                FusionMethod::ConfidenceWeightedMean
            } else {
                FusionMethod::ArithmeticMean
            },
            methods_used: 1,
            methods_agree,
            classification_votes: votes,
        });
    }

    let n = scores.len() as f64;
    let total_weight: f64 = scores.iter().map(MethodScore::confidence).sum();
    let (fused, fusion_method) = if total_weight > 0.0 {
        let weighted: f64 = scores.iter().map(|s| s.score() * s.confidence()).sum();
        (weighted / total_weight, FusionMethod::ConfidenceWeightedMean)
    } else {
        let sum: f64 = scores.iter().map(MethodScore::score).sum();
        (sum / n, FusionMethod::ArithmeticMean)
    };

    Ok(EnsembleResult {
        fused_score: clip_score(fused),
        fused_classification: majority_vote(scores, &votes),
        overall_confidence: clip01(total_weight / n),
        per_method_agreement,
        fusion_method,
        methods_used: scores.len(),
        methods_agree,
        classification_votes: votes,
    })
}

fn vote_counts(scores: &[MethodScore]) -> BTreeMap<Classification, usize> {
    let mut votes = BTreeMap::new();
    for s in scores {
        *votes.entry(s.classification()).or_insert(0) += 1;
    }
    votes
}

/// Plurality winner. Ties go to the tied class holding the single most
/// confident method; if that is also tied, Medium beats High beats Low.
fn majority_vote(
    scores: &[MethodScore],
    votes: &BTreeMap<Classification, usize>,
) -> Classification {
    let max_count = votes.values().copied().max().unwrap_or(0);
    let tied = votes
        .iter()
        .filter(|&(_, &count)| count == max_count)
        .map(|(&class, _)| class)
        .collect::<Vec<_>>();
    if let [winner] = tied.as_slice() {
        return *winner;
    }

    let top_confidence = |class: Classification| {
        scores
            .iter()
            .filter(|s| s.classification() == class)
            .map(MethodScore::confidence)
            .fold(0.0f64, f64::max)
    };
    let best = tied
        .iter()
        .map(|&c| top_confidence(c))
        .fold(0.0f64, f64::max);

    let mut leaders = tied.into_iter().filter(|&c| top_confidence(c) == best);
    let first = leaders.next();
    let second = leaders.next();
    match (first, second) {
        (Some(only), None) => only,
        _ => tie_break_order()
            .iter()
            .copied()
            .find(|&c| votes.get(&c) == Some(&max_count) && top_confidence(c) == best)
            .unwrap_or(Classification::Medium),
    }
}

fn pairwise_agreement(scores: &[MethodScore]) -> Vec<PairAgreement> {
    let mut out = Vec::new();
    for (i, a) in scores.iter().enumerate() {
        for b in &scores[i + 1..] {
            out.push(PairAgreement {
                first: a.method_name().to_string(),
                second: b.method_name().to_string(),
                agree: a.classification() == b.classification(),
            });
        }
    }
    out
}

/// Collaborators available to an assessment run. Methods whose provider
/// is absent are skipped.
#[derive(Default, Clone, Copy)]
pub struct MethodProviders<'a> {
    pub embeddings: Option<&'a dyn EmbeddingProvider>,
    pub rater: Option<&'a dyn RaterModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub ensemble: EnsembleResult,
    /// Band of the fused score itself, next to the majority vote.
    pub score_classification: Classification,
    pub individual_results: Vec<MethodOutput>,
    pub features: LinguisticFeatures,
}

impl Assessment {
    pub fn individual_scores(&self) -> Vec<(&'static str, f64)> {
        self.individual_results
            .iter()
            .filter(|o| o.method.is_fused())
            .map(|o| (o.method.name(), o.score))
            .collect()
    }
}

pub fn run_ensemble(
    transcript: &str,
    config: &ScoringConfig,
    providers: MethodProviders<'_>,
) -> Result<Assessment, FuseError> {
    let thresholds = &config.thresholds;
    let features = extract_features(transcript);
    let mut outputs = Vec::new();

    if config.run_features {
        outputs.push(score_with_features(&features, thresholds));
    }
    if config.run_embedding {
        match providers.embeddings {
            Some(provider) => outputs.push(score_with_embeddings(
                transcript,
                provider,
                config.embedding_min_words,
                thresholds,
            )),
            None => tracing::debug!("no embedding provider; skipping embedding scorer"),
        }
    }
    if let Some(rater) = providers.rater {
        if config.run_rater {
            outputs.push(score_domain_level(transcript, rater, thresholds));
        }
        if config.run_facets {
            outputs.push(score_facet_level(transcript, rater, thresholds));
        }
    }

    let mut scores = Vec::with_capacity(outputs.len());
    for output in &outputs {
        match output.method_score() {
            Some(Ok(score)) => scores.push(score),
            Some(Err(e)) => tracing::warn!(error = %e, "discarding invalid method score"),
            None => {}
        }
    }
    tracing::info!(
        methods = scores.len(),
        reported = outputs.len(),
        "fusing method scores"
    );

    let ensemble = fuse(&scores)?;
    Ok(Assessment {
        score_classification: thresholds.classify(ensemble.fused_score),
        ensemble,
        individual_results: outputs,
        features,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_fuse.rs"]
mod tests;
