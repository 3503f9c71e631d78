use crate::model::method_output::{FeatureContribution, MethodDetail, MethodKind, MethodOutput};
use crate::model::thresholds::{
    ClassificationThresholds, NEUTRAL_SCORE, clip_score, clip01, round_to,
};
use crate::pipeline::stage1_features::LinguisticFeatures;

#[derive(Debug, Clone, Copy)]
pub struct FeatureWeight {
    pub feature: &'static str,
    /// Expected value for an average (3.0) speaker.
    pub neutral: f64,
    /// +1 when more of the feature means more extraverted.
    pub direction: f64,
    pub weight: f64,
    pub rationale: &'static str,
}

const FEATURE_WEIGHTS: &[FeatureWeight] = &[
    FeatureWeight {
        feature: "positive_emotion_ratio",
        neutral: 0.04,
        direction: 1.0,
        weight: 12.0,
        rationale: "positive emotion words, r=.24 (Yarkoni 2010)",
    },
    FeatureWeight {
        feature: "negative_emotion_ratio",
        neutral: 0.03,
        direction: -1.0,
        weight: 8.0,
        rationale: "negative emotion words, r=-.15 (Yarkoni 2010)",
    },
    FeatureWeight {
        feature: "social_reference_ratio",
        neutral: 0.04,
        direction: 1.0,
        weight: 14.0,
        rationale: "social words, r=.22 (Pennebaker & King 1999)",
    },
    FeatureWeight {
        feature: "first_person_plural_ratio",
        neutral: 0.015,
        direction: 1.0,
        weight: 10.0,
        rationale: "we/us pronouns signal group orientation",
    },
    FeatureWeight {
        feature: "assertive_ratio",
        neutral: 0.025,
        direction: 1.0,
        weight: 10.0,
        rationale: "assertive language, E3 facet (Mairesse et al. 2007)",
    },
    FeatureWeight {
        feature: "hedging_ratio",
        neutral: 0.04,
        direction: -1.0,
        weight: 8.0,
        rationale: "tentative language, r=-.18",
    },
    FeatureWeight {
        feature: "excitement_ratio",
        neutral: 0.01,
        direction: 1.0,
        weight: 15.0,
        rationale: "excitement words, E5 facet (Schwartz et al. 2013)",
    },
    FeatureWeight {
        feature: "exclamation_ratio",
        neutral: 0.08,
        direction: 1.0,
        weight: 3.0,
        rationale: "exclamations per sentence, E6 enthusiasm",
    },
    FeatureWeight {
        feature: "word_count",
        neutral: 25.0,
        direction: 1.0,
        weight: 0.008,
        rationale: "verbal output length (Mairesse et al. 2007)",
    },
    FeatureWeight {
        feature: "lexical_diversity",
        neutral: 0.65,
        direction: 1.0,
        weight: 2.0,
        rationale: "vocabulary richness (Yarkoni 2010)",
    },
];

pub fn feature_weights() -> &'static [FeatureWeight] {
    FEATURE_WEIGHTS
}

/// Distance from the midpoint, saturating 1.5 points away.
pub fn distance_confidence(score: f64) -> f64 {
    clip01((score - NEUTRAL_SCORE).abs() / 1.5)
}

pub fn score_with_features(
    features: &LinguisticFeatures,
    thresholds: &ClassificationThresholds,
) -> MethodOutput {
    if features.word_count == 0 {
        return MethodOutput::neutral(
            MethodKind::FeatureBased,
            Some("no text to analyze; defaulting to neutral".to_string()),
        );
    }

    let mut contributions = Vec::with_capacity(FEATURE_WEIGHTS.len());
    let mut total = 0.0;
    for w in FEATURE_WEIGHTS {
        let value = features.feature_value(w.feature).unwrap_or(0.0);
        let contribution = w.weight * w.direction * (value - w.neutral);
        total += contribution;
        contributions.push(FeatureContribution {
            feature: w.feature.to_string(),
            value: round_to(value, 4),
            contribution: round_to(contribution, 4),
        });
    }

    let raw = NEUTRAL_SCORE + total;
    let score = clip_score(raw);
    tracing::debug!(raw, score, "feature-based score");

    MethodOutput {
        method: MethodKind::FeatureBased,
        score: round_to(score, 2),
        classification: thresholds.classify(score),
        confidence: round_to(distance_confidence(score), 3),
        warning: None,
        error: None,
        detail: MethodDetail::Features {
            contributions,
            raw_unclipped_score: round_to(raw, 4),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_feature_score.rs"]
mod tests;
