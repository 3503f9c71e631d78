use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::InputError;
use crate::model::method_output::{MethodDetail, MethodKind, MethodOutput};
use crate::model::thresholds::{
    ClassificationThresholds, NEUTRAL_SCORE, clip_score, clip01, round_to,
};

pub const DEFAULT_MIN_WORDS: usize = 15;
const BALANCE_GAIN: f64 = 3.0;

const HIGH_REFERENCES: &[&str] = &[
    // E1 friendliness
    "I love meeting new people and I'm usually the one who walks up to strangers at a party \
     to introduce myself. Making new friends comes naturally to me and I genuinely enjoy \
     getting to know people from all walks of life. I feel really comfortable around people \
     I've just met.",
    // E2 gregariousness
    "My ideal weekend is packed with social activities. I love being surrounded by a big group \
     of friends, whether we're going out to eat, hitting up a concert, or just hanging out at \
     someone's place. I get restless when I spend too much time alone and I always prefer \
     doing things with other people around.",
    // E3 assertiveness
    "I naturally take charge in group situations. When a decision needs to be made, I'm \
     usually the one who speaks up and proposes a plan. I feel confident expressing my \
     opinions even when they're unpopular and I enjoy leading projects and organizing people.",
    // E4 activity level
    "I'm always on the go and my schedule is packed from morning to night and I love it that \
     way. I have tons of energy and I can't stand sitting still for too long. My friends \
     always say I'm the most active person they know. I juggle multiple hobbies and activities.",
    // E5 excitement-seeking
    "I'm always looking for the next adventure or thrill. I love trying new things like \
     skydiving, traveling to exotic places, going to loud concerts. I get bored easily with \
     routine and I'm drawn to anything that gets my adrenaline pumping. Life is too short to \
     play it safe.",
    // E6 cheerfulness
    "I'm a genuinely happy person and my friends always describe me as the cheerful one who \
     lights up the room. I find joy in small things and I tend to see the bright side of \
     every situation. I laugh a lot and I love making other people laugh too. My default mood \
     is upbeat and optimistic.",
    // general
    "I absolutely love my social life. Between work events, friend gatherings, family dinners, \
     and weekend trips, I'm always surrounded by people. I draw energy from conversations and \
     feel most alive when I'm in a lively group. I'm spontaneous, enthusiastic, and I rarely \
     say no to a good time.",
];

const LOW_REFERENCES: &[&str] = &[
    "I find it quite difficult to approach people I don't know. At parties or gatherings, I \
     usually stick to the people I came with. It takes me a long time to open up to new \
     people and I feel uncomfortable in situations where I'm expected to make small talk with \
     strangers.",
    "I much prefer spending time alone or with just one or two close friends. Large social \
     gatherings drain my energy and I need a lot of quiet time to recharge afterward. My ideal \
     weekend involves staying home with a good book, watching a movie by myself, or going for \
     a quiet walk alone.",
    "I tend to go along with what the group decides rather than voicing my own opinion. I \
     don't enjoy being in charge and I'd rather someone else take the lead. I keep my opinions \
     to myself most of the time, especially in groups where I might be disagreed with.",
    "I have a pretty relaxed pace of life. I don't feel the need to constantly be doing things \
     and I'm perfectly content with a slow, quiet day. My friends might call me lazy but I \
     just don't have that restless energy that some people have. I value stillness.",
    "I prefer familiar routines and predictable situations. New or unfamiliar experiences make \
     me anxious rather than excited. I don't seek out thrills or adrenaline and I'd much \
     rather do something I've done before that I know I enjoy. I'm cautious and I think \
     carefully before trying anything new.",
    "I wouldn't describe myself as a particularly cheerful person. I don't get overly excited \
     about things and my emotional range is fairly narrow. I'm more of a calm, even-keeled \
     person. My friends wouldn't call me the life of the party by any stretch.",
    "I'm a private person who keeps to myself. I have a small circle of close friends and \
     that's enough for me. I find social situations tiring and I often prefer my own company. \
     I'm quiet, reflective, and I think before I speak. I rarely draw attention to myself.",
];

pub fn high_references() -> &'static [&'static str] {
    HIGH_REFERENCES
}

pub fn low_references() -> &'static [&'static str] {
    LOW_REFERENCES
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EmbeddingError {
    #[error("no embedding available for text: {0}")]
    MissingVector(String),

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding provider returned {actual} vectors for {expected} texts")]
    CountMismatch { expected: usize, actual: usize },

    #[error("embedding provider failed: {0}")]
    Provider(String),
}

/// Source of text embeddings. Implementations must return one vector per
/// input text, in order.
pub trait EmbeddingProvider {
    fn model_id(&self) -> &str;
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    pub text: String,
    pub vector: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingFile {
    pub model_id: String,
    pub vectors: Vec<EmbeddingRecord>,
}

/// Provider backed by vectors computed ahead of time, looked up by exact
/// text.
#[derive(Debug, Clone)]
pub struct PrecomputedEmbeddings {
    model_id: String,
    by_text: HashMap<String, Vec<f32>>,
}

impl PrecomputedEmbeddings {
    pub fn new(model_id: impl Into<String>, records: Vec<EmbeddingRecord>) -> Self {
        let by_text = records.into_iter().map(|r| (r.text, r.vector)).collect();
        Self {
            model_id: model_id.into(),
            by_text,
        }
    }

    pub fn load(path: &Path) -> Result<Self, InputError> {
        let raw = std::fs::read_to_string(path)?;
        let file: EmbeddingFile = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            vectors = file.vectors.len(),
            model = %file.model_id,
            "loaded precomputed embeddings"
        );
        Ok(Self::new(file.model_id, file.vectors))
    }
}

impl EmbeddingProvider for PrecomputedEmbeddings {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts
            .iter()
            .map(|text| {
                self.by_text
                    .get(*text)
                    .cloned()
                    .ok_or_else(|| EmbeddingError::MissingVector(preview(text)))
            })
            .collect()
    }
}

fn preview(text: &str) -> String {
    let mut out = text.chars().take(48).collect::<String>();
    if text.chars().count() > 48 {
        out.push_str("...");
    }
    out
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (x as f64, y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let norm = norm_a.sqrt() * norm_b.sqrt();
    if norm == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / norm)
}

fn mean_similarity(query: &[f32], refs: &[Vec<f32>]) -> Result<f64, EmbeddingError> {
    if refs.is_empty() {
        return Ok(0.0);
    }
    let mut sum = 0.0;
    for r in refs {
        sum += cosine_similarity(query, r)?;
    }
    Ok(sum / refs.len() as f64)
}

struct PoleSimilarity {
    high: f64,
    low: f64,
}

fn pole_similarity(
    transcript: &str,
    provider: &dyn EmbeddingProvider,
) -> Result<PoleSimilarity, EmbeddingError> {
    let mut texts = Vec::with_capacity(1 + HIGH_REFERENCES.len() + LOW_REFERENCES.len());
    texts.push(transcript);
    texts.extend_from_slice(HIGH_REFERENCES);
    texts.extend_from_slice(LOW_REFERENCES);

    let vectors = provider.embed(&texts)?;
    if vectors.len() != texts.len() {
        return Err(EmbeddingError::CountMismatch {
            expected: texts.len(),
            actual: vectors.len(),
        });
    }

    let (query, refs) = vectors.split_at(1);
    let (high_refs, low_refs) = refs.split_at(HIGH_REFERENCES.len());
    Ok(PoleSimilarity {
        high: mean_similarity(&query[0], high_refs)?,
        low: mean_similarity(&query[0], low_refs)?,
    })
}

pub fn score_with_embeddings(
    transcript: &str,
    provider: &dyn EmbeddingProvider,
    min_words: usize,
    thresholds: &ClassificationThresholds,
) -> MethodOutput {
    let word_count = transcript.split_whitespace().count();
    if word_count < min_words {
        return MethodOutput::neutral(
            MethodKind::Embedding,
            Some(format!(
                "transcript too short ({word_count} words < {min_words}); defaulting to neutral"
            )),
        );
    }

    let sims = match pole_similarity(transcript, provider) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "embedding scorer failed");
            return MethodOutput::failed(
                MethodKind::Embedding,
                format!("embedding scorer failed: {e}"),
            );
        }
    };

    let denom = sims.high + sims.low;
    let balance = if denom < 1e-8 {
        0.0
    } else {
        (sims.high - sims.low) / denom
    };
    let amplified = balance * BALANCE_GAIN;
    let score = clip_score(NEUTRAL_SCORE + amplified);

    MethodOutput {
        method: MethodKind::Embedding,
        score: round_to(score, 2),
        classification: thresholds.classify(score),
        confidence: round_to(clip01(amplified.abs() / 1.5), 3),
        warning: None,
        error: None,
        detail: MethodDetail::Embedding {
            model_id: provider.model_id().to_string(),
            high_similarity: round_to(sims.high, 4),
            low_similarity: round_to(sims.low, 4),
            balance: round_to(balance, 4),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_embedding_score.rs"]
mod tests;
