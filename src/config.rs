use crate::error::ConfigError;
use crate::model::thresholds::ClassificationThresholds;
use crate::pipeline::stage3_embedding_score::DEFAULT_MIN_WORDS;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub thresholds: ClassificationThresholds,
    pub embedding_min_words: usize,
    pub run_features: bool,
    pub run_embedding: bool,
    pub run_rater: bool,
    /// Facet-level rating is diagnostic only and off unless asked for.
    pub run_facets: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            thresholds: ClassificationThresholds::default_v1(),
            embedding_min_words: DEFAULT_MIN_WORDS,
            run_features: true,
            run_embedding: true,
            run_rater: true,
            run_facets: false,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        if !(self.run_features || self.run_embedding || self.run_rater) {
            return Err(ConfigError::NoMethodsEnabled);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
