use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::classification::Classification;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;
pub const NEUTRAL_SCORE: f64 = 3.0;

/// A score equal to a cut point belongs to the lower band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    pub low: f64,
    pub high: f64,
}

impl ClassificationThresholds {
    pub fn default_v1() -> Self {
        Self {
            low: 2.3,
            high: 3.6,
        }
    }

    pub fn new(low: f64, high: f64) -> Result<Self, ConfigError> {
        let thresholds = Self { low, high };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("low", self.low), ("high", self.high)] {
            if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if self.low >= self.high {
            return Err(ConfigError::ThresholdOrder {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    pub fn classify(&self, score: f64) -> Classification {
        if score <= self.low {
            Classification::Low
        } else if score <= self.high {
            Classification::Medium
        } else {
            Classification::High
        }
    }
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

pub fn clip_score(x: f64) -> f64 {
    x.clamp(MIN_SCORE, MAX_SCORE)
}

pub fn clip01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

pub fn round_to(x: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (x * factor).round() / factor
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
