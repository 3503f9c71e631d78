use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    Low,
    Medium,
    High,
}

impl Classification {
    pub fn name(self) -> &'static str {
        match self {
            Classification::Low => "Low",
            Classification::Medium => "Medium",
            Classification::High => "High",
        }
    }
}

pub fn classification_order() -> &'static [Classification] {
    &[
        Classification::Low,
        Classification::Medium,
        Classification::High,
    ]
}

/// Tie-break preference when vote counts and top confidences are equal.
pub fn tie_break_order() -> &'static [Classification] {
    &[
        Classification::Medium,
        Classification::High,
        Classification::Low,
    ]
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Classification::Low),
            "medium" | "moderate" | "mid" => Ok(Classification::Medium),
            "high" => Ok(Classification::High),
            other => Err(format!("unknown classification: {other}")),
        }
    }
}
