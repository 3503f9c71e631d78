use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FuseError {
    #[error("insufficient input: at least one method score is required for fusion")]
    InsufficientInput,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("method name must not be empty")]
    EmptyMethodName,

    #[error("score {value} for method {method} is outside [1.0, 5.0]")]
    ScoreOutOfRange { method: String, value: f64 },

    #[error("confidence {value} for method {method} is outside [0.0, 1.0]")]
    ConfidenceOutOfRange { method: String, value: f64 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("threshold {name}={value} is outside [1.0, 5.0]")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("low threshold {low} must be below high threshold {high}")]
    ThresholdOrder { low: f64, high: f64 },

    #[error("at least one scoring method must be enabled")]
    NoMethodsEnabled,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Score(#[from] ScoreError),
}
