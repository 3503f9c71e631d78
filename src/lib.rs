pub mod config;
pub mod error;
pub mod evaluation;
pub mod lexicon;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod session;

pub use config::ScoringConfig;
pub use error::{ConfigError, FuseError, InputError, ScoreError};
pub use model::{Classification, EnsembleResult, MethodScore};
pub use pipeline::stage5_fuse::{Assessment, MethodProviders, fuse, run_ensemble};
