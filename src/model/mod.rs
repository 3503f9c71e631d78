pub mod classification;
pub mod ensemble;
pub mod method_output;
pub mod method_score;
pub mod thresholds;

pub use classification::Classification;
pub use ensemble::{EnsembleResult, FusionMethod, PairAgreement};
pub use method_output::{MethodDetail, MethodKind, MethodOutput};
pub use method_score::MethodScore;
pub use thresholds::ClassificationThresholds;
