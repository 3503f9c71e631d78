pub mod compare;
pub mod self_report;

pub use compare::{MethodComparison, analyze_sessions, render_comparison};
pub use self_report::{attach_self_report, score_questionnaire};
