pub mod json;
pub mod text;

use crate::model::method_output::MethodOutput;

pub const RULE_WIDTH: usize = 60;

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_percent(v: f64) -> String {
    format!("{:.1}%", v * 100.0)
}

pub fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

/// `✓` for a clean method result, `⚠` when it warned or failed.
pub fn status_marker(output: &MethodOutput) -> char {
    if output.error.is_none() && output.warning.is_none() {
        '✓'
    } else {
        '⚠'
    }
}

pub fn score_bar(score: f64) -> String {
    let filled = score.trunc().clamp(0.0, 5.0) as usize;
    let mut bar = String::with_capacity(5 * 3);
    bar.extend(std::iter::repeat_n('█', filled));
    bar.extend(std::iter::repeat_n('░', 5 - filled));
    bar
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation; 0 for fewer than two values.
pub fn sample_sd(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss = values.iter().map(|v| (v - m).powi(2)).sum::<f64>();
    (ss / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
