use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::model::thresholds::{ClassificationThresholds, round_to};
use crate::report::{mean, rule, sample_sd};
use crate::session::SessionRecord;

pub const ENSEMBLE_KEY: &str = "ensemble";
const MIN_PAIRS: usize = 2;

pub type ScorePair = (f64, f64);

/// Pairs every successful fused method score (and the ensemble) with the
/// session's self-report. Sessions without a self-report are ignored.
pub fn collect_pairs(sessions: &[SessionRecord]) -> BTreeMap<String, Vec<ScorePair>> {
    let mut by_method: BTreeMap<String, Vec<ScorePair>> = BTreeMap::new();
    for session in sessions {
        let (Some(self_report), Some(assessment)) = (
            session.scoring.self_report_score,
            session.scoring.assessment.as_ref(),
        ) else {
            continue;
        };
        for output in &assessment.individual_results {
            if !output.is_ok() || !output.method.is_fused() {
                continue;
            }
            by_method
                .entry(output.method.name().to_string())
                .or_default()
                .push((self_report, output.score));
        }
        by_method
            .entry(ENSEMBLE_KEY.to_string())
            .or_default()
            .push((self_report, assessment.ensemble.fused_score));
    }
    by_method
}

/// Pearson correlation; `None` when either side has no variance.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len().min(y.len());
    if n < MIN_PAIRS {
        return None;
    }
    let (x, y) = (&x[..n], &y[..n]);
    let (mx, my) = (mean(x), mean(y));
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        sxy += (a - mx) * (b - my);
        sxx += (a - mx).powi(2);
        syy += (b - my).powi(2);
    }
    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        return None;
    }
    Some((sxy / denom).clamp(-1.0, 1.0))
}

/// 1-based ranks, ties sharing the mean of their positions.
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = rank;
        }
        i = j + 1;
    }
    ranks
}

pub fn spearman(x: &[f64], y: &[f64]) -> Option<f64> {
    pearson(&average_ranks(x), &average_ranks(y))
}

/// Two-sided p-value for a correlation `r` over `n` pairs, from
/// `t = r * sqrt((n - 2) / (1 - r^2))` with `n - 2` degrees of freedom.
/// Two points always lie on a line, so `n == 2` gives 1.
pub fn correlation_p_value(r: f64, n: usize) -> Option<f64> {
    if n < MIN_PAIRS || !r.is_finite() {
        return None;
    }
    if n == MIN_PAIRS {
        return Some(1.0);
    }
    let r = r.abs().min(1.0);
    if r >= 1.0 - 1e-12 {
        return Some(0.0);
    }
    let df = (n - 2) as f64;
    let t = r * (df / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    Some((2.0 * (1.0 - dist.cdf(t))).clamp(0.0, 1.0))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMetrics {
    pub n: usize,
    pub pearson_r: Option<f64>,
    pub pearson_p: Option<f64>,
    pub spearman_rho: Option<f64>,
    pub spearman_p: Option<f64>,
    pub mae: f64,
    pub classification_agreement: f64,
    pub self_report_mean: f64,
    pub ai_mean: f64,
    pub self_report_sd: f64,
    pub ai_sd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodComparison {
    Metrics(ComparisonMetrics),
    InsufficientData { n: usize },
}

pub fn compute_metrics(
    pairs: &[ScorePair],
    thresholds: &ClassificationThresholds,
) -> MethodComparison {
    let n = pairs.len();
    if n < MIN_PAIRS {
        return MethodComparison::InsufficientData { n };
    }
    let (self_scores, ai_scores): (Vec<f64>, Vec<f64>) = pairs.iter().copied().unzip();

    let mae = pairs.iter().map(|(s, a)| (s - a).abs()).sum::<f64>() / n as f64;
    let agreeing = pairs
        .iter()
        .filter(|(s, a)| thresholds.classify(*s) == thresholds.classify(*a))
        .count();

    let pearson_r = pearson(&self_scores, &ai_scores);
    let spearman_rho = spearman(&self_scores, &ai_scores);
    let p_value =
        |r: Option<f64>| r.and_then(|r| correlation_p_value(r, n)).map(|p| round_to(p, 4));

    MethodComparison::Metrics(ComparisonMetrics {
        n,
        pearson_r: pearson_r.map(|r| round_to(r, 4)),
        pearson_p: p_value(pearson_r),
        spearman_rho: spearman_rho.map(|r| round_to(r, 4)),
        spearman_p: p_value(spearman_rho),
        mae: round_to(mae, 4),
        classification_agreement: round_to(agreeing as f64 / n as f64, 4),
        self_report_mean: round_to(mean(&self_scores), 2),
        ai_mean: round_to(mean(&ai_scores), 2),
        self_report_sd: round_to(sample_sd(&self_scores), 2),
        ai_sd: round_to(sample_sd(&ai_scores), 2),
    })
}

pub fn analyze_sessions(
    sessions: &[SessionRecord],
    thresholds: &ClassificationThresholds,
) -> BTreeMap<String, MethodComparison> {
    collect_pairs(sessions)
        .into_iter()
        .map(|(method, pairs)| {
            let metrics = compute_metrics(&pairs, thresholds);
            (method, metrics)
        })
        .collect()
}

pub fn interpret_r(r: f64) -> &'static str {
    let r = r.abs();
    if r >= 0.7 {
        "Strong convergent validity"
    } else if r >= 0.5 {
        "Moderate convergent validity"
    } else if r >= 0.3 {
        "Weak convergent validity"
    } else {
        "Poor convergent validity"
    }
}

fn format_corr(r: Option<f64>, p: Option<f64>) -> String {
    match (r, p) {
        (Some(r), Some(p)) => format!("{r:+.4}  (p = {p:.4})"),
        (Some(r), None) => format!("{r:+.4}"),
        (None, _) => "undefined (no variance)".to_string(),
    }
}

pub fn render_comparison(results: &BTreeMap<String, MethodComparison>) -> String {
    let mut out = String::new();
    if results.is_empty() {
        out.push_str("No sessions with a linked self-report score.\n");
        return out;
    }

    let _ = writeln!(out, "{}", rule('═'));
    let _ = writeln!(out, "  MULTI-METHOD CORRELATION ANALYSIS: Self-Report vs. AI");
    let _ = writeln!(out, "{}", rule('═'));
    for (method, comparison) in results {
        let _ = writeln!(out);
        match comparison {
            MethodComparison::InsufficientData { n } => {
                let _ = writeln!(
                    out,
                    "  {method}: need at least {MIN_PAIRS} paired scores, found {n}"
                );
            }
            MethodComparison::Metrics(m) => {
                let _ = writeln!(out, "  -- {}", method.to_uppercase());
                let _ = writeln!(out, "  N = {}", m.n);
                let _ = writeln!(
                    out,
                    "  Pearson r  = {}",
                    format_corr(m.pearson_r, m.pearson_p)
                );
                let _ = writeln!(
                    out,
                    "  Spearman ρ = {}",
                    format_corr(m.spearman_rho, m.spearman_p)
                );
                let _ = writeln!(out, "  MAE        = {:.4}", m.mae);
                let _ = writeln!(
                    out,
                    "  Class. Agreement = {:.1}%",
                    m.classification_agreement * 100.0
                );
                let _ = writeln!(
                    out,
                    "  Self-report mean (SD) = {:.2} ({:.2}); AI mean (SD) = {:.2} ({:.2})",
                    m.self_report_mean, m.self_report_sd, m.ai_mean, m.ai_sd
                );
                if let Some(r) = m.pearson_r {
                    let _ = writeln!(out, "  → {}", interpret_r(r));
                }
            }
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule('═'));
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/evaluation/compare.rs"]
mod tests;
