use super::*;
use crate::config::ScoringConfig;
use crate::pipeline::stage5_fuse::{MethodProviders, run_ensemble};
use crate::session::SessionLog;

fn thresholds() -> ClassificationThresholds {
    ClassificationThresholds::default_v1()
}

fn session(id: &str, text: &str, self_report: Option<f64>) -> SessionRecord {
    let config = ScoringConfig {
        run_embedding: false,
        run_rater: false,
        ..ScoringConfig::default()
    };
    let mut log = SessionLog::new(id).unwrap();
    log.log_scoring(run_ensemble(text, &config, MethodProviders::default()).unwrap());
    if let Some(score) = self_report {
        log.log_self_report(score);
    }
    log.to_record().clone()
}

#[test]
fn test_average_ranks_share_ties() {
    assert_eq!(
        average_ranks(&[10.0, 20.0, 20.0, 30.0]),
        vec![1.0, 2.5, 2.5, 4.0]
    );
    assert_eq!(average_ranks(&[3.0, 1.0, 2.0]), vec![3.0, 1.0, 2.0]);
    assert!(average_ranks(&[]).is_empty());
}

#[test]
fn test_pearson() {
    let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
    assert!((r - 1.0).abs() < 1e-12);
    let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
    assert!((r + 1.0).abs() < 1e-12);
    assert_eq!(pearson(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]), None);
    assert_eq!(pearson(&[1.0], &[2.0]), None);
}

#[test]
fn test_spearman_is_rank_based() {
    let rho = spearman(&[1.0, 2.0, 3.0, 4.0], &[1.0, 4.0, 9.0, 16.0]).unwrap();
    assert!((rho - 1.0).abs() < 1e-12);
}

#[test]
fn test_compute_metrics() {
    let pairs = [(2.0, 2.2), (3.0, 3.1), (4.0, 4.5)];
    let MethodComparison::Metrics(m) = compute_metrics(&pairs, &thresholds()) else {
        panic!("expected metrics");
    };
    assert_eq!(m.n, 3);
    assert_eq!(m.mae, 0.2667);
    assert_eq!(m.classification_agreement, 1.0);
    assert_eq!(m.self_report_mean, 3.0);
    assert_eq!(m.ai_mean, 3.27);
    assert_eq!(m.self_report_sd, 1.0);
    assert!(m.pearson_r.unwrap() > 0.9);
    assert_eq!(m.spearman_rho, Some(1.0));
    assert_eq!(m.spearman_p, Some(0.0));
    let p = m.pearson_p.unwrap();
    assert!(p > 0.0 && p < 1.0);
}

#[test]
fn test_correlation_p_value_known_values() {
    // df = 1: p = 1 - (2/pi) atan|t|, with t = 1/sqrt(3) for r = 0.5.
    assert!((correlation_p_value(0.5, 3).unwrap() - 2.0 / 3.0).abs() < 1e-6);
    // df = 2: p = 1 - |t| / sqrt(2 + t^2), which is 0.5 for r = 0.5.
    assert!((correlation_p_value(0.5, 4).unwrap() - 0.5).abs() < 1e-6);
    assert!((correlation_p_value(-0.5, 4).unwrap() - 0.5).abs() < 1e-6);
    assert!((correlation_p_value(0.0, 10).unwrap() - 1.0).abs() < 1e-6);
}

#[test]
fn test_correlation_p_value_edges() {
    assert_eq!(correlation_p_value(0.9, 1), None);
    assert_eq!(correlation_p_value(0.9, 2), Some(1.0));
    assert_eq!(correlation_p_value(1.0, 5), Some(0.0));
    assert_eq!(correlation_p_value(-1.0, 5), Some(0.0));
    assert_eq!(correlation_p_value(f64::NAN, 5), None);
}

#[test]
fn test_render_shows_p_values() {
    let mut results = BTreeMap::new();
    results.insert(
        ENSEMBLE_KEY.to_string(),
        compute_metrics(&[(2.0, 2.0), (3.0, 3.5), (4.0, 4.5), (5.0, 4.8)], &thresholds()),
    );
    let text = render_comparison(&results);
    assert!(text.contains("Pearson r  = +"));
    assert!(text.contains("(p = "));
}

#[test]
fn test_compute_metrics_needs_two_pairs() {
    assert_eq!(
        compute_metrics(&[(3.0, 3.0)], &thresholds()),
        MethodComparison::InsufficientData { n: 1 }
    );
}

#[test]
fn test_interpret_r() {
    assert_eq!(interpret_r(-0.75), "Strong convergent validity");
    assert_eq!(interpret_r(0.5), "Moderate convergent validity");
    assert_eq!(interpret_r(0.3), "Weak convergent validity");
    assert_eq!(interpret_r(0.1), "Poor convergent validity");
}

#[test]
fn test_analyze_sessions_groups_methods_and_ensemble() {
    let sessions = vec![
        session("s1", "We love parties and meeting new people!", Some(4.5)),
        session("s2", "I guess I mostly stay home alone, maybe.", Some(1.8)),
        session("s3", "Great trip with friends.", None),
    ];
    let pairs = collect_pairs(&sessions);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[ENSEMBLE_KEY].len(), 2);
    assert_eq!(pairs["feature_based"].len(), 2);

    let results = analyze_sessions(&sessions, &thresholds());
    assert!(matches!(
        results[ENSEMBLE_KEY],
        MethodComparison::Metrics(ComparisonMetrics { n: 2, .. })
    ));
    let text = render_comparison(&results);
    assert!(text.contains("-- ENSEMBLE"));
    assert!(text.contains("-- FEATURE_BASED"));
}

#[test]
fn test_render_without_data() {
    let text = render_comparison(&BTreeMap::new());
    assert!(text.starts_with("No sessions"));
}
