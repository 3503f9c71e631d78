use super::*;

fn thresholds() -> ClassificationThresholds {
    ClassificationThresholds::default_v1()
}

fn recorded(domain: Option<&str>, facet: Option<&str>) -> RecordedResponses {
    RecordedResponses {
        domain: domain.map(str::to_string),
        facet: facet.map(str::to_string),
    }
}

const TRANSCRIPT: &str = "I love hosting dinners and meeting new people every weekend.";

#[test]
fn test_strip_code_fence() {
    assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```").trim(), "{\"a\":1}");
    assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    assert_eq!(strip_code_fence("```"), "");
}

#[test]
fn test_parse_domain_response_full() {
    let rating = parse_domain_response(
        r#"{"score": 4.2, "classification": "High", "confidence": 0.8, "evidence": "hosts often"}"#,
        &thresholds(),
    )
    .unwrap();
    assert_eq!(rating.score, 4.2);
    assert_eq!(rating.classification, Classification::High);
    assert_eq!(rating.confidence, 0.8);
    assert_eq!(rating.evidence, "hosts often");
}

#[test]
fn test_parse_domain_response_fills_defaults() {
    let rating = parse_domain_response(r#"{"score": "3.9"}"#, &thresholds()).unwrap();
    assert_eq!(rating.score, 3.9);
    assert_eq!(rating.classification, Classification::High);
    assert_eq!(rating.confidence, DEFAULT_RATER_CONFIDENCE);
    assert!(rating.evidence.is_empty());
}

#[test]
fn test_parse_domain_response_clamps_values() {
    let rating = parse_domain_response(
        r#"{"score": 7, "classification": "extreme", "confidence": 1.4}"#,
        &thresholds(),
    )
    .unwrap();
    assert_eq!(rating.score, 5.0);
    assert_eq!(rating.classification, Classification::High);
    assert_eq!(rating.confidence, 1.0);
}

#[test]
fn test_parse_domain_response_rejects_garbage() {
    assert!(parse_domain_response("not json", &thresholds()).is_err());
    assert!(parse_domain_response(r#"{"classification": "High"}"#, &thresholds()).is_err());
}

#[test]
fn test_score_domain_level_uses_model_reply() {
    let model = recorded(
        Some("```json\n{\"score\": 2.1, \"confidence\": 0.6, \"evidence\": \"quiet\"}\n```"),
        None,
    );
    let out = score_domain_level(TRANSCRIPT, &model, &thresholds());
    assert_eq!(out.method, MethodKind::RaterDomain);
    assert_eq!(out.score, 2.1);
    assert_eq!(out.classification, Classification::Low);
    assert_eq!(out.confidence, 0.6);
    assert!(out.method_score().is_some());
}

#[test]
fn test_score_domain_level_model_failure_is_excluded() {
    let out = score_domain_level(TRANSCRIPT, &RecordedResponses::default(), &thresholds());
    assert!(!out.is_ok());
    assert!(out.method_score().is_none());
}

#[test]
fn test_score_domain_level_parse_error_votes_neutral() {
    let model = recorded(Some("I cannot rate this."), None);
    let out = score_domain_level(TRANSCRIPT, &model, &thresholds());
    assert!(out.is_ok());
    assert_eq!(out.score, 3.0);
    assert_eq!(out.confidence, 0.0);
    match &out.detail {
        MethodDetail::Rater { evidence } => assert!(evidence.starts_with("rater parse error")),
        other => panic!("unexpected detail: {other:?}"),
    }
}

#[test]
fn test_score_domain_level_empty_transcript() {
    let model = recorded(Some(r#"{"score": 5}"#), None);
    let out = score_domain_level("   ", &model, &thresholds());
    assert_eq!(out.score, 3.0);
    assert_eq!(out.confidence, 0.0);
}

#[test]
fn test_score_facet_level_averages_and_is_not_fused() {
    let reply = r#"{"facet_scores": [
        {"facet_code": "E1", "facet_name": "Friendliness", "score": 4.0, "evidence": "warm"},
        {"facet_code": "E2", "facet_name": "Gregariousness", "score": 3.0}
    ]}"#;
    let model = recorded(None, Some(reply));
    let out = score_facet_level(TRANSCRIPT, &model, &thresholds());
    assert_eq!(out.method, MethodKind::RaterFacet);
    assert_eq!(out.score, 3.5);
    assert_eq!(out.classification, Classification::Medium);
    assert!(out.method_score().is_none());
    match &out.detail {
        MethodDetail::Facets { facet_scores } => {
            assert_eq!(facet_scores.len(), 2);
            assert!(facet_scores[1].evidence.is_empty());
        }
        other => panic!("unexpected detail: {other:?}"),
    }
}

#[test]
fn test_parse_facet_response_clips_scores() {
    let facets = parse_facet_response(
        r#"{"facet_scores": [
            {"facet_code": "E5", "facet_name": "Excitement-Seeking", "score": 9}
        ]}"#,
    )
    .unwrap();
    assert_eq!(facets[0].score, 5.0);
}
