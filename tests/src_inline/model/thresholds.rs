use super::*;

#[test]
fn test_classify_boundaries_belong_to_lower_band() {
    let t = ClassificationThresholds::default_v1();
    assert_eq!(t.classify(1.0), Classification::Low);
    assert_eq!(t.classify(2.3), Classification::Low);
    assert_eq!(t.classify(2.31), Classification::Medium);
    assert_eq!(t.classify(3.6), Classification::Medium);
    assert_eq!(t.classify(3.61), Classification::High);
    assert_eq!(t.classify(5.0), Classification::High);
}

#[test]
fn test_new_rejects_inverted_thresholds() {
    let err = ClassificationThresholds::new(3.0, 2.0).unwrap_err();
    assert_eq!(err, ConfigError::ThresholdOrder { low: 3.0, high: 2.0 });
    assert!(ClassificationThresholds::new(3.0, 3.0).is_err());
}

#[test]
fn test_new_rejects_out_of_range_thresholds() {
    match ClassificationThresholds::new(0.5, 3.0) {
        Err(ConfigError::ThresholdOutOfRange { name, .. }) => assert_eq!(name, "low"),
        other => panic!("unexpected: {other:?}"),
    }
    match ClassificationThresholds::new(2.0, f64::NAN) {
        Err(ConfigError::ThresholdOutOfRange { name, .. }) => assert_eq!(name, "high"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_clip_and_round_helpers() {
    assert_eq!(clip_score(7.2), MAX_SCORE);
    assert_eq!(clip_score(-1.0), MIN_SCORE);
    assert_eq!(clip_score(3.3), 3.3);
    assert_eq!(clip01(1.7), 1.0);
    assert_eq!(clip01(-0.2), 0.0);
    assert_eq!(round_to(4.19565, 2), 4.2);
    assert_eq!(round_to(0.76666, 3), 0.767);
}
