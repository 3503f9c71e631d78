use super::*;
use crate::config::ScoringConfig;
use crate::pipeline::stage1_features::extract_features;
use crate::pipeline::stage5_fuse::{MethodProviders, run_ensemble};
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("trait_session_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn assessment_for(text: &str) -> Assessment {
    let config = ScoringConfig {
        run_embedding: false,
        run_rater: false,
        ..ScoringConfig::default()
    };
    run_ensemble(text, &config, MethodProviders::default()).unwrap()
}

#[test]
fn test_session_id_validation() {
    assert!(is_valid_session_id("abc123"));
    assert!(is_valid_session_id("pilot_07-b"));
    assert!(!is_valid_session_id(""));
    assert!(!is_valid_session_id("../etc"));
    assert!(!is_valid_session_id("has space"));
    assert!(!is_valid_session_id(&"a".repeat(65)));
    assert!(is_valid_session_id(&"a".repeat(64)));
    assert!(SessionLog::new("bad id!").is_err());
}

#[test]
fn test_log_turns_and_summary() {
    let mut log = SessionLog::new("abc").unwrap();
    assert_eq!(log.summary(), "Session abc: 0 turns, score=?, classification=?");

    let answer = "We throw a big party every summer.";
    log.log_turn(
        1,
        "Tell me about summers.",
        answer,
        Some("probe_E2_1"),
        Some(extract_features(answer)),
    );
    log.log_turn(2, "Anything else?", "Not really.", None, None);
    log.set_metadata("cohort", "pilot");
    log.log_scoring(assessment_for(answer));

    let record = log.to_record();
    assert_eq!(record.total_turns, 2);
    assert_eq!(record.turns[0].probe_id.as_deref(), Some("probe_E2_1"));
    assert!(record.turns[1].features.is_none());
    assert_eq!(record.metadata["cohort"], "pilot");
    assert_eq!(record.metadata["trait"], "Extraversion");
    assert!(record.completed_at.is_some());
    assert!(log.summary().starts_with("Session abc: 2 turns, score="));
    assert!(!log.summary().contains("score=?"));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = make_temp_dir();
    let mut log = SessionLog::new("roundtrip").unwrap();
    log.log_turn(1, "Hi", "Hello there friends!", None, None);
    let path = log.save(&dir).unwrap();

    let name = path.file_name().and_then(|n| n.to_str()).unwrap();
    assert!(name.starts_with("roundtrip_"));
    assert!(name.ends_with(".json"));

    let loaded = load_session(&path).unwrap();
    assert_eq!(loaded.session_id, "roundtrip");
    assert_eq!(loaded.total_turns, 1);
    assert_eq!(loaded.turns[0].user_message, "Hello there friends!");
    assert!(loaded.completed_at.is_some());
    assert!(loaded.scoring.assessment.is_none());
}

#[test]
fn test_saved_assessment_survives_reload() {
    let dir = make_temp_dir();
    let mut log = SessionLog::new("scored").unwrap();
    let assessment = assessment_for("I always talk to everyone at parties and love it!");
    let expected_class = assessment.ensemble.fused_classification;
    log.log_scoring(assessment);
    let path = log.save(&dir).unwrap();

    let loaded = load_session(&path).unwrap();
    let reloaded = loaded.scoring.assessment.unwrap();
    assert_eq!(reloaded.ensemble.fused_classification, expected_class);
    assert_eq!(reloaded.individual_results.len(), 1);
}

#[test]
fn test_list_and_load_all_sessions() {
    let dir = make_temp_dir();
    assert!(list_sessions(&dir.join("absent")).unwrap().is_empty());

    SessionLog::new("one").unwrap().save(&dir).unwrap();
    SessionLog::new("two").unwrap().save(&dir).unwrap();
    fs::write(dir.join("notes.txt"), "ignored").unwrap();
    fs::write(dir.join("broken.json"), "{").unwrap();

    let files = list_sessions(&dir).unwrap();
    assert_eq!(files.len(), 3);

    let sessions = load_all_sessions(&dir).unwrap();
    let mut ids = sessions
        .iter()
        .map(|s| s.session_id.as_str())
        .collect::<Vec<_>>();
    ids.sort_unstable();
    assert_eq!(ids, vec!["one", "two"]);
}

#[test]
fn test_find_latest_session_matches_exact_id() {
    let dir = make_temp_dir();
    let mut other = SessionLog::new("abc_def").unwrap();
    let other_path = other.save(&dir).unwrap();
    assert_eq!(find_latest_session(&dir, "abc").unwrap(), None);

    let mut log = SessionLog::new("abc").unwrap();
    let path = log.save(&dir).unwrap();
    assert_eq!(find_latest_session(&dir, "abc").unwrap(), Some(path));
    assert_eq!(find_latest_session(&dir, "abc_def").unwrap(), Some(other_path));
}
