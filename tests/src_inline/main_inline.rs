use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("trait-ensemble").chain(args.iter().copied()))
}

fn score_args(args: &[&str]) -> ScoreArgs {
    match parse(args).unwrap().command {
        Command::Score(a) => a,
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_split_turns_on_blank_lines() {
    let text = "First answer\ncontinues here.\n\n\n  Second answer.  \n\nThird.";
    assert_eq!(
        split_turns(text),
        vec!["First answer continues here.", "Second answer.", "Third."]
    );
    assert!(split_turns("\n\n").is_empty());
}

#[test]
fn test_score_defaults_run_features_only() {
    let args = score_args(&["score", "--transcript", "t.txt"]);
    let config = build_config(&args).unwrap();
    assert!(config.run_features);
    assert!(!config.run_embedding);
    assert!(!config.run_rater);
    assert!(!config.run_facets);
    assert_eq!(config.embedding_min_words, 15);
    assert_eq!(config.thresholds, ClassificationThresholds::default_v1());
}

#[test]
fn test_score_flags_enable_methods() {
    let args = score_args(&[
        "score",
        "--transcript",
        "t.txt",
        "--embeddings",
        "e.json",
        "--rater-response",
        "r.json",
        "--facet-response",
        "f.json",
        "--min-words",
        "5",
        "--low-threshold",
        "2.0",
        "--high-threshold",
        "4.0",
    ]);
    let config = build_config(&args).unwrap();
    assert!(config.run_embedding && config.run_rater && config.run_facets);
    assert_eq!(config.embedding_min_words, 5);
    assert_eq!(config.thresholds.low, 2.0);
    assert_eq!(config.thresholds.high, 4.0);
}

#[test]
fn test_build_config_rejects_bad_combinations() {
    let args = score_args(&["score", "--transcript", "t.txt", "--no-features"]);
    assert!(build_config(&args).is_err());

    let args = score_args(&[
        "score",
        "--transcript",
        "t.txt",
        "--low-threshold",
        "3.9",
    ]);
    assert!(build_config(&args).is_err());
}

#[test]
fn test_session_flags_require_each_other() {
    assert!(parse(&["score", "--transcript", "t.txt", "--session-dir", "s"]).is_err());
    assert!(parse(&["self-report", "--responses", "1,2", "--session-id", "x"]).is_err());
    assert!(
        parse(&[
            "score",
            "--transcript",
            "t.txt",
            "--session-dir",
            "s",
            "--session-id",
            "x"
        ])
        .is_ok()
    );
}

#[test]
fn test_other_subcommands_parse() {
    let cli = parse(&["--log-level", "debug", "fuse", "--input", "scores.json"]).unwrap();
    assert_eq!(cli.log_level, "debug");
    assert!(matches!(cli.command, Command::Fuse(FuseArgs { out: None, .. })));
    assert!(matches!(
        parse(&["compare", "--session-dir", "s"]).unwrap().command,
        Command::Compare(_)
    ));
    assert!(parse(&["score"]).is_err());
}
