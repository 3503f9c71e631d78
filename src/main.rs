use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use trait_ensemble::config::ScoringConfig;
use trait_ensemble::evaluation::compare::{analyze_sessions, render_comparison};
use trait_ensemble::evaluation::self_report::{
    Keying, attach_self_report, likert_label, parse_responses, score_questionnaire,
};
use trait_ensemble::logging;
use trait_ensemble::model::MethodScore;
use trait_ensemble::model::thresholds::ClassificationThresholds;
use trait_ensemble::pipeline::stage1_features::extract_features;
use trait_ensemble::pipeline::stage3_embedding_score::{
    DEFAULT_MIN_WORDS, EmbeddingProvider, PrecomputedEmbeddings,
};
use trait_ensemble::pipeline::stage4_rater_score::{RaterModel, RecordedResponses};
use trait_ensemble::pipeline::stage5_fuse::{MethodProviders, fuse, run_ensemble};
use trait_ensemble::pipeline::stage6_report::{write_ensemble, write_reports};
use trait_ensemble::report::json::render_ensemble_json;
use trait_ensemble::report::text::{explain_method, render_report_text};
use trait_ensemble::session::{SessionLog, load_all_sessions};

#[derive(Debug, Parser)]
#[command(name = "trait-ensemble", version, about)]
struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fuse a JSON array of method scores.
    Fuse(FuseArgs),
    /// Score a transcript with every available method and fuse the results.
    Score(ScoreArgs),
    /// Score the IPIP Extraversion self-report and optionally link it to a session.
    SelfReport(SelfReportArgs),
    /// Compare saved sessions' method scores against their self-reports.
    Compare(CompareArgs),
}

#[derive(Debug, Args)]
struct FuseArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ScoreArgs {
    /// Plain-text answers; blank lines separate turns.
    #[arg(long)]
    transcript: PathBuf,
    #[arg(long)]
    embeddings: Option<PathBuf>,
    #[arg(long)]
    rater_response: Option<PathBuf>,
    #[arg(long)]
    facet_response: Option<PathBuf>,
    #[arg(long)]
    no_features: bool,
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, requires = "session_id")]
    session_dir: Option<PathBuf>,
    #[arg(long, requires = "session_dir")]
    session_id: Option<String>,
    #[arg(long, default_value_t = 2.3)]
    low_threshold: f64,
    #[arg(long, default_value_t = 3.6)]
    high_threshold: f64,
    #[arg(long, default_value_t = DEFAULT_MIN_WORDS)]
    min_words: usize,
    /// Print the per-method explanations after the report.
    #[arg(long)]
    explain: bool,
}

#[derive(Debug, Args)]
struct SelfReportArgs {
    /// Ten comma-separated answers, 1-5, in item order.
    #[arg(long)]
    responses: String,
    #[arg(long, requires = "session_id")]
    session_dir: Option<PathBuf>,
    #[arg(long, requires = "session_dir")]
    session_id: Option<String>,
}

#[derive(Debug, Args)]
struct CompareArgs {
    #[arg(long)]
    session_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Fuse(args) => run_fuse(&args),
        Command::Score(args) => run_score(&args),
        Command::SelfReport(args) => run_self_report(&args),
        Command::Compare(args) => run_compare(&args),
    }
}

fn run_fuse(args: &FuseArgs) -> Result<(), String> {
    let raw = std::fs::read_to_string(&args.input)
        .map_err(|e| format!("cannot read {}: {e}", args.input.display()))?;
    let scores: Vec<MethodScore> =
        serde_json::from_str(&raw).map_err(|e| format!("invalid method scores: {e}"))?;
    let result = fuse(&scores).map_err(|e| e.to_string())?;

    println!(
        "{}",
        render_ensemble_json(&result).map_err(|e| e.to_string())?
    );
    if let Some(out) = &args.out {
        write_ensemble(&result, out).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn build_config(args: &ScoreArgs) -> Result<ScoringConfig, String> {
    let thresholds = ClassificationThresholds::new(args.low_threshold, args.high_threshold)
        .map_err(|e| e.to_string())?;
    let config = ScoringConfig {
        thresholds,
        embedding_min_words: args.min_words,
        run_features: !args.no_features,
        run_embedding: args.embeddings.is_some(),
        run_rater: args.rater_response.is_some(),
        run_facets: args.facet_response.is_some(),
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn split_turns(text: &str) -> Vec<String> {
    let mut turns = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                turns.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        turns.push(current.join(" "));
    }
    turns
}

fn run_score(args: &ScoreArgs) -> Result<(), String> {
    let config = build_config(args)?;
    let raw = std::fs::read_to_string(&args.transcript)
        .map_err(|e| format!("cannot read {}: {e}", args.transcript.display()))?;
    let turns = split_turns(&raw);
    let transcript = turns.join(" ");

    let embeddings = args
        .embeddings
        .as_deref()
        .map(PrecomputedEmbeddings::load)
        .transpose()
        .map_err(|e| e.to_string())?;
    let rater = if args.rater_response.is_some() || args.facet_response.is_some() {
        Some(
            RecordedResponses::from_files(
                args.rater_response.as_deref(),
                args.facet_response.as_deref(),
            )
            .map_err(|e| e.to_string())?,
        )
    } else {
        None
    };
    let providers = MethodProviders {
        embeddings: embeddings.as_ref().map(|e| e as &dyn EmbeddingProvider),
        rater: rater.as_ref().map(|r| r as &dyn RaterModel),
    };

    let assessment = run_ensemble(&transcript, &config, providers).map_err(|e| e.to_string())?;
    print!("{}", render_report_text(&assessment));
    if args.explain {
        for output in &assessment.individual_results {
            println!("\n{}", explain_method(output));
        }
    }

    if let Some(out) = &args.out {
        write_reports(&assessment, out).map_err(|e| e.to_string())?;
    }

    if let (Some(dir), Some(id)) = (&args.session_dir, &args.session_id) {
        let mut log = SessionLog::new(id).map_err(|e| e.to_string())?;
        for (i, turn) in turns.iter().enumerate() {
            log.log_turn(i as u32 + 1, "", turn, None, Some(extract_features(turn)));
        }
        log.set_metadata("transcript", args.transcript.display().to_string());
        log.log_scoring(assessment);
        let path = log.save(dir).map_err(|e| e.to_string())?;
        eprintln!("{}", log.summary());
        eprintln!("Session saved -> {}", path.display());
    }
    Ok(())
}

fn run_self_report(args: &SelfReportArgs) -> Result<(), String> {
    let raw = parse_responses(&args.responses).map_err(|e| e.to_string())?;
    let result = score_questionnaire(&raw).map_err(|e| e.to_string())?;
    let band = ClassificationThresholds::default_v1().classify(result.domain_score);

    for r in &result.responses {
        let key = match r.keying {
            Keying::Positive => '+',
            Keying::Negative => '-',
        };
        println!(
            "  {:>2}. [{key}] {:<46} {} {}",
            r.position,
            r.text,
            r.raw,
            likert_label(r.raw).unwrap_or("?")
        );
    }
    println!("Domain Score   : {:.2} / 5.00", result.domain_score);
    println!("Classification : {band} Extraversion");

    if let (Some(dir), Some(id)) = (&args.session_dir, &args.session_id) {
        link_session(dir, id, result.domain_score)?;
    }
    Ok(())
}

fn link_session(dir: &Path, session_id: &str, score: f64) -> Result<(), String> {
    match attach_self_report(dir, session_id, score).map_err(|e| e.to_string())? {
        Some(linked) => {
            println!("Linked self-report to session {session_id}.");
            if let (Some(ai), Some(class)) = (linked.ai_score, linked.ai_classification) {
                println!("Interview score: {ai:.2} ({class})");
            }
            Ok(())
        }
        None => Err(format!("no session log found for session id {session_id}")),
    }
}

fn run_compare(args: &CompareArgs) -> Result<(), String> {
    let sessions = load_all_sessions(&args.session_dir).map_err(|e| e.to_string())?;
    let results = analyze_sessions(&sessions, &ClassificationThresholds::default_v1());
    print!("{}", render_comparison(&results));
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
