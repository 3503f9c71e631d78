use std::fmt::Write;

use crate::model::classification::classification_order;
use crate::model::method_output::{MethodDetail, MethodKind, MethodOutput};
use crate::pipeline::stage5_fuse::Assessment;
use crate::report::{format_percent, format_score, rule, score_bar, status_marker};

pub fn render_report_text(assessment: &Assessment) -> String {
    let ensemble = &assessment.ensemble;
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule('═'));
    let _ = writeln!(out, "  EXTRAVERSION ASSESSMENT: MULTI-METHOD RESULTS");
    let _ = writeln!(out, "{}", rule('═'));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  ENSEMBLE SCORE:          {} / 5.00",
        format_score(ensemble.fused_score)
    );
    let _ = writeln!(
        out,
        "  CLASSIFICATION:          {}",
        assessment.score_classification
    );
    let _ = writeln!(
        out,
        "  MAJORITY VOTE:           {}",
        ensemble.fused_classification
    );
    let _ = writeln!(
        out,
        "  CONFIDENCE:              {}",
        format_percent(ensemble.overall_confidence)
    );
    let _ = writeln!(
        out,
        "  METHODS AGREE:           {}",
        if ensemble.methods_agree { "Yes" } else { "No" }
    );
    let _ = writeln!(
        out,
        "  AGREEMENT RATE:          {}",
        format_percent(ensemble.agreement_rate())
    );
    let _ = writeln!(
        out,
        "  FUSION METHOD:           {}",
        ensemble.fusion_method.name()
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", rule('─'));
    let _ = writeln!(out, "  INDIVIDUAL METHOD SCORES");
    let _ = writeln!(out, "{}", rule('─'));
    for output in assessment
        .individual_results
        .iter()
        .filter(|o| o.method.is_fused())
    {
        out.push_str(&method_line(output));
        out.push('\n');
    }

    let facets = assessment
        .individual_results
        .iter()
        .find_map(|o| match &o.detail {
            MethodDetail::Facets { facet_scores } if !facet_scores.is_empty() => Some(facet_scores),
            _ => None,
        });
    if let Some(facet_scores) = facets {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", rule('─'));
        let _ = writeln!(out, "  FACET-LEVEL DETAIL (secondary)");
        let _ = writeln!(out, "{}", rule('─'));
        for f in facet_scores {
            let _ = writeln!(
                out,
                "  {} {:20} {:.1}  {}",
                f.facet_code,
                f.facet_name,
                f.score,
                score_bar(f.score)
            );
        }
    }

    if !ensemble.classification_votes.is_empty() {
        let votes = classification_order()
            .iter()
            .filter_map(|c| {
                ensemble
                    .classification_votes
                    .get(c)
                    .map(|n| format!("{c}={n}"))
            })
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out);
        let _ = writeln!(out, "  VOTES: {votes}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule('═'));
    out
}

fn method_line(output: &MethodOutput) -> String {
    let name = output.method.name();
    if let Some(err) = &output.error {
        return format!("  ⚠ {name:20}  -        -         {err}");
    }
    let mut line = format!(
        "  {} {name:20}  {}/5.0  {:8}  conf={}",
        status_marker(output),
        format_score(output.score),
        output.classification.name(),
        format_percent(output.confidence)
    );
    if let Some(warning) = &output.warning {
        line.push_str("  ");
        line.push_str(warning);
    }
    line
}

pub fn explain_method(output: &MethodOutput) -> String {
    match output.method {
        MethodKind::FeatureBased => explain_features(output),
        MethodKind::Embedding => explain_embedding(output),
        MethodKind::RaterDomain | MethodKind::RaterFacet => explain_rater(output),
    }
}

fn explain_features(output: &MethodOutput) -> String {
    let mut lines = vec![
        format!(
            "Feature-Based Score: {}/5.0 → {}",
            format_score(output.score),
            output.classification
        ),
        format!("Confidence: {}", format_percent(output.confidence)),
    ];
    if let Some(warning) = &output.warning {
        lines.push(warning.clone());
    }
    if let MethodDetail::Features { contributions, .. } = &output.detail {
        lines.push(String::new());
        lines.push("Feature contributions (positive = more extraverted):".to_string());
        let mut sorted = contributions.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));
        for c in sorted.into_iter().filter(|c| c.contribution.abs() >= 0.001) {
            let arrow = if c.contribution > 0.0 { '↑' } else { '↓' };
            lines.push(format!(
                "  {arrow} {}: {:+.3}  (raw: {})",
                c.feature, c.contribution, c.value
            ));
        }
    }
    lines.join("\n")
}

fn explain_embedding(output: &MethodOutput) -> String {
    if let Some(err) = &output.error {
        return format!("Embedding Scorer: FAILED: {err}");
    }
    if let Some(warning) = &output.warning {
        return format!("Embedding Scorer: {warning}");
    }
    let mut lines = vec![
        format!(
            "Embedding-Based Score: {}/5.0 → {}",
            format_score(output.score),
            output.classification
        ),
        format!("Confidence: {}", format_percent(output.confidence)),
    ];
    if let MethodDetail::Embedding {
        model_id,
        high_similarity,
        low_similarity,
        balance,
    } = &output.detail
    {
        lines.push(format!("Model: {model_id}"));
        lines.push(format!("Similarity to High-E references: {high_similarity:.4}"));
        lines.push(format!("Similarity to Low-E references:  {low_similarity:.4}"));
        lines.push(format!("Balance (positive = extraverted):  {balance:.4}"));
    }
    lines.join("\n")
}

fn explain_rater(output: &MethodOutput) -> String {
    if let Some(err) = &output.error {
        return format!("Rater Scorer: FAILED: {err}");
    }
    match &output.detail {
        MethodDetail::Facets { facet_scores } => {
            let mut lines = vec![format!(
                "Facet-Level Score: {}/5.0 → {}",
                format_score(output.score),
                output.classification
            )];
            for f in facet_scores {
                lines.push(format!(
                    "  {} {}: {:.1}: {}",
                    f.facet_code, f.facet_name, f.score, f.evidence
                ));
            }
            lines.join("\n")
        }
        detail => {
            let evidence = match detail {
                MethodDetail::Rater { evidence } if !evidence.is_empty() => evidence.as_str(),
                _ => "N/A",
            };
            format!(
                "Domain-Level Score: {}/5.0 → {}\nConfidence: {}\nEvidence: {}",
                format_score(output.score),
                output.classification,
                format_percent(output.confidence),
                evidence
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
