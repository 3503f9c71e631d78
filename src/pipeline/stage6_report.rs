use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::InputError;
use crate::model::EnsembleResult;
use crate::pipeline::stage5_fuse::Assessment;
use crate::report::json::{render_assessment_json, render_ensemble_json};
use crate::report::text::render_report_text;

pub const ASSESSMENT_FILE: &str = "assessment.json";
pub const REPORT_FILE: &str = "report.txt";
pub const ENSEMBLE_FILE: &str = "ensemble.json";

pub fn write_reports(assessment: &Assessment, out_dir: &Path) -> Result<(), InputError> {
    fs::create_dir_all(out_dir)?;

    let json = render_assessment_json(assessment)?;
    write_text(&out_dir.join(ASSESSMENT_FILE), &json)?;

    let report = render_report_text(assessment);
    write_text(&out_dir.join(REPORT_FILE), &report)?;

    tracing::info!(out_dir = %out_dir.display(), "wrote assessment reports");
    Ok(())
}

pub fn write_ensemble(result: &EnsembleResult, out_dir: &Path) -> Result<(), InputError> {
    fs::create_dir_all(out_dir)?;
    let json = render_ensemble_json(result)?;
    write_text(&out_dir.join(ENSEMBLE_FILE), &json)?;
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
