use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InputError;
use crate::pipeline::stage1_features::LinguisticFeatures;
use crate::pipeline::stage5_fuse::Assessment;

const MAX_SESSION_ID_LEN: usize = 64;
const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const FILE_TIMESTAMP_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn_number: u32,
    pub timestamp: String,
    #[serde(default)]
    pub probe_id: Option<String>,
    pub ai_message: String,
    pub user_message: String,
    #[serde(default)]
    pub features: Option<LinguisticFeatures>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionScoring {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_report_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub started_at: String,
    pub completed_at: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
    pub total_turns: usize,
    #[serde(default)]
    pub turns: Vec<TurnRecord>,
    #[serde(default)]
    pub scoring: SessionScoring,
}

impl SessionRecord {
    pub fn summary(&self) -> String {
        let (score, class) = match &self.scoring.assessment {
            Some(a) => (
                format!("{:.2}", a.ensemble.fused_score),
                a.score_classification.to_string(),
            ),
            None => ("?".to_string(), "?".to_string()),
        };
        format!(
            "Session {}: {} turns, score={}, classification={}",
            self.session_id,
            self.turns.len(),
            score,
            class
        )
    }
}

pub fn is_valid_session_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_SESSION_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

#[derive(Debug, Clone)]
pub struct SessionLog {
    record: SessionRecord,
}

impl SessionLog {
    pub fn new(session_id: &str) -> Result<Self, InputError> {
        if !is_valid_session_id(session_id) {
            return Err(InputError::InvalidInput(format!(
                "session id {session_id:?} must be 1-{MAX_SESSION_ID_LEN} characters of \
                 [A-Za-z0-9_-]"
            )));
        }
        let metadata = BTreeMap::from([
            ("trait".to_string(), Value::from("Extraversion")),
            (
                "instrument".to_string(),
                Value::from("IPIP 50-item Big Five Markers"),
            ),
        ]);
        Ok(Self {
            record: SessionRecord {
                session_id: session_id.to_string(),
                started_at: now_rfc3339(),
                completed_at: None,
                metadata,
                total_turns: 0,
                turns: Vec::new(),
                scoring: SessionScoring::default(),
            },
        })
    }

    pub fn session_id(&self) -> &str {
        &self.record.session_id
    }

    pub fn log_turn(
        &mut self,
        turn_number: u32,
        ai_message: &str,
        user_message: &str,
        probe_id: Option<&str>,
        features: Option<LinguisticFeatures>,
    ) {
        self.record.turns.push(TurnRecord {
            turn_number,
            timestamp: now_rfc3339(),
            probe_id: probe_id.map(str::to_string),
            ai_message: ai_message.to_string(),
            user_message: user_message.to_string(),
            features,
        });
        self.record.total_turns = self.record.turns.len();
    }

    /// Records the final assessment and marks the session complete.
    pub fn log_scoring(&mut self, assessment: Assessment) {
        self.record.scoring.assessment = Some(assessment);
        self.record.completed_at = Some(now_rfc3339());
    }

    pub fn log_self_report(&mut self, score: f64) {
        self.record.scoring.self_report_score = Some(score);
    }

    pub fn set_metadata(&mut self, key: &str, value: impl Into<Value>) {
        self.record.metadata.insert(key.to_string(), value.into());
    }

    pub fn to_record(&self) -> &SessionRecord {
        &self.record
    }

    pub fn summary(&self) -> String {
        self.record.summary()
    }

    pub fn save(&mut self, dir: &Path) -> Result<PathBuf, InputError> {
        fs::create_dir_all(dir)?;
        if self.record.completed_at.is_none() {
            self.record.completed_at = Some(now_rfc3339());
        }
        let stamp = Utc::now().format(FILE_TIMESTAMP_FORMAT);
        let path = dir.join(format!("{}_{stamp}.json", self.record.session_id));
        write_record(&path, &self.record)?;
        tracing::info!(path = %path.display(), "saved session log");
        Ok(path)
    }
}

pub fn write_record(path: &Path, record: &SessionRecord) -> Result<(), InputError> {
    let json = serde_json::to_string_pretty(record)?;
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(json.as_bytes())?;
    w.flush()?;
    Ok(())
}

pub fn load_session(path: &Path) -> Result<SessionRecord, InputError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Session log files in `dir`, newest first. A missing directory has none.
pub fn list_sessions(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|e| e == "json") && path.is_file() {
            let modified = entry.metadata()?.modified()?;
            files.push((modified, path));
        }
    }
    files.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
    Ok(files.into_iter().map(|(_, p)| p).collect())
}

/// Loads every session log in `dir`, newest first. Unreadable files are
/// skipped with a warning.
pub fn load_all_sessions(dir: &Path) -> Result<Vec<SessionRecord>, InputError> {
    let mut out = Vec::new();
    for path in list_sessions(dir)? {
        match load_session(&path) {
            Ok(record) => out.push(record),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping session log"),
        }
    }
    Ok(out)
}

/// Newest log file written for `session_id`, if any.
pub fn find_latest_session(dir: &Path, session_id: &str) -> Result<Option<PathBuf>, InputError> {
    let prefix = format!("{session_id}_");
    for path in list_sessions(dir)? {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(stamp) = stem.strip_prefix(&prefix) else {
            continue;
        };
        if is_file_timestamp(stamp) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

fn is_file_timestamp(s: &str) -> bool {
    s.len() == FILE_TIMESTAMP_LEN
        && s.bytes()
            .enumerate()
            .all(|(i, b)| if i == 8 { b == b'_' } else { b.is_ascii_digit() })
}

#[cfg(test)]
#[path = "../../tests/src_inline/session/tests.rs"]
mod tests;
