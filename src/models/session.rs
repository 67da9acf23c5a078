use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::record::TranscriptRecord;

/// One discovered transcript file and everything derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Name of the project directory the transcript lives in
    pub project_path: String,
    /// File name with the `.jsonl` extension stripped
    pub session_id: String,
    pub file_path: PathBuf,
    pub modified: DateTime<Utc>,
    /// Records in file order
    pub records: Vec<TranscriptRecord>,
    pub summary: String,
    pub last_active: DateTime<Utc>,
}

impl Session {
    /// Build a session from parsed records, deriving `last_active`
    pub fn new(
        project_path: impl Into<String>,
        session_id: impl Into<String>,
        file_path: PathBuf,
        modified: DateTime<Utc>,
        records: Vec<TranscriptRecord>,
    ) -> Self {
        let last_active = last_record_timestamp(&records).unwrap_or(modified);
        Self {
            project_path: project_path.into(),
            session_id: session_id.into(),
            file_path,
            modified,
            records,
            summary: String::new(),
            last_active,
        }
    }
}

/// Timestamp of the last record that carries one
pub fn last_record_timestamp(records: &[TranscriptRecord]) -> Option<DateTime<Utc>> {
    records.iter().rev().find_map(|r| r.timestamp)
}
