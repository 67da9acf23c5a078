//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating test `~/.claude/projects` directory structures
pub struct ProjectsDirBuilder {
    temp_dir: TempDir,
}

impl ProjectsDirBuilder {
    /// Create a new builder with an empty projects directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the projects directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory with the given name and transcript files
    pub fn with_project(self, name: &str, transcripts: &[TranscriptBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join(name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for transcript in transcripts {
            transcript.create_in(&project_dir);
        }

        self
    }

    /// Add an arbitrary file at `relative` with raw content
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ProjectsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `<session-id>.jsonl` transcript
pub struct TranscriptBuilder {
    session_id: String,
    lines: Vec<String>,
}

impl TranscriptBuilder {
    pub fn new(session_id: &str) -> Self {
        Self { session_id: session_id.to_string(), lines: Vec::new() }
    }

    /// Add a record
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Add a raw line (malformed input, blank lines, ...)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        let file_path = dir.join(format!("{}.jsonl", self.session_id));
        let mut file = fs::File::create(file_path).expect("Failed to create transcript file");

        let content = self.lines.join("\n");
        file.write_all(content.as_bytes()).expect("Failed to write transcript file");
    }
}

/// Builder for transcript records
pub struct RecordBuilder {
    record_type: String,
    text: String,
    cwd: Option<String>,
    timestamp: Option<String>,
    session_id: String,
}

impl RecordBuilder {
    /// Create a new user record
    pub fn user(text: &str) -> Self {
        Self {
            record_type: "user".to_string(),
            text: text.to_string(),
            cwd: None,
            timestamp: None,
            session_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
        }
    }

    /// Create a new assistant record
    pub fn assistant(text: &str) -> Self {
        Self { record_type: "assistant".to_string(), ..Self::user(text) }
    }

    /// Set the working directory
    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    /// Set the timestamp (RFC 3339)
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    /// Set the session ID
    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        let mut record = serde_json::json!({
            "type": self.record_type,
            "sessionId": self.session_id,
            "message": { "role": self.record_type, "content": self.text },
        });
        if let Some(cwd) = &self.cwd {
            record["cwd"] = serde_json::Value::String(cwd.clone());
        }
        if let Some(timestamp) = &self.timestamp {
            record["timestamp"] = serde_json::Value::String(timestamp.clone());
        }
        record.to_string()
    }
}

/// Helper to create a projects directory with three sessions in two projects
///
/// Ranked order by last activity: `web-2`, `api-1`, `api-0`.
pub fn realistic_projects_dir() -> TempDir {
    ProjectsDirBuilder::new()
        .with_project(
            "-Users-test-api",
            &[
                TranscriptBuilder::new("api-0").with_record(
                    RecordBuilder::user("Set up the database schema")
                        .cwd("/Users/test/api")
                        .timestamp("2025-01-01T09:00:00Z"),
                ),
                TranscriptBuilder::new("api-1")
                    .with_record(
                        RecordBuilder::user("Fix the login bug")
                            .cwd("/Users/test/api")
                            .timestamp("2025-01-02T09:00:00Z"),
                    )
                    .with_record(
                        RecordBuilder::assistant("Looking at the auth handler")
                            .timestamp("2025-01-02T09:05:00Z"),
                    ),
            ],
        )
        .with_project(
            "-Users-test-web",
            &[TranscriptBuilder::new("web-2").with_record(
                RecordBuilder::user("Add dark mode")
                    .cwd("/Users/test/web")
                    .timestamp("2025-01-03T09:00:00Z"),
            )],
        )
        .build()
}
