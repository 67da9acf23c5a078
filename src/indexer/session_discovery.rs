use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::models::Session;
use crate::parsers::MAX_LINE_BYTES;
use crate::parsers::transcript::parse_transcript_file_with_limit;

/// File extension of session transcripts
pub const TRANSCRIPT_EXTENSION: &str = "jsonl";

/// Discover every session transcript under a projects directory
///
/// Walks `<projects_dir>/<project>/<session-id>.jsonl`, parsing each transcript into a
/// [`Session`]. Project directories and transcript files are visited in file-name order,
/// so the result order is stable across runs.
///
/// # Arguments
///
/// * `projects_dir` - Path to the projects directory (usually `~/.claude/projects`)
///
/// # Returns
///
/// Sessions in discovery order, with `summary` still empty and `last_active` derived.
///
/// # Errors
///
/// Returns an error only if `projects_dir` itself cannot be read. Project directories
/// that cannot be listed and transcripts that cannot be read or parsed are logged as
/// warnings and skipped.
pub fn discover_sessions(projects_dir: &Path) -> Result<Vec<Session>> {
    discover_sessions_with_limit(projects_dir, MAX_LINE_BYTES)
}

pub(crate) fn discover_sessions_with_limit(
    projects_dir: &Path,
    max_line_bytes: usize,
) -> Result<Vec<Session>> {
    let entries = fs::read_dir(projects_dir)
        .with_context(|| format!("Failed to read projects directory: {}", projects_dir.display()))?;

    let mut project_dirs: Vec<PathBuf> =
        entries.flatten().map(|entry| entry.path()).filter(|path| path.is_dir()).collect();
    project_dirs.sort();

    let mut sessions = Vec::new();
    let mut skipped_files = 0;

    for project_dir in project_dirs {
        let project_name = match project_dir.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        let transcript_files = match list_transcript_files(&project_dir) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Skipping project directory {}: {:#}", project_dir.display(), e);
                continue;
            }
        };

        for file_path in transcript_files {
            match load_session(&project_name, &file_path, max_line_bytes) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    skipped_files += 1;
                    tracing::warn!("Skipping transcript {}: {:#}", file_path.display(), e);
                }
            }
        }
    }

    tracing::info!(sessions = sessions.len(), skipped = skipped_files, "discovered sessions");

    Ok(sessions)
}

/// List `*.jsonl` files directly inside a project directory, sorted by name
///
/// Files whose name is not valid UTF-8 are listed too; loading them fails, so they
/// are reported and counted as skipped.
fn list_transcript_files(project_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(project_dir)
        .with_context(|| format!("Failed to read project directory: {}", project_dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_transcript_extension(path))
        .collect();
    files.sort();

    Ok(files)
}

fn has_transcript_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == TRANSCRIPT_EXTENSION)
}

/// Read one transcript into a [`Session`]
fn load_session(project_name: &str, file_path: &Path, max_line_bytes: usize) -> Result<Session> {
    let session_id = session_id_from_path(file_path).with_context(|| {
        format!("Transcript name is not a valid session id: {}", file_path.display())
    })?;

    let modified: DateTime<Utc> = fs::metadata(file_path)
        .and_then(|metadata| metadata.modified())
        .with_context(|| format!("Failed to read file metadata: {}", file_path.display()))?
        .into();

    let records = parse_transcript_file_with_limit(file_path, max_line_bytes)?;

    Ok(Session::new(project_name, session_id, file_path.to_path_buf(), modified, records))
}

/// Session id for a transcript path: the file name with `.jsonl` stripped
pub fn session_id_from_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(TRANSCRIPT_EXTENSION)?.strip_suffix('.')?;
    if stem.is_empty() { None } else { Some(stem.to_string()) }
}
