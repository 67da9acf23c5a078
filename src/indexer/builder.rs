//! Session index pipeline: discover → summarize → rank.
//!
//! Discovery owns the file-level error policy (unreadable project directories and
//! transcripts are skipped); summarization never fails. The only error that reaches
//! the caller is an unreadable projects directory.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::ranking::rank_sessions;
use super::session_discovery::discover_sessions;
use crate::models::Session;
use crate::process::ProcessRunner;
use crate::summary::Summarizer;

/// Build the ranked, summarized list of sessions under `projects_dir`
///
/// # Errors
///
/// Returns an error if `projects_dir` cannot be read.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use claude_sessions::build_session_index;
/// use claude_sessions::summary::Summarizer;
///
/// let projects_dir = PathBuf::from("/Users/alice/.claude/projects");
/// let sessions = build_session_index(&projects_dir, &Summarizer::heuristic())?;
/// println!("Found {} sessions", sessions.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_session_index<R: ProcessRunner>(
    projects_dir: &Path,
    summarizer: &Summarizer<R>,
) -> Result<Vec<Session>> {
    build_session_index_at(projects_dir, summarizer, Utc::now())
}

/// Same as [`build_session_index`] with an explicit clock for recency suffixes
pub fn build_session_index_at<R: ProcessRunner>(
    projects_dir: &Path,
    summarizer: &Summarizer<R>,
    now: DateTime<Utc>,
) -> Result<Vec<Session>> {
    let mut sessions = discover_sessions(projects_dir)?;

    for session in &mut sessions {
        session.summary = summarizer.summarize(&session.records, now);
    }

    rank_sessions(&mut sessions);

    Ok(sessions)
}
