use std::path::Path;

use chrono::{DateTime, Utc};

use super::recency::format_recency;
use crate::models::{TranscriptRecord, last_record_timestamp};
use crate::utils::{single_line, truncate_with_ellipsis};

/// Summary used for transcripts without a single parseable record
pub const EMPTY_SESSION: &str = "Empty session";

/// Per-message character budget before truncation
pub const MAX_MESSAGE_CHARS: usize = 100;

const TOOL_CALL_MARKER: &str = "tool_calls";

/// What a single pass over a transcript learns about it
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionDigest {
    /// Final path component of the first non-empty cwd
    pub project_label: Option<String>,
    /// Single-line user messages, each truncated to [`MAX_MESSAGE_CHARS`]
    pub user_messages: Vec<String>,
    /// Whether any assistant record invoked a tool
    pub used_tools: bool,
}

/// Scan records in order, collecting the project label, user messages, and tool use
pub fn digest(records: &[TranscriptRecord]) -> SessionDigest {
    let mut digest = SessionDigest::default();

    for record in records {
        if digest.project_label.is_none() && !record.cwd.is_empty() {
            digest.project_label = Some(project_label(&record.cwd));
        }

        if record.is_user() {
            let text = single_line(&record.message.content);
            if !text.is_empty() {
                digest.user_messages.push(truncate_with_ellipsis(&text, MAX_MESSAGE_CHARS));
            }
        } else if record.is_assistant()
            && (record.message.has_tool_use || record.message.content.contains(TOOL_CALL_MARKER))
        {
            digest.used_tools = true;
        }
    }

    digest
}

fn project_label(cwd: &str) -> String {
    Path::new(cwd)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| cwd.to_string())
}

/// Build a one-line summary from local text rules
///
/// Shape: `[<project>] <first user message> (+N more messages) (<recency>)`
pub fn summarize_heuristic(records: &[TranscriptRecord], now: DateTime<Utc>) -> String {
    if records.is_empty() {
        return EMPTY_SESSION.to_string();
    }

    let digest = digest(records);
    tracing::trace!(
        user_messages = digest.user_messages.len(),
        used_tools = digest.used_tools,
        "digested session"
    );
    let mut summary = format!("[{}]", digest.project_label.as_deref().unwrap_or_default());

    if let Some(first) = digest.user_messages.first() {
        summary.push(' ');
        summary.push_str(first);
        if digest.user_messages.len() > 1 {
            summary.push_str(&format!(" (+{} more messages)", digest.user_messages.len() - 1));
        }
    }

    if let Some(last) = last_record_timestamp(records) {
        summary.push(' ');
        summary.push_str(&format_recency(&last, &now));
    }

    summary
}
