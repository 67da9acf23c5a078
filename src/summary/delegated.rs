use anyhow::{Result, bail};

use crate::models::TranscriptRecord;
use crate::process::{Invocation, ProcessRunner, StdioMode};
use crate::utils::{single_line, truncate_chars, truncate_with_ellipsis};

/// Only records at these leading positions are considered for the excerpt
pub const MAX_EXCERPT_RECORDS: usize = 21;

/// Per-message character budget inside the excerpt
pub const MAX_EXCERPT_MESSAGE_CHARS: usize = 500;

/// Character budget for the summarizer's answer
pub const MAX_SUMMARY_CHARS: usize = 100;

const SUMMARY_FLAG: &str = "--no-conversation";

/// Render the leading user/assistant records as `<type>: <content>` lines
pub fn build_excerpt(records: &[TranscriptRecord]) -> String {
    records
        .iter()
        .take(MAX_EXCERPT_RECORDS)
        .filter(|r| r.is_user() || r.is_assistant())
        .map(|r| {
            format!(
                "{}: {}\n",
                r.record_type,
                truncate_with_ellipsis(&r.message.content, MAX_EXCERPT_MESSAGE_CHARS)
            )
        })
        .collect()
}

pub fn build_prompt(excerpt: &str) -> String {
    format!(
        "Summarize this conversation in one concise line (max 100 chars). \
         Focus on the main task or problem being addressed:\n\n{}\n\nSummary:",
        excerpt
    )
}

/// The external call that produces a summary for `records`
pub fn summary_invocation(program: &str, records: &[TranscriptRecord]) -> Invocation {
    Invocation::new(program, StdioMode::Captured)
        .arg(SUMMARY_FLAG)
        .arg(build_prompt(&build_excerpt(records)))
}

/// Ask the external summarizer for a one-line summary
///
/// # Errors
///
/// Fails when the process cannot be run, exits non-zero, or prints nothing.
pub fn summarize_delegated<R: ProcessRunner>(
    runner: &R,
    program: &str,
    records: &[TranscriptRecord],
) -> Result<String> {
    let output = runner.run(&summary_invocation(program, records))?;
    let summary = single_line(&output);
    if summary.is_empty() {
        bail!("{} returned an empty summary", program);
    }
    Ok(truncate_chars(&summary, MAX_SUMMARY_CHARS).to_string())
}
