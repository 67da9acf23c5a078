use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::TranscriptRecord;

/// Largest single line accepted in a transcript (64MB)
pub const MAX_LINE_BYTES: usize = 64 * 1024 * 1024;

/// Decode one transcript line
///
/// Returns `None` for blank lines and for anything that is not a well-formed
/// record. No partially decoded record is ever returned.
pub fn parse_line(line: &[u8]) -> Option<TranscriptRecord> {
    if line.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice::<TranscriptRecord>(line).ok()
}

/// Parse a `<session-id>.jsonl` transcript file
/// Malformed lines are skipped; records keep file order
/// Returns an error if the file cannot be read or a line exceeds [`MAX_LINE_BYTES`]
pub fn parse_transcript_file(path: &Path) -> Result<Vec<TranscriptRecord>> {
    parse_transcript_file_with_limit(path, MAX_LINE_BYTES)
}

pub(crate) fn parse_transcript_file_with_limit(
    path: &Path,
    max_line_bytes: usize,
) -> Result<Vec<TranscriptRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open transcript file: {}", path.display()))?;
    parse_transcript_reader(BufReader::new(file), path, max_line_bytes)
}

fn parse_transcript_reader<R: BufRead>(
    mut reader: R,
    path: &Path,
    max_line_bytes: usize,
) -> Result<Vec<TranscriptRecord>> {
    let mut records = Vec::new();
    let mut skipped_count = 0;
    let mut line_num = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        // Read one byte past the limit so an oversized line is detectable
        let read = reader
            .by_ref()
            .take(max_line_bytes as u64 + 1)
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read line from {}", path.display()))?;
        if read == 0 {
            break;
        }
        line_num += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        } else if buf.len() > max_line_bytes {
            bail!(
                "Line {} in {} exceeds the maximum line size of {} bytes",
                line_num,
                path.display(),
                max_line_bytes
            );
        }

        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match parse_line(&buf) {
            Some(record) => records.push(record),
            None => {
                tracing::debug!(line = line_num, path = %path.display(), "skipping malformed line");
                skipped_count += 1;
            }
        }
    }

    if skipped_count > 0 {
        tracing::debug!(
            path = %path.display(),
            records = records.len(),
            skipped = skipped_count,
            "parsed transcript with skipped lines"
        );
    }

    Ok(records)
}
