//! JSONL parser for Claude Code session transcripts
//!
//! # Error Handling Strategy
//!
//! Parsing is tolerant at the line level and strict at the file level:
//!
//! - **Individual line failures**: Lines that are not a JSON object matching the record
//!   shape are dropped and logged at debug level. Valid records keep their file order.
//!
//! - **File failures**: An unreadable file or a single line longer than
//!   [`transcript::MAX_LINE_BYTES`] fails the whole file. Callers skip such files rather
//!   than aborting discovery.
//!
//! - **Error propagation**: Uses `anyhow::Result` with the file path in the context.

pub mod deserializers;
pub mod transcript;

pub use transcript::{MAX_LINE_BYTES, parse_line, parse_transcript_file};
