//! Data models for Claude Code session transcripts.
//!
//! - [`TranscriptRecord`] - One line of a `<session-id>.jsonl` transcript
//! - [`Message`] - Role and text payload of a record
//! - [`Session`] - A whole transcript file plus its derived summary and recency
//!
//! Records use serde with custom deserializers for the fields Claude Code has
//! written in more than one shape over time (see `parsers::deserializers`).

pub mod record;
pub mod session;

pub use record::{Message, RECORD_TYPE_ASSISTANT, RECORD_TYPE_USER, TranscriptRecord};
pub use session::{Session, last_record_timestamp};
