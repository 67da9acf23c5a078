//! Claude Sessions - browse Claude Code conversation sessions and resume one
//!
//! This library reads the transcripts Claude Code keeps under `~/.claude/projects/`
//! and turns them into a ranked list of sessions. It supports:
//!
//! - Tolerant line-by-line parsing of `.jsonl` transcripts
//! - Discovering sessions across project directories
//! - One-line summaries, either local heuristics or delegated to the assistant
//! - An interactive fuzzy selector and handing the chosen session back to `claude`
//!
//! # Example
//!
//! ```no_run
//! use claude_sessions::build_session_index;
//! use claude_sessions::summary::Summarizer;
//! use std::path::PathBuf;
//!
//! let projects_dir = PathBuf::from("/Users/alice/.claude/projects");
//! let sessions = build_session_index(&projects_dir, &Summarizer::heuristic())?;
//! for session in &sessions {
//!     println!("{}  {}", session.session_id, session.summary);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod indexer;
pub mod launcher;
pub mod models;
pub mod parsers;
pub mod process;
pub mod summary;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use config::{AppConfig, SummaryMode};
pub use indexer::build_session_index;
pub use models::{Session, TranscriptRecord};
pub use parsers::parse_transcript_file;
pub use summary::Summarizer;
