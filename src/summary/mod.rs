//! One-line session summaries.
//!
//! [`Summarizer`] runs in one of two modes fixed at construction:
//!
//! - **Heuristic**: local text rules (project label, first user message, recency)
//! - **Delegated**: an external summarizer process reads a transcript excerpt
//!
//! A delegated failure never reaches the caller; that session falls back to the
//! heuristic summary and a warning is logged.

pub mod delegated;
pub mod heuristic;
pub mod recency;

use chrono::{DateTime, Utc};

pub use heuristic::{EMPTY_SESSION, summarize_heuristic};

use crate::config::{DEFAULT_ASSISTANT_BIN, SummaryMode};
use crate::models::TranscriptRecord;
use crate::process::{ProcessRunner, SystemRunner};

pub struct Summarizer<R: ProcessRunner = SystemRunner> {
    mode: SummaryMode,
    runner: R,
    program: String,
}

impl Summarizer<SystemRunner> {
    /// Summarizer that only uses local heuristics
    pub fn heuristic() -> Self {
        Self::new(SummaryMode::Heuristic, SystemRunner, DEFAULT_ASSISTANT_BIN)
    }
}

impl<R: ProcessRunner> Summarizer<R> {
    pub fn new(mode: SummaryMode, runner: R, program: impl Into<String>) -> Self {
        Self { mode, runner, program: program.into() }
    }

    pub fn mode(&self) -> SummaryMode {
        self.mode
    }

    /// Summarize one session's records as of `now`
    pub fn summarize(&self, records: &[TranscriptRecord], now: DateTime<Utc>) -> String {
        if records.is_empty() {
            return EMPTY_SESSION.to_string();
        }

        match self.mode {
            SummaryMode::Heuristic => summarize_heuristic(records, now),
            SummaryMode::Delegated => {
                match delegated::summarize_delegated(&self.runner, &self.program, records) {
                    Ok(summary) => summary,
                    Err(e) => {
                        tracing::warn!("Falling back to heuristic summary: {:#}", e);
                        summarize_heuristic(records, now)
                    }
                }
            }
        }
    }
}
