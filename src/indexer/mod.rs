//! Session indexing for Claude Code transcripts
//!
//! # Error Handling Strategy
//!
//! - **Root failures**: An unreadable projects directory is the only fatal error and is
//!   returned to the caller.
//!
//! - **Project/file failures**: Project directories that cannot be listed and transcripts
//!   that cannot be read are logged as warnings and skipped, so one bad file never hides
//!   the rest of the history.
//!
//! - **Line failures**: Delegated to the parser, which drops malformed lines.
//!
//! - **Ordering**: Traversal is by file name and ranking is a stable sort on last
//!   activity, so equal timestamps keep (project, file name) order.

pub mod builder;
pub mod ranking;
pub mod session_discovery;

pub use builder::{build_session_index, build_session_index_at};
pub use ranking::rank_sessions;
pub use session_discovery::{TRANSCRIPT_EXTENSION, discover_sessions, session_id_from_path};
