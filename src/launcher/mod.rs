//! Hand a chosen session back to the assistant.
//!
//! The assistant is started with `--resume <session-id>`, attached to this terminal,
//! in the first recorded working directory that still exists.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::Session;
use crate::process::{Invocation, ProcessRunner, StdioMode};

const RESUME_FLAG: &str = "--resume";

/// First recorded cwd that exists right now, scanning records in order
///
/// Returns `None` when no record names an existing directory, in which case the
/// assistant inherits the caller's working directory.
pub fn resolve_working_dir(session: &Session) -> Option<PathBuf> {
    session
        .records
        .iter()
        .map(|record| record.cwd.as_str())
        .filter(|cwd| !cwd.is_empty())
        .map(Path::new)
        .find(|path| path.is_dir())
        .map(Path::to_path_buf)
}

/// The invocation that resumes `session` with `program`
pub fn resume_invocation(program: &str, session: &Session) -> Invocation {
    Invocation::new(program, StdioMode::Inherited)
        .arg(RESUME_FLAG)
        .arg(session.session_id.clone())
        .current_dir(resolve_working_dir(session))
}

/// Run the assistant on `session` and wait for it to exit
///
/// # Errors
///
/// Returns an error if the assistant cannot be started or exits unsuccessfully.
pub fn resume_session<R: ProcessRunner>(runner: &R, program: &str, session: &Session) -> Result<()> {
    let invocation = resume_invocation(program, session);
    match &invocation.cwd {
        Some(cwd) => tracing::info!(session = %session.session_id, cwd = %cwd.display(), "resuming session"),
        None => tracing::info!(session = %session.session_id, "resuming session in current directory"),
    }

    runner.run(&invocation).with_context(|| format!("Error launching {}", program))?;
    Ok(())
}
