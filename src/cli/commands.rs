use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ConfigOverrides};
use crate::indexer::build_session_index;
use crate::launcher::resume_session;
use crate::models::Session;
use crate::process::SystemRunner;
use crate::summary::Summarizer;
use crate::tui::{SelectableItem, Selection, run_selector};

#[derive(Parser)]
#[command(name = "claude-sessions")]
#[command(version)]
#[command(about = "Browse Claude Code sessions and resume one", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding one subdirectory per project [default: ~/.claude/projects]
    #[arg(long, global = true, value_name = "PATH")]
    pub projects_dir: Option<PathBuf>,

    /// Ask the assistant to summarize each session (same as USE_AI_SUMMARY=1)
    #[arg(long, global = true)]
    pub ai_summary: bool,

    /// Assistant binary used for summaries and for resuming [default: claude]
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub claude_bin: Option<String>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the ranked sessions without opening the selector
    List,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            projects_dir: self.projects_dir.clone(),
            ai_summary: self.ai_summary,
            assistant_bin: self.claude_bin.clone(),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load(cli.overrides())?;
    tracing::debug!(?config, "resolved configuration");

    let summarizer = Summarizer::new(config.summary_mode, SystemRunner, config.assistant_bin.clone());
    let sessions = build_session_index(&config.projects_dir, &summarizer)?;

    if sessions.is_empty() {
        println!("No Claude sessions found in {}", config.projects_dir.display());
        return Ok(());
    }

    match &cli.command {
        Some(Commands::List) => {
            list_sessions(&sessions);
            Ok(())
        }
        None => browse_and_resume(&config, &sessions),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn list_sessions(sessions: &[Session]) {
    for (idx, session) in sessions.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        let item = SelectableItem::from_session(session);
        println!("{}", item.title());
        println!("{}", item.description());
    }
}

fn browse_and_resume(config: &AppConfig, sessions: &[Session]) -> Result<()> {
    let by_id: HashMap<&str, &Session> =
        sessions.iter().map(|session| (session.session_id.as_str(), session)).collect();
    let items = sessions.iter().map(SelectableItem::from_session).collect();

    let session_id = match run_selector(items)? {
        Selection::Chosen(id) => id,
        Selection::Cancelled | Selection::Empty => return Ok(()),
    };

    let Some(session) = by_id.get(session_id.as_str()) else {
        tracing::debug!(session = %session_id, "chosen session is no longer indexed");
        return Ok(());
    };

    println!("Resuming session: {}", session.session_id);
    resume_session(&SystemRunner, &config.assistant_bin, session)
}
