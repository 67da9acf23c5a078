//! Startup configuration.
//!
//! [`AppConfig`] is resolved once from command-line flags and the environment and then
//! handed to the components that need it. Nothing reads the environment after this.

use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::utils::get_projects_dir;

/// Environment variable that switches on delegated summaries when set to `1`
pub const AI_SUMMARY_ENV: &str = "USE_AI_SUMMARY";

/// Default assistant binary used for summaries and for resuming sessions
pub const DEFAULT_ASSISTANT_BIN: &str = "claude";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryMode {
    #[default]
    Heuristic,
    Delegated,
}

impl SummaryMode {
    /// Interpret the value of [`AI_SUMMARY_ENV`]; only `"1"` activates delegation
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("1") => SummaryMode::Delegated,
            _ => SummaryMode::Heuristic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub projects_dir: PathBuf,
    pub summary_mode: SummaryMode,
    pub assistant_bin: String,
}

/// Flag values that feed into [`AppConfig`]
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub projects_dir: Option<PathBuf>,
    pub ai_summary: bool,
    pub assistant_bin: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from flags and the process environment
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let env_value = env::var(AI_SUMMARY_ENV).ok();
        Self::resolve(overrides, env_value.as_deref())
    }

    fn resolve(overrides: ConfigOverrides, ai_summary_env: Option<&str>) -> Result<Self> {
        let projects_dir = match overrides.projects_dir {
            Some(dir) => dir,
            None => get_projects_dir()?,
        };

        let summary_mode = if overrides.ai_summary {
            SummaryMode::Delegated
        } else {
            SummaryMode::from_env_value(ai_summary_env)
        };

        let assistant_bin =
            overrides.assistant_bin.unwrap_or_else(|| DEFAULT_ASSISTANT_BIN.to_string());

        Ok(Self { projects_dir, summary_mode, assistant_bin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mode_from_env_value() {
        assert_eq!(SummaryMode::from_env_value(Some("1")), SummaryMode::Delegated);
        assert_eq!(SummaryMode::from_env_value(None), SummaryMode::Heuristic);
        assert_eq!(SummaryMode::from_env_value(Some("0")), SummaryMode::Heuristic);
        assert_eq!(SummaryMode::from_env_value(Some("true")), SummaryMode::Heuristic);
        assert_eq!(SummaryMode::from_env_value(Some("")), SummaryMode::Heuristic);
        assert_eq!(SummaryMode::from_env_value(Some(" 1")), SummaryMode::Heuristic);
    }

    #[test]
    fn test_resolve_with_overrides() {
        let overrides = ConfigOverrides {
            projects_dir: Some(PathBuf::from("/tmp/projects")),
            ai_summary: true,
            assistant_bin: Some("my-claude".to_string()),
        };
        let config = AppConfig::resolve(overrides, None).unwrap();

        assert_eq!(config.projects_dir, PathBuf::from("/tmp/projects"));
        assert_eq!(config.summary_mode, SummaryMode::Delegated);
        assert_eq!(config.assistant_bin, "my-claude");
    }

    #[test]
    fn test_resolve_defaults_follow_environment() {
        let overrides =
            ConfigOverrides { projects_dir: Some(PathBuf::from("/p")), ..Default::default() };

        let config = AppConfig::resolve(overrides.clone(), Some("1")).unwrap();
        assert_eq!(config.summary_mode, SummaryMode::Delegated);
        assert_eq!(config.assistant_bin, "claude");

        let config = AppConfig::resolve(overrides, Some("yes")).unwrap();
        assert_eq!(config.summary_mode, SummaryMode::Heuristic);
    }
}
