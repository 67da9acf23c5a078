use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the Claude projects directory path (~/.claude/projects)
pub fn get_projects_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(projects_dir_for_home(home))
}

/// Projects directory for a given home directory
pub fn projects_dir_for_home(home: PathBuf) -> PathBuf {
    home.join(".claude").join("projects")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_dir_for_home() {
        let dir = projects_dir_for_home(PathBuf::from("/Users/testuser"));
        assert_eq!(dir, PathBuf::from("/Users/testuser/.claude/projects"));
    }

    #[test]
    fn test_get_projects_dir_ends_with_claude_projects() {
        // Only meaningful where a home directory exists
        if let Ok(dir) = get_projects_dir() {
            assert!(dir.ends_with(".claude/projects"));
        }
    }
}
