//! Configuration file discovery and loading.
//!
//! This module handles finding and loading a project's commitlint
//! configuration from the working directory, checking candidate file
//! names in priority order.

use crate::config::schema::CommitlintConfig;
use crate::error::{CommitlyError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate configuration file names, in priority order (first match wins).
///
/// JSON variants parse through the same YAML parser since JSON is a subset
/// of YAML.
pub const CONFIG_FILES: &[&str] = &[
    ".commitlintrc.yml",
    ".commitlintrc.yaml",
    ".commitlintrc.json",
    "commitlint.config.yml",
    "commitlint.config.yaml",
    "commitlint.config.json",
];

/// Find the first existing configuration file in the given directory.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Parse configuration content into [`CommitlintConfig`].
///
/// # Arguments
///
/// * `content` - The YAML (or JSON) content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<CommitlintConfig> {
    if content.trim().is_empty() {
        return Ok(CommitlintConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| CommitlyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single configuration file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the content is invalid.
pub fn load_config_file(path: &Path) -> Result<CommitlintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CommitlyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CommitlyError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Discover and load the configuration for a working directory.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no candidate file exists in `cwd`.
pub fn load_config(cwd: &Path) -> Result<CommitlintConfig> {
    let path = find_config_file(cwd).ok_or_else(|| CommitlyError::ConfigNotFound {
        path: cwd.to_path_buf(),
    })?;

    tracing::debug!("Loading commitlint configuration from {}", path.display());
    load_config_file(&path)
}
