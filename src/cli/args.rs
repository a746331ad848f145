//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Commitly - Conventional-commit authoring driven by commitlint configuration.
#[derive(Debug, Parser)]
#[command(name = "commitly")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Working directory holding the commitlint configuration
    #[arg(short = 'C', long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a commit message interactively (default if no command specified)
    Commit(CommitArgs),

    /// Lint commit message parts
    Lint(LintArgs),

    /// Show the classified, ordered scope list
    Scopes(ScopesArgs),

    /// Show the resolved commitlint configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the commit command.
#[derive(Debug, Clone, Default, Args)]
pub struct CommitArgs {
    /// Write the assembled message to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the lint command.
///
/// Each flag lints one message part; whole-message parsing is out of scope.
#[derive(Debug, Clone, Default, Args)]
pub struct LintArgs {
    /// Commit type to lint (e.g. "feat")
    #[arg(long = "type", value_name = "TYPE")]
    pub commit_type: Option<String>,

    /// Scope to lint
    #[arg(long)]
    pub scope: Option<String>,

    /// Subject to lint
    #[arg(long)]
    pub subject: Option<String>,

    /// Full header line to lint
    #[arg(long)]
    pub header: Option<String>,

    /// Body to lint
    #[arg(long)]
    pub body: Option<String>,

    /// Footer to lint
    #[arg(long)]
    pub footer: Option<String>,
}

impl LintArgs {
    /// The provided parts as `(field name, value)` pairs, in lint order.
    pub fn parts(&self) -> Vec<(&'static str, &str)> {
        let mut parts = Vec::new();
        if let Some(v) = &self.commit_type {
            parts.push(("type", v.as_str()));
        }
        if let Some(v) = &self.scope {
            parts.push(("scope", v.as_str()));
        }
        if let Some(v) = &self.subject {
            parts.push(("subject", v.as_str()));
        }
        if let Some(v) = &self.header {
            parts.push(("header", v.as_str()));
        }
        if let Some(v) = &self.body {
            parts.push(("body", v.as_str()));
        }
        if let Some(v) = &self.footer {
            parts.push(("footer", v.as_str()));
        }
        parts
    }
}

/// Arguments for the scopes command.
#[derive(Debug, Clone, Default, Args)]
pub struct ScopesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the completions command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
