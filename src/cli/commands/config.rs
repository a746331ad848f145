//! Config command: show the resolved commitlint configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::ConfigArgs;
use crate::cli::commands::{Command, CommandResult};
use crate::config::load_config;
use crate::error::Result;
use crate::ui::UserInterface;

/// Print the configuration as the tool sees it.
pub struct ConfigCommand {
    cwd: PathBuf,
    args: ConfigArgs,
}

impl ConfigCommand {
    pub fn new(cwd: &Path, args: ConfigArgs) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.cwd)?;

        let rendered = if self.args.json {
            serde_json::to_string_pretty(&config).context("failed to serialize configuration")?
        } else {
            serde_yaml::to_string(&config).context("failed to serialize configuration")?
        };
        println!("{}", rendered);
        Ok(CommandResult::success())
    }
}
