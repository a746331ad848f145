//! Scopes command: print the classified, ordered scope list.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::ScopesArgs;
use crate::cli::commands::{Command, CommandResult};
use crate::commitlint::Commitlint;
use crate::error::Result;
use crate::scope::ScopeItem;
use crate::ui::UserInterface;

/// Show the scope list as the commit prompt would display it.
pub struct ScopesCommand {
    cwd: PathBuf,
    args: ScopesArgs,
}

impl ScopesCommand {
    pub fn new(cwd: &Path, args: ScopesArgs) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            args,
        }
    }
}

impl Command for ScopesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut commitlint = Commitlint::load(&self.cwd);
        let items = commitlint.sorted_scope_items();

        if self.args.json {
            let json = serde_json::to_string_pretty(&items)
                .context("failed to serialize scope items")?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if items.is_empty() {
            ui.message("No scopes configured.");
            return Ok(CommandResult::success());
        }

        for item in &items {
            match item {
                ScopeItem::Header { label } => println!("{}", label),
                ScopeItem::Entry { label, detail, .. } => {
                    if detail.is_empty() {
                        println!("  {}", label);
                    } else {
                        println!("  {} - {}", label, detail);
                    }
                }
            }
        }
        Ok(CommandResult::success())
    }
}
