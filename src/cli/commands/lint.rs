//! Lint command: validate individual commit message parts.

use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::cli::commands::{Command, CommandResult};
use crate::commitlint::Commitlint;
use crate::error::Result;
use crate::ui::UserInterface;

/// Lint the message parts given on the command line.
pub struct LintCommand {
    cwd: PathBuf,
    args: LintArgs,
}

impl LintCommand {
    pub fn new(cwd: &Path, args: LintArgs) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            args,
        }
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let parts = self.args.parts();
        if parts.is_empty() {
            ui.warning("Nothing to lint: pass at least one of --type, --scope, --subject, --header, --body, --footer");
            return Ok(CommandResult::success());
        }

        let commitlint = Commitlint::load(&self.cwd);
        let mut failures = 0;
        for (field, value) in parts {
            let error = match field {
                "type" => commitlint.lint_type(value),
                "scope" => commitlint.lint_scope(value),
                "subject" => commitlint.lint_subject(value),
                "header" => commitlint.lint_header(value),
                "body" => commitlint.lint_body(value),
                "footer" => commitlint.lint_footer(value),
                _ => unreachable!("unknown lint field"),
            };
            if error.is_empty() {
                if ui.output_mode().shows_detail() {
                    ui.message(&format!("{}: ok", field));
                }
            } else {
                ui.error(&error);
                failures += 1;
            }
        }

        if failures == 0 {
            ui.success("All parts are valid!");
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
