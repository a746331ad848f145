//! Interactive commit message authoring.
//!
//! Walks the author through type, scope, subject, body and footer, linting
//! each part as it is entered, and prints the assembled message to stdout
//! (prompts and status go to stderr).

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::CommitArgs;
use crate::cli::commands::{Command, CommandResult};
use crate::commitlint::Commitlint;
use crate::error::Result;
use crate::ui::{Prompt, PromptOption, UserInterface};

/// Build a commit message interactively.
pub struct CommitCommand {
    cwd: PathBuf,
    args: CommitArgs,
}

impl CommitCommand {
    pub fn new(cwd: &Path, args: CommitArgs) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            args,
        }
    }
}

impl Command for CommitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut commitlint = Commitlint::load(&self.cwd);
        let message = build_message(&mut commitlint, ui)?;

        match &self.args.out {
            Some(path) => {
                fs::write(path, format!("{}\n", message))?;
                ui.success(&format!("Wrote commit message to {}", path.display()));
            }
            None => println!("{}", message),
        }
        Ok(CommandResult::success())
    }
}

/// Run the prompt flow and assemble the message.
fn build_message(commitlint: &mut Commitlint, ui: &mut dyn UserInterface) -> Result<String> {
    let commit_type = ask_type(commitlint, ui)?;
    let scope = ask_scope(commitlint, ui)?;
    let subject = ask_subject(commitlint, ui, &commit_type, &scope)?;
    let body = ask_validated(
        ui,
        Prompt::input("body", &question_text(commitlint, "body", "Body (optional)"))
            .with_allow_empty(true),
        |v| commitlint.lint_body(v),
    )?;
    let footer = ask_validated(
        ui,
        Prompt::input(
            "footer",
            &question_text(commitlint, "footer", "Footer (optional)"),
        )
        .with_allow_empty(true),
        |v| commitlint.lint_footer(v),
    )?;

    let mut message = format_header(&commit_type, &scope, &subject);
    for part in [body, footer] {
        if !part.is_empty() {
            message.push_str("\n\n");
            message.push_str(&part);
        }
    }
    Ok(message)
}

/// The question text for a prompt field, from the prompt configuration when
/// present.
fn question_text(commitlint: &Commitlint, field: &str, fallback: &str) -> String {
    commitlint
        .prompt()
        .questions
        .get(field)
        .and_then(|q| q.description.clone())
        .unwrap_or_else(|| fallback.to_string())
}

/// Ask until the answer lints clean. Selection prompts over config-sourced
/// values normally pass on the first round.
fn ask_validated(
    ui: &mut dyn UserInterface,
    prompt: Prompt,
    lint: impl Fn(&str) -> String,
) -> Result<String> {
    loop {
        let answer = ui.prompt(&prompt)?.as_str().to_string();
        let error = lint(&answer);
        if error.is_empty() {
            return Ok(answer);
        }
        ui.error(&error);
    }
}

fn ask_type(commitlint: &Commitlint, ui: &mut dyn UserInterface) -> Result<String> {
    let question = question_text(commitlint, "type", "Type of change");
    let allowed = commitlint.type_enum();
    let prompt = if allowed.is_empty() {
        Prompt::input("type", &question)
    } else {
        let options = allowed
            .iter()
            .map(|value| PromptOption {
                detail: commitlint
                    .type_detail(value)
                    .map(|record| record.description().to_string())
                    .unwrap_or_default(),
                value: value.clone(),
            })
            .collect();
        Prompt::select("type", &question, options)
    };
    ask_validated(ui, prompt, |v| commitlint.lint_type(v))
}

fn ask_scope(commitlint: &mut Commitlint, ui: &mut dyn UserInterface) -> Result<String> {
    let question = question_text(commitlint, "scope", "Scope of change");
    let items = commitlint.sorted_scope_items();
    let settings = commitlint.prompt_settings();
    let multiple = settings.enable_multiple_scopes;
    let separator = settings
        .scope_enum_separator
        .clone()
        .unwrap_or_else(|| ",".to_string());

    let entries: Vec<PromptOption> = if items.is_empty() {
        scope_options(commitlint)
    } else {
        items
            .iter()
            .filter(|item| !item.is_header())
            .map(|item| PromptOption {
                value: item.label().to_string(),
                detail: commitlint
                    .scope_detail(item.label())
                    .map(|record| record.description().to_string())
                    .unwrap_or_default(),
            })
            .collect()
    };

    let commitlint = &*commitlint;
    if multiple && !entries.is_empty() {
        let prompt = Prompt::multi_select("scope", &question, entries);
        loop {
            let answer = ui.prompt(&prompt)?.join(&separator);
            let error = commitlint.lint_scope(&answer);
            if error.is_empty() {
                return Ok(answer);
            }
            ui.error(&error);
        }
    }

    let prompt = if !items.is_empty() {
        Prompt::grouped_select("scope", &question, items)
    } else if entries.is_empty() {
        Prompt::input("scope", &question).with_allow_empty(commitlint.can_scope_be_empty())
    } else {
        Prompt::select("scope", &question, entries)
    };
    ask_validated(ui, prompt, |v| commitlint.lint_scope(v))
}

/// Selection options from the `scope-enum` rule, with descriptions from the
/// prompt configuration.
fn scope_options(commitlint: &Commitlint) -> Vec<PromptOption> {
    commitlint
        .scope_enum()
        .iter()
        .map(|value| PromptOption {
            detail: commitlint
                .scope_detail(value)
                .map(|record| record.description().to_string())
                .unwrap_or_default(),
            value: value.clone(),
        })
        .collect()
}

fn ask_subject(
    commitlint: &Commitlint,
    ui: &mut dyn UserInterface,
    commit_type: &str,
    scope: &str,
) -> Result<String> {
    let question = question_text(commitlint, "subject", "Short description");
    ask_validated(ui, Prompt::input("subject", &question), |subject| {
        let error = commitlint.lint_subject(subject);
        if !error.is_empty() {
            return error;
        }
        // The assembled header must pass the header rules too.
        commitlint.lint_header(&format_header(commit_type, scope, subject))
    })
}

/// Assemble a conventional-commit header line.
fn format_header(commit_type: &str, scope: &str, subject: &str) -> String {
    if scope.is_empty() {
        format!("{}: {}", commit_type, subject)
    } else {
        format!("{}({}): {}", commit_type, scope, subject)
    }
}
