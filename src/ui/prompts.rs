//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{CommitlyError, Result};
use crate::scope::ScopeItem;

use super::{Prompt, PromptOption, PromptResult, PromptType};

/// Convert dialoguer errors to CommitlyError.
fn map_dialoguer_err(e: dialoguer::Error) -> CommitlyError {
    CommitlyError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
        PromptType::MultiSelect { options } => prompt_multiselect(prompt, options, term),
        PromptType::GroupedSelect { items } => {
            grouped_select(&prompt.question, items, term).map(PromptResult::String)
        }
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt
        .default
        .as_ref()
        .map(|s| s.to_lowercase() == "true" || s == "y" || s == "yes")
        .unwrap_or(true);

    let result = Confirm::new()
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let input = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(prompt.allow_empty);

    let result: String = if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .interact_on(term)
            .map_err(map_dialoguer_err)?
    } else {
        input.interact_on(term).map_err(map_dialoguer_err)?
    };

    Ok(PromptResult::String(result))
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    let labels: Vec<String> = options.iter().map(format_option).collect();

    let default_idx = prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0);

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(options[selection].value.clone()))
}

fn prompt_multiselect(
    prompt: &Prompt,
    options: &[PromptOption],
    term: &Term,
) -> Result<PromptResult> {
    let labels: Vec<String> = options.iter().map(format_option).collect();

    let selections = MultiSelect::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    let values: Vec<String> = selections
        .iter()
        .map(|&i| options[i].value.clone())
        .collect();

    Ok(PromptResult::Strings(values))
}

fn format_option(option: &PromptOption) -> String {
    if option.detail.is_empty() {
        option.value.clone()
    } else {
        format!("{}: {}", option.value, style(&option.detail).dim())
    }
}

fn format_item(item: &ScopeItem) -> String {
    match item {
        ScopeItem::Header { label } => style(label).bold().cyan().to_string(),
        ScopeItem::Entry { label, detail, .. } => {
            if detail.is_empty() {
                format!("  {}", label)
            } else {
                format!("  {}: {}", label, style(detail).dim())
            }
        }
    }
}

/// Select one entry from a classified scope list. Group headers are shown
/// but not selectable: picking one re-runs the selection anchored there.
pub fn grouped_select(question: &str, items: &[ScopeItem], term: &Term) -> Result<String> {
    let labels: Vec<String> = items.iter().map(format_item).collect();
    let mut cursor = items
        .iter()
        .position(|item| !item.is_header())
        .unwrap_or(0);

    loop {
        let selection = Select::with_theme(&prompt_theme())
            .with_prompt(question)
            .items(&labels)
            .default(cursor)
            .interact_on(term)
            .map_err(map_dialoguer_err)?;

        if !items[selection].is_header() {
            return Ok(items[selection].label().to_string());
        }
        cursor = selection;
    }
}
