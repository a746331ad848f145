//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for scripted command tests

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::{grouped_select, prompt_user};
pub use terminal::{create_ui, TerminalUI};

use crate::error::Result;
use crate::scope::ScopeItem;

/// Trait for user interface interactions.
///
/// Doubles as the diagnostics sink: lower layers report through
/// `message`/`warning`/`error` and never fail because of it.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used by [`MockUI`] lookups and errors).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if the user just presses enter.
    pub default: Option<String>,
    /// Whether an empty answer is acceptable for input prompts.
    pub allow_empty: bool,
}

impl Prompt {
    /// A free-form input prompt.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: None,
            allow_empty: false,
        }
    }

    /// A yes/no confirmation prompt.
    pub fn confirm(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
            allow_empty: false,
        }
    }

    /// A single-choice selection prompt.
    pub fn select(key: &str, question: &str, options: Vec<PromptOption>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select { options },
            default: None,
            allow_empty: false,
        }
    }

    /// A multiple-choice selection prompt.
    pub fn multi_select(key: &str, question: &str, options: Vec<PromptOption>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::MultiSelect { options },
            default: None,
            allow_empty: false,
        }
    }

    /// A selection prompt over a classified scope list.
    pub fn grouped_select(key: &str, question: &str, items: Vec<ScopeItem>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::GroupedSelect { items },
            default: None,
            allow_empty: false,
        }
    }

    /// Set whether an empty answer is acceptable.
    pub fn with_allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input.
    Input,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
    /// Select any number from a list of options.
    MultiSelect { options: Vec<PromptOption> },
    /// Select one entry from a grouped display list; headers are not
    /// selectable.
    GroupedSelect { items: Vec<ScopeItem> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Value returned when selected.
    pub value: String,
    /// Extra display detail shown next to the value.
    pub detail: String,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    String(String),
    Strings(Vec<String>),
    Bool(bool),
}

impl PromptResult {
    /// The string answer, empty for non-string results.
    pub fn as_str(&self) -> &str {
        match self {
            PromptResult::String(s) => s,
            _ => "",
        }
    }

    /// The answer as a single string, joining multi-select results with the
    /// given separator.
    pub fn join(&self, separator: &str) -> String {
        match self {
            PromptResult::String(s) => s.clone(),
            PromptResult::Strings(values) => values.join(separator),
            PromptResult::Bool(_) => String::new(),
        }
    }
}
