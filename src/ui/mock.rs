//! Mock UI for testing commands without a terminal.

use std::collections::VecDeque;

use crate::error::{CommitlyError, Result};
use crate::ui::{OutputMode, Prompt, PromptResult, UserInterface};

/// Scripted [`UserInterface`] implementation.
///
/// Prompt answers are consumed in order; all output is recorded for
/// assertions.
#[derive(Default)]
pub struct MockUI {
    answers: VecDeque<PromptResult>,
    /// Messages shown via `message` and `success`.
    pub messages: Vec<String>,
    /// Messages shown via `warning`.
    pub warnings: Vec<String>,
    /// Messages shown via `error`.
    pub errors: Vec<String>,
    /// Keys of the prompts that were asked, in order.
    pub asked: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a string answer.
    pub fn answer(mut self, value: &str) -> Self {
        self.answers.push_back(PromptResult::String(value.into()));
        self
    }

    /// Queue a confirmation answer.
    pub fn answer_bool(mut self, value: bool) -> Self {
        self.answers.push_back(PromptResult::Bool(value));
        self
    }

    /// Queue a multi-select answer.
    pub fn answer_list(mut self, values: &[&str]) -> Self {
        self.answers.push_back(PromptResult::Strings(
            values.iter().map(|v| v.to_string()).collect(),
        ));
        self
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.asked.push(prompt.key.clone());
        self.answers
            .pop_front()
            .ok_or_else(|| CommitlyError::NotInteractive {
                prompt: prompt.key.clone(),
            })
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
