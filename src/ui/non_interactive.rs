//! Non-interactive UI for CI/headless environments.

use crate::error::{CommitlyError, Result};
use crate::ui::{OutputMode, Prompt, PromptResult, UserInterface};

/// UI implementation that never prompts.
///
/// Messages go to stderr; any prompt fails with
/// [`CommitlyError::NotInteractive`].
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("Warning: {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("Error: {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        Err(CommitlyError::NotInteractive {
            prompt: prompt.key.clone(),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_fails_with_not_interactive() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let result = ui.prompt(&Prompt::input("scope", "Scope?"));
        assert!(matches!(
            result,
            Err(CommitlyError::NotInteractive { .. })
        ));
    }

    #[test]
    fn reports_non_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
