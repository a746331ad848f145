//! Terminal UI for interactive sessions.

use console::{style, Term};

use crate::error::Result;
use crate::ui::{
    prompt_user, NonInteractiveUI, OutputMode, Prompt, PromptResult, UserInterface,
};

/// Interactive terminal implementation of [`UserInterface`].
pub struct TerminalUI {
    term: Term,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI writing to stderr, leaving stdout for the
    /// assembled commit message.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stderr(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let _ = self.term.write_line(msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let _ = self
                .term
                .write_line(&format!("{} {}", style("✓").green(), msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let _ = self
                .term
                .write_line(&format!("{} {}", style("!").yellow(), msg));
        }
    }

    fn error(&mut self, msg: &str) {
        let _ = self
            .term
            .write_line(&format!("{} {}", style("✗").red(), msg));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the appropriate UI for the session.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
