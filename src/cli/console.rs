//! Interactive terminal implementation of [`Console`].

use super::OutputManager;
use super::progress::Spinner;
use crate::console::Console;
use crate::promote::LinkStyle;
use std::io::IsTerminal;
use std::sync::Mutex;

/// Console writing to the terminal and reading answers from stdin
#[derive(Debug, Default)]
pub struct TerminalConsole {
    output: OutputManager,
    spinner: Mutex<Option<Spinner>>,
}

impl TerminalConsole {
    /// Create a console on stdout/stderr
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            spinner: Mutex::new(None),
        }
    }

    /// Output manager used for plain messages
    pub fn output(&self) -> &OutputManager {
        &self.output
    }
}

/// Whether an answer to a `[y/N]` prompt means yes
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

impl Console for TerminalConsole {
    fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    fn info(&self, message: &str) {
        let _ = self.output.info(message);
    }

    fn success(&self, message: &str) {
        let _ = self.output.success(message);
    }

    fn warn(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    fn confirm(&self, prompt: &str) -> std::io::Result<bool> {
        self.output.prompt(prompt)?;

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            // EOF: nobody is there to say yes
            let _ = self.output.println("");
            return Ok(false);
        }

        Ok(is_affirmative(&input))
    }

    fn start_progress(&self, label: &str) {
        let mut slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.take() {
            previous.stop();
        }
        *slot = Some(Spinner::start(label));
    }

    fn stop_progress(&self) {
        let spinner = self.spinner.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(spinner) = spinner {
            spinner.stop();
        }
    }

    fn link_style(&self) -> LinkStyle {
        // Errors are printed on stderr
        if std::io::stderr().is_terminal() {
            LinkStyle::Muted
        } else {
            LinkStyle::Plain
        }
    }
}
