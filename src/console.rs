//! User-facing output, confirmation prompts and the progress indicator.

use crate::promote::LinkStyle;

/// Everything the promotion workflow shows to or asks of the user
pub trait Console {
    /// Plain line
    fn println(&self, message: &str);

    /// Informational line
    fn info(&self, message: &str);

    /// Success-colored line
    fn success(&self, message: &str);

    /// Warning-colored line
    fn warn(&self, message: &str);

    /// Ask a yes/no question, defaulting to no
    fn confirm(&self, prompt: &str) -> std::io::Result<bool>;

    /// Show an in-progress indicator with `label`
    fn start_progress(&self, label: &str);

    /// Clear the in-progress indicator. Must be safe to call when none is shown.
    fn stop_progress(&self);

    /// How documentation links inside error text should be rendered
    fn link_style(&self) -> LinkStyle {
        LinkStyle::Plain
    }
}

/// Keeps the progress indicator visible while alive and clears it on drop
pub struct ProgressGuard<'a, C: Console + ?Sized> {
    console: &'a C,
    active: bool,
}

impl<'a, C: Console + ?Sized> ProgressGuard<'a, C> {
    /// Start the indicator
    pub fn start(console: &'a C, label: &str) -> Self {
        console.start_progress(label);
        Self {
            console,
            active: true,
        }
    }

    /// Clear the indicator now
    pub fn finish(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.console.stop_progress();
        }
    }
}

impl<C: Console + ?Sized> Drop for ProgressGuard<'_, C> {
    fn drop(&mut self) {
        self.stop();
    }
}
