//! Terminal UI.

use super::theme::{should_use_colors, ProbeTheme};
use super::{OutputMode, UserInterface};

/// Writes results to stdout and problems to stderr.
pub struct TerminalUI {
    mode: OutputMode,
    theme: ProbeTheme,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ProbeTheme::new()
        } else {
            ProbeTheme::plain()
        };
        Self { mode, theme }
    }

    /// Create with an explicit theme (for testing).
    pub fn with_theme(mode: OutputMode, theme: ProbeTheme) -> Self {
        Self { mode, theme }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_results() {
            println!("{}", msg);
        }
    }

    fn data(&mut self, payload: &str) {
        println!("{}", payload);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_results() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_header(title));
        }
    }

    fn key_value(&mut self, key: &str, value: &str) {
        if self.mode.shows_results() {
            println!("{}", self.theme.format_key_value(key, value));
        }
    }
}

/// Create the UI for a run.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
