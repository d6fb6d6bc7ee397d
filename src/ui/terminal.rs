//! Interactive terminal UI.
//!
//! The report and JSON go to stdout; warnings, errors, prompts and spinners
//! go to stderr so redirecting stdout captures only the forecast.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, NonInteractiveUI, OutputMode, ProgressSpinner, Prompt, PromptResult,
    SkycastTheme, SpinnerHandle, UserInterface,
};

/// UI for a user sitting at a terminal.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: SkycastTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode, no_color: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: SkycastTheme::detect(no_color),
            mode,
        }
    }

    pub fn theme(&self) -> SkycastTheme {
        self.theme
    }

    // Broken pipes are not worth failing a weather lookup over.
    fn out(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
    }

    fn err(&mut self, line: &str) {
        let _ = writeln!(self.err, "{}", line);
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.out(msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let line = self.theme.format_success(msg);
            self.out(&line);
        }
    }

    fn warning(&mut self, msg: &str) {
        let line = self.theme.format_warning(msg);
        self.err(&line);
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.err(&line);
    }

    fn data(&mut self, text: &str) {
        self.out(text);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.err)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let spinner = if self.mode.shows_spinners() && self.err.is_term() {
            ProgressSpinner::new(message, self.theme)
        } else {
            ProgressSpinner::hidden()
        };
        Box::new(spinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            let line = format!("\n{}\n", self.theme.format_header(title));
            self.out(&line);
        }
    }

    fn show_field(&mut self, key: &str, value: &str) {
        let line = self.theme.format_field(key, value);
        self.out(&line);
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            let line = format!("\n  {}", self.theme.format_hint(hint));
            self.err(&line);
        }
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term() && self.err.is_term()
    }
}

/// Pick the terminal UI when asked for and stdout is a terminal,
/// otherwise the non-interactive one.
pub fn create_ui(interactive: bool, mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode, no_color))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
