//! Spinner on stderr while a request to Open-Meteo is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::SkycastTheme;
use super::SpinnerHandle;

const FRAMES: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const TICK: Duration = Duration::from_millis(80);

pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: SkycastTheme,
}

impl ProgressSpinner {
    pub fn new(message: &str, theme: SkycastTheme) -> Self {
        let bar = ProgressBar::new_spinner().with_message(message.to_string());
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars(FRAMES)
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.enable_steady_tick(TICK);
        Self { bar, theme }
    }

    /// Draws nothing; used for quiet mode and when stderr is not a terminal.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: SkycastTheme::plain(),
        }
    }

    // The final line replaces the spinner frame, so drop it from the template.
    fn settle(&self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.settle(self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.settle(self.theme.format_error(msg));
    }

    fn finish_and_clear(&mut self) {
        self.bar.finish_and_clear();
    }
}
