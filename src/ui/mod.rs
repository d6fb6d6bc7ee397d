//! Terminal presentation.
//!
//! Commands talk to a [`UserInterface`] and never print directly. Three
//! implementations exist: [`TerminalUI`] for a person at a terminal,
//! [`NonInteractiveUI`] for pipes and waybar, and [`MockUI`] for tests.
//!
//! ```
//! use skycast::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet, false);
//! ui.show_header("Zagreb, Croatia");
//! ui.success("Default city saved");
//! ```

pub mod hints;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod report;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use report::ForecastReport;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SkycastTheme, Tone};

use crate::error::Result;

/// Where commands send everything the user sees.
///
/// `data` is for JSON and completion scripts and is never filtered by
/// [`OutputMode`]. The rest may be.
pub trait UserInterface {
    fn output_mode(&self) -> OutputMode;

    /// Plain line on stdout.
    fn message(&mut self, msg: &str);

    /// Hidden in quiet mode.
    fn success(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    fn error(&mut self, msg: &str);

    fn data(&mut self, text: &str);

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Spinner for a network request. Hidden when not on a terminal.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    fn show_header(&mut self, title: &str);

    /// Aligned `label: value` line, e.g. `Wind: 12 km/h`.
    fn show_field(&mut self, key: &str, value: &str);

    /// Suggested next command, shown after the main output.
    fn show_hint(&mut self, hint: &str);

    fn is_interactive(&self) -> bool;
}

/// A running spinner.
pub trait SpinnerHandle {
    fn set_message(&mut self, msg: &str);

    /// Replace the spinner with a success line.
    fn finish_success(&mut self, msg: &str);

    /// Replace the spinner with an error line.
    fn finish_error(&mut self, msg: &str);

    /// Remove the spinner and leave nothing behind.
    fn finish_and_clear(&mut self);
}

/// A question for the user.
///
/// `key` names the question so tests and `SKYCAST_PROMPT_<KEY>` can
/// answer it without a terminal.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub key: String,
    pub question: String,
    pub prompt_type: PromptType,
    /// Used when the user just presses enter or nobody is there to ask.
    pub default: Option<String>,
}

impl Prompt {
    /// A yes/no question.
    pub fn confirm(key: &str, question: impl Into<String>, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.into(),
            prompt_type: PromptType::Confirm,
            default: Some(default.to_string()),
        }
    }

    /// Pick one of `options`. The first one is preselected.
    pub fn select(key: &str, question: impl Into<String>, options: Vec<PromptOption>) -> Self {
        let default = options.first().map(|o| o.value.clone());
        Self {
            key: key.to_string(),
            question: question.into(),
            prompt_type: PromptType::Select { options },
            default,
        }
    }
}

#[derive(Debug, Clone)]
pub enum PromptType {
    Confirm,
    Select { options: Vec<PromptOption> },
}

/// One entry of a select prompt. `value` is what comes back.
#[derive(Debug, Clone)]
pub struct PromptOption {
    pub label: String,
    pub value: String,
}

/// Answer to a [`Prompt`].
#[derive(Debug, Clone, PartialEq)]
pub enum PromptResult {
    Bool(bool),
    String(String),
}

impl PromptResult {
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Yes/no reading of the answer. Strings count as yes when they
    /// read "true", "y" or "yes" in any case.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::String(s) => matches!(s.to_lowercase().as_str(), "true" | "y" | "yes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_result_as_string() {
        assert_eq!(PromptResult::Bool(true).as_string(), "true");
        assert_eq!(PromptResult::String("3".to_string()).as_string(), "3");
    }

    #[test]
    fn prompt_result_as_bool() {
        assert!(PromptResult::Bool(true).as_bool());
        assert!(PromptResult::String("yes".to_string()).as_bool());
        assert!(PromptResult::String("TRUE".to_string()).as_bool());
        assert!(!PromptResult::String("false".to_string()).as_bool());
        assert!(!PromptResult::String("0".to_string()).as_bool());
    }

    #[test]
    fn confirm_prompt_carries_default() {
        let prompt = Prompt::confirm("clear_cache", "Clear?", false);
        assert!(matches!(prompt.prompt_type, PromptType::Confirm));
        assert_eq!(prompt.default.as_deref(), Some("false"));
    }

    #[test]
    fn select_prompt_defaults_to_first_option() {
        let options = vec![
            PromptOption {
                label: "Zagreb, Croatia".to_string(),
                value: "0".to_string(),
            },
            PromptOption {
                label: "Zagreb, Serbia".to_string(),
                value: "1".to_string(),
            },
        ];
        let prompt = Prompt::select("city", "Which one?", options);

        assert_eq!(prompt.default.as_deref(), Some("0"));
        if let PromptType::Select { options } = prompt.prompt_type {
            assert_eq!(options.len(), 2);
        } else {
            panic!("Expected Select variant");
        }
    }

    #[test]
    fn select_prompt_without_options_has_no_default() {
        let prompt = Prompt::select("city", "Which one?", vec![]);
        assert!(prompt.default.is_none());
    }
}
