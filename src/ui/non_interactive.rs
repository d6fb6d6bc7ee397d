//! Non-interactive UI for pipes, scripts, and status bars.

use std::collections::HashMap;

use crate::error::{Result, SkycastError};

use super::theme::SkycastTheme;
use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "SKYCAST_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `SKYCAST_PROMPT_<KEY>` environment variables,
/// then from the prompt's default. Status output goes to stderr so stdout
/// carries only the report or JSON.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: SkycastTheme,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            theme: SkycastTheme::plain(),
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            theme: SkycastTheme::plain(),
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn data(&mut self, text: &str) {
        println!("{}", text);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned();

        match (answer, &prompt.prompt_type) {
            (Some(value), PromptType::Confirm) => {
                Ok(PromptResult::Bool(PromptResult::String(value).as_bool()))
            }
            (Some(value), _) => Ok(PromptResult::String(value)),
            (None, _) => Err(SkycastError::InvalidInput {
                message: format!(
                    "Cannot prompt for '{}' in non-interactive mode (no default value)",
                    prompt.key
                ),
            }),
        }
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}\n", title);
        }
    }

    fn show_field(&mut self, key: &str, value: &str) {
        println!("{}", self.theme.format_field(key, value));
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
    fn finish_and_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptOption;

    fn city_prompt() -> Prompt {
        Prompt::select(
            "city",
            "Which one?",
            vec![
                PromptOption {
                    label: "Zagreb, Croatia".into(),
                    value: "0".into(),
                },
                PromptOption {
                    label: "Zagreb, Serbia".into(),
                    value: "1".into(),
                },
            ],
        )
    }

    #[test]
    fn select_falls_back_to_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui.prompt(&city_prompt()).unwrap();
        assert_eq!(result, PromptResult::String("0".into()));
    }

    #[test]
    fn env_override_wins() {
        let overrides = HashMap::from([("SKYCAST_PROMPT_CITY".to_string(), "1".to_string())]);
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let result = ui.prompt(&city_prompt()).unwrap();
        assert_eq!(result.as_string(), "1");
    }

    #[test]
    fn confirm_returns_bool() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui
            .prompt(&Prompt::confirm("clear_cache", "Clear?", false))
            .unwrap();
        assert_eq!(result, PromptResult::Bool(false));
    }

    #[test]
    fn prompt_without_default_fails() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::select("city", "Which one?", vec![]);
        let err = ui.prompt(&prompt).unwrap_err();
        assert!(err.to_string().contains("non-interactive"));
    }

    #[test]
    fn is_never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
