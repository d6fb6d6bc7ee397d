//! Interactive prompts drawn on stderr with dialoguer.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use crate::error::{Result, SkycastError};

use super::{Prompt, PromptOption, PromptResult, PromptType};

fn dialoguer_error(e: dialoguer::Error) -> SkycastError {
    match e {
        dialoguer::Error::IO(io) => SkycastError::Io(io),
    }
}

fn theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style(String::new()),
        ..ColorfulTheme::default()
    }
}

/// Ask `prompt` on `term` and wait for the answer.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = theme();
    match &prompt.prompt_type {
        PromptType::Confirm => {
            let default = prompt
                .default
                .as_ref()
                .is_some_and(|d| PromptResult::String(d.clone()).as_bool());
            Confirm::with_theme(&theme)
                .with_prompt(&prompt.question)
                .default(default)
                .interact_on(term)
                .map(PromptResult::Bool)
                .map_err(dialoguer_error)
        }
        PromptType::Select { options } => select(&theme, prompt, options, term),
    }
}

fn select(
    theme: &ColorfulTheme,
    prompt: &Prompt,
    options: &[PromptOption],
    term: &Term,
) -> Result<PromptResult> {
    if options.is_empty() {
        return Err(SkycastError::InvalidInput {
            message: format!("nothing to choose from for '{}'", prompt.key),
        });
    }

    let start = prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| &o.value == d))
        .unwrap_or(0);
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

    let picked = Select::with_theme(theme)
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(start)
        .interact_on(term)
        .map_err(dialoguer_error)?;

    options
        .get(picked)
        .map(|o| PromptResult::String(o.value.clone()))
        .ok_or_else(|| SkycastError::InvalidInput {
            message: format!("selection {} out of range", picked),
        })
}
