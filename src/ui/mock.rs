//! Recording UI for command tests.
//!
//! Every call lands in an ordered event log, so tests can ask both
//! "was a warning shown" and "what did stdout get".
//!
//! ```
//! use skycast::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("clear_cache", "yes");
//!
//! let answer = ui.prompt(&Prompt::confirm("clear_cache", "Clear?", false)).unwrap();
//! ui.success("Cache cleared");
//!
//! assert!(answer.as_bool());
//! assert!(ui.has_success("Cache cleared"));
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Json(String),
    Header(String),
    Field(String, String),
    Hint(String),
    Spinner(String),
    Prompt(String),
}

#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    events: Vec<Event>,
    answers: HashMap<String, String>,
}

macro_rules! collect {
    ($self:ident, $variant:ident) => {
        $self
            .events
            .iter()
            .filter_map(|e| match e {
                Event::$variant(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    };
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Answer the prompt with `key` with `response` instead of its default.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.answers.insert(key.to_string(), response.to_string());
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> Vec<String> {
        collect!(self, Message)
    }

    pub fn successes(&self) -> Vec<String> {
        collect!(self, Success)
    }

    pub fn warnings(&self) -> Vec<String> {
        collect!(self, Warning)
    }

    pub fn errors(&self) -> Vec<String> {
        collect!(self, Error)
    }

    /// Everything written through [`UserInterface::data`].
    pub fn json_lines(&self) -> Vec<String> {
        collect!(self, Json)
    }

    pub fn headers(&self) -> Vec<String> {
        collect!(self, Header)
    }

    pub fn hints(&self) -> Vec<String> {
        collect!(self, Hint)
    }

    pub fn spinners(&self) -> Vec<String> {
        collect!(self, Spinner)
    }

    /// Keys of the prompts asked, in order.
    pub fn prompts_shown(&self) -> Vec<String> {
        collect!(self, Prompt)
    }

    pub fn fields(&self) -> Vec<(String, String)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Field(k, v) => Some((k.clone(), v.clone())),
                _ => None,
            })
            .collect()
    }

    /// Value of the first field labelled `key`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.events.iter().find_map(|e| match e {
            Event::Field(k, v) if k == key => Some(v.as_str()),
            _ => None,
        })
    }

    fn any(&self, pick: impl Fn(&Event) -> Option<&String>, needle: &str) -> bool {
        self.events
            .iter()
            .filter_map(pick)
            .any(|s| s.contains(needle))
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.any(
            |e| match e {
                Event::Message(s) => Some(s),
                _ => None,
            },
            needle,
        )
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.any(
            |e| match e {
                Event::Success(s) => Some(s),
                _ => None,
            },
            needle,
        )
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.any(
            |e| match e {
                Event::Warning(s) => Some(s),
                _ => None,
            },
            needle,
        )
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.any(
            |e| match e {
                Event::Error(s) => Some(s),
                _ => None,
            },
            needle,
        )
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        self.any(
            |e| match e {
                Event::Hint(s) => Some(s),
                _ => None,
            },
            needle,
        )
    }

    fn record(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.record(Event::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.record(Event::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.record(Event::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.record(Event::Error(msg.to_string()));
    }

    fn data(&mut self, text: &str) {
        self.record(Event::Json(text.to_string()));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.record(Event::Prompt(prompt.key.clone()));

        let answer = self
            .answers
            .get(&prompt.key)
            .or(prompt.default.as_ref())
            .cloned()
            .unwrap_or_default();

        Ok(match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(PromptResult::String(answer).as_bool()),
            _ => PromptResult::String(answer),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(Event::Spinner(message.to_string()));
        Box::new(MockSpinner::default())
    }

    fn show_header(&mut self, title: &str) {
        self.record(Event::Header(title.to_string()));
    }

    fn show_field(&mut self, key: &str, value: &str) {
        self.record(Event::Field(key.to_string(), value.to_string()));
    }

    fn show_hint(&mut self, hint: &str) {
        self.record(Event::Hint(hint.to_string()));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// How a [`MockSpinner`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
    Cleared,
}

/// Spinner that remembers its last message and how it finished.
#[derive(Debug, Default)]
pub struct MockSpinner {
    message: Option<String>,
    status: Option<SpinnerStatus>,
}

impl MockSpinner {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }

    fn finish(&mut self, status: SpinnerStatus, msg: Option<&str>) {
        if let Some(msg) = msg {
            self.message = Some(msg.to_string());
        }
        self.status = Some(status);
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Success, Some(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Error, Some(msg));
    }

    fn finish_and_clear(&mut self) {
        self.finish(SpinnerStatus::Cleared, None);
    }
}
