//! Terminal colors for skycast output.

use console::Style;

/// What a piece of text is, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Heading,
    Label,
    Hint,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().color256(208),
            Self::Error => Style::new().red().bold(),
            Self::Heading => Style::new().cyan().bold(),
            Self::Label => Style::new().bold(),
            Self::Hint => Style::new().cyan().dim(),
        }
    }
}

/// Colored or plain rendering of status lines, headers and fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkycastTheme {
    colored: bool,
}

impl Default for SkycastTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SkycastTheme {
    /// Colored theme.
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// No styling at all, for pipes and `--no-color`.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Colored or plain, depending on the terminal and `no_color`.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Apply the style for `tone` to `text`.
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if self.colored {
            tone.style().apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.paint(Tone::Success, &format!("✓ {}", msg))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.paint(Tone::Warning, &format!("⚠ {}", msg))
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.paint(Tone::Error, &format!("✗ {}", msg))
    }

    /// "☁ Zagreb, Croatia"
    pub fn format_header(&self, title: &str) -> String {
        self.paint(Tone::Heading, &format!("☁ {}", title))
    }

    /// Label padded to a fixed width so values line up.
    pub fn format_field(&self, key: &str, value: &str) -> String {
        let label = format!("{:<12}", format!("{}:", key));
        format!("  {} {}", self.paint(Tone::Label, &label), value)
    }

    pub fn format_hint(&self, hint: &str) -> String {
        self.paint(Tone::Hint, hint)
    }
}

/// Whether stdout should get ANSI colors.
///
/// Honors `NO_COLOR` (<https://no-color.org/>), then asks the terminal.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}
