use owo_colors::OwoColorize;
use std::fmt;

/// The central theme definition for the CLI.
pub struct Theme;

impl Theme {
    /// Primary color (Cyan) - profile ids, headings.
    pub fn primary(text: impl fmt::Display) -> String {
        format!("{}", text.cyan().bold())
    }

    pub fn bold(text: impl fmt::Display) -> String {
        format!("{}", text.bold())
    }

    /// Secondary color (Magenta) - profile origins.
    pub fn secondary(text: impl fmt::Display) -> String {
        format!("{}", text.magenta())
    }

    pub fn success(text: impl fmt::Display) -> String {
        format!("{}", text.green().bold())
    }

    pub fn warning(text: impl fmt::Display) -> String {
        format!("{}", text.yellow().bold())
    }

    pub fn error(text: impl fmt::Display) -> String {
        format!("{}", text.red().bold())
    }

    /// Muted/Dimmed - locations, causes.
    pub fn muted(text: impl fmt::Display) -> String {
        format!("{}", text.dimmed())
    }
}

pub enum Icon {
    Check,
    Cross,
    Info,
    Warning,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Check => "✔",
            Icon::Cross => "✖",
            Icon::Info => "ℹ",
            Icon::Warning => "⚠",
        };
        write!(f, "{}", icon)
    }
}
