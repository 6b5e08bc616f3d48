use crossterm::style::{Color, Stylize};
use std::io::IsTerminal;

/// Colors warning and error lines, or leaves them plain when output is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn for_stdout() -> Self {
        Self {
            enabled: std::io::stdout().is_terminal(),
        }
    }

    pub fn for_stderr() -> Self {
        Self {
            enabled: std::io::stderr().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn warn(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}
