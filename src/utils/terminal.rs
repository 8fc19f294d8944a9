//! Terminal colour handling
//!
//! Colour is a property of the palette value passed to the renderer, so the
//! same report can be produced with or without escape codes.

const RESET: &str = "\x1b[0m";

/// ANSI colours used in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[0;31m",
            Color::Green => "\x1b[0;32m",
            Color::Yellow => "\x1b[1;33m",
            Color::Blue => "\x1b[0;34m",
        }
    }
}

/// Wraps text in colour codes when enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, color: Color, text: impl AsRef<str>) -> String {
        if self.enabled {
            format!("{}{}{}", color.code(), text.as_ref(), RESET)
        } else {
            text.as_ref().to_string()
        }
    }
}
