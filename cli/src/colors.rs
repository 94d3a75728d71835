use colored::{Color, ColoredString, Colorize};

/// Terminal palette for search reports.
///
/// Disabling it only affects this scheme, so several schemes can coexist in one
/// process (`colored`'s own `NO_COLOR`/tty detection still applies on top).
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        Self {
            enabled: use_colors,
        }
    }

    fn paint(&self, text: &str, color: Color) -> ColoredString {
        if self.enabled {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Engine label, `BFS` or `A*`
    pub fn algorithm(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Yellow)
    }

    /// Physical positions and position lists
    pub fn position(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Cyan)
    }

    /// Line indices, `k`
    pub fn index(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Blue)
    }

    /// Opened/visited counters and path lengths
    pub fn count(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Green)
    }

    pub fn marker(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Magenta)
    }

    pub fn success(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Green)
    }

    pub fn error(&self, text: &str) -> ColoredString {
        self.paint(text, Color::Red)
    }

    pub fn header(&self, text: &str) -> ColoredString {
        if self.enabled {
            text.bold()
        } else {
            text.normal()
        }
    }
}
