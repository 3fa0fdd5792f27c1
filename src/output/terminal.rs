//! Permanent log lines and the single-line countdown.

use std::time::{Duration, Instant};

use console::{Style, Term};

use super::config::DisplayConfig;

/// Kind of a log line; picks glyph and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Undecorated text (usage).
    Plain,
    /// Informational.
    Info,
    /// A completed download.
    Success,
    /// Something the user should notice.
    Warning,
    /// A failure.
    Error,
    /// A question awaiting input.
    Question,
}

impl Level {
    fn indicator(self) -> &'static str {
        match self {
            Self::Plain => " ",
            Self::Info => "i",
            Self::Success => "✓",
            Self::Warning => "!",
            Self::Error => "✗",
            Self::Question => "?",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Info => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red(),
            Self::Question => Style::new().magenta(),
        }
    }
}

/// Writes decorated lines to stderr.
#[derive(Debug, Clone)]
pub struct Console {
    config: DisplayConfig,
    started: Instant,
    term: Term,
}

impl Console {
    /// Creates a console writing to stderr; runtime is measured from now.
    #[must_use]
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            started: Instant::now(),
            term: Term::stderr(),
        }
    }

    /// Returns the underlying terminal handle.
    #[must_use]
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Renders the runtime/indicator prefix for a line of the given level.
    #[must_use]
    pub fn prefix(&self, level: Level) -> String {
        let mut prefix = String::new();
        if self.config.show_runtime {
            let runtime = format!("[{:>6.1}s] ", self.started.elapsed().as_secs_f64());
            prefix.push_str(&self.paint(Style::new().dim(), &runtime));
        }
        if self.config.show_indicator && level != Level::Plain {
            let glyph = format!("{} ", level.indicator());
            prefix.push_str(&self.paint(level.style().bold(), &glyph));
        }
        prefix
    }

    /// Renders a full line without writing it.
    #[must_use]
    pub fn render(&self, level: Level, message: &str) -> String {
        format!("{}{}", self.prefix(level), self.paint(level.style(), message))
    }

    /// Writes an undecorated line.
    pub fn plain(&self, message: &str) {
        self.emit(Level::Plain, message);
    }

    /// Writes an informational line.
    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Writes a success line.
    pub fn success(&self, message: &str) {
        self.emit(Level::Success, message);
    }

    /// Writes a warning line.
    pub fn warning(&self, message: &str) {
        self.emit(Level::Warning, message);
    }

    /// Writes an error line.
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    /// Writes a question and leaves the cursor after it.
    pub fn question(&self, message: &str) {
        let _ = self.term.write_str(&self.render(Level::Question, message));
        let _ = self.term.flush();
    }

    /// Shows `message(n)` as a warning for `n = seconds..=1`, one second
    /// each, rewriting the same line. The line is cleared afterwards.
    ///
    /// Interrupting the process (Ctrl-C) is the way to cancel.
    pub async fn countdown<F>(&self, seconds: u64, message: F)
    where
        F: Fn(u64) -> String,
    {
        let in_place = self.term.is_term();
        for remaining in (1..=seconds).rev() {
            let line = self.render(Level::Warning, &message(remaining));
            if in_place {
                let _ = self.term.clear_line();
                let _ = self.term.write_str(&line);
                let _ = self.term.flush();
            } else {
                let _ = self.term.write_line(&line);
            }
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
        if in_place {
            let _ = self.term.clear_line();
        }
    }

    fn emit(&self, level: Level, message: &str) {
        let _ = self.term.write_line(&self.render(level, message));
    }

    fn paint(&self, style: Style, text: &str) -> String {
        style
            .apply_to(text)
            .force_styling(self.config.color)
            .to_string()
    }
}
