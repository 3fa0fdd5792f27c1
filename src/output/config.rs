//! Display configuration for terminal output.

/// Toggles for how log lines are decorated.
///
/// Passed explicitly to [`Console`](super::Console); there is no
/// process-wide display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Prefix lines with a status glyph (`✓`, `✗`, `!`, `?`).
    pub show_indicator: bool,
    /// Prefix lines with seconds since the program started.
    pub show_runtime: bool,
    /// Emit ANSI colours.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_indicator: true,
            show_runtime: true,
            color: true,
        }
    }
}

impl DisplayConfig {
    /// Undecorated output, used for usage text.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            show_indicator: false,
            show_runtime: false,
            color: false,
        }
    }

    /// Returns a copy with colour switched on or off.
    #[must_use]
    pub fn with_color(self, color: bool) -> Self {
        Self { color, ..self }
    }
}
