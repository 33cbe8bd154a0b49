//! Message: The unit of content shown in the status bar.

use super::color::Rgb;
use std::time::Duration;

/// A status-bar message with optional styling and display timeout.
///
/// Messages are immutable once built. The builder methods consume `self`,
/// in the same way cells are styled:
///
/// ```
/// use msgbar::{Message, Rgb};
/// use std::time::Duration;
///
/// let msg = Message::new("Saved")
///     .with_fg(Rgb::WHITE)
///     .with_bold(true)
///     .with_timeout(Duration::from_secs(3));
/// assert_eq!(msg.text(), "Saved");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    bold: bool,
    timeout: Option<Duration>,
}

impl Message {
    /// Create a plain message with no colors, no bold, and no timeout.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
            bold: false,
            timeout: None,
        }
    }

    /// Yellow on brick red, bold, no timeout.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text)
            .with_fg(Rgb::YELLOW)
            .with_bg(Rgb::BRICK_RED)
            .with_bold(true)
    }

    /// Black on yellow, bold, no timeout.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text)
            .with_fg(Rgb::BLACK)
            .with_bg(Rgb::YELLOW)
            .with_bold(true)
    }

    /// White on forest green, bold, no timeout.
    pub fn ask_for_input(text: impl Into<String>) -> Self {
        Self::new(text)
            .with_fg(Rgb::WHITE)
            .with_bg(Rgb::FOREST_GREEN)
            .with_bold(true)
    }

    /// Set the foreground (text) color.
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Set the bold flag.
    #[must_use]
    pub const fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the display timeout. A zero duration means "no timeout".
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() { None } else { Some(timeout) };
        self
    }

    /// The message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Foreground color, if any.
    pub const fn fg(&self) -> Option<Rgb> {
        self.fg
    }

    /// Background color, if any.
    pub const fn bg(&self) -> Option<Rgb> {
        self.bg
    }

    /// Whether the text is bold.
    pub const fn is_bold(&self) -> bool {
        self.bold
    }

    /// Display timeout, if any.
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
