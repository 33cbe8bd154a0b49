//! Rgb: True-color representation for message foreground and background.
//!
//! Colors are written and parsed as `#rrggbb` hex strings, which is also the
//! form used in configuration files and saved message buffers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// True-color RGB representation.
///
/// Uses 3 bytes for 24-bit color depth.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Yellow (255, 255, 0)
    pub const YELLOW: Self = Self::new(255, 255, 0);
    /// Brick red used for error messages.
    pub const BRICK_RED: Self = Self::new(0xaa, 0, 0);
    /// Forest green used for ask-for-input messages.
    pub const FOREST_GREEN: Self = Self::new(0, 0x55, 0);
    /// Purple, the default countdown color.
    pub const PURPLE: Self = Self::new(0x80, 0, 0x80);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

/// A color string that is not `#rrggbb` or `rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected #rrggbb")]
pub struct ParseRgbError(pub String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseRgbError(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Self::from_u32)
            .map_err(|_| ParseRgbError(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}
