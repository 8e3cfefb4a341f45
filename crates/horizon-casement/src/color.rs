//! RGBA colours for window backgrounds.

use std::fmt;
use std::str::FromStr;

use crate::error::WindowError;

/// An 8-bit-per-channel RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create an opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a colour with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the colour is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Parse `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`.
    ///
    /// The alpha channel comes first, matching the window `backgroundColor`
    /// option.
    pub fn from_hex(s: &str) -> Result<Self, WindowError> {
        let invalid = || WindowError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);

        let color = match hex.len() {
            3 => Color::rgb(
                nibble(0).map_err(|_| invalid())?,
                nibble(1).map_err(|_| invalid())?,
                nibble(2).map_err(|_| invalid())?,
            ),
            4 => Color::rgba(
                nibble(1).map_err(|_| invalid())?,
                nibble(2).map_err(|_| invalid())?,
                nibble(3).map_err(|_| invalid())?,
                nibble(0).map_err(|_| invalid())?,
            ),
            6 => Color::rgb(
                byte(0).map_err(|_| invalid())?,
                byte(2).map_err(|_| invalid())?,
                byte(4).map_err(|_| invalid())?,
            ),
            8 => Color::rgba(
                byte(2).map_err(|_| invalid())?,
                byte(4).map_err(|_| invalid())?,
                byte(6).map_err(|_| invalid())?,
                byte(0).map_err(|_| invalid())?,
            ),
            _ => return Err(invalid()),
        };
        Ok(color)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl FromStr for Color {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(Color::from_hex("#fff"), Ok(Color::WHITE));
        assert_eq!(Color::from_hex("#8000"), Ok(Color::rgba(0, 0, 0, 0x88)));
        assert_eq!(Color::from_hex("#102030"), Ok(Color::rgb(0x10, 0x20, 0x30)));
        assert_eq!(Color::from_hex("#80102030"), Ok(Color::rgba(0x10, 0x20, 0x30, 0x80)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for s in ["fff", "#ff", "#gggggg", "#12345", "", "#ü12"] {
            assert!(Color::from_hex(s).is_err(), "{s}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(1, 2, 255).to_string(), "#0102FF");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }
}
