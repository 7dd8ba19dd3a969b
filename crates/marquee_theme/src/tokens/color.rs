//! Color values for theming

use crate::error::ThemeError;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// An sRGB color with 8-bit channels
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (case-insensitive)
    pub fn parse(src: &str) -> Option<Self> {
        let digits = src.trim().strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        match digits.len() {
            3 => {
                // #RGB expands each nibble: #F0A -> #FF00AA
                let nibble = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ThemeError::InvalidColor(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The value stored at one theme role
///
/// Either a literal color or a reference to a CSS custom property that the
/// styling layer resolves at paint time.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum ColorValue {
    Solid(Color),
    /// Custom property name including the leading `--`
    Var(String),
}

impl ColorValue {
    /// The literal color, if this is not a variable reference
    pub fn solid(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            Self::Var(_) => None,
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl Display for ColorValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => Display::fmt(color, f),
            Self::Var(name) => write!(f, "var({name})"),
        }
    }
}

impl FromStr for ColorValue {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(inner) = trimmed
            .strip_prefix("var(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let name = inner.trim();
            if name.len() > 2 && name.starts_with("--") {
                return Ok(Self::Var(name.to_string()));
            }
            return Err(ThemeError::InvalidColor(s.to_string()));
        }
        trimmed.parse().map(Self::Solid)
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_hex_forms() {
        assert_eq!(Color::parse("#B0B0B0"), Some(Color::from_hex(0xB0B0B0)));
        assert_eq!(Color::parse("#9c9c9c"), Some(Color::from_hex(0x9C9C9C)));
        assert_eq!(Color::parse("#F0A"), Some(Color::from_hex(0xFF00AA)));
        assert_eq!(
            Color::parse("#FF99CC80"),
            Some(Color::rgba(0xFF, 0x99, 0xCC, 0x80))
        );
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["B0B0B0", "#B0B0B", "#GG0000", "#", "#+1+1+1"] {
            assert_eq!(Color::parse(bad), None, "{bad}");
        }
    }

    #[test]
    fn displays_canonical_upper_case() {
        assert_eq!(Color::from_hex(0xff99cc).to_string(), "#FF99CC");
        assert_eq!(Color::WHITE.with_alpha(0x33).to_string(), "#FFFFFF33");
    }

    #[test]
    fn parses_css_variable_references() {
        let value: ColorValue = "var(--colors-accent)".parse().unwrap();
        assert_eq!(value, ColorValue::var("--colors-accent"));
        assert_eq!(value.to_string(), "var(--colors-accent)");
        assert!(value.solid().is_none());

        assert!("var(accent)".parse::<ColorValue>().is_err());
        assert!("var(--)".parse::<ColorValue>().is_err());
    }
}
