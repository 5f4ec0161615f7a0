//! Fixed light and dark palettes

use serde::{Serialize, Serializer};

use crate::error::ThemeError;
use crate::preference::EffectiveTheme;

/// An opaque sRGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ThemeError::InvalidColor(s.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ThemeError::InvalidColor(s.to_string()))
        };

        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Colors for each semantic role of the window chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub background: Color,
    pub text: Color,
    pub tab_background: Color,
    pub tab_selected: Color,
    pub hover: Color,
    /// Progress bar and focus highlights
    pub accent: Color,
}

const ACCENT: Color = Color::rgb(0x42, 0x85, 0xF4);

pub const LIGHT: ColorPalette = ColorPalette {
    background: Color::rgb(0xF3, 0xF3, 0xEE),
    text: Color::rgb(0x00, 0x00, 0x00),
    tab_background: Color::rgb(0xFC, 0xFC, 0xF9),
    tab_selected: Color::rgb(0xF3, 0xF3, 0xEE),
    hover: Color::rgb(0xE8, 0xE8, 0xE5),
    accent: ACCENT,
};

pub const DARK: ColorPalette = ColorPalette {
    background: Color::rgb(0x20, 0x22, 0x22),
    text: Color::rgb(0xFF, 0xFF, 0xFF),
    tab_background: Color::rgb(0x18, 0x1A, 0x1A),
    tab_selected: Color::rgb(0x20, 0x22, 0x22),
    hover: Color::rgb(0x2D, 0x2E, 0x2E),
    accent: ACCENT,
};

impl ColorPalette {
    pub fn for_theme(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => LIGHT,
            EffectiveTheme::Dark => DARK,
        }
    }
}
