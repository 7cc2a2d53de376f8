//! Shape fill colors.
//!
//! A color is written as exactly six hexadecimal digits with no `#` prefix.
//! [`Color`] keeps the text as written so a parsed file serializes back with
//! its original casing, and decodes to a packed `0xRRGGBB` integer on demand.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::COLOR_DIGITS;

/// Error returned by [`Color::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The text is not exactly six characters long.
    #[error("expected 6 hex digits, found {0} characters")]
    WrongLength(usize),
    /// A character outside `[0-9A-Fa-f]` was found.
    #[error("`{0}` is not a hex digit")]
    NotHex(char),
}

/// A validated six-digit hex color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Validate `raw` as a six-digit hex color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::WrongLength`] unless `raw` has exactly six
    /// characters, and [`ColorError::NotHex`] for the first non-hex one.
    pub fn parse(raw: &str) -> Result<Self, ColorError> {
        let len = raw.chars().count();
        if len != COLOR_DIGITS {
            return Err(ColorError::WrongLength(len));
        }
        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::NotHex(bad));
        }
        Ok(Self(raw.to_owned()))
    }

    /// The color exactly as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Packed `0xRRGGBB` value.
    #[must_use]
    pub fn to_int(&self) -> u32 {
        self.0
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0, |acc, digit| (acc << 4) | digit)
    }
}

/// Decode a six-digit hex color (case-insensitive, no prefix) into `0xRRGGBB`.
///
/// # Errors
///
/// Returns a [`ColorError`] when `raw` is not a valid color.
pub fn color_to_int(raw: &str) -> Result<u32, ColorError> {
    Color::parse(raw).map(|c| c.to_int())
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
