//! Visual style registry for the widget family.
//!
//! Styles are a closed set known at build time. [`Style::ALL`] fixes the
//! listing order and [`Style::name`] the display string of each variant.

mod error;

pub use error::StyleError;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A visual theme identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Default,
    Black,
    White,
    Silver,
    Blue,
    Green,
    Lime,
    Teal,
    Orange,
    Brown,
    Pink,
    Magenta,
    Purple,
    Red,
    Yellow,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 15] = [
        Style::Default,
        Style::Black,
        Style::White,
        Style::Silver,
        Style::Blue,
        Style::Green,
        Style::Lime,
        Style::Teal,
        Style::Orange,
        Style::Brown,
        Style::Pink,
        Style::Magenta,
        Style::Purple,
        Style::Red,
        Style::Yellow,
    ];

    /// Display name of the style.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Default => "Default",
            Style::Black => "Black",
            Style::White => "White",
            Style::Silver => "Silver",
            Style::Blue => "Blue",
            Style::Green => "Green",
            Style::Lime => "Lime",
            Style::Teal => "Teal",
            Style::Orange => "Orange",
            Style::Brown => "Brown",
            Style::Pink => "Pink",
            Style::Magenta => "Magenta",
            Style::Purple => "Purple",
            Style::Red => "Red",
            Style::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = StyleError;

    /// Parse a style name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| StyleError::Unknown(trimmed.to_string()))
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Lists the styles available to host theme pickers.
pub struct StyleRegistry;

impl StyleRegistry {
    /// Ordered style names.
    pub fn list_styles() -> Vec<String> {
        Style::ALL.iter().map(|style| style.name().to_string()).collect()
    }

    /// Ordered style identifiers.
    pub fn styles() -> &'static [Style] {
        &Style::ALL
    }

    /// Number of registered styles.
    pub fn len() -> usize {
        Style::ALL.len()
    }

    /// Find a style by name.
    pub fn lookup(name: &str) -> Option<Style> {
        name.parse().ok()
    }
}
