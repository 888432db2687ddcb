//! Group icon value object
//!
//! Groups can carry one icon chosen from a fixed 9-color palette. The
//! persisted form is the lowercase color name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Icon color assigned to a tab group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupIcon {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Brown,
    Black,
    White,
}

impl GroupIcon {
    /// The full palette, in presentation order
    pub const ALL: [GroupIcon; 9] = [
        GroupIcon::Red,
        GroupIcon::Orange,
        GroupIcon::Yellow,
        GroupIcon::Green,
        GroupIcon::Blue,
        GroupIcon::Purple,
        GroupIcon::Brown,
        GroupIcon::Black,
        GroupIcon::White,
    ];

    /// Lowercase color name (also the persisted form)
    pub fn name(self) -> &'static str {
        match self {
            GroupIcon::Red => "red",
            GroupIcon::Orange => "orange",
            GroupIcon::Yellow => "yellow",
            GroupIcon::Green => "green",
            GroupIcon::Blue => "blue",
            GroupIcon::Purple => "purple",
            GroupIcon::Brown => "brown",
            GroupIcon::Black => "black",
            GroupIcon::White => "white",
        }
    }

    /// Colored-square swatch used anywhere the icon is shown in a picker
    pub fn swatch(self) -> &'static str {
        match self {
            GroupIcon::Red => "\u{1F7E5}",
            GroupIcon::Orange => "\u{1F7E7}",
            GroupIcon::Yellow => "\u{1F7E8}",
            GroupIcon::Green => "\u{1F7E9}",
            GroupIcon::Blue => "\u{1F7E6}",
            GroupIcon::Purple => "\u{1F7EA}",
            GroupIcon::Brown => "\u{1F7EB}",
            GroupIcon::Black => "\u{2B1B}",
            GroupIcon::White => "\u{2B1C}",
        }
    }

    /// Parse a color name, case-insensitive
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|icon| icon.name() == lower)
    }
}

impl fmt::Display for GroupIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
