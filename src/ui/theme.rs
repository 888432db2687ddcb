//! Design tokens for the tabgroups CLI
//!
//! Semantic colors and icons; everything printed goes through these.

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

#[allow(dead_code)] // Not every semantic color has a caller yet
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";

    // Tree rendering.
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";
    pub const ENTRY: &str = "↳";
}

/// Whether stdout wants ANSI styling
pub fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

/// Style `text` with `color` when styling is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}
