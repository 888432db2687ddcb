//! Tree listing view
//!
//! Renders the forest the way the side panel would: group headers with
//! their icon and entry count, entries indented below with their paths
//! in a dimmed, aligned column. Collapsed groups show only the header.

use tabgroups::TreeNode;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{colors, icons, paint};

/// Render the whole forest into printable lines
pub fn render_forest(forest: &[TreeNode], color: bool) -> String {
    if forest.is_empty() {
        return paint("no tab groups yet", colors::DIM, color);
    }

    let label_width = forest
        .iter()
        .flat_map(|group| group.children())
        .map(|entry| entry.label().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for group in forest {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_group(group, label_width, color));
    }
    out
}

fn render_group(group: &TreeNode, label_width: usize, color: bool) -> String {
    let marker = if group.expanded() {
        icons::EXPANDED
    } else {
        icons::COLLAPSED
    };
    let swatch = group
        .icon()
        .map(|icon| format!("{} ", icon.swatch()))
        .unwrap_or_default();

    let mut out = format!(
        "{} {}{} {}",
        marker,
        swatch,
        group.label(),
        paint(&format!("({})", group.children().len()), colors::DIM, color),
    );

    if !group.expanded() {
        return out;
    }

    for entry in group.children() {
        let padding = label_width.saturating_sub(entry.label().width());
        let path = entry
            .file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "\n  {} {}{}  {}",
            icons::ENTRY,
            entry.label(),
            " ".repeat(padding),
            paint(&path, colors::DIM, color),
        ));
    }
    out
}
