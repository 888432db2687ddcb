//! Entry-level command handlers

use anyhow::Result;

use tabgroups::infrastructure::WalkScanner;
use tabgroups::{IgnorePatterns, PickList, Prompter};

use super::context::{resolve_entry, resolve_group, CommandContext};
use crate::ui::theme::{color_enabled, colors, paint};

/// Pick files (open tabs first, then workspace files) into a group
pub fn cmd_add_entries<P: Prompter>(
    ctx: &mut CommandContext,
    prompter: &P,
    group: String,
) -> Result<()> {
    let id = resolve_group(&ctx.store, &group)?;

    let ignore = IgnorePatterns::from_globs(&ctx.workspace_root, &ctx.config.ignore_paths)?;
    let scanner = WalkScanner::new();
    let list = PickList::build(ctx.store.editor(), &scanner, &ctx.workspace_root, &ignore)?;
    if list.is_empty() {
        println!(
            "{}",
            paint("nothing to add in this workspace", colors::DIM, color_enabled())
        );
        return Ok(());
    }

    let candidates = list.into_candidates();
    let options: Vec<String> = candidates.iter().map(|c| c.label.clone()).collect();
    let Some(selection) = prompter.pick_many("Select files", &options)? else {
        return Ok(());
    };
    if selection.is_empty() {
        return Ok(());
    }

    let chosen = selection
        .into_iter()
        .map(|index| candidates[index].clone())
        .collect();
    ctx.store.add_entries(id, chosen)?;
    Ok(())
}

/// Remove one entry from its group
pub fn cmd_remove_entry(ctx: &mut CommandContext, group: String, entry: String) -> Result<()> {
    let id = resolve_entry(&ctx.store, &group, &entry)?;
    ctx.store.remove_entry(id)?;
    Ok(())
}

/// Move a group, or one of its entries, one slot up or down
pub fn cmd_move(
    ctx: &mut CommandContext,
    group: String,
    entry: Option<String>,
    up: bool,
) -> Result<()> {
    let id = match entry {
        Some(entry) => resolve_entry(&ctx.store, &group, &entry)?,
        None => resolve_group(&ctx.store, &group)?,
    };
    if up {
        ctx.store.move_up(id)?;
    } else {
        ctx.store.move_down(id)?;
    }
    Ok(())
}
