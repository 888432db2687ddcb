//! Open/close/sync command handlers

use anyhow::Result;

use super::context::{resolve_group, CommandContext};

/// Open every file of a group in the editor
pub fn cmd_open(ctx: &mut CommandContext, group: String) -> Result<()> {
    let id = resolve_group(&ctx.store, &group)?;
    ctx.store.open_group(id)?;
    Ok(())
}

/// Close the group's files that are currently open
pub fn cmd_close(ctx: &mut CommandContext, group: String) -> Result<()> {
    let id = resolve_group(&ctx.store, &group)?;
    ctx.store.close_group(id)?;
    Ok(())
}

/// Reorder a group's entries to match the open-tab order
pub fn cmd_sync(ctx: &mut CommandContext, group: String) -> Result<()> {
    let id = resolve_group(&ctx.store, &group)?;
    ctx.store.sync_group_to_open_tabs(id)?;
    Ok(())
}

/// Add every currently open tab to a group
pub fn cmd_import_tabs(ctx: &mut CommandContext, group: String) -> Result<()> {
    let id = resolve_group(&ctx.store, &group)?;
    ctx.store.add_all_open_tabs(id)?;
    Ok(())
}
