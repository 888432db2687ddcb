//! List command handler

use anyhow::Result;

use super::context::CommandContext;
use crate::ui::theme::color_enabled;
use crate::ui::views::tree::render_forest;

/// Print the whole tree
pub fn cmd_list(ctx: &CommandContext) -> Result<()> {
    println!("{}", render_forest(ctx.store.forest(), color_enabled()));
    Ok(())
}
