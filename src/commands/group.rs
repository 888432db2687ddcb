//! Group-level command handlers

use anyhow::{anyhow, Result};

use tabgroups::{GroupIcon, Prompter};

use super::context::{resolve_group, CommandContext};
use crate::ui::theme::{color_enabled, colors, icons, paint};

fn ok(message: &str) {
    println!("{} {}", paint(icons::SUCCESS, colors::SUCCESS, color_enabled()), message);
}

/// Create a new tab group, prompting for the name when missing
pub fn cmd_add_group<P: Prompter>(
    ctx: &mut CommandContext,
    prompter: &P,
    name: Option<String>,
) -> Result<()> {
    let name = match name {
        Some(name) => Some(name),
        None => prompter.input("Type in the name of the tab group to be created")?,
    };
    let Some(name) = name else {
        return Ok(());
    };

    ctx.store.add_group(&name)?;
    ok(&format!("added tab group '{}'", name));
    Ok(())
}

/// Rename a tab group, prompting for the new name when missing
pub fn cmd_rename_group<P: Prompter>(
    ctx: &mut CommandContext,
    prompter: &P,
    group: String,
    to: Option<String>,
) -> Result<()> {
    let id = resolve_group(&ctx.store, &group)?;
    let to = match to {
        Some(to) => Some(to),
        None => prompter.input("Type in the new name of the tab group")?,
    };
    let Some(to) = to else {
        return Ok(());
    };

    ctx.store.rename_group(id, &to)?;
    ok(&format!("renamed tab group '{}' to '{}'", group, to));
    Ok(())
}

/// Remove one tab group after confirmation
pub fn cmd_remove_group<P: Prompter>(
    ctx: &mut CommandContext,
    prompter: &P,
    group: String,
    yes: bool,
) -> Result<()> {
    let id = resolve_group(&ctx.store, &group)?;
    if !yes && !prompter.confirm(&format!("Remove tab group '{}'?", group))? {
        return Ok(());
    }

    ctx.store.remove_group(id)?;
    ok(&format!("removed tab group '{}'", group));
    Ok(())
}

/// Clear the whole tree after confirmation
pub fn cmd_remove_all<P: Prompter>(ctx: &mut CommandContext, prompter: &P, yes: bool) -> Result<()> {
    if !yes && !prompter.confirm("Are you sure you want to remove all groups?")? {
        return Ok(());
    }

    ctx.store.remove_all_groups()?;
    ok("removed all tab groups");
    Ok(())
}

/// Change a group's icon, offering the palette when none is given
pub fn cmd_set_icon<P: Prompter>(
    ctx: &mut CommandContext,
    prompter: &P,
    group: String,
    icon: Option<String>,
) -> Result<()> {
    let id = resolve_group(&ctx.store, &group)?;

    let icon = match icon {
        Some(name) => GroupIcon::parse(&name)
            .ok_or_else(|| anyhow!("unknown icon color '{}' (try one of: {})", name, palette()))?,
        None => {
            let options: Vec<String> = GroupIcon::ALL
                .iter()
                .map(|icon| format!("{} {}", icon.swatch(), icon.name()))
                .collect();
            match prompter.pick_one("Select icon", &options)? {
                Some(index) => GroupIcon::ALL[index],
                None => return Ok(()),
            }
        }
    };

    ctx.store.set_group_icon(id, icon)?;
    ok(&format!("set icon of '{}' to {}", group, icon.name()));
    Ok(())
}

fn palette() -> String {
    GroupIcon::ALL
        .iter()
        .map(|icon| icon.name())
        .collect::<Vec<_>>()
        .join(", ")
}
