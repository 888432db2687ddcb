//! tabgroups CLI - persistent tab groups for editor workspaces
//!
//! Usage: tabgroups <COMMAND>
//!
//! Groups live in one durable document per workspace; the editor's open
//! tabs are read from (and written to) a session file that integrations
//! keep in sync.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tabgroups::infrastructure::ConsolePrompter;

mod commands;
mod ui;

use commands::context::build_context;

/// tabgroups - persistent tab groups for editor workspaces
#[derive(Parser, Debug)]
#[command(name = "tabgroups")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Workspace directory (defaults to the current directory)
    #[arg(long, global = true)]
    workspace: Option<PathBuf>,

    /// Editor session file listing the open tabs
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every tab group and its entries
    List,

    /// Create a new tab group
    AddGroup {
        /// Name of the group (prompted for when omitted)
        name: Option<String>,
    },

    /// Rename a tab group
    RenameGroup {
        /// Current group name
        group: String,

        /// New name (prompted for when omitted)
        #[arg(long)]
        to: Option<String>,
    },

    /// Remove a tab group and its entries
    RemoveGroup {
        group: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Remove every tab group
    RemoveAll {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Change a group's icon
    SetIcon {
        group: String,

        /// Palette color (picked interactively when omitted)
        #[arg(long)]
        icon: Option<String>,
    },

    /// Pick files to add to a group
    Add { group: String },

    /// Add every currently open tab to a group
    ImportTabs { group: String },

    /// Open every file of a group in the editor
    Open { group: String },

    /// Close the group's files that are open
    Close { group: String },

    /// Reorder a group to match the open-tab order
    Sync { group: String },

    /// Move a group, or one entry, one slot up
    MoveUp {
        group: String,
        entry: Option<String>,
    },

    /// Move a group, or one entry, one slot down
    MoveDown {
        group: String,
        entry: Option<String>,
    },

    /// Remove one entry from a group
    Remove { group: String, entry: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = build_context(cli.workspace, cli.session)?;
    let prompter = ConsolePrompter::new();

    match cli.command {
        Commands::List => commands::list::cmd_list(&ctx),
        Commands::AddGroup { name } => commands::group::cmd_add_group(&mut ctx, &prompter, name),
        Commands::RenameGroup { group, to } => {
            commands::group::cmd_rename_group(&mut ctx, &prompter, group, to)
        }
        Commands::RemoveGroup { group, yes } => {
            commands::group::cmd_remove_group(&mut ctx, &prompter, group, yes)
        }
        Commands::RemoveAll { yes } => commands::group::cmd_remove_all(&mut ctx, &prompter, yes),
        Commands::SetIcon { group, icon } => {
            commands::group::cmd_set_icon(&mut ctx, &prompter, group, icon)
        }
        Commands::Add { group } => commands::entry::cmd_add_entries(&mut ctx, &prompter, group),
        Commands::ImportTabs { group } => commands::tabs::cmd_import_tabs(&mut ctx, group),
        Commands::Open { group } => commands::tabs::cmd_open(&mut ctx, group),
        Commands::Close { group } => commands::tabs::cmd_close(&mut ctx, group),
        Commands::Sync { group } => commands::tabs::cmd_sync(&mut ctx, group),
        Commands::MoveUp { group, entry } => commands::entry::cmd_move(&mut ctx, group, entry, true),
        Commands::MoveDown { group, entry } => {
            commands::entry::cmd_move(&mut ctx, group, entry, false)
        }
        Commands::Remove { group, entry } => commands::entry::cmd_remove_entry(&mut ctx, group, entry),
    }
}
