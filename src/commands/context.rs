//! Command context
//!
//! Builds the wired store every command runs against: workspace
//! resolution, config loading (with unknown-key warnings), the session
//! editor, the per-workspace JSON state, and the console observer.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use tabgroups::config::with_env_overrides;
use tabgroups::infrastructure::{JsonStateStore, SessionFileEditor};
use tabgroups::{Config, NodeId, TabGroupsError, TreeStore};

use crate::ui::notify::ConsoleObserver;
use crate::ui::theme::icons;

/// The store type the CLI drives
pub type CliStore = TreeStore<JsonStateStore, SessionFileEditor>;

pub struct CommandContext {
    pub workspace_root: PathBuf,
    pub config: Config,
    pub store: CliStore,
}

/// Build the context for one command invocation
pub fn build_context(workspace: Option<PathBuf>, session: Option<PathBuf>) -> Result<CommandContext> {
    let workspace_root = match workspace {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    if !workspace_root.is_dir() {
        return Err(TabGroupsError::NoWorkspace.into());
    }

    let config = load_config(&workspace_root);

    let session_path = session
        .or_else(|| config.session_file.clone())
        .unwrap_or_else(|| workspace_root.join(".tabgroups.session.json"));
    let editor = SessionFileEditor::new(session_path, &workspace_root);
    let state = JsonStateStore::for_workspace(&workspace_root)?;

    let mut store = TreeStore::new(state, editor, config.store_options());
    store.subscribe(Box::new(ConsoleObserver::new()));
    store.restore()?;

    Ok(CommandContext {
        workspace_root,
        config,
        store,
    })
}

fn load_config(workspace_root: &std::path::Path) -> Config {
    let workspace_config = workspace_root.join(".tabgroups.toml");
    if !workspace_config.exists() {
        return Config::load_or_default(Some(workspace_root));
    }

    match Config::load_with_warnings(&workspace_config) {
        Ok((config, warnings)) => {
            for warning in &warnings {
                eprintln!(
                    "{} Unknown config key '{}' in {}",
                    icons::WARNING,
                    warning.key,
                    warning.file.display()
                );
            }
            with_env_overrides(config)
        }
        Err(err) => {
            eprintln!("{} {}", icons::WARNING, err);
            with_env_overrides(Config::default())
        }
    }
}

/// Map a group name to its node id
pub fn resolve_group(store: &CliStore, name: &str) -> Result<NodeId> {
    store
        .find_group(name)
        .map(|group| group.id())
        .ok_or_else(|| anyhow!("no tab group named '{}'", name))
}

/// Map a (group, entry-label) pair to the entry's node id
pub fn resolve_entry(store: &CliStore, group: &str, entry: &str) -> Result<NodeId> {
    let group_node = store
        .find_group(group)
        .ok_or_else(|| anyhow!("no tab group named '{}'", group))?;
    group_node
        .children()
        .iter()
        .find(|child| child.label() == entry)
        .map(|child| child.id())
        .ok_or_else(|| anyhow!("no entry '{}' in tab group '{}'", entry, group))
}
