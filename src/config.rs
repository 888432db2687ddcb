//! Configuration for tabgroups
//!
//! Hierarchy, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (TABGROUPS_*)
//! 3. Workspace config (<workspace>/.tabgroups.toml)
//! 4. User config (~/.config/tabgroups/config.toml)
//! 5. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::StoreOptions;
use crate::error::{TabGroupsError, TabGroupsResult};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Read-only inputs to the store and the host glue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Glob patterns excluded from the workspace file listing
    #[serde(default = "default_ignore_paths")]
    pub ignore_paths: Vec<String>,

    /// Close every other editor before opening a group
    #[serde(default)]
    pub close_others_on_open: bool,

    /// Levels expanded by expand-all
    #[serde(default = "default_expand_depth")]
    pub expand_depth: u32,

    /// Editor session file the host reads open tabs from
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

fn default_ignore_paths() -> Vec<String> {
    vec![".git/".to_string()]
}

fn default_expand_depth() -> u32 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_paths: default_ignore_paths(),
            close_others_on_open: false,
            expand_depth: default_expand_depth(),
            session_file: None,
        }
    }
}

impl Config {
    /// Load a config file, failing on unreadable or invalid TOML
    pub fn load(path: &Path) -> TabGroupsResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load a config file and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> TabGroupsResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Config = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| TabGroupsError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key,
                    file: path.to_path_buf(),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from workspace config, user config, or defaults
    pub fn load_or_default(workspace_root: Option<&Path>) -> Self {
        if let Some(root) = workspace_root {
            let workspace_config = root.join(".tabgroups.toml");
            if workspace_config.exists() {
                if let Ok(config) = Self::load(&workspace_config) {
                    return with_env_overrides(config);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tabgroups/config.toml");
            if user_config.exists() {
                if let Ok(config) = Self::load(&user_config) {
                    return with_env_overrides(config);
                }
            }
        }

        with_env_overrides(Self::default())
    }

    /// The store's slice of the configuration
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            close_others_on_open: self.close_others_on_open,
            expand_depth: self.expand_depth,
        }
    }
}

/// Apply environment variable overrides (TABGROUPS_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // TABGROUPS_IGNORE (comma-separated globs)
    if let Ok(globs) = std::env::var("TABGROUPS_IGNORE") {
        config.ignore_paths = globs
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    // TABGROUPS_CLOSE_OTHERS
    if let Ok(value) = std::env::var("TABGROUPS_CLOSE_OTHERS") {
        config.close_others_on_open = matches!(value.as_str(), "1" | "true" | "yes");
    }

    // TABGROUPS_EXPAND_DEPTH
    if let Ok(value) = std::env::var("TABGROUPS_EXPAND_DEPTH") {
        if let Ok(depth) = value.parse() {
            config.expand_depth = depth;
        }
    }

    // TABGROUPS_SESSION_FILE
    if let Ok(path) = std::env::var("TABGROUPS_SESSION_FILE") {
        if !path.is_empty() {
            config.session_file = Some(PathBuf::from(path));
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.ignore_paths, vec![".git/".to_string()]);
        assert!(!config.close_others_on_open);
        assert_eq!(config.expand_depth, 2);
        assert!(config.session_file.is_none());
    }

    #[test]
    fn load_reads_all_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".tabgroups.toml");
        fs::write(
            &path,
            r#"
ignore_paths = ["target/", "*.log"]
close_others_on_open = true
expand_depth = 1
session_file = "/tmp/session.json"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.ignore_paths, vec!["target/", "*.log"]);
        assert!(config.close_others_on_open);
        assert_eq!(config.expand_depth, 1);
        assert_eq!(config.session_file, Some(PathBuf::from("/tmp/session.json")));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".tabgroups.toml");
        fs::write(&path, "close_others_on_open = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.close_others_on_open);
        assert_eq!(config.expand_depth, 2);
        assert_eq!(config.ignore_paths, vec![".git/".to_string()]);
    }

    #[test]
    fn unknown_keys_warn_but_do_not_fail() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".tabgroups.toml");
        fs::write(&path, "close_others_on_open = true\nexpand_lvl = 3\n").unwrap();

        let (config, warnings) = Config::load_with_warnings(&path).unwrap();
        assert!(config.close_others_on_open);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "expand_lvl");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".tabgroups.toml");
        fs::write(&path, "close_others_on_open = \"definitely\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, TabGroupsError::InvalidConfig { .. }));
    }

    #[test]
    fn store_options_mirror_the_config() {
        let config = Config {
            close_others_on_open: true,
            expand_depth: 3,
            ..Config::default()
        };
        let options = config.store_options();
        assert!(options.close_others_on_open);
        assert_eq!(options.expand_depth, 3);
    }
}
