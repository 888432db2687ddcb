//! Ignore patterns value object
//!
//! Gitignore-style matching for the configured ignore globs, applied when
//! listing workspace files for the add-entry pick list. Uses the `ignore`
//! crate's matcher rather than hand-built regexes.

use std::fmt;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Maximum number of patterns accepted from configuration
const MAX_PATTERNS: usize = 1000;

/// Ignore globs applied to workspace scans.
#[derive(Debug)]
pub struct IgnorePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        let builder = GitignoreBuilder::new("");
        let matcher = builder
            .build()
            .expect("empty gitignore should always build");
        Self {
            matcher,
            pattern_count: 0,
        }
    }

    /// Build a matcher rooted at the workspace from configured glob lines.
    ///
    /// Empty lines and `#` comments are skipped, like `.gitignore`.
    pub fn from_globs<S: AsRef<str>>(
        workspace_root: &Path,
        patterns: &[S],
    ) -> Result<Self, IgnoreError> {
        let mut builder = GitignoreBuilder::new(workspace_root);
        let mut pattern_count = 0;

        for pattern in patterns {
            let trimmed = pattern.as_ref().trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(IgnoreError::TooManyPatterns {
                    count: pattern_count,
                    limit: MAX_PATTERNS,
                });
            }

            if let Err(e) = builder.add_line(None, trimmed) {
                return Err(IgnoreError::InvalidPattern {
                    pattern: trimmed.to_string(),
                    message: e.to_string(),
                });
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| IgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a workspace-relative path should be ignored.
    ///
    /// `is_dir` should be true if the path is a directory.
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors from building an ignore matcher.
#[derive(Debug)]
pub enum IgnoreError {
    /// Too many configured patterns.
    TooManyPatterns { count: usize, limit: usize },
    /// A pattern has invalid syntax.
    InvalidPattern { pattern: String, message: String },
    /// Failed to build the matcher.
    BuildFailed(String),
}

impl fmt::Display for IgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPatterns { count, limit } => {
                write!(f, "{} ignore patterns configured, exceeds {} limit", count, limit)
            }
            Self::InvalidPattern { pattern, message } => {
                write!(f, "invalid ignore pattern '{}': {}", pattern, message)
            }
            Self::BuildFailed(msg) => write!(f, "failed to build ignore matcher: {}", msg),
        }
    }
}

impl std::error::Error for IgnoreError {}
