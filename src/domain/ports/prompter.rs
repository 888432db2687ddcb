//! Prompter port - abstraction over user input dialogs
//!
//! Group naming, file selection, icon choice, and confirmations all come
//! through this trait. `Ok(None)` means the user dismissed the prompt.

/// Result type for prompt operations
pub type PromptResult<T> = Result<T, PromptError>;

/// Prompt operation errors
#[derive(Debug)]
pub enum PromptError {
    /// The terminal or input channel failed
    Io(std::io::Error),
    /// Other prompt backend failure
    Other(String),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(err) => write!(f, "I/O error: {}", err),
            PromptError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::Io(err)
    }
}

/// Abstract user-prompt interface
pub trait Prompter {
    /// Free-text input; `None` when dismissed
    fn input(&self, prompt: &str) -> PromptResult<Option<String>>;

    /// Single selection out of `options`; returns the chosen index
    fn pick_one(&self, prompt: &str, options: &[String]) -> PromptResult<Option<usize>>;

    /// Multi selection out of `options`; returns the chosen indices
    fn pick_many(&self, prompt: &str, options: &[String]) -> PromptResult<Option<Vec<usize>>>;

    /// Yes/no confirmation
    fn confirm(&self, prompt: &str) -> PromptResult<bool>;
}
