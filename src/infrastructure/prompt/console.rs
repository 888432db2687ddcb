//! Console prompter
//!
//! Implements the Prompter port with dialoguer widgets on the terminal.

use dialoguer::{Confirm, FuzzySelect, Input, MultiSelect};

use crate::domain::ports::prompter::{PromptError, PromptResult, Prompter};

/// Terminal implementation of the `Prompter` port
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_failure(err: dialoguer::Error) -> PromptError {
    PromptError::Other(err.to_string())
}

impl Prompter for ConsolePrompter {
    fn input(&self, prompt: &str) -> PromptResult<Option<String>> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_failure)?;

        // An empty submission reads as a dismissal.
        if value.is_empty() {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }

    fn pick_one(&self, prompt: &str, options: &[String]) -> PromptResult<Option<usize>> {
        if options.is_empty() {
            return Ok(None);
        }
        FuzzySelect::new()
            .with_prompt(prompt)
            .items(options)
            .interact_opt()
            .map_err(prompt_failure)
    }

    fn pick_many(&self, prompt: &str, options: &[String]) -> PromptResult<Option<Vec<usize>>> {
        if options.is_empty() {
            return Ok(None);
        }
        MultiSelect::new()
            .with_prompt(prompt)
            .items(options)
            .interact_opt()
            .map_err(prompt_failure)
    }

    fn confirm(&self, prompt: &str) -> PromptResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(prompt_failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The interactive paths need a tty; only the construction and the
    // empty-options shortcuts are testable here.

    #[test]
    fn empty_option_lists_are_dismissed() {
        let prompter = ConsolePrompter::new();
        assert!(prompter.pick_one("pick", &[]).unwrap().is_none());
        assert!(prompter.pick_many("pick", &[]).unwrap().is_none());
    }
}
