use anyhow::Result;
use inquire::MultiSelect;

use crate::error::ScaffoldError;

/// Trait for providing interactive selection functionality
/// This allows us to abstract away the interactive prompts for testing
pub trait SelectionProvider {
    /// Present a checkbox list and return the checked options in list order
    ///
    /// An empty result is a valid answer.
    ///
    /// # Errors
    /// Returns an error if the selection process fails or user cancels
    fn select_many(&self, prompt: &str, options: Vec<String>) -> Result<Vec<String>>;
}

/// Real implementation using inquire::MultiSelect for production use
pub struct RealSelectionProvider;

impl SelectionProvider for RealSelectionProvider {
    fn select_many(&self, prompt: &str, options: Vec<String>) -> Result<Vec<String>> {
        let selection = MultiSelect::new(prompt, options)
            .with_page_size(10)
            .with_vim_mode(true)
            .prompt()
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))?;
        Ok(selection)
    }
}

/// Mock implementation for testing that returns predetermined values
pub struct MockSelectionProvider {
    pub responses: Vec<String>,
}

impl MockSelectionProvider {
    pub fn new<S: AsRef<str>>(responses: &[S]) -> Self {
        Self {
            responses: responses.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

impl SelectionProvider for MockSelectionProvider {
    fn select_many(&self, _prompt: &str, options: Vec<String>) -> Result<Vec<String>> {
        // Validate that every response is actually in the options
        for response in &self.responses {
            if !options.contains(response) {
                anyhow::bail!("Mock response '{}' not found in options", response);
            }
        }
        Ok(self.responses.clone())
    }
}
