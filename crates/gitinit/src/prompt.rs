//! Interactive prompts backed by dialoguer

use dialoguer::{Input, Select};
use gitinit_core::types::{Prompt, PromptAnswer};
use gitinit_core::{Error, InteractionPrompter, Result};

/// Asks questions on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl InteractionPrompter for DialoguerPrompter {
    fn ask(&self, prompt: &Prompt) -> Result<PromptAnswer> {
        match prompt {
            Prompt::Choice { message, options } => {
                let selection = Select::new()
                    .with_prompt(message)
                    .items(options.as_slice())
                    .default(0)
                    .interact()
                    .map_err(|e| Error::interaction(e.to_string()))?;
                Ok(PromptAnswer::Choice(selection))
            }
            Prompt::Text { message } => {
                // Blank answers are handled by the caller
                let answer = Input::<String>::new()
                    .with_prompt(message)
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| Error::interaction(e.to_string()))?;
                Ok(PromptAnswer::Text(answer))
            }
        }
    }
}
