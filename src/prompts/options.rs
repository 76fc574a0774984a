//! Options captured when a prompt dialog begins

use crate::activity::PromptContent;
use serde::{Deserialize, Serialize};

/// Initial prompt and the prompt to send after an unrecognized reply
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<PromptContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_prompt: Option<PromptContent>,
}

impl PromptOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<PromptContent>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    #[must_use]
    pub fn with_retry_prompt(mut self, retry_prompt: impl Into<PromptContent>) -> Self {
        self.retry_prompt = Some(retry_prompt.into());
        self
    }
}
