//! Yes/no confirmation dialog

use super::PromptOptions;
use crate::activity::{Activity, PromptContent};
use crate::config::PromptConfig;
use crate::dialog::{Dialog, DialogContext, DialogTurn};
use crate::error::PromptError;
use crate::recognizers::{BooleanCandidate, BooleanRecognizer, ChoiceBooleanRecognizer};
use async_trait::async_trait;

pub const CONFIRM_DIALOG_ID: &str = "prompt:confirm";

/// What a confirm dialog does with one reply
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmDecision {
    /// End the dialog with this answer
    Recognized(bool),
    /// Stay active and send this message
    Reprompt(Activity),
    /// Stay active and say nothing
    Silent,
}

/// Pure decision for one reply.
///
/// The first candidate wins. Without one, the retry prompt takes priority
/// over the original prompt. Empty prompts count as unset.
#[must_use]
pub fn decide(state: &PromptOptions, candidates: &[BooleanCandidate]) -> ConfirmDecision {
    if let Some(first) = candidates.first() {
        return ConfirmDecision::Recognized(first.value);
    }
    let configured = |content: &&PromptContent| !content.is_empty();
    match state
        .retry_prompt
        .as_ref()
        .filter(configured)
        .or_else(|| state.prompt.as_ref().filter(configured))
    {
        Some(content) => ConfirmDecision::Reprompt(content.to_activity()),
        None => ConfirmDecision::Silent,
    }
}

/// Asks a yes/no question and ends with the user's answer
pub struct ConfirmPrompt<R = ChoiceBooleanRecognizer> {
    recognizer: R,
    locale: String,
}

impl ConfirmPrompt<ChoiceBooleanRecognizer> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&PromptConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &PromptConfig) -> Self {
        Self {
            recognizer: ChoiceBooleanRecognizer::new(),
            locale: config.locale.clone(),
        }
    }
}

impl Default for ConfirmPrompt<ChoiceBooleanRecognizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BooleanRecognizer> ConfirmPrompt<R> {
    #[must_use]
    pub fn with_recognizer(recognizer: R, config: &PromptConfig) -> Self {
        Self {
            recognizer,
            locale: config.locale.clone(),
        }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

#[async_trait]
impl<R: BooleanRecognizer> Dialog for ConfirmPrompt<R> {
    type Args = PromptOptions;
    type State = PromptOptions;
    type Output = bool;

    fn id(&self) -> &str {
        CONFIRM_DIALOG_ID
    }

    async fn begin_dialog(
        &self,
        ctx: &mut DialogContext<'_, PromptOptions>,
        args: PromptOptions,
    ) -> Result<DialogTurn<bool>, PromptError> {
        if let Some(prompt) = args.prompt.as_ref().filter(|p| !p.is_empty()) {
            ctx.push_response(prompt.to_activity());
        }
        ctx.set_state(args);
        Ok(DialogTurn::Waiting)
    }

    async fn continue_dialog(
        &self,
        ctx: &mut DialogContext<'_, PromptOptions>,
    ) -> Result<DialogTurn<bool>, PromptError> {
        let state = ctx.require_state()?;
        let candidates = self
            .recognizer
            .recognize(ctx.turn().request_text(), &self.locale)?;
        let decision = decide(state, &candidates);

        match decision {
            ConfirmDecision::Recognized(value) => {
                tracing::debug!(value, candidates = candidates.len(), "Confirmation recognized");
                Ok(ctx.end_dialog(value))
            }
            ConfirmDecision::Reprompt(activity) => {
                tracing::debug!("No confirmation recognized, re-prompting");
                ctx.push_response(activity);
                Ok(DialogTurn::Waiting)
            }
            ConfirmDecision::Silent => {
                tracing::debug!("No confirmation recognized and no prompt configured");
                Ok(DialogTurn::Waiting)
            }
        }
    }
}
