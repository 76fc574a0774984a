//! Prompt asking the user to upload attachments

use crate::activity::{Attachment, PromptContent};
use crate::config::PromptConfig;
use crate::context::TurnContext;
use crate::error::PromptError;
use async_trait::async_trait;

/// Caller-supplied check applied to a recognized reply.
///
/// A validator may pass the raw value through, reshape it into `O`, return
/// `Ok(None)` to signal "nothing usable", or reject with an error. The
/// prompt does not inspect the outcome.
#[async_trait]
pub trait PromptValidator<I, O>: Send + Sync {
    /// # Errors
    /// Any error means the reply was rejected.
    async fn validate(&self, ctx: &TurnContext, value: Option<I>) -> Result<Option<O>, PromptError>;
}

#[async_trait]
impl<I, O, F> PromptValidator<I, O> for F
where
    F: Fn(&TurnContext, Option<I>) -> Result<Option<O>, PromptError> + Send + Sync,
    I: Send + 'static,
    O: Send + 'static,
{
    async fn validate(&self, ctx: &TurnContext, value: Option<I>) -> Result<Option<O>, PromptError> {
        self(ctx, value)
    }
}

struct Passthrough;

#[async_trait]
impl PromptValidator<Vec<Attachment>, Vec<Attachment>> for Passthrough {
    async fn validate(
        &self,
        _ctx: &TurnContext,
        value: Option<Vec<Attachment>>,
    ) -> Result<Option<Vec<Attachment>>, PromptError> {
        Ok(value)
    }
}

/// Asks for one or more attachments and returns whatever the reply carried
pub struct AttachmentPrompt<O = Vec<Attachment>> {
    validator: Box<dyn PromptValidator<Vec<Attachment>, O>>,
    config: PromptConfig,
}

impl AttachmentPrompt<Vec<Attachment>> {
    #[must_use]
    /// Prompt without a validator: replies are returned as received
    pub fn new() -> Self {
        Self {
            validator: Box::new(Passthrough),
            config: PromptConfig::default(),
        }
    }
}

impl Default for AttachmentPrompt<Vec<Attachment>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Send + 'static> AttachmentPrompt<O> {
    #[must_use]
    pub fn with_validator(validator: impl PromptValidator<Vec<Attachment>, O> + 'static) -> Self {
        Self {
            validator: Box::new(validator),
            config: PromptConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: PromptConfig) -> Self {
        self.config = config;
        self
    }

    /// Send the prompt. Text becomes a minimal message; a structured
    /// message is copied as given. `speak` is attached when present, and
    /// the configured input hint fills in a missing one.
    pub fn prompt(&self, ctx: &mut TurnContext, content: impl Into<PromptContent>, speak: Option<&str>) {
        let mut msg = content.into().to_activity();
        if let Some(speak) = speak.filter(|s| !s.is_empty()) {
            msg.speak = Some(speak.to_string());
        }
        if msg.input_hint.is_none() {
            msg.input_hint = Some(self.config.default_input_hint);
        }
        ctx.push_response(msg);
    }

    /// Read the attachments on the inbound message and hand them to the
    /// validator.
    ///
    /// # Errors
    /// Whatever the validator returns is propagated unchanged.
    pub async fn recognize(&self, ctx: &TurnContext) -> Result<Option<O>, PromptError> {
        let values = ctx.request_attachments().map(<[Attachment]>::to_vec);
        tracing::debug!(
            count = values.as_ref().map_or(0, Vec::len),
            "Recognizing attachments"
        );
        self.validator.validate(ctx, values).await
    }
}
