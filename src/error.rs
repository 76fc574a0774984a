//! Prompt error types

use thiserror::Error;

/// Errors surfaced by prompts and their collaborators.
///
/// Prompts never recover from these: a recognizer or validator failure
/// propagates to whoever drove the turn.
#[derive(Debug, Error)]
pub enum PromptError {
    /// A caller-supplied validator rejected the reply
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The recognizer could not process the utterance
    #[error("Recognizer failed: {0}")]
    Recognizer(String),

    /// No recognizer model exists for the requested locale
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// A dialog was continued without an active stack entry
    #[error("No active dialog to continue")]
    NoActiveDialog,

    /// Persisted dialog state could not be encoded or decoded
    #[error("Dialog state error: {0}")]
    State(#[from] serde_json::Error),
}

impl PromptError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn recognizer(message: impl Into<String>) -> Self {
        Self::Recognizer(message.into())
    }
}
