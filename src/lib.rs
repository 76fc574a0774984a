//! Toybox prompts - small prompt dialogs for turn-based bots
//!
//! A confirm prompt that asks a yes/no question and resumes on every turn
//! until it gets an answer, and an attachment prompt that collects uploads
//! from the next reply. Both take the per-turn context explicitly; the host
//! runtime owns message delivery and dialog-state storage.

pub mod activity;
pub mod config;
pub mod context;
pub mod dialog;
pub mod error;
pub mod prompts;
pub mod recognizers;

pub use activity::{Activity, ActivityType, Attachment, InputHint, PromptContent};
pub use config::PromptConfig;
pub use context::TurnContext;
pub use dialog::{Dialog, DialogContext, DialogInstance, DialogTurn};
pub use error::PromptError;
pub use prompts::{AttachmentPrompt, ConfirmPrompt, PromptOptions, PromptValidator};
pub use recognizers::{BooleanCandidate, BooleanRecognizer, ChoiceBooleanRecognizer};
