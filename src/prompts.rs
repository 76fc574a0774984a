//! Prompt dialogs
//!
//! Each prompt sends a message asking for a particular kind of reply and
//! interprets the next inbound message against that expectation.

mod attachment;
mod confirm;
mod options;

#[cfg(test)]
mod proptests;

pub use attachment::{AttachmentPrompt, PromptValidator};
pub use confirm::{decide, ConfirmDecision, ConfirmPrompt, CONFIRM_DIALOG_ID};
pub use options::PromptOptions;
