//! Dialog continuation contract
//!
//! A dialog is begun with arguments, may stay active across any number of
//! turns while it waits for a usable reply, and ends by handing a typed
//! value back to its caller. Between turns the host keeps the dialog's
//! state in a stack slot; the slot is `Some` exactly while the dialog is
//! active.

use crate::activity::Activity;
use crate::context::TurnContext;
use crate::error::PromptError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Outcome of a single dialog step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogTurn<T> {
    /// Still active, waiting for the next turn
    Waiting,
    /// Ended with a result for the caller
    Complete(T),
}

impl<T> DialogTurn<T> {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, DialogTurn::Complete(_))
    }

    #[must_use]
    pub fn into_result(self) -> Option<T> {
        match self {
            DialogTurn::Waiting => None,
            DialogTurn::Complete(value) => Some(value),
        }
    }
}

/// What a dialog sees during one of its steps: the turn plus its own
/// stack entry.
pub struct DialogContext<'a, S> {
    turn: &'a mut TurnContext,
    slot: &'a mut Option<S>,
}

impl<'a, S> DialogContext<'a, S> {
    pub fn new(turn: &'a mut TurnContext, slot: &'a mut Option<S>) -> Self {
        Self { turn, slot }
    }

    #[must_use]
    pub fn turn(&self) -> &TurnContext {
        &*self.turn
    }

    #[must_use]
    pub fn state(&self) -> Option<&S> {
        self.slot.as_ref()
    }

    /// State of the active dialog, or `NoActiveDialog` if the host
    /// continued a dialog it never began.
    ///
    /// # Errors
    /// Returns `PromptError::NoActiveDialog` when the slot is empty.
    pub fn require_state(&self) -> Result<&S, PromptError> {
        self.slot.as_ref().ok_or(PromptError::NoActiveDialog)
    }

    pub fn state_mut(&mut self) -> Option<&mut S> {
        self.slot.as_mut()
    }

    pub fn set_state(&mut self, state: S) {
        *self.slot = Some(state);
    }

    pub fn push_response(&mut self, activity: Activity) {
        self.turn.push_response(activity);
    }

    /// End the dialog: its state is discarded and `value` goes to the caller.
    pub fn end_dialog<T>(&mut self, value: T) -> DialogTurn<T> {
        *self.slot = None;
        DialogTurn::Complete(value)
    }
}

/// A resumable unit of conversation logic
#[async_trait]
pub trait Dialog: Send + Sync {
    type Args: Send;
    type State: Serialize + DeserializeOwned + Send + Sync;
    type Output: Send;

    /// Identifier the host registers this dialog under
    fn id(&self) -> &str;

    /// Start the dialog with `args`, storing whatever state it needs.
    ///
    /// # Errors
    /// Fails only if a collaborator used while starting fails.
    async fn begin_dialog(
        &self,
        ctx: &mut DialogContext<'_, Self::State>,
        args: Self::Args,
    ) -> Result<DialogTurn<Self::Output>, PromptError>;

    /// Handle the next inbound message for an active dialog.
    ///
    /// # Errors
    /// Returns `PromptError::NoActiveDialog` when there is no state to
    /// resume, and propagates collaborator failures unchanged.
    async fn continue_dialog(
        &self,
        ctx: &mut DialogContext<'_, Self::State>,
    ) -> Result<DialogTurn<Self::Output>, PromptError>;
}

/// Serializable stack entry a host persists between turns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogInstance<S> {
    pub dialog_id: String,
    pub state: S,
}

impl<S: Serialize + DeserializeOwned> DialogInstance<S> {
    #[must_use]
    pub fn new(dialog_id: impl Into<String>, state: S) -> Self {
        Self {
            dialog_id: dialog_id.into(),
            state,
        }
    }

    /// # Errors
    /// Returns `PromptError::State` if the state cannot be serialized.
    pub fn to_json(&self) -> Result<String, PromptError> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    /// Returns `PromptError::State` if `json` is not a valid entry.
    pub fn from_json(json: &str) -> Result<Self, PromptError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Begin `dialog` in an empty slot.
///
/// # Errors
/// Propagates whatever the dialog returns.
pub async fn begin<D: Dialog>(
    dialog: &D,
    slot: &mut Option<D::State>,
    turn: &mut TurnContext,
    args: D::Args,
) -> Result<DialogTurn<D::Output>, PromptError> {
    tracing::debug!(dialog = dialog.id(), "Beginning dialog");
    let mut ctx = DialogContext::new(turn, slot);
    let outcome = dialog.begin_dialog(&mut ctx, args).await?;
    log_outcome(dialog.id(), &outcome);
    Ok(outcome)
}

/// Route a turn to `dialog` if it is active. Returns `None` when the slot
/// is empty, since there is nothing to continue.
///
/// # Errors
/// Propagates whatever the dialog returns.
pub async fn continue_active<D: Dialog>(
    dialog: &D,
    slot: &mut Option<D::State>,
    turn: &mut TurnContext,
) -> Result<Option<DialogTurn<D::Output>>, PromptError> {
    if slot.is_none() {
        return Ok(None);
    }
    tracing::debug!(dialog = dialog.id(), "Continuing dialog");
    let mut ctx = DialogContext::new(turn, slot);
    let outcome = dialog.continue_dialog(&mut ctx).await?;
    log_outcome(dialog.id(), &outcome);
    Ok(Some(outcome))
}

fn log_outcome<T>(dialog_id: &str, outcome: &DialogTurn<T>) {
    match outcome {
        DialogTurn::Waiting => tracing::debug!(dialog = dialog_id, "Dialog waiting for reply"),
        DialogTurn::Complete(_) => tracing::debug!(dialog = dialog_id, "Dialog ended"),
    }
}
