//! Per-turn context passed explicitly to every prompt operation

use crate::activity::{Activity, Attachment};

/// One inbound message and the responses produced while handling it.
///
/// The host creates a fresh context per turn and drains `responses` once
/// the turn is over. Prompts only read the request and append responses.
#[derive(Debug, Clone, Default)]
pub struct TurnContext {
    request: Option<Activity>,
    responses: Vec<Activity>,
}

impl TurnContext {
    #[must_use]
    pub fn new(request: Activity) -> Self {
        Self {
            request: Some(request),
            responses: Vec::new(),
        }
    }

    /// Context without an inbound message (e.g. a proactive turn)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn request(&self) -> Option<&Activity> {
        self.request.as_ref()
    }

    /// Inbound text, or the empty string when there is none
    #[must_use]
    pub fn request_text(&self) -> &str {
        self.request
            .as_ref()
            .and_then(|r| r.text.as_deref())
            .unwrap_or("")
    }

    #[must_use]
    pub fn request_attachments(&self) -> Option<&[Attachment]> {
        self.request
            .as_ref()
            .and_then(|r| r.attachments.as_deref())
    }

    pub fn push_response(&mut self, activity: Activity) {
        self.responses.push(activity);
    }

    #[must_use]
    pub fn responses(&self) -> &[Activity] {
        &self.responses
    }

    pub fn take_responses(&mut self) -> Vec<Activity> {
        std::mem::take(&mut self.responses)
    }
}
