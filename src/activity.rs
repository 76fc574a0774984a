//! Message envelope exchanged with the host runtime

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ActivityType {
    #[default]
    Message,
    Typing,
    EndOfConversation,
}

/// Hint to the channel about whether the bot expects a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputHint {
    AcceptingInput,
    ExpectingInput,
    IgnoringInput,
}

/// A file or card carried by a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Attachment {
    #[must_use]
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            content_url: None,
            content: None,
            name: None,
            thumbnail_url: None,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.content_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Message envelope. Every field except the type is optional so that a
/// partial structure supplied by a caller round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub activity_type: ActivityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speak: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_hint: Option<InputHint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl Activity {
    #[must_use]
    /// Minimal message envelope carrying only text
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            activity_type: ActivityType::Message,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    #[must_use]
    pub fn with_speak(mut self, speak: impl Into<String>) -> Self {
        self.speak = Some(speak.into());
        self
    }

    #[must_use]
    pub fn with_input_hint(mut self, hint: InputHint) -> Self {
        self.input_hint = Some(hint);
        self
    }
}

/// Prompt payload: either plain text or a (possibly partial) message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptContent {
    Text(String),
    Message(Activity),
}

impl PromptContent {
    /// Empty text counts as no prompt at all. A structured message is
    /// always considered present, even with no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, PromptContent::Text(text) if text.is_empty())
    }

    /// Normalize to a canonical message record
    #[must_use]
    pub fn to_activity(&self) -> Activity {
        match self {
            PromptContent::Text(text) => Activity::message(text.clone()),
            PromptContent::Message(activity) => activity.clone(),
        }
    }
}

impl From<&str> for PromptContent {
    fn from(text: &str) -> Self {
        PromptContent::Text(text.to_string())
    }
}

impl From<String> for PromptContent {
    fn from(text: String) -> Self {
        PromptContent::Text(text)
    }
}

impl From<Activity> for PromptContent {
    fn from(activity: Activity) -> Self {
        PromptContent::Message(activity)
    }
}
