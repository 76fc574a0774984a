//! Prompt configuration

use crate::activity::InputHint;

pub const DEFAULT_LOCALE: &str = "en-us";

/// Settings shared by the prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    /// Locale handed to the recognizer
    pub locale: String,
    /// Hint applied to outgoing prompts that don't set one
    pub default_input_hint: InputHint,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            default_input_hint: InputHint::ExpectingInput,
        }
    }
}

impl PromptConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            locale: std::env::var("PROMPT_LOCALE")
                .ok()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .unwrap_or(defaults.locale),
            default_input_hint: std::env::var("PROMPT_INPUT_HINT")
                .ok()
                .and_then(|h| parse_input_hint(&h))
                .unwrap_or(defaults.default_input_hint),
        }
    }
}

fn parse_input_hint(raw: &str) -> Option<InputHint> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "acceptinginput" | "accepting_input" | "accepting" => Some(InputHint::AcceptingInput),
        "expectinginput" | "expecting_input" | "expecting" => Some(InputHint::ExpectingInput),
        "ignoringinput" | "ignoring_input" | "ignoring" => Some(InputHint::IgnoringInput),
        other => {
            tracing::warn!(value = %other, "Unrecognized PROMPT_INPUT_HINT, using default");
            None
        }
    }
}
