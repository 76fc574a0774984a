//! Yes/no recognition

use crate::error::PromptError;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// One interpretation of an utterance as a yes/no answer
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanCandidate {
    /// Matched slice of the utterance
    pub text: String,
    /// Byte offset of the match start
    pub start: usize,
    /// Byte offset one past the match end
    pub end: usize,
    pub value: bool,
    pub score: f32,
}

/// Parses text into ranked boolean candidates.
///
/// Implementations are pure: the same utterance and locale always yield
/// the same candidates, best first.
pub trait BooleanRecognizer: Send + Sync {
    /// # Errors
    /// Implementations fail when they cannot process the utterance or have
    /// no model for `locale`.
    fn recognize(&self, utterance: &str, locale: &str) -> Result<Vec<BooleanCandidate>, PromptError>;
}

impl<T: BooleanRecognizer + ?Sized> BooleanRecognizer for Arc<T> {
    fn recognize(&self, utterance: &str, locale: &str) -> Result<Vec<BooleanCandidate>, PromptError> {
        (**self).recognize(utterance, locale)
    }
}

impl<T: BooleanRecognizer + ?Sized> BooleanRecognizer for Box<T> {
    fn recognize(&self, utterance: &str, locale: &str) -> Result<Vec<BooleanCandidate>, PromptError> {
        (**self).recognize(utterance, locale)
    }
}

static ENGLISH_BOOLEAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<hedge>\b(?:not|un)\s*sure\b|\bi\s+don'?t\s+know\b)|(?P<yes>\b(?:yes|yeah|yep|yup|sure|okay|ok|true|affirmative|y)\b|👍)|(?P<no>\b(?:no|nope|nah|false|negative|n)\b|👎)",
    )
    .expect("boolean pattern is valid")
});

const SUPPORTED_LOCALES: &[&str] = &["en", "en-us", "en-gb"];

/// Built-in English yes/no recognizer.
///
/// Every yes-ish or no-ish token becomes a candidate, in order of
/// appearance. Hedges such as "not sure" are consumed without producing a
/// candidate, so their "sure" never reads as a yes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceBooleanRecognizer;

impl ChoiceBooleanRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BooleanRecognizer for ChoiceBooleanRecognizer {
    fn recognize(&self, utterance: &str, locale: &str) -> Result<Vec<BooleanCandidate>, PromptError> {
        let locale = locale.to_ascii_lowercase();
        if !SUPPORTED_LOCALES.contains(&locale.as_str()) {
            return Err(PromptError::UnsupportedLocale(locale));
        }

        let candidates = ENGLISH_BOOLEAN
            .captures_iter(utterance)
            .filter_map(|caps| {
                if caps.name("hedge").is_some() {
                    return None;
                }
                let (m, value) = match (caps.name("yes"), caps.name("no")) {
                    (Some(m), _) => (m, true),
                    (None, Some(m)) => (m, false),
                    (None, None) => return None,
                };
                Some(BooleanCandidate {
                    text: m.as_str().to_string(),
                    start: m.start(),
                    end: m.end(),
                    value,
                    score: 1.0,
                })
            })
            .collect();
        Ok(candidates)
    }
}
