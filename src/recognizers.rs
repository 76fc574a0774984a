//! Recognizers that turn raw utterances into structured candidates

mod boolean;

pub use boolean::{BooleanCandidate, BooleanRecognizer, ChoiceBooleanRecognizer};
