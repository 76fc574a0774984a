//! Property-based tests for the prompt dialogs
//!
//! These check the confirm dialog's lifecycle invariants across arbitrary
//! options and recognizer output.

use super::*;
use crate::activity::{Activity, Attachment, InputHint, PromptContent};
use crate::config::PromptConfig;
use crate::context::TurnContext;
use crate::dialog::{begin, continue_active, DialogTurn};
use crate::error::PromptError;
use crate::recognizers::{BooleanCandidate, BooleanRecognizer};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

/// Recognizer that ignores the utterance and returns canned candidates
struct FixedRecognizer(Vec<BooleanCandidate>);

impl BooleanRecognizer for FixedRecognizer {
    fn recognize(&self, _: &str, _: &str) -> Result<Vec<BooleanCandidate>, PromptError> {
        Ok(self.0.clone())
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn confirm_with(candidates: Vec<BooleanCandidate>) -> ConfirmPrompt<FixedRecognizer> {
    ConfirmPrompt::with_recognizer(FixedRecognizer(candidates), &PromptConfig::default())
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_input_hint() -> impl Strategy<Value = InputHint> {
    prop_oneof![
        Just(InputHint::AcceptingInput),
        Just(InputHint::ExpectingInput),
        Just(InputHint::IgnoringInput),
    ]
}

fn arb_prompt_content() -> impl Strategy<Value = PromptContent> {
    prop_oneof![
        "[a-zA-Z ?]{0,30}".prop_map(PromptContent::Text),
        ("[a-zA-Z ?]{1,30}", proptest::option::of(arb_input_hint())).prop_map(|(text, hint)| {
            let mut activity = Activity::message(text);
            activity.input_hint = hint;
            PromptContent::Message(activity)
        }),
    ]
}

fn arb_options() -> impl Strategy<Value = PromptOptions> {
    (
        proptest::option::of(arb_prompt_content()),
        proptest::option::of(arb_prompt_content()),
    )
        .prop_map(|(prompt, retry_prompt)| PromptOptions {
            prompt,
            retry_prompt,
        })
}

fn arb_candidate() -> impl Strategy<Value = BooleanCandidate> {
    ("[a-z]{1,8}", any::<bool>()).prop_map(|(text, value)| BooleanCandidate {
        end: text.len(),
        text,
        start: 0,
        value,
        score: 1.0,
    })
}

fn arb_attachment() -> impl Strategy<Value = Attachment> {
    ("(image|text|application)/[a-z]{2,8}", proptest::option::of("[a-z]{1,10}"))
        .prop_map(|(content_type, name)| {
            let attachment = Attachment::new(content_type);
            match name {
                Some(name) => attachment.with_name(name),
                None => attachment,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Begin stores args verbatim and sends only the prompt, if any
    #[test]
    fn prop_begin_sends_prompt_and_stores_args(args in arb_options()) {
        let mut slot = None;
        let mut turn = TurnContext::empty();
        let outcome = block_on(begin(&ConfirmPrompt::new(), &mut slot, &mut turn, args.clone())).unwrap();

        prop_assert_eq!(outcome, DialogTurn::Waiting);
        let expected: Vec<Activity> = args
            .prompt
            .iter()
            .filter(|p| !p.is_empty())
            .map(PromptContent::to_activity)
            .collect();
        prop_assert_eq!(turn.responses(), expected.as_slice());
        prop_assert_eq!(slot, Some(args));
    }

    // Any recognized reply ends the dialog with the first candidate's value
    #[test]
    fn prop_first_candidate_ends_dialog(
        args in arb_options(),
        candidates in proptest::collection::vec(arb_candidate(), 1..4),
    ) {
        let expected = candidates[0].value;
        let mut slot = Some(args);
        let mut turn = TurnContext::new(Activity::message("anything"));
        let outcome = block_on(continue_active(&confirm_with(candidates), &mut slot, &mut turn)).unwrap();

        prop_assert_eq!(outcome, Some(DialogTurn::Complete(expected)));
        prop_assert!(turn.responses().is_empty());
        prop_assert!(slot.is_none());
    }

    // Unrecognized replies re-prompt with retry > prompt > nothing, skipping empty text
    #[test]
    fn prop_unrecognized_reply_priority(args in arb_options()) {
        let mut slot = Some(args.clone());
        let mut turn = TurnContext::new(Activity::message("anything"));
        let outcome = block_on(continue_active(&confirm_with(vec![]), &mut slot, &mut turn)).unwrap();

        prop_assert_eq!(outcome, Some(DialogTurn::Waiting));
        let expected: Vec<Activity> = args
            .retry_prompt
            .as_ref()
            .filter(|p| !p.is_empty())
            .or_else(|| args.prompt.as_ref().filter(|p| !p.is_empty()))
            .map(PromptContent::to_activity)
            .into_iter()
            .collect();
        prop_assert_eq!(turn.responses(), expected.as_slice());
        prop_assert_eq!(slot, Some(args));
    }

    // Dialog state survives a JSON round trip between turns
    #[test]
    fn prop_options_survive_persistence(args in arb_options()) {
        let json = serde_json::to_string(&args).unwrap();
        let restored: PromptOptions = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, args);
    }

    // Without a validator the inbound list comes back untouched
    #[test]
    fn prop_attachments_pass_through(
        attachments in proptest::option::of(proptest::collection::vec(arb_attachment(), 0..4)),
    ) {
        let mut request = Activity::message("upload");
        request.attachments = attachments.clone();
        let turn = TurnContext::new(request);

        let result = block_on(AttachmentPrompt::new().recognize(&turn)).unwrap();
        prop_assert_eq!(result, attachments);
    }
}
