//! Property tests over the outcome algebra.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use outcome_core::{Message, MessageType, Outcome, Status, factory};
use proptest::prelude::*;

fn any_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Completed),
        Just(Status::Failed),
        Just(Status::Error),
        Just(Status::Cancelled),
    ]
}

fn any_message() -> impl Strategy<Value = Message> {
    let kind = prop_oneof![
        Just(MessageType::Information),
        Just(MessageType::Warning),
        Just(MessageType::Error),
    ];
    (kind, ".{0,40}").prop_map(|(kind, content)| Message::new(kind, content))
}

fn any_outcome() -> impl Strategy<Value = Outcome<i64>> {
    (
        any_status(),
        proptest::option::of("[A-Za-z]{1,12}"),
        proptest::collection::vec(any_message(), 0..4),
        proptest::option::of(any::<i64>()),
    )
        .prop_map(|(status, code, messages, value)| {
            // Values enter only through the factories that allow them:
            // plain success, or a cancelled outcome's best-effort snapshot.
            let mut outcome = match (status, value) {
                (Status::Completed, Some(v)) => factory::success(v),
                (Status::Cancelled, Some(v)) => factory::cancelled_with(v, "interrupted"),
                (status, _) => Outcome::new(status),
            };
            outcome = outcome.with_messages(messages);
            if let Some(code) = code {
                outcome = outcome.with_code(code);
            }
            outcome
        })
}

proptest! {
    #[test]
    fn test_unsuccessful_is_always_negated_success(status in any_status()) {
        let outcome: Outcome = Outcome::new(status);
        prop_assert_eq!(outcome.is_unsuccessful(), !outcome.is_success());
    }

    #[test]
    fn test_exactly_one_predicate_holds(status in any_status()) {
        let outcome: Outcome = Outcome::new(status);
        let flags = [
            outcome.is_success(),
            outcome.is_failure(),
            outcome.is_error(),
            outcome.is_cancelled(),
        ];
        prop_assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
    }

    #[test]
    fn test_code_roundtrip_always_clears(outcome in any_outcome(), code in "[A-Za-z]{1,12}") {
        prop_assert!(outcome.with_code(code).without_code().code().is_none());
    }

    #[test]
    fn test_with_message_appends_preserving_order(
        outcome in any_outcome(),
        message in any_message(),
    ) {
        let before = outcome.messages().to_vec();
        let extended = outcome.with_message(message.clone());
        prop_assert_eq!(extended.messages().len(), before.len() + 1);
        prop_assert_eq!(&extended.messages()[..before.len()], &before[..]);
        prop_assert_eq!(extended.messages().last().unwrap(), &message);
    }

    #[test]
    fn test_map_preserves_messages_verbatim_on_any_non_success(
        status in any_status(),
        messages in proptest::collection::vec(any_message(), 0..4),
    ) {
        prop_assume!(status != Status::Completed);
        let outcome = Outcome::<i64>::new(status).with_messages(messages.clone());
        let mapped = outcome.map(|v| v + 1);
        prop_assert_eq!(mapped.status(), Status::Failed);
        prop_assert_eq!(mapped.messages(), &messages[..]);
    }

    #[test]
    fn test_fold_agrees_with_predicates(outcome in any_outcome()) {
        let success = outcome.is_success();
        let has_value = outcome.value().is_some();
        let branch = outcome.fold(|_| 0u8, || 1, |_| 2);
        let expected = if !success { 0 } else if has_value { 2 } else { 1 };
        prop_assert_eq!(branch, expected);
    }

    #[test]
    fn test_recover_always_yields_clean_success(
        status in any_status(),
        messages in proptest::collection::vec(any_message(), 0..4),
        fallback in any::<i64>(),
    ) {
        prop_assume!(status != Status::Completed);
        let recovered = Outcome::<i64>::new(status)
            .with_messages(messages)
            .recover(|_| fallback);
        prop_assert!(recovered.is_success());
        prop_assert_eq!(recovered.value(), Some(&fallback));
        prop_assert!(recovered.messages().is_empty());
    }

    #[test]
    fn test_envelope_serde_roundtrip(outcome in any_outcome()) {
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome<i64> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, outcome);
    }

    #[test]
    fn test_from_std_result_matches_spec(value in any::<i64>(), text in ".{1,20}") {
        let ok: Outcome<i64> = Ok::<_, String>(value).into();
        prop_assert!(ok.is_success());
        prop_assert_eq!(ok.value(), Some(&value));

        let err: Outcome<i64> = Err::<i64, _>(text.clone()).into();
        prop_assert!(err.is_failure());
        prop_assert_eq!(err.messages().len(), 1);
        prop_assert_eq!(err.messages()[0].content.clone(), text);
    }
}

#[test]
fn test_factory_shapes_match_the_table() {
    assert!(factory::completed().is_success());
    assert!(factory::success(1).is_success());
    assert_eq!(factory::failure::<()>("e").status(), Status::Failed);
    assert_eq!(factory::error::<()>("e").status(), Status::Error);
    assert_eq!(factory::cancelled::<()>("c").status(), Status::Cancelled);
    assert!(factory::not_found::<()>().is_failure());
}
