//! Property coverage for the outcome combinator laws.

use outcome_shared::{ErrorInfo, Outcome, OutcomeError};
use proptest::prelude::*;
use std::cell::Cell;

fn outcome_strategy() -> impl Strategy<Value = Outcome<i64>> {
    prop_oneof![
        any::<i64>().prop_map(Outcome::success),
        "[a-zA-Z ]{1,24}".prop_map(|message: String| Outcome::failure(message)),
    ]
}

fn halve(value: i64) -> Outcome<i64> {
    if value % 2 == 0 {
        Outcome::success(value / 2)
    } else {
        Outcome::failure(format!("{value} is odd"))
    }
}

fn describe(value: i64) -> Outcome<String> {
    if value < 0 {
        Outcome::failure("negative")
    } else {
        Outcome::success(value.to_string())
    }
}

proptest! {
    #[test]
    fn success_holds_its_value(value in any::<i64>()) {
        let outcome = Outcome::success(value);
        prop_assert!(outcome.is_success());
        prop_assert!(!outcome.is_failure());
        prop_assert_eq!(outcome.value(), Ok(&value));
        prop_assert_eq!(outcome.error().err(), Some(OutcomeError::success_has_no_error()));
    }

    #[test]
    fn failure_holds_its_message(message in ".{0,32}") {
        let outcome: Outcome<i64> = Outcome::failure(message.clone());
        prop_assert!(outcome.is_failure());
        prop_assert_eq!(outcome.error().map(ErrorInfo::message), Ok(message.as_str()));
        prop_assert_eq!(outcome.value().err(), Some(OutcomeError::failure_has_no_value()));
    }

    #[test]
    fn map_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().map(|value| value), outcome);
    }

    #[test]
    fn map_never_runs_on_failure(message in "[a-z]{1,16}") {
        let calls = Cell::new(0_u32);
        let source: Outcome<i64> = Outcome::failure(message);
        let expected = source.clone().into_error();

        let mapped = source.map(|value| {
            calls.set(calls.get() + 1);
            value.wrapping_add(1)
        });

        prop_assert_eq!(calls.get(), 0);
        prop_assert_eq!(mapped.into_error(), expected);
    }

    #[test]
    fn flat_map_is_associative(outcome in outcome_strategy()) {
        let stepwise = outcome.clone().flat_map(halve).flat_map(describe);
        let nested = outcome.flat_map(|value| halve(value).flat_map(describe));
        prop_assert_eq!(stepwise, nested);
    }

    #[test]
    fn flat_map_left_identity(value in any::<i64>()) {
        prop_assert_eq!(Outcome::success(value).flat_map(halve), halve(value));
    }

    #[test]
    fn flat_map_right_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().flat_map(Outcome::success), outcome);
    }

    #[test]
    fn result_round_trip_is_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(Outcome::from(outcome.clone().into_result()), outcome);
    }

    #[test]
    fn or_else_is_lazy_on_success(value in any::<i64>()) {
        let calls = Cell::new(0_u32);
        let kept = Outcome::success(value).or_else(|| {
            calls.set(calls.get() + 1);
            Outcome::success(0)
        });

        prop_assert_eq!(calls.get(), 0);
        prop_assert_eq!(kept, Outcome::success(value));
    }

    #[test]
    fn or_else_replaces_failure(message in "[a-z]{1,16}", fallback in any::<i64>()) {
        let recovered = Outcome::<i64>::failure(message).or_else(|| Outcome::success(fallback));
        prop_assert_eq!(recovered, Outcome::success(fallback));
    }
}
