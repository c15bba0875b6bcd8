#![cfg(feature = "fallible")]
//! Tests for fallible suppliers, functions and consumers.

use std::cell::{Cell, RefCell};
use std::num::ParseIntError;

use fn_contracts::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
enum StepError {
    Parse(String),
    Negative(i64),
    Rejected(&'static str),
}

fn parse(text: &str) -> Result<i64, StepError> {
    text.parse::<i64>()
        .map_err(|error: ParseIntError| StepError::Parse(error.to_string()))
}

fn non_negative(value: i64) -> Result<u64, StepError> {
    u64::try_from(value).map_err(|_| StepError::Negative(value))
}

// =============================================================================
// TryFunction
// =============================================================================

#[rstest]
#[case("42", Ok(42))]
#[case("-3", Err(StepError::Negative(-3)))]
fn and_then_chains_fallible_steps(#[case] input: &str, #[case] expected: Result<u64, StepError>) {
    let pipeline = parse.and_then(non_negative);
    assert_eq!(pipeline.try_apply(input), expected);
}

#[rstest]
fn and_then_skips_next_step_after_error() {
    let calls = Cell::new(0);
    let counted = |value: i64| {
        calls.set(calls.get() + 1);
        non_negative(value)
    };

    let pipeline = parse.and_then(counted);

    assert!(matches!(pipeline.try_apply("x1"), Err(StepError::Parse(_))));
    assert_eq!(calls.get(), 0);
    assert_eq!(pipeline.try_apply("7"), Ok(7));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn map_ok_only_touches_success() {
    let calls = Cell::new(0);
    let doubled = parse.map_ok(|value: i64| {
        calls.set(calls.get() + 1);
        value * 2
    });

    assert_eq!(doubled.try_apply("21"), Ok(42));
    assert!(doubled.try_apply("?").is_err());
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn map_err_only_touches_failure() {
    let described = non_negative.map_err(|error: StepError| format!("{error:?}"));

    assert_eq!(described.try_apply(5), Ok(5));
    assert_eq!(described.try_apply(-1), Err(String::from("Negative(-1)")));
}

#[rstest]
fn fallible_function_is_still_a_function() {
    let parsed = parse.map(|result: Result<i64, StepError>| result.is_ok());

    assert!(parsed.test("10"));
    assert!(!parsed.test("ten"));
}

// =============================================================================
// TrySupplier
// =============================================================================

#[rstest]
fn try_supplier_composition() {
    let remaining = Cell::new(2_i64);
    let take = || {
        let value = remaining.get();
        remaining.set(value - 1);
        if value > 0 {
            Ok(value)
        } else {
            Err(StepError::Rejected("exhausted"))
        }
    };

    let described = take
        .and_then(non_negative)
        .map_ok(|value: u64| format!("took {value}"))
        .map_err(|error: StepError| format!("{error:?}"));

    assert_eq!(described.try_produce(), Ok(String::from("took 2")));
    assert_eq!(described.try_produce(), Ok(String::from("took 1")));
    assert_eq!(described.try_produce(), Err(String::from("Rejected(\"exhausted\")")));
}

#[rstest]
fn try_supplier_from_partial_application() {
    let bound = parse.apply_partial("128");
    assert_eq!(bound.try_produce(), Ok(128));

    let failing = parse.apply_partial("1e3");
    assert!(matches!(failing.try_produce(), Err(StepError::Parse(_))));
}

// =============================================================================
// TryConsumer
// =============================================================================

#[rstest]
fn then_accept_stops_at_first_error() {
    let log = RefCell::new(Vec::new());
    let validate = |value: i64| {
        if value < 0 {
            Err(StepError::Negative(value))
        } else {
            log.borrow_mut().push(format!("valid {value}"));
            Ok(())
        }
    };
    let store = |value: i64| {
        log.borrow_mut().push(format!("stored {value}"));
        Ok::<(), StepError>(())
    };

    let save = validate.then_accept(store);

    assert_eq!(save.try_accept(3), Ok(()));
    assert_eq!(save.try_accept(-4), Err(StepError::Negative(-4)));
    assert_eq!(*log.borrow(), vec!["valid 3", "stored 3"]);
}

#[rstest]
fn try_consumer_error_from_second_step_is_returned() {
    let first = |_: &str| Ok::<(), StepError>(());
    let second = |text: &str| {
        if text.is_empty() {
            Err(StepError::Rejected("empty"))
        } else {
            Ok(())
        }
    };

    let both = first.then_accept(second);

    assert_eq!(both.try_accept(""), Err(StepError::Rejected("empty")));
    assert_eq!(both.try_accept("ok"), Ok(()));
}
