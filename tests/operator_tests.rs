//! Tests for unary, binary and ternary operators.

use std::cell::Cell;
use std::cmp::Ordering;

use fn_contracts::operator::{self, Bounded, Depth, DepthExceededError, While};
use fn_contracts::prelude::*;
use rstest::rstest;

// =============================================================================
// UnaryOperator::recurse
// =============================================================================

#[rstest]
#[case(5, 0, 5)]
#[case(5, 1, 6)]
#[case(5, 3, 8)]
#[case(-10, 10, 0)]
fn recurse_applies_operator_depth_times(#[case] seed: i32, #[case] depth: usize, #[case] expected: i32) {
    let increment = |value: i32| value + 1;
    assert_eq!(increment.recurse(seed, depth), expected);
}

#[rstest]
fn recurse_with_zero_depth_never_invokes_operator() {
    let calls = Cell::new(0);
    let counted = |value: String| {
        calls.set(calls.get() + 1);
        value
    };

    assert_eq!(counted.recurse(String::from("seed"), 0), "seed");
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn recurse_handles_depths_beyond_stack_limits() {
    let increment = |value: u64| value + 1;
    assert_eq!(increment.recurse(0, 1_000_000), 1_000_000);
}

// =============================================================================
// UnaryOperator::recurse_while
// =============================================================================

#[rstest]
fn recurse_while_stops_when_condition_fails() {
    let double = |value: u32| value * 2;
    assert_eq!(double.recurse_while(3, |value: &u32| *value < 100), 192);
}

#[rstest]
fn recurse_while_checks_condition_before_first_application() {
    let calls = Cell::new(0);
    let increment = |value: i32| {
        calls.set(calls.get() + 1);
        value + 1
    };

    assert_eq!(increment.recurse_while(10, |value: &i32| *value < 10), 10);
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(0, 4, 4)]
#[case(0, 20, 10)]
#[case(12, 5, 12)]
fn recurse_while_bounded_stops_at_first_limit(
    #[case] seed: i32,
    #[case] max_depth: usize,
    #[case] expected: i32,
) {
    let increment = |value: i32| value + 1;
    assert_eq!(
        increment.recurse_while_bounded(seed, |value: &i32| *value < 10, max_depth),
        expected
    );
}

#[rstest]
fn try_recurse_while_bounded_reports_exhausted_depth() {
    let halve = |value: u32| value / 2;
    let above_one = |value: &u32| *value > 1;

    assert_eq!(halve.try_recurse_while_bounded(256, above_one, 8), Ok(1));
    assert_eq!(halve.try_recurse_while_bounded(256, above_one, 20), Ok(1));
    assert_eq!(
        halve.try_recurse_while_bounded(256, above_one, 3),
        Err(DepthExceededError { max_depth: 3, value: 32 })
    );
}

#[rstest]
fn depth_exceeded_error_displays_limit_and_value() {
    let error = DepthExceededError { max_depth: 2, value: "abc" };

    assert_eq!(
        error.to_string(),
        "recursion condition still held after 2 applications (last value: \"abc\")"
    );
    assert_eq!(error.into_value(), "abc");
}

// =============================================================================
// Recursion policies
// =============================================================================

#[rstest]
fn recurse_with_receives_application_count() {
    let seen = std::cell::RefCell::new(Vec::new());
    let policy = |value: &i32, applications: usize| {
        seen.borrow_mut().push((*value, applications));
        applications < 3
    };

    let result = (|value: i32| value * 10).recurse_with(1, policy);

    assert_eq!(result, 1000);
    assert_eq!(*seen.borrow(), vec![(1, 0), (10, 1), (100, 2), (1000, 3)]);
}

#[rstest]
fn named_policies_match_method_variants() {
    let increment = |value: i32| value + 1;
    let below_ten = |value: &i32| *value < 10;

    assert_eq!(increment.recurse_with(0, Depth(4)), increment.recurse(0, 4));
    assert_eq!(increment.recurse_with(0, While(below_ten)), increment.recurse_while(0, below_ten));
    assert_eq!(
        increment.recurse_with(0, Bounded::new(below_ten, 6)),
        increment.recurse_while_bounded(0, below_ten, 6)
    );
    assert_eq!(Bounded::new(below_ten, 6).max_depth(), 6);
}

#[rstest]
fn recursive_variants_are_reusable_operators() {
    let increment = |value: i32| value + 1;

    let plus_three = increment.recursive(3);
    let up_to_ten = increment.recursive_while(|value: &i32| *value < 10);
    let at_most_two_towards_ten = increment.recursive_while_bounded(|value: &i32| *value < 10, 2);
    let while_even = increment.recursive_with(|value: &i32, _: usize| value % 2 == 0);

    assert_eq!(plus_three.apply(0), 3);
    assert_eq!(plus_three.apply(plus_three.apply(0)), 6);
    assert_eq!(up_to_ten.apply(-5), 10);
    assert_eq!(up_to_ten.apply(42), 42);
    assert_eq!(at_most_two_towards_ten.apply(0), 2);
    assert_eq!(at_most_two_towards_ten.apply(9), 10);
    assert_eq!(while_even.apply(4), 5);
    assert_eq!(while_even.apply(7), 7);
}

#[rstest]
fn recursive_operator_composes_with_map() {
    let double = |value: u64| value * 2;
    let power_of_two = double.recursive(10).map(|value: u64| value.to_string());

    assert_eq!(power_of_two.apply(1), "1024");
}

// =============================================================================
// BinaryOperator and TernaryOperator
// =============================================================================

#[rstest]
#[case(3, 7, 3, 7)]
#[case(9, -1, -1, 9)]
#[case(4, 4, 4, 4)]
fn min_by_and_max_by(#[case] left: i32, #[case] right: i32, #[case] min: i32, #[case] max: i32) {
    let natural = |a: &i32, b: &i32| a.cmp(b);

    assert_eq!(operator::min_by(natural).apply(left, right), min);
    assert_eq!(operator::max_by(natural).apply(left, right), max);
}

#[rstest]
fn min_by_keeps_left_on_tie() {
    let by_length = |a: &&str, b: &&str| a.len().cmp(&b.len());

    assert_eq!(operator::min_by(by_length).apply("abc", "xyz"), "abc");
    assert_eq!(operator::max_by(by_length).apply("abc", "xyz"), "abc");
    assert_eq!(operator::min_by(|_: &&str, _: &&str| Ordering::Greater).apply("a", "b"), "b");
}

#[rstest]
fn binary_operator_folds_and_partially_applies() {
    let add = |left: i64, right: i64| left + right;

    let total = [1_i64, 2, 3, 4].into_iter().fold(0, |sum, value| add.apply(sum, value));
    assert_eq!(total, 10);

    let add_five = add.apply_partial_left(5);
    assert_eq!(add_five.recurse(0, 3), 15);
}

#[rstest]
fn ternary_operator_partial_application() {
    fn assert_binary<T, F: BinaryOperator<T>>(_: &F) {}
    fn assert_ternary<T, F: TernaryOperator<T>>(_: &F) {}

    let clamp = |low: i32, value: i32, high: i32| value.max(low).min(high);
    assert_ternary::<i32, _>(&clamp);

    let clamp_low = clamp.apply_partial_left(0);
    assert_binary::<i32, _>(&clamp_low);

    let to_percent = clamp.apply_partial_left_right(0, 100);
    assert_eq!(to_percent.apply(-4), 0);
    assert_eq!(to_percent.apply(42), 42);
    assert_eq!(to_percent.recurse(500, 2), 100);
}
