//! Tests for predicates, bi-predicates and tri-predicates.

use std::cell::Cell;

use fn_contracts::predicate::{self, bi_predicate, tri_predicate};
use fn_contracts::prelude::*;
use rstest::rstest;

// =============================================================================
// Short-circuit evaluation
// =============================================================================

#[rstest]
#[case(false, 0)]
#[case(true, 1)]
fn and_skips_right_operand_when_left_is_false(#[case] left: bool, #[case] right_calls: usize) {
    let calls = Cell::new(0);
    let right = |_: i32| {
        calls.set(calls.get() + 1);
        true
    };

    let combined = (move |_: i32| left).and(right);
    assert_eq!(combined.test(0), left);
    assert_eq!(calls.get(), right_calls);
}

#[rstest]
#[case(true, 0)]
#[case(false, 1)]
fn or_skips_right_operand_when_left_is_true(#[case] left: bool, #[case] right_calls: usize) {
    let calls = Cell::new(0);
    let right = |_: i32| {
        calls.set(calls.get() + 1);
        false
    };

    let combined = (move |_: i32| left).or(right);
    assert_eq!(combined.test(0), left);
    assert_eq!(calls.get(), right_calls);
}

#[rstest]
fn combinators_nest() {
    let positive = |value: i32| value > 0;
    let even = |value: i32| value % 2 == 0;
    let small = |value: i32| value.abs() < 10;

    let positive_even_or_small = positive.and(even).or(small);

    assert!(positive_even_or_small.test(12));
    assert!(positive_even_or_small.test(-3));
    assert!(!positive_even_or_small.test(11));
    assert!(!positive_even_or_small.test(-12));
}

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(3, true)]
#[case(6, false)]
fn xor_is_exclusive(#[case] value: u32, #[case] expected: bool) {
    let even = |value: u32| value % 2 == 0;
    let multiple_of_three = |value: u32| value % 3 == 0;

    assert_eq!(even.xor(multiple_of_three).test(value), expected);
}

// =============================================================================
// Constructors
// =============================================================================

#[rstest]
fn constant_predicates_ignore_their_input() {
    let yes = predicate::always_true::<&str>();
    let no = predicate::always_false::<&str>();

    assert!(yes.test("anything"));
    assert!(!no.test("anything"));
    assert!(yes.or(no).test(""));
    assert!(!yes.and(no).test(""));
}

#[rstest]
#[case("apple", true)]
#[case("Apple", false)]
#[case("", false)]
fn is_equal_compares_with_target(#[case] input: &str, #[case] expected: bool) {
    let is_apple = predicate::is_equal(String::from("apple"));
    assert_eq!(is_apple.test(input), expected);
}

#[rstest]
fn is_equal_works_with_owned_and_borrowed_inputs() {
    let is_seven = predicate::is_equal(7_i64);
    let is_name = predicate::is_equal("ada");

    assert!(is_seven.test(7_i64));
    assert!(!predicate::not(is_seven).test(7_i64));
    assert!(is_name.test(String::from("ada")));
}

#[rstest]
fn not_inverts_any_predicate() {
    let empty = |text: &str| text.is_empty();
    let non_empty = predicate::not(empty);

    assert!(non_empty.test("x"));
    assert!(!non_empty.test(""));
    assert!(predicate::not(non_empty).test(""));
}

// =============================================================================
// BiPredicate
// =============================================================================

#[rstest]
fn bi_predicate_combinators() {
    let less = |left: i32, right: i32| left < right;
    let close = |left: i32, right: i32| (left - right).abs() <= 1;

    assert!(less.and(close).test(1, 2));
    assert!(!less.and(close).test(1, 5));
    assert!(less.or(close).test(2, 1));
    assert!(less.xor(close).test(1, 5));
    assert!(!less.xor(close).test(1, 2));
    assert!(less.negate().test(3, 3));
}

#[rstest]
fn bi_predicate_and_short_circuits() {
    let calls = Cell::new(0);
    let spy = |_: i32, _: i32| {
        calls.set(calls.get() + 1);
        true
    };

    assert!(!bi_predicate::always_false::<i32, i32>().and(spy).test(1, 2));
    assert!(bi_predicate::always_true::<i32, i32>().or(spy).test(1, 2));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn bi_predicate_is_equal_across_types() {
    let same = bi_predicate::is_equal::<String, &str>();

    assert!(same.test(String::from("rust"), "rust"));
    assert!(!same.test(String::from("rust"), "java"));
    assert!(same.negate().test(String::new(), "x"));
}

// =============================================================================
// TriPredicate
// =============================================================================

#[rstest]
#[case(1, 2, 3, true)]
#[case(1, 3, 2, false)]
#[case(2, 2, 2, false)]
fn tri_predicate_combinators(#[case] a: i32, #[case] b: i32, #[case] c: i32, #[case] expected: bool) {
    let ascending = |a: i32, b: i32, c: i32| a < b && b < c;
    let distinct = |a: i32, b: i32, c: i32| a != b && b != c && a != c;

    assert_eq!(ascending.and(distinct).test(a, b, c), expected);
    assert_eq!(ascending.negate().or(distinct.negate()).test(a, b, c), !expected);
}

#[rstest]
fn tri_predicate_constants() {
    let calls = Cell::new(0);
    let spy = |_: u8, _: u8, _: u8| {
        calls.set(calls.get() + 1);
        false
    };

    assert!(tri_predicate::always_true::<u8, u8, u8>().test(1, 2, 3));
    assert!(!tri_predicate::always_false::<u8, u8, u8>().and(spy).test(1, 2, 3));
    assert!(!tri_predicate::always_true::<u8, u8, u8>().xor(tri_predicate::always_true::<u8, u8, u8>()).test(0, 0, 0));
    assert_eq!(calls.get(), 0);
}
