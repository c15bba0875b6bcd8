//! End-to-end composition scenarios.
//!
//! These tests build complete pipelines out of every contract shape and
//! compare them with the equivalent hand-written code.

use std::cell::{Cell, RefCell};

use fn_contracts::prelude::*;
use fn_contracts::{chain, pipe, predicate};
use rstest::rstest;

fn magnitude(x: f64, y: f64) -> f64 {
    ((x * x) + (y * y)).sqrt()
}

fn format_two_places(value: f64) -> String {
    format!("{value:.2}")
}

// =============================================================================
// Supplier pipeline
// =============================================================================

#[rstest]
fn supplier_pipeline_matches_hand_written_loop() {
    let seed = 3.0;
    let next = Cell::new(0.0);
    let readings = || {
        next.set(next.get() + 4.0);
        next.get()
    };

    let container = RefCell::new(Vec::new());
    readings
        .map(magnitude.apply_partial_left(seed))
        .map(|distance: f64| 7.0 * distance)
        .map(|distance: f64| distance * 100.0)
        .map(|distance: f64| distance * 0.001)
        .map(format_two_places)
        .map(|text: String| format!("Wow, {text} is quite a number!"))
        .consume(|line: String| container.borrow_mut().push(line))
        .loop_for(3)
        .run();

    let mut expected = Vec::new();
    for step in 1..=3_i32 {
        let mut distance = magnitude(seed, 4.0 * f64::from(step));
        distance *= 7.0;
        distance *= 100.0;
        distance *= 0.001;
        expected.push(format!("Wow, {} is quite a number!", format_two_places(distance)));
    }

    assert_eq!(*container.borrow(), expected);
    assert_eq!(
        *container.borrow(),
        vec![
            "Wow, 3.50 is quite a number!",
            "Wow, 5.98 is quite a number!",
            "Wow, 8.66 is quite a number!",
        ]
    );
}

// =============================================================================
// Ternary pipeline
// =============================================================================

#[rstest]
fn ternary_partial_application_feeds_a_supplier_chain() {
    let magnitude_3d = |x: f64, y: f64, z: f64| ((x * x) + (y * y) + (z * z)).sqrt().trunc();

    let printed = RefCell::new(Vec::new());
    magnitude_3d
        .apply_partial_left(2.0)
        .apply_partial_right(6.0)
        .apply_partial(3.0)
        .map(|length: f64| 7.0 * length)
        .map(|length: f64| length.to_string())
        .consume(|text: String| printed.borrow_mut().push(text))
        .run();

    assert_eq!(*printed.borrow(), vec!["49"]);
}

// =============================================================================
// Predicates built from functions
// =============================================================================

#[rstest]
#[case("", false)]
#[case("   ", false)]
#[case("ok", true)]
#[case("  padded  ", true)]
fn trimmed_length_predicate(#[case] input: &str, #[case] expected: bool) {
    let has_content = (|text: &str| text.trim().len()).map(|length: usize| length > 0);
    let is_blank = predicate::not(has_content);

    assert_eq!(has_content.test(input), expected);
    assert_eq!(is_blank.test(input), !expected);
}

#[rstest]
fn chain_and_pipe_agree_with_method_composition() {
    let parse = |text: &str| text.parse::<i64>().unwrap_or(0);
    let square = |value: i64| value * value;
    let describe = |value: i64| format!("<{value}>");

    let by_method = parse.map(square).map(describe);
    let by_chain = chain!(parse, square, describe);

    assert_eq!(by_method.apply("12"), "<144>");
    assert_eq!(by_chain.apply("12"), "<144>");
    assert_eq!(pipe!("12", parse, square, describe), "<144>");
}

#[rstest]
fn consumer_partial_application_yields_an_action() {
    let log = RefCell::new(Vec::new());
    let write = |level: &'static str, message: &'static str| {
        log.borrow_mut().push(format!("[{level}] {message}"));
    };

    let warn = write.apply_partial_left("warn");
    let startup = warn.apply_partial("starting up");

    startup.run();
    warn.accept("disk almost full");
    startup.and_then(startup).run();

    assert_eq!(
        *log.borrow(),
        vec![
            "[warn] starting up",
            "[warn] disk almost full",
            "[warn] starting up",
            "[warn] starting up",
        ]
    );
}
