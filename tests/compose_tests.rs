//! Unit tests for composition utilities.
//!
//! Tests for complement, thread, compose and the thread!/compose! macros.

#![cfg(feature = "compose")]

use muse::MuseError;
use muse::compose::{complement, compose, thread};
use muse::sequence::{Nested, filter};
use rstest::rstest;

// =============================================================================
// complement
// =============================================================================

#[rstest]
#[case(-1, true)]
#[case(0, true)]
#[case(1, false)]
fn complement_negates_predicate(#[case] input: i32, #[case] expected: bool) {
    let is_not_positive = complement(|value: i32| value > 0);
    assert_eq!(is_not_positive(input), expected);
}

#[rstest]
fn complement_passes_argument_unchanged() {
    let is_number = complement(|text: String| text.parse::<f64>().is_err());
    assert!(is_number("1.5".to_string()));
    assert!(!is_number("hey".to_string()));
}

#[rstest]
fn complement_with_tuple_arguments() {
    let is_unordered = complement(|(first, second): (i32, i32)| first <= second);
    assert!(is_unordered((3, 1)));
    assert!(!is_unordered((1, 3)));
}

#[rstest]
fn complement_inside_filter() {
    let is_even = |value: i32| value % 2 == 0;
    let is_odd = complement(is_even);
    assert_eq!(filter([1, 2, 3, 4, 5], |value| is_odd(*value)), vec![1, 3, 5]);
}

// =============================================================================
// thread
// =============================================================================

#[rstest]
fn thread_applies_in_order() {
    let steps: [fn(i32) -> i32; 2] = [|x| x + 1, |x| x * 3];
    assert_eq!(thread(1, steps), Ok(6));
}

#[rstest]
fn thread_single_function() {
    let steps: [fn(&str) -> &str; 1] = [str::trim];
    assert_eq!(thread("  padded  ", steps), Ok("padded"));
}

#[rstest]
fn thread_rejects_empty_function_list() {
    let steps: Vec<fn(i32) -> i32> = Vec::new();
    assert_eq!(thread(1, steps), Err(MuseError::EmptyPipeline));
}

#[rstest]
fn thread_macro_matches_runtime_thread() {
    let add_one = |x: i32| x + 1;
    let triple = |x: i32| x * 3;
    let steps: [&dyn Fn(i32) -> i32; 2] = [&add_one, &triple];
    assert_eq!(Ok(muse::thread!(1, add_one, triple)), thread(1, steps));
}

// =============================================================================
// compose
// =============================================================================

#[rstest]
fn compose_is_thread_for_any_argument() {
    let add_one: fn(i32) -> i32 = |x| x + 1;
    let triple: fn(i32) -> i32 = |x| x * 3;
    let composed = compose(vec![add_one, triple]).unwrap();
    for value in -5..5 {
        assert_eq!(Ok(composed(value)), thread(value, [add_one, triple]));
    }
}

#[rstest]
fn compose_flattens_nested_function_lists() {
    let add_one: fn(i32) -> i32 = |x| x + 1;
    let double: fn(i32) -> i32 = |x| x * 2;
    let nested = Nested::sequence([
        Nested::from(vec![add_one]),
        Nested::sequence([Nested::from(vec![double, double])]),
        Nested::Leaf(add_one),
    ]);
    let composed = compose(nested).unwrap();
    // ((1 + 1) * 2 * 2) + 1
    assert_eq!(composed(1), 9);
}

#[rstest]
fn compose_with_boxed_closures() {
    let offset = 100;
    let functions: Vec<Box<dyn Fn(i64) -> i64>> =
        vec![Box::new(move |x| x - offset), Box::new(i64::abs)];
    let distance_from_offset = compose(functions).unwrap();
    assert_eq!(distance_from_offset(40), 60);
    assert_eq!(distance_from_offset(160), 60);
}

#[rstest]
fn compose_rejects_empty_list() {
    let functions: Vec<fn(i32) -> i32> = Vec::new();
    assert_eq!(compose(functions).err(), Some(MuseError::EmptyPipeline));
}

#[rstest]
fn compose_macro_is_left_to_right() {
    let add_one = |x: i32| x + 1;
    let triple = |x: i32| x * 3;
    let composed = muse::compose!(add_one, triple);
    assert_eq!(composed(1), 6);
}
