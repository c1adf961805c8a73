//! Unit tests for the sequence utilities.
//!
//! Tests for map, filter, reduce, for_each, range, times and flatten.

#![cfg(feature = "sequence")]

use muse::MuseError;
use muse::nested;
use muse::sequence::{
    Nested, Range, filter, flatten, for_each, map, range, range_by, range_from, range_from_by,
    reduce, reduce_zero, times, try_map, try_reduce,
};
use rstest::rstest;

// =============================================================================
// Higher-order wrappers
// =============================================================================

#[rstest]
fn map_applies_action_to_every_element() {
    assert_eq!(map([1, 2, 3, 4], |value| value + 1), vec![2, 3, 4, 5]);
}

#[rstest]
fn map_changes_element_type() {
    assert_eq!(
        map(vec![1, 22, 333], |value: i32| value.to_string().len()),
        vec![1, 2, 3]
    );
}

#[rstest]
fn filter_preserves_relative_order() {
    assert_eq!(
        filter([5, 1, 4, 2, 3], |value| *value >= 3),
        vec![5, 4, 3]
    );
}

#[rstest]
fn filter_can_remove_everything() {
    assert!(filter(["a", "b"], |_| false).is_empty());
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![1], 1)]
#[case(vec![1, 2, 3, 4], 10)]
fn reduce_zero_sums(#[case] values: Vec<i64>, #[case] expected: i64) {
    assert_eq!(reduce_zero(values, |total: i64, value| total + value), expected);
}

#[rstest]
fn reduce_of_empty_returns_initial() {
    let result = reduce(Vec::<String>::new(), |total, part| total + &part, "seed".to_string());
    assert_eq!(result, "seed");
}

#[rstest]
fn reduce_folds_left_to_right() {
    let result = reduce([1, 2, 3], |total: Vec<i32>, value| {
        let mut total = total;
        total.insert(0, value);
        total
    }, Vec::new());
    assert_eq!(result, vec![3, 2, 1]);
}

#[rstest]
fn for_each_visits_every_element_in_order() {
    let mut visited = Vec::new();
    for_each(["x", "y", "z"], |value| visited.push(value));
    assert_eq!(visited, vec!["x", "y", "z"]);
}

#[rstest]
fn try_map_propagates_callback_error_unchanged() {
    let result: Result<Vec<u8>, std::num::ParseIntError> = try_map(["1", "300"], str::parse::<u8>);
    let error = result.unwrap_err();
    assert_eq!(error, "300".parse::<u8>().unwrap_err());
}

#[rstest]
fn try_reduce_short_circuits() {
    let mut seen = 0;
    let result = try_reduce(
        [1, -1, 2],
        |total: i32, value: i32| {
            seen += 1;
            if value < 0 { Err(value) } else { Ok(total + value) }
        },
        0,
    );
    assert_eq!(result, Err(-1));
    assert_eq!(seen, 2);
}

#[rstest]
#[should_panic(expected = "callback failed")]
fn map_does_not_catch_callback_panics() {
    let _ = map([1], |_: i32| -> i32 { panic!("callback failed") });
}

// =============================================================================
// range
// =============================================================================

#[rstest]
fn range_take_first_five() {
    assert_eq!(range(0, 5).take(5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
}

#[rstest]
#[case(0, 10, 3, vec![0, 3, 6, 9])]
#[case(1, 2, 5, vec![1])]
#[case(-4, 0, 2, vec![-4, -2])]
#[case(3, 3, 1, vec![])]
fn range_by_steps(
    #[case] min: i32,
    #[case] max: i32,
    #[case] step: i32,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(range_by(min, max, step).unwrap().collect::<Vec<_>>(), expected);
}

#[rstest]
#[case(0)]
#[case(-2)]
fn range_by_rejects_non_positive_step(#[case] step: i32) {
    assert_eq!(
        range_by(0, 10, step),
        Err(MuseError::InvalidStep {
            step: step.to_string()
        })
    );
}

#[rstest]
fn unbounded_range_is_lazy() {
    let first_thousand: Vec<u64> = range_from(0).take(1_000).collect();
    assert_eq!(first_thousand.len(), 1_000);
    assert_eq!(first_thousand[999], 999);
}

#[rstest]
fn unbounded_range_with_step() {
    let multiples: Vec<i64> = range_from_by(5, 5).unwrap().take(4).collect();
    assert_eq!(multiples, vec![5, 10, 15, 20]);
}

#[rstest]
fn default_range_counts_from_zero() {
    let values: Vec<u8> = Range::default().skip(10).take(2).collect();
    assert_eq!(values, vec![10, 11]);
}

#[rstest]
fn each_range_call_is_independent() {
    let mut first = range(0, 3);
    let second = range(0, 3);
    assert_eq!(first.next(), Some(0));
    assert_eq!(second.collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(first.collect::<Vec<_>>(), vec![1, 2]);
}

#[rstest]
fn cloned_range_snapshots_position() {
    let mut original = range(0, 4);
    original.next();
    let snapshot = original.clone();
    assert_eq!(original.collect::<Vec<_>>(), snapshot.collect::<Vec<_>>());
}

#[rstest]
fn float_range() {
    let values: Vec<f32> = range_by(0.0, 2.0, 0.5).unwrap().collect();
    assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5]);
}

// =============================================================================
// times
// =============================================================================

#[rstest]
fn times_collects_results_for_each_index() {
    assert_eq!(times(4, |index| index * 10).unwrap(), vec![0, 10, 20, 30]);
}

#[rstest]
fn times_zero_is_empty() {
    assert!(times(0_u32, |index| index).unwrap().is_empty());
}

#[rstest]
fn times_runs_action_for_side_effects() {
    let mut calls = Vec::new();
    times(3, |index| calls.push(index)).unwrap();
    assert_eq!(calls, vec![0, 1, 2]);
}

#[rstest]
#[case(-1.0, "-1")]
#[case(2.5, "2.5")]
#[case(f64::NAN, "NaN")]
#[case(f64::INFINITY, "inf")]
fn times_rejects_invalid_float_counts(#[case] count: f64, #[case] rendered: &str) {
    assert_eq!(
        times(count, |index| index),
        Err(MuseError::InvalidCount {
            count: rendered.to_string()
        })
    );
}

#[rstest]
fn times_rejects_negative_integer() {
    let mut called = false;
    let result = times(-3_i64, |_| called = true);
    assert!(matches!(result, Err(MuseError::InvalidCount { .. })));
    assert!(!called);
}

#[rstest]
fn times_accepts_integral_float() {
    assert_eq!(times(2.0_f64, |index| index).unwrap(), vec![0, 1]);
}

// =============================================================================
// flatten
// =============================================================================

#[rstest]
fn flatten_nested_sequence() {
    assert_eq!(flatten(nested![1, [2, [3, [4]]]]), vec![1, 2, 3, 4]);
}

#[rstest]
fn flatten_single_value() {
    assert_eq!(flatten(Nested::Leaf(5)), vec![5]);
}

#[rstest]
fn flatten_is_depth_first_left_to_right() {
    let value = nested![[1, [2]], 3, [[4, 5], 6], [], 7];
    assert_eq!(flatten(value), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[rstest]
fn flatten_method_matches_function() {
    let value = nested!["a", ["b", ["c"]]];
    assert_eq!(value.clone().flatten(), flatten(value));
}

#[rstest]
fn flatten_collected_nested() {
    let value: Nested<char> = "abc".chars().collect();
    assert_eq!(flatten(value), vec!['a', 'b', 'c']);
}
