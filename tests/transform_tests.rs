#![cfg(feature = "ops")]
//! Unit tests for the transformation operations.
//!
//! Tests cover:
//! - `map`/`pluck` over both shapes
//! - `filter`/`reject` complementarity
//! - `uniq`/`uniq_by` first-occurrence semantics and the sorted fast path
//! - Input immutability for every transformation

use lowbar::collection::Mapping;
use lowbar::ops::{filter, map, pluck, reject, uniq, uniq_by};
use rstest::rstest;

// =============================================================================
// map
// =============================================================================

#[rstest]
fn map_transforms_in_traversal_order() {
    let numbers = vec![1, 2, 3];
    assert_eq!(map(&numbers, |n| n * 10), vec![10, 20, 30]);
}

#[rstest]
fn map_over_a_mapping_yields_values_in_key_order() {
    let mut mapping = Mapping::new();
    mapping.insert("b".to_string(), 2);
    mapping.insert("a".to_string(), 1);

    assert_eq!(map(&mapping, |n| n * 10), vec![10, 20]);
}

#[rstest]
fn map_can_change_the_element_type() {
    let numbers = vec![1, 22, 333];
    let rendered = map(&numbers, |n| n.to_string());
    assert_eq!(rendered, vec!["1", "22", "333"]);
}

#[rstest]
fn map_on_empty_collection_is_empty() {
    let empty: Vec<i32> = Vec::new();
    assert!(map(&empty, |n| n * 2).is_empty());
}

// =============================================================================
// pluck
// =============================================================================

#[rstest]
fn pluck_projects_a_field_from_each_record() {
    let people = vec![
        Mapping::from([("age".to_string(), 34), ("shoe".to_string(), 42)]),
        Mapping::from([("age".to_string(), 28)]),
        Mapping::from([("shoe".to_string(), 40)]),
    ];

    assert_eq!(pluck(&people, "age"), vec![Some(34), Some(28), None]);
}

// =============================================================================
// filter / reject
// =============================================================================

#[rstest]
fn filter_keeps_passing_elements_in_order() {
    let numbers = vec![1, 2, 3, 4, 5, 6];
    assert_eq!(filter(&numbers, |n| n % 2 == 0), vec![2, 4, 6]);
}

#[rstest]
fn reject_is_the_complement_of_filter() {
    let numbers = vec![1, 2, 3, 4, 5, 6];
    let is_even = |n: &i32| n % 2 == 0;

    let kept = filter(&numbers, is_even);
    let dropped = reject(&numbers, is_even);

    assert_eq!(dropped, vec![1, 3, 5]);
    assert_eq!(kept.len() + dropped.len(), numbers.len());
}

#[rstest]
fn filter_and_reject_never_mutate_their_input() {
    let numbers = vec![3, 1, 2];
    let snapshot = numbers.clone();

    let _ = filter(&numbers, |n| *n > 1);
    let _ = reject(&numbers, |n| *n > 1);
    let _ = map(&numbers, |n| n + 1);

    assert_eq!(numbers, snapshot);
}

// =============================================================================
// uniq / uniq_by
// =============================================================================

#[rstest]
fn uniq_keeps_first_occurrences() {
    assert_eq!(uniq(&[1, 2, 1, 3, 1], false), vec![1, 2, 3]);
}

#[rstest]
fn uniq_with_sorted_hint_deduplicates_adjacent_runs() {
    assert_eq!(uniq(&[1, 1, 1, 2, 2, 3], true), vec![1, 2, 3]);
}

#[rstest]
fn uniq_by_computes_uniqueness_on_the_projection() {
    // Uniqueness on absolute value; the original values are kept, first
    // occurrence winning.
    let values: Vec<i32> = vec![1, -1, 2, -2];
    assert_eq!(uniq_by(&values, false, |n| n.abs()), vec![1, 2]);
}

#[rstest]
fn uniq_by_with_sorted_hint_matches_unsorted_result_on_sorted_input() {
    let sorted = vec![1, 1, 2, 3, 3, 3, 4];
    assert_eq!(
        uniq_by(&sorted, true, |n| *n),
        uniq_by(&sorted, false, |n| *n)
    );
}

#[rstest]
fn uniq_on_empty_sequence_is_empty() {
    let empty: Vec<i32> = Vec::new();
    assert!(uniq(&empty, false).is_empty());
}
