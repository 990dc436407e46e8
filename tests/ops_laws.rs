#![cfg(feature = "ops")]
//! Property-based tests for the derived collection operations.
//!
//! Using proptest, we verify the algebraic relationships between the
//! derived operations across randomly generated sequences:
//!
//! - **Partition**: `filter` and `reject` split the input exactly
//! - **Quantifier duality**: `every(p)` == `!some(not p)`
//! - **Dedup idempotence**: `uniq` is a fixed point on its own output
//! - **Membership consistency**: `contains` agrees with `index_of`

use lowbar::ops::{contains, every, filter, index_of, map, reject, some, uniq};
use proptest::prelude::*;

proptest! {
    /// filter and reject partition the input: sizes add up and every
    /// element lands on the side its predicate assigns it.
    #[test]
    fn prop_filter_and_reject_partition(values in proptest::collection::vec(any::<i16>(), 0..64)) {
        let is_negative = |n: &i16| *n < 0;

        let kept = filter(&values, is_negative);
        let dropped = reject(&values, is_negative);

        prop_assert_eq!(kept.len() + dropped.len(), values.len());
        prop_assert!(every(&kept, is_negative));
        prop_assert!(!some(&dropped, is_negative));
    }

    /// map preserves length and order of transformation.
    #[test]
    fn prop_map_matches_iterator_map(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let via_ops = map(&values, |n| n.wrapping_mul(3));
        let via_iterator: Vec<i32> = values.iter().map(|n| n.wrapping_mul(3)).collect();
        prop_assert_eq!(via_ops, via_iterator);
    }

    /// every(p) is the negation of some(not p).
    #[test]
    fn prop_every_some_duality(values in proptest::collection::vec(any::<i8>(), 0..64)) {
        let is_even = |n: &i8| n % 2 == 0;
        prop_assert_eq!(every(&values, is_even), !some(&values, |n| !is_even(n)));
    }

    /// uniq is idempotent and its output is duplicate-free.
    #[test]
    fn prop_uniq_is_idempotent(values in proptest::collection::vec(0i32..8, 0..64)) {
        let deduped = uniq(&values, false);
        prop_assert_eq!(uniq(&deduped, false), deduped.clone());

        for (index, value) in deduped.iter().enumerate() {
            prop_assert_eq!(index_of(&deduped, value), Some(index));
        }
    }

    /// uniq keeps the first occurrence of every distinct value.
    #[test]
    fn prop_uniq_keeps_first_occurrences(values in proptest::collection::vec(0i32..8, 0..64)) {
        let deduped = uniq(&values, false);
        for value in &deduped {
            // The result element's first occurrence in the input is the
            // occurrence that was kept, so both indexes agree on identity.
            prop_assert!(index_of(&values, value).is_some());
        }
        // Every input element is represented.
        for value in &values {
            prop_assert!(contains(&deduped, value));
        }
    }

    /// contains agrees with index_of on membership.
    #[test]
    fn prop_contains_agrees_with_index_of(
        values in proptest::collection::vec(any::<i16>(), 0..64),
        target in any::<i16>(),
    ) {
        prop_assert_eq!(contains(&values, &target), index_of(&values, &target).is_some());
    }
}
