#![cfg(feature = "ops")]
//! Unit tests for the mapping merge helpers.

use lowbar::collection::Mapping;
use lowbar::ops::{defaults, extend};
use rstest::rstest;

fn mapping(entries: &[(&str, i32)]) -> Mapping<i32> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), *value))
        .collect()
}

// =============================================================================
// extend
// =============================================================================

#[rstest]
fn extend_copies_all_keys_from_each_source() {
    let merged = extend(mapping(&[("a", 1)]), [mapping(&[("b", 2), ("c", 3)])]);
    assert_eq!(merged, mapping(&[("a", 1), ("b", 2), ("c", 3)]));
}

#[rstest]
fn extend_lets_later_sources_overwrite_earlier() {
    let merged = extend(
        mapping(&[("a", 1)]),
        [mapping(&[("a", 2), ("b", 2)]), mapping(&[("b", 3)])],
    );
    assert_eq!(merged, mapping(&[("a", 2), ("b", 3)]));
}

#[rstest]
fn extend_with_no_sources_is_the_target() {
    let merged = extend(mapping(&[("a", 1)]), []);
    assert_eq!(merged, mapping(&[("a", 1)]));
}

// =============================================================================
// defaults
// =============================================================================

#[rstest]
fn defaults_fills_only_absent_keys() {
    let filled = defaults(
        mapping(&[("a", 1)]),
        [mapping(&[("a", 100), ("b", 2)])],
    );
    assert_eq!(filled, mapping(&[("a", 1), ("b", 2)]));
}

#[rstest]
fn defaults_earlier_sources_win() {
    let filled = defaults(
        Mapping::new(),
        [mapping(&[("a", 1)]), mapping(&[("a", 2), ("b", 2)])],
    );
    assert_eq!(filled, mapping(&[("a", 1), ("b", 2)]));
}
