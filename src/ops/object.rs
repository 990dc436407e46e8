//! Mapping merge helpers.

use crate::collection::Mapping;

/// Copies every entry from each source onto `target`, later sources
/// overwriting earlier ones, and returns the merged mapping.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::Mapping;
/// use lowbar::ops::extend;
///
/// let target = Mapping::from([("a".to_string(), 1)]);
/// let source = Mapping::from([("a".to_string(), 10), ("b".to_string(), 2)]);
///
/// let merged = extend(target, [source]);
/// assert_eq!(merged.get("a"), Some(&10));
/// assert_eq!(merged.get("b"), Some(&2));
/// ```
pub fn extend<T, I>(target: Mapping<T>, sources: I) -> Mapping<T>
where
    I: IntoIterator<Item = Mapping<T>>,
{
    let mut merged = target;
    for source in sources {
        for (key, value) in source {
            merged.insert(key, value);
        }
    }
    merged
}

/// Copies entries from the sources onto `target` only where the key is
/// absent, and returns the filled-in mapping.
///
/// Earlier sources win over later ones; existing entries are never
/// overwritten.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::Mapping;
/// use lowbar::ops::defaults;
///
/// let target = Mapping::from([("a".to_string(), 1)]);
/// let fallback = Mapping::from([("a".to_string(), 10), ("b".to_string(), 2)]);
///
/// let filled = defaults(target, [fallback]);
/// assert_eq!(filled.get("a"), Some(&1));
/// assert_eq!(filled.get("b"), Some(&2));
/// ```
pub fn defaults<T, I>(target: Mapping<T>, sources: I) -> Mapping<T>
where
    I: IntoIterator<Item = Mapping<T>>,
{
    let mut merged = target;
    for source in sources {
        for (key, value) in source {
            merged.entry(key).or_insert(value);
        }
    }
    merged
}
