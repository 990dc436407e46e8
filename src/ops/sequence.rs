//! Sequence-oriented operations.
//!
//! Positional accessors, stable sorting, transposition, flattening of
//! nested sequences, set-like combination of sequences, per-element method
//! invocation, and random permutation. Where an operation combines
//! sequences it does so through the derived operations
//! ([`filter`], [`every`](crate::ops::every), [`contains`]) rather than
//! hand-rolled scans.

use crate::collection::{Collection, Sequence};

use super::project::{NamedMethod, Project};
use super::query::{contains, every, some};
use super::transform::{filter, map, reject, uniq};

/// Returns the first element of the sequence, or `None` when empty.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::first;
///
/// assert_eq!(first(&[7, 8, 9]), Some(&7));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements of the sequence.
///
/// A `count` past the end yields the whole sequence.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::first_n;
///
/// let numbers = [7, 8, 9];
/// assert_eq!(first_n(&numbers, 2), &[7, 8]);
/// assert_eq!(first_n(&numbers, 10), &[7, 8, 9]);
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element of the sequence, or `None` when empty.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::last;
///
/// assert_eq!(last(&[7, 8, 9]), Some(&9));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements of the sequence.
///
/// A `count` past the beginning yields the whole sequence.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::last_n;
///
/// let numbers = [7, 8, 9];
/// assert_eq!(last_n(&numbers, 2), &[8, 9]);
/// assert_eq!(last_n(&numbers, 10), &[7, 8, 9]);
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len() - count.min(sequence.len())..]
}

/// Returns the collection's elements sorted by a computed key.
///
/// The sort is stable: elements with equal keys keep their traversal
/// order.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::sort_by;
///
/// let words = vec!["pear", "fig", "banana"];
/// assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "pear", "banana"]);
/// ```
pub fn sort_by<'a, T, C, K, F>(collection: C, mut iterator: F) -> Sequence<T>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut results = map(collection, |value| value.clone());
    results.sort_by_key(|value| iterator(value));
    results
}

/// [`sort_by`] with a named field as the key, via [`Project`].
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::Mapping;
/// use lowbar::ops::sort_by_field;
///
/// let people = vec![
///     Mapping::from([("age".to_string(), 34)]),
///     Mapping::from([("age".to_string(), 28)]),
/// ];
///
/// let sorted = sort_by_field(&people, "age");
/// assert_eq!(sorted[0].get("age"), Some(&28));
/// ```
pub fn sort_by_field<'a, T, C>(collection: C, key: &str) -> Sequence<T>
where
    T: Project + Clone + 'a,
    T::Field: Ord,
    C: Into<Collection<'a, T>>,
{
    sort_by(collection, |value| value.project(key))
}

/// Transposes N sequences into rows of same-index elements.
///
/// Rows are as long as the longest input; shorter inputs are padded with
/// `None`, the absent-value marker.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::zip;
///
/// let rows = zip(&[vec!['a', 'b', 'c'], vec!['x', 'y']]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some('a'), Some('x')],
///         vec![Some('b'), Some('y')],
///         vec![Some('c'), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(sequences: &[Sequence<T>]) -> Sequence<Sequence<Option<T>>> {
    let longest = Collection::from(sequences).fold(0, |longest, sequence: &Sequence<T>| {
        longest.max(sequence.len())
    });

    let mut rows = Sequence::new();
    for index in 0..longest {
        rows.push(map(sequences, |sequence: &Sequence<T>| {
            sequence.get(index).cloned()
        }));
    }
    rows
}

/// A value or an arbitrarily nested sequence of values.
///
/// The input shape of [`flatten`] and [`flatten_shallow`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nested<T> {
    /// A leaf value.
    Value(T),
    /// A nested sequence of further nodes.
    Sequence(Sequence<Nested<T>>),
}

/// Flattens arbitrarily nested sequences into a single flat sequence of
/// leaf values, in traversal order.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::{Nested, flatten};
///
/// let nested = vec![
///     Nested::Value(1),
///     Nested::Sequence(vec![
///         Nested::Value(2),
///         Nested::Sequence(vec![Nested::Value(3)]),
///     ]),
/// ];
///
/// assert_eq!(flatten(&nested), vec![1, 2, 3]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Sequence<T> {
    let mut results = Sequence::new();
    Collection::from(nested).each(|node, _position, _collection| {
        flatten_into(node, &mut results);
    });
    results
}

fn flatten_into<T: Clone>(node: &Nested<T>, results: &mut Sequence<T>) {
    match node {
        Nested::Value(value) => results.push(value.clone()),
        Nested::Sequence(children) => {
            Collection::from(children).each(|child, _position, _collection| {
                flatten_into(child, results);
            });
        }
    }
}

/// Removes exactly one level of nesting.
///
/// Leaf values are kept as-is; the children of a top-level nested sequence
/// are spliced in, still wrapped as [`Nested`] nodes.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::{Nested, flatten_shallow};
///
/// let nested = vec![
///     Nested::Value(1),
///     Nested::Sequence(vec![
///         Nested::Value(2),
///         Nested::Sequence(vec![Nested::Value(3)]),
///     ]),
/// ];
///
/// assert_eq!(
///     flatten_shallow(&nested),
///     vec![
///         Nested::Value(1),
///         Nested::Value(2),
///         Nested::Sequence(vec![Nested::Value(3)]),
///     ]
/// );
/// ```
pub fn flatten_shallow<T: Clone>(nested: &[Nested<T>]) -> Sequence<Nested<T>> {
    let mut results = Sequence::new();
    Collection::from(nested).each(|node, _position, _collection| match node {
        Nested::Value(value) => results.push(Nested::Value(value.clone())),
        Nested::Sequence(children) => {
            Collection::from(children).each(|child, _child_position, _child_collection| {
                results.push(child.clone());
            });
        }
    });
    results
}

/// Returns the deduplicated elements of `first` that appear in every other
/// sequence, in first-sequence order.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::intersection;
///
/// let shared = intersection(&[1, 2, 3, 2], &[&[2, 3, 4], &[3, 2]]);
/// assert_eq!(shared, vec![2, 3]);
/// ```
pub fn intersection<T>(first: &[T], others: &[&[T]]) -> Sequence<T>
where
    T: PartialEq + Clone,
{
    let shared = filter(first, |value| {
        every(others, |other: &&[T]| contains(*other, value))
    });
    uniq(&shared, false)
}

/// Returns the elements of `first` absent from all of the other sequences.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::difference;
///
/// let leftover = difference(&[1, 2, 3, 4], &[&[2], &[4, 5]]);
/// assert_eq!(leftover, vec![1, 3]);
/// ```
pub fn difference<T>(first: &[T], others: &[&[T]]) -> Sequence<T>
where
    T: PartialEq + Clone,
{
    reject(first, |value| {
        some(others, |other: &&[T]| contains(*other, value))
    })
}

/// Calls `method` on every element with the given argument bundle,
/// returning the sequence of results.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::invoke;
///
/// let numbers = vec![2, 3, 4];
/// let powers = invoke(&numbers, |n: &i32, exponent: &u32| n.pow(*exponent), &2);
/// assert_eq!(powers, vec![4, 9, 16]);
/// ```
pub fn invoke<'a, T, C, A, R, F>(collection: C, mut method: F, arguments: &A) -> Sequence<R>
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T, &A) -> R,
{
    map(collection, |value| method(value, arguments))
}

/// Calls the method named `name` on every element via [`NamedMethod`],
/// returning the sequence of results.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::{NamedMethod, invoke_named};
///
/// struct Counter(i32);
///
/// impl NamedMethod for Counter {
///     type Arguments = i32;
///     type Output = i32;
///
///     fn call_named(&self, name: &str, step: &i32) -> i32 {
///         match name {
///             "up" => self.0 + step,
///             "down" => self.0 - step,
///             _ => panic!("Counter has no method named {name}"),
///         }
///     }
/// }
///
/// let counters = vec![Counter(10), Counter(20)];
/// assert_eq!(invoke_named(&counters, "up", &5), vec![15, 25]);
/// ```
pub fn invoke_named<'a, T, C>(
    collection: C,
    name: &str,
    arguments: &T::Arguments,
) -> Sequence<T::Output>
where
    T: NamedMethod + 'a,
    C: Into<Collection<'a, T>>,
{
    map(collection, |value| value.call_named(name, arguments))
}

/// Returns a uniformly random permutation of the sequence.
///
/// The input is copied first and never modified.
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::shuffle;
///
/// let numbers = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&numbers);
///
/// assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, numbers);
/// ```
#[cfg(feature = "shuffle")]
pub fn shuffle<T: Clone>(sequence: &[T]) -> Sequence<T> {
    use rand::seq::SliceRandom;

    let mut shuffled = sequence.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    shuffled
}
