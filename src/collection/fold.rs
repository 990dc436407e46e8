//! The fold primitives, built only on top of [`Collection::each`].
//!
//! Two entry points carry the seeded and seedless accumulation semantics.
//! A single optional-seed signature cannot exist in a statically typed
//! surface — seedless folding forces the accumulator type to equal the
//! element type — so the split mirrors the standard library's
//! `Iterator::fold` / `Iterator::reduce` pair:
//!
//! - [`Collection::fold`]: an explicit seed of any type, every element is
//!   passed to the combining function
//! - [`Collection::reduce`]: the first element in traversal order becomes
//!   the initial accumulator and is never passed to the combining function;
//!   an empty collection yields `None`
//!
//! Neither function inspects the collection shape; traversal is delegated
//! to `each` in full.

use super::Collection;

impl<'a, T> Collection<'a, T> {
    /// Combines elements left-to-right into a single accumulator.
    ///
    /// Folding starts from `init`; every element, in traversal order, is
    /// passed to `function` together with the accumulator so far. On an
    /// empty collection the seed is returned untouched.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - Combines the accumulator and an element into the next
    ///   accumulator
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::collection::Collection;
    ///
    /// let numbers = vec![1, 2, 3];
    /// let sum = Collection::from(&numbers).fold(0, |total, number| total + number);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &'a T) -> B,
    {
        let mut accumulator = Some(init);
        self.each(|value, _position, _collection| {
            if let Some(current) = accumulator.take() {
                accumulator = Some(function(current, value));
            }
        });
        accumulator.expect("fold accumulator is restored after every visit")
    }

    /// Combines elements left-to-right without an explicit seed.
    ///
    /// The first element in traversal order becomes the initial accumulator
    /// and is **not** passed to `function`; folding begins from the second
    /// element. Consequently:
    ///
    /// - a single-element collection returns that element with zero
    ///   invocations of `function`, and
    /// - an empty collection returns `None` — there is no element to seed
    ///   from, and `Option` carries that case instead of a sentinel value
    ///   or an error.
    ///
    /// # Arguments
    ///
    /// * `function` - Combines the accumulator and an element into the next
    ///   accumulator
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::collection::Collection;
    ///
    /// let numbers = vec![1, 2, 3];
    /// let sum = Collection::from(&numbers).reduce(|total, number| total + number);
    /// assert_eq!(sum, Some(6));
    ///
    /// let single = vec![5];
    /// // The combining function is never invoked.
    /// let result = Collection::from(&single).reduce(|_, _| unreachable!());
    /// assert_eq!(result, Some(5));
    ///
    /// let empty: Vec<i32> = Vec::new();
    /// assert_eq!(Collection::from(&empty).reduce(|total, number| total + number), None);
    /// ```
    pub fn reduce<F>(self, mut function: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, &'a T) -> T,
    {
        let mut accumulator: Option<T> = None;
        self.each(|value, _position, _collection| {
            accumulator = Some(match accumulator.take() {
                None => value.clone(),
                Some(current) => function(current, value),
            });
        });
        accumulator
    }
}
