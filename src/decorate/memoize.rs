//! A wrapper that caches results per argument value.

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "fxhash")]
type CacheMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(not(feature = "fxhash"))]
type CacheMap<K, V> = std::collections::HashMap<K, V>;

/// A function wrapper that remembers results by argument.
///
/// On each call the wrapper looks the argument up in its private cache: a
/// hit returns the stored result without invoking the wrapped function; a
/// miss invokes it, stores the result under that argument, and returns it.
/// The cache never evicts.
///
/// The cache key is the argument value itself, so it must be `Eq + Hash`.
/// Multi-argument functions take a tuple, which keys the cache with an
/// order-preserving, type-distinguishing encoding for free — `(1, "2")`
/// and `(12,)` can never collide the way concatenated strings can.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; both the cache and the wrapped function
/// live in `RefCell`s touched only from the owning thread.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use lowbar::decorate::Memoize;
///
/// let invocations = Cell::new(0);
/// let square = Memoize::new(|n: i64| {
///     invocations.set(invocations.get() + 1);
///     n * n
/// });
///
/// assert_eq!(square.call(4), 16);
/// assert_eq!(square.call(4), 16);
/// assert_eq!(invocations.get(), 1); // second call was a cache hit
///
/// assert_eq!(square.call(5), 25);
/// assert_eq!(invocations.get(), 2); // distinct argument, fresh invocation
/// ```
pub struct Memoize<A, R, F> {
    function: RefCell<F>,
    cache: RefCell<CacheMap<A, R>>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Creates a new wrapper around `function` with an empty cache.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function: RefCell::new(function),
            cache: RefCell::new(CacheMap::default()),
        }
    }

    /// Calls the wrapper.
    ///
    /// Returns the cached result when `argument` has been seen before;
    /// otherwise invokes the wrapped function, stores its result, and
    /// returns it.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped function reinvokes this wrapper while it is
    /// already running (the function slot is a `RefCell`).
    pub fn call(&self, argument: A) -> R {
        if let Some(cached) = self.cache.borrow().get(&argument) {
            return cached.clone();
        }

        let result = {
            let mut function = self.function.borrow_mut();
            (*function)(argument.clone())
        };
        self.cache.borrow_mut().insert(argument, result.clone());
        result
    }

    /// Returns whether a result is already cached for `argument`.
    ///
    /// Never invokes the wrapped function.
    #[inline]
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.borrow().contains_key(argument)
    }

    /// Returns the number of distinct arguments cached so far.
    #[inline]
    pub fn cached_count(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<A, R, F> fmt::Debug for Memoize<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}
