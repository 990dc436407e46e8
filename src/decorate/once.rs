//! A wrapper that calls its function at most one time.

use std::cell::{Ref, RefCell};
use std::fmt;

/// The internal state of a [`Once`] wrapper.
///
/// Tracks whether the wrapped function has fired, is still waiting for its
/// first call, or panicked mid-call and poisoned the wrapper.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// The wrapped function has not been called yet.
    Unfired(F),
    /// The wrapped function has been called; the result is stored.
    Fired(R),
    /// The wrapped function panicked. The wrapper is now unusable.
    Poisoned,
}

/// A function wrapper that can fire at most one time.
///
/// The first invocation of [`call`](Once::call) runs the wrapped function
/// with the caller's argument and stores the result. Every later
/// invocation returns a borrow of that stored result without running the
/// function again, regardless of the arguments passed.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; the wrapper's state lives in a `RefCell`
/// touched only from the owning thread.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use lowbar::decorate::Once;
///
/// let invocations = Cell::new(0);
/// let add_two = Once::new(|n: i32| {
///     invocations.set(invocations.get() + 1);
///     n + 2
/// });
///
/// assert_eq!(*add_two.call(1), 3);
/// // Different argument, same stored result, no second invocation.
/// assert_eq!(*add_two.call(100), 3);
/// assert_eq!(invocations.get(), 1);
/// ```
pub struct Once<F, R> {
    state: RefCell<OnceState<F, R>>,
}

impl<F, R> Once<F, R> {
    /// Creates a new wrapper around `function`.
    ///
    /// The function is not called until the first [`call`](Once::call).
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Unfired(function)),
        }
    }

    /// Returns whether the wrapped function has already fired.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::decorate::Once;
    ///
    /// let wrapper = Once::new(|n: i32| n);
    /// assert!(!wrapper.has_fired());
    ///
    /// let _ = wrapper.call(1);
    /// assert!(wrapper.has_fired());
    /// ```
    #[inline]
    pub fn has_fired(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Fired(_))
    }

    /// Returns the stored result if the wrapper has fired.
    ///
    /// Unlike [`call`](Once::call), this never runs the wrapped function.
    pub fn result(&self) -> Option<Ref<'_, R>> {
        let state = self.state.borrow();
        if matches!(&*state, OnceState::Fired(_)) {
            Some(Ref::map(state, |state| match state {
                OnceState::Fired(result) => result,
                _ => unreachable!(),
            }))
        } else {
            None
        }
    }

    /// Calls the wrapper.
    ///
    /// On the first invocation the wrapped function runs with `argument`
    /// and the result is stored. Every invocation afterwards returns a
    /// borrow of the stored result; the argument is ignored.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics, the wrapper becomes poisoned and
    ///   all future calls panic.
    /// - If the wrapped function reinvokes this wrapper while it is
    ///   already firing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::decorate::Once;
    ///
    /// let greet = Once::new(|name: &str| format!("hello, {name}"));
    /// assert_eq!(*greet.call("world"), "hello, world");
    /// assert_eq!(*greet.call("nobody"), "hello, world");
    /// ```
    pub fn call<A>(&self, argument: A) -> Ref<'_, R>
    where
        F: FnOnce(A) -> R,
    {
        // Check with a short borrow so the borrow is not held while the
        // wrapped function runs.
        let needs_fire = {
            let state = self.state.borrow();
            match &*state {
                OnceState::Fired(_) => false,
                OnceState::Poisoned => panic!("Once instance has been poisoned"),
                OnceState::Unfired(_) => true,
            }
        };

        if needs_fire {
            self.fire(argument);
        }

        Ref::map(self.state.borrow(), |state| match state {
            OnceState::Fired(result) => result,
            _ => panic!("Once should have fired at this point"),
        })
    }

    /// Calls the wrapper, reporting poisoning as an error instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns [`OncePoisonedError`] if a previous invocation panicked.
    pub fn try_call<A>(&self, argument: A) -> Result<Ref<'_, R>, OncePoisonedError>
    where
        F: FnOnce(A) -> R,
    {
        if matches!(&*self.state.borrow(), OnceState::Poisoned) {
            return Err(OncePoisonedError);
        }
        Ok(self.call(argument))
    }

    /// Performs the one-time invocation.
    ///
    /// Takes the wrapped function out, transitions to the poisoned state,
    /// runs the function, and transitions to fired on success. If the
    /// function panics the state stays poisoned.
    fn fire<A>(&self, argument: A)
    where
        F: FnOnce(A) -> R,
    {
        let mut state = self.state.borrow_mut();

        match &*state {
            OnceState::Fired(_) => return,
            OnceState::Poisoned => panic!("Once instance has been poisoned"),
            OnceState::Unfired(_) => {}
        }

        let OnceState::Unfired(function) = std::mem::replace(&mut *state, OnceState::Poisoned)
        else {
            unreachable!()
        };

        let result = function(argument);
        *state = OnceState::Fired(result);
    }
}

impl<F, R> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match &*self.state.borrow() {
            OnceState::Unfired(_) => "unfired",
            OnceState::Fired(_) => "fired",
            OnceState::Poisoned => "poisoned",
        };
        formatter.debug_tuple("Once").field(&label).finish()
    }
}

/// The wrapped function of a [`Once`] panicked on a previous invocation.
///
/// # Examples
///
/// ```rust
/// use lowbar::decorate::OncePoisonedError;
///
/// assert_eq!(
///     format!("{}", OncePoisonedError),
///     "Once instance has been poisoned by a panic in its wrapped function"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OncePoisonedError;

impl fmt::Display for OncePoisonedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Once instance has been poisoned by a panic in its wrapped function"
        )
    }
}

impl std::error::Error for OncePoisonedError {}
