//! A wrapper that rate-limits its function to one execution per window.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::scheduler::Scheduler;

struct ThrottleState<A, F> {
    function: F,
    last_fired: Option<Duration>,
    pending_argument: Option<A>,
    trailing_scheduled: bool,
}

/// A function wrapper that executes at most once per `wait` window.
///
/// The first call in a quiet period executes immediately and opens a
/// window. Calls arriving before the window closes are coalesced: the
/// wrapper schedules exactly one trailing execution for the end of the
/// window, carrying the argument of the most recent call — intermediate
/// arguments are overwritten, not queued. The trailing execution opens the
/// next window, so executions occur in non-decreasing time order, at most
/// one per window. There is no cancellation surface.
///
/// Time is the [`Scheduler`]'s virtual clock; the trailing execution fires
/// when the owner advances the clock past the window's end.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use lowbar::decorate::{Scheduler, Throttle};
///
/// let scheduler = Scheduler::new();
/// let executed = Rc::new(RefCell::new(Vec::new()));
///
/// let log = Rc::clone(&executed);
/// let throttled = Throttle::new(&scheduler, move |n| log.borrow_mut().push(n), Duration::from_millis(100));
///
/// throttled.call(1); // immediate
/// throttled.call(2); // coalesced...
/// throttled.call(3); // ...and superseded
///
/// assert_eq!(*executed.borrow(), vec![1]);
///
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(*executed.borrow(), vec![1, 3]); // trailing call, latest argument
/// ```
pub struct Throttle<A, F> {
    scheduler: Scheduler,
    wait: Duration,
    state: Rc<RefCell<ThrottleState<A, F>>>,
}

impl<A, F> Throttle<A, F>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    /// Creates a new throttled wrapper around `function` with the given
    /// window length.
    pub fn new(scheduler: &Scheduler, function: F, wait: Duration) -> Self {
        Self {
            scheduler: scheduler.clone(),
            wait,
            state: Rc::new(RefCell::new(ThrottleState {
                function,
                last_fired: None,
                pending_argument: None,
                trailing_scheduled: false,
            })),
        }
    }

    /// Calls the wrapper.
    ///
    /// Executes the wrapped function immediately when no window is open;
    /// otherwise records `argument` as the pending trailing argument,
    /// scheduling the trailing execution if one is not already scheduled.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped function reinvokes this wrapper while it is
    /// already executing (the wrapper's state is a `RefCell`).
    pub fn call(&self, argument: A) {
        let now = self.scheduler.now();
        let mut state = self.state.borrow_mut();

        match state.last_fired {
            Some(last_fired) if now < last_fired + self.wait => {
                state.pending_argument = Some(argument);
                if !state.trailing_scheduled {
                    state.trailing_scheduled = true;
                    let remaining = last_fired + self.wait - now;
                    let shared = Rc::clone(&self.state);
                    let clock = self.scheduler.clone();
                    drop(state);
                    self.scheduler.schedule(remaining, move || {
                        let mut state = shared.borrow_mut();
                        state.trailing_scheduled = false;
                        if let Some(pending) = state.pending_argument.take() {
                            state.last_fired = Some(clock.now());
                            (state.function)(pending);
                        }
                    });
                }
            }
            _ => {
                state.last_fired = Some(now);
                (state.function)(argument);
            }
        }
    }

    /// Returns the window length this wrapper was created with.
    #[inline]
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}
