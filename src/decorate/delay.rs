//! Deferred, fire-and-forget invocation.

use std::time::Duration;

use super::scheduler::Scheduler;

/// Schedules a single invocation of `function(argument)` once `wait` has
/// elapsed on the scheduler's clock.
///
/// Returns immediately; the eventual result of `function` is discarded.
/// Repeated calls schedule independent invocations — none of them cancels
/// or coalesces with another.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use lowbar::decorate::{Scheduler, delay};
///
/// let scheduler = Scheduler::new();
/// let received = Rc::new(RefCell::new(Vec::new()));
///
/// let inbox = Rc::clone(&received);
/// delay(&scheduler, move |value| inbox.borrow_mut().push(value), Duration::from_millis(500), 42);
///
/// assert!(received.borrow().is_empty());
/// scheduler.advance(Duration::from_millis(500));
/// assert_eq!(*received.borrow(), vec![42]);
/// ```
pub fn delay<A, F>(scheduler: &Scheduler, function: F, wait: Duration, argument: A)
where
    A: 'static,
    F: FnOnce(A) + 'static,
{
    scheduler.schedule(wait, move || function(argument));
}
