//! The cooperative timer queue behind the deferred decorators.
//!
//! [`Scheduler`] is a cloneable handle over a single shared timer state: a
//! virtual clock and a queue of scheduled callbacks ordered by deadline.
//! Nothing fires on its own — time only moves when the owner calls
//! [`advance`](Scheduler::advance), which runs every callback whose
//! deadline falls inside the advanced span, in deadline order, on the
//! calling thread.
//!
//! # Invariants
//!
//! - **Deadline order**: callbacks fire in non-decreasing deadline order
//! - **FIFO ties**: callbacks sharing a deadline fire in schedule order
//! - **Reentrant scheduling**: a firing callback may schedule further
//!   work; work due within the same `advance` span fires in that same call
//!
//! There are no threads and no locks: the entire model is one logical
//! thread of control, so the handle is deliberately neither `Send` nor
//! `Sync`.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use static_assertions::assert_not_impl_any;

type Callback = Box<dyn FnOnce()>;

struct Scheduled {
    deadline: Duration,
    sequence: u64,
    callback: Callback,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.sequence == other.sequence
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    // Reversed so the earliest deadline, then the earliest sequence, sits
    // at the top of the max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

struct SchedulerState {
    now: Duration,
    next_sequence: u64,
    queue: BinaryHeap<Scheduled>,
}

/// A single-threaded cooperative timer queue with a virtual clock.
///
/// The handle is cheap to clone; all clones share the same clock and
/// queue. Scheduled callbacks execute non-preemptively on the thread that
/// advances the clock, which makes every timing interaction in this crate
/// deterministic and testable without sleeping.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use lowbar::decorate::Scheduler;
///
/// let scheduler = Scheduler::new();
/// let order = Rc::new(RefCell::new(Vec::new()));
///
/// let late = Rc::clone(&order);
/// scheduler.schedule(Duration::from_millis(20), move || late.borrow_mut().push("late"));
///
/// let soon = Rc::clone(&order);
/// scheduler.schedule(Duration::from_millis(10), move || soon.borrow_mut().push("soon"));
///
/// scheduler.advance(Duration::from_millis(25));
/// assert_eq!(*order.borrow(), vec!["soon", "late"]);
/// ```
#[derive(Clone)]
pub struct Scheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl Scheduler {
    /// Creates a new scheduler with an empty queue and the clock at zero.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SchedulerState {
                now: Duration::ZERO,
                next_sequence: 0,
                queue: BinaryHeap::new(),
            })),
        }
    }

    /// Returns the current reading of the virtual clock.
    #[inline]
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Returns the number of callbacks waiting in the queue.
    #[inline]
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Enqueues `callback` to fire once `wait` has elapsed on the virtual
    /// clock.
    ///
    /// Scheduling never fires anything by itself, and there is no
    /// cancellation: once enqueued, a callback runs when its deadline is
    /// reached.
    pub fn schedule<F>(&self, wait: Duration, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let mut state = self.state.borrow_mut();
        let deadline = state.now + wait;
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.queue.push(Scheduled {
            deadline,
            sequence,
            callback: Box::new(callback),
        });
    }

    /// Moves the virtual clock forward by `elapsed`, firing every callback
    /// whose deadline falls within the advanced span.
    ///
    /// Callbacks fire one at a time in deadline order, with the clock set
    /// to each callback's deadline while it runs, so work a callback
    /// schedules during the advance still fires in this same call if it
    /// comes due within the span. No queue borrow is held while a callback
    /// runs, so callbacks may schedule freely.
    pub fn advance(&self, elapsed: Duration) {
        let target = self.state.borrow().now + elapsed;
        while let Some(callback) = self.pop_due(target) {
            callback();
        }
        self.state.borrow_mut().now = target;
    }

    /// Removes and returns the next callback due at or before `target`,
    /// setting the clock to its deadline.
    fn pop_due(&self, target: Duration) -> Option<Callback> {
        let mut state = self.state.borrow_mut();
        let is_due = state
            .queue
            .peek()
            .is_some_and(|scheduled| scheduled.deadline <= target);
        if !is_due {
            return None;
        }
        let scheduled = state.queue.pop()?;
        state.now = state.now.max(scheduled.deadline);
        Some(scheduled.callback)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        formatter
            .debug_struct("Scheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

// One logical thread of control; the handle must not cross threads.
assert_not_impl_any!(Scheduler: Send, Sync);
