//! Function decorators: wrappers with private state that alter invocation
//! semantics.
//!
//! Each decorator is created once by a factory call and is thereafter an
//! opaque callable with private memory:
//!
//! - [`Once`]: calls the wrapped function at most one time and replays the
//!   stored result forever after
//! - [`Memoize`]: caches results per argument value, invoking the wrapped
//!   function once per distinct argument
//! - [`delay`]: schedules a single deferred invocation, fire-and-forget
//! - [`Throttle`]: at most one underlying execution per time window, with
//!   trailing coalescing of the calls that land inside a window
//!
//! The deferred decorators run on the [`Scheduler`], a single-threaded
//! cooperative timer queue with a virtual clock: nothing fires until the
//! owner advances the clock, which keeps timing behavior fully
//! deterministic.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use lowbar::decorate::{Scheduler, delay};
//!
//! let scheduler = Scheduler::new();
//! let fired = std::rc::Rc::new(std::cell::Cell::new(false));
//!
//! let flag = std::rc::Rc::clone(&fired);
//! delay(&scheduler, move |message: &str| {
//!     assert_eq!(message, "later");
//!     flag.set(true);
//! }, Duration::from_millis(500), "later");
//!
//! assert!(!fired.get());
//! scheduler.advance(Duration::from_millis(500));
//! assert!(fired.get());
//! ```

mod delay;
mod memoize;
mod once;
mod scheduler;
mod throttle;

pub use delay::delay;
pub use memoize::Memoize;
pub use once::{Once, OncePoisonedError, OnceState};
pub use scheduler::Scheduler;
pub use throttle::Throttle;
