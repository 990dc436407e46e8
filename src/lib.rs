//! # lowbar
//!
//! A minimal functional utility library providing shape-generic collection
//! traversal, folds, and stateful function decorators.
//!
//! ## Overview
//!
//! The crate is built around a single traversal primitive that abstracts
//! over the two collection shapes — ordered sequences and string-keyed
//! mappings. Everything else is layered on top of it:
//!
//! - **Traversal Kernel**: [`collection::Collection`] and its
//!   [`each`](collection::Collection::each) method, the only place in the
//!   crate that knows how to visit both shapes
//! - **Fold Primitive**: [`fold`](collection::Collection::fold) and
//!   [`reduce`](collection::Collection::reduce), built only on `each`
//! - **Derived Operations**: `filter`, `reject`, `map`, `uniq`, `contains`,
//!   `every`, `some` and friends, each expressed through the fold layer
//! - **Function Decorators**: `Once`, `Memoize`, `delay`, `Throttle` —
//!   wrappers with private closure-held state that alter invocation
//!   semantics while preserving the call contract
//!
//! ## Feature Flags
//!
//! - `ops`: Derived collection operations (default)
//! - `decorate`: Function decorators and the cooperative scheduler (default)
//! - `shuffle`: Random permutation of sequences, backed by `rand` (default)
//! - `serde`: Serialization for the nested-sequence shape
//! - `fxhash`: Fast hashing for the memoize cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lowbar::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4];
//! let doubled = map(&numbers, |n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//!
//! let sum = Collection::from(&numbers).fold(0, |total, n| total + n);
//! assert_eq!(sum, 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and operations.
///
/// # Usage
///
/// ```rust
/// use lowbar::prelude::*;
/// ```
pub mod prelude {

    pub use crate::collection::*;

    #[cfg(feature = "ops")]
    pub use crate::ops::*;

    #[cfg(feature = "decorate")]
    pub use crate::decorate::*;
}

pub mod collection;

#[cfg(feature = "ops")]
pub mod ops;

#[cfg(feature = "decorate")]
pub mod decorate;
