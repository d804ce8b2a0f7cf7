//! # arity-fn
//!
//! Fixed-arity function types for Rust, convertible between curried and
//! uncurried form, applicable to tuples and type-erased argument lists,
//! composable and usable in bulk over collections.
//!
//! ## Overview
//!
//! - **Tuple contract**: size, conversion to type-erased values and
//!   positional projection for native tuples of up to 10 elements
//! - **Function types**: [`UnitFn`](function::UnitFn) through
//!   [`DecadeFn`](function::DecadeFn), one per arity from 1 to 10, sharing
//!   the [`ArityFn`](function::ArityFn) trait
//! - **Curry / uncurry**: every function converts into a chain of
//!   single-argument functions and into a function over its argument tuple
//! - **Generic application**: tuples, arrays and lists of type-erased values
//!   with a runtime arity check
//! - **Composition**: `and_then`, `point` and `pipe`
//! - **Bulk helpers**: `zip`, `unzip` and sequential or parallel mapping
//!
//! ## Feature Flags
//!
//! - `compose`: free conversion and composition utilities
//! - `rayon`: parallel bulk mapping (`par`, `par_tuples`)
//! - `serde`: `Serialize` for the error types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use arity_fn::prelude::*;
//!
//! let add = PairFn::new(|a: i32, b: i32| a + b);
//! let to_pair = UnitFn::new(|x: i32| (x, 42));
//!
//! assert_eq!(add.apply(7, 13), 20);
//! assert_eq!(add.curry().apply(7).apply(13), 20);
//! assert_eq!(add.point(to_pair.into_fn()).apply(8), 50);
//! assert_eq!(add.and_then(|sum| sum * 2).apply(3, 4), 14);
//! assert_eq!(PairFn::zip(vec![1, 2, 3], vec!['a', 'b']), vec![(1, 'a'), (2, 'b')]);
//! ```
//!
//! Misuse of the typed API is rejected at compile time:
//!
//! ```compile_fail
//! use arity_fn::prelude::*;
//!
//! let add = PairFn::new(|a: i32, b: i32| a + b);
//! add.apply_tuple((1, 2, 3));
//! ```
//!
//! ```compile_fail
//! use arity_fn::prelude::*;
//!
//! let add = PairFn::new(|a: i32, b: i32| a + b);
//! add.apply(1, "2");
//! ```
//!
//! Only the type-erased entry points check at runtime:
//!
//! ```rust
//! use arity_fn::prelude::*;
//!
//! let add = PairFn::new(|a: i32, b: i32| a + b);
//!
//! assert_eq!(add.apply_list(vec![value(1), value(2)]), Ok(3));
//! assert_eq!(
//!     add.apply_list(vec![value(1), value(2), value(3)]),
//!     Err(ApplyError::ArityMismatch(ArityMismatchError { expected: 2, actual: 3 }))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use arity_fn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::function::*;
    pub use crate::tuple::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod function;
pub mod tuple;

#[cfg(feature = "compose")]
pub mod compose;
