//! Conversion and composition utilities over arity functions.
//!
//! The methods of [`ArityFn`](crate::function::ArityFn) cover conversion
//! and composition for a function value already in hand. This module adds
//! the free-standing counterparts, which also accept plain Rust closures:
//!
//! - [`of`]: adapts a native closure of 1 to 10 arguments into the arity
//!   function type of matching arity
//! - [`curry`] / [`uncurry`]: convert between a function over an argument
//!   tuple and its curried chain, without naming the arity type
//! - [`and_then`], [`point`], [`pipe`]: composition
//! - [`identity`], [`constant`], [`flip`]: classic combinators returning
//!   arity functions
//!
//! # Examples
//!
//! ## Adapting closures
//!
//! ```
//! use arity_fn::compose::of;
//! use arity_fn::function::ArityFn;
//!
//! let add = of(|a: i32, b: i32| a + b);
//! let add3 = of(|a: i32, b: i32, c: i32| a + b + c);
//!
//! assert_eq!(add.arity(), 2);
//! assert_eq!(add3.partial(1).apply(2, 3), 6);
//! ```
//!
//! ## Curry and uncurry
//!
//! ```
//! use arity_fn::compose::{curry, uncurry};
//! use arity_fn::function::UnitFn;
//!
//! let on_pairs = UnitFn::new(|(a, b): (i32, i32)| a * b);
//! let curried = curry(on_pairs);
//! assert_eq!(curried.apply(6).apply(7), 42);
//!
//! let on_pairs = uncurry::<(i32, i32), i32>(curried);
//! assert_eq!(on_pairs.apply((6, 7)), 42);
//! ```
//!
//! ## Composition
//!
//! ```
//! use arity_fn::compose::{pipe, point};
//!
//! let through_pair = point(|a: i32, b: i32| a + b, |x: i32| (x, 42));
//! assert_eq!(through_pair.apply(8), 50);
//!
//! let described = pipe(|a: i32, b: i32| a * b, |product: i32| format!("= {product}"));
//! assert_eq!(described.apply((6, 7)), "= 42");
//! ```
//!
//! # Laws
//!
//! - **Curry round trip**: `uncurry(curry(f))` behaves like `f`
//! - **Left identity**: `identity().compose(f)` behaves like `f`
//! - **Right identity**: `and_then(f, identity().into_fn())` behaves like `f`
//! - **Double flip**: `flip(flip(f))` behaves like `f`

mod combinators;
mod convert;
mod utils;

pub use combinators::{and_then, pipe, point};
pub use convert::{IntoArityFn, Unchanged, curry, of, uncurry};
pub use utils::{constant, flip, identity};
