//! Classic combinators, returned as arity functions.
//!
//! - [`identity`]: the I combinator
//! - [`constant`]: the K combinator
//! - [`flip`]: the C combinator, over [`PairFn`]

use super::IntoArityFn;
use crate::function::{PairFn, UnitFn};

/// Returns the identity function over `A`.
///
/// The unit of composition: `identity().compose(f)` and
/// `f.and_then(identity().into_fn())` both behave like `f`.
///
/// # Examples
///
/// ```
/// use arity_fn::compose::identity;
///
/// assert_eq!(identity().apply(42), 42);
/// assert_eq!(identity().apply("hello"), "hello");
/// ```
#[inline]
#[must_use]
pub fn identity<A: 'static>() -> UnitFn<A, A> {
    UnitFn::new(|value| value)
}

/// Returns a function that ignores its argument and always returns a clone
/// of `value`.
///
/// # Examples
///
/// ```
/// use arity_fn::compose::constant;
/// use arity_fn::function::UnitFn;
///
/// let always_five: UnitFn<&str, i32> = constant(5);
/// assert_eq!(always_five.apply("ignored"), 5);
///
/// let zeros: Vec<i32> = constant(0).seq(vec!["a", "b", "c"]).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<A, R>(value: R) -> UnitFn<A, R>
where
    R: Clone + Send + Sync + 'static,
{
    UnitFn::new(move |_| value.clone())
}

/// Swaps the arguments of a two-argument function.
///
/// Accepts a [`PairFn`] or a native two-argument closure.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f))` behaves like `f`
/// - **Flip definition**: `flip(f).apply(b, a) == f.apply(a, b)`
///
/// # Examples
///
/// ```
/// use arity_fn::compose::flip;
///
/// let power = flip(|base: i32, exponent: u32| base.pow(exponent));
///
/// assert_eq!(power.apply(3, 2), 8);
/// ```
pub fn flip<Marker, F, A, B, R>(function: F) -> PairFn<B, A, R>
where
    F: IntoArityFn<Marker, Function = PairFn<A, B, R>>,
    A: 'static,
    B: 'static,
    R: 'static,
{
    function.into_arity_fn().flip()
}
