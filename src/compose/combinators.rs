//! Free-standing composition over anything convertible into an arity function.

use super::IntoArityFn;
use crate::function::{ArityFn, UnitFn};

type Converted<F, Marker> = <F as IntoArityFn<Marker>>::Function;

/// Returns a function of the same arity as `function` that feeds its result
/// through `after`.
///
/// # Examples
///
/// ```
/// use arity_fn::compose::and_then;
///
/// let add_then_double = and_then(|a: i32, b: i32| a + b, |sum: i32| sum * 2);
///
/// assert_eq!(add_then_double.apply(3, 4), 14);
/// ```
pub fn and_then<Marker, F, R2, After>(
    function: F,
    after: After,
) -> <Converted<F, Marker> as ArityFn>::AndThen<R2>
where
    F: IntoArityFn<Marker>,
    After: Fn(<Converted<F, Marker> as ArityFn>::Output) -> R2 + Send + Sync + 'static,
    R2: 'static,
{
    function.into_arity_fn().and_then(after)
}

/// Composes `function` after `upstream`, which produces its argument tuple.
///
/// # Examples
///
/// ```
/// use arity_fn::compose::point;
///
/// let last_of_three = point(|_: i32, _: i32, c: i32| c, |x: i32| (1, 2, x));
///
/// assert_eq!(last_of_three.apply(8), 8);
/// ```
pub fn point<Marker, F, P, Upstream>(
    function: F,
    upstream: Upstream,
) -> UnitFn<P, <Converted<F, Marker> as ArityFn>::Output>
where
    F: IntoArityFn<Marker>,
    Upstream: Fn(P) -> <Converted<F, Marker> as ArityFn>::Args + Send + Sync + 'static,
{
    function.into_arity_fn().point(upstream)
}

/// Composes `downstream` after `function`, as a function over the argument
/// tuple of `function`.
///
/// # Examples
///
/// ```
/// use arity_fn::compose::pipe;
/// use arity_fn::function::{ArityFn, PairFn, UnitFn};
///
/// let to_pair = UnitFn::new(|x: i32| (x, 42));
/// let sum = PairFn::new(|a: i32, b: i32| a + b);
///
/// let through = pipe(to_pair, sum.uncurry().into_fn());
/// assert_eq!(through.apply((8,)), 50);
/// ```
pub fn pipe<Marker, F, P, Downstream>(
    function: F,
    downstream: Downstream,
) -> UnitFn<<Converted<F, Marker> as ArityFn>::Args, P>
where
    F: IntoArityFn<Marker>,
    Downstream: Fn(<Converted<F, Marker> as ArityFn>::Output) -> P + Send + Sync + 'static,
{
    function.into_arity_fn().pipe(downstream)
}
