//! Fixed-arity function types.
//!
//! This module provides one concrete function type per arity, from 1 to 10,
//! all implementing the shared [`ArityFn`] trait:
//!
//! | arity | type          | argument tuple       |
//! |-------|---------------|----------------------|
//! | 1     | [`UnitFn`]    | `(A,)`               |
//! | 2     | [`PairFn`]    | `(A, B)`             |
//! | 3     | [`TripletFn`] | `(A, B, C)`          |
//! | 4     | [`QuartetFn`] | `(A, B, C, D)`       |
//! | 5     | [`QuintetFn`] | `(A, ..., E)`        |
//! | 6     | [`SextetFn`]  | `(A, ..., F)`        |
//! | 7     | [`SeptetFn`]  | `(A, ..., G)`        |
//! | 8     | [`OctetFn`]   | `(A, ..., H)`        |
//! | 9     | [`EnneadFn`]  | `(A, ..., I)`        |
//! | 10    | [`DecadeFn`]  | `(A, ..., J)`        |
//!
//! Every function value is a cheap, cloneable handle to a shared callable,
//! and is `Send + Sync`.
//!
//! # Forms of a function
//!
//! An arity-N function can be viewed three ways:
//!
//! - **direct**: `apply(a1, ..., aN)`
//! - **curried**: a chain of N single-argument [`UnitFn`]s
//! - **uncurried**: a single [`UnitFn`] over the N-tuple of arguments
//!
//! ```text
//! f.apply(a, b, c) == f.curry().apply(a).apply(b).apply(c)
//!                  == f.uncurry().apply((a, b, c))
//!                  == f.apply_tuple((a, b, c))
//! ```
//!
//! # Examples
//!
//! ```
//! use arity_fn::prelude::*;
//!
//! let concat = TripletFn::new(|a: String, b: String, c: String| a + &b + &c);
//! let (a, b, c) = (String::from("Hello"), String::from("World"), String::from("!"));
//! let expected = String::from("HelloWorld!");
//!
//! assert_eq!(concat.apply(a.clone(), b.clone(), c.clone()), expected);
//! assert_eq!(concat.curry().apply(a.clone()).apply(b.clone()).apply(c.clone()), expected);
//! assert_eq!(concat.partial(a.clone()).partial(b.clone()).apply(c.clone()), expected);
//! assert_eq!(concat.apply_tuple((a.clone(), b.clone(), c.clone())), expected);
//! assert_eq!(concat.uncurry().apply((a, b, c)), expected);
//! ```
//!
//! # Laws
//!
//! For every arity-N function `f` and arguments `a1..aN`:
//!
//! - **Tuple application**: `f.apply_tuple((a1, .., aN)) == f.apply(a1, .., aN)`
//! - **Uncurry**: `f.uncurry().apply(t) == f.apply_tuple(t)`
//! - **Curry**: `f.curry().apply(a1)...apply(aN) == f.apply(a1, .., aN)`
//! - **Curry round trip**: `F::of_curried(f.curry())` behaves like `f`

#[macro_use]
mod arity_macro;
mod arguments;
mod error;
mod higher;
mod pair;
mod triplet;
mod unit;

pub use arguments::{Argument, Arguments};
pub use error::{ApplyError, ArityMismatchError, TypeMismatchError};
pub use higher::{DecadeFn, EnneadFn, OctetFn, QuartetFn, QuintetFn, SeptetFn, SextetFn};
pub use pair::PairFn;
pub use triplet::TripletFn;
pub use unit::UnitFn;

use crate::tuple::{Tuple, Value};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The capability shared by every fixed-arity function type.
///
/// The arity is part of the type: [`ARITY`](Self::ARITY) is a constant and
/// [`Args`](Self::Args) is the matching argument tuple. Typed application
/// ([`apply_tuple`](Self::apply_tuple)) therefore cannot fail. Only the
/// type-erased entry points ([`try_apply_tuple`](Self::try_apply_tuple),
/// [`apply_array`](Self::apply_array), [`apply_list`](Self::apply_list) and
/// [`apply_values`](Self::apply_values)) check their input at runtime and
/// return an [`ApplyError`].
///
/// # Associated types
///
/// - `Args`: the argument tuple, e.g. `(A, B)` for a [`PairFn<A, B, R>`]
/// - `First`: the type of the first argument
/// - `Output`: the result type
/// - `Curried`: the curried form, a chain of [`UnitFn`]s
/// - `Partial`: what [`partial`](Self::partial) returns. For arity 1 this is
///   the result itself, for arity N > 1 the arity N-1 function type
/// - `AndThen<R2>`: the same-arity function type returning `R2`
///
/// # Examples
///
/// Generic code over any arity:
///
/// ```
/// use arity_fn::prelude::*;
///
/// fn describe<F: ArityFn>(function: &F, arguments: F::Args) -> String
/// where
///     F::Output: std::fmt::Display,
/// {
///     format!("arity {} gives {}", function.arity(), function.apply_tuple(arguments))
/// }
///
/// let add = PairFn::new(|a: i32, b: i32| a + b);
/// let negate = UnitFn::new(|a: i32| -a);
///
/// assert_eq!(describe(&add, (1, 2)), "arity 2 gives 3");
/// assert_eq!(describe(&negate, (5,)), "arity 1 gives -5");
/// ```
pub trait ArityFn: Clone + Send + Sync + 'static {
    /// The argument tuple of this function.
    type Args: Tuple;

    /// The type of the first argument, consumed by [`partial`](Self::partial).
    type First;

    /// The result type.
    type Output;

    /// The curried form: a chain of [`UnitFn`]s, one per argument.
    type Curried;

    /// The result of [`partial`](Self::partial).
    type Partial;

    /// This function type with its result type replaced by `R2`.
    type AndThen<R2: 'static>: ArityFn<Args = Self::Args, Output = R2>;

    /// The number of arguments.
    const ARITY: usize;

    /// Returns the number of arguments this function takes.
    ///
    /// Always equal to [`Tuple::size`] of [`Args`](Self::Args).
    #[inline]
    fn arity(&self) -> usize {
        Self::ARITY
    }

    /// Converts this function to its curried form.
    ///
    /// For arity 1 the curried form is the function itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let volume = TripletFn::new(|w: u32, h: u32, d: u32| w * h * d);
    /// let curried = volume.curry();
    /// let with_width = curried.apply(2);
    /// let with_width_height = with_width.apply(3);
    ///
    /// assert_eq!(with_width_height.apply(4), 24);
    /// assert_eq!(with_width.apply(5).apply(1), 10);
    /// ```
    fn curry(&self) -> Self::Curried;

    /// Converts this function to a single-argument function over its
    /// argument tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let add = PairFn::new(|a: i32, b: i32| a + b);
    /// let on_pairs = add.uncurry();
    ///
    /// assert_eq!(on_pairs.apply((3, 4)), 7);
    /// ```
    fn uncurry(&self) -> UnitFn<Self::Args, Self::Output>;

    /// Builds a function from its curried form.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let curried = UnitFn::new(|a: i32| UnitFn::new(move |b: i32| a - b));
    /// let subtract = PairFn::of_curried(curried);
    ///
    /// assert_eq!(subtract.apply(10, 3), 7);
    /// ```
    fn of_curried(curried: Self::Curried) -> Self;

    /// Builds a function from a single-argument function over the argument
    /// tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let on_pairs = UnitFn::new(|(a, b): (i32, i32)| a * b);
    /// let multiply = PairFn::of_uncurried(on_pairs);
    ///
    /// assert_eq!(multiply.apply(6, 7), 42);
    /// ```
    fn of_uncurried(uncurried: UnitFn<Self::Args, Self::Output>) -> Self;

    /// Applies this function to its argument tuple.
    ///
    /// Equivalent to destructuring the tuple and calling `apply`.
    fn apply_tuple(&self, arguments: Self::Args) -> Self::Output;

    /// Applies this function to an arbitrary tuple, checking its size and
    /// element types at runtime.
    ///
    /// # Errors
    ///
    /// - [`ApplyError::ArityMismatch`] if the size of `tuple` differs from
    ///   [`arity`](Self::arity)
    /// - [`ApplyError::TypeMismatch`] if an element does not have the type
    ///   of the argument at its position
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let add = PairFn::new(|a: i32, b: i32| a + b);
    ///
    /// assert_eq!(add.try_apply_tuple((1, 2)), Ok(3));
    /// assert!(matches!(add.try_apply_tuple((1, 2, 3)), Err(ApplyError::ArityMismatch(_))));
    /// assert!(matches!(add.try_apply_tuple((1, "2")), Err(ApplyError::TypeMismatch(_))));
    /// ```
    fn try_apply_tuple<T: Tuple>(&self, tuple: T) -> Result<Self::Output, ApplyError> {
        if tuple.size() != self.arity() {
            return Err(ApplyError::arity_mismatch(self.arity(), tuple.size()));
        }
        self.apply_values(tuple.into_values())
    }

    /// Applies this function to a sequence of type-erased values.
    ///
    /// The length is compared with the arity before any value is decoded.
    /// Values are then decoded in order, the first one becoming the first
    /// argument.
    ///
    /// # Errors
    ///
    /// - [`ApplyError::ArityMismatch`] if the number of values differs from
    ///   [`arity`](Self::arity)
    /// - [`ApplyError::TypeMismatch`] if a value does not have the type of
    ///   the argument at its position
    fn apply_values<I>(&self, values: I) -> Result<Self::Output, ApplyError>
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: ExactSizeIterator;

    /// Applies this function to an array of type-erased values.
    ///
    /// # Errors
    ///
    /// See [`apply_values`](Self::apply_values).
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let repeat = PairFn::new(|text: &'static str, count: usize| text.repeat(count));
    ///
    /// assert_eq!(repeat.apply_array([value("ab"), value(3_usize)]), Ok(String::from("ababab")));
    /// assert!(repeat.apply_array([value("ab")]).is_err());
    /// ```
    fn apply_array<const N: usize>(&self, values: [Value; N]) -> Result<Self::Output, ApplyError> {
        self.apply_values(values)
    }

    /// Applies this function to a list of type-erased values.
    ///
    /// # Errors
    ///
    /// See [`apply_values`](Self::apply_values).
    fn apply_list(&self, values: Vec<Value>) -> Result<Self::Output, ApplyError> {
        self.apply_values(values)
    }

    /// Applies the first argument.
    ///
    /// For arity 1 this is complete application and returns the result.
    /// For arity N > 1 it returns a function of the remaining N-1
    /// arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let double = UnitFn::new(|x: i32| x * 2);
    /// assert_eq!(double.partial(21), 42);
    ///
    /// let add = PairFn::new(|a: i32, b: i32| a + b);
    /// let add_five: UnitFn<i32, i32> = add.partial(5);
    /// assert_eq!(add_five.apply(3), 8);
    /// ```
    fn partial(&self, first: Self::First) -> Self::Partial;

    /// Returns a function of the same arity that applies `after` to the
    /// result of this function.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let add = PairFn::new(|a: i32, b: i32| a + b);
    /// let add_then_double = add.and_then(|sum| sum * 2);
    ///
    /// assert_eq!(add_then_double.apply(3, 4), 14);
    /// ```
    fn and_then<R2, G>(&self, after: G) -> Self::AndThen<R2>
    where
        G: Fn(Self::Output) -> R2 + Send + Sync + 'static,
        R2: 'static;

    /// Composes this function after a function producing its argument tuple.
    ///
    /// `g.point(f)` is the pointwise composition `x -> g(f(x))` through the
    /// tuple boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let sum = PairFn::new(|a: i32, b: i32| a + b);
    /// let with_answer = UnitFn::new(|x: i32| (x, 42));
    ///
    /// let composed = sum.point(with_answer.into_fn());
    /// assert_eq!(composed.apply(8), 50);
    /// ```
    fn point<P, G>(&self, upstream: G) -> UnitFn<P, Self::Output>
    where
        G: Fn(P) -> Self::Args + Send + Sync + 'static,
    {
        let this = self.clone();
        UnitFn::new(move |input: P| this.apply_tuple(upstream(input)))
    }

    /// Composes a function consuming the result after this function, as a
    /// function over the argument tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let sum = PairFn::new(|a: i32, b: i32| a + b);
    /// let describe = sum.pipe(|total| format!("total: {total}"));
    ///
    /// assert_eq!(describe.apply((2, 3)), "total: 5");
    /// ```
    fn pipe<P, G>(&self, downstream: G) -> UnitFn<Self::Args, P>
    where
        G: Fn(Self::Output) -> P + Send + Sync + 'static,
    {
        let this = self.clone();
        UnitFn::new(move |arguments: Self::Args| downstream(this.apply_tuple(arguments)))
    }

    /// Lazily applies this function to every argument tuple, in iteration
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let clamp = TripletFn::new(|value: i32, low: i32, high: i32| value.clamp(low, high));
    /// let clamped: Vec<i32> = clamp.seq_tuples(vec![(5, 0, 3), (-1, 0, 3), (2, 0, 3)]).collect();
    ///
    /// assert_eq!(clamped, vec![3, 0, 2]);
    /// ```
    fn seq_tuples<I>(&self, tuples: I) -> impl Iterator<Item = Self::Output>
    where
        I: IntoIterator<Item = Self::Args>,
    {
        let this = self.clone();
        tuples
            .into_iter()
            .map(move |arguments| this.apply_tuple(arguments))
    }

    /// Applies this function to every argument tuple in parallel.
    ///
    /// Nothing runs until the returned iterator is consumed; consuming it
    /// blocks until every application has finished. Order-preserving
    /// consumers such as `collect::<Vec<_>>()` keep each result at the
    /// position of its source tuple.
    #[cfg(feature = "rayon")]
    fn par_tuples<I>(&self, tuples: I) -> impl ParallelIterator<Item = Self::Output>
    where
        I: IntoParallelIterator<Item = Self::Args>,
        Self::Output: Send,
    {
        let this = self.clone();
        tuples
            .into_par_iter()
            .map(move |arguments| this.apply_tuple(arguments))
    }
}
