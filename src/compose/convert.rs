//! Conversions into arity functions and between curried and uncurried forms.

use crate::function::{
    Arguments, ArityFn, DecadeFn, EnneadFn, OctetFn, PairFn, QuartetFn, QuintetFn, SeptetFn,
    SextetFn, TripletFn, UnitFn,
};

/// A value convertible into an arity function.
///
/// Implemented for every native closure of 1 to 10 arguments that is
/// `Send + Sync + 'static`, and for the arity function types themselves.
///
/// The `Marker` parameter only keeps the implementations for different
/// arities apart; it is inferred and never written by callers. Closure
/// implementations use the function pointer type of the closure signature
/// as marker, arity function types use [`Unchanged`].
///
/// # Examples
///
/// ```
/// use arity_fn::compose::IntoArityFn;
/// use arity_fn::function::ArityFn;
///
/// fn arity_of<Marker>(callable: impl IntoArityFn<Marker>) -> usize {
///     callable.into_arity_fn().arity()
/// }
///
/// assert_eq!(arity_of(|a: i32| a), 1);
/// assert_eq!(arity_of(|a: i32, b: i32, c: i32| a + b + c), 3);
/// ```
pub trait IntoArityFn<Marker> {
    /// The arity function type this value converts into.
    type Function: ArityFn;

    /// Performs the conversion.
    fn into_arity_fn(self) -> Self::Function;
}

/// The [`IntoArityFn`] marker of values that already are arity functions.
#[derive(Debug, Clone, Copy)]
pub struct Unchanged;

impl<F: ArityFn> IntoArityFn<Unchanged> for F {
    type Function = Self;

    #[inline]
    fn into_arity_fn(self) -> Self::Function {
        self
    }
}

macro_rules! impl_into_arity_fn {
    ($($function:ident($($Argument:ident),+);)+) => {
        $(
            impl<Callable, $($Argument,)+ R> IntoArityFn<fn($($Argument),+) -> R> for Callable
            where
                Callable: Fn($($Argument),+) -> R + Send + Sync + 'static,
                $function<$($Argument,)+ R>: ArityFn,
            {
                type Function = $function<$($Argument,)+ R>;

                #[inline]
                fn into_arity_fn(self) -> Self::Function {
                    $function::new(self)
                }
            }
        )+
    };
}

impl_into_arity_fn! {
    UnitFn(A);
    PairFn(A, B);
    TripletFn(A, B, C);
    QuartetFn(A, B, C, D);
    QuintetFn(A, B, C, D, E);
    SextetFn(A, B, C, D, E, F);
    SeptetFn(A, B, C, D, E, F, G);
    OctetFn(A, B, C, D, E, F, G, H);
    EnneadFn(A, B, C, D, E, F, G, H, I);
    DecadeFn(A, B, C, D, E, F, G, H, I, J);
}

/// Adapts a native closure into the arity function type of matching arity.
///
/// # Examples
///
/// ```
/// use arity_fn::compose::of;
/// use arity_fn::function::{ArityFn, PairFn};
///
/// let greet: PairFn<&str, usize, String> = of(|name: &'static str, times: usize| {
///     format!("hello {name}").repeat(times)
/// });
///
/// assert_eq!(greet.apply("you", 2), "hello youhello you");
/// assert_eq!(greet.curry().apply("me").apply(1), "hello me");
/// ```
#[inline]
pub fn of<Marker, F>(callable: F) -> F::Function
where
    F: IntoArityFn<Marker>,
{
    callable.into_arity_fn()
}

/// Converts a function over an argument tuple into its curried chain.
///
/// The arity function type is found from the tuple type, so
/// `UnitFn<(A, B, C), R>` curries into `UnitFn<A, UnitFn<B, UnitFn<C, R>>>`.
///
/// # Examples
///
/// ```
/// use arity_fn::compose::curry;
/// use arity_fn::function::UnitFn;
///
/// let volume = UnitFn::new(|(w, h, d): (u32, u32, u32)| w * h * d);
///
/// assert_eq!(curry(volume).apply(2).apply(3).apply(4), 24);
/// ```
pub fn curry<T, R>(uncurried: UnitFn<T, R>) -> <T::Function<R> as ArityFn>::Curried
where
    T: Arguments,
    R: 'static,
{
    <T::Function<R> as ArityFn>::of_uncurried(uncurried).curry()
}

/// Converts a curried chain into a function over the argument tuple.
///
/// The argument tuple and result type cannot be recovered from the chain
/// alone and are given as type arguments.
///
/// # Examples
///
/// ```
/// use arity_fn::compose::uncurry;
/// use arity_fn::function::UnitFn;
///
/// let curried = UnitFn::new(|a: i32| UnitFn::new(move |b: i32| a - b));
/// let subtract = uncurry::<(i32, i32), i32>(curried);
///
/// assert_eq!(subtract.apply((10, 3)), 7);
/// ```
pub fn uncurry<T, R>(curried: <T::Function<R> as ArityFn>::Curried) -> UnitFn<T, R>
where
    T: Arguments,
    R: 'static,
{
    <T::Function<R> as ArityFn>::of_curried(curried).uncurry()
}
