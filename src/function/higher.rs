//! Function types of arity 4 through 10.
//!
//! Each type partially applies into the type one arity below, so
//! `DecadeFn::partial` yields an [`EnneadFn`], whose `partial` yields an
//! [`OctetFn`], and so on down to [`UnitFn`].

use super::arguments::ArgumentCursor;
use super::{ApplyError, Argument, ArityFn, Arguments, TripletFn, UnitFn};
use crate::tuple::Value;

arity_fn! {
    /// A function of four arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let area = QuartetFn::new(|x0: i32, y0: i32, x1: i32, y1: i32| (x1 - x0) * (y1 - y0));
    ///
    /// assert_eq!(area.apply(0, 0, 3, 4), 12);
    /// assert_eq!(area.partial(0).partial(0).apply(3, 4), 12);
    /// assert_eq!(area.uncurry().apply((1, 1, 3, 4)), 6);
    /// ```
    QuartetFn(4) => TripletFn;
    A first, B second, C third, D fourth
}

arity_fn! {
    /// A function of five arguments.
    QuintetFn(5) => QuartetFn;
    A first, B second, C third, D fourth, E fifth
}

arity_fn! {
    /// A function of six arguments.
    SextetFn(6) => QuintetFn;
    A first, B second, C third, D fourth, E fifth, F sixth
}

arity_fn! {
    /// A function of seven arguments.
    SeptetFn(7) => SextetFn;
    A first, B second, C third, D fourth, E fifth, F sixth, G seventh
}

arity_fn! {
    /// A function of eight arguments.
    OctetFn(8) => SeptetFn;
    A first, B second, C third, D fourth, E fifth, F sixth, G seventh, H eighth
}

arity_fn! {
    /// A function of nine arguments.
    EnneadFn(9) => OctetFn;
    A first, B second, C third, D fourth, E fifth, F sixth, G seventh, H eighth, I ninth
}

arity_fn! {
    /// A function of ten arguments, the widest supported arity.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let digits = DecadeFn::new(
    ///     |a: u64, b: u64, c: u64, d: u64, e: u64, f: u64, g: u64, h: u64, i: u64, j: u64| {
    ///         [a, b, c, d, e, f, g, h, i, j].iter().fold(0, |number, digit| number * 10 + digit)
    ///     },
    /// );
    ///
    /// assert_eq!(digits.apply(1, 2, 3, 4, 5, 6, 7, 8, 9, 0), 1_234_567_890);
    /// assert_eq!(
    ///     digits.curry().apply(9).apply(8).apply(7).apply(6).apply(5)
    ///         .apply(4).apply(3).apply(2).apply(1).apply(0),
    ///     9_876_543_210
    /// );
    /// ```
    DecadeFn(10) => EnneadFn;
    A first, B second, C third, D fourth, E fifth, F sixth, G seventh, H eighth, I ninth, J tenth
}

static_assertions::assert_impl_all!(QuartetFn<u8, u16, u32, u64, ()>: Clone, Send, Sync, ArityFn);
static_assertions::assert_impl_all!(
    DecadeFn<u8, u8, u8, u8, u8, u8, u8, u8, u8, String, bool>: Clone, Send, Sync, ArityFn
);
