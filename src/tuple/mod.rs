//! The tuple contract consumed by the arity function types.
//!
//! Native Rust tuples already are the fixed-size, immutable, ordered
//! containers this crate works with. This module only adds the small
//! contract the function types rely on:
//!
//! - [`Tuple`]: the size of a tuple and its conversion into an ordered
//!   sequence of type-erased [`Value`]s
//! - [`Element`]: positional access by a compile-time index
//! - [`first`] through [`tenth`]: projection functions built on [`Element`]
//!
//! Tuples of 0 to 10 elements are supported.
//!
//! # Examples
//!
//! ```
//! use arity_fn::tuple::{Tuple, first, third};
//!
//! let triplet = (1, "two", 3.0);
//! assert_eq!(triplet.size(), 3);
//! assert_eq!(first(triplet), 1);
//! assert_eq!(third(triplet), 3.0);
//!
//! let values = (1, "two").into_values();
//! assert_eq!(values.len(), 2);
//! assert_eq!(values[0].downcast_ref::<i32>(), Some(&1));
//! ```

mod element;

pub use element::{
    Element, eighth, fifth, first, fourth, ninth, second, seventh, sixth, tenth, third,
};

use smallvec::SmallVec;
use std::any::Any;

/// A type-erased argument, as used by array and list based application.
pub type Value = Box<dyn Any>;

/// The ordered sequence of values a [`Tuple`] converts into.
///
/// Inline capacity covers the largest supported tuple, so the conversion
/// never allocates a separate buffer.
pub type Values = SmallVec<[Value; 10]>;

/// Boxes a value as a type-erased [`Value`].
///
/// # Examples
///
/// ```
/// use arity_fn::tuple::value;
///
/// let list = vec![value(1), value(String::from("two"))];
/// assert_eq!(list[1].downcast_ref::<String>().map(String::as_str), Some("two"));
/// ```
#[inline]
pub fn value<T: 'static>(value: T) -> Value {
    Box::new(value)
}

/// A fixed-size ordered tuple.
///
/// Implemented for `()` and for native tuples of up to 10 elements whose
/// element types are `'static` (a requirement of [`Any`]).
pub trait Tuple: Sized {
    /// The number of elements.
    const SIZE: usize;

    /// Returns the number of elements of this tuple.
    #[inline]
    fn size(&self) -> usize {
        Self::SIZE
    }

    /// Converts this tuple into its elements, in positional order.
    fn into_values(self) -> Values;
}

macro_rules! impl_tuple {
    ($size:literal; $($element:ident $index:tt),*) => {
        impl<$($element: 'static),*> Tuple for ($($element,)*) {
            const SIZE: usize = $size;

            #[allow(unused_mut)]
            fn into_values(self) -> Values {
                let mut values = Values::new();
                $( values.push(Box::new(self.$index)); )*
                values
            }
        }
    };
}

impl_tuple!(0;);
impl_tuple!(1; A 0);
impl_tuple!(2; A 0, B 1);
impl_tuple!(3; A 0, B 1, C 2);
impl_tuple!(4; A 0, B 1, C 2, D 3);
impl_tuple!(5; A 0, B 1, C 2, D 3, E 4);
impl_tuple!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_tuple!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_tuple!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_tuple!(9; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_tuple!(10; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
