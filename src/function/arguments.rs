//! Argument bounds and type-erased argument decoding.

use super::{ApplyError, ArityFn};
use crate::tuple::{Tuple, Value};

/// The bounds an argument of an arity-2 or wider function must satisfy.
///
/// Partial application and currying capture the leading arguments in
/// closures that may be called any number of times from any thread, so
/// they must be cloneable and thread-safe.
///
/// Implemented for every type meeting the bounds; function values
/// themselves qualify, so functions can be passed as arguments.
pub trait Argument: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Argument for T {}

/// An argument tuple, mapped to the arity function type taking it.
///
/// This is what lets the free conversions in
/// [`compose`](crate::compose) find the function type from a tuple type:
/// `(A, B)` maps to [`PairFn<A, B, R>`](super::PairFn), `(A, B, C)` to
/// [`TripletFn<A, B, C, R>`](super::TripletFn), and so on.
pub trait Arguments: Tuple {
    /// The function type over this argument tuple returning `R`.
    type Function<R: 'static>: ArityFn<Args = Self, Output = R>;
}

/// Decodes type-erased values into typed arguments, one position at a time.
///
/// The length is compared with the arity before anything is decoded, so a
/// wrong number of values never reaches the function.
pub(crate) struct ArgumentCursor<I> {
    values: I,
    position: usize,
    arity: usize,
}

impl<I> ArgumentCursor<I>
where
    I: ExactSizeIterator<Item = Value>,
{
    pub(crate) fn new(values: I, arity: usize) -> Result<Self, ApplyError> {
        if values.len() != arity {
            return Err(ApplyError::arity_mismatch(arity, values.len()));
        }
        Ok(Self {
            values,
            position: 0,
            arity,
        })
    }

    /// Takes the value at the next position as a `T`.
    pub(crate) fn next<T: 'static>(&mut self) -> Result<T, ApplyError> {
        let position = self.position;
        self.position += 1;
        // Only reachable when the iterator under-reports its length.
        let value = self
            .values
            .next()
            .ok_or(ApplyError::arity_mismatch(self.arity, position))?;
        value
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| ApplyError::type_mismatch::<T>(position))
    }
}
