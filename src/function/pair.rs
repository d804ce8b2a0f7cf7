//! The arity-2 function type.

use super::arguments::ArgumentCursor;
use super::{ApplyError, Argument, ArityFn, Arguments, UnitFn};
use crate::tuple::Value;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

arity_fn! {
    /// A function of two arguments.
    ///
    /// [`partial`](ArityFn::partial) always returns a [`UnitFn`] over the
    /// second argument; unlike arity 1 it never collapses to the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let add = PairFn::new(|a: i32, b: i32| a + b);
    ///
    /// assert_eq!(add.apply(7, 13), 20);
    /// assert_eq!(add.curry().apply(7).apply(13), 20);
    /// assert_eq!(add.partial(7).apply(13), 20);
    /// assert_eq!(add.apply_tuple((7, 13)), 20);
    /// assert_eq!(add.uncurry().apply((7, 13)), 20);
    /// ```
    ///
    /// Zipping and unzipping:
    ///
    /// ```
    /// use arity_fn::function::PairFn;
    ///
    /// let pairs = PairFn::zip(vec![1, 2, 3], vec!['a', 'b']);
    /// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    ///
    /// let (numbers, letters) = PairFn::unzip(pairs);
    /// assert_eq!(numbers, vec![1, 2]);
    /// assert_eq!(letters, vec!['a', 'b']);
    /// ```
    PairFn(2) => UnitFn;
    A first, B second
}

impl<A, B> PairFn<A, B, ()> {
    /// Adapts a side-effecting two-argument procedure; the resulting
    /// function returns `()`.
    pub fn of_consumer<C>(consumer: C) -> Self
    where
        C: Fn(A, B) + Send + Sync + 'static,
    {
        Self::new(consumer)
    }
}

impl<A, B, R> PairFn<A, B, R> {
    /// Returns this function with its two arguments swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::function::PairFn;
    ///
    /// let divide = PairFn::new(|numerator: i32, denominator: i32| numerator / denominator);
    /// let divide_into = divide.flip();
    ///
    /// assert_eq!(divide.apply(10, 2), 5);
    /// assert_eq!(divide_into.apply(2, 10), 5);
    /// ```
    pub fn flip(&self) -> PairFn<B, A, R>
    where
        A: 'static,
        B: 'static,
        R: 'static,
    {
        let this = self.clone();
        PairFn::new(move |second: B, first: A| this.apply(first, second))
    }

    /// Lazily applies this function to every key/value entry, in iteration
    /// order.
    ///
    /// Accepts any collection of pairs, in particular maps iterated by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::function::PairFn;
    /// use std::collections::BTreeMap;
    ///
    /// let stock = BTreeMap::from([("apples", 3), ("pears", 5)]);
    /// let describe = PairFn::new(|name: &'static str, count: i32| format!("{count} {name}"));
    ///
    /// let lines: Vec<String> = describe.seq(stock).collect();
    /// assert_eq!(lines, vec!["3 apples", "5 pears"]);
    /// ```
    pub fn seq<I>(&self, entries: I) -> impl Iterator<Item = R> + use<A, B, R, I>
    where
        I: IntoIterator<Item = (A, B)>,
    {
        let this = self.clone();
        entries
            .into_iter()
            .map(move |(key, value)| this.apply(key, value))
    }

    /// Applies this function to every key/value entry in parallel.
    ///
    /// Consuming the returned iterator blocks until every application has
    /// finished. Results are associated with their entries through the
    /// mapping itself, not through completion order.
    #[cfg(feature = "rayon")]
    pub fn par<I>(&self, entries: I) -> impl ParallelIterator<Item = R> + use<A, B, R, I>
    where
        I: IntoParallelIterator<Item = (A, B)>,
        R: Send,
    {
        let this = self.clone();
        entries
            .into_par_iter()
            .map(move |(key, value)| this.apply(key, value))
    }
}

static_assertions::assert_impl_all!(PairFn<i32, String, bool>: Clone, Send, Sync, ArityFn);
