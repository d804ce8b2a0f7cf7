//! The arity-1 function type.

use super::arguments::ArgumentCursor;
use super::{ApplyError, ArityFn, Arguments};
use crate::tuple::Value;
use std::sync::Arc;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A function of one argument.
///
/// Arity 1 is the degenerate case of the arity family:
///
/// - the curried form is the function itself
/// - [`partial`](ArityFn::partial) is complete application and returns the
///   result, not a further function
/// - the uncurried form takes a 1-tuple `(A,)`
///
/// `UnitFn` is also the building block of every curried chain and of the
/// results of [`point`](ArityFn::point) and [`pipe`](ArityFn::pipe).
///
/// # Examples
///
/// ```
/// use arity_fn::prelude::*;
///
/// let double = UnitFn::new(|x: i32| x * 2);
///
/// assert_eq!(double.apply(21), 42);
/// assert_eq!(double.partial(21), 42);
/// assert_eq!(double.curry().apply(21), 42);
/// assert_eq!(double.uncurry().apply((21,)), 42);
/// ```
pub struct UnitFn<A, R> {
    function: Arc<dyn Fn(A) -> R + Send + Sync>,
}

impl<A, R> Clone for UnitFn<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<A, R> std::fmt::Debug for UnitFn<A, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("UnitFn")
            .field("arity", &1)
            .finish_non_exhaustive()
    }
}

impl<A, R> UnitFn<A, R> {
    /// Creates the function from a native one-argument callable.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// Creates a constant function that ignores its argument and returns
    /// whatever `supplier` produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::function::UnitFn;
    ///
    /// let answer: UnitFn<&str, i32> = UnitFn::of_supplier(|| 42);
    /// assert_eq!(answer.apply("ignored"), 42);
    /// ```
    pub fn of_supplier<S>(supplier: S) -> Self
    where
        S: Fn() -> R + Send + Sync + 'static,
    {
        Self::new(move |_| supplier())
    }

    /// Applies this function to the given argument.
    #[inline]
    pub fn apply(&self, argument: A) -> R {
        (self.function)(argument)
    }

    /// Returns a function that applies `before` first and feeds its result
    /// to this function.
    ///
    /// The mirror image of [`and_then`](ArityFn::and_then).
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::function::UnitFn;
    ///
    /// let double = UnitFn::new(|x: i32| x * 2);
    /// let length_doubled = double.compose(|text: &str| text.len() as i32);
    ///
    /// assert_eq!(length_doubled.apply("four"), 8);
    /// ```
    pub fn compose<P, G>(&self, before: G) -> UnitFn<P, R>
    where
        G: Fn(P) -> A + Send + Sync + 'static,
        A: 'static,
        R: 'static,
    {
        let this = self.clone();
        UnitFn::new(move |input: P| this.apply(before(input)))
    }

    /// Converts this function into a native closure.
    ///
    /// Useful wherever a plain `Fn` is expected, for example as the
    /// upstream of [`point`](ArityFn::point) or the downstream of
    /// [`pipe`](ArityFn::pipe).
    pub fn into_fn(self) -> impl Fn(A) -> R + Send + Sync {
        move |argument| self.apply(argument)
    }

    /// Lazily applies this function to every element of `collection`, in
    /// iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::function::UnitFn;
    ///
    /// let double = UnitFn::new(|x: i32| x * 2);
    /// let doubled: Vec<i32> = double.seq(vec![1, 2, 3]).collect();
    ///
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn seq<I>(&self, collection: I) -> impl Iterator<Item = R> + use<A, R, I>
    where
        I: IntoIterator<Item = A>,
    {
        let this = self.clone();
        collection
            .into_iter()
            .map(move |argument| this.apply(argument))
    }

    /// Applies this function to every element of `collection` in parallel.
    ///
    /// Accepts any parallel source, including unordered ones such as
    /// `HashSet` or a map's keys. Nothing runs until the returned iterator
    /// is consumed, and consuming it blocks until every application has
    /// finished. Applications may run in any order, but each result keeps
    /// the position of its source element, so `collect::<Vec<_>>()` over
    /// an ordered source lines up with the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::function::UnitFn;
    /// use rayon::prelude::*;
    ///
    /// let double = UnitFn::new(|x: i32| x * 2);
    /// let doubled: Vec<i32> = double.par(vec![1, 2, 3]).collect();
    ///
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[cfg(feature = "rayon")]
    pub fn par<I>(&self, collection: I) -> impl ParallelIterator<Item = R> + use<A, R, I>
    where
        I: IntoParallelIterator<Item = A>,
        R: Send,
    {
        let this = self.clone();
        collection
            .into_par_iter()
            .map(move |argument| this.apply(argument))
    }
}

impl<A> UnitFn<A, ()> {
    /// Adapts a side-effecting consumer; the resulting function returns `()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::function::UnitFn;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let total = Arc::new(AtomicUsize::new(0));
    /// let sink = {
    ///     let total = Arc::clone(&total);
    ///     UnitFn::of_consumer(move |amount: usize| {
    ///         total.fetch_add(amount, Ordering::SeqCst);
    ///     })
    /// };
    ///
    /// sink.apply(3);
    /// sink.apply(4);
    /// assert_eq!(total.load(Ordering::SeqCst), 7);
    /// ```
    pub fn of_consumer<C>(consumer: C) -> Self
    where
        C: Fn(A) + Send + Sync + 'static,
    {
        Self::new(consumer)
    }
}

impl<A> UnitFn<A, (A,)> {
    /// The 1-tuple constructor.
    pub fn with() -> Self {
        Self::new(|argument| (argument,))
    }
}

impl<A: 'static, R: 'static> ArityFn for UnitFn<A, R> {
    type Args = (A,);
    type First = A;
    type Output = R;
    type Curried = Self;
    type Partial = R;
    type AndThen<R2: 'static> = UnitFn<A, R2>;

    const ARITY: usize = 1;

    fn curry(&self) -> Self::Curried {
        self.clone()
    }

    fn uncurry(&self) -> UnitFn<Self::Args, Self::Output> {
        let this = self.clone();
        UnitFn::new(move |(argument,): (A,)| this.apply(argument))
    }

    fn of_curried(curried: Self::Curried) -> Self {
        curried
    }

    fn of_uncurried(uncurried: UnitFn<Self::Args, Self::Output>) -> Self {
        Self::new(move |argument| uncurried.apply((argument,)))
    }

    #[inline]
    fn apply_tuple(&self, (argument,): Self::Args) -> Self::Output {
        self.apply(argument)
    }

    fn apply_values<I>(&self, values: I) -> Result<Self::Output, ApplyError>
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut cursor = ArgumentCursor::new(values.into_iter(), Self::ARITY)?;
        let argument = cursor.next::<A>()?;
        Ok(self.apply(argument))
    }

    /// Complete application: one argument is all an arity-1 function takes.
    fn partial(&self, first: Self::First) -> Self::Partial {
        self.apply(first)
    }

    fn and_then<R2, G>(&self, after: G) -> Self::AndThen<R2>
    where
        G: Fn(Self::Output) -> R2 + Send + Sync + 'static,
        R2: 'static,
    {
        let this = self.clone();
        UnitFn::new(move |argument| after(this.apply(argument)))
    }
}

impl<A: 'static> Arguments for (A,) {
    type Function<R: 'static> = UnitFn<A, R>;
}

static_assertions::assert_impl_all!(UnitFn<i32, String>: Clone, Send, Sync, ArityFn);
static_assertions::assert_impl_all!(UnitFn<std::rc::Rc<i32>, std::cell::Cell<i32>>: Send, Sync);
