//! Generates an arity function type of two or more arguments.
//!
//! Every such type shares one shape: a shared callable, direct application,
//! positional zip/unzip and the [`ArityFn`](super::ArityFn) capability. The
//! type one arity below is named as the `partial` target, which is also what
//! the curried form recurses into. Arity 1 is written by hand in `unit.rs`
//! because curry and partial application collapse there.
//!
//! Method-level generic parameters use full words so they never collide
//! with the single-letter argument type parameters `A` through `J`.

macro_rules! arity_fn {
    (
        $(#[$meta:meta])*
        $name:ident($arity:literal) => $partial:ident;
        $Head:ident $head:ident $(, $Tail:ident $tail:ident)+
    ) => {
        paste::paste! {
            $(#[$meta])*
            pub struct $name<$Head, $($Tail,)+ R> {
                function: std::sync::Arc<dyn Fn($Head, $($Tail),+) -> R + Send + Sync>,
            }

            impl<$Head, $($Tail,)+ R> Clone for $name<$Head, $($Tail,)+ R> {
                fn clone(&self) -> Self {
                    Self {
                        function: std::sync::Arc::clone(&self.function),
                    }
                }
            }

            impl<$Head, $($Tail,)+ R> std::fmt::Debug for $name<$Head, $($Tail,)+ R> {
                fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    formatter
                        .debug_struct(stringify!($name))
                        .field("arity", &$arity)
                        .finish_non_exhaustive()
                }
            }

            impl<$Head, $($Tail,)+ R> $name<$Head, $($Tail,)+ R> {
                /// Creates the function from a native callable of the same arity.
                pub fn new<Callable>(function: Callable) -> Self
                where
                    Callable: Fn($Head, $($Tail),+) -> R + Send + Sync + 'static,
                {
                    Self {
                        function: std::sync::Arc::new(function),
                    }
                }

                /// Applies this function to the given arguments.
                #[inline]
                pub fn apply(&self, $head: $Head, $($tail: $Tail),+) -> R {
                    (self.function)($head, $($tail),+)
                }

                /// Applies this function to positionally matching elements of
                /// the given collections and collects the results into the
                /// container created by `factory`.
                ///
                /// Stops at the end of the shortest collection; the excess
                /// elements of the longer ones are discarded. Before each step
                /// every iterator's `size_hint` is consulted, so no element is
                /// pulled once a collection reports itself empty. Iterators
                /// without an exact upper bound behave like [`Iterator::zip`]:
                /// the earlier ones may lose one element when a later one ends.
                pub fn zip_with<Container>(
                    &self,
                    factory: impl FnOnce() -> Container,
                    $head: impl IntoIterator<Item = $Head>,
                    $($tail: impl IntoIterator<Item = $Tail>),+
                ) -> Container
                where
                    Container: Extend<R>,
                {
                    let mut [<$head _iterator>] = $head.into_iter();
                    $( let mut [<$tail _iterator>] = $tail.into_iter(); )+
                    let mut result = factory();
                    result.extend(std::iter::from_fn(|| {
                        if [<$head _iterator>].size_hint().1 == Some(0)
                            $(|| [<$tail _iterator>].size_hint().1 == Some(0))+
                        {
                            return None;
                        }
                        Some(self.apply(
                            [<$head _iterator>].next()?,
                            $([<$tail _iterator>].next()?),+
                        ))
                    }));
                    result
                }
            }

            impl<$Head, $($Tail),+> $name<$Head, $($Tail,)+ ($Head, $($Tail),+)> {
                /// The tuple constructor: returns its arguments as a tuple.
                pub fn with() -> Self {
                    Self::new(|$head, $($tail),+| ($head, $($tail),+))
                }

                /// Pairs up positionally matching elements of the given
                /// collections into tuples.
                ///
                /// The result is as long as the shortest collection; the
                /// excess elements of the longer ones are discarded.
                pub fn zip(
                    $head: impl IntoIterator<Item = $Head>,
                    $($tail: impl IntoIterator<Item = $Tail>),+
                ) -> Vec<($Head, $($Tail),+)> {
                    Self::with().zip_with(Vec::new, $head, $($tail),+)
                }

                /// Splits a sequence of tuples into one vector per position,
                /// preserving the order of the input.
                pub fn unzip<Tuples>(tuples: Tuples) -> (Vec<$Head>, $(Vec<$Tail>),+)
                where
                    Tuples: IntoIterator<Item = ($Head, $($Tail),+)>,
                {
                    let tuples = tuples.into_iter();
                    let (capacity, _) = tuples.size_hint();
                    let mut [<$head _values>] = Vec::with_capacity(capacity);
                    $( let mut [<$tail _values>] = Vec::with_capacity(capacity); )+
                    for ($head, $($tail),+) in tuples {
                        [<$head _values>].push($head);
                        $( [<$tail _values>].push($tail); )+
                    }
                    ([<$head _values>], $([<$tail _values>]),+)
                }
            }

            impl<$Head, $($Tail,)+ R> ArityFn for $name<$Head, $($Tail,)+ R>
            where
                $Head: Argument,
                $($Tail: Argument,)+
                R: 'static,
            {
                type Args = ($Head, $($Tail),+);
                type First = $Head;
                type Output = R;
                type Curried = UnitFn<$Head, <$partial<$($Tail,)+ R> as ArityFn>::Curried>;
                type Partial = $partial<$($Tail,)+ R>;
                type AndThen<R2: 'static> = $name<$Head, $($Tail,)+ R2>;

                const ARITY: usize = $arity;

                fn curry(&self) -> Self::Curried {
                    let this = self.clone();
                    UnitFn::new(move |$head: $Head| this.partial($head).curry())
                }

                fn uncurry(&self) -> UnitFn<Self::Args, Self::Output> {
                    let this = self.clone();
                    UnitFn::new(move |arguments: Self::Args| this.apply_tuple(arguments))
                }

                fn of_curried(curried: Self::Curried) -> Self {
                    Self::new(move |$head, $($tail),+| {
                        <$partial<$($Tail,)+ R> as ArityFn>::of_curried(curried.apply($head))
                            .apply($($tail),+)
                    })
                }

                fn of_uncurried(uncurried: UnitFn<Self::Args, Self::Output>) -> Self {
                    Self::new(move |$head, $($tail),+| uncurried.apply(($head, $($tail),+)))
                }

                #[inline]
                fn apply_tuple(&self, ($head, $($tail),+): Self::Args) -> Self::Output {
                    self.apply($head, $($tail),+)
                }

                fn apply_values<Source>(&self, values: Source) -> Result<Self::Output, ApplyError>
                where
                    Source: IntoIterator<Item = Value>,
                    Source::IntoIter: ExactSizeIterator,
                {
                    let mut cursor = ArgumentCursor::new(values.into_iter(), Self::ARITY)?;
                    let $head = cursor.next::<$Head>()?;
                    $( let $tail = cursor.next::<$Tail>()?; )+
                    Ok(self.apply($head, $($tail),+))
                }

                fn partial(&self, $head: $Head) -> Self::Partial {
                    let this = self.clone();
                    $partial::new(move |$($tail),+| this.apply($head.clone(), $($tail),+))
                }

                fn and_then<R2, After>(&self, after: After) -> Self::AndThen<R2>
                where
                    After: Fn(Self::Output) -> R2 + Send + Sync + 'static,
                    R2: 'static,
                {
                    let this = self.clone();
                    $name::new(move |$head, $($tail),+| after(this.apply($head, $($tail),+)))
                }
            }

            impl<$Head, $($Tail),+> Arguments for ($Head, $($Tail),+)
            where
                $Head: Argument,
                $($Tail: Argument,)+
            {
                type Function<R: 'static> = $name<$Head, $($Tail,)+ R>;
            }
        }
    };
}
