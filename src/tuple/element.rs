//! Positional element access and the projection functions built on it.

/// Access to the element at position `INDEX` of a tuple.
///
/// # Examples
///
/// ```
/// use arity_fn::tuple::Element;
///
/// let pair = (1, String::from("one"));
/// assert_eq!(Element::<1>::element(&pair), "one");
/// assert_eq!(Element::<0>::into_element(pair), 1);
/// ```
pub trait Element<const INDEX: usize> {
    /// The type of the element at `INDEX`.
    type Output;

    /// Borrows the element at `INDEX`.
    fn element(&self) -> &Self::Output;

    /// Moves the element at `INDEX` out of the tuple.
    fn into_element(self) -> Self::Output;
}

macro_rules! impl_element {
    ($elements:tt; $($index:tt => $output:ident),+) => {
        $( impl_element!(@position $elements $index $output); )+
    };
    (@position [$($element:ident),+] $index:tt $output:ident) => {
        impl<$($element),+> Element<$index> for ($($element,)+) {
            type Output = $output;

            #[inline]
            fn element(&self) -> &Self::Output {
                &self.$index
            }

            #[inline]
            fn into_element(self) -> Self::Output {
                self.$index
            }
        }
    };
}

impl_element!([A]; 0 => A);
impl_element!([A, B]; 0 => A, 1 => B);
impl_element!([A, B, C]; 0 => A, 1 => B, 2 => C);
impl_element!([A, B, C, D]; 0 => A, 1 => B, 2 => C, 3 => D);
impl_element!([A, B, C, D, E]; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_element!([A, B, C, D, E, F]; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
impl_element!(
    [A, B, C, D, E, F, G];
    0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G
);
impl_element!(
    [A, B, C, D, E, F, G, H];
    0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H
);
impl_element!(
    [A, B, C, D, E, F, G, H, I];
    0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I
);
impl_element!(
    [A, B, C, D, E, F, G, H, I, J];
    0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J
);

macro_rules! projection {
    ($($(#[$meta:meta])* $name:ident => $index:literal),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<T: Element<$index>>(tuple: T) -> T::Output {
                tuple.into_element()
            }
        )+
    };
}

projection! {
    /// Returns the first element of a tuple.
    ///
    /// Usable directly as an arity-1 function:
    ///
    /// ```
    /// use arity_fn::function::UnitFn;
    /// use arity_fn::tuple::first;
    ///
    /// let key = UnitFn::new(first::<(&str, i32)>);
    /// assert_eq!(key.apply(("a", 1)), "a");
    /// ```
    first => 0,
    /// Returns the second element of a tuple.
    second => 1,
    /// Returns the third element of a tuple.
    third => 2,
    /// Returns the fourth element of a tuple.
    fourth => 3,
    /// Returns the fifth element of a tuple.
    fifth => 4,
    /// Returns the sixth element of a tuple.
    sixth => 5,
    /// Returns the seventh element of a tuple.
    seventh => 6,
    /// Returns the eighth element of a tuple.
    eighth => 7,
    /// Returns the ninth element of a tuple.
    ninth => 8,
    /// Returns the tenth element of a tuple.
    tenth => 9,
}
