//! The arity-3 function type.

use super::arguments::ArgumentCursor;
use super::{ApplyError, Argument, ArityFn, Arguments, PairFn, UnitFn};
use crate::tuple::Value;

arity_fn! {
    /// A function of three arguments.
    ///
    /// [`partial`](ArityFn::partial) returns a [`PairFn`] over the second and
    /// third arguments, and the curried form is
    /// `UnitFn<A, UnitFn<B, UnitFn<C, R>>>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let concat = TripletFn::new(|a: &'static str, b: &'static str, c: &'static str| {
    ///     format!("{a}{b}{c}")
    /// });
    ///
    /// assert_eq!(concat.apply("Hello", "World", "!"), "HelloWorld!");
    /// assert_eq!(concat.curry().apply("Hello").apply("World").apply("!"), "HelloWorld!");
    /// assert_eq!(concat.partial("Hello").apply("World", "!"), "HelloWorld!");
    /// ```
    ///
    /// Pointwise composition through the tuple boundary:
    ///
    /// ```
    /// use arity_fn::prelude::*;
    ///
    /// let last = TripletFn::new(|_: i32, _: i32, c: i32| c);
    /// let embed = UnitFn::new(|x: i32| (1, 2, x));
    ///
    /// assert_eq!(last.point(embed.into_fn()).apply(8), 8);
    /// ```
    TripletFn(3) => PairFn;
    A first, B second, C third
}

impl<A, B, C> TripletFn<A, B, C, ()> {
    /// Adapts a side-effecting three-argument procedure; the resulting
    /// function returns `()`.
    pub fn of_consumer<Consumer>(consumer: Consumer) -> Self
    where
        Consumer: Fn(A, B, C) + Send + Sync + 'static,
    {
        Self::new(consumer)
    }
}

static_assertions::assert_impl_all!(TripletFn<i32, String, bool, ()>: Clone, Send, Sync, ArityFn);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::value;
    use rstest::rstest;

    fn concat() -> TripletFn<String, String, String, String> {
        TripletFn::new(|a: String, b: String, c: String| a + &b + &c)
    }

    #[rstest]
    #[case("Hello", "World", "!")]
    #[case("", "", "")]
    #[case("a", "", "c")]
    fn test_all_forms_agree(#[case] a: &str, #[case] b: &str, #[case] c: &str) {
        let concat = concat();
        let (a, b, c) = (a.to_string(), b.to_string(), c.to_string());
        let expected = format!("{a}{b}{c}");

        assert_eq!(concat.apply(a.clone(), b.clone(), c.clone()), expected);
        assert_eq!(
            concat.curry().apply(a.clone()).apply(b.clone()).apply(c.clone()),
            expected
        );
        assert_eq!(
            concat.partial(a.clone()).apply(b.clone(), c.clone()),
            expected
        );
        assert_eq!(
            concat.partial(a.clone()).partial(b.clone()).apply(c.clone()),
            expected
        );
        assert_eq!(
            concat.apply_tuple((a.clone(), b.clone(), c.clone())),
            expected
        );
        assert_eq!(concat.uncurry().apply((a, b, c)), expected);
    }

    #[rstest]
    fn test_of_curried_rebuilds_function() {
        let restored = TripletFn::of_curried(concat().curry());

        assert_eq!(
            restored.apply("x".into(), "y".into(), "z".into()),
            "xyz"
        );
    }

    #[rstest]
    fn test_apply_list_reports_first_wrong_position() {
        let result = concat().apply_list(vec![
            value(String::from("a")),
            value(String::from("b")),
            value('c'),
        ]);

        assert_eq!(result, Err(ApplyError::type_mismatch::<String>(2)));
    }

    #[rstest]
    fn test_zip_and_unzip_three_columns() {
        let triples = TripletFn::zip(vec![1, 2, 3], vec!['a', 'b', 'c'], vec![true, false]);
        assert_eq!(triples, vec![(1, 'a', true), (2, 'b', false)]);

        let (numbers, letters, flags) = TripletFn::unzip(triples);
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(letters, vec!['a', 'b']);
        assert_eq!(flags, vec![true, false]);
    }

    #[rstest]
    fn test_zip_with_applies_function() {
        let volume = TripletFn::new(|w: u32, h: u32, d: u32| w * h * d);
        let volumes: Vec<u32> = volume.zip_with(Vec::new, [1, 2], [3, 4], [5, 6, 7]);

        assert_eq!(volumes, vec![15, 48]);
    }

    #[rstest]
    fn test_and_then_keeps_arity() {
        let sum = TripletFn::new(|a: i32, b: i32, c: i32| a + b + c);
        let describe = sum.and_then(|total| format!("sum={total}"));

        assert_eq!(describe.arity(), 3);
        assert_eq!(describe.apply(1, 2, 3), "sum=6");
    }

    #[rstest]
    fn test_debug_reports_arity() {
        assert_eq!(format!("{:?}", concat()), "TripletFn { arity: 3, .. }");
    }
}
