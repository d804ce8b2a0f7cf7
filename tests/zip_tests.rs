//! Integration tests for zip, zip_with and unzip across arities.

use arity_fn::prelude::*;
use proptest::prelude::*;
use rstest::rstest;
use std::collections::{BTreeSet, VecDeque};

#[rstest]
fn test_zip_truncates_to_shorter() {
    assert_eq!(
        PairFn::zip(vec![1, 2, 3], vec!['a', 'b']),
        vec![(1, 'a'), (2, 'b')]
    );
}

#[rstest]
#[case(vec![], vec!['a'])]
#[case(vec![1], vec![])]
fn test_zip_with_empty_side_is_empty(#[case] numbers: Vec<i32>, #[case] letters: Vec<char>) {
    assert!(PairFn::zip(numbers, letters).is_empty());
}

#[rstest]
fn test_zip_leaves_unused_elements_in_borrowed_iterator() {
    let mut letters = vec!['a', 'b', 'c'].into_iter();

    let zipped = PairFn::zip(letters.by_ref(), vec![1]);

    assert_eq!(zipped, vec![('a', 1)]);
    assert_eq!(letters.collect::<Vec<_>>(), vec!['b', 'c']);
}

#[rstest]
fn test_zip_with_stops_before_pulling_past_shortest() {
    let mut firsts = vec![1, 2, 3, 4].into_iter();
    let mut seconds = vec![10, 20, 30].into_iter();
    let add = TripletFn::new(|a: i32, b: i32, c: i32| a + b + c);

    let sums: Vec<i32> = add.zip_with(Vec::new, firsts.by_ref(), seconds.by_ref(), vec![100]);

    assert_eq!(sums, vec![111]);
    assert_eq!(firsts.collect::<Vec<_>>(), vec![2, 3, 4]);
    assert_eq!(seconds.collect::<Vec<_>>(), vec![20, 30]);
}

#[rstest]
fn test_zip_accepts_any_iterables() {
    let keys = BTreeSet::from(["b", "a"]);
    let values = VecDeque::from([1, 2, 3]);

    assert_eq!(PairFn::zip(keys, values), vec![("a", 1), ("b", 2)]);
}

#[rstest]
fn test_zip_with_custom_function_and_container() {
    let distance = PairFn::new(|from: i32, to: i32| (to - from).abs());

    let distances: BTreeSet<i32> =
        distance.zip_with(BTreeSet::new, vec![0, 5, 10, 3], vec![3, 2, 13, 0]);

    assert_eq!(distances, BTreeSet::from([3]));
}

#[rstest]
fn test_zip_with_appends_to_prefilled_container() {
    let join = TripletFn::new(|a: char, b: char, c: char| format!("{a}{b}{c}"));

    let words = join.zip_with(
        || vec![String::from("start")],
        "abc".chars(),
        "def".chars(),
        "ghi".chars(),
    );

    assert_eq!(words, vec!["start", "adg", "beh", "cfi"]);
}

#[rstest]
fn test_unzip_of_decade() {
    let rows = vec![(1, 2, 3, 4, 5, 6, 7, 8, 9, 10), (10, 9, 8, 7, 6, 5, 4, 3, 2, 1)];

    let columns = DecadeFn::unzip(rows);

    assert_eq!(columns.0, vec![1, 10]);
    assert_eq!(columns.4, vec![5, 6]);
    assert_eq!(columns.9, vec![10, 1]);
}

#[rstest]
fn test_with_is_tuple_constructor_for_each_arity() {
    assert_eq!(UnitFn::with().apply(1), (1,));
    assert_eq!(PairFn::with().apply(1, 'x'), (1, 'x'));
    assert_eq!(TripletFn::with().apply(1, 'x', "y"), (1, 'x', "y"));
    assert_eq!(QuartetFn::with().apply(1, 2, 3, 4), (1, 2, 3, 4));
    assert_eq!(QuintetFn::with().apply(1, 2, 3, 4, 5), (1, 2, 3, 4, 5));
}

proptest! {
    #[test]
    fn prop_unzip_inverts_zip_for_equal_lengths(
        pairs in prop::collection::vec((any::<i32>(), any::<char>()), 0..32)
    ) {
        let (numbers, letters): (Vec<i32>, Vec<char>) = pairs.into_iter().unzip();

        let (unzipped_numbers, unzipped_letters) =
            PairFn::unzip(PairFn::zip(numbers.clone(), letters.clone()));

        prop_assert_eq!(unzipped_numbers, numbers);
        prop_assert_eq!(unzipped_letters, letters);
    }

    #[test]
    fn prop_zip_length_is_shortest(
        first in prop::collection::vec(any::<u8>(), 0..16),
        second in prop::collection::vec(any::<u8>(), 0..16),
        third in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let expected = first.len().min(second.len()).min(third.len());
        prop_assert_eq!(TripletFn::zip(first, second, third).len(), expected);
    }
}
