#![cfg(feature = "compose")]
//! Property-based tests for the composition laws.
//!
//! ## Identity Laws
//! - **Left Identity**: `identity().compose(f) == f`
//! - **Right Identity**: `and_then(f, identity()) == f`
//!
//! ## Flip Laws
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f).apply(b, a) == f.apply(a, b)`
//!
//! ## Curry Laws
//! - **Round trip**: `uncurry(curry(f)) == f`
//! - **Equivalence**: `curry(f).apply(a).apply(b) == f.apply((a, b))`

use arity_fn::compose::{and_then, constant, curry, flip, identity, uncurry};
use arity_fn::function::{PairFn, UnitFn};
use proptest::prelude::*;

fn scale() -> UnitFn<i32, i32> {
    UnitFn::new(|n: i32| n.wrapping_mul(3))
}

fn subtract() -> PairFn<i32, i32, i32> {
    PairFn::new(i32::wrapping_sub)
}

// =============================================================================
// Identity Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_left_identity(x in any::<i32>()) {
        let composed = identity().compose(scale().into_fn());
        prop_assert_eq!(composed.apply(x), scale().apply(x));
    }

    #[test]
    fn prop_right_identity(x in any::<i32>()) {
        let composed = and_then(scale(), identity::<i32>().into_fn());
        prop_assert_eq!(composed.apply(x), scale().apply(x));
    }

    #[test]
    fn prop_constant_ignores_argument(value in any::<i64>(), x in any::<i32>()) {
        let always = constant(value);
        prop_assert_eq!(always.apply(x), value);
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_double_flip_identity(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(flip(flip(subtract())).apply(a, b), subtract().apply(a, b));
    }

    #[test]
    fn prop_flip_definition(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(flip(subtract()).apply(b, a), subtract().apply(a, b));
    }
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_curry_round_trip(a in any::<i32>(), b in any::<i32>()) {
        let on_pairs = UnitFn::new(|(a, b): (i32, i32)| a.wrapping_mul(b));
        let restored = uncurry::<(i32, i32), i32>(curry(on_pairs.clone()));
        prop_assert_eq!(restored.apply((a, b)), on_pairs.apply((a, b)));
    }

    #[test]
    fn prop_curry_equivalence(a in any::<i32>(), b in any::<i32>(), c in any::<u8>()) {
        let on_triples = UnitFn::new(|(a, b, c): (i32, i32, u8)| {
            a.wrapping_add(b).wrapping_mul(i32::from(c))
        });
        prop_assert_eq!(
            curry(on_triples.clone()).apply(a).apply(b).apply(c),
            on_triples.apply((a, b, c))
        );
    }
}
