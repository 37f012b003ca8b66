use proptest::prelude::*;
use tally_maybe::{self as maybe, curried, Maybe};

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::from_nullable)
}

fn half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 {
        Maybe::Just(n / 2)
    } else {
        Maybe::Nothing
    }
}

proptest! {
    #[test]
    fn map_identity(m in any_maybe()) {
        prop_assert_eq!(maybe::map(|n| n, m), m);
    }

    #[test]
    fn map_composition(m in any_maybe()) {
        let f = |n: i32| n.wrapping_mul(3);
        let g = |n: i32| n.wrapping_sub(7);
        prop_assert_eq!(m.map(f).map(g), m.map(|n| g(f(n))));
    }

    #[test]
    fn and_then_left_identity(n in any::<i32>()) {
        prop_assert_eq!(maybe::pure(n).and_then(half), half(n));
    }

    #[test]
    fn and_then_right_identity(m in any_maybe()) {
        prop_assert_eq!(m.and_then(maybe::pure), m);
    }

    #[test]
    fn ap_matches_map(m in any_maybe()) {
        let f: fn(i32) -> i32 = |n| n.wrapping_add(1);
        prop_assert_eq!(maybe::ap(maybe::pure(f), m), maybe::map(f, m));
    }

    #[test]
    fn with_default_agrees_with_option(m in any_maybe(), fallback in any::<i32>()) {
        prop_assert_eq!(maybe::with_default(fallback, m), m.into_option().unwrap_or(fallback));
    }

    #[test]
    fn curried_forms_match_direct(m in any_maybe(), fallback in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(curried::map(f)(m), maybe::map(f, m));
        prop_assert_eq!(curried::and_then(half)(m), maybe::and_then(half, m));
        prop_assert_eq!(curried::with_default(fallback)(m), maybe::with_default(fallback, m));
        prop_assert_eq!(curried::ap(maybe::pure(f))(m), maybe::ap(maybe::pure(f), m));
    }
}
