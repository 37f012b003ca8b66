#![cfg(feature = "proptest")]

use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;
use tally_maybe::strategy::{maybe_of, weighted_maybe_of};

proptest! {
    #[test]
    fn generated_justs_stay_in_range(m in maybe_of(0u8..10)) {
        prop_assert!(m.into_iter().all(|n| n < 10));
    }

    #[test]
    fn certain_probability_is_always_just(m in weighted_maybe_of(1.0, any::<u16>())) {
        prop_assert!(m.is_just());
    }

    #[test]
    fn zero_probability_is_always_nothing(m in weighted_maybe_of(0.0, any::<u16>())) {
        prop_assert!(m.is_nothing());
    }

    #[test]
    fn out_of_range_probabilities_are_clamped(
        high in weighted_maybe_of(2.5, any::<u16>()),
        low in weighted_maybe_of(-1.0, any::<u16>()),
    ) {
        prop_assert!(high.is_just());
        prop_assert!(low.is_nothing());
    }
}

#[test]
fn interior_probability_mixes_both_variants() {
    let strategy = weighted_maybe_of(0.5, any::<u16>());
    let mut runner = TestRunner::deterministic();
    let mut justs = 0;
    let mut nothings = 0;
    for _ in 0..200 {
        let m = strategy
            .new_tree(&mut runner)
            .expect("value tree")
            .current();
        if m.is_just() {
            justs += 1;
        } else {
            nothings += 1;
        }
    }
    assert!(justs > 0);
    assert!(nothings > 0);
}
