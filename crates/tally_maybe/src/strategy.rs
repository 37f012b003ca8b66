//! `proptest` strategies for [`Maybe`] values.

use proptest::prelude::*;

use crate::Maybe;

/// Generates `Just` from `inner` about half the time and `Nothing` otherwise.
pub fn maybe_of<S>(inner: S) -> impl Strategy<Value = Maybe<S::Value>>
where
    S: Strategy,
{
    proptest::option::of(inner).prop_map(Maybe::from_nullable)
}

/// Like [`maybe_of`], with `Just` produced with probability `just_probability`.
///
/// `1.0` or more yields only `Just`, `0.0` or less (and NaN) only `Nothing`.
pub fn weighted_maybe_of<S>(just_probability: f64, inner: S) -> BoxedStrategy<Maybe<S::Value>>
where
    S: Strategy + 'static,
    S::Value: 'static,
{
    if just_probability >= 1.0 {
        inner.prop_map(Maybe::Just).boxed()
    } else if just_probability > 0.0 {
        proptest::option::weighted(just_probability, inner)
            .prop_map(Maybe::from_nullable)
            .boxed()
    } else {
        inner.prop_map(|_| Maybe::Nothing).boxed()
    }
}
