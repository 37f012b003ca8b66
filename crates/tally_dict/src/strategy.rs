//! `proptest` strategies producing [`Dict`]s and the pair lists they are built from.

use proptest::prelude::*;

use crate::dict::Dict;

/// Short lowercase keys, so generated dicts collide with each other often.
pub fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-e]{1,3}").expect("key regex is valid")
}

/// Pair lists that may repeat keys.
pub fn pairs<S>(value: S, max_len: usize) -> impl Strategy<Value = Vec<(String, S::Value)>>
where
    S: Strategy,
{
    prop::collection::vec((key(), value), 0..=max_len)
}

pub fn dict_of<S>(value: S, max_len: usize) -> impl Strategy<Value = Dict<S::Value>>
where
    S: Strategy,
    S::Value: Clone,
{
    pairs(value, max_len).prop_map(|pairs| Dict::from_list(pairs))
}
