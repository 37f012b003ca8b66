#![deny(clippy::unwrap_used)]
//! An immutable, string-keyed dictionary.
//!
//! Operations come in three shapes that always agree:
//!
//! - methods: `dict.insert("k", 1)`
//! - fully applied functions, dict last: `tally_dict::insert("k", 1, &dict)`
//! - curried builders: `tally_dict::curried::insert("k", 1)(&dict)`
//!
//! Lookups return [`Maybe`]; nothing here fails on a missing key.

pub mod curried;
mod dict;
mod ops;
pub mod pipe;
#[cfg(feature = "proptest")]
pub mod strategy;

pub use dict::{Dict, Iter, Key};
pub use ops::{
    empty, filter, from_hash_map, from_list, get, insert, is_empty, keys, map, member, reduce,
    remove, singleton, size, to_hash_map, to_list, union, update, values,
};
pub use pipe::{Pipe, Pipeline};
pub use tally_maybe::{Just, Maybe, Nothing};
