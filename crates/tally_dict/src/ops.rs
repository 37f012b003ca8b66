//! Fully applied forms, with the `Dict` as the last argument.
//!
//! These read the same way as the curried builders in [`crate::curried`]
//! with every argument supplied at once.

use std::collections::HashMap;
use std::hash::BuildHasher;

use tally_maybe::Maybe;

use crate::dict::{Dict, Key};

pub fn empty<T: Clone>() -> Dict<T> {
    Dict::empty()
}

pub fn singleton<T: Clone>(key: impl Into<Key>, value: T) -> Dict<T> {
    Dict::singleton(key, value)
}

pub fn from_hash_map<T: Clone, S: BuildHasher>(map: &HashMap<String, T, S>) -> Dict<T> {
    Dict::from_hash_map(map)
}

pub fn from_list<T, K, I>(pairs: I) -> Dict<T>
where
    T: Clone,
    K: Into<Key>,
    I: IntoIterator<Item = (K, T)>,
{
    Dict::from_list(pairs)
}

pub fn get<T: Clone>(key: &str, dict: &Dict<T>) -> Maybe<T> {
    dict.get(key)
}

pub fn member<T: Clone>(key: &str, dict: &Dict<T>) -> bool {
    dict.member(key)
}

pub fn is_empty<T: Clone>(dict: &Dict<T>) -> bool {
    dict.is_empty()
}

pub fn size<T: Clone>(dict: &Dict<T>) -> usize {
    dict.size()
}

pub fn keys<T: Clone>(dict: &Dict<T>) -> Vec<Key> {
    dict.keys()
}

pub fn values<T: Clone>(dict: &Dict<T>) -> Vec<T> {
    dict.values()
}

pub fn to_hash_map<T: Clone>(dict: &Dict<T>) -> HashMap<String, T> {
    dict.to_hash_map()
}

pub fn to_list<T: Clone>(dict: &Dict<T>) -> Vec<(Key, T)> {
    dict.to_list()
}

pub fn insert<T: Clone>(key: impl Into<Key>, value: T, dict: &Dict<T>) -> Dict<T> {
    dict.insert(key, value)
}

pub fn update<T: Clone>(key: &str, transform: impl FnOnce(&T) -> T, dict: &Dict<T>) -> Dict<T> {
    dict.update(key, transform)
}

pub fn remove<T: Clone>(key: &str, dict: &Dict<T>) -> Dict<T> {
    dict.remove(key)
}

pub fn map<A, B>(f: impl FnMut(&str, &A) -> B, dict: &Dict<A>) -> Dict<B>
where
    A: Clone,
    B: Clone,
{
    dict.map(f)
}

pub fn filter<T: Clone>(predicate: impl FnMut(&str, &T) -> bool, dict: &Dict<T>) -> Dict<T> {
    dict.filter(predicate)
}

pub fn reduce<A: Clone, B>(f: impl FnMut(&str, &A, B) -> B, initial: B, dict: &Dict<A>) -> B {
    dict.reduce(f, initial)
}

/// `first` wins on key collisions.
pub fn union<T: Clone>(first: &Dict<T>, second: &Dict<T>) -> Dict<T> {
    first.union(second)
}
