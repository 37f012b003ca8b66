//! Curried builders.
//!
//! Each function takes every argument except the final `Dict` and returns a
//! closure awaiting it. The closures are `Fn`, so one partially applied step
//! can be fed any number of dicts:
//!
//! ```
//! use tally_dict::{curried, Dict};
//!
//! let add_one = curried::insert("one", 1);
//! let a = add_one(&Dict::empty());
//! let b = add_one(&Dict::singleton("two", 2));
//! assert_eq!(a.size(), 1);
//! assert_eq!(b.size(), 2);
//! ```

use tally_maybe::Maybe;

use crate::dict::{Dict, Key};

/// `singleton(key)` awaits the value rather than a `Dict`.
pub fn singleton<T: Clone>(key: &str) -> impl Fn(T) -> Dict<T> + use<T> {
    let key = Key::from(key);
    move |value| Dict::singleton(key.clone(), value)
}

pub fn get<T: Clone>(key: &str) -> impl Fn(&Dict<T>) -> Maybe<T> + use<T> {
    let key = Key::from(key);
    move |dict| dict.get(&key)
}

pub fn member<T: Clone>(key: &str) -> impl Fn(&Dict<T>) -> bool + use<T> {
    let key = Key::from(key);
    move |dict| dict.member(&key)
}

pub fn insert<T: Clone>(key: &str, value: T) -> impl Fn(&Dict<T>) -> Dict<T> + use<T> {
    let key = Key::from(key);
    move |dict| dict.insert(key.clone(), value.clone())
}

pub fn update<T, F>(key: &str, transform: F) -> impl Fn(&Dict<T>) -> Dict<T> + use<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    let key = Key::from(key);
    move |dict| dict.update(&key, &transform)
}

pub fn remove<T: Clone>(key: &str) -> impl Fn(&Dict<T>) -> Dict<T> + use<T> {
    let key = Key::from(key);
    move |dict| dict.remove(&key)
}

pub fn map<A, B, F>(f: F) -> impl Fn(&Dict<A>) -> Dict<B>
where
    A: Clone,
    B: Clone,
    F: Fn(&str, &A) -> B,
{
    move |dict| dict.map(&f)
}

pub fn filter<T, P>(predicate: P) -> impl Fn(&Dict<T>) -> Dict<T>
where
    T: Clone,
    P: Fn(&str, &T) -> bool,
{
    move |dict| dict.filter(&predicate)
}

/// Both `f` and `initial` are captured; each call starts again from a clone
/// of `initial`.
pub fn reduce<A, B, F>(f: F, initial: B) -> impl Fn(&Dict<A>) -> B
where
    A: Clone,
    B: Clone,
    F: Fn(&str, &A, B) -> B,
{
    move |dict| dict.reduce(&f, initial.clone())
}

/// `union(first)` awaits the second dict; `first` still wins collisions.
pub fn union<T: Clone>(first: &Dict<T>) -> impl Fn(&Dict<T>) -> Dict<T> + use<T> {
    let first = first.clone();
    move |second| first.union(second)
}
