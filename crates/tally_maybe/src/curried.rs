//! Curried forms of the binary combinators.
//!
//! Each function takes the first argument and returns a closure awaiting the
//! `Maybe`, so steps can be prepared once and applied to many values.

use crate::{Just, Maybe, Nothing};

pub fn map<A, B>(f: impl Fn(A) -> B) -> impl Fn(Maybe<A>) -> Maybe<B> {
    move |m| m.map(&f)
}

pub fn and_then<A, B>(f: impl Fn(A) -> Maybe<B>) -> impl Fn(Maybe<A>) -> Maybe<B> {
    move |m| m.and_then(&f)
}

pub fn with_default<T: Clone>(default: T) -> impl Fn(Maybe<T>) -> T {
    move |m| match m {
        Just(value) => value,
        Nothing => default.clone(),
    }
}

pub fn ap<A, B, F>(f: Maybe<F>) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> B,
{
    move |m| match (&f, m) {
        (Just(f), Just(value)) => Just(f(value)),
        _ => Nothing,
    }
}
