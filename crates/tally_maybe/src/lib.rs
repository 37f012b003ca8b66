#![deny(clippy::unwrap_used)]
//! `Maybe<T>`: a value that is either `Just` present or `Nothing`.
//!
//! Every binary combinator exists twice: fully applied at the crate root
//! (`map(f, m)`) and curried in [`curried`] (`curried::map(f)(m)`).

pub mod curried;
mod error;
#[cfg(feature = "proptest")]
pub mod strategy;

pub use error::MaybeError;

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Just(T),
    Nothing,
}

pub use self::Maybe::{Just, Nothing};

impl<T> Maybe<T> {
    /// Converts an ordinary optional value; `None` becomes `Nothing`.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Just(value),
            None => Nothing,
        }
    }

    pub fn pure(value: T) -> Self {
        Just(value)
    }

    pub fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Just(value) => Just(value),
            Nothing => Nothing,
        }
    }

    pub fn map<B>(self, f: impl FnOnce(T) -> B) -> Maybe<B> {
        match self {
            Just(value) => Just(f(value)),
            Nothing => Nothing,
        }
    }

    /// Monadic bind. `f` is not called when `self` is `Nothing`.
    pub fn and_then<B>(self, f: impl FnOnce(T) -> Maybe<B>) -> Maybe<B> {
        match self {
            Just(value) => f(value),
            Nothing => Nothing,
        }
    }

    pub fn with_default(self, default: T) -> T {
        match self {
            Just(value) => value,
            Nothing => default,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Just(value) => Some(value),
            Nothing => None,
        }
    }

    /// Leaves the `Maybe` world for `?`-based code.
    pub fn into_result(self) -> Result<T, MaybeError> {
        match self {
            Just(value) => Ok(value),
            Nothing => Err(MaybeError::Nothing),
        }
    }
}

impl<F> Maybe<F> {
    /// Applicative apply: runs the wrapped function only if both sides are `Just`.
    pub fn ap<A, B>(self, m: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, m) {
            (Just(f), Just(value)) => Just(f(value)),
            _ => Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Nothing
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Just(value) => f.debug_tuple("Just").field(value).finish(),
            Nothing => f.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// ----------------------------------------------------------------------------
// Fully applied forms

pub fn from_nullable<T>(value: Option<T>) -> Maybe<T> {
    Maybe::from_nullable(value)
}

pub fn pure<T>(value: T) -> Maybe<T> {
    Just(value)
}

pub fn map<A, B>(f: impl FnOnce(A) -> B, m: Maybe<A>) -> Maybe<B> {
    m.map(f)
}

pub fn and_then<A, B>(f: impl FnOnce(A) -> Maybe<B>, m: Maybe<A>) -> Maybe<B> {
    m.and_then(f)
}

pub fn with_default<T>(default: T, m: Maybe<T>) -> T {
    m.with_default(default)
}

pub fn ap<A, B, F>(f: Maybe<F>, m: Maybe<A>) -> Maybe<B>
where
    F: FnOnce(A) -> B,
{
    f.ap(m)
}
