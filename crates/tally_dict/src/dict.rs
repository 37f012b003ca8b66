use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use im::{HashMap as ImHashMap, OrdMap as ImOrdMap};
use tally_maybe::Maybe;

/// Dictionary keys. Cloning a key is a reference-count bump.
pub type Key = Arc<str>;

#[derive(Clone)]
struct Slot<T> {
    seq: u64,
    value: T,
}

/// An immutable dictionary from string keys to `T`.
///
/// Every transformation returns a new `Dict` and leaves `self` untouched.
/// Storage is persistent, so unchanged parts are shared between the old and
/// the new value, but nothing shared is ever mutated.
///
/// Iteration follows insertion order. Overwriting a key keeps its position;
/// removing it forgets the position.
#[derive(Clone)]
pub struct Dict<T> {
    entries: ImHashMap<Key, Slot<T>>,
    // Exactly the keys of `entries`, indexed by their slot's `seq`.
    order: ImOrdMap<u64, Key>,
    next_seq: u64,
}

impl<T: Clone> Dict<T> {
    pub fn empty() -> Self {
        Dict {
            entries: ImHashMap::new(),
            order: ImOrdMap::new(),
            next_seq: 0,
        }
    }

    pub fn singleton(key: impl Into<Key>, value: T) -> Self {
        let mut out = Self::empty();
        out.put(key.into(), value);
        out
    }

    /// Copies every entry of `map`. Later changes to `map` are not seen.
    pub fn from_hash_map<S: BuildHasher>(map: &HashMap<String, T, S>) -> Self {
        let mut out = Self::empty();
        for (key, value) in map {
            out.put(Key::from(key.as_str()), value.clone());
        }
        out
    }

    /// Folds `pairs` left to right; a repeated key keeps the last value.
    pub fn from_list<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut out = Self::empty();
        let mut overwritten = 0usize;
        for (key, value) in pairs {
            if out.put(key.into(), value) {
                overwritten += 1;
            }
        }
        if overwritten > 0 {
            tracing::trace!(overwritten, size = out.size(), "dict.fromList collapsed repeated keys");
        }
        out
    }

    pub fn get(&self, key: &str) -> Maybe<T> {
        Maybe::from_nullable(self.entries.get(key).map(|slot| slot.value.clone()))
    }

    pub fn member(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> Vec<Key> {
        self.order.values().cloned().collect()
    }

    /// Values in the same order as [`Dict::keys`].
    pub fn values(&self) -> Vec<T> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    pub fn to_list(&self) -> Vec<(Key, T)> {
        self.order
            .values()
            .filter_map(|key| {
                self.entries
                    .get(key)
                    .map(|slot| (key.clone(), slot.value.clone()))
            })
            .collect()
    }

    /// A defensive copy; writing to it does not affect `self`.
    pub fn to_hash_map(&self) -> HashMap<String, T> {
        self.iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            order: self.order.values(),
            entries: &self.entries,
        }
    }

    pub fn insert(&self, key: impl Into<Key>, value: T) -> Self {
        let mut out = self.clone();
        out.put(key.into(), value);
        out
    }

    /// Replaces the value under `key` with `transform(old)`. Missing keys are a no-op.
    pub fn update(&self, key: &str, transform: impl FnOnce(&T) -> T) -> Self {
        let Some(slot) = self.entries.get(key) else {
            tracing::trace!(key, "dict.update on missing key");
            return self.clone();
        };
        let updated = Slot {
            seq: slot.seq,
            value: transform(&slot.value),
        };
        let mut out = self.clone();
        out.entries.insert(Key::from(key), updated);
        out
    }

    pub fn remove(&self, key: &str) -> Self {
        let mut out = self.clone();
        match out.entries.remove(key) {
            Some(slot) => {
                out.order.remove(&slot.seq);
            }
            None => tracing::trace!(key, "dict.remove on missing key"),
        }
        out
    }

    /// Applies `f` to every entry, in iteration order. Keys and order are kept.
    pub fn map<B: Clone>(&self, mut f: impl FnMut(&str, &T) -> B) -> Dict<B> {
        let mut entries = ImHashMap::new();
        for (seq, key) in self.order.iter() {
            let value = f(&**key, &self.entries[key].value);
            entries.insert(key.clone(), Slot { seq: *seq, value });
        }
        Dict {
            entries,
            order: self.order.clone(),
            next_seq: self.next_seq,
        }
    }

    pub fn filter(&self, mut predicate: impl FnMut(&str, &T) -> bool) -> Self {
        let mut out = self.clone();
        for (seq, key) in self.order.iter() {
            if !predicate(&**key, &self.entries[key].value) {
                out.entries.remove(key);
                out.order.remove(seq);
            }
        }
        out
    }

    /// Folds over the entries in iteration order, starting from `initial`.
    pub fn reduce<B>(&self, mut f: impl FnMut(&str, &T, B) -> B, initial: B) -> B {
        let mut acc = initial;
        for (key, value) in self.iter() {
            acc = f(key, value, acc);
        }
        acc
    }

    /// Entries of both dicts. On a key collision the value from `self` wins.
    ///
    /// The result iterates `other`'s entries first, then the keys that only
    /// `self` has, in `self`'s order.
    pub fn union(&self, other: &Dict<T>) -> Self {
        let mut out = other.clone();
        let mut collisions = 0usize;
        for (key, value) in self.iter() {
            if out.put(Key::from(key), value.clone()) {
                collisions += 1;
            }
        }
        if collisions > 0 {
            tracing::trace!(collisions, "dict.union resolved collisions in favour of the first dict");
        }
        out
    }

    /// Writes into a dict this function already owns exclusively. Returns
    /// `true` when `key` was present and its value overwritten.
    fn put(&mut self, key: Key, value: T) -> bool {
        match self.entries.get_mut(&key) {
            Some(slot) => {
                slot.value = value;
                true
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.order.insert(seq, key.clone());
                self.entries.insert(key, Slot { seq, value });
                false
            }
        }
    }
}

impl<T: Clone> Default for Dict<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Content equality: same keys with equal values, regardless of order.
impl<T: Clone + PartialEq> PartialEq for Dict<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.entries.iter().all(|(key, slot)| {
                other
                    .entries
                    .get(key)
                    .is_some_and(|theirs| theirs.value == slot.value)
            })
    }
}

impl<T: Clone + Eq> Eq for Dict<T> {}

impl<T: Clone + fmt::Debug> fmt::Debug for Dict<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<Key>, T: Clone> FromIterator<(K, T)> for Dict<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}

impl<T: Clone, S: BuildHasher> From<HashMap<String, T, S>> for Dict<T> {
    fn from(map: HashMap<String, T, S>) -> Self {
        Self::from_hash_map(&map)
    }
}

impl<T: Clone> From<&Dict<T>> for HashMap<String, T> {
    fn from(dict: &Dict<T>) -> Self {
        dict.to_hash_map()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Dict<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ----------------------------------------------------------------------------

/// Borrowing iterator over a [`Dict`], in insertion order.
pub struct Iter<'a, T> {
    order: im::ordmap::Values<'a, u64, Key>,
    entries: &'a ImHashMap<Key, Slot<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.order.next()?;
        let slot = self.entries.get(key)?;
        Some((&**key, &slot.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}
