//! The insertion-ordered [`Collection`] container

use crate::error::CollectionError;
use flow_utils::{short_type_name, Type};
use indexmap::IndexMap;
use rand::Rng;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

/// Insertion-ordered map with convenience helpers.
///
/// Iteration, `first`/`last` and every helper that produces entries follow
/// insertion order (or the order established by the last sort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<K: Hash + Eq, V> {
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> Default for Collection<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> Collection<K, V> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Consume the collection and return the underlying map
    pub fn into_inner(self) -> IndexMap<K, V> {
        self.entries
    }

    /// The first entry, if any
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first()
    }

    /// Up to `amount` entries from the front, in order.
    ///
    /// A negative amount takes from the back instead, see [`Collection::last_n`].
    pub fn first_n(&self, amount: isize) -> Vec<(&K, &V)> {
        let count = amount.unsigned_abs();
        if amount < 0 {
            return self.entries.iter().rev().take(count).collect();
        }

        self.entries.iter().take(count).collect()
    }

    /// The last entry, if any
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last()
    }

    /// Up to `amount` entries from the back, most recent first.
    ///
    /// A negative amount takes from the front instead.
    pub fn last_n(&self, amount: isize) -> Vec<(&K, &V)> {
        let count = amount.unsigned_abs();
        if amount < 0 {
            return self.entries.iter().take(count).collect();
        }

        self.entries.iter().rev().take(count).collect()
    }

    /// All values in order
    pub fn array(&self) -> Vec<&V> {
        self.entries.values().collect()
    }

    /// Whether any entry satisfies `predicate`
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.entries.iter().any(|(k, v)| predicate(v, k))
    }

    /// Calls `f` for every entry and returns the collection for chaining
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&V, &K),
    {
        for (k, v) in &self.entries {
            f(v, k);
        }

        self
    }

    /// Returns the value stored under `key`, inserting `default(&key)` first
    /// when the key is absent.
    pub fn ensure<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce(&K) -> V,
    {
        self.entries.entry(key).or_insert_with_key(default)
    }

    /// A uniformly random value, `None` when empty
    pub fn random(&self) -> Option<&V> {
        self.random_entry().map(|(_, v)| v)
    }

    /// A uniformly random key, `None` when empty
    pub fn random_key(&self) -> Option<&K> {
        self.random_entry().map(|(k, _)| k)
    }

    /// A uniformly random entry, `None` when empty
    pub fn random_entry(&self) -> Option<(&K, &V)> {
        if self.entries.is_empty() {
            return None;
        }

        let index = rand::thread_rng().gen_range(0..self.entries.len());
        self.entries.get_index(index)
    }

    /// Removes every entry matching `predicate` and returns how many were removed
    pub fn sweep<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&V, &K) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|k, v| !predicate(v, k));
        before - self.entries.len()
    }

    /// The first value matching `predicate`
    pub fn find<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.entries
            .iter()
            .find(|(k, v)| predicate(v, k))
            .map(|(_, v)| v)
    }

    /// Folds every entry into an accumulator
    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V, &K) -> A,
    {
        self.entries.iter().fold(init, |acc, (k, v)| f(acc, v, k))
    }

    /// Maps every entry to a new value, in order
    pub fn map<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&V, &K) -> T,
    {
        self.entries.iter().map(|(k, v)| f(v, k)).collect()
    }

    /// Sorts the entries in place with `compare(first_value, second_value,
    /// first_key, second_key)`. The sort is stable.
    pub fn sort_by<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&V, &V, &K, &K) -> Ordering,
    {
        self.entries
            .sort_by(|k1, v1, k2, v2| compare(v1, v2, k1, k2));
        self
    }

    /// Sorts the entries in place by value, ascending
    pub fn sort(&mut self) -> &mut Self
    where
        V: Ord,
    {
        self.sort_by(|a, b, _, _| a.cmp(b))
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Collection<K, V> {
    /// A new collection with the entries matching `predicate`
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.entries
            .iter()
            .filter(|(k, v)| predicate(v, k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Splits the entries into `(matching, rest)`
    pub fn partition<F>(&self, mut predicate: F) -> (Self, Self)
    where
        F: FnMut(&V, &K) -> bool,
    {
        let mut pass = Self::new();
        let mut fail = Self::new();
        for (k, v) in &self.entries {
            let side = if predicate(v, k) { &mut pass } else { &mut fail };
            side.entries.insert(k.clone(), v.clone());
        }

        (pass, fail)
    }

    /// Entries between `from` and `end` (exclusive).
    ///
    /// Negative positions count from the back; `None` for `end` means the
    /// end of the collection. Out-of-range positions are clamped.
    pub fn slice(&self, from: isize, end: Option<isize>) -> Self {
        let len = self.entries.len();
        let start = clamp_position(from, len);
        let stop = end.map_or(len, |end| clamp_position(end, len));
        if start >= stop {
            return Self::new();
        }

        self.entries
            .iter()
            .skip(start)
            .take(stop - start)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// A sorted copy, see [`Collection::sort_by`]
    pub fn sorted_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&V, &V, &K, &K) -> Ordering,
    {
        let mut copy = self.clone();
        copy.sort_by(compare);
        copy
    }

    /// A copy sorted by value, ascending
    pub fn sorted(&self) -> Self
    where
        V: Ord,
    {
        self.sorted_by(|a, b, _, _| a.cmp(b))
    }
}

fn clamp_position(position: isize, len: usize) -> usize {
    if position < 0 {
        len.saturating_sub(position.unsigned_abs())
    } else {
        position.unsigned_abs().min(len)
    }
}

impl<V> Collection<usize, V> {
    /// Build a collection keyed by each value's position
    pub fn from_values(values: Vec<V>) -> Self {
        values.into_iter().enumerate().collect()
    }
}

impl Collection<String, Value> {
    /// Build a collection from untyped JSON input.
    ///
    /// Accepts an object (its fields become entries), an array of
    /// `[key, value]` pairs, or any other non-empty array (keyed by position).
    /// Non-string keys are stored in their JSON text form.
    pub fn from_json(value: Value) -> Result<Self, CollectionError> {
        match value {
            Value::Object(fields) => Ok(fields.into_iter().collect()),
            Value::Array(items) if items.first().is_some_and(Value::is_array) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Array(pair) if !pair.is_empty() => {
                        let mut pair = pair.into_iter();
                        let key = pair.next().map(key_text).unwrap_or_default();
                        Ok((key, pair.next().unwrap_or(Value::Null)))
                    }
                    _ => Err(CollectionError::InvalidEntry(index)),
                })
                .collect(),
            Value::Array(items) if !items.is_empty() => Ok(items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect()),
            other => Err(CollectionError::UnsupportedInput(Type::resolve(&other))),
        }
    }
}

fn key_text(key: Value) -> String {
    match key {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

impl<K: Hash + Eq, V> Deref for Collection<K, V> {
    type Target = IndexMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<K: Hash + Eq, V> DerefMut for Collection<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entries
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Collection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for Collection<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K: Hash + Eq, V> From<IndexMap<K, V>> for Collection<K, V> {
    fn from(entries: IndexMap<K, V>) -> Self {
        Self { entries }
    }
}

impl<K: Hash + Eq, V> IntoIterator for Collection<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for &'a Collection<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V> fmt::Display for Collection<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("Collection<any, any>");
        }

        write!(f, "Collection<{}, {}>", short_type_name::<K>(), short_type_name::<V>())
    }
}
