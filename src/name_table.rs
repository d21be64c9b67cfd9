// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::collections::HashMap;
use std::slice;

use crate::error::NameError;
use crate::key::{KeyType, Name};

/// The names of the entries along one axis.
///
/// A name table maps each name to its 0-based position along the axis, and
/// remembers the order of insertion, which is also the order of positions.
///
/// Tables given by the user hold distinct names of a single key type. Tables
/// derived by selecting from another table may repeat a name (selecting the
/// same name twice); looking up a repeated name yields its first position.
///
/// A table of default names (`"1"`, `"2"`, ...) has no fixed key type yet:
/// the first [`rebuild`](NameTable::rebuild) fixes it.
#[derive(Clone, Debug)]
pub struct NameTable<K> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
    key_type: Option<KeyType>,
}

impl<K: Name> NameTable<K> {
    /// Create a table of default names `"1"..="n"` for an axis of length `n`.
    pub fn positional(n: usize) -> Self {
        Self::derived((0..n).map(K::positional).collect(), None)
    }

    /// Create a table from distinct names of one key type.
    ///
    /// ```
    /// use ndarray_named::{Key, NameTable};
    ///
    /// let rows = NameTable::from_keys(vec![Key::from("one"), Key::from("two")]).unwrap();
    /// assert_eq!(rows.lookup(&Key::from("two")), Ok(1));
    /// ```
    pub fn from_keys(keys: Vec<K>) -> Result<Self, NameError> {
        let key_type = check_type(&keys, None)?;
        let index = unique_index(&keys)?;
        Ok(NameTable {
            keys,
            index,
            key_type,
        })
    }

    /// Create a table without checking names for uniqueness.
    pub(crate) fn derived(keys: Vec<K>, key_type: Option<KeyType>) -> Self {
        let mut index = HashMap::with_capacity(keys.len());
        for (position, key) in keys.iter().enumerate() {
            index.entry(key.clone()).or_insert(position);
        }
        NameTable {
            keys,
            index,
            key_type,
        }
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Return the fixed key type, or `None` for default names.
    pub fn key_type(&self) -> Option<KeyType> {
        self.key_type
    }

    /// The key type new names must have: the fixed one, or the type of the
    /// names already present.
    fn effective_type(&self) -> Option<KeyType> {
        self.key_type
            .or_else(|| self.keys.first().map(Name::key_type))
    }

    /// Return the names in position order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Return the name at `position`.
    pub fn key(&self, position: usize) -> Option<&K> {
        self.keys.get(position)
    }

    /// Return `true` if `key` names an entry.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Return the position of `key`, if present.
    pub fn get(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Return the position of `key`.
    ///
    /// **Errors** with `UnknownName` if the key is absent.
    pub fn lookup(&self, key: &K) -> Result<usize, NameError> {
        self.get(key).ok_or_else(|| NameError::UnknownName {
            axis: None,
            keys: vec![key.to_string()],
        })
    }

    /// Return the positions of `keys`, in the order given.
    ///
    /// Keys may repeat. **Errors** with `UnknownName` listing every absent key.
    pub fn positions(&self, keys: &[K]) -> Result<Vec<usize>, NameError> {
        let mut missing = Vec::new();
        let positions = keys
            .iter()
            .filter_map(|key| {
                let position = self.get(key);
                if position.is_none() {
                    missing.push(key.to_string());
                }
                position
            })
            .collect();
        if missing.is_empty() {
            Ok(positions)
        } else {
            Err(NameError::UnknownName {
                axis: None,
                keys: missing,
            })
        }
    }

    /// Iterate over `(name, position)` pairs in position order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.keys.iter().enumerate(),
        }
    }

    /// Rename the entry at `position` to `new_key`.
    ///
    /// **Errors** with `OutOfRange` if there is no such entry, `TypeMismatch`
    /// if `new_key` is not of the table's key type, `DuplicateKey` if it is
    /// present at another position. Renaming an entry to its own name does
    /// nothing.
    pub fn rename_at(&mut self, position: usize, new_key: K) -> Result<(), NameError> {
        if position >= self.len() {
            return Err(NameError::OutOfRange {
                axis: None,
                position: position as isize,
                len: self.len(),
            });
        }
        if self.keys[position] == new_key {
            return Ok(());
        }
        if let Some(expected) = self.effective_type() {
            let found = new_key.key_type();
            if found != expected {
                return Err(NameError::TypeMismatch {
                    axis: None,
                    key: new_key.to_string(),
                    expected,
                    found,
                });
            }
        }
        if self.contains(&new_key) {
            return Err(NameError::DuplicateKey {
                axis: None,
                key: new_key.to_string(),
            });
        }
        let old_key = std::mem::replace(&mut self.keys[position], new_key.clone());
        if self.index.get(&old_key) == Some(&position) {
            // a repeated name falls back to its next occurrence
            match self.keys.iter().position(|k| *k == old_key) {
                Some(next) => self.index.insert(old_key, next),
                None => self.index.remove(&old_key),
            };
        }
        self.index.insert(new_key, position);
        Ok(())
    }

    /// Rename the entry named `old_key` to `new_key`.
    ///
    /// **Errors** with `UnknownName` if `old_key` is absent, otherwise as
    /// [`rename_at`](NameTable::rename_at).
    pub fn rename(&mut self, old_key: &K, new_key: K) -> Result<(), NameError> {
        let position = self.lookup(old_key)?;
        self.rename_at(position, new_key)
    }

    /// Replace all names.
    ///
    /// `new_keys` must have one distinct name per entry, all of one key type,
    /// equal to the table's key type if it is fixed. The first rebuild of a
    /// table of default names fixes its key type.
    ///
    /// **Errors** with `LengthMismatch`, `TypeMismatch` or `DuplicateKey`;
    /// the table is unchanged on error.
    pub fn rebuild(&mut self, new_keys: Vec<K>) -> Result<(), NameError> {
        if new_keys.len() != self.len() {
            return Err(NameError::LengthMismatch {
                axis: None,
                expected: self.len(),
                found: new_keys.len(),
            });
        }
        let key_type = check_type(&new_keys, self.key_type)?;
        let index = unique_index(&new_keys)?;
        self.keys = new_keys;
        self.index = index;
        self.key_type = key_type.or(self.key_type);
        Ok(())
    }

    /// Returns `true` if some name appears more than once.
    pub(crate) fn has_repeats(&self) -> bool {
        self.index.len() != self.keys.len()
    }

    /// Return a table whose entry `i` is this table's entry `order[i]`.
    ///
    /// Names travel with their entries; the key type is kept.
    pub(crate) fn reordered(&self, order: &[usize]) -> Self {
        let keys = order.iter().map(|&p| self.keys[p].clone()).collect();
        Self::derived(keys, self.key_type)
    }
}

/// Check that all keys share one type, equal to `fixed` when given.
pub(crate) fn check_type<K: Name>(keys: &[K], fixed: Option<KeyType>) -> Result<Option<KeyType>, NameError> {
    let expected = match fixed.or_else(|| keys.first().map(Name::key_type)) {
        Some(t) => t,
        None => return Ok(None),
    };
    for key in keys {
        let found = key.key_type();
        if found != expected {
            return Err(NameError::TypeMismatch {
                axis: None,
                key: key.to_string(),
                expected,
                found,
            });
        }
    }
    Ok(Some(expected))
}

pub(crate) fn unique_index<K: Name>(keys: &[K]) -> Result<HashMap<K, usize>, NameError> {
    let mut index = HashMap::with_capacity(keys.len());
    for (position, key) in keys.iter().enumerate() {
        if index.insert(key.clone(), position).is_some() {
            return Err(NameError::DuplicateKey {
                axis: None,
                key: key.to_string(),
            });
        }
    }
    Ok(index)
}

/// Tables are equal when they hold the same names in the same order.
impl<K: PartialEq> PartialEq for NameTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<K: Eq> Eq for NameTable<K> {}

/// An iterator over the `(name, position)` pairs of a [`NameTable`].
#[derive(Clone, Debug)]
pub struct Iter<'a, K> {
    inner: std::iter::Enumerate<slice::Iter<'a, K>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (&'a K, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(position, key)| (key, position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

impl<'a, K: Name> IntoIterator for &'a NameTable<K> {
    type Item = (&'a K, usize);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
