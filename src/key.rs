// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::hash::Hash;

/// A name or a dimension label.
///
/// `Key` is the default key type of a [`NamedArray`](crate::NamedArray). Each
/// variant is its own key type: an axis whose names are `Str` keys rejects a
/// `Sym` key with a `TypeMismatch` error.
///
/// ```
/// use ndarray_named::{Key, KeyType};
///
/// assert_eq!(Key::from("one").key_type(), KeyType::Str);
/// assert_eq!(Key::sym("a").to_string(), ":a");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// A string name, `"one"`.
    Str(String),
    /// A symbol name, displayed as `:a`.
    Sym(String),
    /// An integer name.
    Int(i64),
    /// A character name.
    Char(char),
}

/// The type of a [`Key`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    Str,
    Sym,
    Int,
    Char,
}

impl Key {
    /// Create a symbol key.
    pub fn sym(s: impl Into<String>) -> Self {
        Key::Sym(s.into())
    }

    /// Return the type of the key.
    pub fn key_type(&self) -> KeyType {
        match self {
            Key::Str(_) => KeyType::Str,
            Key::Sym(_) => KeyType::Sym,
            Key::Int(_) => KeyType::Int,
            Key::Char(_) => KeyType::Char,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => f.write_str(s),
            Key::Sym(s) => write!(f, ":{}", s),
            Key::Int(i) => write!(f, "{}", i),
            Key::Char(c) => write!(f, "{}", c),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Key {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Key {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Key {
        Key::Int(i)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Key {
        Key::Char(c)
    }
}

/// A type usable as the names of a named array's axes.
pub trait Name: Clone + Eq + Hash + fmt::Debug + fmt::Display {
    /// The type tag of this key.
    fn key_type(&self) -> KeyType;

    /// The default name of the entry at 0-based `position`: `"1"` for the
    /// first entry, `"2"` for the second and so on.
    fn positional(position: usize) -> Self;

    /// The name of the single entry left when `func` reduces the axis
    /// labelled `label`, for example `"sum(A)"`.
    fn aggregate(func: &str, label: &Key) -> Self;
}

impl Name for Key {
    fn key_type(&self) -> KeyType {
        Key::key_type(self)
    }

    fn positional(position: usize) -> Self {
        Key::Str((position + 1).to_string())
    }

    fn aggregate(func: &str, label: &Key) -> Self {
        Key::Str(format!("{}({})", func, label))
    }
}

impl Name for String {
    fn key_type(&self) -> KeyType {
        KeyType::Str
    }

    fn positional(position: usize) -> Self {
        (position + 1).to_string()
    }

    fn aggregate(func: &str, label: &Key) -> Self {
        format!("{}({})", func, label)
    }
}

/// Return the default labels for `ndim` axes: `"A"`, `"B"`, ..., `"Z"`,
/// `"AA"`, `"AB"`, ...
///
/// ```
/// use ndarray_named::{default_labels, Key};
///
/// assert_eq!(default_labels(2), vec![Key::from("A"), Key::from("B")]);
/// assert_eq!(default_labels(28)[27], Key::from("AB"));
/// ```
pub fn default_labels(ndim: usize) -> Vec<Key> {
    (0..ndim).map(default_label).collect()
}

/// Return the default label of axis `axis`.
pub fn default_label(axis: usize) -> Key {
    // bijective base 26
    let mut letters = Vec::new();
    let mut n = axis + 1;
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    Key::Str(letters.iter().rev().collect())
}
