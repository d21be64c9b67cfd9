// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::{Not, Range, RangeFrom, RangeFull, RangeTo};

use ndarray::Slice;

use crate::key::Key;

/// How one axis is addressed in one access.
///
/// Scalar forms (`Name`, `Pos`) collapse their axis out of the result. Every
/// other form keeps the axis, even when it selects a single entry: a
/// one-element `Names` list yields an axis of length one.
///
/// Positions are 0-based; negative positions count from the back of the axis.
///
/// Integer literals convert to positions, never to names, even when the axis
/// has integer names; use [`IndexTerm::Name`] (or [`name`]) to look up an
/// integer name. String literals convert to names.
///
/// See also the [`nx![]`](crate::nx!) macro.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexTerm<K> {
    /// A single name; collapses the axis.
    Name(K),
    /// A single position; collapses the axis.
    Pos(isize),
    /// A list of names, in the order wanted. Names may repeat.
    Names(Vec<K>),
    /// A list of positions, in the order wanted. Positions may repeat.
    Positions(Vec<isize>),
    /// A range of positions with step size.
    Range(Slice),
    /// Every position.
    All,
    /// Every position not selected by the inner term, in ascending order.
    Not(Box<IndexTerm<K>>),
    /// The inner term, applied to the axis with the given label. The label
    /// must belong to exactly one axis.
    Axis(Key, Box<IndexTerm<K>>),
}

impl<K> IndexTerm<K> {
    /// Returns `true` if the term collapses its axis.
    pub fn is_scalar(&self) -> bool {
        matches!(self, IndexTerm::Name(_) | IndexTerm::Pos(_))
    }

    /// Returns `true` if the term is axis-keyed.
    pub fn is_axis(&self) -> bool {
        matches!(self, IndexTerm::Axis(..))
    }
}

/// Select the single entry named `key`; the explicit-name form.
pub fn name<K>(key: impl Into<K>) -> IndexTerm<K> {
    IndexTerm::Name(key.into())
}

/// Select the entries named `keys`, in order.
pub fn names<K, I>(keys: I) -> IndexTerm<K>
where
    I: IntoIterator,
    I::Item: Into<K>,
{
    IndexTerm::Names(keys.into_iter().map(Into::into).collect())
}

/// Select the single entry at `position`; the explicit-position form.
pub fn pos<K>(position: isize) -> IndexTerm<K> {
    IndexTerm::Pos(position)
}

/// Apply `term` to the axis labelled `label`.
pub fn axis<K>(label: impl Into<Key>, term: impl Into<IndexTerm<K>>) -> IndexTerm<K> {
    IndexTerm::Axis(label.into(), Box::new(term.into()))
}

/// Complement: `!term` selects everything `term` does not.
impl<K> Not for IndexTerm<K> {
    type Output = IndexTerm<K>;

    fn not(self) -> IndexTerm<K> {
        IndexTerm::Not(Box::new(self))
    }
}

macro_rules! impl_term_from_index_type {
    ($index:ty) => {
        impl<K> From<$index> for IndexTerm<K> {
            #[inline]
            fn from(i: $index) -> IndexTerm<K> {
                IndexTerm::Pos(i as isize)
            }
        }

        impl<K> From<Vec<$index>> for IndexTerm<K> {
            fn from(v: Vec<$index>) -> IndexTerm<K> {
                IndexTerm::Positions(v.into_iter().map(|i| i as isize).collect())
            }
        }

        impl<K> From<Range<$index>> for IndexTerm<K> {
            #[inline]
            fn from(r: Range<$index>) -> IndexTerm<K> {
                IndexTerm::Range(Slice::from(r))
            }
        }

        impl<K> From<RangeFrom<$index>> for IndexTerm<K> {
            #[inline]
            fn from(r: RangeFrom<$index>) -> IndexTerm<K> {
                IndexTerm::Range(Slice::from(r))
            }
        }

        impl<K> From<RangeTo<$index>> for IndexTerm<K> {
            #[inline]
            fn from(r: RangeTo<$index>) -> IndexTerm<K> {
                IndexTerm::Range(Slice::from(r))
            }
        }
    };
}

impl_term_from_index_type!(isize);
impl_term_from_index_type!(usize);
impl_term_from_index_type!(i32);

impl<K> From<RangeFull> for IndexTerm<K> {
    #[inline]
    fn from(_: RangeFull) -> IndexTerm<K> {
        IndexTerm::All
    }
}

impl<K> From<Slice> for IndexTerm<K> {
    #[inline]
    fn from(s: Slice) -> IndexTerm<K> {
        IndexTerm::Range(s)
    }
}

impl<'a, K: From<&'a str>> From<&'a str> for IndexTerm<K> {
    fn from(s: &'a str) -> IndexTerm<K> {
        IndexTerm::Name(K::from(s))
    }
}

impl<'a, K: From<&'a str>> From<Vec<&'a str>> for IndexTerm<K> {
    fn from(v: Vec<&'a str>) -> IndexTerm<K> {
        IndexTerm::Names(v.into_iter().map(K::from).collect())
    }
}

impl<'a, K: From<&'a str>, const N: usize> From<[&'a str; N]> for IndexTerm<K> {
    fn from(v: [&'a str; N]) -> IndexTerm<K> {
        IndexTerm::Names(v.into_iter().map(K::from).collect())
    }
}

impl From<Key> for IndexTerm<Key> {
    fn from(k: Key) -> IndexTerm<Key> {
        IndexTerm::Name(k)
    }
}

impl From<Vec<Key>> for IndexTerm<Key> {
    fn from(v: Vec<Key>) -> IndexTerm<Key> {
        IndexTerm::Names(v)
    }
}

impl<const N: usize> From<[Key; N]> for IndexTerm<Key> {
    fn from(v: [Key; N]) -> IndexTerm<Key> {
        IndexTerm::Names(v.into())
    }
}

impl<K: fmt::Display> fmt::Display for IndexTerm<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexTerm::Name(k) => write!(f, "{}", k),
            IndexTerm::Pos(i) => write!(f, "#{}", i),
            IndexTerm::Names(ks) => {
                f.write_str("[")?;
                for (i, k) in ks.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", k)?;
                }
                f.write_str("]")
            }
            IndexTerm::Positions(ps) => write!(f, "#{:?}", ps),
            IndexTerm::Range(s) => {
                write!(f, "{}..", s.start)?;
                if let Some(end) = s.end {
                    write!(f, "{}", end)?;
                }
                if s.step != 1 {
                    write!(f, ";{}", s.step)?;
                }
                Ok(())
            }
            IndexTerm::All => f.write_str(".."),
            IndexTerm::Not(inner) => write!(f, "!{}", inner),
            IndexTerm::Axis(label, inner) => write!(f, "{} => {}", label, inner),
        }
    }
}

/// Build an index expression, an array of [`IndexTerm`]s.
///
/// Positional form: one term per axis, each converted with `IndexTerm::from`.
/// Integers are positions, strings are names, `..` is every position.
///
/// Axis-keyed form: `label => term` pairs; axes not named select everything.
///
/// ```
/// use ndarray::arr2;
/// use ndarray_named::{nx, Key, NamedArray};
///
/// let a = NamedArray::with_names(
///     arr2(&[[1, 2, 3], [4, 5, 6]]),
///     vec![
///         vec![Key::from("one"), Key::from("two")],
///         vec![Key::sym("a"), Key::sym("b"), Key::sym("c")],
///     ],
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(a.select(&nx!["one", Key::sym("a")]).unwrap().into_scalar(), Some(1));
/// assert_eq!(a.select(&nx!["B" => Key::sym("c"), "A" => 1]).unwrap().into_scalar(), Some(6));
/// assert_eq!(a.select(&nx![1, ..]).unwrap().into_array().unwrap().shape(), &[3]);
/// ```
#[macro_export]
macro_rules! nx {
    ($($label:expr => $term:expr),+ $(,)?) => {
        [$($crate::axis($label, $term)),+]
    };
    ($($term:expr),* $(,)?) => {
        [$($crate::IndexTerm::from($term)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_forms() {
        let t = IndexTerm::<Key>::from(1);
        assert_eq!(t, IndexTerm::Pos(1));
        let t: IndexTerm<Key> = "one".into();
        assert_eq!(t, IndexTerm::Name(Key::from("one")));
        let t: IndexTerm<Key> = (..).into();
        assert_eq!(t, IndexTerm::All);
        let t: IndexTerm<Key> = ["a", "b"].into();
        assert_eq!(t, IndexTerm::Names(vec![Key::from("a"), Key::from("b")]));
        let t = IndexTerm::<Key>::from(1..3);
        assert_eq!(t, IndexTerm::Range(Slice::from(1..3)));
        assert!(!IndexTerm::<Key>::Names(vec![Key::from("a")]).is_scalar());
    }

    #[test]
    fn explicit_name_for_integer_keys() {
        let t: IndexTerm<Key> = name(Key::Int(3));
        assert_eq!(t, IndexTerm::Name(Key::Int(3)));
        let t = IndexTerm::<Key>::from(3);
        assert_eq!(t, IndexTerm::Pos(3));
    }

    #[test]
    fn display() {
        let t: IndexTerm<Key> = !axis("A", "one");
        assert_eq!(t.to_string(), "!A => one");
        let t: IndexTerm<Key> = IndexTerm::Range(Slice::from(1..).step_by(-1));
        assert_eq!(t.to_string(), "1..;-1");
    }
}
