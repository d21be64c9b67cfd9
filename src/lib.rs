// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndarray_named"]
#![doc(html_root_url = "https://docs.rs/ndarray-named/0.1/")]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `ndarray-named` crate provides [`NamedArray`], an n-dimensional
//! array with names for the entries along each axis.
//!
//! - An [`ndarray::ArrayD`] holds the elements; this crate only adds names.
//! - Each axis has a [`NameTable`] mapping names to positions, and a label
//!   naming the axis itself.
//! - Elements are addressed by an index expression with one [`IndexTerm`]
//!   per axis. Names and positions mix freely, and axis-keyed terms
//!   (`label => term`) address axes out of order.
//! - Slicing, concatenation, permutation and circular shifts carry the names
//!   along.
//!
//! ## Highlights
//!
//! - A scalar term (`"one"`, `0`) collapses its axis; a list term (`["one"]`)
//!   keeps it, even with a single entry. Selecting a scalar on every axis
//!   yields the bare element.
//! - Integer literals are always positions. Integer *names* are looked up with
//!   the explicit [`name`] form.
//! - `!term` selects the complement of `term`, and keeps its axis.
//!
//! ```
//! use ndarray::arr2;
//! use ndarray_named::{nx, Key, NamedArray};
//!
//! let a = NamedArray::with_names(
//!     arr2(&[[1, 2, 3], [4, 5, 6]]),
//!     vec![
//!         vec![Key::from("one"), Key::from("two")],
//!         vec![Key::sym("a"), Key::sym("b"), Key::sym("c")],
//!     ],
//!     None,
//! )
//! .unwrap();
//!
//! // mixed name and position
//! assert_eq!(a.select(&nx!["one", 0]).unwrap().into_scalar(), Some(1));
//!
//! // complement keeps the row axis
//! let rest = a.select(&nx![!ndarray_named::name("one"), ..]).unwrap().into_array().unwrap();
//! assert_eq!(rest.shape(), &[1, 3]);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: Rust standard library-using functionality (enabled by default)
//! - `serde`: serialization of keys, name tables and named arrays
//! - `approx`: approximate equality of named arrays, names compared exactly

#[macro_use]
mod index;

mod error;
mod key;
mod name_table;
mod named_array;
mod propagate;
mod reduce;
mod resolve;
mod shape;

#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;

pub mod prelude;

pub use crate::error::{ErrorKind, NameError};
pub use crate::index::{axis, name, names, pos, IndexTerm};
pub use crate::key::{default_label, default_labels, Key, KeyType, Name};
pub use crate::name_table::{Iter, NameTable};
pub use crate::named_array::{NamedArray, Selection};
pub use crate::propagate::concatenate;
pub use crate::resolve::{IndexResolver, Resolved};
