// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Names through structural transforms.
use ndarray::{Axis, IxDyn};
use tracing::debug;

use crate::error::NameError;
use crate::key::{default_label, Name};
use crate::name_table::NameTable;
use crate::named_array::NamedArray;

/// Concatenate named arrays along an existing axis.
///
/// Along every other axis, the result keeps the operands' name table if they
/// all agree and otherwise falls back to default names. Along `axis` the
/// names are always the defaults. A label is kept where all operands agree,
/// else it is the default label of its axis.
///
/// **Errors** with `ShapeMismatch` if the arrays have zero length, if `axis`
/// is out of bounds, or if the array shapes differ off `axis`.
///
/// ```
/// use ndarray::{arr2, Axis};
/// use ndarray_named::{concatenate, Key, NamedArray};
///
/// let cols = vec![Key::sym("a"), Key::sym("b")];
/// let a = NamedArray::with_names(arr2(&[[1, 2]]), vec![vec![Key::from("x")], cols.clone()], None).unwrap();
/// let b = NamedArray::with_names(arr2(&[[3, 4]]), vec![vec![Key::from("y")], cols.clone()], None).unwrap();
///
/// let c = concatenate(Axis(0), &[&a, &b]).unwrap();
/// assert_eq!(c.names(Axis(1)).keys(), &cols[..]);
/// assert_eq!(c.names(Axis(0)).keys(), &[Key::from("1"), Key::from("2")][..]);
/// ```
pub fn concatenate<A, K>(axis: Axis, arrays: &[&NamedArray<A, K>]) -> Result<NamedArray<A, K>, NameError>
where
    A: Clone,
    K: Name,
{
    let views: Vec<_> = arrays.iter().map(|a| a.view()).collect();
    let data = ndarray::concatenate(axis, &views)?;
    let first = arrays[0];
    let mut names = Vec::with_capacity(data.ndim());
    let mut labels = Vec::with_capacity(data.ndim());
    for i in 0..data.ndim() {
        let table = first.names(Axis(i));
        if i != axis.index() && arrays.iter().all(|a| a.names(Axis(i)) == table) {
            names.push(table.clone());
        } else {
            names.push(NameTable::positional(data.len_of(Axis(i))));
        }
        let label = first.dim_label(Axis(i));
        if arrays.iter().all(|a| a.dim_label(Axis(i)) == label) {
            labels.push(label.clone());
        } else {
            labels.push(default_label(i));
        }
    }
    debug!(axis = axis.index(), operands = arrays.len(), shape = ?data.shape(), "concatenate");
    Ok(NamedArray::from_parts(data, names, labels))
}

/// # Transposition and rotation
///
/// Names and labels move with their axes and entries.
impl<A, K: Name> NamedArray<A, K> {
    /// Permute the axes: axis `i` of the result is axis `axes[i]` of `self`.
    ///
    /// **Panics** if `axes` is not a permutation of the axes.
    pub fn permuted_axes(self, axes: &[usize]) -> Self {
        let (data, names, labels) = self.into_parts();
        let data = data.permuted_axes(IxDyn(axes));
        let names = axes.iter().map(|&i| names[i].clone()).collect();
        let labels = axes.iter().map(|&i| labels[i].clone()).collect();
        NamedArray::from_parts(data, names, labels)
    }

    /// Reverse the order of the axes.
    pub fn reversed_axes(self) -> Self {
        let axes: Vec<usize> = (0..self.ndim()).rev().collect();
        self.permuted_axes(&axes)
    }

    /// Swap axes `a` and `b`.
    ///
    /// **Panics** if `a` or `b` is out of bounds.
    pub fn swap_axes(&mut self, a: usize, b: usize) {
        let (data, names, labels) = self.parts_mut();
        data.swap_axes(a, b);
        names.swap(a, b);
        labels.swap(a, b);
    }

    /// Reverse the entries along `axis`.
    ///
    /// **Panics** if `axis` is out of bounds.
    pub fn invert_axis(&mut self, axis: Axis) {
        let n = self.shape()[axis.index()];
        let order: Vec<usize> = (0..n).rev().collect();
        let (data, names, _) = self.parts_mut();
        data.invert_axis(axis);
        names[axis.index()] = names[axis.index()].reordered(&order);
    }
}

impl<A: Clone, K: Name> NamedArray<A, K> {
    /// Shift the entries along `axis` circularly by `shift`: the entry at
    /// position `p` moves to `(p + shift) mod n`, taking its name along.
    ///
    /// **Panics** if `axis` is out of bounds.
    ///
    /// ```
    /// use ndarray::{arr1, Axis};
    /// use ndarray_named::{nx, Key, NamedArray};
    ///
    /// let a = NamedArray::with_names(arr1(&[1, 2, 3]), vec![vec![Key::sym("a"), Key::sym("b"), Key::sym("c")]], None).unwrap();
    /// let r = a.roll(Axis(0), 1);
    /// assert_eq!(r.array().iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    /// assert_eq!(r.select(&nx![Key::sym("c")]).unwrap().into_scalar(), Some(3));
    /// ```
    pub fn roll(&self, axis: Axis, shift: isize) -> Self {
        let n = self.shape()[axis.index()];
        if n == 0 {
            return self.clone();
        }
        let order: Vec<usize> = (0..n as isize)
            .map(|i| (i - shift).rem_euclid(n as isize) as usize)
            .collect();
        let data = self.array().select(axis, &order);
        let mut names = self.name_tables().to_vec();
        names[axis.index()] = names[axis.index()].reordered(&order);
        NamedArray::from_parts(data, names, self.dim_labels().to_vec())
    }

    /// Shift circularly along every axis, by `shifts[i]` along axis `i`.
    ///
    /// **Panics** unless there is one shift per axis.
    pub fn circshift(&self, shifts: &[isize]) -> Self {
        assert_eq!(shifts.len(), self.ndim(), "circshift: one shift per axis");
        let mut out = self.clone();
        for (i, &shift) in shifts.iter().enumerate() {
            if shift != 0 {
                out = out.roll(Axis(i), shift);
            }
        }
        out
    }
}
