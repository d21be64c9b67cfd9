// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::{Add, Div};

use ndarray::{ArrayView1, Axis};
use num_traits::{FromPrimitive, Zero};

use crate::key::Name;
use crate::name_table::NameTable;
use crate::named_array::NamedArray;

/// # Reductions
impl<A, K: Name> NamedArray<A, K> {
    /// Reduce each lane along `axis` with `f`, keeping the axis with a single
    /// entry.
    ///
    /// The entry is named after the reduction and the axis label, for example
    /// `"sum(A)"`; other axes keep their names.
    ///
    /// **Panics** if `axis` is out of bounds.
    ///
    /// ```
    /// use ndarray::{arr2, Axis};
    /// use ndarray_named::{Key, NamedArray};
    ///
    /// let a = NamedArray::<_, Key>::new(arr2(&[[1, 2], [3, 4]]));
    /// let m = a.fold_axis_named(Axis(0), "max", |lane| *lane.iter().max().unwrap());
    /// assert_eq!(m.shape(), &[1, 2]);
    /// assert_eq!(m.names(Axis(0)).keys(), &[Key::from("max(A)")][..]);
    /// ```
    pub fn fold_axis_named<'a, B, F>(&'a self, axis: Axis, func: &str, f: F) -> NamedArray<B, K>
    where
        F: FnMut(ArrayView1<'a, A>) -> B,
        A: 'a,
    {
        let data = self.array().map_axis(axis, f).insert_axis(axis);
        let label = self.dim_label(axis);
        let mut names = self.name_tables().to_vec();
        names[axis.index()] = NameTable::derived(vec![K::aggregate(func, label)], None);
        NamedArray::from_parts(data, names, self.dim_labels().to_vec())
    }

    /// Sum along `axis`; the summed axis keeps one entry, named `"sum(label)"`.
    ///
    /// **Panics** if `axis` is out of bounds.
    pub fn sum_axis(&self, axis: Axis) -> NamedArray<A, K>
    where
        A: Clone + Zero + Add<Output = A>,
    {
        self.fold_axis_named(axis, "sum", |lane| lane.sum())
    }

    /// Mean along `axis`; the averaged axis keeps one entry, named
    /// `"mean(label)"`.
    ///
    /// Return `None` if the axis has zero length.
    ///
    /// **Panics** if `axis` is out of bounds.
    pub fn mean_axis(&self, axis: Axis) -> Option<NamedArray<A, K>>
    where
        A: Clone + Zero + FromPrimitive + Add<Output = A> + Div<Output = A>,
    {
        let len = self.shape()[axis.index()];
        if len == 0 {
            return None;
        }
        let n = A::from_usize(len)?;
        Some(self.fold_axis_named(axis, "mean", |lane| lane.sum() / n.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;
    use crate::{nx, Selection};
    use ndarray::arr2;

    #[test]
    fn sum_names_the_collapsed_entry() {
        let a = NamedArray::with_names(
            arr2(&[[1, 2, 3], [4, 5, 6]]),
            vec![
                vec![Key::from("one"), Key::from("two")],
                vec![Key::sym("a"), Key::sym("b"), Key::sym("c")],
            ],
            None,
        )
        .unwrap();
        let s = a.sum_axis(Axis(0));
        assert_eq!(s.shape(), &[1, 3]);
        assert_eq!(s.names(Axis(0)).keys(), &[Key::from("sum(A)")][..]);
        assert_eq!(s.names(Axis(1)), a.names(Axis(1)));
        assert_eq!(
            s.select(&nx!["sum(A)", Key::sym("c")]).unwrap(),
            Selection::Scalar(9)
        );
    }

    #[test]
    fn mean_of_empty_axis_is_none() {
        let a = NamedArray::<f64, Key>::new(ndarray::Array2::zeros((0, 3)));
        assert!(a.mean_axis(Axis(0)).is_none());
        let b = NamedArray::<_, Key>::new(arr2(&[[1., 2.], [3., 4.]]));
        let m = b.mean_axis(Axis(1)).unwrap();
        assert_eq!(m.array().iter().copied().collect::<Vec<_>>(), vec![1.5, 3.5]);
        assert_eq!(m.names(Axis(1)).keys(), &[Key::from("mean(B)")][..]);
    }
}
