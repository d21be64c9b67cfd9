// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use ndarray::{arr0, Array, ArrayBase, ArrayD, ArrayViewD, ArrayViewMutD, Axis, Data, Dimension, IxDyn};
use tracing::debug;

use crate::error::{incompatible_shapes, NameError};
use crate::index::IndexTerm;
use crate::key::{default_labels, Key, Name};
use crate::name_table::NameTable;
use crate::resolve::{IndexResolver, Resolved};
use crate::shape::{decide, gather, selection_shape, Decision};

/// An n-dimensional array with named entries along each axis.
///
/// Each axis has a [`NameTable`] of names for its entries and a [`Key`]
/// labelling the axis itself. Elements are addressed by an index expression
/// of [`IndexTerm`]s, mixing names and positions freely.
///
/// Invariants: there is one name table and one label per axis, and each name
/// table has as many entries as its axis.
///
/// ```
/// use ndarray::arr2;
/// use ndarray_named::{nx, Key, NamedArray};
///
/// let mut a = NamedArray::with_names(
///     arr2(&[[1, 2, 3], [4, 5, 6]]),
///     vec![
///         vec![Key::from("one"), Key::from("two")],
///         vec![Key::sym("a"), Key::sym("b"), Key::sym("c")],
///     ],
///     None,
/// )
/// .unwrap();
///
/// let row = a.select(&nx!["two", [Key::sym("a"), Key::sym("c")]]).unwrap().into_array().unwrap();
/// assert_eq!(row.array().iter().copied().collect::<Vec<_>>(), vec![4, 6]);
///
/// a.fill_at(&nx!["B" => Key::sym("b"), "A" => "two"], 50).unwrap();
/// assert_eq!(a.select(&nx!["two", Key::sym("b")]).unwrap().into_scalar(), Some(50));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NamedArray<A, K = Key> {
    data: ArrayD<A>,
    names: Vec<NameTable<K>>,
    labels: Vec<Key>,
}

/// The result of a read access: a bare element when every axis collapsed,
/// otherwise a named array.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<A, K = Key> {
    Scalar(A),
    Array(NamedArray<A, K>),
}

impl<A, K> Selection<A, K> {
    /// Return the element, if every axis collapsed.
    pub fn into_scalar(self) -> Option<A> {
        match self {
            Selection::Scalar(a) => Some(a),
            Selection::Array(_) => None,
        }
    }

    /// Return the named array, if some axis survived.
    pub fn into_array(self) -> Option<NamedArray<A, K>> {
        match self {
            Selection::Scalar(_) => None,
            Selection::Array(a) => Some(a),
        }
    }

    /// Returns `true` if the selection is a bare element.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Selection::Scalar(_))
    }
}

/// # Construction
impl<A, K: Name> NamedArray<A, K> {
    /// Wrap `data` with default names `"1"`, `"2"`, ... along each axis and
    /// default axis labels `"A"`, `"B"`, ...
    pub fn new<D: Dimension>(data: Array<A, D>) -> Self {
        let data = data.into_dyn();
        let names = data.shape().iter().map(|&n| NameTable::positional(n)).collect();
        let labels = default_labels(data.ndim());
        NamedArray { data, names, labels }
    }

    /// Wrap `data` with one name table and one label per axis.
    ///
    /// **Errors** with `LengthMismatch` if the number of tables or labels is
    /// not the number of axes, or a table's length is not its axis length.
    pub fn from_tables<D: Dimension>(
        data: Array<A, D>,
        tables: Vec<NameTable<K>>,
        labels: Vec<Key>,
    ) -> Result<Self, NameError> {
        let data = data.into_dyn();
        check_axes(data.shape(), &tables, &labels)?;
        Ok(NamedArray {
            data,
            names: tables,
            labels,
        })
    }

    /// Wrap `data` with one list of distinct names per axis, and optionally
    /// axis labels (default `"A"`, `"B"`, ...).
    ///
    /// **Errors** as [`from_tables`](NamedArray::from_tables), and with
    /// `DuplicateKey` or `TypeMismatch` for a bad list of names.
    pub fn with_names<D: Dimension>(
        data: Array<A, D>,
        names: Vec<Vec<K>>,
        labels: Option<Vec<Key>>,
    ) -> Result<Self, NameError> {
        let labels = labels.unwrap_or_else(|| default_labels(data.ndim()));
        for found in [names.len(), labels.len()] {
            if found != data.ndim() {
                return Err(NameError::LengthMismatch {
                    axis: None,
                    expected: data.ndim(),
                    found,
                });
            }
        }
        let tables = names
            .into_iter()
            .zip(&labels)
            .map(|(keys, label)| NameTable::from_keys(keys).map_err(|e| e.on_axis(label)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_tables(data, tables, labels)
    }

    /// Assemble a named array whose parts are known to agree.
    ///
    /// **Panics** if they do not.
    pub(crate) fn from_parts(data: ArrayD<A>, names: Vec<NameTable<K>>, labels: Vec<Key>) -> Self {
        assert!(
            check_axes(data.shape(), &names, &labels).is_ok(),
            "name tables and labels must match the array shape {:?}",
            data.shape()
        );
        NamedArray { data, names, labels }
    }
}

fn check_axes<K: Name>(shape: &[usize], tables: &[NameTable<K>], labels: &[Key]) -> Result<(), NameError> {
    for found in [tables.len(), labels.len()] {
        if found != shape.len() {
            return Err(NameError::LengthMismatch {
                axis: None,
                expected: shape.len(),
                found,
            });
        }
    }
    for ((table, &len), label) in tables.iter().zip(shape).zip(labels) {
        if table.len() != len {
            return Err(NameError::LengthMismatch {
                axis: Some(label.to_string()),
                expected: len,
                found: table.len(),
            });
        }
    }
    Ok(())
}

/// # Names and labels
impl<A, K: Name> NamedArray<A, K> {
    /// Return the number of axes.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Return the length of each axis.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Return the underlying array.
    pub fn array(&self) -> &ArrayD<A> {
        &self.data
    }

    /// Return a read-only view of the underlying array.
    pub fn view(&self) -> ArrayViewD<'_, A> {
        self.data.view()
    }

    /// Return a read-write view of the underlying array; names are untouched.
    pub fn view_mut(&mut self) -> ArrayViewMutD<'_, A> {
        self.data.view_mut()
    }

    /// Return the underlying array, dropping the names.
    pub fn into_array(self) -> ArrayD<A> {
        self.data
    }

    /// Split into the array, name tables and labels.
    pub fn into_parts(self) -> (ArrayD<A>, Vec<NameTable<K>>, Vec<Key>) {
        (self.data, self.names, self.labels)
    }

    /// Borrow the parts mutably, for transforms that keep them in agreement.
    pub(crate) fn parts_mut(&mut self) -> (&mut ArrayD<A>, &mut Vec<NameTable<K>>, &mut Vec<Key>) {
        (&mut self.data, &mut self.names, &mut self.labels)
    }

    /// Return the name table of `axis`.
    ///
    /// **Panics** if `axis` is out of bounds.
    pub fn names(&self, axis: Axis) -> &NameTable<K> {
        &self.names[axis.index()]
    }

    /// Return the name tables of all axes.
    pub fn name_tables(&self) -> &[NameTable<K>] {
        &self.names
    }

    /// Return the label of `axis`.
    ///
    /// **Panics** if `axis` is out of bounds.
    pub fn dim_label(&self, axis: Axis) -> &Key {
        &self.labels[axis.index()]
    }

    /// Return the labels of all axes.
    pub fn dim_labels(&self) -> &[Key] {
        &self.labels
    }

    /// Return the first axis labelled `label`.
    pub fn axis_of(&self, label: &Key) -> Option<Axis> {
        self.labels.iter().position(|l| l == label).map(Axis)
    }

    /// Replace all names of `axis`.
    ///
    /// **Errors** as [`NameTable::rebuild`]. **Panics** if `axis` is out of
    /// bounds.
    pub fn set_names(&mut self, axis: Axis, keys: Vec<K>) -> Result<(), NameError> {
        let label = &self.labels[axis.index()];
        debug!(axis = %label, len = keys.len(), "set names");
        self.names[axis.index()]
            .rebuild(keys)
            .map_err(|e| e.on_axis(label))
    }

    /// Rename the entry `old` of `axis` to `new`.
    ///
    /// **Errors** as [`NameTable::rename`]. **Panics** if `axis` is out of
    /// bounds.
    pub fn rename(&mut self, axis: Axis, old: &K, new: K) -> Result<(), NameError> {
        let label = &self.labels[axis.index()];
        debug!(axis = %label, %old, %new, "rename");
        self.names[axis.index()]
            .rename(old, new)
            .map_err(|e| e.on_axis(label))
    }

    /// Rename the entry at `position` of `axis` to `new`.
    ///
    /// **Errors** as [`NameTable::rename_at`]. **Panics** if `axis` is out of
    /// bounds.
    pub fn rename_at(&mut self, axis: Axis, position: usize, new: K) -> Result<(), NameError> {
        let label = &self.labels[axis.index()];
        self.names[axis.index()]
            .rename_at(position, new)
            .map_err(|e| e.on_axis(label))
    }

    /// Relabel `axis`.
    ///
    /// **Panics** if `axis` is out of bounds.
    pub fn set_dim_label(&mut self, axis: Axis, label: impl Into<Key>) {
        self.labels[axis.index()] = label.into();
    }

    /// Relabel all axes.
    ///
    /// **Errors** with `LengthMismatch` unless there is one label per axis.
    pub fn set_dim_labels(&mut self, labels: Vec<Key>) -> Result<(), NameError> {
        if labels.len() != self.ndim() {
            return Err(NameError::LengthMismatch {
                axis: None,
                expected: self.ndim(),
                found: labels.len(),
            });
        }
        self.labels = labels;
        Ok(())
    }

    /// Return a resolver for index expressions against this array.
    pub fn resolver(&self) -> IndexResolver<'_, K> {
        IndexResolver::new(&self.names, &self.labels, self.data.shape())
    }

    /// Resolve an index expression to positions, one `Resolved` per axis.
    ///
    /// **Panics** if a range term has step 0.
    pub fn resolve(&self, terms: &[IndexTerm<K>]) -> Result<Vec<Resolved<K>>, NameError> {
        self.resolver().resolve(terms)
    }
}

/// # Element access
impl<A: Clone, K: Name> NamedArray<A, K> {
    /// Read the elements an index expression selects.
    ///
    /// If every term is a scalar form (a single name or position) the result
    /// is the bare element. Otherwise it is a named array with one axis per
    /// non-scalar term, named by the selected entries in the order requested.
    ///
    /// **Errors** with `UnknownName`, `OutOfRange`, `IndexCount` or an axis
    /// error from resolving `terms`.
    ///
    /// **Panics** if a range term has step 0, as slicing in `ndarray` does.
    pub fn select(&self, terms: &[IndexTerm<K>]) -> Result<Selection<A, K>, NameError> {
        let resolved = self.resolve(terms)?;
        match decide(resolved, &self.names, &self.labels) {
            Decision::Scalar(index) => Ok(Selection::Scalar(self.data[IxDyn(&index)].clone())),
            Decision::Array(plan) => {
                let data = gather(&self.data, &plan.resolved);
                debug!(shape = ?data.shape(), "select");
                Ok(Selection::Array(NamedArray::from_parts(data, plan.tables, plan.labels)))
            }
        }
    }

    /// Write `value` to the elements an index expression selects.
    ///
    /// `value` must broadcast to the shape the same expression would select:
    /// one axis per non-scalar term. Where a position is selected more than
    /// once, the last write wins.
    ///
    /// **Errors** as [`select`](NamedArray::select), and with `ShapeMismatch`
    /// if `value` does not broadcast. Nothing is written on error.
    ///
    /// **Panics** as [`select`](NamedArray::select).
    pub fn assign_at<S, D>(&mut self, terms: &[IndexTerm<K>], value: &ArrayBase<S, D>) -> Result<(), NameError>
    where
        S: Data<Elem = A>,
        D: Dimension,
    {
        let resolved = self.resolve(terms)?;
        let shape = selection_shape(&resolved);
        let value = value
            .broadcast(IxDyn(&shape))
            .ok_or_else(incompatible_shapes)?;
        debug!(shape = ?shape, "assign");
        let mut index = vec![0; resolved.len()];
        for (ix, elem) in value.indexed_iter() {
            let mut k = 0;
            for (i, r) in resolved.iter().enumerate() {
                index[i] = match r {
                    Resolved::Collapse(p) => *p,
                    Resolved::Survive { positions, .. } => {
                        k += 1;
                        positions[ix[k - 1]]
                    }
                };
            }
            self.data[IxDyn(&index)] = elem.clone();
        }
        Ok(())
    }

    /// Write `elem` to every element an index expression selects.
    ///
    /// **Errors** and **Panics** as [`select`](NamedArray::select).
    pub fn fill_at(&mut self, terms: &[IndexTerm<K>], elem: A) -> Result<(), NameError> {
        self.assign_at(terms, &arr0(elem))
    }

    /// Return a named array with `f` applied to each element; names are kept.
    pub fn mapv<B, F>(&self, f: F) -> NamedArray<B, K>
    where
        F: FnMut(A) -> B,
    {
        NamedArray {
            data: self.data.mapv(f),
            names: self.names.clone(),
            labels: self.labels.clone(),
        }
    }
}

impl<A, K: Name> NamedArray<A, K> {
    /// Return a named array with `f` applied to a reference to each element;
    /// names are kept.
    pub fn map<'a, B, F>(&'a self, f: F) -> NamedArray<B, K>
    where
        F: FnMut(&'a A) -> B,
        A: 'a,
    {
        NamedArray {
            data: self.data.map(f),
            names: self.names.clone(),
            labels: self.labels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use ndarray::{arr1, arr2};

    #[test]
    fn default_names_and_labels() {
        let a = NamedArray::<_, Key>::new(arr2(&[[1, 2, 3], [4, 5, 6]]));
        assert_eq!(a.dim_labels(), &[Key::from("A"), Key::from("B")][..]);
        assert_eq!(a.names(Axis(1)).keys(), &[Key::from("1"), Key::from("2"), Key::from("3")][..]);
        assert_eq!(a.names(Axis(1)).key_type(), None);
    }

    #[test]
    fn construction_checks_lengths() {
        let err = NamedArray::with_names(arr1(&[1, 2]), vec![vec![Key::from("x")]], None).unwrap_err();
        assert_eq!(
            err,
            NameError::LengthMismatch {
                axis: Some("A".to_string()),
                expected: 2,
                found: 1,
            }
        );
        let err = NamedArray::<_, Key>::from_tables(arr1(&[1, 2]), vec![], vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
        let err = NamedArray::with_names(
            arr1(&[1, 2]),
            vec![vec![Key::from("x"), Key::from("x")]],
            Some(vec![Key::sym("rows")]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            NameError::DuplicateKey {
                axis: Some(":rows".to_string()),
                key: "x".to_string(),
            }
        );
    }

    #[test]
    fn string_keys() {
        let a = NamedArray::with_names(
            arr1(&[10, 20]),
            vec![vec!["lo".to_string(), "hi".to_string()]],
            None,
        )
        .unwrap();
        assert_eq!(a.select(&[IndexTerm::from("hi")]).unwrap().into_scalar(), Some(20));
    }

    #[test]
    fn zero_dimensional_select_is_scalar() {
        let a = NamedArray::<_, Key>::new(arr0(7));
        assert_eq!(a.select(&[]).unwrap(), Selection::Scalar(7));
    }

    #[test]
    fn assign_shape_mismatch_writes_nothing() {
        let mut a = NamedArray::<_, Key>::new(arr2(&[[1, 2, 3], [4, 5, 6]]));
        let err = a.assign_at(&[IndexTerm::All, IndexTerm::All], &arr1(&[0, 0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(a.array(), &arr2(&[[1, 2, 3], [4, 5, 6]]).into_dyn());
    }
}
