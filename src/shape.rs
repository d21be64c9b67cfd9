// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deciding the shape and names of a selection.
use ndarray::{ArrayD, Axis, IxDyn};

use crate::key::{Key, Name};
use crate::name_table::NameTable;
use crate::resolve::Resolved;

/// The outcome of a read access, before any element is copied.
#[derive(Clone, Debug)]
pub(crate) enum Decision<K> {
    /// Every axis collapsed: the element at this index.
    Scalar(Vec<usize>),
    /// Some axis survived.
    Array(Plan<K>),
}

/// How to build the named array a selection yields.
#[derive(Clone, Debug)]
pub(crate) struct Plan<K> {
    /// Per source axis, the positions kept.
    pub(crate) resolved: Vec<Resolved<K>>,
    /// Per surviving axis, its names.
    pub(crate) tables: Vec<NameTable<K>>,
    /// Per surviving axis, its label.
    pub(crate) labels: Vec<Key>,
}

/// Decide the result of selecting `resolved` from axes with these tables and
/// labels.
///
/// The decision follows the literal form of each term, carried in
/// `Resolved`: a scalar term drops its axis while a one-element list keeps it.
/// Derived name tables take the resolved names as they are, repeats included.
pub(crate) fn decide<K: Name>(
    mut resolved: Vec<Resolved<K>>,
    tables: &[NameTable<K>],
    labels: &[Key],
) -> Decision<K> {
    if resolved.iter().all(Resolved::is_collapse) {
        return Decision::Scalar(resolved.iter().map(|r| r.positions()[0]).collect());
    }
    let mut out_tables = Vec::new();
    let mut out_labels = Vec::new();
    for (axis, r) in resolved.iter_mut().enumerate() {
        if let Resolved::Survive { names, .. } = r {
            let names = std::mem::take(names);
            out_tables.push(NameTable::derived(names, tables[axis].key_type()));
            out_labels.push(labels[axis].clone());
        }
    }
    Decision::Array(Plan {
        resolved,
        tables: out_tables,
        labels: out_labels,
    })
}

/// The shape of the selection `resolved`: one extent per surviving axis.
pub(crate) fn selection_shape<K>(resolved: &[Resolved<K>]) -> Vec<usize> {
    resolved
        .iter()
        .filter(|r| !r.is_collapse())
        .map(|r| r.positions().len())
        .collect()
}

/// Copy out the elements `resolved` selects from `data`.
pub(crate) fn gather<A: Clone, K>(data: &ArrayD<A>, resolved: &[Resolved<K>]) -> ArrayD<A> {
    let mut view = data.view();
    // collapse from the back so earlier axis numbers stay valid
    for (axis, r) in resolved.iter().enumerate().rev() {
        if let Resolved::Collapse(p) = r {
            view = view.index_axis_move(Axis(axis), *p);
        }
    }
    let mut out = view.to_owned();
    let survivors = resolved.iter().filter(|r| !r.is_collapse());
    for (axis, r) in survivors.enumerate() {
        let positions = r.positions();
        let len = out.len_of(Axis(axis));
        if positions.iter().copied().eq(0..len) {
            continue;
        }
        out = if positions.is_empty() {
            let mut shape = out.shape().to_vec();
            shape[axis] = 0;
            ArrayD::from_shape_fn(IxDyn(&shape), |_| unreachable!())
        } else {
            out.select(Axis(axis), positions)
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn resolved_row(names: &[&str]) -> Resolved<Key> {
        Resolved::Survive {
            positions: (0..names.len()).collect(),
            names: names.iter().map(|&n| Key::from(n)).collect(),
        }
    }

    #[test]
    fn all_scalar_terms_decide_scalar() {
        let tables = vec![NameTable::<Key>::positional(2), NameTable::positional(3)];
        let labels = crate::key::default_labels(2);
        match decide(vec![Resolved::Collapse(1), Resolved::Collapse(2)], &tables, &labels) {
            Decision::Scalar(ix) => assert_eq!(ix, vec![1, 2]),
            Decision::Array(_) => panic!("expected a scalar"),
        }
    }

    #[test]
    fn collapsed_axes_are_dropped() {
        let tables = vec![NameTable::<Key>::positional(2), NameTable::positional(3)];
        let labels = crate::key::default_labels(2);
        let resolved = vec![Resolved::Collapse(0), resolved_row(&["1", "2", "3"])];
        match decide(resolved, &tables, &labels) {
            Decision::Array(plan) => {
                assert_eq!(plan.tables.len(), 1);
                assert_eq!(plan.labels, vec![Key::from("B")]);
            }
            Decision::Scalar(_) => panic!("expected an array"),
        }
    }

    #[test]
    fn gather_collapses_and_selects() {
        let data = arr2(&[[1, 2, 3], [4, 5, 6]]).into_dyn();
        let resolved: Vec<Resolved<Key>> = vec![
            Resolved::Collapse(1),
            Resolved::Survive {
                positions: vec![2, 0, 2],
                names: vec![],
            },
        ];
        let out = gather(&data, &resolved);
        assert_eq!(out.shape(), &[3]);
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![6, 4, 6]);
        assert_eq!(selection_shape(&resolved), vec![3]);

        let empty: Vec<Resolved<Key>> = vec![
            Resolved::Survive {
                positions: vec![],
                names: vec![],
            },
            Resolved::Collapse(0),
        ];
        assert_eq!(gather(&data, &empty).shape(), &[0]);
    }
}
