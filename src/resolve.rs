// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Resolution of index terms to canonical positions.
use ndarray::Slice;
use tracing::trace;

use crate::error::NameError;
use crate::index::IndexTerm;
use crate::key::{Key, Name};
use crate::name_table::NameTable;

/// One axis of an index expression, resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved<K> {
    /// The axis collapses to the entry at this position.
    Collapse(usize),
    /// The axis survives with these entries, in order, and their names.
    Survive { positions: Vec<usize>, names: Vec<K> },
}

impl<K> Resolved<K> {
    /// The selected positions: one for a collapsed axis.
    pub fn positions(&self) -> &[usize] {
        match self {
            Resolved::Collapse(p) => std::slice::from_ref(p),
            Resolved::Survive { positions, .. } => positions,
        }
    }

    /// Returns `true` if the axis collapses.
    pub fn is_collapse(&self) -> bool {
        matches!(self, Resolved::Collapse(_))
    }
}

/// Resolves index expressions against the axes of a named array.
#[derive(Copy, Clone, Debug)]
pub struct IndexResolver<'a, K> {
    tables: &'a [NameTable<K>],
    labels: &'a [Key],
    shape: &'a [usize],
}

impl<'a, K: Name> IndexResolver<'a, K> {
    /// Create a resolver for axes with these name tables, labels and extents.
    ///
    /// **Panics** if the three slices differ in length.
    pub fn new(tables: &'a [NameTable<K>], labels: &'a [Key], shape: &'a [usize]) -> Self {
        assert_eq!(tables.len(), shape.len());
        assert_eq!(labels.len(), shape.len());
        IndexResolver {
            tables,
            labels,
            shape,
        }
    }

    /// Put the terms of an index expression in axis order.
    ///
    /// A positional expression must have one term per axis. In an axis-keyed
    /// expression every term is `IndexTerm::Axis`; axes no term claims are
    /// `None`, meaning every position.
    ///
    /// **Errors** with `AmbiguousAxis` if two terms claim the same axis or a
    /// term's label is carried by more than one axis, and with `UnknownAxis`
    /// if no axis carries it.
    pub fn normalize<'t>(
        &self,
        terms: &'t [IndexTerm<K>],
    ) -> Result<Vec<Option<&'t IndexTerm<K>>>, NameError> {
        let ndim = self.shape.len();
        if !terms.iter().any(IndexTerm::is_axis) {
            if terms.len() != ndim {
                return Err(NameError::IndexCount {
                    expected: ndim,
                    found: terms.len(),
                });
            }
            return Ok(terms.iter().map(Some).collect());
        }

        let mut by_axis = vec![None; ndim];
        for term in terms {
            let (label, inner) = match term {
                IndexTerm::Axis(label, inner) => (label, &**inner),
                _ => {
                    return Err(NameError::MisplacedAxis {
                        label: first_axis_label(terms),
                    })
                }
            };
            let mut matching = self.labels.iter().enumerate().filter(|(_, l)| *l == label);
            let axis = match (matching.next(), matching.next()) {
                (Some((axis, _)), None) => axis,
                (None, _) => {
                    return Err(NameError::UnknownAxis {
                        label: label.to_string(),
                    })
                }
                (Some(_), Some(_)) => {
                    return Err(NameError::AmbiguousAxis {
                        label: label.to_string(),
                    })
                }
            };
            if by_axis[axis].replace(inner).is_some() {
                return Err(NameError::AmbiguousAxis {
                    label: label.to_string(),
                });
            }
        }
        Ok(by_axis)
    }

    /// Resolve an index expression to one `Resolved` per axis.
    pub fn resolve(&self, terms: &[IndexTerm<K>]) -> Result<Vec<Resolved<K>>, NameError> {
        let terms = self.normalize(terms)?;
        terms
            .into_iter()
            .enumerate()
            .map(|(axis, term)| {
                let resolved = match term {
                    Some(term) => self.resolve_axis(axis, term),
                    None => Ok(self.all(axis)),
                }?;
                trace!(axis = %self.labels[axis], positions = ?resolved.positions(), "resolved axis");
                Ok(resolved)
            })
            .collect()
    }

    /// Resolve one term against axis `axis`.
    pub fn resolve_axis(&self, axis: usize, term: &IndexTerm<K>) -> Result<Resolved<K>, NameError> {
        let table = &self.tables[axis];
        let len = self.shape[axis];
        let resolved = match term {
            IndexTerm::Name(key) => table.lookup(key).map(Resolved::Collapse),
            IndexTerm::Pos(p) => abs_position(*p, len).map(Resolved::Collapse),
            IndexTerm::Names(keys) => table.positions(keys).map(|ps| self.survive(axis, ps)),
            IndexTerm::Positions(ps) => ps
                .iter()
                .map(|&p| abs_position(p, len))
                .collect::<Result<Vec<_>, _>>()
                .map(|ps| self.survive(axis, ps)),
            IndexTerm::Range(slice) => slice_positions(*slice, len).map(|ps| self.survive(axis, ps)),
            IndexTerm::All => Ok(self.all(axis)),
            IndexTerm::Not(inner) => {
                if let IndexTerm::Axis(label, _) = &**inner {
                    return Err(NameError::MisplacedAxis {
                        label: label.to_string(),
                    });
                }
                let excluded = self.resolve_axis(axis, inner)?;
                let mut keep = vec![true; len];
                for &p in excluded.positions() {
                    keep[p] = false;
                }
                let ps = (0..len).filter(|&p| keep[p]).collect();
                Ok(self.survive(axis, ps))
            }
            IndexTerm::Axis(label, _) => Err(NameError::MisplacedAxis {
                label: label.to_string(),
            }),
        };
        resolved.map_err(|e| e.on_axis(&self.labels[axis]))
    }

    fn all(&self, axis: usize) -> Resolved<K> {
        self.survive(axis, (0..self.shape[axis]).collect())
    }

    fn survive(&self, axis: usize, positions: Vec<usize>) -> Resolved<K> {
        let table = &self.tables[axis];
        let names = positions
            .iter()
            .map(|&p| table.keys()[p].clone())
            .collect();
        Resolved::Survive { positions, names }
    }
}

fn first_axis_label<K>(terms: &[IndexTerm<K>]) -> String {
    terms
        .iter()
        .find_map(|t| match t {
            IndexTerm::Axis(label, _) => Some(label.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Convert a possibly negative position to an absolute one.
fn abs_position(position: isize, len: usize) -> Result<usize, NameError> {
    let abs = if position < 0 {
        position + len as isize
    } else {
        position
    };
    if abs < 0 || abs >= len as isize {
        return Err(NameError::OutOfRange {
            axis: None,
            position,
            len,
        });
    }
    Ok(abs as usize)
}

/// Return the positions selected by `slice` along an axis of length `len`.
///
/// Negative `start` and `end` count from the back. A negative step walks the
/// range `start..end` from its back.
///
/// **Panics** if `step` is zero.
fn slice_positions(slice: Slice, len: usize) -> Result<Vec<usize>, NameError> {
    assert_ne!(slice.step, 0, "Slice step must be nonzero");
    let bound = |index: isize| {
        let abs = if index < 0 { index + len as isize } else { index };
        if abs < 0 || abs > len as isize {
            Err(NameError::OutOfRange {
                axis: None,
                position: index,
                len,
            })
        } else {
            Ok(abs as usize)
        }
    };
    let start = bound(slice.start)?;
    let end = match slice.end {
        Some(end) => bound(end)?.max(start),
        None => len,
    };
    let step = slice.step.unsigned_abs();
    let positions = if slice.step > 0 {
        (start..end).step_by(step).collect()
    } else {
        (start..end).rev().step_by(step).collect()
    };
    Ok(positions)
}
