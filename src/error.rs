// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use ndarray::ShapeError;

use crate::key::KeyType;

/// An error from resolving names or positions against a named array.
///
/// Errors raised by a lone [`NameTable`](crate::NameTable) do not know which
/// axis they belong to; the named array attaches its axis label before
/// returning them.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NameError {
    /// One or more names are absent from the axis' name table.
    #[error("unknown name(s) {keys:?}{}", on_axis(.axis))]
    UnknownName { axis: Option<String>, keys: Vec<String> },

    /// A key's type differs from the key type fixed for the axis.
    #[error("key {key} is {found:?}, expected {expected:?}{}", on_axis(.axis))]
    TypeMismatch {
        axis: Option<String>,
        key: String,
        expected: KeyType,
        found: KeyType,
    },

    /// A key would appear twice in a name table.
    #[error("duplicate key {key}{}", on_axis(.axis))]
    DuplicateKey { axis: Option<String>, key: String },

    /// Two axis-keyed terms claim the same axis, or a term's label is carried
    /// by more than one axis.
    #[error("axis {label} is addressed more than once")]
    AmbiguousAxis { label: String },

    /// An axis-keyed term names a label no axis carries.
    #[error("no axis is labelled {label}")]
    UnknownAxis { label: String },

    /// A position lies outside the extent of its axis.
    #[error("position {position} out of range for length {len}{}", on_axis(.axis))]
    OutOfRange {
        axis: Option<String>,
        position: isize,
        len: usize,
    },

    /// A list of names or labels has the wrong length.
    #[error("expected {expected} entries, found {found}{}", on_axis(.axis))]
    LengthMismatch {
        axis: Option<String>,
        expected: usize,
        found: usize,
    },

    /// A positional index expression does not have one term per axis.
    #[error("expected {expected} index terms, found {found}")]
    IndexCount { expected: usize, found: usize },

    /// An axis-keyed term is mixed with positional terms or nested.
    #[error("axis-keyed term for {label} must appear at the top level of an all axis-keyed index")]
    MisplacedAxis { label: String },

    /// Incompatible shapes, passed through from `ndarray`.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

fn on_axis(axis: &Option<String>) -> String {
    match axis {
        Some(label) => format!(" on axis {}", label),
        None => String::new(),
    }
}

/// Error code for a [`NameError`].
///
/// This enumeration is not exhaustive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// name absent from a name table
    UnknownName,
    /// key of the wrong type for the axis
    TypeMismatch,
    /// repeated key in a name table
    DuplicateKey,
    /// two axis-keyed terms target the same axis
    AmbiguousAxis,
    /// axis-keyed term names no axis
    UnknownAxis,
    /// position outside the axis extent
    OutOfRange,
    /// shapes of value and selection are incompatible
    ShapeMismatch,
    /// wrong number of names or labels
    LengthMismatch,
    /// wrong number of index terms
    IndexCount,
    /// axis-keyed term in a position it cannot appear
    MisplacedAxis,
}

impl NameError {
    /// Return the `ErrorKind` of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NameError::UnknownName { .. } => ErrorKind::UnknownName,
            NameError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            NameError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            NameError::AmbiguousAxis { .. } => ErrorKind::AmbiguousAxis,
            NameError::UnknownAxis { .. } => ErrorKind::UnknownAxis,
            NameError::OutOfRange { .. } => ErrorKind::OutOfRange,
            NameError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            NameError::IndexCount { .. } => ErrorKind::IndexCount,
            NameError::MisplacedAxis { .. } => ErrorKind::MisplacedAxis,
            NameError::Shape(_) => ErrorKind::ShapeMismatch,
        }
    }

    /// Attach the label of the axis the error was raised on, unless one is
    /// already present.
    pub(crate) fn on_axis(mut self, label: &impl std::fmt::Display) -> Self {
        match &mut self {
            NameError::UnknownName { axis, .. }
            | NameError::TypeMismatch { axis, .. }
            | NameError::DuplicateKey { axis, .. }
            | NameError::OutOfRange { axis, .. }
            | NameError::LengthMismatch { axis, .. } => {
                if axis.is_none() {
                    *axis = Some(label.to_string());
                }
            }
            _ => {}
        }
        self
    }
}

pub(crate) fn incompatible_shapes() -> NameError {
    NameError::Shape(ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape))
}
