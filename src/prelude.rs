// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndarray-named prelude.
//!
//! This module contains the most used types, functions and macros that you
//! can import easily as a group.
//!
//! ```
//! use ndarray_named::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::{IndexTerm, Key, NameError, NameTable, NamedArray, Selection};

#[doc(no_inline)]
pub use crate::{axis, concatenate, name, names, pos};

pub use crate::nx;
