// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Approximate equality of named arrays: names and labels must match exactly,
//! elements approximately.
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::key::Name;
use crate::named_array::NamedArray;

impl<A, K: Name> NamedArray<A, K> {
    fn same_names(&self, other: &Self) -> bool {
        self.name_tables() == other.name_tables() && self.dim_labels() == other.dim_labels()
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, K> AbsDiffEq for NamedArray<A, K>
where
    A: AbsDiffEq,
    A::Epsilon: Clone,
    K: Name,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: A::Epsilon) -> bool {
        self.same_names(other) && self.array().abs_diff_eq(other.array(), epsilon)
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, K> RelativeEq for NamedArray<A, K>
where
    A: RelativeEq,
    A::Epsilon: Clone,
    K: Name,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        self.same_names(other) && self.array().relative_eq(other.array(), epsilon, max_relative)
    }
}

/// **Requires crate feature `"approx"`.**
impl<A, K> UlpsEq for NamedArray<A, K>
where
    A: UlpsEq,
    A::Epsilon: Clone,
    K: Name,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        self.same_names(other) && self.array().ulps_eq(other.array(), epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use crate::key::Key;
    use crate::named_array::NamedArray;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};
    use ndarray::{arr1, Axis};

    #[test]
    fn names_compare_exactly() {
        let a = NamedArray::<_, Key>::new(arr1(&[1.0f64, 2.0]));
        let b = NamedArray::<_, Key>::new(arr1(&[1.0f64 + 1e-12, 2.0]));
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        assert_relative_eq!(a, b, max_relative = 1e-9);
        let mut c = b.clone();
        c.set_names(Axis(0), vec![Key::sym("x"), Key::sym("y")]).unwrap();
        assert_abs_diff_ne!(a, c, epsilon = 1e-9);
    }
}
