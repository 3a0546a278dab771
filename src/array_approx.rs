// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use approx::{AbsDiffEq, RelativeEq};

use crate::{JaggedArray, Node, RectArray, Scalar};

// Floating point leaves are compared approximately; every other kind,
// and any pair of different kinds, exactly.
fn scalar_eq<F>(a: &Scalar, b: &Scalar, close: F) -> bool
where F: Fn(f64, f64) -> bool {
    match (a, b) {
        (Scalar::F32(x), Scalar::F32(y)) => close(f64::from(*x), f64::from(*y)),
        (Scalar::F64(x), Scalar::F64(y)) => close(*x, *y),
        (Scalar::Complex(x), Scalar::Complex(y)) => close(x.re, y.re) && close(x.im, y.im),
        _ => a == b,
    }
}

fn rows_eq<F>(a: &[Node], b: &[Node], close: &F) -> bool
where F: Fn(f64, f64) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|pair| match pair {
            (Node::Leaf(x), Node::Leaf(y)) => scalar_eq(x, y, close),
            (Node::Row(x), Node::Row(y)) => rows_eq(x, y, close),
            _ => false,
        })
}

/// **Requires crate feature `"approx"`**
impl AbsDiffEq for Scalar {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Scalar, epsilon: f64) -> bool {
        scalar_eq(self, other, |x, y| x.abs_diff_eq(&y, epsilon))
    }
}

/// **Requires crate feature `"approx"`**
impl RelativeEq for Scalar {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Scalar, epsilon: f64, max_relative: f64) -> bool {
        scalar_eq(self, other, |x, y| x.relative_eq(&y, epsilon, max_relative))
    }
}

/// **Requires crate feature `"approx"`**
///
/// Arrays of different shapes or kinds are never equal.
impl AbsDiffEq for RectArray {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &RectArray, epsilon: f64) -> bool {
        if self.kind() != other.kind() || self.dim() != other.dim() {
            return false;
        }
        self.iter()
            .zip(other)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

/// **Requires crate feature `"approx"`**
impl RelativeEq for RectArray {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &RectArray, epsilon: f64, max_relative: f64) -> bool {
        if self.kind() != other.kind() || self.dim() != other.dim() {
            return false;
        }
        self.iter()
            .zip(other)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// **Requires crate feature `"approx"`**
///
/// Arrays are compared row by row; rows of different lengths are never
/// equal.
impl AbsDiffEq for JaggedArray {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &JaggedArray, epsilon: f64) -> bool {
        self.kind() == other.kind()
            && self.depth() == other.depth()
            && rows_eq(self.rows(), other.rows(), &|x: f64, y: f64| x.abs_diff_eq(&y, epsilon))
    }
}

/// **Requires crate feature `"approx"`**
impl RelativeEq for JaggedArray {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &JaggedArray, epsilon: f64, max_relative: f64) -> bool {
        self.kind() == other.kind()
            && self.depth() == other.depth()
            && rows_eq(self.rows(), other.rows(), &|x: f64, y: f64| {
                x.relative_eq(&y, epsilon, max_relative)
            })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};

    use crate::{arr1, arr2, jagged, Scalar};

    #[test]
    fn rect_abs_diff_eq() {
        let a = arr2(&[[1.0f64, 2.0], [3.0, 4.0]]);
        let b = arr2(&[[1.0f64 + 1e-9, 2.0], [3.0, 4.0 - 1e-9]]);
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        assert_abs_diff_ne!(a, b);
        assert_abs_diff_ne!(arr1(&[1.0f64, 2.0]), arr1(&[1.0f32, 2.0]), epsilon = 1.);
    }

    #[test]
    fn jagged_relative_eq() {
        let a = jagged(vec![vec![100.0f64, 200.0], vec![300.0]]);
        let b = jagged(vec![vec![100.0f64 * (1. + 1e-10), 200.0], vec![300.0]]);
        assert_relative_eq!(a, b, max_relative = 1e-8);
        let c = jagged(vec![vec![100.0f64], vec![200.0, 300.0]]);
        assert_abs_diff_ne!(a, c, epsilon = 1e3);
    }

    #[test]
    fn integers_are_exact() {
        assert_abs_diff_ne!(Scalar::I32(1), Scalar::I32(2), epsilon = 10.);
        assert_abs_diff_eq!(Scalar::I32(2), Scalar::I32(2));
    }
}
