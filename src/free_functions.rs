// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;

use crate::{Element, JaggedArray, Nested, RectArray, Scalar};

fn from_scalars<T: Element>(dim: [usize; 3], ndim: usize, data: Vec<Scalar>) -> RectArray {
    RectArray::from_parts(T::KIND, dim[..ndim].to_vec(), data)
}

/// Create a one-dimensional rectangular array with elements from `xs`.
///
/// ```
/// use ndconvert::{arr1, ElemKind};
///
/// let a = arr1(&[1.0f32, 2.0, 3.0]);
/// assert_eq!(a.dim(), &[3]);
/// assert_eq!(a.kind(), ElemKind::F32);
/// ```
pub fn arr1<T: Element>(xs: &[T]) -> RectArray {
    let data = xs.iter().cloned().map(T::into_scalar).collect();
    from_scalars::<T>([xs.len(), 0, 0], 1, data)
}

/// Create a two-dimensional rectangular array with elements from `xs`.
///
/// ```
/// use ndconvert::{arr2, NdAccess, Scalar};
///
/// let a = arr2(&[[1u8, 2, 3],
///                [4, 5, 6]]);
/// assert_eq!(a.dim(), &[2, 3]);
/// assert_eq!(a.get(&[1, 0], false).unwrap().leaf(), Some(&Scalar::U8(4)));
/// ```
pub fn arr2<T: Element, const N: usize>(xs: &[[T; N]]) -> RectArray {
    let data = xs
        .iter()
        .flat_map(|row| row.iter().cloned().map(T::into_scalar))
        .collect();
    from_scalars::<T>([xs.len(), N, 0], 2, data)
}

/// Create a three-dimensional rectangular array with elements from `xs`.
///
/// ```
/// use ndconvert::arr3;
///
/// let a = arr3(&[[[1, 2], [3, 4]],
///                [[5, 6], [7, 8]],
///                [[9, 0], [1, 2]]]);
/// assert_eq!(a.dim(), &[3, 2, 2]);
/// ```
pub fn arr3<T: Element, const N: usize, const M: usize>(xs: &[[[T; M]; N]]) -> RectArray {
    let data = xs
        .iter()
        .flat_map(|plane| plane.iter())
        .flat_map(|row| row.iter().cloned().map(T::into_scalar))
        .collect();
    from_scalars::<T>([xs.len(), N, M], 3, data)
}

/// Create a jagged array from nested vectors.
///
/// The depth is one more than the number of `Vec` levels inside `rows` and
/// the kind is that of the innermost element type.
///
/// ```
/// use ndconvert::{jagged, ElemKind};
///
/// let a = jagged(vec![vec![vec![1.5f64]], vec![], vec![vec![2.5, 3.5]]]);
/// assert_eq!(a.depth(), 3);
/// assert_eq!(a.kind(), ElemKind::F64);
/// assert_eq!(a.len(), 3);
/// ```
pub fn jagged<T: Nested>(rows: Vec<T>) -> JaggedArray {
    JaggedArray::from_nested(rows)
}
