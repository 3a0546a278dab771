// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The rectangular layout.
use alloc::vec;
use alloc::vec::Vec;
use std::ops::Index;
use std::slice;

use crate::error::{checked_size, ArrayError};
use crate::{ElemKind, Element, Ix, Scalar, Shape};

/// A rectangular array: one contiguous, row-major block of leaves of a
/// single kind, addressed by a full index.
///
/// All rows of a rectangular array have the same length by construction.
#[derive(Clone, PartialEq)]
pub struct RectArray {
    kind: ElemKind,
    dim: Vec<Ix>,
    strides: Vec<Ix>,
    data: Vec<Scalar>,
}

impl RectArray {
    /// Create an array of shape `dim` filled with the default value of
    /// `kind`.
    ///
    /// **Panics** if the number of elements overflows `usize`.
    pub fn zeros(kind: ElemKind, dim: impl Into<Vec<Ix>>) -> Self {
        RectArray::from_elem(dim, Scalar::zero(kind))
    }

    /// Create an array of shape `dim` with every element set to `elem`.
    ///
    /// **Panics** if the number of elements overflows `usize`.
    pub fn from_elem(dim: impl Into<Vec<Ix>>, elem: Scalar) -> Self {
        let shape = Shape::rect(dim);
        let size = size_of_shape_checked(&shape);
        RectArray {
            kind: elem.kind(),
            strides: shape.default_strides(),
            data: vec![elem; size],
            dim: shape.dims().to_vec(),
        }
    }

    /// Create an array of shape `dim` from a vector in row-major order.
    ///
    /// ```
    /// use ndconvert::{ElemKind, RectArray};
    ///
    /// let a = RectArray::from_shape_vec(vec![2, 3], vec![1u8, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(a.kind(), ElemKind::U8);
    /// assert_eq!(a.to_vec::<u8>(), Some(vec![1, 2, 3, 4, 5, 6]));
    /// ```
    ///
    /// **Errors** if the length of `v` is not the size of the shape.
    pub fn from_shape_vec<T: Element>(dim: impl Into<Vec<Ix>>, v: Vec<T>) -> Result<Self, ArrayError> {
        let data = v.into_iter().map(T::into_scalar).collect();
        RectArray::from_shape_scalars(T::KIND, dim, data)
    }

    /// Create an array of kind `kind` and shape `dim` from leaves in
    /// row-major order.
    ///
    /// **Errors** if the length of `data` is not the size of the shape, or
    /// a leaf is not of kind `kind`, or with `Overflow` if the size of the
    /// shape does not fit in `usize`.
    pub fn from_shape_scalars(kind: ElemKind, dim: impl Into<Vec<Ix>>, data: Vec<Scalar>) -> Result<Self, ArrayError> {
        let shape = Shape::rect(dim);
        let size = checked_size(&shape)?;
        if size != data.len() {
            return Err(ArrayError::LengthMismatch { size, len: data.len() });
        }
        if let Some(other) = data.iter().find(|s| s.kind() != kind) {
            return Err(ArrayError::KindMismatch {
                expected: kind,
                got: other.kind(),
            });
        }
        Ok(RectArray {
            kind,
            strides: shape.default_strides(),
            dim: shape.dims().to_vec(),
            data,
        })
    }

    // Leaves must already match `dim` in number and `kind` in kind.
    pub(crate) fn from_parts(kind: ElemKind, dim: Vec<Ix>, data: Vec<Scalar>) -> Self {
        let shape = Shape::rect(dim);
        debug_assert_eq!(shape.size(), data.len());
        RectArray {
            kind,
            strides: shape.default_strides(),
            dim: shape.dims().to_vec(),
            data,
        }
    }

    #[inline]
    pub fn kind(&self) -> ElemKind {
        self.kind
    }

    /// Return the shape of the array.
    pub fn shape(&self) -> Shape {
        Shape::rect(self.dim.clone())
    }

    /// Return the extent of each axis.
    #[inline]
    pub fn dim(&self) -> &[Ix] {
        &self.dim
    }

    /// Return the distance in the data between neighbours along each axis.
    #[inline]
    pub fn strides(&self) -> &[Ix] {
        &self.strides
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.dim.len()
    }

    /// Return the total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the leaves in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    /// Return an iterator over the leaves in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, Scalar> {
        self.data.iter()
    }

    /// Return the leaves as `T`, or `None` if `T` is not the array's kind.
    pub fn to_vec<T: Element>(&self) -> Option<Vec<T>> {
        if T::KIND != self.kind {
            return None;
        }
        self.data.iter().cloned().map(T::from_scalar).collect()
    }

    /// Return the leaves, consuming the array.
    pub fn into_raw_vec(self) -> Vec<Scalar> {
        self.data
    }

    /// Return the row-major offset of a full index.
    pub(crate) fn offset_of(&self, index: &[Ix]) -> Result<usize, ArrayError> {
        if index.len() != self.ndim() {
            return Err(ArrayError::IncompatibleShape {
                expected: self.ndim(),
                got: index.len(),
            });
        }
        let mut offset = 0;
        for (axis, ((&i, &d), &s)) in index.iter().zip(&self.dim).zip(&self.strides).enumerate() {
            if i >= d {
                return Err(ArrayError::IndexOutOfRange { axis, index: i, len: d });
            }
            offset += i * s;
        }
        Ok(offset)
    }

    #[inline]
    pub(crate) fn slot(&self, offset: usize) -> &Scalar {
        &self.data[offset]
    }

    /// Overwrite the leaf at `offset`, which must already be checked.
    #[inline]
    pub(crate) fn put(&mut self, offset: usize, value: Scalar) {
        debug_assert_eq!(value.kind(), self.kind);
        self.data[offset] = value;
    }
}

fn size_of_shape_checked(shape: &Shape) -> usize {
    match shape.size_checked() {
        Some(size) => size,
        None => panic!("ndconvert: shape {} is too large, the number of elements overflows usize", shape),
    }
}

#[cold]
#[inline(never)]
fn array_out_of_bounds() -> ! {
    panic!("ndconvert: index out of bounds");
}

/// Access the element at **index**.
///
/// **Panics** if index is out of bounds or has the wrong number of axes.
impl<'a> Index<&'a [Ix]> for RectArray {
    type Output = Scalar;

    fn index(&self, index: &'a [Ix]) -> &Scalar {
        match self.offset_of(index) {
            Ok(offset) => self.slot(offset),
            Err(_) => array_out_of_bounds(),
        }
    }
}

impl<'a> IntoIterator for &'a RectArray {
    type Item = &'a Scalar;
    type IntoIter = slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
