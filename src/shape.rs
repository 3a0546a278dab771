// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec;
use alloc::vec::Vec;
use std::fmt;
use std::ops::Index;

use num_integer::Integer;

use crate::error::{incompatible_shape, out_of_range, ArrayError};
use crate::{Indices, Ix};

/// The memory layout of an array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One contiguous block addressed by a full index.
    Rectangular,
    /// Nested rows of independent length.
    Jagged,
}

impl Layout {
    #[inline]
    pub fn is_jagged(self) -> bool {
        self == Layout::Jagged
    }
}

/// Which row stands for a whole level when the shape of a jagged array is
/// computed.
///
/// The two only differ for ragged arrays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShapePolicy {
    /// Each level has the length of its first row.
    Uniform,
    /// Each level has the length of its longest row.
    #[default]
    Max,
}

/// The extents of an array, one per axis, and the layout they were
/// computed for.
///
/// The size of a shape is the product of its extents; the shape of rank 0
/// has size 1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<Ix>,
    layout: Layout,
}

impl Shape {
    pub fn new(dims: impl Into<Vec<Ix>>, layout: Layout) -> Self {
        Shape {
            dims: dims.into(),
            layout,
        }
    }

    /// Create a shape of a rectangular array.
    pub fn rect(dims: impl Into<Vec<Ix>>) -> Self {
        Shape::new(dims, Layout::Rectangular)
    }

    /// Create a shape of a jagged array.
    pub fn jagged(dims: impl Into<Vec<Ix>>) -> Self {
        Shape::new(dims, Layout::Jagged)
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    #[inline]
    pub fn dims(&self) -> &[Ix] {
        &self.dims
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Compute the number of elements, the product of all extents.
    ///
    /// The product is not checked for overflow; see [`size_checked`](Self::size_checked).
    pub fn size(&self) -> usize {
        self.dims.iter().product()
    }

    /// Compute the size while checking for overflow.
    pub fn size_checked(&self) -> Option<usize> {
        self.dims
            .iter()
            .try_fold(1usize, |s, &d| s.checked_mul(d))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.contains(&0)
    }

    /// Row-major strides: shape `(a, b, c)` gives strides `(b * c, c, 1)`.
    pub fn default_strides(&self) -> Vec<Ix> {
        let mut strides = vec![0; self.ndim()];
        // an empty array has all strides zero
        if !self.is_empty() {
            let mut cum_prod = 1;
            for (s, &d) in strides.iter_mut().zip(&self.dims).rev() {
                *s = cum_prod;
                cum_prod *= d;
            }
        }
        strides
    }

    /// Return the row-major linear offset of the full index `index`.
    ///
    /// **Errors** if `index` has the wrong number of axes, or a component
    /// is not less than its extent.
    pub fn offset_of(&self, index: &[Ix]) -> Result<usize, ArrayError> {
        if index.len() != self.ndim() {
            return Err(incompatible_shape(self.ndim(), index.len()));
        }
        let mut offset = 0;
        for (axis, (&i, &d)) in index.iter().zip(&self.dims).enumerate() {
            if i >= d {
                return Err(out_of_range(axis, i, d));
            }
            offset = offset * d + i;
        }
        Ok(offset)
    }

    /// Return the full index at the row-major linear offset `offset`, or
    /// `None` if it is not less than the size.
    pub fn unravel(&self, offset: usize) -> Option<Vec<Ix>> {
        // a size past usize::MAX bounds every offset
        if matches!(self.size_checked(), Some(size) if offset >= size) {
            return None;
        }
        let mut index = vec![0; self.ndim()];
        let mut rest = offset;
        for (ix, &d) in index.iter_mut().zip(&self.dims).rev() {
            let (q, r) = rest.div_rem(&d);
            *ix = r;
            rest = q;
        }
        Some(index)
    }

    /// The first index in canonical order, or `None` for an empty shape.
    pub fn first_index(&self) -> Option<Vec<Ix>> {
        if self.is_empty() {
            None
        } else {
            Some(vec![0; self.ndim()])
        }
    }

    /// Return the index after `index` in canonical order (last axis
    /// fastest), or `None` if `index` was the last one.
    pub fn next_for(&self, mut index: Vec<Ix>) -> Option<Vec<Ix>> {
        for (&d, ix) in self.dims.iter().zip(index.iter_mut()).rev() {
            *ix += 1;
            if *ix == d {
                *ix = 0;
            } else {
                return Some(index);
            }
        }
        None
    }

    /// Return an iterator over every full index of the shape, in canonical
    /// order.
    pub fn indices(&self) -> Indices {
        Indices::new(self.dims.clone())
    }

    /// Extend the shape with zero extents up to rank `ndim`.
    pub fn padded(mut self, ndim: usize) -> Self {
        if self.dims.len() < ndim {
            self.dims.resize(ndim, 0);
        }
        self
    }

    /// Raise each extent from axis `first_axis` on to the matching extent
    /// of `other`, taking the extra axes of `other` as they are.
    pub(crate) fn max_with(&mut self, first_axis: usize, other: &[Ix]) {
        for (axis, &d) in (first_axis..).zip(other) {
            match self.dims.get_mut(axis) {
                Some(own) => *own = (*own).max(d),
                None => self.dims.push(d),
            }
        }
    }
}

impl Index<usize> for Shape {
    type Output = Ix;

    fn index(&self, axis: usize) -> &Ix {
        &self.dims[axis]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", d)?;
        }
        f.write_str("]")
    }
}
