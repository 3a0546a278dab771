// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;
use std::iter::FusedIterator;

use crate::{ArrayValue, Ix, Shape, ShapePolicy};

/// An iterator over the full indices of a shape.
///
/// Indices come in canonical order: the last axis varies fastest and the
/// first axis slowest, so the sequence is increasing in lexicographic
/// order. An empty shape (any extent zero) produces nothing; a shape of
/// rank 0 produces one empty index.
///
/// Iterator element type is `Vec<Ix>`.
///
/// The length is exact unless the number of indices overflows `usize`;
/// then the size hint has no upper bound and `len()` panics.
///
/// ```
/// use ndconvert::indices;
///
/// let all: Vec<_> = indices(vec![2, 2]).collect();
/// assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
#[derive(Clone, Debug)]
pub struct Indices {
    shape: Shape,
    index: Option<Vec<Ix>>,
    remaining: Option<usize>,
}

impl Indices {
    pub(crate) fn new(dims: Vec<Ix>) -> Self {
        let shape = Shape::rect(dims);
        Indices {
            index: shape.first_index(),
            remaining: shape.size_checked(),
            shape,
        }
    }

    /// The extents being enumerated.
    pub fn dims(&self) -> &[Ix] {
        self.shape.dims()
    }
}

/// Create an iterator over the indices of the shape `dims`.
pub fn indices(dims: impl Into<Vec<Ix>>) -> Indices {
    Indices::new(dims.into())
}

/// Create an iterator over the indices of `value`.
///
/// For a jagged array this is its `Max` shape, extended to its depth: every
/// index any row could hold.
pub fn indices_of(value: &ArrayValue) -> Indices {
    let shape = value.shape(true, ShapePolicy::Max).padded(value.ndim());
    shape.indices()
}

impl Iterator for Indices {
    type Item = Vec<Ix>;

    #[inline]
    fn next(&mut self) -> Option<Vec<Ix>> {
        let index = self.index.take()?;
        self.index = self.shape.next_for(index.clone());
        if let Some(n) = &mut self.remaining {
            *n -= 1;
        }
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rank_zero_yields_one_empty_index() {
        let mut it = indices(Vec::<Ix>::new());
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(vec![]));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn len_counts_down() {
        let mut it = indices([3, 2]);
        assert_eq!(it.len(), 6);
        it.next();
        it.next();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(vec![1, 0]));
    }

    #[test]
    fn overflowing_shape_has_no_upper_bound() {
        let mut it = indices([usize::MAX, 2]);
        assert_eq!(it.size_hint(), (usize::MAX, None));
        assert_eq!(it.next(), Some(vec![0, 0]));
        assert_eq!(it.next(), Some(vec![0, 1]));
        assert_eq!(it.size_hint(), (usize::MAX, None));
    }
}
