// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The layout-erased array and the shape predicates.
use crate::{ElemKind, JaggedArray, Layout, RectArray, Shape, ShapePolicy};

/// An array whose layout, rank and element kind are known only at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayValue {
    Rect(RectArray),
    Jagged(JaggedArray),
}

impl ArrayValue {
    #[inline]
    pub fn layout(&self) -> Layout {
        match self {
            ArrayValue::Rect(_) => Layout::Rectangular,
            ArrayValue::Jagged(_) => Layout::Jagged,
        }
    }

    /// Return the innermost element kind.
    #[inline]
    pub fn kind(&self) -> ElemKind {
        match self {
            ArrayValue::Rect(a) => a.kind(),
            ArrayValue::Jagged(a) => a.kind(),
        }
    }

    /// Return the rank: the number of axes of a rectangular array or the
    /// depth of a jagged one.
    pub fn ndim(&self) -> usize {
        match self {
            ArrayValue::Rect(a) => a.ndim(),
            ArrayValue::Jagged(a) => a.depth(),
        }
    }

    /// Compute the shape.
    ///
    /// The extents of a rectangular array are exact, and `deep` and
    /// `policy` only matter for jagged arrays; see [`JaggedArray::shape`].
    pub fn shape(&self, deep: bool, policy: ShapePolicy) -> Shape {
        match self {
            ArrayValue::Rect(a) => a.shape(),
            ArrayValue::Jagged(a) => a.shape(deep, policy),
        }
    }

    /// Return true for a one-dimensional array: a rank 1 rectangular array
    /// or a jagged array of depth 1.
    pub fn is_vector(&self) -> bool {
        self.ndim() == 1
    }

    /// Return true for a jagged array whose elements are themselves rows.
    pub fn is_jagged(&self) -> bool {
        match self {
            ArrayValue::Rect(_) => false,
            ArrayValue::Jagged(a) => a.depth() > 1,
        }
    }

    pub fn as_rect(&self) -> Option<&RectArray> {
        match self {
            ArrayValue::Rect(a) => Some(a),
            ArrayValue::Jagged(_) => None,
        }
    }

    pub fn as_jagged(&self) -> Option<&JaggedArray> {
        match self {
            ArrayValue::Jagged(a) => Some(a),
            ArrayValue::Rect(_) => None,
        }
    }

    pub fn into_rect(self) -> Option<RectArray> {
        match self {
            ArrayValue::Rect(a) => Some(a),
            ArrayValue::Jagged(_) => None,
        }
    }

    pub fn into_jagged(self) -> Option<JaggedArray> {
        match self {
            ArrayValue::Jagged(a) => Some(a),
            ArrayValue::Rect(_) => None,
        }
    }
}

impl From<RectArray> for ArrayValue {
    fn from(a: RectArray) -> Self {
        ArrayValue::Rect(a)
    }
}

impl From<JaggedArray> for ArrayValue {
    fn from(a: JaggedArray) -> Self {
        ArrayValue::Jagged(a)
    }
}

/// Return true if `value` is one-dimensional.
pub fn is_vector(value: &ArrayValue) -> bool {
    value.is_vector()
}

/// Return true if the elements of `value` are themselves rows.
pub fn is_jagged(value: &ArrayValue) -> bool {
    value.is_jagged()
}

/// Return the kind of the innermost leaves of `value`, however deeply they
/// are nested.
pub fn innermost_element_type(value: &ArrayValue) -> ElemKind {
    value.kind()
}

/// Compute the shape of `value`; see [`ArrayValue::shape`].
pub fn shape_of(value: &ArrayValue, deep: bool, policy: ShapePolicy) -> Shape {
    value.shape(deep, policy)
}
