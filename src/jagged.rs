// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The jagged layout.
use alloc::vec;
use alloc::vec::Vec;
use std::slice;

use crate::error::{checked_size, incompatible_shape, ArrayError};
use crate::{ElemKind, Ix, Scalar, Shape, ShapePolicy};

/// One level of a jagged array: a leaf, or a row of nodes one level
/// further down.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Leaf(Scalar),
    Row(Vec<Node>),
}

impl Node {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(*self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Scalar> {
        match self {
            Node::Leaf(s) => Some(s),
            Node::Row(_) => None,
        }
    }

    pub fn as_row(&self) -> Option<&[Node]> {
        match self {
            Node::Row(r) => Some(r),
            Node::Leaf(_) => None,
        }
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Node {
        Node::Leaf(s)
    }
}

/// A jagged array: nested rows that may each have their own length.
///
/// A `JaggedArray` of depth `n` is addressed by up to `n` indices; every
/// leaf sits exactly `depth` levels down and has the array's kind. Rows at
/// the same level may differ in length, in which case the array is
/// *ragged*.
///
/// ```
/// use ndconvert::{jagged, ElemKind, ShapePolicy};
///
/// let a = jagged(vec![vec![1.0f32, 2.0, 3.0], vec![4.0]]);
/// assert_eq!(a.depth(), 2);
/// assert_eq!(a.kind(), ElemKind::F32);
/// assert!(a.is_ragged());
/// assert_eq!(a.shape(true, ShapePolicy::Uniform).dims(), &[2, 3]);
/// ```
#[derive(Clone, PartialEq)]
pub struct JaggedArray {
    kind: ElemKind,
    depth: usize,
    rows: Vec<Node>,
}

impl JaggedArray {
    /// Create a jagged array of depth `depth` from its top-level rows.
    ///
    /// **Errors** if `depth` is zero, a leaf does not sit exactly `depth`
    /// levels down, or a leaf is not of kind `kind`.
    pub fn new(kind: ElemKind, depth: usize, rows: Vec<Node>) -> Result<Self, ArrayError> {
        if depth == 0 {
            return Err(ArrayError::IncompatibleLayout);
        }
        for node in &rows {
            check_node(node, depth - 1, kind)?;
        }
        Ok(JaggedArray { kind, depth, rows })
    }

    /// Create an empty jagged array.
    ///
    /// **Panics** if `depth` is zero.
    pub fn empty(kind: ElemKind, depth: usize) -> Self {
        assert!(depth > 0, "ndconvert: a jagged array has at least one level");
        JaggedArray {
            kind,
            depth,
            rows: Vec::new(),
        }
    }

    /// Create a non-ragged jagged array with extents `dims`, filled with
    /// the default value of `kind`.
    ///
    /// **Errors** if `dims` is empty; a jagged array has at least one
    /// level. **Errors** with `Overflow` if the number of leaves does not
    /// fit in `usize`.
    pub fn zeros(kind: ElemKind, dims: &[Ix]) -> Result<Self, ArrayError> {
        if dims.is_empty() {
            return Err(ArrayError::IncompatibleLayout);
        }
        checked_size(&Shape::jagged(dims))?;
        Ok(JaggedArray {
            kind,
            depth: dims.len(),
            rows: filled_rows(dims, &Scalar::zero(kind)),
        })
    }

    /// Create a jagged array from nested vectors; depth and kind follow
    /// from the type.
    pub fn from_nested<T: Nested>(rows: Vec<T>) -> Self {
        JaggedArray {
            kind: T::KIND,
            depth: T::DEPTH + 1,
            rows: rows.into_iter().map(T::into_node).collect(),
        }
    }

    /// Return the rows as nested vectors, or `None` if the depth or kind
    /// of `T` does not match.
    ///
    /// ```
    /// use ndconvert::JaggedArray;
    ///
    /// let a = JaggedArray::from_nested(vec![vec![1i64], vec![2, 3]]);
    /// assert_eq!(a.clone().into_nested::<Vec<i64>>(), Some(vec![vec![1], vec![2, 3]]));
    /// assert_eq!(a.into_nested::<Vec<i32>>(), None);
    /// ```
    pub fn into_nested<T: Nested>(self) -> Option<Vec<T>> {
        if T::KIND != self.kind || T::DEPTH + 1 != self.depth {
            return None;
        }
        self.rows.into_iter().map(T::from_node).collect()
    }

    #[inline]
    pub fn kind(&self) -> ElemKind {
        self.kind
    }

    /// Return the number of levels, the rank of a full index.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn rows(&self) -> &[Node] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Node> {
        &mut self.rows
    }

    /// Return the number of top-level rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Return true if rows at some level differ in length.
    pub fn is_ragged(&self) -> bool {
        fn ragged(rows: &[Node], expect: &mut Vec<Option<usize>>, level: usize) -> bool {
            for node in rows {
                if let Node::Row(r) = node {
                    if expect.len() <= level {
                        expect.push(None);
                    }
                    let seen = expect[level];
                    match seen {
                        Some(len) if len != r.len() => return true,
                        Some(_) => {}
                        None => expect[level] = Some(r.len()),
                    }
                    if ragged(r, expect, level + 1) {
                        return true;
                    }
                }
            }
            false
        }
        ragged(&self.rows, &mut Vec::new(), 0)
    }

    /// Compute the shape.
    ///
    /// If `deep` is false, the shape is the number of top-level rows only.
    /// Otherwise each further level is measured by `policy`: the first row
    /// of the level (`Uniform`) or the longest (`Max`). Measuring stops at
    /// a level with no rows, so the shape of an array without rows is `[0]`
    /// whatever its depth.
    pub fn shape(&self, deep: bool, policy: ShapePolicy) -> Shape {
        if !deep {
            return Shape::jagged(vec![self.rows.len()]);
        }
        match policy {
            ShapePolicy::Uniform => {
                let mut dims = vec![self.rows.len()];
                let mut level = &self.rows[..];
                while let Some(Node::Row(r)) = level.first() {
                    dims.push(r.len());
                    level = r;
                }
                Shape::jagged(dims)
            }
            ShapePolicy::Max => Shape::jagged(max_extents(&self.rows)),
        }
    }

    /// Return an iterator over the leaves that exist, depth first.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![self.rows.iter()],
        }
    }
}

// Per-level maximum row length, `rows` itself being the first level.
fn max_extents(rows: &[Node]) -> Vec<Ix> {
    let mut extents = Shape::jagged(vec![rows.len()]);
    for node in rows {
        if let Node::Row(r) = node {
            extents.max_with(1, &max_extents(r));
        }
    }
    extents.dims().to_vec()
}

fn filled_rows(dims: &[Ix], elem: &Scalar) -> Vec<Node> {
    match dims.split_first() {
        Some((&n, [])) => vec![Node::Leaf(elem.clone()); n],
        Some((&n, rest)) => (0..n).map(|_| Node::Row(filled_rows(rest, elem))).collect(),
        None => Vec::new(),
    }
}

/// Check that `node` has exactly `levels` levels of rows above its leaves,
/// all of kind `kind`.
pub(crate) fn check_node(node: &Node, levels: usize, kind: ElemKind) -> Result<(), ArrayError> {
    match node {
        Node::Leaf(s) if levels == 0 => {
            if s.kind() == kind {
                Ok(())
            } else {
                Err(ArrayError::KindMismatch {
                    expected: kind,
                    got: s.kind(),
                })
            }
        }
        Node::Row(r) if levels > 0 => r.iter().try_for_each(|n| check_node(n, levels - 1, kind)),
        // a leaf above the bottom level, or a row in place of a leaf
        Node::Leaf(_) => Err(incompatible_shape(levels, 0)),
        Node::Row(_) => Err(incompatible_shape(0, 1)),
    }
}

/// An iterator over the leaves of a jagged array, depth first.
///
/// This is the canonical order restricted to the cells the array has.
#[derive(Clone, Debug)]
pub struct Leaves<'a> {
    stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Scalar;

    fn next(&mut self) -> Option<&'a Scalar> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Node::Leaf(s)) => return Some(s),
                Some(Node::Row(r)) => self.stack.push(r.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Nested vectors that form a jagged array.
///
/// Leaf element types have depth 0 and `Vec<T>` is one level deeper than
/// `T`, so the innermost kind of `Vec<Vec<Vec<f64>>>` is known from the
/// type alone:
///
/// ```
/// use ndconvert::{ElemKind, Nested};
///
/// assert_eq!(<Vec<Vec<Vec<f64>>> as Nested>::KIND, ElemKind::F64);
/// assert_eq!(<Vec<Vec<Vec<f64>>> as Nested>::DEPTH, 3);
/// ```
///
/// Use [`nested_leaf!`](crate::nested_leaf) to add further [`Element`]
/// types as leaves.
pub trait Nested: Sized {
    /// The innermost element kind.
    const KIND: ElemKind;
    /// The number of `Vec` levels above the leaves.
    const DEPTH: usize;
    fn into_node(self) -> Node;
    /// Return `None` if the node does not have the shape of `Self`.
    fn from_node(node: Node) -> Option<Self>;
}

impl<T: Nested> Nested for Vec<T> {
    const KIND: ElemKind = T::KIND;
    const DEPTH: usize = T::DEPTH + 1;

    fn into_node(self) -> Node {
        Node::Row(self.into_iter().map(T::into_node).collect())
    }

    fn from_node(node: Node) -> Option<Self> {
        match node {
            Node::Row(r) => r.into_iter().map(T::from_node).collect(),
            Node::Leaf(_) => None,
        }
    }
}

/// Implement [`Nested`] for [`Element`] types, as leaves.
///
/// ```
/// use ndconvert::{nested_leaf, jagged, ElemKind, Element, Scalar};
///
/// #[derive(Copy, Clone, Debug, PartialEq)]
/// struct Celsius(i16);
///
/// impl Element for Celsius {
///     const KIND: ElemKind = ElemKind::I16;
///     fn into_scalar(self) -> Scalar { Scalar::I16(self.0) }
///     fn from_scalar(s: Scalar) -> Option<Self> { s.extract().map(Celsius) }
/// }
///
/// nested_leaf!(Celsius);
///
/// let a = jagged(vec![vec![Celsius(-4), Celsius(20)]]);
/// assert_eq!(a.kind(), ElemKind::I16);
/// ```
#[macro_export]
macro_rules! nested_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Nested for $ty {
                const KIND: $crate::ElemKind = <$ty as $crate::Element>::KIND;
                const DEPTH: usize = 0;

                fn into_node(self) -> $crate::Node {
                    $crate::Node::Leaf($crate::Element::into_scalar(self))
                }

                fn from_node(node: $crate::Node) -> ::core::option::Option<Self> {
                    match node {
                        $crate::Node::Leaf(s) => <$ty as $crate::Element>::from_scalar(s),
                        $crate::Node::Row(_) => ::core::option::Option::None,
                    }
                }
            }
        )*
    };
}

nested_leaf!(bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, num_complex::Complex64, alloc::string::String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn new_checks_depth_and_kind() {
        let rows = vec![Node::Row(vec![Node::Leaf(Scalar::I32(1))]), Node::Leaf(Scalar::I32(2))];
        let err = JaggedArray::new(ElemKind::I32, 2, rows).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleShape);

        let rows = vec![Node::Row(vec![Node::Leaf(Scalar::U8(1))])];
        let err = JaggedArray::new(ElemKind::I32, 2, rows).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KindMismatch);

        assert!(JaggedArray::new(ElemKind::I32, 0, vec![]).is_err());
        let err = JaggedArray::zeros(ElemKind::I32, &[usize::MAX, 2]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert!(JaggedArray::new(ElemKind::I32, 3, vec![Node::Row(vec![])]).is_ok());
    }

    #[test]
    fn zeros_is_uniform() {
        let a = JaggedArray::zeros(ElemKind::Bool, &[2, 3]).unwrap();
        assert_eq!(a.depth(), 2);
        assert!(!a.is_ragged());
        assert_eq!(a.shape(true, ShapePolicy::Uniform), a.shape(true, ShapePolicy::Max));
        assert_eq!(a.leaves().count(), 6);
        assert!(JaggedArray::zeros(ElemKind::Bool, &[]).is_err());
    }

    #[test]
    fn max_shape_visits_every_row() {
        let a = JaggedArray::from_nested(vec![vec![vec![1u8]], vec![vec![], vec![2, 3, 4]]]);
        assert_eq!(a.shape(false, ShapePolicy::Max).dims(), &[2]);
        assert_eq!(a.shape(true, ShapePolicy::Uniform).dims(), &[2, 1, 1]);
        assert_eq!(a.shape(true, ShapePolicy::Max).dims(), &[2, 2, 3]);
    }

    #[test]
    fn shape_stops_at_empty_level() {
        let a = JaggedArray::empty(ElemKind::F64, 3);
        assert_eq!(a.shape(true, ShapePolicy::Max).dims(), &[0]);
        assert_eq!(a.shape(true, ShapePolicy::Uniform).dims(), &[0]);
    }

    #[test]
    fn leaves_are_depth_first() {
        let a = JaggedArray::from_nested(vec![vec![1i32, 2], vec![], vec![3]]);
        let leaves: Vec<_> = a.leaves().cloned().collect();
        assert_eq!(leaves, vec![Scalar::I32(1), Scalar::I32(2), Scalar::I32(3)]);
    }
}
