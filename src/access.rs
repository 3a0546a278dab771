// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Indexed reads and writes that work on either layout.
use alloc::vec::Vec;

use crate::error::{incompatible_shape, out_of_range, ArrayError};
use crate::jagged::check_node;
use crate::{ArrayValue, ElemKind, Ix, JaggedArray, Layout, Node, RectArray, Scalar};

/// What an index addresses: a leaf, or (for a partial index into a jagged
/// array) a row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ElemRef<'a> {
    Leaf(&'a Scalar),
    Row(&'a [Node]),
}

impl<'a> ElemRef<'a> {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(*self, ElemRef::Leaf(_))
    }

    pub fn leaf(self) -> Option<&'a Scalar> {
        match self {
            ElemRef::Leaf(s) => Some(s),
            ElemRef::Row(_) => None,
        }
    }

    pub fn row(self) -> Option<&'a [Node]> {
        match self {
            ElemRef::Row(r) => Some(r),
            ElemRef::Leaf(_) => None,
        }
    }

    /// Copy the addressed element or sub-array.
    pub fn to_node(self) -> Node {
        match self {
            ElemRef::Leaf(s) => Node::Leaf(s.clone()),
            ElemRef::Row(r) => Node::Row(r.to_vec()),
        }
    }
}

/// Indexed access independent of the layout.
///
/// A rectangular array is addressed by a full index in one step. A jagged
/// array is addressed one level per index component when `deep` is true,
/// and by the first component only when `deep` is false; an index shorter
/// than the depth addresses a row.
///
/// ```
/// use ndconvert::{arr1, jagged, ElemRef, NdAccess, Scalar};
///
/// let a = arr1(&[10, 20, 30]);
/// assert_eq!(a.get(&[2], false).unwrap(), ElemRef::Leaf(&Scalar::I32(30)));
/// assert!(a.get(&[3], false).is_err());
/// assert_eq!(a.try_get(&[3]), None);
///
/// let b = jagged(vec![vec![1, 2], vec![3]]);
/// assert_eq!(b.get(&[1, 0], true).unwrap().leaf(), Some(&Scalar::I32(3)));
/// assert_eq!(b.get(&[1], true).unwrap().row().map(|r| r.len()), Some(1));
/// assert_eq!(b.try_get(&[1, 1]), None);
/// ```
pub trait NdAccess {
    fn layout(&self) -> Layout;

    /// Return the innermost element kind.
    fn elem_kind(&self) -> ElemKind;

    /// Read the element or row at `index`.
    ///
    /// **Errors** with `IndexOutOfRange` if a component is past the end of
    /// the row it addresses, and with `IncompatibleShape` if the index has
    /// too many components (or, for a rectangular array, too few).
    fn get(&self, index: &[Ix], deep: bool) -> Result<ElemRef<'_>, ArrayError>;

    /// Read the element or row at `index`, checking every component
    /// against the length of the row it addresses; `None` if any is out of
    /// range.
    ///
    /// A jagged array is always traversed deeply.
    fn try_get(&self, index: &[Ix]) -> Option<ElemRef<'_>>;

    /// Replace the element or row at `index` with `value`.
    ///
    /// A leaf must have the array's kind and a row must have the depth
    /// left below `index`. A rectangular array accepts leaves only.
    fn set(&mut self, index: &[Ix], value: Node, deep: bool) -> Result<(), ArrayError>;
}

impl NdAccess for RectArray {
    fn layout(&self) -> Layout {
        Layout::Rectangular
    }

    fn elem_kind(&self) -> ElemKind {
        self.kind()
    }

    fn get(&self, index: &[Ix], _deep: bool) -> Result<ElemRef<'_>, ArrayError> {
        let offset = self.offset_of(index)?;
        Ok(ElemRef::Leaf(self.slot(offset)))
    }

    fn try_get(&self, index: &[Ix]) -> Option<ElemRef<'_>> {
        self.offset_of(index)
            .ok()
            .map(|offset| ElemRef::Leaf(self.slot(offset)))
    }

    fn set(&mut self, index: &[Ix], value: Node, _deep: bool) -> Result<(), ArrayError> {
        let value = match value {
            Node::Leaf(s) => s,
            Node::Row(_) => return Err(ArrayError::IncompatibleLayout),
        };
        if value.kind() != self.kind() {
            return Err(ArrayError::KindMismatch {
                expected: self.kind(),
                got: value.kind(),
            });
        }
        let offset = self.offset_of(index)?;
        self.put(offset, value);
        Ok(())
    }
}

impl NdAccess for JaggedArray {
    fn layout(&self) -> Layout {
        Layout::Jagged
    }

    fn elem_kind(&self) -> ElemKind {
        self.kind()
    }

    fn get(&self, index: &[Ix], deep: bool) -> Result<ElemRef<'_>, ArrayError> {
        if !deep && index.len() != 1 {
            return Err(incompatible_shape(1, index.len()));
        }
        walk(self.rows(), index)
    }

    fn try_get(&self, index: &[Ix]) -> Option<ElemRef<'_>> {
        walk(self.rows(), index).ok()
    }

    fn set(&mut self, index: &[Ix], value: Node, deep: bool) -> Result<(), ArrayError> {
        if !deep && index.len() != 1 {
            return Err(incompatible_shape(1, index.len()));
        }
        let (&last, parents) = match index.split_last() {
            Some(split) => split,
            None => return Err(incompatible_shape(1, 0)),
        };
        let below = match self.depth().checked_sub(index.len()) {
            Some(below) => below,
            None => return Err(incompatible_shape(self.depth(), index.len())),
        };
        check_node(&value, below, self.kind())?;

        let mut level: &mut Vec<Node> = self.rows_mut();
        for (axis, &i) in parents.iter().enumerate() {
            let len = level.len();
            level = match level.get_mut(i) {
                Some(Node::Row(r)) => r,
                Some(Node::Leaf(_)) => return Err(incompatible_shape(axis + 1, index.len())),
                None => return Err(out_of_range(axis, i, len)),
            };
        }
        let len = level.len();
        match level.get_mut(last) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(out_of_range(parents.len(), last, len)),
        }
    }
}

// Descend one level per index component.
fn walk<'a>(rows: &'a [Node], index: &[Ix]) -> Result<ElemRef<'a>, ArrayError> {
    let mut level = rows;
    for (axis, &i) in index.iter().enumerate() {
        let node = match level.get(i) {
            Some(node) => node,
            None => return Err(out_of_range(axis, i, level.len())),
        };
        match node {
            Node::Row(r) => level = r,
            Node::Leaf(s) if axis + 1 == index.len() => return Ok(ElemRef::Leaf(s)),
            Node::Leaf(_) => return Err(incompatible_shape(axis + 1, index.len())),
        }
    }
    Ok(ElemRef::Row(level))
}

impl NdAccess for ArrayValue {
    fn layout(&self) -> Layout {
        ArrayValue::layout(self)
    }

    fn elem_kind(&self) -> ElemKind {
        self.kind()
    }

    fn get(&self, index: &[Ix], deep: bool) -> Result<ElemRef<'_>, ArrayError> {
        match self {
            ArrayValue::Rect(a) => a.get(index, deep),
            ArrayValue::Jagged(a) => a.get(index, deep),
        }
    }

    fn try_get(&self, index: &[Ix]) -> Option<ElemRef<'_>> {
        match self {
            ArrayValue::Rect(a) => a.try_get(index),
            ArrayValue::Jagged(a) => a.try_get(index),
        }
    }

    fn set(&mut self, index: &[Ix], value: Node, deep: bool) -> Result<(), ArrayError> {
        match self {
            ArrayValue::Rect(a) => a.set(index, value, deep),
            ArrayValue::Jagged(a) => a.set(index, value, deep),
        }
    }
}
