// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Whole-array conversion between layouts and element kinds.
use alloc::vec::Vec;

use crate::error::{checked_size, ArrayError};
use crate::{
    flatten, ArrayValue, ElemKind, ElemRef, JaggedArray, Layout, NdAccess, Node, RectArray, Scalar,
    ShapePolicy,
};

/// The element kind, and optionally the layout, to convert to.
///
/// Without a layout the destination keeps the layout of the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    pub kind: ElemKind,
    pub layout: Option<Layout>,
}

impl Target {
    /// Convert the element kind, keeping the layout.
    pub fn new(kind: ElemKind) -> Self {
        Target { kind, layout: None }
    }

    /// Convert to a rectangular array of `kind`.
    pub fn rect(kind: ElemKind) -> Self {
        Target {
            kind,
            layout: Some(Layout::Rectangular),
        }
    }

    /// Convert to a jagged array of `kind`.
    pub fn jagged(kind: ElemKind) -> Self {
        Target {
            kind,
            layout: Some(Layout::Jagged),
        }
    }
}

impl From<ElemKind> for Target {
    fn from(kind: ElemKind) -> Self {
        Target::new(kind)
    }
}

/// How a conversion moves data between the two layouts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Plan {
    JaggedToRect,
    RectToJagged,
    SameLayout,
}

impl Plan {
    fn classify(from: Layout, to: Layout) -> Plan {
        match (from, to) {
            (Layout::Jagged, Layout::Rectangular) => Plan::JaggedToRect,
            (Layout::Rectangular, Layout::Jagged) => Plan::RectToJagged,
            _ => Plan::SameLayout,
        }
    }
}

/// Converts whole arrays of any rank between layouts and element kinds.
///
/// The source is never modified and the destination is always freshly
/// allocated. The first failing element aborts the conversion.
///
/// ```
/// use ndconvert::{jagged, ArrayValue, Converter, ElemKind, ShapePolicy, Target};
///
/// let ragged = ArrayValue::from(jagged(vec![vec![1u8], vec![2, 3]]));
///
/// let max = Converter::new().convert(&ragged, Target::rect(ElemKind::U8)).unwrap();
/// assert_eq!(max.as_rect().unwrap().dim(), &[2, 2]);
///
/// let uniform = Converter::new()
///     .shape_policy(ShapePolicy::Uniform)
///     .convert(&ragged, Target::rect(ElemKind::U8))
///     .unwrap();
/// assert_eq!(uniform.as_rect().unwrap().dim(), &[2, 1]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Converter {
    policy: ShapePolicy,
}

impl Converter {
    /// Create a converter with the `Max` shape policy.
    pub fn new() -> Self {
        Converter::default()
    }

    /// Set how the rectangular shape of a jagged source is measured.
    ///
    /// `Max` (the default) sizes the destination by the longest row of each
    /// level, so no leaf is lost; `Uniform` sizes it by the first row and
    /// cuts off anything longer.
    pub fn shape_policy(mut self, policy: ShapePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ShapePolicy {
        self.policy
    }

    /// Convert `source` to `target`, converting each leaf with
    /// [`Scalar::convert`].
    ///
    /// Cells of a rectangular destination that a ragged source does not
    /// have hold the default value of the target kind; this is never an
    /// error.
    ///
    /// **Errors** with `Conversion` if a leaf cannot be represented in the
    /// target kind, with `IncompatibleLayout` when a rank 0 rectangular
    /// array is to become jagged, and with `Overflow` when the rectangular
    /// shape of a jagged source has more cells than `usize` can count.
    pub fn convert(&self, source: &ArrayValue, target: impl Into<Target>) -> Result<ArrayValue, ArrayError> {
        let target = target.into();
        let kind = target.kind;
        self.convert_with(source, target, |x| x.convert(kind))
    }

    /// Convert `source` to `target`, converting each leaf with `f`.
    ///
    /// ```
    /// use ndconvert::{arr1, ArrayValue, Converter, ElemKind, Scalar, Target};
    ///
    /// let a = ArrayValue::from(arr1(&[1.4f64, 2.6]));
    /// let rounded = Converter::new()
    ///     .convert_with(&a, Target::new(ElemKind::I64), |x| match *x {
    ///         Scalar::F64(v) => Ok(Scalar::I64(v.round() as i64)),
    ///         _ => x.convert(ElemKind::I64),
    ///     })
    ///     .unwrap();
    /// assert_eq!(rounded, ArrayValue::from(arr1(&[1i64, 3])));
    /// ```
    ///
    /// **Errors** with whatever `f` fails with, and with `KindMismatch` if
    /// `f` returns a value of another kind than the target kind.
    pub fn convert_with<F>(&self, source: &ArrayValue, target: impl Into<Target>, mut f: F) -> Result<ArrayValue, ArrayError>
    where
        F: FnMut(&Scalar) -> Result<Scalar, ArrayError>,
    {
        let target = target.into();
        let kind = target.kind;
        let mut leaf = |x: &Scalar| -> Result<Scalar, ArrayError> {
            let y = f(x)?;
            if y.kind() != kind {
                return Err(ArrayError::KindMismatch {
                    expected: kind,
                    got: y.kind(),
                });
            }
            Ok(y)
        };
        let to = target.layout.unwrap_or_else(|| source.layout());
        match (Plan::classify(source.layout(), to), source) {
            (Plan::JaggedToRect, ArrayValue::Jagged(a)) => self.jagged_to_rect(a, source, kind, &mut leaf),
            (Plan::RectToJagged, ArrayValue::Rect(a)) => rect_to_jagged(a, kind, &mut leaf),
            (_, ArrayValue::Rect(a)) => {
                let data = a.iter().map(&mut leaf).collect::<Result<Vec<_>, _>>()?;
                RectArray::from_shape_scalars(kind, a.dim(), data).map(ArrayValue::Rect)
            }
            (_, ArrayValue::Jagged(a)) => {
                let rows = convert_rows(a.rows(), &mut leaf)?;
                JaggedArray::new(kind, a.depth(), rows).map(ArrayValue::Jagged)
            }
        }
    }

    fn jagged_to_rect<F>(&self, a: &JaggedArray, source: &ArrayValue, kind: ElemKind, leaf: &mut F) -> Result<ArrayValue, ArrayError>
    where
        F: FnMut(&Scalar) -> Result<Scalar, ArrayError>,
    {
        // levels without any row are measured as zero
        let shape = a.shape(true, self.policy).padded(a.depth());
        checked_size(&shape)?;
        let mut dst = RectArray::zeros(kind, shape.dims());
        for (offset, slot) in flatten(source, &shape)?.into_iter().enumerate() {
            if let Some(x) = slot {
                dst.put(offset, leaf(x)?);
            }
        }
        Ok(ArrayValue::Rect(dst))
    }
}

fn rect_to_jagged<F>(a: &RectArray, kind: ElemKind, leaf: &mut F) -> Result<ArrayValue, ArrayError>
where
    F: FnMut(&Scalar) -> Result<Scalar, ArrayError>,
{
    let mut dst = JaggedArray::zeros(kind, a.dim())?;
    for index in a.shape().indices() {
        if let ElemRef::Leaf(x) = a.get(&index, false)? {
            dst.set(&index, Node::Leaf(leaf(x)?), true)?;
        }
    }
    Ok(ArrayValue::Jagged(dst))
}

// Leaves are converted, rows recurse one level down.
fn convert_rows<F>(rows: &[Node], leaf: &mut F) -> Result<Vec<Node>, ArrayError>
where
    F: FnMut(&Scalar) -> Result<Scalar, ArrayError>,
{
    rows.iter()
        .map(|node| match node {
            Node::Leaf(x) => leaf(x).map(Node::Leaf),
            Node::Row(r) => convert_rows(r, leaf).map(Node::Row),
        })
        .collect()
}

/// Convert `source` to `target` with the default [`Converter`].
///
/// ```
/// use ndconvert::{arr1, convert, ArrayValue, ElemKind};
///
/// let a = ArrayValue::from(arr1(&[1, 0, 2]));
/// let b = convert(&a, ElemKind::Bool).unwrap();
/// assert_eq!(b, ArrayValue::from(arr1(&[true, false, true])));
/// ```
pub fn convert(source: &ArrayValue, target: impl Into<Target>) -> Result<ArrayValue, ArrayError> {
    Converter::new().convert(source, target)
}
