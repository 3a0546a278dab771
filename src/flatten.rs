// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Linearization in canonical order.
use alloc::vec::Vec;
use std::iter;

use crate::error::{checked_size, incompatible_shape, ArrayError};
use crate::{ArrayValue, Ix, NdAccess, Node, Scalar, Shape};

/// Return the leaves of `value` in the order [`Shape::indices`] visits
/// `shape`, one slot per index of `shape`.
///
/// A slot is `None` where a jagged row is shorter than the extent in
/// `shape`; what such cells should hold is up to the caller (see
/// [`flatten_filled`]). Rows longer than the extent are cut off. For a
/// rectangular array with its own shape this is a contiguous scan.
///
/// ```
/// use ndconvert::{arr2, flatten, jagged, ArrayValue, Scalar, Shape};
///
/// let a = ArrayValue::from(arr2(&[[1, 2, 3], [4, 5, 6]]));
/// let flat = flatten(&a, &Shape::rect([2, 3])).unwrap();
/// assert_eq!(flat.len(), 6);
/// assert_eq!(flat[3], Some(&Scalar::I32(4)));
///
/// let b = ArrayValue::from(jagged(vec![vec![1, 2], vec![3]]));
/// let flat = flatten(&b, &Shape::jagged([2, 2])).unwrap();
/// assert_eq!(flat[3], None);
/// ```
///
/// **Errors** if the rank of `shape` is not the rank of `value`, or with
/// `Overflow` if the size of `shape` does not fit in `usize`.
pub fn flatten<'a>(value: &'a ArrayValue, shape: &Shape) -> Result<Vec<Option<&'a Scalar>>, ArrayError> {
    if shape.ndim() != value.ndim() {
        return Err(incompatible_shape(value.ndim(), shape.ndim()));
    }
    let mut out = Vec::with_capacity(checked_size(shape)?);
    match value {
        ArrayValue::Rect(a) if a.dim() == shape.dims() => {
            out.extend(a.iter().map(Some));
        }
        ArrayValue::Rect(a) => {
            out.extend(shape.indices().map(|ix| a.try_get(&ix).and_then(|e| e.leaf())));
        }
        ArrayValue::Jagged(a) => flatten_rows(a.rows(), shape.dims(), &mut out),
    }
    Ok(out)
}

/// Like [`flatten`], with missing cells holding the default value of the
/// element kind.
pub fn flatten_filled(value: &ArrayValue, shape: &Shape) -> Result<Vec<Scalar>, ArrayError> {
    let zero = Scalar::zero(value.kind());
    Ok(flatten(value, shape)?
        .into_iter()
        .map(|slot| slot.unwrap_or(&zero).clone())
        .collect())
}

fn flatten_rows<'a>(rows: &'a [Node], dims: &[Ix], out: &mut Vec<Option<&'a Scalar>>) {
    let (&n, rest) = match dims.split_first() {
        Some(split) => split,
        None => return,
    };
    let block: usize = rest.iter().product();
    for i in 0..n {
        match rows.get(i) {
            Some(Node::Leaf(s)) if rest.is_empty() => out.push(Some(s)),
            Some(Node::Row(r)) if !rest.is_empty() => flatten_rows(r, rest, out),
            _ => out.extend(iter::repeat(None).take(block)),
        }
    }
}
