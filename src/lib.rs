// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndconvert"]
#![allow(clippy::len_without_is_empty)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `ndconvert` crate converts n-dimensional arrays between two memory
//! layouts and between element types, for any rank.
//!
//! - [`RectArray`]: one contiguous block addressed by a full index
//!   (a tuple of per-axis indices), row-major.
//! - [`JaggedArray`]: a recursively nested structure of independently
//!   sized rows ([`Node`]), which may be *ragged*.
//! - [`ArrayValue`]: either of the two, with the layout and element kind
//!   known only at runtime.
//!
//! All traversals share one canonical order: the last axis varies fastest.
//! [`Indices`] enumerates a [`Shape`] in that order, [`flatten`] produces
//! the leaves of an array in that order, and [`Converter`] fills its
//! destination in that order.
//!
//! ```
//! use ndconvert::prelude::*;
//!
//! // A ragged jagged array of integers ...
//! let a = ArrayValue::from(jagged(vec![vec![1i32, 2], vec![3]]));
//!
//! // ... becomes a 2 x 2 rectangular array of floats; the missing cell
//! // takes the default value.
//! let b = convert(&a, Target::rect(ElemKind::F64)).unwrap();
//! assert_eq!(b.shape(true, ShapePolicy::Max).dims(), &[2, 2]);
//! assert_eq!(b, ArrayValue::from(arr2(&[[1.0f64, 2.0], [3.0, 0.0]])));
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default. Without it the crate is `no_std` and
//!   needs only `alloc`.
//! - `serde`: serialization of shapes, element kinds and arrays.
//! - `approx`: approximate comparison of arrays of floating point leaves.

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod access;
mod arrayformat;
mod cast;
mod convert;
mod elem;
mod error;
mod flatten;
mod free_functions;
mod indexes;
mod jagged;
mod rect;
mod shape;
mod value;

pub use crate::access::{ElemRef, NdAccess};
pub use crate::convert::{convert, Converter, Target};
pub use crate::elem::{ElemKind, Element, Scalar};
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::flatten::{flatten, flatten_filled};
pub use crate::free_functions::{arr1, arr2, arr3, jagged};
pub use crate::indexes::{indices, indices_of, Indices};
pub use crate::jagged::{JaggedArray, Leaves, Nested, Node};
pub use crate::rect::RectArray;
pub use crate::shape::{Layout, Shape, ShapePolicy};
pub use crate::value::{innermost_element_type, is_jagged, is_vector, shape_of, ArrayValue};

pub use num_complex::Complex64;

/// Array index type
pub type Ix = usize;

/// Standard imports for the common case.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        arr1, arr2, arr3, convert, jagged, ArrayError, ArrayValue, Converter, ElemKind, ElemRef,
        Element, JaggedArray, Layout, NdAccess, Nested, Node, RectArray, Scalar, Shape,
        ShapePolicy, Target,
    };
}
