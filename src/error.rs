// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::string::String;
use std::fmt;

use crate::{ElemKind, Ix, Shape};

/// An error from addressing, reshaping or converting an array.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ArrayError {
    /// an index component is past the extent of the row it addresses
    IndexOutOfRange {
        axis: usize,
        index: Ix,
        len: Ix,
    },
    /// the number of index components, or the rank of a shape, does not
    /// fit the addressed value
    IncompatibleShape {
        expected: usize,
        got: usize,
    },
    /// the operation needs the other layout (for example a row written
    /// into a rectangular array)
    IncompatibleLayout,
    /// a value of the wrong element kind
    KindMismatch {
        expected: ElemKind,
        got: ElemKind,
    },
    /// a data buffer whose length is not the size of its shape
    LengthMismatch {
        size: usize,
        len: usize,
    },
    /// the number of elements of a shape overflows `usize`
    Overflow,
    /// the element converter cannot represent the value in the target kind
    Conversion {
        from: ElemKind,
        to: ElemKind,
        value: String,
    },
}

/// Error code for an [`ArrayError`].
///
/// This enumeration is not exhaustive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// index out of range
    IndexOutOfRange,
    /// incompatible shapes
    IncompatibleShape,
    /// incompatible layout
    IncompatibleLayout,
    /// element kind mismatch
    KindMismatch,
    /// data length does not match the shape
    LengthMismatch,
    /// arithmetic overflow
    Overflow,
    /// element conversion failed
    Conversion,
}

impl ArrayError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match *self {
            ArrayError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            ArrayError::IncompatibleShape { .. } => ErrorKind::IncompatibleShape,
            ArrayError::IncompatibleLayout => ErrorKind::IncompatibleLayout,
            ArrayError::KindMismatch { .. } => ErrorKind::KindMismatch,
            ArrayError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            ArrayError::Overflow => ErrorKind::Overflow,
            ArrayError::Conversion { .. } => ErrorKind::Conversion,
        }
    }
}

impl ErrorKind {
    fn description(self) -> &'static str {
        match self {
            ErrorKind::IndexOutOfRange => "index out of range",
            ErrorKind::IncompatibleShape => "incompatible shapes",
            ErrorKind::IncompatibleLayout => "incompatible layout",
            ErrorKind::KindMismatch => "element kind mismatch",
            ErrorKind::LengthMismatch => "data length does not match the shape",
            ErrorKind::Overflow => "arithmetic overflow",
            ErrorKind::Conversion => "element conversion failed",
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArrayError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = self.kind().description();
        match *self {
            ArrayError::IndexOutOfRange { axis, index, len } => {
                write!(f, "{}: index {} on axis {} with length {}", description, index, axis, len)
            }
            ArrayError::IncompatibleShape { expected, got } => {
                write!(f, "{}: expected {} axes, got {}", description, expected, got)
            }
            ArrayError::KindMismatch { expected, got } => {
                write!(f, "{}: expected {}, got {}", description, expected, got)
            }
            ArrayError::LengthMismatch { size, len } => {
                write!(f, "{}: shape holds {} elements, data has {}", description, size, len)
            }
            ArrayError::Conversion { from, to, ref value } => {
                write!(f, "{}: cannot convert {} value {:?} to {}", description, from, value, to)
            }
            ArrayError::IncompatibleLayout | ArrayError::Overflow => f.write_str(description),
        }
    }
}

#[inline]
pub(crate) fn out_of_range(axis: usize, index: Ix, len: Ix) -> ArrayError {
    ArrayError::IndexOutOfRange { axis, index, len }
}

/// Return the size of `shape`, or `Overflow` if it does not fit in `usize`.
#[inline]
pub(crate) fn checked_size(shape: &Shape) -> Result<usize, ArrayError> {
    shape.size_checked().ok_or(ArrayError::Overflow)
}

#[inline]
pub(crate) fn incompatible_shape(expected: usize, got: usize) -> ArrayError {
    ArrayError::IncompatibleShape { expected, got }
}
