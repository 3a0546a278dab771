// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Leaf element kinds and the type-erased leaf value.
use alloc::string::String;
use std::fmt;

use num_complex::Complex64;
use num_traits::Zero;

/// The kind of a leaf element.
///
/// Every array carries exactly one `ElemKind`, the type of its innermost
/// (non-container) elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElemKind {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    /// `num_complex::Complex64`
    Complex,
    /// `String`
    Str,
}

impl ElemKind {
    /// All element kinds, in declaration order.
    pub const ALL: [ElemKind; 13] = [
        ElemKind::Bool,
        ElemKind::I8,
        ElemKind::U8,
        ElemKind::I16,
        ElemKind::U16,
        ElemKind::I32,
        ElemKind::U32,
        ElemKind::I64,
        ElemKind::U64,
        ElemKind::F32,
        ElemKind::F64,
        ElemKind::Complex,
        ElemKind::Str,
    ];

    /// The short lowercase name of the kind, e.g. `"i32"`.
    pub fn name(self) -> &'static str {
        match self {
            ElemKind::Bool => "bool",
            ElemKind::I8 => "i8",
            ElemKind::U8 => "u8",
            ElemKind::I16 => "i16",
            ElemKind::U16 => "u16",
            ElemKind::I32 => "i32",
            ElemKind::U32 => "u32",
            ElemKind::I64 => "i64",
            ElemKind::U64 => "u64",
            ElemKind::F32 => "f32",
            ElemKind::F64 => "f64",
            ElemKind::Complex => "complex",
            ElemKind::Str => "str",
        }
    }

    /// Look up a kind by its [`name`](ElemKind::name).
    pub fn from_name(name: &str) -> Option<ElemKind> {
        ElemKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Return true for the integer, floating point and complex kinds.
    pub fn is_numeric(self) -> bool {
        !matches!(self, ElemKind::Bool | ElemKind::Str)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            ElemKind::I8
                | ElemKind::U8
                | ElemKind::I16
                | ElemKind::U16
                | ElemKind::I32
                | ElemKind::U32
                | ElemKind::I64
                | ElemKind::U64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, ElemKind::F32 | ElemKind::F64)
    }
}

impl fmt::Display for ElemKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single leaf value of any [`ElemKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Complex(Complex64),
    Str(String),
}

// Applies `$body` to the payload of every numeric variant.
macro_rules! numeric_payload {
    ($value:expr, $x:ident => $body:expr, $otherwise:pat => $fallback:expr) => {
        match $value {
            Scalar::I8($x) => $body,
            Scalar::U8($x) => $body,
            Scalar::I16($x) => $body,
            Scalar::U16($x) => $body,
            Scalar::I32($x) => $body,
            Scalar::U32($x) => $body,
            Scalar::I64($x) => $body,
            Scalar::U64($x) => $body,
            Scalar::F32($x) => $body,
            Scalar::F64($x) => $body,
            Scalar::Complex($x) => $body,
            $otherwise => $fallback,
        }
    };
}

impl Scalar {
    /// The default value of `kind`: `false`, zero, or the empty string.
    ///
    /// This is the value a rectangular destination holds in cells that a
    /// ragged source does not have.
    pub fn zero(kind: ElemKind) -> Scalar {
        match kind {
            ElemKind::Bool => Scalar::Bool(false),
            ElemKind::I8 => Scalar::I8(Zero::zero()),
            ElemKind::U8 => Scalar::U8(Zero::zero()),
            ElemKind::I16 => Scalar::I16(Zero::zero()),
            ElemKind::U16 => Scalar::U16(Zero::zero()),
            ElemKind::I32 => Scalar::I32(Zero::zero()),
            ElemKind::U32 => Scalar::U32(Zero::zero()),
            ElemKind::I64 => Scalar::I64(Zero::zero()),
            ElemKind::U64 => Scalar::U64(Zero::zero()),
            ElemKind::F32 => Scalar::F32(Zero::zero()),
            ElemKind::F64 => Scalar::F64(Zero::zero()),
            ElemKind::Complex => Scalar::Complex(Complex64::zero()),
            ElemKind::Str => Scalar::Str(String::new()),
        }
    }

    pub fn kind(&self) -> ElemKind {
        match *self {
            Scalar::Bool(_) => ElemKind::Bool,
            Scalar::I8(_) => ElemKind::I8,
            Scalar::U8(_) => ElemKind::U8,
            Scalar::I16(_) => ElemKind::I16,
            Scalar::U16(_) => ElemKind::U16,
            Scalar::I32(_) => ElemKind::I32,
            Scalar::U32(_) => ElemKind::U32,
            Scalar::I64(_) => ElemKind::I64,
            Scalar::U64(_) => ElemKind::U64,
            Scalar::F32(_) => ElemKind::F32,
            Scalar::F64(_) => ElemKind::F64,
            Scalar::Complex(_) => ElemKind::Complex,
            Scalar::Str(_) => ElemKind::Str,
        }
    }

    /// Return true if the value equals the default value of its kind.
    ///
    /// NaN is not zero.
    pub fn is_zero(&self) -> bool {
        numeric_payload!(self, x => x.is_zero(), other => match other {
            Scalar::Bool(b) => !*b,
            Scalar::Str(s) => s.is_empty(),
            _ => false,
        })
    }

    /// Return the payload as `T` if the kind is exactly `T::KIND`.
    pub fn extract<T: Element>(self) -> Option<T> {
        T::from_scalar(self)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        numeric_payload!(self, x => fmt::Display::fmt(x, f), other => match other {
            Scalar::Bool(b) => fmt::Display::fmt(b, f),
            Scalar::Str(s) => fmt::Display::fmt(s, f),
            _ => Ok(()),
        })
    }
}

impl<'a> From<&'a str> for Scalar {
    fn from(s: &'a str) -> Scalar {
        Scalar::Str(s.into())
    }
}

/// A statically typed leaf element.
///
/// Implemented for `bool`, the integer and floating point primitives,
/// `Complex64` and `String`. A fieldless enum enters an array through its
/// integer representation:
///
/// ```
/// use ndconvert::{ElemKind, Element, Scalar};
///
/// #[derive(Copy, Clone, Debug, PartialEq)]
/// #[repr(u8)]
/// enum Color { Red = 1, Blue = 2 }
///
/// impl Element for Color {
///     const KIND: ElemKind = ElemKind::U8;
///     fn into_scalar(self) -> Scalar { Scalar::U8(self as u8) }
///     fn from_scalar(s: Scalar) -> Option<Self> {
///         match s {
///             Scalar::U8(1) => Some(Color::Red),
///             Scalar::U8(2) => Some(Color::Blue),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Color::Blue.into_scalar(), Scalar::U8(2));
/// ```
pub trait Element: Clone + fmt::Debug {
    /// The element kind values of this type are stored as.
    const KIND: ElemKind;
    fn into_scalar(self) -> Scalar;
    /// Return `None` unless `s` holds a value of this type.
    fn from_scalar(s: Scalar) -> Option<Self>;
}

macro_rules! impl_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const KIND: ElemKind = ElemKind::$variant;

                #[inline]
                fn into_scalar(self) -> Scalar {
                    Scalar::$variant(self)
                }

                #[inline]
                fn from_scalar(s: Scalar) -> Option<Self> {
                    match s {
                        Scalar::$variant(x) => Some(x),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Scalar {
                #[inline]
                fn from(x: $ty) -> Scalar {
                    Scalar::$variant(x)
                }
            }
        )*
    };
}

impl_element! {
    bool => Bool,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Complex64 => Complex,
    String => Str,
}
