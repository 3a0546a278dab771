// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The scalar element converter.
use alloc::string::{String, ToString};

use num_complex::Complex64;
use num_traits::NumCast;

use crate::error::ArrayError;
use crate::{ElemKind, Scalar};

impl Scalar {
    /// Convert the value to the element kind `to`.
    ///
    /// - numeric to numeric uses `NumCast`: floats truncate toward zero
    ///   when they become integers, values the target cannot hold fail
    /// - anything becomes `Bool` as "is not zero"; `Bool` becomes 1 or 0
    /// - `Complex` becomes a real kind only when its imaginary part is zero
    /// - text is parsed with the target's `FromStr` after trimming
    ///   whitespace, and anything becomes text through `Display`
    ///
    /// ```
    /// use ndconvert::{ElemKind, Scalar};
    ///
    /// assert_eq!(Scalar::F64(2.9).convert(ElemKind::I32), Ok(Scalar::I32(2)));
    /// assert_eq!(Scalar::I32(2).convert(ElemKind::Bool), Ok(Scalar::Bool(true)));
    /// assert_eq!(Scalar::from(" 17 ").convert(ElemKind::U8), Ok(Scalar::U8(17)));
    /// assert!(Scalar::I32(300).convert(ElemKind::U8).is_err());
    /// ```
    ///
    /// **Errors** with `ArrayError::Conversion` if the value has no
    /// representation in `to`.
    pub fn convert(&self, to: ElemKind) -> Result<Scalar, ArrayError> {
        if self.kind() == to {
            return Ok(self.clone());
        }
        let converted = match (self, to) {
            (Scalar::Str(text), _) => parse(text, to),
            (_, ElemKind::Str) => Some(Scalar::Str(self.to_string())),
            (_, ElemKind::Bool) => Some(Scalar::Bool(!self.is_zero())),
            (_, ElemKind::Complex) => self
                .cast::<f64>()
                .map(|re| Scalar::Complex(Complex64::new(re, 0.))),
            _ => self.cast_numeric(to),
        };
        converted.ok_or_else(|| conversion_error(self, to))
    }

    fn cast<T: NumCast>(&self) -> Option<T> {
        match *self {
            Scalar::Bool(b) => <T as NumCast>::from(b as u8),
            Scalar::I8(x) => <T as NumCast>::from(x),
            Scalar::U8(x) => <T as NumCast>::from(x),
            Scalar::I16(x) => <T as NumCast>::from(x),
            Scalar::U16(x) => <T as NumCast>::from(x),
            Scalar::I32(x) => <T as NumCast>::from(x),
            Scalar::U32(x) => <T as NumCast>::from(x),
            Scalar::I64(x) => <T as NumCast>::from(x),
            Scalar::U64(x) => <T as NumCast>::from(x),
            Scalar::F32(x) => <T as NumCast>::from(x),
            Scalar::F64(x) => <T as NumCast>::from(x),
            Scalar::Complex(c) if c.im == 0. => <T as NumCast>::from(c.re),
            Scalar::Complex(_) | Scalar::Str(_) => None,
        }
    }

    fn cast_numeric(&self, to: ElemKind) -> Option<Scalar> {
        match to {
            ElemKind::I8 => self.cast().map(Scalar::I8),
            ElemKind::U8 => self.cast().map(Scalar::U8),
            ElemKind::I16 => self.cast().map(Scalar::I16),
            ElemKind::U16 => self.cast().map(Scalar::U16),
            ElemKind::I32 => self.cast().map(Scalar::I32),
            ElemKind::U32 => self.cast().map(Scalar::U32),
            ElemKind::I64 => self.cast().map(Scalar::I64),
            ElemKind::U64 => self.cast().map(Scalar::U64),
            ElemKind::F32 => self.cast().map(Scalar::F32),
            ElemKind::F64 => self.cast().map(Scalar::F64),
            ElemKind::Bool | ElemKind::Complex | ElemKind::Str => None,
        }
    }
}

fn parse(text: &str, to: ElemKind) -> Option<Scalar> {
    let t = text.trim();
    match to {
        ElemKind::Bool => parse_bool(t).map(Scalar::Bool),
        ElemKind::I8 => t.parse().ok().map(Scalar::I8),
        ElemKind::U8 => t.parse().ok().map(Scalar::U8),
        ElemKind::I16 => t.parse().ok().map(Scalar::I16),
        ElemKind::U16 => t.parse().ok().map(Scalar::U16),
        ElemKind::I32 => t.parse().ok().map(Scalar::I32),
        ElemKind::U32 => t.parse().ok().map(Scalar::U32),
        ElemKind::I64 => t.parse().ok().map(Scalar::I64),
        ElemKind::U64 => t.parse().ok().map(Scalar::U64),
        ElemKind::F32 => t.parse().ok().map(Scalar::F32),
        ElemKind::F64 => t.parse().ok().map(Scalar::F64),
        ElemKind::Complex => t.parse().ok().map(Scalar::Complex),
        ElemKind::Str => Some(Scalar::Str(String::from(text))),
    }
}

fn parse_bool(t: &str) -> Option<bool> {
    if t.eq_ignore_ascii_case("true") {
        Some(true)
    } else if t.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn conversion_error(value: &Scalar, to: ElemKind) -> ArrayError {
    ArrayError::Conversion {
        from: value.kind(),
        to,
        value: value.to_string(),
    }
}
