// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, SerializeStruct, SerializeTuple};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use alloc::vec::Vec;
use std::fmt;

use crate::{ArrayValue, ElemKind, Ix, JaggedArray, Layout, Node, RectArray, Scalar, Shape};

/// The format version written as the `v` field of serialized arrays.
const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// **Requires crate feature `"serde"`**
///
/// A kind is written as its [`name`](ElemKind::name).
impl Serialize for ElemKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.serialize_str(self.name())
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for ElemKind {
    fn deserialize<D>(deserializer: D) -> Result<ElemKind, D::Error>
    where D: Deserializer<'de> {
        struct KindVisitor;

        impl<'de> Visitor<'de> for KindVisitor {
            type Value = ElemKind;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an element kind name such as \"f64\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<ElemKind, E>
            where E: de::Error {
                ElemKind::from_name(value)
                    .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(KindVisitor)
    }
}

static LAYOUT_NAMES: &[&str] = &["rectangular", "jagged"];

/// **Requires crate feature `"serde"`**
impl Serialize for Layout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.serialize_str(match self {
            Layout::Rectangular => LAYOUT_NAMES[0],
            Layout::Jagged => LAYOUT_NAMES[1],
        })
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D>(deserializer: D) -> Result<Layout, D::Error>
    where D: Deserializer<'de> {
        struct LayoutVisitor;

        impl<'de> Visitor<'de> for LayoutVisitor {
            type Value = Layout;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#""rectangular" or "jagged""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Layout, E>
            where E: de::Error {
                match value {
                    "rectangular" => Ok(Layout::Rectangular),
                    "jagged" => Ok(Layout::Jagged),
                    other => Err(de::Error::unknown_variant(other, LAYOUT_NAMES)),
                }
            }
        }

        deserializer.deserialize_str(LayoutVisitor)
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        let mut state = serializer.serialize_struct("Shape", 2)?;
        state.serialize_field("dims", self.dims())?;
        state.serialize_field("layout", &self.layout())?;
        state.end()
    }
}

enum ShapeField {
    Dims,
    Layout,
}

static SHAPE_FIELDS: &[&str] = &["dims", "layout"];

impl<'de> Deserialize<'de> for ShapeField {
    fn deserialize<D>(deserializer: D) -> Result<ShapeField, D::Error>
    where D: Deserializer<'de> {
        struct ShapeFieldVisitor;

        impl<'de> Visitor<'de> for ShapeFieldVisitor {
            type Value = ShapeField;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#""dims" or "layout""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ShapeField, E>
            where E: de::Error {
                match value {
                    "dims" => Ok(ShapeField::Dims),
                    "layout" => Ok(ShapeField::Layout),
                    other => Err(de::Error::unknown_field(other, SHAPE_FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(ShapeFieldVisitor)
    }
}

struct ShapeVisitor;

impl<'de> Visitor<'de> for ShapeVisitor {
    type Value = Shape;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("ndconvert shape")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Shape, V::Error>
    where V: SeqAccess<'de> {
        let dims: Vec<Ix> = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(0, &self)),
        };
        let layout: Layout = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(1, &self)),
        };
        Ok(Shape::new(dims, layout))
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Shape, V::Error>
    where V: MapAccess<'de> {
        let mut dims: Option<Vec<Ix>> = None;
        let mut layout: Option<Layout> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                ShapeField::Dims => {
                    dims = Some(visitor.next_value()?);
                }
                ShapeField::Layout => {
                    layout = Some(visitor.next_value()?);
                }
            }
        }

        let dims = match dims {
            Some(dims) => dims,
            None => return Err(de::Error::missing_field("dims")),
        };
        let layout = match layout {
            Some(layout) => layout,
            None => return Err(de::Error::missing_field("layout")),
        };
        Ok(Shape::new(dims, layout))
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> Result<Shape, D::Error>
    where D: Deserializer<'de> {
        deserializer.deserialize_struct("Shape", SHAPE_FIELDS, ShapeVisitor)
    }
}

/// **Requires crate feature `"serde"`**
///
/// The payload is written as is; a complex value is a `(re, im)` tuple.
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        match self {
            Scalar::Bool(x) => serializer.serialize_bool(*x),
            Scalar::I8(x) => serializer.serialize_i8(*x),
            Scalar::U8(x) => serializer.serialize_u8(*x),
            Scalar::I16(x) => serializer.serialize_i16(*x),
            Scalar::U16(x) => serializer.serialize_u16(*x),
            Scalar::I32(x) => serializer.serialize_i32(*x),
            Scalar::U32(x) => serializer.serialize_u32(*x),
            Scalar::I64(x) => serializer.serialize_i64(*x),
            Scalar::U64(x) => serializer.serialize_u64(*x),
            Scalar::F32(x) => serializer.serialize_f32(*x),
            Scalar::F64(x) => serializer.serialize_f64(*x),
            Scalar::Complex(c) => {
                let mut tuple = serializer.serialize_tuple(2)?;
                tuple.serialize_element(&c.re)?;
                tuple.serialize_element(&c.im)?;
                tuple.end()
            }
            Scalar::Str(s) => serializer.serialize_str(s),
        }
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        match self {
            Node::Leaf(s) => s.serialize(serializer),
            Node::Row(r) => r.serialize(serializer),
        }
    }
}

/// **Requires crate feature `"serde"`**
///
/// Written as a struct with fields `v` (format version), `kind`, `dim` and
/// `data`, the leaves in row-major order.
impl Serialize for RectArray {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        let mut state = serializer.serialize_struct("RectArray", 4)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("dim", self.dim())?;
        state.serialize_field("data", &Sequence(self.as_slice()))?;
        state.end()
    }
}

// private slice wrapper
struct Sequence<'a>(&'a [Scalar]);

impl<'a> Serialize for Sequence<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for elt in self.0 {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

/// **Requires crate feature `"serde"`**
///
/// Written as a struct with fields `v` (format version), `kind`, `depth`
/// and `rows`, the rows as nested sequences.
impl Serialize for JaggedArray {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        let mut state = serializer.serialize_struct("JaggedArray", 4)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("depth", &self.depth())?;
        state.serialize_field("rows", self.rows())?;
        state.end()
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for ArrayValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        match self {
            ArrayValue::Rect(a) => serializer.serialize_newtype_variant("ArrayValue", 0, "Rect", a),
            ArrayValue::Jagged(a) => serializer.serialize_newtype_variant("ArrayValue", 1, "Jagged", a),
        }
    }
}
