// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::{ArrayValue, JaggedArray, Node, RectArray, Scalar};

fn format_rect<F>(a: &RectArray, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    F: FnMut(&Scalar, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let ndim = a.ndim();
    let shape = a.shape();
    // None will be an empty iter.
    let mut last_index = match shape.first_index() {
        None => a.dim().to_vec(),
        Some(ix) => ix,
    };
    for _ in 0..ndim {
        f.write_str("[")?;
    }
    let mut first = true;
    // Walk the indices alongside the data and take the index wraparounds
    // as cues for when to add []'s and how many to add.
    for (index, elt) in shape.indices().zip(a.iter()) {
        let take_n = if ndim == 0 { 1 } else { ndim - 1 };
        let mut update_index = false;
        for (i, (x, y)) in index.iter().take(take_n).zip(&last_index).enumerate() {
            if x != y {
                // # of ['s needed
                let n = ndim - i - 1;
                for _ in 0..n {
                    f.write_str("]")?;
                }
                f.write_str(",\n")?;
                for _ in 0..ndim - n {
                    f.write_str(" ")?;
                }
                for _ in 0..n {
                    f.write_str("[")?;
                }
                first = true;
                update_index = true;
                break;
            }
        }
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        format(elt, f)?;

        if update_index {
            last_index = index;
        }
    }
    for _ in 0..ndim {
        f.write_str("]")?;
    }
    Ok(())
}

fn format_rows<F>(rows: &[Node], level: usize, f: &mut fmt::Formatter<'_>, format: &mut F) -> fmt::Result
where
    F: FnMut(&Scalar, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    f.write_str("[")?;
    for (i, node) in rows.iter().enumerate() {
        match node {
            Node::Leaf(s) => {
                if i > 0 {
                    f.write_str(", ")?;
                }
                format(s, f)?;
            }
            Node::Row(r) => {
                if i > 0 {
                    f.write_str(",\n")?;
                    for _ in 0..=level {
                        f.write_str(" ")?;
                    }
                }
                format_rows(r, level + 1, f, format)?;
            }
        }
    }
    f.write_str("]")
}

// Strings are quoted, everything else is shown as for Display.
fn debug_leaf(s: &Scalar, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match s {
        Scalar::Str(t) => fmt::Debug::fmt(t, f),
        _ => fmt::Display::fmt(s, f),
    }
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl fmt::Display for RectArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_rect(self, f, fmt::Display::fmt)
    }
}

/// Format the array with its shape, strides and element kind appended.
impl fmt::Debug for RectArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_rect(self, f, debug_leaf)?;
        write!(
            f,
            " shape={:?}, strides={:?}, kind={}",
            self.dim(),
            self.strides(),
            self.kind()
        )
    }
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// Rows are shown at their own length, one row of rows per line.
impl fmt::Display for JaggedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_rows(self.rows(), 0, f, &mut |s: &Scalar, f: &mut fmt::Formatter<'_>| {
            fmt::Display::fmt(s, f)
        })
    }
}

impl fmt::Debug for JaggedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_rows(self.rows(), 0, f, &mut debug_leaf)?;
        write!(f, " depth={}, kind={}", self.depth(), self.kind())
    }
}

impl fmt::Display for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayValue::Rect(a) => fmt::Display::fmt(a, f),
            ArrayValue::Jagged(a) => fmt::Display::fmt(a, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::{arr1, arr2, jagged, RectArray, Scalar};

    #[test]
    fn rect_multiline() {
        let a = arr2(&[[1, 2], [3, 4]]);
        assert_eq!(format!("{}", a), "[[1, 2],\n [3, 4]]");
        assert_eq!(format!("{:3}", arr1(&[1u8, 20])), "[  1,  20]");
    }

    #[test]
    fn rank_zero_and_empty() {
        let a = RectArray::from_elem(Vec::<usize>::new(), Scalar::F64(3.5));
        assert_eq!(format!("{}", a), "3.5");
        let e = RectArray::zeros(crate::ElemKind::I32, vec![0, 3]);
        assert_eq!(format!("{}", e), "[[]]");
    }

    #[test]
    fn jagged_rows() {
        let a = jagged(vec![vec![1, 2], vec![3]]);
        assert_eq!(format!("{}", a), "[[1, 2],\n [3]]");
        assert_eq!(format!("{:?}", a), "[[1, 2],\n [3]] depth=2, kind=i32");
    }

    #[test]
    fn debug_quotes_strings() {
        let a = RectArray::from_shape_vec(vec![2], vec![String::from("a"), String::from("b")]).unwrap();
        assert_eq!(format!("{:?}", a), "[\"a\", \"b\"] shape=[2], strides=[1], kind=str");
    }
}
