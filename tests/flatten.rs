use ndconvert::prelude::*;
use ndconvert::{flatten, flatten_filled, ErrorKind};

use ndconvert_gen::array_builder::ArrayBuilder;
use ndconvert_gen::jagged_builder::JaggedBuilder;

#[test]
fn test_rect_row_major() {
    let a = ArrayValue::from(arr2(&[[1, 2, 3], [4, 5, 6]]));
    let flat = flatten_filled(&a, &Shape::rect([2, 3])).unwrap();
    let expected = (1..=6).map(Scalar::I32).collect::<Vec<_>>();
    assert_eq!(flat, expected);
}

#[test]
fn test_jagged_matches_rect() {
    let r = ArrayBuilder::new([3, 2, 4]).build::<i64>();
    let j = JaggedBuilder::uniform([3, 2, 4]).build::<i64>();
    let shape = Shape::rect([3, 2, 4]);
    let from_rect = flatten_filled(&ArrayValue::from(r.clone()), &shape).unwrap();
    let from_jagged = flatten_filled(&ArrayValue::from(j), &shape).unwrap();
    assert_eq!(from_rect, from_jagged);
    assert_eq!(&from_rect[..], r.as_slice());
}

#[test]
fn test_ragged_missing_cells() {
    let a = ArrayValue::from(jagged(vec![vec![1u8, 2], vec![3]]));
    let flat = flatten(&a, &Shape::jagged([2, 2])).unwrap();
    assert_eq!(flat, vec![Some(&Scalar::U8(1)), Some(&Scalar::U8(2)), Some(&Scalar::U8(3)), None]);

    let filled = flatten_filled(&a, &Shape::jagged([2, 2])).unwrap();
    assert_eq!(filled[3], Scalar::U8(0));
}

#[test]
fn test_truncation() {
    let a = ArrayValue::from(jagged(vec![vec![1, 2, 3], vec![4]]));
    let flat = flatten_filled(&a, &Shape::jagged([2, 1])).unwrap();
    assert_eq!(flat, vec![Scalar::I32(1), Scalar::I32(4)]);

    // a larger shape than the array has
    let flat = flatten(&a, &Shape::jagged([3, 3])).unwrap();
    assert_eq!(flat.len(), 9);
    assert_eq!(flat.iter().filter(|x| x.is_some()).count(), 4);
    assert!(flat[6..].iter().all(Option::is_none));
}

#[test]
fn test_rect_subshape() {
    let a = ArrayValue::from(ArrayBuilder::new([3, 3]).build::<u8>());
    let flat = flatten(&a, &Shape::rect([2, 4])).unwrap();
    let got = flat.iter().map(|x| x.cloned()).collect::<Vec<_>>();
    let expected = vec![
        Some(Scalar::U8(0)),
        Some(Scalar::U8(1)),
        Some(Scalar::U8(2)),
        None,
        Some(Scalar::U8(3)),
        Some(Scalar::U8(4)),
        Some(Scalar::U8(5)),
        None,
    ];
    assert_eq!(got, expected);
}

#[test]
fn test_rank_mismatch() {
    let a = ArrayValue::from(arr1(&[1.0f64, 2.0]));
    let err = flatten(&a, &Shape::rect([1, 2])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
}

#[test]
fn test_overflowing_shape() {
    let a = ArrayValue::from(jagged(vec![vec![1u8], vec![2]]));
    let err = flatten(&a, &Shape::jagged([usize::MAX, 2])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    let err = flatten_filled(&a, &Shape::jagged([2, usize::MAX])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
fn test_leaves_order() {
    let j = JaggedBuilder::ragged(3, 3, 11).build::<u32>();
    let value = ArrayValue::from(j.clone());
    let shape = value.shape(true, ShapePolicy::Max).padded(3);
    let flat = flatten(&value, &shape).unwrap();
    let present = flat.into_iter().flatten().collect::<Vec<_>>();
    assert_eq!(present, j.leaves().collect::<Vec<_>>());
}
