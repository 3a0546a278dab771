use ndconvert::prelude::*;
use ndconvert::ErrorKind;

use defmac::defmac;
use ndconvert_gen::array_builder::ArrayBuilder;

#[test]
fn test_rect_get() {
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    assert_eq!(a.get(&[1, 2], false).unwrap(), ElemRef::Leaf(&Scalar::I32(6)));
    assert_eq!(a.get(&[0, 1], true).unwrap().leaf(), Some(&Scalar::I32(2)));
    assert_eq!(a.layout(), Layout::Rectangular);
    assert_eq!(a.elem_kind(), ElemKind::I32);
}

#[test]
fn test_out_of_range() {
    let a = ArrayValue::from(arr1(&[1u8, 2, 3]));
    let err = a.get(&[3], false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(err, ArrayError::IndexOutOfRange { axis: 0, index: 3, len: 3 });
    assert_eq!(a.try_get(&[3]), None);

    let j = ArrayValue::from(jagged(vec![vec![1u8, 2], vec![3]]));
    assert_eq!(j.get(&[1, 1], true).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(j.try_get(&[1, 1]), None);
    assert_eq!(j.try_get(&[2, 0]), None);
    assert_eq!(j.try_get(&[0, 1]).and_then(|e| e.leaf()), Some(&Scalar::U8(2)));
}

#[test]
fn test_wrong_number_of_axes() {
    let a = arr2(&[[1.0f64]]);
    defmac!(axes_err index => a.get(index, false).unwrap_err().kind());
    assert_eq!(axes_err!(&[0]), ErrorKind::IncompatibleShape);
    assert_eq!(axes_err!(&[0, 0, 0]), ErrorKind::IncompatibleShape);

    let j = jagged(vec![vec![1.0f64]]);
    assert_eq!(j.get(&[0, 0], false).unwrap_err().kind(), ErrorKind::IncompatibleShape);
    assert_eq!(j.get(&[0, 0, 0], true).unwrap_err().kind(), ErrorKind::IncompatibleShape);
}

#[test]
fn test_jagged_shallow_and_deep() {
    let j = jagged(vec![vec![10i64, 20], vec![30]]);
    let row = j.get(&[0], false).unwrap();
    assert!(!row.is_leaf());
    assert_eq!(row.row().map(|r| r.len()), Some(2));
    assert_eq!(row.to_node(), Node::Row(vec![Node::Leaf(Scalar::I64(10)), Node::Leaf(Scalar::I64(20))]));
    assert_eq!(j.get(&[1, 0], true).unwrap(), ElemRef::Leaf(&Scalar::I64(30)));
    assert_eq!(j.layout(), Layout::Jagged);
    assert_eq!(j.elem_kind(), ElemKind::I64);
}

#[test]
fn test_rect_set() {
    let mut a = ArrayBuilder::new([2, 2]).build::<u16>();
    a.set(&[1, 0], Node::Leaf(Scalar::U16(9)), false).unwrap();
    assert_eq!(a.to_vec::<u16>(), Some(vec![0, 1, 9, 3]));

    let err = a.set(&[0, 0], Node::Leaf(Scalar::I32(9)), false).unwrap_err();
    assert_eq!(err, ArrayError::KindMismatch { expected: ElemKind::U16, got: ElemKind::I32 });
    let err = a.set(&[0, 0], Node::Row(vec![]), false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleLayout);
    let err = a.set(&[2, 0], Node::Leaf(Scalar::U16(1)), false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
}

#[test]
fn test_jagged_set() {
    let mut j = jagged(vec![vec![1u8, 2], vec![3]]);
    j.set(&[1, 0], Node::Leaf(Scalar::U8(7)), true).unwrap();
    j.set(&[0], Node::Row(vec![Node::Leaf(Scalar::U8(5))]), false).unwrap();
    assert_eq!(j.clone().into_nested::<Vec<u8>>(), Some(vec![vec![5], vec![7]]));

    // a leaf where a row belongs
    let err = j.set(&[0], Node::Leaf(Scalar::U8(1)), false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
    let err = j.set(&[0, 0], Node::Leaf(Scalar::F64(1.)), true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KindMismatch);
    let err = j.set(&[0, 1], Node::Leaf(Scalar::U8(1)), true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
}

#[test]
fn test_value_dispatch() {
    let mut v = ArrayValue::from(arr1(&[true, false]));
    v.set(&[1], Node::Leaf(Scalar::Bool(true)), false).unwrap();
    assert_eq!(v, ArrayValue::from(arr1(&[true, true])));
    assert_eq!(NdAccess::layout(&v), Layout::Rectangular);
    assert_eq!(v.elem_kind(), ElemKind::Bool);
}

#[test]
#[should_panic]
fn test_index_panics() {
    let a = arr1(&[1, 2]);
    let _ = &a[&[2][..]];
}
