use ndconvert::prelude::*;
use ndconvert::Ix;

use ndconvert_gen::array_builder::ArrayBuilder;

#[test]
fn formatting() {
    let a = arr1(&[1.0f32, 2., 3., 4.]);
    assert_eq!(format!("{}", a), "[1, 2, 3, 4]");
    assert_eq!(format!("{:4}", a), "[   1,    2,    3,    4]");

    let a = ArrayBuilder::new([4, 1, 1]).build::<u8>();
    assert_eq!(format!("{}", a), "[[[0]],\n [[1]],\n [[2]],\n [[3]]]");

    let a = arr2(&[[1, 2], [3, 4]]);
    assert_eq!(format!("{}", a), "[[1, 2],\n [3, 4]]");
    assert_eq!(format!("{:4}", a), "[[   1,    2],\n [   3,    4]]");

    let b = RectArray::from_elem(Vec::<Ix>::new(), Scalar::F32(3.5));
    assert_eq!(format!("{}", b), "3.5");

    let s = format!("{:.2}", arr1(&[1.111f64, 2.5]));
    assert_eq!(s, "[1.11, 2.50]");
}

#[test]
fn formatting_jagged() {
    let a = jagged(vec![vec![vec![1], vec![2, 3]], vec![], vec![vec![4]]]);
    assert_eq!(format!("{}", a), "[[[1],\n  [2, 3]],\n [],\n [[4]]]");
    assert_eq!(format!("{}", jagged(Vec::<Vec<u8>>::new())), "[]");
    assert_eq!(format!("{}", jagged(vec![true, false])), "[true, false]");

    let v = ArrayValue::from(jagged(vec![vec![1u8], vec![2, 3]]));
    assert_eq!(v.to_string(), "[[1],\n [2, 3]]");
}

#[test]
fn debug_format() {
    let a = arr2(&[[1i64, 2], [3, 4]]);
    assert_eq!(format!("{:?}", a), "[[1, 2],\n [3, 4]] shape=[2, 2], strides=[2, 1], kind=i64");

    let v = ArrayValue::from(jagged(vec![String::from("x")]));
    assert_eq!(format!("{:?}", v), "Jagged([\"x\"] depth=1, kind=str)");
}

#[test]
fn error_display() {
    let err = ArrayError::IndexOutOfRange { axis: 1, index: 3, len: 3 };
    assert_eq!(err.to_string(), "index out of range: index 3 on axis 1 with length 3");
    let err = ArrayError::KindMismatch { expected: ElemKind::F64, got: ElemKind::Str };
    assert_eq!(err.to_string(), "element kind mismatch: expected f64, got str");
    assert_eq!(ArrayError::IncompatibleLayout.to_string(), "incompatible layout");
    assert_eq!(ArrayError::Overflow.to_string(), "arithmetic overflow");
}
