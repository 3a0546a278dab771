use ndconvert::prelude::*;
use ndconvert::{innermost_element_type, is_jagged, is_vector, shape_of};

use ndconvert_gen::array_builder::ArrayBuilder;
use ndconvert_gen::jagged_builder::JaggedBuilder;

#[test]
fn test_predicates() {
    let v = ArrayValue::from(arr1(&[1, 2, 3]));
    let m = ArrayValue::from(arr2(&[[1, 2], [3, 4]]));
    let j1 = ArrayValue::from(jagged(vec![1.0f32, 2.0]));
    let j2 = ArrayValue::from(jagged(vec![vec![1u8], vec![2, 3]]));

    assert!(is_vector(&v));
    assert!(!is_jagged(&v));
    assert!(!is_vector(&m));
    assert!(!is_jagged(&m));
    assert!(is_vector(&j1));
    assert!(!is_jagged(&j1));
    assert!(!is_vector(&j2));
    assert!(is_jagged(&j2));
}

#[test]
fn test_innermost_element_type() {
    let a = ArrayValue::from(jagged(vec![vec![vec![1.5f64, 2.5]], vec![vec![]]]));
    assert_eq!(innermost_element_type(&a), ElemKind::F64);
    assert_eq!(a.ndim(), 3);

    let empty = ArrayValue::from(jagged(Vec::<Vec<Vec<i16>>>::new()));
    assert_eq!(innermost_element_type(&empty), ElemKind::I16);
    assert_eq!(empty.ndim(), 3);

    let r = ArrayValue::from(ArrayBuilder::new([2, 0, 3]).build::<u64>());
    assert_eq!(innermost_element_type(&r), ElemKind::U64);
}

#[test]
fn test_rect_shape_is_exact() {
    let a = ArrayValue::from(ArrayBuilder::new([4, 1, 2]).build::<i8>());
    for &deep in &[false, true] {
        for &policy in &[ShapePolicy::Uniform, ShapePolicy::Max] {
            let s = shape_of(&a, deep, policy);
            assert_eq!(s.dims(), &[4, 1, 2]);
            assert_eq!(s.layout(), Layout::Rectangular);
        }
    }
}

#[test]
fn test_uniform_and_max() {
    let a = ArrayValue::from(jagged(vec![vec![1, 2], vec![3, 4, 5]]));
    assert_eq!(shape_of(&a, true, ShapePolicy::Uniform).dims(), &[2, 2]);
    assert_eq!(shape_of(&a, true, ShapePolicy::Max).dims(), &[2, 3]);
    assert_eq!(shape_of(&a, false, ShapePolicy::Max).dims(), &[2]);
    assert_eq!(shape_of(&a, true, ShapePolicy::Max).layout(), Layout::Jagged);
}

#[test]
fn test_max_looks_past_first_rows() {
    let a = ArrayValue::from(jagged(vec![
        vec![vec![1]],
        vec![vec![2, 3, 4], vec![], vec![5]],
    ]));
    assert_eq!(a.shape(true, ShapePolicy::Max).dims(), &[2, 3, 3]);
    assert_eq!(a.shape(true, ShapePolicy::Uniform).dims(), &[2, 1, 1]);
}

#[test]
fn test_empty_outer() {
    let a = ArrayValue::from(jagged(Vec::<Vec<f64>>::new()));
    assert_eq!(a.shape(true, ShapePolicy::Max).dims(), &[0]);
    assert_eq!(a.shape(true, ShapePolicy::Uniform).dims(), &[0]);
    assert_eq!(a.shape(true, ShapePolicy::Max).size(), 0);
}

#[test]
fn test_uniform_builder_shape() {
    let a = JaggedBuilder::uniform([3, 2, 4]).build::<i32>();
    assert!(!a.is_ragged());
    for &policy in &[ShapePolicy::Uniform, ShapePolicy::Max] {
        assert_eq!(a.shape(true, policy).dims(), &[3, 2, 4]);
    }
}

#[test]
fn test_ragged_max_bounds_every_row() {
    for seed in 0..8 {
        let a = JaggedBuilder::ragged(3, 4, seed).build::<f32>();
        let shape = a.shape(true, ShapePolicy::Max).padded(3);
        let value = ArrayValue::from(a.clone());
        // every leaf has an index inside the max shape
        let count = ndconvert::indices_of(&value)
            .filter(|ix| value.try_get(ix).is_some())
            .count();
        assert_eq!(count, a.leaves().count());
        assert_eq!(shape.ndim(), 3);
    }
}

#[test]
fn test_shape_display() {
    assert_eq!(Shape::rect([2, 3]).to_string(), "[2, 3]");
    assert_eq!(Shape::rect(Vec::<usize>::new()).to_string(), "[]");
}
