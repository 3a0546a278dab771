use ndconvert::prelude::*;
use ndconvert::{indices, indices_of, Ix};

use itertools::Itertools;
use ndconvert_gen::array_builder::ArrayBuilder;
use quickcheck::quickcheck;

#[test]
fn test_index_iterate() {
    let a = ArrayBuilder::new([2, 3, 4]).build::<u32>();
    let value = ArrayValue::from(a.clone());
    let mut c = 0;
    for ix in indices_of(&value) {
        let ans = (ix[0] * 12 + ix[1] * 4 + ix[2]) as u32;
        assert_eq!(a[&ix[..]], Scalar::U32(ans));
        c += 1;
    }
    assert_eq!(c, a.len());
}

#[test]
fn test_canonical_order() {
    let got = indices([2, 3]).collect::<Vec<_>>();
    let expected = (0..2).cartesian_product(0..3).map(|(i, j)| vec![i, j]).collect::<Vec<_>>();
    assert_eq!(got, expected);
}

#[test]
fn test_rank_zero_and_empty() {
    assert_eq!(indices(Vec::<Ix>::new()).collect::<Vec<_>>(), vec![Vec::<Ix>::new()]);
    assert_eq!(indices([3, 0, 2]).count(), 0);
    assert_eq!(indices([0]).len(), 0);
}

#[test]
fn test_indices_of_ragged_use_max() {
    let a = ArrayValue::from(jagged(vec![vec![1, 2], vec![3, 4, 5]]));
    let it = indices_of(&a);
    assert_eq!(it.dims(), &[2, 3]);
    assert_eq!(it.len(), 6);
}

#[test]
fn test_exact_size() {
    let mut it = indices([2, 2, 2]);
    assert_eq!(it.len(), 8);
    it.next();
    it.next();
    assert_eq!(it.len(), 6);
    assert_eq!(it.by_ref().count(), 6);
    assert_eq!(it.next(), None);
}

fn small_dims(dims: Vec<u8>) -> Vec<Ix> {
    dims.into_iter().take(4).map(|d| (d % 5) as Ix).collect()
}

quickcheck! {
    fn count_is_product(dims: Vec<u8>) -> bool {
        let dims = small_dims(dims);
        let size: usize = dims.iter().product();
        indices(dims).count() == size
    }

    fn strictly_increasing(dims: Vec<u8>) -> bool {
        let dims = small_dims(dims);
        indices(dims).tuple_windows().all(|(a, b)| a < b)
    }

    fn all_in_range(dims: Vec<u8>) -> bool {
        let dims = small_dims(dims);
        indices(dims.clone()).all(|ix| ix.len() == dims.len() && ix.iter().zip(&dims).all(|(i, d)| i < d))
    }

    fn unravel_agrees(dims: Vec<u8>) -> bool {
        let shape = Shape::rect(small_dims(dims));
        shape
            .indices()
            .enumerate()
            .all(|(offset, ix)| shape.unravel(offset) == Some(ix.clone()) && shape.offset_of(&ix) == Ok(offset))
    }
}
