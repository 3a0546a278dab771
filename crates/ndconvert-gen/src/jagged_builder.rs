// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndconvert::{Element, Ix, JaggedArray, Node};

use num_traits::Num;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Row lengths of a generated jagged array
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowLengths
{
    /// Every row at level `i` has length `dims[i]`
    Uniform(Vec<Ix>),
    /// Every row has a length drawn from `0..=max_len`
    Ragged
    {
        depth: usize,
        max_len: Ix,
        seed: u64,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JaggedBuilder
{
    lengths: RowLengths,
}

impl JaggedBuilder
{
    /// A non-ragged jagged array with extents `dims`.
    pub fn uniform(dims: impl Into<Vec<Ix>>) -> Self
    {
        JaggedBuilder {
            lengths: RowLengths::Uniform(dims.into()),
        }
    }

    /// A ragged jagged array of depth `depth`; the same seed gives the same
    /// row lengths.
    pub fn ragged(depth: usize, max_len: Ix, seed: u64) -> Self
    {
        JaggedBuilder {
            lengths: RowLengths::Ragged { depth, max_len, seed },
        }
    }

    pub fn depth(&self) -> usize
    {
        match self.lengths {
            RowLengths::Uniform(ref dims) => dims.len(),
            RowLengths::Ragged { depth, .. } => depth,
        }
    }

    /// Build the array; leaves count up from zero in depth-first order.
    pub fn build<T>(self) -> JaggedArray
    where T: Element + Num
    {
        let depth = self.depth();
        let mut next = T::zero();
        let rows = match self.lengths {
            RowLengths::Uniform(dims) => {
                let mut len = |level: usize| dims[level];
                fill(depth, 0, &mut len, &mut next)
            }
            RowLengths::Ragged { max_len, seed, .. } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                let mut len = |_: usize| rng.random_range(0..=max_len);
                fill(depth, 0, &mut len, &mut next)
            }
        };
        JaggedArray::new(T::KIND, depth, rows).unwrap()
    }
}

fn fill<T, F>(depth: usize, level: usize, len: &mut F, next: &mut T) -> Vec<Node>
where
    T: Element + Num,
    F: FnMut(usize) -> Ix,
{
    let n = len(level);
    (0..n)
        .map(|_| {
            if level + 1 == depth {
                let leaf = next.clone();
                *next = leaf.clone() + T::one();
                Node::Leaf(leaf.into_scalar())
            } else {
                Node::Row(fill(depth, level + 1, len, next))
            }
        })
        .collect()
}

#[test]
fn test_uniform()
{
    let a = JaggedBuilder::uniform([2, 3]).build::<u16>();
    assert_eq!(a.depth(), 2);
    assert!(!a.is_ragged());
    assert_eq!(a.into_nested::<Vec<u16>>(), Some(vec![vec![0, 1, 2], vec![3, 4, 5]]));
}

#[test]
fn test_ragged_is_reproducible()
{
    let a = JaggedBuilder::ragged(3, 4, 7).build::<f64>();
    let b = JaggedBuilder::ragged(3, 4, 7).build::<f64>();
    assert_eq!(a.depth(), 3);
    assert_eq!(a, b);
}
