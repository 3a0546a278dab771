// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndconvert::{Element, Ix, RectArray};

use num_traits::Num;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    dim: Vec<Ix>,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    Sequential,
    Zero,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        Self::new(vec![0])
    }
}

impl ArrayBuilder
{
    pub fn new(dim: impl Into<Vec<Ix>>) -> Self
    {
        ArrayBuilder {
            dim: dim.into(),
            generator: ElementGenerator::Sequential,
        }
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    /// Build the array; sequential elements count up from zero in
    /// row-major order.
    pub fn build<T>(self) -> RectArray
    where T: Element + Num
    {
        let mut current = T::zero();
        let size: usize = self.dim.iter().product();
        let use_zeros = self.generator == ElementGenerator::Zero;
        let data = (0..size)
            .map(|_| {
                let ret = current.clone();
                if !use_zeros {
                    current = ret.clone() + T::one();
                }
                ret
            })
            .collect();
        RectArray::from_shape_vec(self.dim, data).unwrap()
    }
}

#[test]
fn test_sequential()
{
    let a = ArrayBuilder::new([2, 3]).build::<i32>();
    assert_eq!(a.dim(), &[2, 3]);
    assert_eq!(a.strides(), &[3, 1]);
    assert_eq!(a.to_vec::<i32>(), Some(vec![0, 1, 2, 3, 4, 5]));

    let z = ArrayBuilder::new([4])
        .generator(ElementGenerator::Zero)
        .build::<f64>();
    assert_eq!(z.to_vec::<f64>(), Some(vec![0.; 4]));
}
