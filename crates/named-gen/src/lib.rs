// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Builders for named test arrays.

use ndarray::Array;
use ndarray::IxDyn;
use ndarray::Order;
use ndarray_named::{default_labels, Key, NamedArray};

use num_traits::Num;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedArrayBuilder
{
    shape: Vec<usize>,
    memory_order: Order,
    generator: ElementGenerator,
    names: NameGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    Sequential,
    Zero,
}

/// How to name the entries of each axis
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NameGenerator
{
    /// `"1"`, `"2"`, ...
    Positional,
    /// `"a0"`, `"a1"`, ... with the lowercase axis label as prefix
    Strings,
    /// `:a0`, `:a1`, ... with the lowercase axis label as prefix
    Symbols,
}

impl Default for NamedArrayBuilder
{
    fn default() -> Self
    {
        Self::new(&[0])
    }
}

impl NamedArrayBuilder
{
    pub fn new(shape: &[usize]) -> Self
    {
        NamedArrayBuilder {
            shape: shape.to_vec(),
            memory_order: Order::C,
            generator: ElementGenerator::Sequential,
            names: NameGenerator::Positional,
        }
    }

    pub fn memory_order(mut self, order: Order) -> Self
    {
        self.memory_order = order;
        self
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    pub fn names(mut self, names: NameGenerator) -> Self
    {
        self.names = names;
        self
    }

    pub fn build<T>(self) -> NamedArray<T, Key>
    where T: Num + Clone
    {
        let mut current = T::zero();
        let size = self.shape.iter().product();
        let use_zeros = self.generator == ElementGenerator::Zero;
        let data = Array::from_iter((0..size).map(|_| {
            let ret = current.clone();
            if !use_zeros {
                current = ret.clone() + T::one();
            }
            ret
        }))
        .into_shape_with_order((IxDyn(&self.shape), self.memory_order))
        .unwrap();

        if self.names == NameGenerator::Positional {
            return NamedArray::new(data);
        }
        let labels = default_labels(self.shape.len());
        let names = labels
            .iter()
            .zip(&self.shape)
            .map(|(label, &n)| {
                let prefix = label.to_string().to_lowercase();
                (0..n)
                    .map(|i| match self.names {
                        NameGenerator::Symbols => Key::sym(format!("{}{}", prefix, i)),
                        _ => Key::from(format!("{}{}", prefix, i)),
                    })
                    .collect()
            })
            .collect();
        NamedArray::with_names(data, names, Some(labels)).unwrap()
    }
}

#[test]
fn test_names()
{
    let a = NamedArrayBuilder::new(&[2, 3])
        .names(NameGenerator::Symbols)
        .build::<i32>();

    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a.names(ndarray::Axis(1)).keys()[2], Key::sym("b2"));
    assert_eq!(a.array()[IxDyn(&[1, 2])], 5);
}

#[test]
fn test_order()
{
    let (m, n) = (12, 13);
    let c = NamedArrayBuilder::new(&[m, n])
        .memory_order(Order::C)
        .build::<i32>();
    let f = NamedArrayBuilder::new(&[m, n])
        .memory_order(Order::F)
        .build::<i32>();

    assert_eq!(c.array().strides(), &[n as isize, 1]);
    assert_eq!(f.array().strides(), &[1, m as isize]);
}
