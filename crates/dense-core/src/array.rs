// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core dense array type.

use crate::{ArrayError, Shape};
use std::ops::{Index, IndexMut};

/// An owned, rank-`R` array stored in one contiguous buffer.
///
/// `DenseArray` is the storage every rank-specific wrapper builds on. It owns
/// its flat buffer and the cached stride table derived from its shape.
///
/// # Memory Layout
/// Element `c` lives at `Σ c[k] * stride[k]` with the first axis varying
/// fastest (see [`Shape::strides`]).
///
/// # Move semantics
/// `Default` is the degenerate array, so `std::mem::take` moves the contents
/// out and leaves the source degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseArray<T, const R: usize> {
    shape: Shape<R>,
    strides: [usize; R],
    data: Vec<T>,
}

impl<T, const R: usize> DenseArray<T, R> {
    /// Creates an array with every element set to `fill`.
    ///
    /// # Examples
    /// ```
    /// use dense_core::DenseArray;
    /// let a = DenseArray::new([3, 2, 2, 1], 7i32).unwrap();
    /// assert_eq!(a.len(), 12);
    /// assert_eq!(a.get([2, 1, 1, 0]).unwrap(), 7);
    /// ```
    ///
    /// # Errors
    /// Returns [`ArrayError::InvalidShape`] if some, but not all, extents are 0,
    /// or [`ArrayError::ShapeOverflow`] if the element count overflows.
    pub fn new(dims: [usize; R], fill: T) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        Shape::new(dims).map(|shape| Self::from_shape(shape, fill))
    }

    /// Creates an array of an already validated shape, every element `fill`.
    pub fn from_shape(shape: Shape<R>, fill: T) -> Self
    where
        T: Clone,
    {
        let data = vec![fill; shape.num_elements()];
        Self::from_parts(shape, data)
    }

    /// Creates an array filled with `T::default()` (zero for numeric types).
    pub fn zeros(dims: [usize; R]) -> Result<Self, ArrayError>
    where
        T: Clone + Default,
    {
        Self::new(dims, T::default())
    }

    /// Creates an array from a flat buffer in storage order.
    ///
    /// # Errors
    /// Returns [`ArrayError::InvalidShape`] for a partially degenerate shape,
    /// [`ArrayError::ShapeOverflow`] if the element count overflows, or
    /// [`ArrayError::BufferSizeMismatch`] if `data.len()` differs from the
    /// product of `dims`.
    pub fn from_vec(dims: [usize; R], data: Vec<T>) -> Result<Self, ArrayError> {
        let shape = Shape::new(dims)?;
        let expected = shape.num_elements();
        if data.len() != expected {
            return Err(ArrayError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(shape, data))
    }

    /// Creates the degenerate array (every extent 0, no elements).
    pub fn degenerate() -> Self {
        Self::from_parts(Shape::degenerate(), Vec::new())
    }

    fn from_parts(shape: Shape<R>, data: Vec<T>) -> Self {
        Self {
            strides: shape.strides(),
            shape,
            data,
        }
    }

    /// Returns the array's shape.
    pub fn shape(&self) -> &Shape<R> {
        &self.shape
    }

    /// Returns the per-axis extents.
    pub fn dims(&self) -> &[usize; R] {
        self.shape.dims()
    }

    /// Returns the cached stride table.
    pub fn strides(&self) -> &[usize; R] {
        &self.strides
    }

    /// Returns the number of axes.
    pub fn rank(&self) -> usize {
        R
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array stores no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if every extent is 0.
    pub fn is_degenerate(&self) -> bool {
        self.shape.is_degenerate()
    }

    /// Converts coordinates to a flat offset without bounds checking.
    pub fn offset(&self, coords: &[usize; R]) -> usize {
        coords
            .iter()
            .zip(self.strides.iter())
            .map(|(&c, &s)| c * s)
            .sum()
    }

    /// Returns the element at `coords`.
    ///
    /// # Errors
    /// Returns [`ArrayError::OutOfRange`] if any coordinate is at or past its
    /// axis extent.
    pub fn get(&self, coords: [usize; R]) -> Result<T, ArrayError>
    where
        T: Copy,
    {
        self.shape.check(&coords)?;
        Ok(self.data[self.offset(&coords)])
    }

    /// Overwrites the element at `coords`.
    ///
    /// # Errors
    /// Returns [`ArrayError::OutOfRange`] if any coordinate is at or past its
    /// axis extent. The array is unchanged on error.
    pub fn set(&mut self, coords: [usize; R], value: T) -> Result<(), ArrayError> {
        self.shape.check(&coords)?;
        let offset = self.offset(&coords);
        self.data[offset] = value;
        Ok(())
    }

    /// Returns the flat buffer in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the flat buffer mutably. The shape cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the array, returning the flat buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Applies `f` to every element in place.
    pub fn map_in_place(&mut self, mut f: impl FnMut(T) -> T)
    where
        T: Copy,
    {
        self.data.iter_mut().for_each(|x| *x = f(*x));
    }
}

impl<T, const R: usize> Default for DenseArray<T, R> {
    fn default() -> Self {
        Self::degenerate()
    }
}

/// Unchecked access: coordinates are not validated per axis.
impl<T, const R: usize> Index<[usize; R]> for DenseArray<T, R> {
    type Output = T;

    fn index(&self, coords: [usize; R]) -> &T {
        &self.data[self.offset(&coords)]
    }
}

impl<T, const R: usize> IndexMut<[usize; R]> for DenseArray<T, R> {
    fn index_mut(&mut self, coords: [usize; R]) -> &mut T {
        let offset = self.offset(&coords);
        &mut self.data[offset]
    }
}

impl<'a, T, const R: usize> IntoIterator for &'a DenseArray<T, R> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
