// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Rank-2 matrices addressed by row and column.

use crate::print::{self, Lines, RowFormat};
use crate::{ArrayError, DenseArray};
use std::fmt;
use std::io;
use std::ops::{Index, IndexMut};

/// A row/column matrix over a rank-2 [`DenseArray`].
///
/// The array's axis 0 is the column and axis 1 the row, so each row is
/// contiguous in memory and `dims() == [ncols, nrows]`. Access uses the plain
/// stride model; there are no offset tables at this rank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix2<T> {
    array: DenseArray<T, 2>,
}

impl<T> Matrix2<T> {
    /// Creates an `nrows x ncols` matrix with every element set to `fill`.
    ///
    /// # Examples
    /// ```
    /// use dense_core::Matrix2;
    /// let m = Matrix2::new(2, 3, 0i32).unwrap();
    /// assert_eq!((m.nrows(), m.ncols()), (2, 3));
    /// ```
    ///
    /// # Errors
    /// Returns [`ArrayError::InvalidShape`] if exactly one of the extents is 0.
    pub fn new(nrows: usize, ncols: usize, fill: T) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        DenseArray::new([ncols, nrows], fill).map(Self::from_array)
    }

    /// Creates an `nrows x ncols` matrix filled with `T::default()`.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, ArrayError>
    where
        T: Clone + Default,
    {
        DenseArray::zeros([ncols, nrows]).map(Self::from_array)
    }

    /// Creates a matrix from values in row order.
    ///
    /// # Errors
    /// Returns [`ArrayError::BufferSizeMismatch`] if `data.len() != nrows * ncols`.
    pub fn from_rows(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, ArrayError> {
        DenseArray::from_vec([ncols, nrows], data).map(Self::from_array)
    }

    /// Wraps a rank-2 array laid out as `[ncols, nrows]`.
    pub fn from_array(array: DenseArray<T, 2>) -> Self {
        Self { array }
    }

    /// Returns the underlying array.
    pub fn as_array(&self) -> &DenseArray<T, 2> {
        &self.array
    }

    /// Consumes the matrix, returning the underlying array.
    pub fn into_array(self) -> DenseArray<T, 2> {
        self.array
    }

    /// Returns the number of rows.
    pub fn nrows(&self) -> usize {
        self.array.dims()[1]
    }

    /// Returns the number of columns.
    pub fn ncols(&self) -> usize {
        self.array.dims()[0]
    }

    /// Returns the values in row order.
    pub fn as_slice(&self) -> &[T] {
        self.array.as_slice()
    }

    /// Returns `true` if both extents are 0.
    pub fn is_degenerate(&self) -> bool {
        self.array.is_degenerate()
    }

    /// Returns the element at (`row`, `col`).
    ///
    /// # Errors
    /// Returns [`ArrayError::OutOfRange`] with `axis` 1 for a bad row and
    /// `axis` 0 for a bad column.
    pub fn get(&self, row: usize, col: usize) -> Result<T, ArrayError>
    where
        T: Copy,
    {
        self.array.get([col, row])
    }

    /// Overwrites the element at (`row`, `col`).
    ///
    /// # Errors
    /// Returns [`ArrayError::OutOfRange`] if either index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), ArrayError> {
        self.array.set([col, row], value)
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        // A degenerate matrix has no rows; chunk size 0 would panic.
        self.array.as_slice().chunks_exact(self.ncols().max(1))
    }

    /// Writes one line per row, values left-aligned in `width` characters
    /// with `precision` fractional digits and joined by `sep`.
    pub fn print<W: io::Write>(
        &self,
        out: &mut W,
        precision: usize,
        width: usize,
        sep: char,
    ) -> io::Result<()>
    where
        T: fmt::Display,
    {
        let format = RowFormat {
            precision,
            width,
            sep,
        };
        print::write_io(out, |out| self.write_text(out, format))
    }

    fn write_text<F: fmt::Write>(&self, out: &mut F, format: RowFormat) -> fmt::Result
    where
        T: fmt::Display,
    {
        let mut lines = Lines::new(out);
        for row in self.rows() {
            lines.row(row, format)?;
        }
        Ok(())
    }
}

impl<T> From<DenseArray<T, 2>> for Matrix2<T> {
    fn from(array: DenseArray<T, 2>) -> Self {
        Self::from_array(array)
    }
}

/// Unchecked (`row`, `col`) access.
impl<T> Index<(usize, usize)> for Matrix2<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.array[[col, row]]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix2<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.array[[col, row]]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, RowFormat::default())
    }
}

/// Returns a new matrix with rows and columns swapped.
///
/// # Examples
/// ```
/// use dense_core::{transpose, Matrix2};
/// let m = Matrix2::from_rows(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let t = transpose(&m);
/// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
/// ```
pub fn transpose<T: Copy>(m: &Matrix2<T>) -> Matrix2<T> {
    let Some(&first) = m.as_slice().first() else {
        return Matrix2::from_array(DenseArray::degenerate());
    };
    let shape = m.as_array().shape().reversed();
    let mut t = Matrix2::from_array(DenseArray::from_shape(shape, first));
    for row in 0..m.nrows() {
        for col in 0..m.ncols() {
            t[(col, row)] = m[(row, col)];
        }
    }
    t
}
