// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Rank-4 arrays with table-driven element access.

use crate::print::{self, Lines, RowFormat};
use crate::{ArrayError, DenseArray, OffsetTable, Shape};
use std::fmt;
use std::io;
use std::ops::{Index, IndexMut};

/// A rank-4 array whose unchecked access goes through an [`OffsetTable`].
///
/// Axes follow the text layout: axis 0 is the position inside a row,
/// axis 1 the row, axis 2 the layer (`,,j` block) and axis 3 the slice
/// (`,,,k` block).
///
/// The offset tables are derived from the shape in exactly one place,
/// [`Matrix4::from_array`], and never change afterwards.
#[derive(Debug, Clone)]
pub struct Matrix4<T> {
    array: DenseArray<T, 4>,
    offsets: OffsetTable,
}

impl<T> Matrix4<T> {
    /// Creates a matrix with every element set to `fill`.
    ///
    /// # Errors
    /// Returns [`ArrayError::InvalidShape`] if some, but not all, extents are 0.
    pub fn new(dims: [usize; 4], fill: T) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        DenseArray::new(dims, fill).map(Self::from_array)
    }

    /// Creates a matrix filled with `T::default()`.
    pub fn zeros(dims: [usize; 4]) -> Result<Self, ArrayError>
    where
        T: Clone + Default,
    {
        DenseArray::zeros(dims).map(Self::from_array)
    }

    /// Creates a matrix from a flat buffer in storage order.
    pub fn from_vec(dims: [usize; 4], data: Vec<T>) -> Result<Self, ArrayError> {
        DenseArray::from_vec(dims, data).map(Self::from_array)
    }

    /// Creates the degenerate `0x0x0x0` matrix.
    pub fn degenerate() -> Self {
        Self::from_array(DenseArray::degenerate())
    }

    /// Wraps an array, building its offset tables.
    pub fn from_array(array: DenseArray<T, 4>) -> Self {
        let offsets = OffsetTable::new(array.shape());
        Self { array, offsets }
    }

    /// Returns the underlying array.
    pub fn as_array(&self) -> &DenseArray<T, 4> {
        &self.array
    }

    /// Consumes the matrix, returning the underlying array.
    pub fn into_array(self) -> DenseArray<T, 4> {
        self.array
    }

    /// Returns the offset tables.
    pub fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    /// Returns the shape.
    pub fn shape(&self) -> &Shape<4> {
        self.array.shape()
    }

    /// Returns the per-axis extents.
    pub fn dims(&self) -> &[usize; 4] {
        self.array.dims()
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Returns `true` if the matrix stores no elements.
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Returns `true` if every extent is 0.
    pub fn is_degenerate(&self) -> bool {
        self.array.is_degenerate()
    }

    /// Returns the flat buffer in storage order.
    pub fn as_slice(&self) -> &[T] {
        self.array.as_slice()
    }

    /// Converts valid coordinates to a flat offset through the tables.
    #[inline]
    pub fn offset(&self, coords: [usize; 4]) -> usize {
        let [c0, c1, c2, c3] = coords;
        self.offsets.offset(c1, c0, c2, c3)
    }

    /// Returns the element at `coords`.
    ///
    /// # Errors
    /// Returns [`ArrayError::OutOfRange`] if any coordinate is out of range.
    pub fn get(&self, coords: [usize; 4]) -> Result<T, ArrayError>
    where
        T: Copy,
    {
        self.array.get(coords)
    }

    /// Overwrites the element at `coords`.
    ///
    /// # Errors
    /// Returns [`ArrayError::OutOfRange`] if any coordinate is out of range.
    pub fn set(&mut self, coords: [usize; 4], value: T) -> Result<(), ArrayError> {
        self.array.set(coords, value)
    }

    pub(crate) fn array_mut(&mut self) -> &mut DenseArray<T, 4> {
        &mut self.array
    }

    /// Writes the matrix in the rank-4 text layout.
    ///
    /// A `,,,k` line opens each slice and a `,,j` line each layer, followed
    /// by the layer's rows. Values are left-aligned in `width` characters
    /// with `precision` fractional digits and joined by `sep`. Nothing is
    /// written for a degenerate matrix, and the last row has no terminator.
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
        if self.is_degenerate() {
            return Ok(());
        }
        let [d0, d1, d2, _] = *self.dims();
        let mut lines = Lines::new(out);
        for (k, slice) in self.as_slice().chunks_exact(d0 * d1 * d2).enumerate() {
            write!(lines.next()?, ",,,{k}")?;
            for (j, layer) in slice.chunks_exact(d0 * d1).enumerate() {
                write!(lines.next()?, ",,{j}")?;
                for row in layer.chunks_exact(d0) {
                    lines.row(row, format)?;
                }
            }
        }
        Ok(())
    }
}

impl<T> Default for Matrix4<T> {
    fn default() -> Self {
        Self::degenerate()
    }
}

impl<T: PartialEq> PartialEq for Matrix4<T> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T> From<DenseArray<T, 4>> for Matrix4<T> {
    fn from(array: DenseArray<T, 4>) -> Self {
        Self::from_array(array)
    }
}

/// Unchecked access through the offset tables.
impl<T> Index<[usize; 4]> for Matrix4<T> {
    type Output = T;

    fn index(&self, coords: [usize; 4]) -> &T {
        &self.array.as_slice()[self.offset(coords)]
    }
}

impl<T> IndexMut<[usize; 4]> for Matrix4<T> {
    fn index_mut(&mut self, coords: [usize; 4]) -> &mut T {
        let offset = self.offset(coords);
        &mut self.array.as_mut_slice()[offset]
    }
}

/// Renders the text layout with the default precision, width and separator.
impl<T: fmt::Display> fmt::Display for Matrix4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, RowFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Matrix4<i32> {
        Matrix4::from_vec([3, 2, 2, 1], (1..=12).collect()).unwrap()
    }

    #[test]
    fn test_table_access_matches_checked_access() {
        let m: Matrix4<i32> = Matrix4::from_vec([2, 3, 4, 2], (0..48).collect()).unwrap();
        for d in 0..2 {
            for c in 0..4 {
                for b in 0..3 {
                    for a in 0..2 {
                        let coords = [a, b, c, d];
                        assert_eq!(m[coords], m.get(coords).unwrap());
                        assert_eq!(m.offset(coords), m.as_array().offset(&coords));
                    }
                }
            }
        }
    }

    #[test]
    fn test_scenario_values() {
        let m = scenario();
        assert_eq!(m.get([0, 0, 0, 0]).unwrap(), 1);
        assert_eq!(m.get([2, 1, 1, 0]).unwrap(), 12);
        assert_eq!(m[[1, 1, 0, 0]], 5);
    }

    #[test]
    fn test_offsets_follow_dims() {
        let m = Matrix4::new([3, 2, 5, 4], 0u8).unwrap();
        assert_eq!(m.offsets().lens(), [2, 3, 5, 4]);
        let d = Matrix4::<u8>::degenerate();
        assert_eq!(d.offsets().lens(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_index_mut() {
        let mut m = scenario();
        m[[2, 0, 1, 0]] = -9;
        assert_eq!(m.get([2, 0, 1, 0]).unwrap(), -9);
        assert_eq!(m.as_slice()[8], -9);
    }

    #[test]
    fn test_out_of_range() {
        let mut m = scenario();
        assert!(matches!(
            m.get([0, 0, 0, 1]),
            Err(ArrayError::OutOfRange { axis: 3, .. })
        ));
        assert!(matches!(
            m.set([3, 0, 0, 0], 0),
            Err(ArrayError::OutOfRange { axis: 0, .. })
        ));
    }

    #[test]
    fn test_print_layout() {
        let mut out = Vec::new();
        scenario().print(&mut out, 4, 3, ' ').unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            ",,,0\n,,0\n1   2   3\n4   5   6\n,,1\n7   8   9\n10  11  12"
        );
    }

    #[test]
    fn test_print_degenerate_is_empty() {
        let mut out = Vec::new();
        Matrix4::<f64>::degenerate()
            .print(&mut out, 4, 8, ' ')
            .unwrap();
        assert!(out.is_empty());
        assert_eq!(Matrix4::<f64>::degenerate().to_string(), "");
    }

    #[test]
    fn test_display_uses_defaults() {
        let m = Matrix4::new([2, 1, 1, 2], 0.5f32).unwrap();
        assert_eq!(
            m.to_string(),
            ",,,0\n,,0\n0.5000   0.5000\n,,,1\n,,0\n0.5000   0.5000"
        );
    }

    #[test]
    fn test_equality_compares_contents() {
        let a = scenario();
        let b = Matrix4::from_array(a.as_array().clone());
        assert_eq!(a, b);
        let mut c = a.clone();
        c.set([0, 0, 0, 0], 0).unwrap();
        assert_ne!(a, c);
    }
}
