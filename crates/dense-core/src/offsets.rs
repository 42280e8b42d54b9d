// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Precomputed per-axis offset tables for rank-4 access.
//!
//! Each table holds `i * stride` for every valid index `i` along one axis,
//! so an offset is four lookups and three additions. The first two tables
//! are cross-wired relative to their names:
//!
//! | table  | sized by  | stride used |
//! |--------|-----------|-------------|
//! | `dim1` | `dims[1]` | `stride[1]` |
//! | `dim2` | `dims[0]` | `stride[0]` |
//! | `dim3` | `dims[2]` | `stride[2]` |
//! | `dim4` | `dims[3]` | `stride[3]` |
//!
//! [`crate::Matrix4`] therefore passes coordinates `[c0, c1, c2, c3]` as
//! `offset(c1, c0, c2, c3)`.

use crate::Shape;

/// Offset lookup tables derived from a rank-4 shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OffsetTable {
    dim1: Vec<usize>,
    dim2: Vec<usize>,
    dim3: Vec<usize>,
    dim4: Vec<usize>,
}

impl OffsetTable {
    /// Builds the four tables for `shape`. Runs in `O(Σ dims)`.
    pub fn new(shape: &Shape<4>) -> Self {
        let dims = shape.dims();
        let strides = shape.strides();
        Self {
            dim1: axis_table(dims[1], strides[1]),
            dim2: axis_table(dims[0], strides[0]),
            dim3: axis_table(dims[2], strides[2]),
            dim4: axis_table(dims[3], strides[3]),
        }
    }

    /// Returns the flat offset for valid indices into each table.
    ///
    /// # Panics
    /// Panics if an index is past the length of its table.
    #[inline]
    pub fn offset(&self, dim1: usize, dim2: usize, dim3: usize, dim4: usize) -> usize {
        self.dim1[dim1] + self.dim2[dim2] + self.dim3[dim3] + self.dim4[dim4]
    }

    /// Returns the table lengths in `(dim1, dim2, dim3, dim4)` order.
    pub fn lens(&self) -> [usize; 4] {
        [
            self.dim1.len(),
            self.dim2.len(),
            self.dim3.len(),
            self.dim4.len(),
        ]
    }
}

fn axis_table(extent: usize, stride: usize) -> Vec<usize> {
    (0..extent).map(|i| i * stride).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stride_sum(shape: &Shape<4>, c: [usize; 4]) -> usize {
        c.iter().zip(shape.strides().iter()).map(|(a, b)| a * b).sum()
    }

    #[test]
    fn test_table_lengths_follow_dims() {
        let shape = Shape::new([3, 2, 5, 7]).unwrap();
        let table = OffsetTable::new(&shape);
        assert_eq!(table.lens(), [2, 3, 5, 7]);
    }

    #[test]
    fn test_degenerate_tables_are_empty() {
        let table = OffsetTable::new(&Shape::degenerate());
        assert_eq!(table.lens(), [0, 0, 0, 0]);
        assert_eq!(table, OffsetTable::default());
    }

    #[test]
    fn test_offset_equals_stride_sum() {
        for dims in [[1, 1, 1, 1], [3, 2, 2, 1], [2, 3, 4, 5], [5, 1, 3, 2], [4, 4, 1, 3]] {
            let shape = Shape::new(dims).unwrap();
            let table = OffsetTable::new(&shape);
            for d in 0..dims[3] {
                for c in 0..dims[2] {
                    for b in 0..dims[1] {
                        for a in 0..dims[0] {
                            assert_eq!(
                                table.offset(b, a, c, d),
                                stride_sum(&shape, [a, b, c, d]),
                                "dims {dims:?} coords {:?}",
                                [a, b, c, d]
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_offsets_cover_buffer_once() {
        let shape = Shape::new([2, 3, 2, 2]).unwrap();
        let table = OffsetTable::new(&shape);
        let mut seen = vec![false; shape.num_elements()];
        for d in 0..2 {
            for c in 0..2 {
                for b in 0..3 {
                    for a in 0..2 {
                        let off = table.offset(b, a, c, d);
                        assert!(!seen[off]);
                        seen[off] = true;
                    }
                }
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }
}
