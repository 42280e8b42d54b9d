// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fixed-rank shape descriptors and stride computation.

use crate::ArrayError;
use std::fmt;

/// Describes the extents of a rank-`R` [`crate::DenseArray`].
///
/// A shape is either fully populated (every extent non-zero) or degenerate
/// (every extent zero). Mixed shapes cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape<const R: usize> {
    dims: [usize; R],
}

impl<const R: usize> Shape<R> {
    /// Creates a new shape from the given extents.
    ///
    /// # Examples
    /// ```
    /// use dense_core::Shape;
    /// let s = Shape::new([3, 2, 2, 1]).unwrap();
    /// assert_eq!(s.rank(), 4);
    /// assert_eq!(s.num_elements(), 12);
    /// ```
    ///
    /// # Errors
    /// - [`ArrayError::InvalidShape`] if some, but not all, extents are 0.
    /// - [`ArrayError::ShapeOverflow`] if the element count does not fit in
    ///   `usize`.
    pub fn new(dims: [usize; R]) -> Result<Self, ArrayError> {
        let zeros = dims.iter().filter(|&&d| d == 0).count();
        if zeros != 0 && zeros != R {
            return Err(ArrayError::InvalidShape {
                dims: dims.to_vec(),
            });
        }
        if dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d)).is_none() {
            return Err(ArrayError::ShapeOverflow {
                dims: dims.to_vec(),
            });
        }
        Ok(Self { dims })
    }

    /// Creates the degenerate shape (every extent 0).
    pub fn degenerate() -> Self {
        Self { dims: [0; R] }
    }

    /// Returns the number of axes.
    pub fn rank(&self) -> usize {
        R
    }

    /// Returns the total number of elements (0 for a degenerate shape).
    pub fn num_elements(&self) -> usize {
        if self.is_degenerate() {
            0
        } else {
            self.dims.iter().product()
        }
    }

    /// Returns `true` if every extent is 0.
    pub fn is_degenerate(&self) -> bool {
        self.dims.iter().all(|&d| d == 0)
    }

    /// Returns the extents.
    pub fn dims(&self) -> &[usize; R] {
        &self.dims
    }

    /// Returns the extent of a specific axis, or `None` if out of bounds.
    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.dims.get(axis).copied()
    }

    /// Returns the shape with its axes in reverse order.
    pub fn reversed(&self) -> Self {
        let mut dims = self.dims;
        dims.reverse();
        Self { dims }
    }

    /// Computes first-axis-fastest strides for this shape.
    ///
    /// Axis 0 is the position inside a text row, so the flat buffer follows
    /// file order: `stride[0] = 1`, `stride[k] = stride[k - 1] * dims[k - 1]`.
    pub fn strides(&self) -> [usize; R] {
        let mut strides = [0usize; R];
        let mut acc = 1usize;
        for (stride, &dim) in strides.iter_mut().zip(self.dims.iter()) {
            *stride = acc;
            acc *= dim;
        }
        strides
    }

    /// Checks every coordinate against its axis extent.
    ///
    /// # Errors
    /// Returns [`ArrayError::OutOfRange`] for the first offending axis.
    pub fn check(&self, coords: &[usize; R]) -> Result<(), ArrayError> {
        for (axis, (&index, &extent)) in coords.iter().zip(self.dims.iter()).enumerate() {
            if index >= extent {
                return Err(ArrayError::OutOfRange {
                    axis,
                    index,
                    extent,
                });
            }
        }
        Ok(())
    }
}

impl<const R: usize> Default for Shape<R> {
    fn default() -> Self {
        Self::degenerate()
    }
}

impl<const R: usize> fmt::Display for Shape<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

impl<const R: usize> TryFrom<[usize; R]> for Shape<R> {
    type Error = ArrayError;

    fn try_from(dims: [usize; R]) -> Result<Self, Self::Error> {
        Self::new(dims)
    }
}
