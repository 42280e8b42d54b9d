// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for array construction, access, and arithmetic.

/// Errors that can occur when building or accessing a dense array.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// A coordinate is at or past the extent of its axis.
    #[error("index {index} out of range for axis {axis} (extent {extent})")]
    OutOfRange {
        axis: usize,
        index: usize,
        extent: usize,
    },

    /// Some axes have a zero extent while others do not.
    #[error("invalid dimensions {dims:?}: either every extent is 0 or none is")]
    InvalidShape { dims: Vec<usize> },

    /// The product of the extents does not fit in `usize`.
    #[error("invalid dimensions {dims:?}: element count overflows usize")]
    ShapeOverflow { dims: Vec<usize> },

    /// The flat buffer length does not match the product of the extents.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A scalar division was requested with a zero divisor.
    #[error("division by zero in {op}")]
    DivisionByZero { op: &'static str },

    /// A scalar operation produced a value the element type cannot hold.
    #[error("arithmetic overflow in {op}")]
    Overflow { op: &'static str },
}

/// The error classes shared by every fallible operation in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A file could not be opened, read or written.
    Io,
    /// Input bytes do not follow the expected layout.
    Format,
    /// A coordinate is outside the array.
    Range,
    /// An arithmetic operation was rejected (division by zero, overflow).
    Arithmetic,
    /// A well-formed input holds the wrong kind of array (rank mismatch).
    InvalidArgument,
    /// A configuration value is invalid.
    Config,
}

impl ArrayError {
    /// Returns the error class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::OutOfRange { .. } => ErrorKind::Range,
            ArrayError::DivisionByZero { .. } | ArrayError::Overflow { .. } => {
                ErrorKind::Arithmetic
            }
            ArrayError::InvalidShape { .. }
            | ArrayError::ShapeOverflow { .. }
            | ArrayError::BufferSizeMismatch { .. } => ErrorKind::InvalidArgument,
        }
    }
}
