// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for reading and writing array files.

use dense_core::{ArrayError, DType, ErrorKind};
use std::path::PathBuf;

/// Why an input does not follow its layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// An empty or whitespace-only line.
    #[error("blank line")]
    BlankLine,

    /// A rank-2 input with no bytes at all.
    #[error("empty input")]
    EmptyFile,

    /// The input does not start with a `,,,N` slice header.
    #[error("expected a ',,,N' slice header")]
    MissingSliceHeader,

    /// A data row appears before the first `,,N` header of a slice.
    #[error("data row before the first ',,N' layer header")]
    MissingLayerHeader,

    /// A header line whose index is not an unsigned integer.
    #[error("malformed header '{line}'")]
    BadHeader { line: String },

    /// A header index out of sequence.
    #[error("header index {actual}, expected {expected}")]
    HeaderIndex { expected: usize, actual: usize },

    /// A `,,,N` header not followed by any layer.
    #[error("slice {slice} has no layers")]
    EmptySlice { slice: usize },

    /// A `,,N` header not followed by any row.
    #[error("layer {layer} has no rows")]
    EmptyLayer { layer: usize },

    /// A row whose value count differs from the first row of its slice.
    #[error("row has {actual} values, expected {expected}")]
    RowLength { expected: usize, actual: usize },

    /// A layer whose row count differs from the first layer of its slice.
    #[error("layer {layer} has {actual} rows, expected {expected}")]
    LayerRows {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    /// A slice whose `(row_len, col_len, depth)` differs from the first slice.
    #[error("slice {slice} has shape {actual:?}, expected {expected:?}")]
    SliceShape {
        slice: usize,
        expected: [usize; 3],
        actual: [usize; 3],
    },

    /// A rank-2 row whose column count differs from the first row.
    #[error("row has {actual} columns, expected {expected}")]
    ColumnCount { expected: usize, actual: usize },

    /// A token that does not parse as the element type.
    #[error("cannot parse '{token}' as {dtype}")]
    BadValue { token: String, dtype: DType },

    /// Text input that is not valid UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    /// Binary input that ends early.
    #[error("input ends inside the {section}")]
    Truncated { section: &'static str },

    /// Binary input with bytes after the last value.
    #[error("unexpected bytes after the last value")]
    TrailingBytes,

    /// Binary extents whose product does not fit in memory addressing.
    #[error("extents overflow the addressable size")]
    ExtentOverflow,
}

/// Errors that can occur when reading or writing arrays.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A file could not be opened or created.
    #[error("cannot open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing failed after the file was opened.
    #[error("I/O error on '{}': {source}", .origin.display())]
    Io {
        origin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A text input breaks the layout at `line` (1-based).
    #[error("format error in '{}' at line {line}: {kind}", .origin.display())]
    Format {
        origin: PathBuf,
        line: usize,
        kind: FormatError,
    },

    /// A binary input breaks the layout.
    #[error("format error in '{}': {kind}", .origin.display())]
    Corrupt { origin: PathBuf, kind: FormatError },

    /// A binary input holds an array of a different rank.
    #[error("'{}' holds a rank-{actual} array, expected rank {expected}", .origin.display())]
    RankMismatch {
        origin: PathBuf,
        expected: usize,
        actual: u64,
    },

    /// The decoded extents or values do not form a valid array.
    #[error("invalid array in '{}': {source}", .origin.display())]
    Array {
        origin: PathBuf,
        #[source]
        source: ArrayError,
    },

    /// A text format setting is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CodecError {
    /// Returns the error class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Open { .. } | CodecError::Io { .. } => ErrorKind::Io,
            CodecError::Format { .. } | CodecError::Corrupt { .. } => ErrorKind::Format,
            CodecError::RankMismatch { .. } => ErrorKind::InvalidArgument,
            CodecError::Array { source, .. } => match source.kind() {
                ErrorKind::InvalidArgument => ErrorKind::Format,
                other => other,
            },
            CodecError::Config(_) => ErrorKind::Config,
        }
    }

    /// Returns the layout violation, if this is a format error.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            CodecError::Format { kind, .. } | CodecError::Corrupt { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let origin = PathBuf::from("a.txt");
        let err = CodecError::Format {
            origin: origin.clone(),
            line: 3,
            kind: FormatError::BlankLine,
        };
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.format_error(), Some(&FormatError::BlankLine));
        assert_eq!(err.to_string(), "format error in 'a.txt' at line 3: blank line");

        let err = CodecError::RankMismatch {
            origin: origin.clone(),
            expected: 4,
            actual: 2,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.format_error().is_none());

        let err = CodecError::Array {
            origin,
            source: ArrayError::InvalidShape {
                dims: vec![1, 0, 1, 1],
            },
        };
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}
