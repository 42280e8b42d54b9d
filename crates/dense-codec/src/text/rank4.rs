// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Parser for the nested-header rank-4 layout.
//!
//! ```text
//! file   := ",,,0" slice (",,,k" slice)*
//! slice  := (",,j" row+)+
//! row    := value (sep value)*
//! ```
//!
//! Every slice must have the same `(row_len, col_len, depth)`; the number of
//! slices becomes the 4th extent.

use super::lines::{Line, LineReader};
use crate::{CodecError, FormatError};
use dense_core::{DenseArray, Element};
use std::io::BufRead;
use std::str::FromStr;

/// How a slice was terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SliceEnd {
    /// Another `,,,k` header with index `k`.
    Next(usize),
    Eof,
}

/// Parses a whole rank-4 file into an array.
///
/// Empty input (no bytes, or a single empty line) yields the degenerate array.
pub(crate) fn parse<T, R>(lines: &mut LineReader<R>) -> Result<DenseArray<T, 4>, CodecError>
where
    T: Element + FromStr,
    R: BufRead,
{
    if !lines.fill()? {
        return Ok(empty(lines));
    }
    if lines.text().is_empty() {
        if !lines.fill()? {
            return Ok(empty(lines));
        }
        return Err(lines.error_at(1, FormatError::BlankLine));
    }

    let mut data: Vec<T> = Vec::new();
    match lines.classify(&mut data)? {
        Line::Slice(0) => {}
        Line::Slice(actual) => {
            return Err(lines.error(FormatError::HeaderIndex {
                expected: 0,
                actual,
            }))
        }
        Line::Layer(_) | Line::Row(_) => return Err(lines.error(FormatError::MissingSliceHeader)),
    }

    let mut first: Option<[usize; 3]> = None;
    let mut slices = 0;
    loop {
        let (end, shape) = read_slice(lines, slices, &mut data)?;
        match first {
            None => first = Some(shape),
            Some(expected) if expected != shape => {
                return Err(lines.error(FormatError::SliceShape {
                    slice: slices,
                    expected,
                    actual: shape,
                }));
            }
            Some(_) => {}
        }
        tracing::debug!(
            "text codec: '{}' slice {slices} accepted ({}x{}x{})",
            lines.origin().display(),
            shape[0],
            shape[1],
            shape[2],
        );
        slices += 1;
        match end {
            SliceEnd::Eof => break,
            SliceEnd::Next(actual) if actual != slices => {
                return Err(lines.error(FormatError::HeaderIndex {
                    expected: slices,
                    actual,
                }));
            }
            SliceEnd::Next(_) => {}
        }
    }

    let [row_len, col_len, depth] = first.unwrap_or_default();
    DenseArray::from_vec([row_len, col_len, depth, slices], data).map_err(|source| {
        CodecError::Array {
            origin: lines.origin().to_path_buf(),
            source,
        }
    })
}

fn empty<T, R: BufRead>(lines: &LineReader<R>) -> DenseArray<T, 4> {
    tracing::warn!(
        "text codec: '{}' is empty, loading a degenerate array",
        lines.origin().display(),
    );
    DenseArray::degenerate()
}

/// Reads the body of slice `slice`, appending its values to `data`.
///
/// Returns how the slice ended and its `(row_len, col_len, depth)`.
fn read_slice<T, R>(
    lines: &mut LineReader<R>,
    slice: usize,
    data: &mut Vec<T>,
) -> Result<(SliceEnd, [usize; 3]), CodecError>
where
    T: Element + FromStr,
    R: BufRead,
{
    let mut row_len: Option<usize> = None;
    let mut col_len: Option<usize> = None;
    let mut depth = 0;
    let mut rows = 0;

    let end = loop {
        if !lines.fill()? {
            break SliceEnd::Eof;
        }
        match lines.classify(data)? {
            Line::Slice(index) => break SliceEnd::Next(index),
            Line::Layer(index) => {
                if depth > 0 {
                    close_layer(lines, depth - 1, rows, &mut col_len)?;
                }
                if index != depth {
                    return Err(lines.error(FormatError::HeaderIndex {
                        expected: depth,
                        actual: index,
                    }));
                }
                depth += 1;
                rows = 0;
            }
            Line::Row(n) => {
                if depth == 0 {
                    return Err(lines.error(FormatError::MissingLayerHeader));
                }
                match row_len {
                    None => row_len = Some(n),
                    Some(expected) if expected != n => {
                        return Err(lines.error(FormatError::RowLength {
                            expected,
                            actual: n,
                        }));
                    }
                    Some(_) => {}
                }
                rows += 1;
            }
        }
    };

    if depth == 0 {
        return Err(lines.error(FormatError::EmptySlice { slice }));
    }
    close_layer(lines, depth - 1, rows, &mut col_len)?;
    Ok((
        end,
        [
            row_len.unwrap_or_default(),
            col_len.unwrap_or_default(),
            depth,
        ],
    ))
}

/// Checks the row count of a finished layer against the slice's first layer.
fn close_layer<R: BufRead>(
    lines: &LineReader<R>,
    layer: usize,
    rows: usize,
    col_len: &mut Option<usize>,
) -> Result<(), CodecError> {
    if rows == 0 {
        return Err(lines.error(FormatError::EmptyLayer { layer }));
    }
    match *col_len {
        None => *col_len = Some(rows),
        Some(expected) if expected != rows => {
            return Err(lines.error(FormatError::LayerRows {
                layer,
                expected,
                actual: rows,
            }));
        }
        Some(_) => {}
    }
    Ok(())
}
