// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Parser for the single-level rank-2 layout: one row per line, no headers.

use super::lines::LineReader;
use crate::{CodecError, FormatError};
use dense_core::{DenseArray, Element};
use std::io::BufRead;
use std::str::FromStr;

/// Parses a whole rank-2 file into a `[ncols, nrows]` array.
///
/// Unlike the rank-4 layout, empty input is an error.
pub(crate) fn parse<T, R>(lines: &mut LineReader<R>) -> Result<DenseArray<T, 2>, CodecError>
where
    T: Element + FromStr,
    R: BufRead,
{
    if !lines.fill()? {
        return Err(lines.error_at(1, FormatError::EmptyFile));
    }

    let mut data: Vec<T> = Vec::new();
    let ncols = lines.row(&mut data)?;
    let mut nrows = 1;
    while lines.fill()? {
        let n = lines.row(&mut data)?;
        if n != ncols {
            return Err(lines.error(FormatError::ColumnCount {
                expected: ncols,
                actual: n,
            }));
        }
        nrows += 1;
    }

    DenseArray::from_vec([ncols, nrows], data).map_err(|source| CodecError::Array {
        origin: lines.origin().to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextFormat;
    use std::path::Path;

    fn parse_str<T: Element + FromStr>(text: &str) -> Result<DenseArray<T, 2>, CodecError> {
        let format = TextFormat::default();
        let mut lines = LineReader::new(text.as_bytes(), Path::new("<test>"), format);
        parse(&mut lines)
    }

    #[test]
    fn test_rows() {
        let a = parse_str::<i64>("1 2 3\n4 5 6\n").unwrap();
        assert_eq!(a.dims(), &[3, 2]);
        assert_eq!(a.get([2, 1]).unwrap(), 6);
    }

    #[test]
    fn test_single_value_no_terminator() {
        let a = parse_str::<f32>("2.5").unwrap();
        assert_eq!(a.dims(), &[1, 1]);
        assert_eq!(a.as_slice(), &[2.5]);
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            parse_str::<f64>(""),
            Err(CodecError::Format {
                line: 1,
                kind: FormatError::EmptyFile,
                ..
            })
        ));
    }

    #[test]
    fn test_terminator_only() {
        assert!(matches!(
            parse_str::<f64>("\n"),
            Err(CodecError::Format {
                line: 1,
                kind: FormatError::BlankLine,
                ..
            })
        ));
    }

    #[test]
    fn test_column_count() {
        assert!(matches!(
            parse_str::<u32>("1 2\n3 4 5\n"),
            Err(CodecError::Format {
                line: 2,
                kind: FormatError::ColumnCount {
                    expected: 2,
                    actual: 3
                },
                ..
            })
        ));
    }

    #[test]
    fn test_headers_are_not_values() {
        let err = parse_str::<i32>(",,,0\n1 2\n").unwrap_err();
        assert!(matches!(
            err.format_error(),
            Some(FormatError::BadValue { .. })
        ));
    }
}
