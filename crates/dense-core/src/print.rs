// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Row formatting shared by the rank-2 and rank-4 text layouts.

use std::fmt::{self, Write as _};
use std::io;

/// Default number of fractional digits.
pub const DEFAULT_PRECISION: usize = 4;

/// Default column width in characters.
pub const DEFAULT_WIDTH: usize = 8;

/// Default value separator.
pub const DEFAULT_SEPARATOR: char = ' ';

#[derive(Debug, Clone, Copy)]
pub(crate) struct RowFormat {
    pub precision: usize,
    pub width: usize,
    pub sep: char,
}

impl Default for RowFormat {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            width: DEFAULT_WIDTH,
            sep: DEFAULT_SEPARATOR,
        }
    }
}

/// Emits lines separated by `\n`, with no terminator after the last one.
pub(crate) struct Lines<'a, F> {
    out: &'a mut F,
    started: bool,
}

impl<'a, F: fmt::Write> Lines<'a, F> {
    pub fn new(out: &'a mut F) -> Self {
        Self {
            out,
            started: false,
        }
    }

    /// Starts a new line and returns the writer positioned on it.
    pub fn next(&mut self) -> Result<&mut F, fmt::Error> {
        if self.started {
            self.out.write_char('\n')?;
        }
        self.started = true;
        Ok(self.out)
    }

    /// Writes one row of values: each value left-aligned in `width`
    /// characters, joined by `sep`. The last value is neither padded nor
    /// followed by a separator.
    pub fn row<T: fmt::Display>(&mut self, row: &[T], format: RowFormat) -> fmt::Result {
        let out = self.next()?;
        let RowFormat {
            precision,
            width,
            sep,
        } = format;
        if let Some((last, init)) = row.split_last() {
            for value in init {
                write!(out, "{value:<width$.precision$}{sep}")?;
            }
            write!(out, "{last:.precision$}")?;
        }
        Ok(())
    }
}

/// Adapts an [`io::Write`] so formatting code can target it, keeping the
/// underlying I/O error instead of the opaque [`fmt::Error`].
pub(crate) fn write_io<W, F>(out: &mut W, body: F) -> io::Result<()>
where
    W: io::Write,
    F: FnOnce(&mut IoAdapter<'_, W>) -> fmt::Result,
{
    let mut adapter = IoAdapter {
        inner: out,
        error: None,
    };
    match body(&mut adapter) {
        Ok(()) => Ok(()),
        Err(fmt::Error) => Err(adapter
            .error
            .unwrap_or_else(|| io::Error::other("formatter error"))),
    }
}

pub(crate) struct IoAdapter<'a, W> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    #[test]
    fn test_row_padding_and_separator() {
        let mut s = String::new();
        let mut lines = Lines::new(&mut s);
        lines
            .row(&[1.0f64, 2.5, 3.0], RowFormat::default())
            .unwrap();
        assert_eq!(s, "1.0000   2.5000   3.0000");
    }

    #[test]
    fn test_integers_ignore_precision() {
        let mut s = String::new();
        let format = RowFormat {
            precision: 3,
            width: 4,
            sep: ',',
        };
        let mut lines = Lines::new(&mut s);
        lines.row(&[10, -2, 7], format).unwrap();
        lines.row(&[1, 2, 3], format).unwrap();
        assert_eq!(s, "10  ,-2  ,7\n1   ,2   ,3");
    }

    #[test]
    fn test_write_io() {
        let mut buf = Vec::new();
        write_io(&mut buf, |out| {
            let mut lines = Lines::new(out);
            write!(lines.next()?, ",,,0")?;
            lines.row(&[1u8, 2], RowFormat::default())
        })
        .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), ",,,0\n1        2");
    }
}
