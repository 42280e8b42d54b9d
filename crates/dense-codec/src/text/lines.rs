// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Line-at-a-time tokenizer shared by the text grammars.

use crate::{CodecError, FormatError, TextFormat};
use dense_core::Element;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// What a non-blank line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    /// `,,,N`
    Slice(usize),
    /// `,,N`
    Layer(usize),
    /// A data row; the payload is the number of values appended.
    Row(usize),
}

pub(crate) struct LineReader<R> {
    reader: R,
    origin: PathBuf,
    format: TextFormat,
    buf: String,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, origin: &Path, format: TextFormat) -> Self {
        Self {
            reader,
            origin: origin.to_path_buf(),
            format,
            buf: String::new(),
            line: 0,
        }
    }

    /// Reads the next line without its terminator. Returns `false` at end
    /// of input.
    pub fn fill(&mut self) -> Result<bool, CodecError> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                self.error_at(self.line + 1, FormatError::InvalidUtf8)
            } else {
                CodecError::Io {
                    origin: self.origin.clone(),
                    source: e,
                }
            }
        })?;
        if n == 0 {
            return Ok(false);
        }
        self.line += 1;
        if self.buf.ends_with('\n') {
            self.buf.pop();
            if self.buf.ends_with('\r') {
                self.buf.pop();
            }
        }
        Ok(true)
    }

    /// The current line's text.
    pub fn text(&self) -> &str {
        &self.buf
    }

    /// 1-based number of the current line (0 before the first `fill`).
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn is_blank(&self) -> bool {
        self.buf.trim().is_empty()
    }

    /// Builds a format error located at the current line.
    pub fn error(&self, kind: FormatError) -> CodecError {
        self.error_at(self.line, kind)
    }

    pub fn error_at(&self, line: usize, kind: FormatError) -> CodecError {
        CodecError::Format {
            origin: self.origin.clone(),
            line,
            kind,
        }
    }

    /// Classifies the current line as a header or a data row. Row values are
    /// appended to `out`.
    pub fn classify<T>(&self, out: &mut Vec<T>) -> Result<Line, CodecError>
    where
        T: Element + FromStr,
    {
        if self.is_blank() {
            return Err(self.error(FormatError::BlankLine));
        }
        let text = self.buf.as_str();
        if let Some(rest) = text.strip_prefix(",,,") {
            return self.header_index(rest).map(Line::Slice);
        }
        if let Some(rest) = text.strip_prefix(",,") {
            return self.header_index(rest).map(Line::Layer);
        }
        self.row(out).map(Line::Row)
    }

    /// Parses the current line as a data row, appending its values to `out`
    /// and returning how many were appended. A line of separators only
    /// counts as blank.
    pub fn row<T>(&self, out: &mut Vec<T>) -> Result<usize, CodecError>
    where
        T: Element + FromStr,
    {
        if self.is_blank() {
            return Err(self.error(FormatError::BlankLine));
        }
        let start = out.len();
        for token in self
            .buf
            .split(|c| self.format.is_separator(c))
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<T>().map_err(|_| {
                self.error(FormatError::BadValue {
                    token: token.to_string(),
                    dtype: T::DTYPE,
                })
            })?;
            out.push(value);
        }
        if out.len() == start {
            return Err(self.error(FormatError::BlankLine));
        }
        Ok(out.len() - start)
    }

    fn header_index(&self, rest: &str) -> Result<usize, CodecError> {
        let bad = || {
            self.error(FormatError::BadHeader {
                line: self.buf.clone(),
            })
        };
        if rest.contains(',') {
            return Err(bad());
        }
        rest.trim().parse::<usize>().map_err(|_| bad())
    }
}
