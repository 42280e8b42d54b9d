// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Text codec for rank-4 and rank-2 arrays.
//!
//! Writing goes through the `print` methods of [`Matrix4`] and [`Matrix2`];
//! reading parses the same layouts back. Reads build a fresh value and only
//! hand it over once the whole input has been accepted, so a failed
//! [`TextCodec::load_matrix4_into`] leaves its target untouched.

mod lines;
mod rank2;
mod rank4;

use crate::files::{self, READER_ORIGIN, WRITER_ORIGIN};
use crate::{CodecError, TextFormat};
use dense_core::{Element, Matrix2, Matrix4};
use lines::LineReader;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

/// Reads and writes arrays in the text layouts.
///
/// # Example
/// ```no_run
/// use dense_codec::{TextCodec, TextFormat};
/// use dense_core::Matrix4;
/// use std::path::Path;
///
/// let codec = TextCodec::new(TextFormat::default()).unwrap();
/// let m: Matrix4<f64> = codec.read_matrix4(Path::new("weights.txt")).unwrap();
/// println!("dims {:?}", m.dims());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCodec {
    format: TextFormat,
}

impl TextCodec {
    /// Creates a codec, validating the format first.
    pub fn new(format: TextFormat) -> Result<Self, CodecError> {
        format.validate()?;
        Ok(Self { format })
    }

    /// Returns the format used for reading and writing.
    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    // ── Rank 4 ─────────────────────────────────────────────────

    /// Reads a rank-4 file. An empty file yields the degenerate matrix.
    pub fn read_matrix4<T>(&self, path: &Path) -> Result<Matrix4<T>, CodecError>
    where
        T: Element + FromStr,
    {
        let reader = files::open(path)?;
        self.parse_matrix4(reader, path)
    }

    /// Reads a rank-4 array from any buffered reader.
    pub fn read_matrix4_from<T, R>(&self, reader: R) -> Result<Matrix4<T>, CodecError>
    where
        T: Element + FromStr,
        R: BufRead,
    {
        self.parse_matrix4(reader, Path::new(READER_ORIGIN))
    }

    /// Replaces `target` with the contents of a rank-4 file.
    ///
    /// On error `target` is left unchanged.
    pub fn load_matrix4_into<T>(
        &self,
        target: &mut Matrix4<T>,
        path: &Path,
    ) -> Result<(), CodecError>
    where
        T: Element + FromStr,
    {
        *target = self.read_matrix4(path)?;
        Ok(())
    }

    /// Writes a rank-4 matrix to a file, creating or truncating it.
    pub fn write_matrix4<T>(&self, matrix: &Matrix4<T>, path: &Path) -> Result<(), CodecError>
    where
        T: Element + Display,
    {
        let mut writer = files::create(path)?;
        self.print_matrix4(matrix, &mut writer, path)?;
        files::finish(writer, path)?;
        tracing::info!(
            "text codec: wrote {} ({:?}, {})",
            path.display(),
            matrix.dims(),
            T::DTYPE,
        );
        Ok(())
    }

    /// Writes a rank-4 matrix to any writer.
    pub fn write_matrix4_to<T, W>(
        &self,
        matrix: &Matrix4<T>,
        writer: &mut W,
    ) -> Result<(), CodecError>
    where
        T: Element + Display,
        W: Write,
    {
        self.print_matrix4(matrix, writer, Path::new(WRITER_ORIGIN))
    }

    // ── Rank 2 ─────────────────────────────────────────────────

    /// Reads a rank-2 file. Unlike rank 4, an empty file is an error.
    pub fn read_matrix2<T>(&self, path: &Path) -> Result<Matrix2<T>, CodecError>
    where
        T: Element + FromStr,
    {
        let reader = files::open(path)?;
        self.parse_matrix2(reader, path)
    }

    /// Reads a rank-2 matrix from any buffered reader.
    pub fn read_matrix2_from<T, R>(&self, reader: R) -> Result<Matrix2<T>, CodecError>
    where
        T: Element + FromStr,
        R: BufRead,
    {
        self.parse_matrix2(reader, Path::new(READER_ORIGIN))
    }

    /// Replaces `target` with the contents of a rank-2 file.
    ///
    /// On error `target` is left unchanged.
    pub fn load_matrix2_into<T>(
        &self,
        target: &mut Matrix2<T>,
        path: &Path,
    ) -> Result<(), CodecError>
    where
        T: Element + FromStr,
    {
        *target = self.read_matrix2(path)?;
        Ok(())
    }

    /// Writes a rank-2 matrix to a file, creating or truncating it.
    pub fn write_matrix2<T>(&self, matrix: &Matrix2<T>, path: &Path) -> Result<(), CodecError>
    where
        T: Element + Display,
    {
        let mut writer = files::create(path)?;
        self.print_matrix2(matrix, &mut writer, path)?;
        files::finish(writer, path)?;
        tracing::info!(
            "text codec: wrote {} ({}x{}, {})",
            path.display(),
            matrix.nrows(),
            matrix.ncols(),
            T::DTYPE,
        );
        Ok(())
    }

    /// Writes a rank-2 matrix to any writer.
    pub fn write_matrix2_to<T, W>(
        &self,
        matrix: &Matrix2<T>,
        writer: &mut W,
    ) -> Result<(), CodecError>
    where
        T: Element + Display,
        W: Write,
    {
        self.print_matrix2(matrix, writer, Path::new(WRITER_ORIGIN))
    }

    // ── Private helpers ────────────────────────────────────────

    fn parse_matrix4<T, R>(&self, reader: R, origin: &Path) -> Result<Matrix4<T>, CodecError>
    where
        T: Element + FromStr,
        R: BufRead,
    {
        let mut lines = LineReader::new(reader, origin, self.format);
        let array = rank4::parse(&mut lines)?;
        tracing::info!(
            "text codec: loaded {} ({:?}, {}, {} lines)",
            origin.display(),
            array.dims(),
            T::DTYPE,
            lines.line(),
        );
        Ok(Matrix4::from_array(array))
    }

    fn parse_matrix2<T, R>(&self, reader: R, origin: &Path) -> Result<Matrix2<T>, CodecError>
    where
        T: Element + FromStr,
        R: BufRead,
    {
        let mut lines = LineReader::new(reader, origin, self.format);
        let array = rank2::parse(&mut lines)?;
        tracing::info!(
            "text codec: loaded {} ({:?}, {})",
            origin.display(),
            array.dims(),
            T::DTYPE,
        );
        Ok(Matrix2::from_array(array))
    }

    fn print_matrix4<T, W>(
        &self,
        matrix: &Matrix4<T>,
        writer: &mut W,
        origin: &Path,
    ) -> Result<(), CodecError>
    where
        T: Element + Display,
        W: Write,
    {
        let TextFormat {
            precision,
            width,
            separator,
        } = self.format;
        matrix
            .print(writer, precision, width, separator)
            .map_err(|source| files::io_error(origin, source))
    }

    fn print_matrix2<T, W>(
        &self,
        matrix: &Matrix2<T>,
        writer: &mut W,
        origin: &Path,
    ) -> Result<(), CodecError>
    where
        T: Element + Display,
        W: Write,
    {
        let TextFormat {
            precision,
            width,
            separator,
        } = self.format;
        matrix
            .print(writer, precision, width, separator)
            .map_err(|source| files::io_error(origin, source))
    }
}
