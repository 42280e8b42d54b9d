// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fixed binary layout for arrays of any rank.
//!
//! ```text
//! [u64 rank][u64 dim_0] ... [u64 dim_{rank-1}][T value_0] ... [T value_{N-1}]
//! ```
//!
//! Integers and values use the host's native byte order and `T`'s native
//! width, so files only move between hosts with the same endianness. The
//! value section is read in full before the array is built.

use crate::files::{self, READER_ORIGIN, WRITER_ORIGIN};
use crate::{CodecError, FormatError};
use dense_core::{DenseArray, Element, Matrix2, Matrix4};
use std::io::{self, Read, Write};
use std::path::Path;

/// Values per write call when encoding.
const WRITE_CHUNK: usize = 8 * 1024;

/// Reads and writes arrays in the binary layout.
///
/// # Example
/// ```no_run
/// use dense_codec::BinaryCodec;
/// use dense_core::Matrix4;
/// use std::path::Path;
///
/// let m = Matrix4::new([4, 3, 2, 1], 1.0f32).unwrap();
/// BinaryCodec::write_matrix4(&m, Path::new("weights.bin")).unwrap();
/// let back: Matrix4<f32> = BinaryCodec::read_matrix4(Path::new("weights.bin")).unwrap();
/// assert_eq!(back, m);
/// ```
pub struct BinaryCodec;

impl BinaryCodec {
    /// Reads a rank-`R` array from a file.
    ///
    /// # Errors
    /// - [`CodecError::RankMismatch`] if the file holds a different rank.
    /// - [`CodecError::Corrupt`] for truncated input, trailing bytes, or
    ///   extents whose product overflows.
    /// - [`CodecError::Array`] if the extents are partially degenerate.
    pub fn read_array<T: Element, const R: usize>(
        path: &Path,
    ) -> Result<DenseArray<T, R>, CodecError> {
        let mut reader = files::open(path)?;
        let array = Self::decode(&mut reader, path)?;
        tracing::info!(
            "binary codec: loaded {} ({:?}, {})",
            path.display(),
            array.dims(),
            T::DTYPE,
        );
        Ok(array)
    }

    /// Reads a rank-`R` array from any reader, which must hold exactly one
    /// encoded array.
    pub fn read_array_from<T: Element, const R: usize, I: Read>(
        mut reader: I,
    ) -> Result<DenseArray<T, R>, CodecError> {
        Self::decode(&mut reader, Path::new(READER_ORIGIN))
    }

    /// Reads a rank-4 matrix from a file.
    pub fn read_matrix4<T: Element>(path: &Path) -> Result<Matrix4<T>, CodecError> {
        Self::read_array(path).map(Matrix4::from_array)
    }

    /// Reads a rank-2 matrix from a file.
    pub fn read_matrix2<T: Element>(path: &Path) -> Result<Matrix2<T>, CodecError> {
        Self::read_array(path).map(Matrix2::from_array)
    }

    /// Replaces `target` with the contents of a rank-4 file.
    ///
    /// On error `target` is left unchanged.
    pub fn load_matrix4_into<T: Element>(
        target: &mut Matrix4<T>,
        path: &Path,
    ) -> Result<(), CodecError> {
        *target = Self::read_matrix4(path)?;
        Ok(())
    }

    /// Replaces `target` with the contents of a rank-2 file.
    ///
    /// On error `target` is left unchanged.
    pub fn load_matrix2_into<T: Element>(
        target: &mut Matrix2<T>,
        path: &Path,
    ) -> Result<(), CodecError> {
        *target = Self::read_matrix2(path)?;
        Ok(())
    }

    /// Writes an array to a file, creating or truncating it.
    pub fn write_array<T: Element, const R: usize>(
        array: &DenseArray<T, R>,
        path: &Path,
    ) -> Result<(), CodecError> {
        let mut writer = files::create(path)?;
        Self::encode(array, &mut writer, path)?;
        files::finish(writer, path)?;
        tracing::info!(
            "binary codec: wrote {} ({:?}, {}, {} bytes)",
            path.display(),
            array.dims(),
            T::DTYPE,
            Self::encoded_len(array),
        );
        Ok(())
    }

    /// Writes an array to any writer.
    pub fn write_array_to<T: Element, const R: usize, W: Write>(
        array: &DenseArray<T, R>,
        writer: &mut W,
    ) -> Result<(), CodecError> {
        Self::encode(array, writer, Path::new(WRITER_ORIGIN))
    }

    /// Writes a rank-4 matrix to a file.
    pub fn write_matrix4<T: Element>(matrix: &Matrix4<T>, path: &Path) -> Result<(), CodecError> {
        Self::write_array(matrix.as_array(), path)
    }

    /// Writes a rank-2 matrix to a file.
    pub fn write_matrix2<T: Element>(matrix: &Matrix2<T>, path: &Path) -> Result<(), CodecError> {
        Self::write_array(matrix.as_array(), path)
    }

    /// Returns the number of bytes `array` occupies when encoded.
    pub fn encoded_len<T: Element, const R: usize>(array: &DenseArray<T, R>) -> usize {
        let word = std::mem::size_of::<u64>();
        word * (R + 1) + array.len() * T::DTYPE.size_bytes()
    }

    // ── Private helpers ────────────────────────────────────────

    fn decode<T: Element, const R: usize, I: Read>(
        reader: &mut I,
        origin: &Path,
    ) -> Result<DenseArray<T, R>, CodecError> {
        let rank = read_u64(reader, origin, "rank")?;
        if rank != R as u64 {
            return Err(CodecError::RankMismatch {
                origin: origin.to_path_buf(),
                expected: R,
                actual: rank,
            });
        }

        let mut dims = [0usize; R];
        for dim in dims.iter_mut() {
            let extent = read_u64(reader, origin, "extents")?;
            *dim = usize::try_from(extent)
                .map_err(|_| corrupt(origin, FormatError::ExtentOverflow))?;
        }

        let size = T::DTYPE.size_bytes();
        let byte_len = dims
            .iter()
            .try_fold(size, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| corrupt(origin, FormatError::ExtentOverflow))?;

        let mut bytes = Vec::new();
        reader
            .by_ref()
            .take(byte_len as u64)
            .read_to_end(&mut bytes)
            .map_err(|source| files::io_error(origin, source))?;
        if bytes.len() < byte_len {
            return Err(corrupt(origin, FormatError::Truncated { section: "values" }));
        }
        if !at_eof(reader).map_err(|source| files::io_error(origin, source))? {
            return Err(corrupt(origin, FormatError::TrailingBytes));
        }

        let data: Vec<T> = bytes.chunks_exact(size).map(T::from_ne_slice).collect();
        DenseArray::from_vec(dims, data).map_err(|source| CodecError::Array {
            origin: origin.to_path_buf(),
            source,
        })
    }

    fn encode<T: Element, const R: usize, W: Write>(
        array: &DenseArray<T, R>,
        writer: &mut W,
        origin: &Path,
    ) -> Result<(), CodecError> {
        let io_err = |source: io::Error| files::io_error(origin, source);

        let mut scratch = Vec::with_capacity(WRITE_CHUNK * T::DTYPE.size_bytes());
        scratch.extend_from_slice(&(R as u64).to_ne_bytes());
        for &dim in array.dims() {
            scratch.extend_from_slice(&(dim as u64).to_ne_bytes());
        }
        writer.write_all(&scratch).map_err(io_err)?;

        for chunk in array.as_slice().chunks(WRITE_CHUNK) {
            scratch.clear();
            for &value in chunk {
                value.write_ne_bytes(&mut scratch);
            }
            writer.write_all(&scratch).map_err(io_err)?;
        }
        Ok(())
    }
}

fn corrupt(origin: &Path, kind: FormatError) -> CodecError {
    CodecError::Corrupt {
        origin: origin.to_path_buf(),
        kind,
    }
}

fn read_u64<I: Read>(
    reader: &mut I,
    origin: &Path,
    section: &'static str,
) -> Result<u64, CodecError> {
    let mut buf = [0u8; 8];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(u64::from_ne_bytes(buf)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            Err(corrupt(origin, FormatError::Truncated { section }))
        }
        Err(source) => Err(files::io_error(origin, source)),
    }
}

fn at_eof<I: Read>(reader: &mut I) -> io::Result<bool> {
    let mut probe = [0u8; 1];
    loop {
        match reader.read(&mut probe) {
            Ok(n) => return Ok(n == 0),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dense_core::ArrayError;

    fn header(dims: &[u64]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(dims.len() as u64).to_ne_bytes());
        for d in dims {
            out.extend_from_slice(&d.to_ne_bytes());
        }
        out
    }

    #[test]
    fn test_layout() {
        let a = DenseArray::from_vec([2, 1], vec![1u16, 2]).unwrap();
        let mut buf = Vec::new();
        BinaryCodec::write_array_to(&a, &mut buf).unwrap();
        let mut expected = header(&[2, 1]);
        expected.extend_from_slice(&1u16.to_ne_bytes());
        expected.extend_from_slice(&2u16.to_ne_bytes());
        assert_eq!(buf, expected);
        assert_eq!(buf.len(), BinaryCodec::encoded_len(&a));
    }

    #[test]
    fn test_roundtrip_in_memory() {
        let data = (1..=12).map(|v| v as f32 / 3.0).collect();
        let a = DenseArray::from_vec([3, 2, 2, 1], data).unwrap();
        let mut buf = Vec::new();
        BinaryCodec::write_array_to(&a, &mut buf).unwrap();
        let back: DenseArray<f32, 4> = BinaryCodec::read_array_from(buf.as_slice()).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_degenerate_roundtrip() {
        let a = DenseArray::<i64, 4>::degenerate();
        let mut buf = Vec::new();
        BinaryCodec::write_array_to(&a, &mut buf).unwrap();
        assert_eq!(buf, header(&[0, 0, 0, 0]));
        let back: DenseArray<i64, 4> = BinaryCodec::read_array_from(buf.as_slice()).unwrap();
        assert!(back.is_degenerate());
    }

    #[test]
    fn test_rank_mismatch() {
        let mut buf = header(&[1, 1]);
        buf.extend_from_slice(&7i32.to_ne_bytes());
        let err = BinaryCodec::read_array_from::<i32, 4, _>(buf.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::RankMismatch {
                expected: 4,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_truncated_sections() {
        let err = BinaryCodec::read_array_from::<u8, 2, _>(&[1u8, 0][..]).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::Truncated { section: "rank" })
        );

        let mut buf = header(&[2, 2]);
        buf.truncate(12);
        let err = BinaryCodec::read_array_from::<u8, 2, _>(buf.as_slice()).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::Truncated { section: "extents" })
        );

        let mut buf = header(&[2, 2]);
        buf.extend_from_slice(&[1, 2, 3]);
        let err = BinaryCodec::read_array_from::<u8, 2, _>(buf.as_slice()).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::Truncated { section: "values" })
        );
    }

    #[test]
    fn test_trailing_bytes() {
        let mut buf = header(&[1, 1]);
        buf.extend_from_slice(&[9, 9]);
        let err = BinaryCodec::read_array_from::<u8, 2, _>(buf.as_slice()).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::TrailingBytes));
    }

    #[test]
    fn test_extent_overflow() {
        let buf = header(&[u64::MAX, u64::MAX]);
        let err = BinaryCodec::read_array_from::<f64, 2, _>(buf.as_slice()).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::ExtentOverflow));
    }

    #[test]
    fn test_partial_degenerate() {
        let buf = header(&[2, 0]);
        let err = BinaryCodec::read_array_from::<u8, 2, _>(buf.as_slice()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Array {
                source: ArrayError::InvalidShape { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_large_array_spans_chunks() {
        let n = WRITE_CHUNK * 2 + 5;
        let a = DenseArray::from_vec([n], (0..n as u32).collect()).unwrap();
        let mut buf = Vec::new();
        BinaryCodec::write_array_to(&a, &mut buf).unwrap();
        assert_eq!(buf.len(), BinaryCodec::encoded_len(&a));
        let back: DenseArray<u32, 1> = BinaryCodec::read_array_from(buf.as_slice()).unwrap();
        assert_eq!(back, a);
    }
}
