// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # dense-codec
//!
//! File formats for [`dense_core`] arrays.
//!
//! - [`TextCodec`]: the nested-header rank-4 text layout and the
//!   one-row-per-line rank-2 layout, with the column settings in [`TextFormat`].
//! - [`BinaryCodec`]: `[rank][extents][values]` in host-native byte order.
//! - [`CodecError`]: every failure, with the file (or `<reader>`) it
//!   refers to and, for text input, the 1-based line.
//!
//! # Rank-4 text layout
//! ```text
//! ,,,0
//! ,,0
//! 1   2   3
//! 4   5   6
//! ,,1
//! 7   8   9
//! 10  11  12
//! ```
//! `,,,k` opens slice `k` (axis 3), `,,j` opens layer `j` (axis 2), and each
//! row holds the values of axis 0. This file loads with dims `[3, 2, 2, 1]`.
//!
//! # Example
//! ```no_run
//! use dense_codec::{BinaryCodec, TextCodec};
//! use dense_core::Matrix4;
//! use std::path::Path;
//!
//! let codec = TextCodec::default();
//! let m: Matrix4<f64> = codec.read_matrix4(Path::new("input.txt")).unwrap();
//! BinaryCodec::write_matrix4(&m, Path::new("input.bin")).unwrap();
//! ```

mod binary;
mod config;
mod error;
mod files;
mod text;

pub use binary::BinaryCodec;
pub use config::TextFormat;
pub use error::{CodecError, FormatError};
pub use text::TextCodec;
