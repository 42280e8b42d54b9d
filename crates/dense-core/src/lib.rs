// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # dense-core
//!
//! Dense rank-2 and rank-4 numeric arrays over a single flat buffer.
//!
//! This crate provides:
//! - [`DenseArray`]: a fixed-rank array owning its flat buffer and stride table.
//! - [`Shape`]: per-axis extents, degeneracy rules, and strides.
//! - [`OffsetTable`]: per-axis lookup tables for table-driven rank-4 access.
//! - [`Matrix4`]: the rank-4 wrapper used by the nested-header text format.
//! - [`Matrix2`] and [`transpose`]: the row/column rank-2 wrapper.
//! - [`Element`] / [`DType`]: the supported scalar types.
//! - Scalar `+ - * /` operators (division is checked).
//!
//! # Layout
//! Axis 0 varies fastest, matching the order values appear in a text row.
//! An array is either fully populated or degenerate (every extent 0).
//!
//! # Design Goals
//! - Rank fixed at compile time (`DenseArray<T, 4>`), no dynamic dispatch.
//! - Derived state (strides, offset tables) built once from the shape.
//! - Clean error types via `thiserror`.

mod array;
mod element;
mod error;
mod matrix2;
mod matrix4;
mod offsets;
mod ops;
mod print;
mod shape;

pub use array::DenseArray;
pub use element::{DType, Element};
pub use error::{ArrayError, ErrorKind};
pub use matrix2::{transpose, Matrix2};
pub use matrix4::Matrix4;
pub use offsets::OffsetTable;
pub use print::{DEFAULT_PRECISION, DEFAULT_SEPARATOR, DEFAULT_WIDTH};
pub use shape::Shape;
