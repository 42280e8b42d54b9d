// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scalar arithmetic on dense arrays.
//!
//! `+`, `-` and `*` with a scalar are infallible and exposed through the
//! standard operator traits (plus their compound-assignment forms); integer
//! results wrap. Division rejects a zero divisor and an unrepresentable
//! quotient, so `/` yields a `Result` and the in-place form is the explicit
//! `checked_div_assign`.

mod scalar_op;
