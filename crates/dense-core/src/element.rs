// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Supported array element types.

use std::fmt;

/// Enumerates the numeric types a [`crate::DenseArray`] can hold.
///
/// The binary codec writes elements in their native width, so the dtype
/// decides how many bytes each stored value occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit IEEE 754 floating point.
    F32,
    /// 64-bit IEEE 754 floating point.
    F64,
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
}

impl DType {
    /// Returns the size of a single element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            DType::I8 | DType::U8 => 1,
            DType::I16 | DType::U16 => 2,
            DType::F32 | DType::I32 | DType::U32 => 4,
            DType::F64 | DType::I64 | DType::U64 => 8,
        }
    }

    /// Returns a human-readable label for this data type.
    pub fn as_str(self) -> &'static str {
        match self {
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar that can be stored in a dense array.
///
/// `Default::default()` must be the additive zero; it is both the fill value
/// of [`crate::DenseArray::zeros`] and the divisor rejected by checked division.
///
/// Scalar `+ - *` on integer elements wrap at the type's bounds in every build
/// profile. Floating-point elements follow IEEE 754.
pub trait Element: Copy + PartialEq + Default + fmt::Debug + Send + Sync + 'static {
    /// The runtime tag for this type.
    const DTYPE: DType;

    /// Returns the zero value.
    fn zero() -> Self {
        Self::default()
    }

    /// Appends the host-native byte representation to `out`.
    fn write_ne_bytes(self, out: &mut Vec<u8>);

    /// Decodes a value from exactly `DTYPE.size_bytes()` host-native bytes.
    ///
    /// # Panics
    /// Panics if `bytes` has the wrong length.
    fn from_ne_slice(bytes: &[u8]) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Returns `None` if `rhs` is zero or the quotient is not representable
    /// (`MIN / -1` for signed integers).
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_element {
    (@bytes $ty:ty, $dtype:ident) => {
        const DTYPE: DType = DType::$dtype;

        fn write_ne_bytes(self, out: &mut Vec<u8>) {
            out.extend_from_slice(&self.to_ne_bytes());
        }

        fn from_ne_slice(bytes: &[u8]) -> Self {
            let mut buf = [0u8; std::mem::size_of::<$ty>()];
            buf.copy_from_slice(bytes);
            <$ty>::from_ne_bytes(buf)
        }
    };
    (int: $($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                impl_element!(@bytes $ty, $dtype);

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_div(self, rhs)
                }
            }
        )*
    };
    (float: $($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                impl_element!(@bytes $ty, $dtype);

                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    (rhs != 0.0).then(|| self / rhs)
                }
            }
        )*
    };
}

impl_element! {
    float:
    f32 => F32,
    f64 => F64,
}

impl_element! {
    int:
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}
