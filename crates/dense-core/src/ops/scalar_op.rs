// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise operations between an array and a scalar.
//!
//! `+ - *` wrap on integer overflow (see [`Element`]); `/` is checked.

use crate::{ArrayError, DenseArray, Element, Matrix4};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

macro_rules! scalar_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $elem_fn:ident) => {
        impl<T: Element, const R: usize> $op_trait<T> for DenseArray<T, R> {
            type Output = Self;

            fn $op_fn(mut self, rhs: T) -> Self {
                self.map_in_place(|x| x.$elem_fn(rhs));
                self
            }
        }

        impl<T: Element, const R: usize> $assign_trait<T> for DenseArray<T, R> {
            fn $assign_fn(&mut self, rhs: T) {
                self.map_in_place(|x| x.$elem_fn(rhs));
            }
        }

        impl<T: Element> $op_trait<T> for Matrix4<T> {
            type Output = Self;

            fn $op_fn(mut self, rhs: T) -> Self {
                self.array_mut().map_in_place(|x| x.$elem_fn(rhs));
                self
            }
        }

        impl<T: Element> $assign_trait<T> for Matrix4<T> {
            fn $assign_fn(&mut self, rhs: T) {
                self.array_mut().map_in_place(|x| x.$elem_fn(rhs));
            }
        }
    };
}

scalar_op!(Add, add, AddAssign, add_assign, wrapping_add);
scalar_op!(Sub, sub, SubAssign, sub_assign, wrapping_sub);
scalar_op!(Mul, mul, MulAssign, mul_assign, wrapping_mul);

impl<T: Element, const R: usize> DenseArray<T, R> {
    /// Divides every element by `rhs` in place.
    ///
    /// # Errors
    /// - [`ArrayError::DivisionByZero`] if `rhs` is zero.
    /// - [`ArrayError::Overflow`] if some quotient does not fit in `T`
    ///   (`i32::MIN / -1`).
    ///
    /// The array is unchanged on error.
    pub fn checked_div_assign(&mut self, rhs: T) -> Result<(), ArrayError> {
        if rhs == T::zero() {
            return Err(ArrayError::DivisionByZero { op: "div" });
        }
        let quotients = self
            .iter()
            .map(|&x| x.checked_div(rhs))
            .collect::<Option<Vec<T>>>()
            .ok_or(ArrayError::Overflow { op: "div" })?;
        self.as_mut_slice().copy_from_slice(&quotients);
        Ok(())
    }
}

impl<T: Element> Matrix4<T> {
    /// Divides every element by `rhs` in place.
    ///
    /// # Errors
    /// Returns [`ArrayError::DivisionByZero`] if `rhs` is zero, or
    /// [`ArrayError::Overflow`] for an unrepresentable quotient.
    pub fn checked_div_assign(&mut self, rhs: T) -> Result<(), ArrayError> {
        self.array_mut().checked_div_assign(rhs)
    }
}

impl<T: Element, const R: usize> Div<T> for DenseArray<T, R> {
    type Output = Result<Self, ArrayError>;

    fn div(mut self, rhs: T) -> Self::Output {
        self.checked_div_assign(rhs)?;
        Ok(self)
    }
}

impl<T: Element> Div<T> for Matrix4<T> {
    type Output = Result<Self, ArrayError>;

    fn div(mut self, rhs: T) -> Self::Output {
        self.checked_div_assign(rhs)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix4<i32> {
        Matrix4::from_vec([2, 2, 1, 1], vec![2, 4, 6, 8]).unwrap()
    }

    #[test]
    fn test_add_sub_mul() {
        let m = sample() + 1;
        assert_eq!(m.as_slice(), &[3, 5, 7, 9]);
        let m = m - 3;
        assert_eq!(m.as_slice(), &[0, 2, 4, 6]);
        let m = m * 2;
        assert_eq!(m.as_slice(), &[0, 4, 8, 12]);
    }

    #[test]
    fn test_compound_assign() {
        let mut a = DenseArray::new([2, 2], 1.5f64).unwrap();
        a += 0.5;
        a *= 3.0;
        a -= 1.0;
        assert!(a.iter().all(|&x| x == 5.0));
    }

    #[test]
    fn test_div() {
        let m = (sample() / 2).unwrap();
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
        let a = (DenseArray::new([1, 3], 3.0f32).unwrap() / 2.0).unwrap();
        assert!(a.iter().all(|&x| x == 1.5));
    }

    #[test]
    fn test_div_by_zero_integer() {
        let result = sample() / 0;
        assert_eq!(
            result.unwrap_err(),
            ArrayError::DivisionByZero { op: "div" }
        );
    }

    #[test]
    fn test_div_by_zero_float() {
        let m = Matrix4::new([1, 1, 1, 2], 1.0f64).unwrap();
        assert!(matches!(m / 0.0, Err(ArrayError::DivisionByZero { .. })));
        let m = Matrix4::new([1, 1, 1, 2], 1.0f64).unwrap();
        assert!(matches!(m / -0.0, Err(ArrayError::DivisionByZero { .. })));
    }

    #[test]
    fn test_checked_div_assign_leaves_data_on_error() {
        let mut m = sample();
        assert!(m.checked_div_assign(0).is_err());
        assert_eq!(m, sample());
    }

    #[test]
    fn test_unrepresentable_quotient() {
        let m = Matrix4::new([1, 1, 1, 1], i32::MIN).unwrap();
        assert_eq!((m / -1).unwrap_err(), ArrayError::Overflow { op: "div" });

        let mut a = DenseArray::from_vec([3, 1], vec![4i8, i8::MIN, -6]).unwrap();
        let before = a.clone();
        assert!(matches!(
            a.checked_div_assign(-1),
            Err(ArrayError::Overflow { .. })
        ));
        assert_eq!(a, before);
        assert_eq!(a.checked_div_assign(2), Ok(()));
        assert_eq!(a.as_slice(), &[2, -64, -3]);
    }

    #[test]
    fn test_integer_ops_wrap() {
        let m = Matrix4::new([1, 1, 1, 2], i32::MAX).unwrap() + 1;
        assert_eq!(m.as_slice(), &[i32::MIN, i32::MIN]);
        let a = DenseArray::new([2, 1], 0u8).unwrap() - 1;
        assert_eq!(a.as_slice(), &[u8::MAX, u8::MAX]);
        let mut a = DenseArray::new([1, 1], i64::MAX).unwrap();
        a *= 2;
        assert_eq!(a.as_slice(), &[-2]);
    }

    #[test]
    fn test_ops_keep_offsets() {
        let m = sample() * 5;
        assert_eq!(m.offsets().lens(), [2, 2, 1, 1]);
        assert_eq!(m[[1, 1, 0, 0]], 40);
    }
}
