//! Numeric support for contracts.
//!
//! [`Numeric`] is implemented for every primitive integer and float type.
//! It bounds the output of `map_to_numeric` and backs the ready-made
//! arithmetic contracts in [`arithmetic`].
//!
//! Integer arithmetic wraps on overflow in every build profile, so a
//! composed pipeline behaves the same in debug and release. Division or
//! remainder by an integer zero still panics, and the panic propagates
//! through any adapter wrapping it.
//!
//! # Examples
//!
//! ```rust
//! use fn_contracts::numeric::{Numeric, arithmetic};
//! use fn_contracts::prelude::*;
//!
//! let add_ten = arithmetic::add::<i32>.apply_partial_left(10);
//! assert_eq!(add_ten.apply(5), 15);
//!
//! assert_eq!(i8::MAX.sum(1), i8::MIN);
//! assert_eq!(arithmetic::round(-2.5_f64), -2);
//! ```

pub mod arithmetic;

use std::fmt::Debug;

/// A primitive number usable as a contract output.
pub trait Numeric: Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// The smallest finite value.
    const MIN: Self;
    /// The largest finite value.
    const MAX: Self;
    /// `true` for floating-point types.
    const IS_FLOAT: bool;
    /// Width of the type in bits.
    const BITS: u32;

    /// Adds `rhs`, wrapping on integer overflow.
    fn sum(self, rhs: Self) -> Self;

    /// Subtracts `rhs`, wrapping on integer overflow.
    fn difference(self, rhs: Self) -> Self;

    /// Multiplies by `rhs`, wrapping on integer overflow.
    fn product(self, rhs: Self) -> Self;

    /// Divides by `rhs`. Integer division truncates toward zero.
    ///
    /// # Panics
    ///
    /// Panics when an integer `rhs` is zero.
    fn quotient(self, rhs: Self) -> Self;

    /// Remainder of the division by `rhs`, with the sign of `self`.
    ///
    /// # Panics
    ///
    /// Panics when an integer `rhs` is zero.
    fn remainder(self, rhs: Self) -> Self;

    /// Absolute value. For signed integers `MIN` maps to itself.
    fn absolute(self) -> Self;

    /// Raises to the power `exponent`, wrapping on integer overflow.
    fn power(self, exponent: u32) -> Self;

    /// Converts with `as` semantics.
    fn to_f32(self) -> f32;

    /// Converts with `as` semantics.
    fn to_f64(self) -> f64;

    /// Converts with `as` semantics.
    fn to_i128(self) -> i128;

    /// Converts with `as` semantics: floats truncate toward zero and saturate,
    /// NaN becomes zero.
    fn from_f32(value: f32) -> Self;

    /// Converts with `as` semantics: floats truncate toward zero and saturate,
    /// NaN becomes zero.
    fn from_f64(value: f64) -> Self;

    /// Converts with `as` semantics: integers keep the low bits.
    fn from_i128(value: i128) -> Self;
}

macro_rules! impl_numeric_for_integers {
    ($($ty:ty => $absolute:expr),* $(,)?) => {
        $(
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            impl Numeric for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const IS_FLOAT: bool = false;
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn sum(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn difference(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn product(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn quotient(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                #[inline]
                fn remainder(self, rhs: Self) -> Self {
                    self.wrapping_rem(rhs)
                }

                #[inline]
                fn absolute(self) -> Self {
                    let absolute: fn(Self) -> Self = $absolute;
                    absolute(self)
                }

                #[inline]
                fn power(self, exponent: u32) -> Self {
                    self.wrapping_pow(exponent)
                }

                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_f32(value: f32) -> Self {
                    value as Self
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as Self
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as Self
                }
            }
        )*
    };
}

impl_numeric_for_integers!(
    i8 => i8::wrapping_abs,
    i16 => i16::wrapping_abs,
    i32 => i32::wrapping_abs,
    i64 => i64::wrapping_abs,
    i128 => i128::wrapping_abs,
    isize => isize::wrapping_abs,
    u8 => std::convert::identity,
    u16 => std::convert::identity,
    u32 => std::convert::identity,
    u64 => std::convert::identity,
    u128 => std::convert::identity,
    usize => std::convert::identity,
);

macro_rules! impl_numeric_for_floats {
    ($($ty:ty => $bits:expr),* $(,)?) => {
        $(
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_precision_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            impl Numeric for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const IS_FLOAT: bool = true;
                const BITS: u32 = $bits;

                #[inline]
                fn sum(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn difference(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn product(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn quotient(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn remainder(self, rhs: Self) -> Self {
                    self % rhs
                }

                #[inline]
                fn absolute(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn power(self, exponent: u32) -> Self {
                    self.powf(exponent as Self)
                }

                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_f32(value: f32) -> Self {
                    value as Self
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as Self
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as Self
                }
            }
        )*
    };
}

impl_numeric_for_floats!(f32 => 32, f64 => 64);
