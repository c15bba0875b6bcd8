//! Arithmetic as contracts.
//!
//! Every item here is a plain generic function, so it is already a
//! [`Function`](crate::function::Function) or
//! [`BiFunction`](crate::function::BiFunction) once its type parameters are
//! fixed. Binary operations are [`BinaryOperator`](crate::operator::BinaryOperator)s
//! and partially apply to unary operators:
//!
//! ```rust
//! use fn_contracts::numeric::arithmetic;
//! use fn_contracts::prelude::*;
//!
//! let double = arithmetic::multiply::<u64>.apply_partial_left(2);
//! assert_eq!(double.recurse(1, 10), 1024);
//!
//! let cube = arithmetic::power::<f64>.apply_partial_right(3);
//! assert!((cube.apply(1.5) - 3.375).abs() < f64::EPSILON);
//! ```

use super::Numeric;

/// `left + right`, wrapping on integer overflow.
#[inline]
pub fn add<N: Numeric>(left: N, right: N) -> N {
    left.sum(right)
}

/// `left - right`, wrapping on integer overflow.
#[inline]
pub fn subtract<N: Numeric>(left: N, right: N) -> N {
    left.difference(right)
}

/// `left * right`, wrapping on integer overflow.
#[inline]
pub fn multiply<N: Numeric>(left: N, right: N) -> N {
    left.product(right)
}

/// `left / right`.
///
/// # Panics
///
/// Panics when an integer `right` is zero.
#[inline]
pub fn divide<N: Numeric>(left: N, right: N) -> N {
    left.quotient(right)
}

/// `left % right`.
///
/// # Panics
///
/// Panics when an integer `right` is zero.
#[inline]
pub fn remainder<N: Numeric>(left: N, right: N) -> N {
    left.remainder(right)
}

/// Absolute value of `value`.
#[inline]
pub fn absolute<N: Numeric>(value: N) -> N {
    value.absolute()
}

/// `base` raised to `exponent`.
#[inline]
pub fn power<N: Numeric>(base: N, exponent: u32) -> N {
    base.power(exponent)
}

/// Rounds to the nearest integer, halves rounding up toward positive infinity.
///
/// Out-of-range values saturate and NaN rounds to zero. Integer inputs
/// outside the `i64` range saturate too.
///
/// ```rust
/// use fn_contracts::numeric::arithmetic::round;
///
/// assert_eq!(round(2.5_f64), 3);
/// assert_eq!(round(-2.5_f64), -2);
/// assert_eq!(round(-2.6_f32), -3);
/// assert_eq!(round(7_u8), 7);
/// assert_eq!(round(u64::MAX), i64::MAX);
/// ```
#[inline]
pub fn round<N: Numeric>(value: N) -> i64 {
    if N::IS_FLOAT {
        let value = value.to_f64();
        let floor = value.floor();
        let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
        i64::from_f64(rounded)
    } else {
        // `to_i128` wraps for `u128` values above `i128::MAX`, so the sign
        // of the input decides the saturation side.
        match i64::try_from(value.to_i128()) {
            Ok(narrow) if (narrow < 0) == (value < N::ZERO) => narrow,
            _ if value < N::ZERO => i64::MIN,
            _ => i64::MAX,
        }
    }
}

/// Converts between numeric types with `as` semantics.
///
/// Every conversion rounds at most once: conversions to `f32` go straight
/// to `f32`, other conversions involving a float go through `f64`, and
/// integer to integer conversions keep the low bits.
///
/// ```rust
/// use fn_contracts::numeric::arithmetic::cast;
///
/// assert_eq!(cast::<i64, i32>(i64::from(i32::MAX) + 1), i32::MIN);
/// assert_eq!(cast::<f64, i32>(-7.9), -7);
/// assert_eq!(cast::<i32, f64>(7), 7.0);
/// ```
#[inline]
pub fn cast<N: Numeric, M: Numeric>(value: N) -> M {
    if M::IS_FLOAT && M::BITS == 32 {
        M::from_f32(value.to_f32())
    } else if N::IS_FLOAT || M::IS_FLOAT {
        M::from_f64(value.to_f64())
    } else {
        M::from_i128(value.to_i128())
    }
}
