//! Helper functions (combinators) for contract composition.
//!
//! This module provides fundamental combinators that are commonly used
//! in functional programming:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a bi-function (C combinator)
//!
//! Being plain functions and closures, they are contracts themselves.

use crate::function::BiFunction;

/// Returns the value unchanged.
///
/// `identity` is the unit of composition:
/// - `identity.map(f)` is equivalent to `f`
/// - `f.map(identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use fn_contracts::compose::identity;
/// use fn_contracts::prelude::*;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity::<&str>.apply("hello"), "hello");
///
/// let double = |value: i32| value * 2;
/// assert_eq!(double.map(identity::<i32>).apply(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator in combinatory logic.
///
/// # Examples
///
/// ```
/// use fn_contracts::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// // Replace all elements with zeros
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T + Clone {
    move |_| value.clone()
}

/// Swaps the arguments of a bi-function.
///
/// Given `function(a, b)`, returns a bi-function `g` with
/// `g(b, a) = function(a, b)`. Equivalent to [`BiFunction::flip`].
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use fn_contracts::compose::flip;
/// use fn_contracts::prelude::*;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped_divide = flip(divide);
/// assert!((flipped_divide.apply(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
#[inline]
pub const fn flip<F>(function: F) -> Flip<F> {
    Flip { function }
}

/// A bi-function with its arguments swapped.
///
/// Returned by [`flip`] and [`BiFunction::flip`].
#[derive(Clone, Copy)]
pub struct Flip<F> {
    function: F,
}

impl<F, T, U, R> BiFunction<U, T, R> for Flip<F>
where
    F: BiFunction<T, U, R>,
{
    #[inline]
    fn apply(&self, second_argument: U, first_argument: T) -> R {
        self.function.apply(first_argument, second_argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        // power(2, 3) = 8
        assert_eq!(power(2, 3), 8);
        // flipped_power(3, 2) = power(2, 3) = 8
        assert_eq!(flipped_power.apply(3, 2), 8);
    }

    #[test]
    fn test_double_flip_restores_argument_order() {
        let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
        let restored = flip(flip(subtract));
        assert_eq!(restored.apply(10, 3), 7);
    }
}
