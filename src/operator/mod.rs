//! Operators: transformers whose inputs and output share one type.
//!
//! - [`UnaryOperator`]: `Fn(T) -> T`, with bounded recursion
//! - [`BinaryOperator`]: `Fn(T, T) -> T`
//! - [`TernaryOperator`]: `Fn(T, T, T) -> T`
//!
//! Operators are ordinary functions, so everything in
//! [`function`](crate::function) applies. Partially applying a
//! [`BinaryOperator`] yields a [`UnaryOperator`]; partially applying a
//! [`TernaryOperator`] yields a [`BinaryOperator`] or a [`UnaryOperator`].
//!
//! # Recursion
//!
//! [`UnaryOperator::recurse`] feeds the operator's output back into it a
//! fixed number of times; the `while` variants stop as soon as a condition
//! on the current value fails. Conditions are checked *before* each
//! application, so a seed that already fails the condition is returned
//! untouched.
//!
//! ```rust
//! use fn_contracts::prelude::*;
//!
//! let increment = |value: i32| value + 1;
//!
//! assert_eq!(increment.recurse(5, 3), 8);
//! assert_eq!(increment.recurse_while(0, |value: &i32| *value < 10), 10);
//! assert_eq!(increment.recurse_while_bounded(0, |value: &i32| *value < 10, 4), 4);
//!
//! let add_three = increment.recursive(3);
//! assert_eq!(add_three.apply(10), 13);
//! ```

mod error;
mod recursion;

use std::cmp::Ordering;

pub use error::DepthExceededError;
pub use recursion::{Bounded, Depth, RecursionPolicy, Recursive, While};

use crate::function::{BiFunction, Function, TriFunction};
use crate::predicate::Predicate;

/// A function from `T` to `T`.
pub trait UnaryOperator<T>: Function<T, T> {
    /// Applies this operator `depth` times, starting from `seed`.
    ///
    /// A depth of zero returns `seed` without invoking the operator.
    #[inline]
    fn recurse(&self, seed: T, depth: usize) -> T {
        recursion::iterate(self, seed, &Depth(depth))
    }

    /// Applies this operator while `condition` holds for the current value.
    ///
    /// The condition is checked before every application. A condition that
    /// never fails loops forever.
    #[inline]
    fn recurse_while<P>(&self, seed: T, condition: P) -> T
    where
        P: for<'a> Predicate<&'a T>,
    {
        recursion::iterate(self, seed, &While(condition))
    }

    /// Applies this operator while `condition` holds, at most `max_depth` times.
    ///
    /// Reaching `max_depth` ends the recursion silently; use
    /// [`try_recurse_while_bounded`](Self::try_recurse_while_bounded) to
    /// detect it.
    #[inline]
    fn recurse_while_bounded<P>(&self, seed: T, condition: P, max_depth: usize) -> T
    where
        P: for<'a> Predicate<&'a T>,
    {
        recursion::iterate(self, seed, &Bounded::new(condition, max_depth))
    }

    /// Like [`recurse_while_bounded`](Self::recurse_while_bounded), but fails
    /// when the condition still holds after `max_depth` applications.
    ///
    /// # Errors
    ///
    /// Returns [`DepthExceededError`] carrying the last value when the depth
    /// limit is reached before the condition fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fn_contracts::prelude::*;
    ///
    /// let halve = |value: u64| value / 2;
    /// let is_large = |value: &u64| *value > 1;
    ///
    /// assert_eq!(halve.try_recurse_while_bounded(64, is_large, 10), Ok(1));
    ///
    /// let error = halve.try_recurse_while_bounded(64, is_large, 3).unwrap_err();
    /// assert_eq!(error.value, 8);
    /// ```
    fn try_recurse_while_bounded<P>(
        &self,
        seed: T,
        condition: P,
        max_depth: usize,
    ) -> Result<T, DepthExceededError<T>>
    where
        P: for<'a> Predicate<&'a T>,
    {
        let mut value = seed;
        for _ in 0..max_depth {
            if !condition.test(&value) {
                return Ok(value);
            }
            value = Function::apply(self, value);
        }
        if condition.test(&value) {
            Err(DepthExceededError { max_depth, value })
        } else {
            Ok(value)
        }
    }

    /// Applies this operator for as long as `policy` allows.
    #[inline]
    fn recurse_with<P>(&self, seed: T, policy: P) -> T
    where
        P: RecursionPolicy<T>,
    {
        recursion::iterate(self, seed, &policy)
    }

    /// Returns an operator that applies `self` `depth` times per call.
    #[inline]
    fn recursive(self, depth: usize) -> Recursive<Self, Depth>
    where
        Self: Sized,
    {
        Recursive::new(self, Depth(depth))
    }

    /// Returns an operator that applies `self` while `condition` holds.
    #[inline]
    fn recursive_while<P>(self, condition: P) -> Recursive<Self, While<P>>
    where
        Self: Sized,
        P: for<'a> Predicate<&'a T>,
    {
        Recursive::new(self, While(condition))
    }

    /// Returns an operator that applies `self` while `condition` holds, at
    /// most `max_depth` times per call.
    #[inline]
    fn recursive_while_bounded<P>(
        self,
        condition: P,
        max_depth: usize,
    ) -> Recursive<Self, Bounded<P>>
    where
        Self: Sized,
        P: for<'a> Predicate<&'a T>,
    {
        Recursive::new(self, Bounded::new(condition, max_depth))
    }

    /// Returns an operator that applies `self` for as long as `policy` allows.
    #[inline]
    fn recursive_with<P>(self, policy: P) -> Recursive<Self, P>
    where
        Self: Sized,
        P: RecursionPolicy<T>,
    {
        Recursive::new(self, policy)
    }
}

impl<T, F> UnaryOperator<T> for F where F: Function<T, T> + ?Sized {}

/// A function from two `T`s to a `T`.
pub trait BinaryOperator<T>: BiFunction<T, T, T> {}

impl<T, F> BinaryOperator<T> for F where F: BiFunction<T, T, T> + ?Sized {}

/// A function from three `T`s to a `T`.
pub trait TernaryOperator<T>: TriFunction<T, T, T, T> {}

impl<T, F> TernaryOperator<T> for F where F: TriFunction<T, T, T, T> + ?Sized {}

/// Returns a binary operator yielding the lesser of its arguments by `compare`.
///
/// The left argument wins ties.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::operator::min_by;
/// use fn_contracts::prelude::*;
///
/// let shortest = min_by(|left: &&str, right: &&str| left.len().cmp(&right.len()));
///
/// assert_eq!(shortest.apply("pear", "fig"), "fig");
/// assert_eq!(shortest.apply("kiwi", "plum"), "kiwi");
/// ```
#[inline]
pub const fn min_by<C>(compare: C) -> MinBy<C> {
    MinBy { compare }
}

/// Returns a binary operator yielding the greater of its arguments by `compare`.
///
/// The left argument wins ties.
#[inline]
pub const fn max_by<C>(compare: C) -> MaxBy<C> {
    MaxBy { compare }
}

/// Selects the lesser argument. Returned by [`min_by`].
#[derive(Clone, Copy)]
pub struct MinBy<C> {
    compare: C,
}

impl<T, C> BiFunction<T, T, T> for MinBy<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn apply(&self, left: T, right: T) -> T {
        if (self.compare)(&left, &right).is_le() {
            left
        } else {
            right
        }
    }
}

/// Selects the greater argument. Returned by [`max_by`].
#[derive(Clone, Copy)]
pub struct MaxBy<C> {
    compare: C,
}

impl<T, C> BiFunction<T, T, T> for MaxBy<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn apply(&self, left: T, right: T) -> T {
        if (self.compare)(&left, &right).is_ge() {
            left
        } else {
            right
        }
    }
}
