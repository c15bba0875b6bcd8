//! Three-argument predicates.

use super::{And, Negate, Or, Xor};
use crate::function::TriFunction;

/// A contract that tests three values together.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::prelude::*;
///
/// let is_between = |value: i32, low: i32, high: i32| low <= value && value <= high;
/// let is_digit = is_between.apply_partial_middle_right(0, 9);
///
/// assert!(is_between.test(5, 1, 10));
/// assert!(is_digit.test(7));
/// assert!(!is_digit.test(10));
/// ```
pub trait TriPredicate<T, U, V>: TriFunction<T, U, V, bool> {
    /// Evaluates this predicate on all three values.
    #[inline]
    fn test(&self, left: T, middle: U, right: V) -> bool {
        TriFunction::apply(self, left, middle, right)
    }

    /// Short-circuiting AND; `other` is skipped when `self` yields `false`.
    #[inline]
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: TriPredicate<T, U, V>,
        T: Clone,
        U: Clone,
        V: Clone,
    {
        And::new(self, other)
    }

    /// Short-circuiting OR; `other` is skipped when `self` yields `true`.
    #[inline]
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: TriPredicate<T, U, V>,
        T: Clone,
        U: Clone,
        V: Clone,
    {
        Or::new(self, other)
    }

    /// Exclusive OR; both operands are evaluated.
    #[inline]
    fn xor<P>(self, other: P) -> Xor<Self, P>
    where
        Self: Sized,
        P: TriPredicate<T, U, V>,
        T: Clone,
        U: Clone,
        V: Clone,
    {
        Xor::new(self, other)
    }

    /// Returns the logical negation of this predicate.
    #[inline]
    fn negate(self) -> Negate<Self>
    where
        Self: Sized,
    {
        Negate::new(self)
    }
}

impl<T, U, V, P> TriPredicate<T, U, V> for P where P: TriFunction<T, U, V, bool> + ?Sized {}

/// Returns a tri-predicate that holds for every triple of values.
#[inline]
pub fn always_true<T, U, V>() -> impl Fn(T, U, V) -> bool + Copy {
    |_: T, _: U, _: V| true
}

/// Returns a tri-predicate that holds for no triple of values.
#[inline]
pub fn always_false<T, U, V>() -> impl Fn(T, U, V) -> bool + Copy {
    |_: T, _: U, _: V| false
}
