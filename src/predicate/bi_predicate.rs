//! Two-argument predicates.

use super::{And, Negate, Or, Xor};
use crate::function::BiFunction;

/// A contract that tests a `T` and a `U` together.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::prelude::*;
///
/// let is_longer = |text: &str, limit: usize| text.len() > limit;
/// let is_short = is_longer.negate();
///
/// assert!(is_short.test("abc", 3));
/// assert!(!is_short.apply_partial_right(2).test("abc"));
/// ```
pub trait BiPredicate<T, U>: BiFunction<T, U, bool> {
    /// Evaluates this predicate on `left` and `right`.
    #[inline]
    fn test(&self, left: T, right: U) -> bool {
        BiFunction::apply(self, left, right)
    }

    /// Short-circuiting AND; `other` is skipped when `self` yields `false`.
    #[inline]
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: BiPredicate<T, U>,
        T: Clone,
        U: Clone,
    {
        And::new(self, other)
    }

    /// Short-circuiting OR; `other` is skipped when `self` yields `true`.
    #[inline]
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: BiPredicate<T, U>,
        T: Clone,
        U: Clone,
    {
        Or::new(self, other)
    }

    /// Exclusive OR; both operands are evaluated.
    #[inline]
    fn xor<P>(self, other: P) -> Xor<Self, P>
    where
        Self: Sized,
        P: BiPredicate<T, U>,
        T: Clone,
        U: Clone,
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

impl<T, U, P> BiPredicate<T, U> for P where P: BiFunction<T, U, bool> + ?Sized {}

/// Returns a bi-predicate that holds for every pair of values.
#[inline]
pub fn always_true<T, U>() -> impl Fn(T, U) -> bool + Copy {
    |_: T, _: U| true
}

/// Returns a bi-predicate that holds for no pair of values.
#[inline]
pub fn always_false<T, U>() -> impl Fn(T, U) -> bool + Copy {
    |_: T, _: U| false
}

/// Returns a bi-predicate that holds when its two arguments are equal.
///
/// ```rust
/// use fn_contracts::predicate::bi_predicate;
/// use fn_contracts::prelude::*;
///
/// let same = bi_predicate::is_equal::<&str, String>();
/// assert!(same.test("abc", String::from("abc")));
/// assert!(!same.test("abc", String::from("abd")));
/// ```
#[inline]
pub fn is_equal<T, U>() -> impl Fn(T, U) -> bool + Copy
where
    T: PartialEq<U>,
{
    |left: T, right: U| left == right
}
