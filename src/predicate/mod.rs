//! Boolean tests over values.
//!
//! A predicate is a function whose output is `bool`:
//!
//! - [`Predicate`]: `Fn(T) -> bool`
//! - [`BiPredicate`]: `Fn(T, U) -> bool`
//! - [`TriPredicate`]: `Fn(T, U, V) -> bool`
//!
//! Predicates combine with [`and`](Predicate::and), [`or`](Predicate::or),
//! [`xor`](Predicate::xor) and [`negate`](Predicate::negate). `and` and
//! `or` short-circuit: the right operand is not evaluated once the left one
//! decides the result.
//!
//! # Laws
//!
//! - **Double negation**: `p.negate().negate()` tests the same as `p`
//! - **Identity**: `p.and(always_true())` and `p.or(always_false())` test the same as `p`
//! - **De Morgan**: `p.and(q).negate()` tests the same as `p.negate().or(q.negate())`
//!
//! # Examples
//!
//! ```rust
//! use fn_contracts::predicate;
//! use fn_contracts::prelude::*;
//!
//! let is_even = |value: i32| value % 2 == 0;
//! let is_positive = |value: i32| value > 0;
//!
//! let is_odd_or_negative = is_even.and(is_positive).negate();
//!
//! assert!(is_odd_or_negative.test(3));
//! assert!(is_odd_or_negative.test(-2));
//! assert!(!is_odd_or_negative.test(4));
//! assert!(predicate::not(is_odd_or_negative).test(4));
//! ```

pub mod bi_predicate;
mod combinator;
pub mod tri_predicate;

pub use bi_predicate::BiPredicate;
pub use combinator::{And, Negate, Or, Xor};
pub use tri_predicate::TriPredicate;

use crate::function::Function;

/// A contract that tests a `T`.
pub trait Predicate<T>: Function<T, bool> {
    /// Evaluates this predicate on `value`.
    #[inline]
    fn test(&self, value: T) -> bool {
        Function::apply(self, value)
    }

    /// Returns a predicate that holds when both `self` and `other` hold.
    ///
    /// `other` is not evaluated when `self` yields `false`.
    #[inline]
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
        T: Clone,
    {
        And::new(self, other)
    }

    /// Returns a predicate that holds when `self` or `other` holds.
    ///
    /// `other` is not evaluated when `self` yields `true`.
    #[inline]
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
        T: Clone,
    {
        Or::new(self, other)
    }

    /// Returns a predicate that holds when exactly one of `self` and `other` holds.
    #[inline]
    fn xor<P>(self, other: P) -> Xor<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
        T: Clone,
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

impl<T, P> Predicate<T> for P where P: Function<T, bool> + ?Sized {}

/// Returns a predicate that holds for every value.
#[inline]
pub fn always_true<T>() -> impl Fn(T) -> bool + Copy {
    |_: T| true
}

/// Returns a predicate that holds for no value.
#[inline]
pub fn always_false<T>() -> impl Fn(T) -> bool + Copy {
    |_: T| false
}

/// Returns a predicate that holds for values equal to `target`.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::predicate::is_equal;
/// use fn_contracts::prelude::*;
///
/// let is_answer = is_equal(42);
/// assert!(is_answer.test(42));
/// assert!(!is_answer.test(41));
///
/// // Any `PartialEq` pairing works.
/// let is_hello = is_equal("hello");
/// assert!(is_hello.test(String::from("hello")));
/// ```
#[inline]
pub const fn is_equal<U>(target: U) -> IsEqual<U> {
    IsEqual { target }
}

/// Returns the negation of `predicate`, of whichever shape it is.
#[inline]
pub const fn not<P>(predicate: P) -> Negate<P> {
    Negate::new(predicate)
}

/// Equality test against a captured target.
///
/// Returned by [`is_equal`].
#[derive(Clone, Copy)]
pub struct IsEqual<U> {
    target: U,
}

impl<T, U> Function<T, bool> for IsEqual<U>
where
    T: PartialEq<U>,
{
    #[inline]
    fn apply(&self, value: T) -> bool {
        value == self.target
    }
}
