//! Logical combinators shared by every predicate shape.

use super::{BiPredicate, Predicate, TriPredicate};
use crate::function::{BiFunction, Function, TriFunction};

/// Short-circuiting logical AND of two predicates.
///
/// The right operand is skipped when the left one yields `false`.
#[derive(Clone, Copy)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A, B> And<A, B> {
    pub(crate) const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

/// Short-circuiting logical OR of two predicates.
///
/// The right operand is skipped when the left one yields `true`.
#[derive(Clone, Copy)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    pub(crate) const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

/// Exclusive OR of two predicates. Both operands are always evaluated.
#[derive(Clone, Copy)]
pub struct Xor<A, B> {
    left: A,
    right: B,
}

impl<A, B> Xor<A, B> {
    pub(crate) const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

/// Logical negation of a predicate.
///
/// Returned by the `negate` methods and by [`not`](super::not).
#[derive(Clone, Copy)]
pub struct Negate<P> {
    predicate: P,
}

impl<P> Negate<P> {
    pub(crate) const fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

// =============================================================================
// Predicate
// =============================================================================

impl<A, B, T> Function<T, bool> for And<A, B>
where
    A: Predicate<T>,
    B: Predicate<T>,
    T: Clone,
{
    #[inline]
    fn apply(&self, value: T) -> bool {
        self.left.test(value.clone()) && self.right.test(value)
    }
}

impl<A, B, T> Function<T, bool> for Or<A, B>
where
    A: Predicate<T>,
    B: Predicate<T>,
    T: Clone,
{
    #[inline]
    fn apply(&self, value: T) -> bool {
        self.left.test(value.clone()) || self.right.test(value)
    }
}

impl<A, B, T> Function<T, bool> for Xor<A, B>
where
    A: Predicate<T>,
    B: Predicate<T>,
    T: Clone,
{
    #[inline]
    fn apply(&self, value: T) -> bool {
        self.left.test(value.clone()) ^ self.right.test(value)
    }
}

impl<P, T> Function<T, bool> for Negate<P>
where
    P: Predicate<T>,
{
    #[inline]
    fn apply(&self, value: T) -> bool {
        !self.predicate.test(value)
    }
}

// =============================================================================
// BiPredicate
// =============================================================================

impl<A, B, T, U> BiFunction<T, U, bool> for And<A, B>
where
    A: BiPredicate<T, U>,
    B: BiPredicate<T, U>,
    T: Clone,
    U: Clone,
{
    #[inline]
    fn apply(&self, left: T, right: U) -> bool {
        self.left.test(left.clone(), right.clone()) && self.right.test(left, right)
    }
}

impl<A, B, T, U> BiFunction<T, U, bool> for Or<A, B>
where
    A: BiPredicate<T, U>,
    B: BiPredicate<T, U>,
    T: Clone,
    U: Clone,
{
    #[inline]
    fn apply(&self, left: T, right: U) -> bool {
        self.left.test(left.clone(), right.clone()) || self.right.test(left, right)
    }
}

impl<A, B, T, U> BiFunction<T, U, bool> for Xor<A, B>
where
    A: BiPredicate<T, U>,
    B: BiPredicate<T, U>,
    T: Clone,
    U: Clone,
{
    #[inline]
    fn apply(&self, left: T, right: U) -> bool {
        self.left.test(left.clone(), right.clone()) ^ self.right.test(left, right)
    }
}

impl<P, T, U> BiFunction<T, U, bool> for Negate<P>
where
    P: BiPredicate<T, U>,
{
    #[inline]
    fn apply(&self, left: T, right: U) -> bool {
        !self.predicate.test(left, right)
    }
}

// =============================================================================
// TriPredicate
// =============================================================================

impl<A, B, T, U, V> TriFunction<T, U, V, bool> for And<A, B>
where
    A: TriPredicate<T, U, V>,
    B: TriPredicate<T, U, V>,
    T: Clone,
    U: Clone,
    V: Clone,
{
    #[inline]
    fn apply(&self, left: T, middle: U, right: V) -> bool {
        self.left.test(left.clone(), middle.clone(), right.clone())
            && self.right.test(left, middle, right)
    }
}

impl<A, B, T, U, V> TriFunction<T, U, V, bool> for Or<A, B>
where
    A: TriPredicate<T, U, V>,
    B: TriPredicate<T, U, V>,
    T: Clone,
    U: Clone,
    V: Clone,
{
    #[inline]
    fn apply(&self, left: T, middle: U, right: V) -> bool {
        self.left.test(left.clone(), middle.clone(), right.clone())
            || self.right.test(left, middle, right)
    }
}

impl<A, B, T, U, V> TriFunction<T, U, V, bool> for Xor<A, B>
where
    A: TriPredicate<T, U, V>,
    B: TriPredicate<T, U, V>,
    T: Clone,
    U: Clone,
    V: Clone,
{
    #[inline]
    fn apply(&self, left: T, middle: U, right: V) -> bool {
        self.left.test(left.clone(), middle.clone(), right.clone())
            ^ self.right.test(left, middle, right)
    }
}

impl<P, T, U, V> TriFunction<T, U, V, bool> for Negate<P>
where
    P: TriPredicate<T, U, V>,
{
    #[inline]
    fn apply(&self, left: T, middle: U, right: V) -> bool {
        !self.predicate.test(left, middle, right)
    }
}
