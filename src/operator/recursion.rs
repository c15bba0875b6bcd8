//! Recursion via iteration.
//!
//! A unary operator `f` is applied repeatedly, feeding each result back in,
//! for as long as a [`RecursionPolicy`] allows. The policy is consulted
//! before every application with the current value and the number of
//! applications made so far, so a policy that refuses immediately returns
//! the seed without invoking `f` at all.
//!
//! The loop runs on the caller's stack frame; depth is bounded only by the
//! policy, never by stack size.

use crate::function::Function;
use crate::predicate::Predicate;

/// Decides whether another application of a unary operator happens.
///
/// Any `Fn(&T, usize) -> bool` is a policy.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::operator::RecursionPolicy;
/// use fn_contracts::prelude::*;
///
/// // Keep doubling until the value passes 100 or eight doublings were made.
/// let policy = |value: &u32, applications: usize| *value <= 100 && applications < 8;
/// let double = |value: u32| value * 2;
///
/// assert_eq!(double.recurse_with(1, policy), 128);
/// ```
pub trait RecursionPolicy<T> {
    /// Returns `true` when the operator should be applied to `value` once more.
    ///
    /// `applications` counts the applications already made, starting at zero.
    fn should_continue(&self, value: &T, applications: usize) -> bool;
}

impl<T, F> RecursionPolicy<T> for F
where
    F: Fn(&T, usize) -> bool,
{
    #[inline]
    fn should_continue(&self, value: &T, applications: usize) -> bool {
        self(value, applications)
    }
}

/// Applies the operator exactly `self.0` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Depth(pub usize);

impl<T> RecursionPolicy<T> for Depth {
    #[inline]
    fn should_continue(&self, _value: &T, applications: usize) -> bool {
        applications < self.0
    }
}

/// Applies the operator while the wrapped condition holds.
///
/// There is no depth limit; a condition that never fails loops forever.
#[derive(Clone, Copy)]
pub struct While<P>(pub P);

impl<T, P> RecursionPolicy<T> for While<P>
where
    P: for<'a> Predicate<&'a T>,
{
    #[inline]
    fn should_continue(&self, value: &T, _applications: usize) -> bool {
        self.0.test(value)
    }
}

/// Applies the operator while a condition holds, at most `max_depth` times.
///
/// The depth limit is checked first; once it is reached the condition is no
/// longer evaluated.
#[derive(Clone, Copy)]
pub struct Bounded<P> {
    depth: Depth,
    condition: While<P>,
}

impl<P> Bounded<P> {
    /// Combines `condition` with a limit of `max_depth` applications.
    #[inline]
    pub const fn new(condition: P, max_depth: usize) -> Self {
        Self {
            depth: Depth(max_depth),
            condition: While(condition),
        }
    }

    /// Returns the maximum number of applications.
    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.depth.0
    }
}

impl<T, P> RecursionPolicy<T> for Bounded<P>
where
    P: for<'a> Predicate<&'a T>,
{
    #[inline]
    fn should_continue(&self, value: &T, applications: usize) -> bool {
        RecursionPolicy::<T>::should_continue(&self.depth, value, applications)
            && self.condition.should_continue(value, applications)
    }
}

/// A unary operator that runs another one under a recursion policy.
///
/// Returned by the `recursive*` methods of
/// [`UnaryOperator`](super::UnaryOperator). Each call starts a fresh
/// recursion from its argument.
#[derive(Clone, Copy)]
pub struct Recursive<F, P> {
    operator: F,
    policy: P,
}

impl<F, P> Recursive<F, P> {
    pub(crate) const fn new(operator: F, policy: P) -> Self {
        Self { operator, policy }
    }
}

impl<F, P, T> Function<T, T> for Recursive<F, P>
where
    F: Function<T, T>,
    P: RecursionPolicy<T>,
{
    #[inline]
    fn apply(&self, seed: T) -> T {
        iterate(&self.operator, seed, &self.policy)
    }
}

pub(crate) fn iterate<T, F, P>(operator: &F, seed: T, policy: &P) -> T
where
    F: Function<T, T> + ?Sized,
    P: RecursionPolicy<T> + ?Sized,
{
    let mut value = seed;
    let mut applications = 0;
    while policy.should_continue(&value, applications) {
        value = operator.apply(value);
        applications += 1;
    }
    value
}
