//! Partial application adapters.
//!
//! Every adapter owns the values bound to it; they are moved in when the
//! adapter is built and cloned into the wrapped contract on each call.
//! Unbound arguments keep their original relative order.

use crate::function::{BiFunction, Function, TriFunction};
use crate::supplier::Supplier;

/// A contract with every argument bound, leaving a [`Supplier`].
///
/// `A` is the tuple of bound arguments: `(T,)` for a [`Function`],
/// `(T, U)` for a [`BiFunction`], `(T, U, V)` for a [`TriFunction`].
#[derive(Clone, Copy)]
pub struct BindAll<F, A> {
    function: F,
    arguments: A,
}

impl<F, A> BindAll<F, A> {
    pub(crate) const fn new(function: F, arguments: A) -> Self {
        Self {
            function,
            arguments,
        }
    }
}

impl<F, T, R> Supplier<R> for BindAll<F, (T,)>
where
    F: Function<T, R>,
    T: Clone,
{
    #[inline]
    fn produce(&self) -> R {
        self.function.apply(self.arguments.0.clone())
    }
}

impl<F, T, U, R> Supplier<R> for BindAll<F, (T, U)>
where
    F: BiFunction<T, U, R>,
    T: Clone,
    U: Clone,
{
    #[inline]
    fn produce(&self) -> R {
        let (left, right) = &self.arguments;
        self.function.apply(left.clone(), right.clone())
    }
}

impl<F, T, U, V, R> Supplier<R> for BindAll<F, (T, U, V)>
where
    F: TriFunction<T, U, V, R>,
    T: Clone,
    U: Clone,
    V: Clone,
{
    #[inline]
    fn produce(&self) -> R {
        let (left, middle, right) = &self.arguments;
        self.function
            .apply(left.clone(), middle.clone(), right.clone())
    }
}

/// A contract with its first argument bound.
#[derive(Clone, Copy)]
pub struct BindLeft<F, T> {
    function: F,
    left: T,
}

impl<F, T> BindLeft<F, T> {
    pub(crate) const fn new(function: F, left: T) -> Self {
        Self { function, left }
    }
}

impl<F, T, U, R> Function<U, R> for BindLeft<F, T>
where
    F: BiFunction<T, U, R>,
    T: Clone,
{
    #[inline]
    fn apply(&self, right: U) -> R {
        self.function.apply(self.left.clone(), right)
    }
}

impl<F, T, U, V, R> BiFunction<U, V, R> for BindLeft<F, T>
where
    F: TriFunction<T, U, V, R>,
    T: Clone,
{
    #[inline]
    fn apply(&self, middle: U, right: V) -> R {
        self.function.apply(self.left.clone(), middle, right)
    }
}

/// A ternary contract with its middle argument bound.
#[derive(Clone, Copy)]
pub struct BindMiddle<F, U> {
    function: F,
    middle: U,
}

impl<F, U> BindMiddle<F, U> {
    pub(crate) const fn new(function: F, middle: U) -> Self {
        Self { function, middle }
    }
}

impl<F, T, U, V, R> BiFunction<T, V, R> for BindMiddle<F, U>
where
    F: TriFunction<T, U, V, R>,
    U: Clone,
{
    #[inline]
    fn apply(&self, left: T, right: V) -> R {
        self.function.apply(left, self.middle.clone(), right)
    }
}

/// A contract with its last argument bound.
#[derive(Clone, Copy)]
pub struct BindRight<F, V> {
    function: F,
    right: V,
}

impl<F, V> BindRight<F, V> {
    pub(crate) const fn new(function: F, right: V) -> Self {
        Self { function, right }
    }
}

impl<F, T, U, R> Function<T, R> for BindRight<F, U>
where
    F: BiFunction<T, U, R>,
    U: Clone,
{
    #[inline]
    fn apply(&self, left: T) -> R {
        self.function.apply(left, self.right.clone())
    }
}

impl<F, T, U, V, R> BiFunction<T, U, R> for BindRight<F, V>
where
    F: TriFunction<T, U, V, R>,
    V: Clone,
{
    #[inline]
    fn apply(&self, left: T, middle: U) -> R {
        self.function.apply(left, middle, self.right.clone())
    }
}

/// A ternary contract with its first two arguments bound.
#[derive(Clone, Copy)]
pub struct BindLeftMiddle<F, T, U> {
    function: F,
    left: T,
    middle: U,
}

impl<F, T, U> BindLeftMiddle<F, T, U> {
    pub(crate) const fn new(function: F, left: T, middle: U) -> Self {
        Self {
            function,
            left,
            middle,
        }
    }
}

impl<F, T, U, V, R> Function<V, R> for BindLeftMiddle<F, T, U>
where
    F: TriFunction<T, U, V, R>,
    T: Clone,
    U: Clone,
{
    #[inline]
    fn apply(&self, right: V) -> R {
        self.function
            .apply(self.left.clone(), self.middle.clone(), right)
    }
}

/// A ternary contract with its outer arguments bound.
#[derive(Clone, Copy)]
pub struct BindLeftRight<F, T, V> {
    function: F,
    left: T,
    right: V,
}

impl<F, T, V> BindLeftRight<F, T, V> {
    pub(crate) const fn new(function: F, left: T, right: V) -> Self {
        Self {
            function,
            left,
            right,
        }
    }
}

impl<F, T, U, V, R> Function<U, R> for BindLeftRight<F, T, V>
where
    F: TriFunction<T, U, V, R>,
    T: Clone,
    V: Clone,
{
    #[inline]
    fn apply(&self, middle: U) -> R {
        self.function
            .apply(self.left.clone(), middle, self.right.clone())
    }
}

/// A ternary contract with its last two arguments bound.
#[derive(Clone, Copy)]
pub struct BindMiddleRight<F, U, V> {
    function: F,
    middle: U,
    right: V,
}

impl<F, U, V> BindMiddleRight<F, U, V> {
    pub(crate) const fn new(function: F, middle: U, right: V) -> Self {
        Self {
            function,
            middle,
            right,
        }
    }
}

impl<F, T, U, V, R> Function<T, R> for BindMiddleRight<F, U, V>
where
    F: TriFunction<T, U, V, R>,
    U: Clone,
    V: Clone,
{
    #[inline]
    fn apply(&self, left: T) -> R {
        self.function
            .apply(left, self.middle.clone(), self.right.clone())
    }
}
