//! Three-argument transformers.

use super::Function;
use crate::compose::{
    BindAll, BindLeft, BindLeftMiddle, BindLeftRight, BindMiddle, BindMiddleRight, BindRight,
    Consume, Map,
};
use crate::consumer::Consumer;
use crate::predicate::Predicate;

#[cfg(feature = "numeric")]
use crate::numeric::Numeric;

#[cfg(feature = "tracing")]
use crate::trace::Traced;

/// A contract that transforms a `T`, a `U` and a `V` into an `R`.
///
/// Binding one argument leaves a [`BiFunction`](super::BiFunction), binding
/// two leaves a [`Function`], binding all three leaves a
/// [`Supplier`](crate::supplier::Supplier). The free arguments always keep
/// their original relative order.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::prelude::*;
///
/// let clamp = |value: i32, low: i32, high: i32| value.max(low).min(high);
///
/// assert_eq!(clamp.apply(15, 0, 10), 10);
///
/// let into_percent = clamp.apply_partial_middle_right(0, 100);
/// assert_eq!(into_percent.apply(-4), 0);
/// assert_eq!(into_percent.apply(42), 42);
/// ```
pub trait TriFunction<T, U, V, R> {
    /// Applies this function to its three arguments.
    fn apply(&self, left: T, middle: U, right: V) -> R;

    /// Returns a tri-function that applies `self` and then `functor` to the result.
    #[inline]
    fn map<S, G>(self, functor: G) -> Map<Self, G, R>
    where
        Self: Sized,
        G: Function<R, S>,
    {
        Map::new(self, functor)
    }

    /// Returns a tri-predicate that tests the result of `self`.
    #[inline]
    fn map_to_predicate<P>(self, predicate: P) -> Map<Self, P, R>
    where
        Self: Sized,
        P: Predicate<R>,
    {
        Map::new(self, predicate)
    }

    /// Returns a tri-function producing a numeric value computed from the result of `self`.
    #[cfg(feature = "numeric")]
    #[inline]
    fn map_to_numeric<N, G>(self, functor: G) -> Map<Self, G, R>
    where
        Self: Sized,
        N: Numeric,
        G: Function<R, N>,
    {
        Map::new(self, functor)
    }

    /// Returns a tri-consumer that applies `self` and hands the result to `sink`.
    #[inline]
    fn consume<C>(self, sink: C) -> Consume<Self, C, R>
    where
        Self: Sized,
        C: Consumer<R>,
    {
        Consume::new(self, sink)
    }

    /// Binds all three arguments, leaving a [`Supplier`](crate::supplier::Supplier).
    #[inline]
    fn apply_partial(self, left: T, middle: U, right: V) -> BindAll<Self, (T, U, V)>
    where
        Self: Sized,
        T: Clone,
        U: Clone,
        V: Clone,
    {
        BindAll::new(self, (left, middle, right))
    }

    /// Binds the first argument, leaving a bi-function of `(U, V)`.
    #[inline]
    fn apply_partial_left(self, left: T) -> BindLeft<Self, T>
    where
        Self: Sized,
        T: Clone,
    {
        BindLeft::new(self, left)
    }

    /// Binds the second argument, leaving a bi-function of `(T, V)`.
    #[inline]
    fn apply_partial_middle(self, middle: U) -> BindMiddle<Self, U>
    where
        Self: Sized,
        U: Clone,
    {
        BindMiddle::new(self, middle)
    }

    /// Binds the third argument, leaving a bi-function of `(T, U)`.
    #[inline]
    fn apply_partial_right(self, right: V) -> BindRight<Self, V>
    where
        Self: Sized,
        V: Clone,
    {
        BindRight::new(self, right)
    }

    /// Binds the first two arguments, leaving a function of `V`.
    #[inline]
    fn apply_partial_left_middle(self, left: T, middle: U) -> BindLeftMiddle<Self, T, U>
    where
        Self: Sized,
        T: Clone,
        U: Clone,
    {
        BindLeftMiddle::new(self, left, middle)
    }

    /// Binds the outer arguments, leaving a function of `U`.
    #[inline]
    fn apply_partial_left_right(self, left: T, right: V) -> BindLeftRight<Self, T, V>
    where
        Self: Sized,
        T: Clone,
        V: Clone,
    {
        BindLeftRight::new(self, left, right)
    }

    /// Binds the last two arguments, leaving a function of `T`.
    #[inline]
    fn apply_partial_middle_right(self, middle: U, right: V) -> BindMiddleRight<Self, U, V>
    where
        Self: Sized,
        U: Clone,
        V: Clone,
    {
        BindMiddleRight::new(self, middle, right)
    }

    /// Erases the concrete type of this tri-function.
    fn boxed<'a>(self) -> Box<dyn Fn(T, U, V) -> R + 'a>
    where
        Self: Sized + 'a,
        T: 'a,
        U: 'a,
        V: 'a,
        R: 'a,
    {
        Box::new(move |left: T, middle: U, right: V| self.apply(left, middle, right))
    }

    /// Wraps this tri-function so that each call emits a `tracing` event.
    #[cfg(feature = "tracing")]
    #[inline]
    fn traced(self, name: &'static str) -> Traced<Self>
    where
        Self: Sized,
    {
        Traced::new(self, name)
    }
}

impl<T, U, V, R, F> TriFunction<T, U, V, R> for F
where
    F: Fn(T, U, V) -> R + ?Sized,
{
    #[inline]
    fn apply(&self, left: T, middle: U, right: V) -> R {
        self(left, middle, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::BiFunction;

    fn label(first: char, second: char, third: char) -> String {
        [first, second, third].iter().collect()
    }

    #[test]
    fn test_single_bindings_keep_relative_order() {
        assert_eq!(BiFunction::apply(&label.apply_partial_left('a'), 'b', 'c'), "abc");
        assert_eq!(BiFunction::apply(&label.apply_partial_middle('b'), 'a', 'c'), "abc");
        assert_eq!(BiFunction::apply(&label.apply_partial_right('c'), 'a', 'b'), "abc");
    }

    #[test]
    fn test_double_bindings_keep_relative_order() {
        assert_eq!(label.apply_partial_left_middle('a', 'b').apply('c'), "abc");
        assert_eq!(label.apply_partial_left_right('a', 'c').apply('b'), "abc");
        assert_eq!(label.apply_partial_middle_right('b', 'c').apply('a'), "abc");
    }
}
