//! Two-argument transformers.

use super::Function;
use crate::compose::{BindAll, BindLeft, BindRight, Consume, Flip, Map};
use crate::consumer::Consumer;
use crate::predicate::Predicate;

#[cfg(feature = "numeric")]
use crate::numeric::Numeric;

#[cfg(feature = "tracing")]
use crate::trace::Traced;

/// A contract that transforms a `T` and a `U` into an `R`.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::prelude::*;
///
/// let repeat = |text: &str, times: usize| text.repeat(times);
///
/// assert_eq!(repeat.apply("ab", 3), "ababab");
/// assert_eq!(repeat.apply_partial_right(2).apply("xy"), "xyxy");
/// assert_eq!(repeat.map(|text: String| text.len()).apply("abc", 2), 6);
/// ```
pub trait BiFunction<T, U, R> {
    /// Applies this function to `left` and `right`.
    fn apply(&self, left: T, right: U) -> R;

    /// Returns a bi-function that applies `self` and then `functor` to the result.
    #[inline]
    fn map<S, G>(self, functor: G) -> Map<Self, G, R>
    where
        Self: Sized,
        G: Function<R, S>,
    {
        Map::new(self, functor)
    }

    /// Returns a bi-predicate that tests the result of `self`.
    #[inline]
    fn map_to_predicate<P>(self, predicate: P) -> Map<Self, P, R>
    where
        Self: Sized,
        P: Predicate<R>,
    {
        Map::new(self, predicate)
    }

    /// Returns a bi-function producing a numeric value computed from the result of `self`.
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

    /// Returns a bi-consumer that applies `self` and hands the result to `sink`.
    #[inline]
    fn consume<C>(self, sink: C) -> Consume<Self, C, R>
    where
        Self: Sized,
        C: Consumer<R>,
    {
        Consume::new(self, sink)
    }

    /// Binds both arguments, leaving a [`Supplier`](crate::supplier::Supplier).
    #[inline]
    fn apply_partial(self, left: T, right: U) -> BindAll<Self, (T, U)>
    where
        Self: Sized,
        T: Clone,
        U: Clone,
    {
        BindAll::new(self, (left, right))
    }

    /// Binds the first argument, leaving a [`Function`] of the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fn_contracts::prelude::*;
    ///
    /// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
    /// let from_ten = subtract.apply_partial_left(10);
    ///
    /// assert_eq!(from_ten.apply(3), 7);
    /// ```
    #[inline]
    fn apply_partial_left(self, left: T) -> BindLeft<Self, T>
    where
        Self: Sized,
        T: Clone,
    {
        BindLeft::new(self, left)
    }

    /// Binds the second argument, leaving a [`Function`] of the first.
    #[inline]
    fn apply_partial_right(self, right: U) -> BindRight<Self, U>
    where
        Self: Sized,
        U: Clone,
    {
        BindRight::new(self, right)
    }

    /// Swaps the two arguments.
    ///
    /// ```rust
    /// use fn_contracts::prelude::*;
    ///
    /// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
    /// assert_eq!(subtract.flip().apply(3, 10), 7);
    /// ```
    #[inline]
    fn flip(self) -> Flip<Self>
    where
        Self: Sized,
    {
        crate::compose::flip(self)
    }

    /// Erases the concrete type of this bi-function.
    fn boxed<'a>(self) -> Box<dyn Fn(T, U) -> R + 'a>
    where
        Self: Sized + 'a,
        T: 'a,
        U: 'a,
        R: 'a,
    {
        Box::new(move |left: T, right: U| self.apply(left, right))
    }

    /// Wraps this bi-function so that each call emits a `tracing` event.
    #[cfg(feature = "tracing")]
    #[inline]
    fn traced(self, name: &'static str) -> Traced<Self>
    where
        Self: Sized,
    {
        Traced::new(self, name)
    }
}

impl<T, U, R, F> BiFunction<T, U, R> for F
where
    F: Fn(T, U) -> R + ?Sized,
{
    #[inline]
    fn apply(&self, left: T, right: U) -> R {
        self(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supplier::Supplier;

    #[test]
    fn test_apply_partial_binds_both_arguments() {
        let concat = |left: String, right: String| left + &right;
        let bound = concat.apply_partial(String::from("foo"), String::from("bar"));
        assert_eq!(bound.produce(), "foobar");
        assert_eq!(bound.produce(), "foobar");
    }

    #[test]
    fn test_apply_partial_right_keeps_first_argument_free() {
        let divide = |numerator: i32, denominator: i32| numerator / denominator;
        let halve = divide.apply_partial_right(2);
        assert_eq!(halve.apply(10), 5);
    }

    #[test]
    fn test_boxed_bi_function_is_still_a_bi_function() {
        let multiply = |left: i32, right: i32| left * right;
        let boxed = multiply.boxed();
        assert_eq!(BiFunction::apply(&boxed, 6, 7), 42);
    }
}
