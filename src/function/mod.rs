//! Value transformers.
//!
//! This module provides the contracts that turn arguments into a result:
//!
//! - [`Function`]: one argument
//! - [`BiFunction`]: two arguments
//! - [`TriFunction`]: three arguments
//!
//! Every `Fn(T) -> R`, `Fn(T, U) -> R` and `Fn(T, U, V) -> R` implements the
//! matching contract.
//!
//! # Narrowing
//!
//! A transformer whose output is `bool` is also a
//! [`Predicate`](crate::predicate::Predicate), one whose output is `()` is a
//! [`Consumer`](crate::consumer::Consumer), and one whose output type equals
//! its input type is a [`UnaryOperator`](crate::operator::UnaryOperator).
//! Composition therefore lands on the narrowest contract its output allows
//! without any extra conversion:
//!
//! ```rust
//! use fn_contracts::prelude::*;
//!
//! let length = |text: &str| text.len();
//! let is_short = length.map(|size: usize| size < 4);
//!
//! // `is_short` is a Predicate<&str>, so it has `negate`.
//! assert!(is_short.negate().test("longer"));
//! ```
//!
//! # Laws
//!
//! - **Identity**: `identity.apply(x) == x`
//! - **Order**: `f.map(g).apply(x) == g.apply(f.apply(x))`
//! - **Partial application**: `f.apply_partial(x).produce() == f.apply(x)`

mod bi_function;
mod tri_function;

pub use bi_function::BiFunction;
pub use tri_function::TriFunction;

use crate::compose::{BindAll, Consume, Map};
use crate::consumer::Consumer;
use crate::predicate::Predicate;

#[cfg(feature = "numeric")]
use crate::numeric::Numeric;

#[cfg(feature = "tracing")]
use crate::trace::Traced;

/// A contract that transforms a `T` into an `R`.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::prelude::*;
///
/// let parse = |text: &str| text.parse::<i32>().unwrap_or_default();
/// let parse_and_double = parse.map(|value: i32| value * 2);
///
/// assert_eq!(parse_and_double.apply("21"), 42);
/// assert_eq!(parse_and_double.apply("oops"), 0);
/// ```
pub trait Function<T, R> {
    /// Applies this function to `value`.
    fn apply(&self, value: T) -> R;

    /// Returns a function that applies `self` and then `functor` to the result.
    #[inline]
    fn map<S, G>(self, functor: G) -> Map<Self, G, R>
    where
        Self: Sized,
        G: Function<R, S>,
    {
        Map::new(self, functor)
    }

    /// Returns a predicate that tests the result of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fn_contracts::prelude::*;
    ///
    /// let square = |value: i32| value * value;
    /// let square_is_large = square.map_to_predicate(|value: i32| value > 50);
    ///
    /// assert!(square_is_large.test(8));
    /// assert!(!square_is_large.test(7));
    /// ```
    #[inline]
    fn map_to_predicate<P>(self, predicate: P) -> Map<Self, P, R>
    where
        Self: Sized,
        P: Predicate<R>,
    {
        Map::new(self, predicate)
    }

    /// Returns a function producing a numeric value computed from the result of `self`.
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

    /// Returns a consumer that applies `self` and hands the result to `sink`.
    #[inline]
    fn consume<C>(self, sink: C) -> Consume<Self, C, R>
    where
        Self: Sized,
        C: Consumer<R>,
    {
        Consume::new(self, sink)
    }

    /// Binds the argument, leaving a [`Supplier`](crate::supplier::Supplier).
    ///
    /// `value` is captured now and cloned into `self` on every call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fn_contracts::prelude::*;
    ///
    /// let shout = |text: String| text.to_uppercase();
    /// let greeting = shout.apply_partial(String::from("hello"));
    ///
    /// assert_eq!(greeting.produce(), "HELLO");
    /// ```
    #[inline]
    fn apply_partial(self, value: T) -> BindAll<Self, (T,)>
    where
        Self: Sized,
        T: Clone,
    {
        BindAll::new(self, (value,))
    }

    /// Erases the concrete type of this function.
    fn boxed<'a>(self) -> Box<dyn Fn(T) -> R + 'a>
    where
        Self: Sized + 'a,
        T: 'a,
        R: 'a,
    {
        Box::new(move |value: T| self.apply(value))
    }

    /// Wraps this function so that each call emits a `tracing` event.
    #[cfg(feature = "tracing")]
    #[inline]
    fn traced(self, name: &'static str) -> Traced<Self>
    where
        Self: Sized,
    {
        Traced::new(self, name)
    }
}

impl<T, R, F> Function<T, R> for F
where
    F: Fn(T) -> R + ?Sized,
{
    #[inline]
    fn apply(&self, value: T) -> R {
        self(value)
    }
}
