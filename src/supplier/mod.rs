//! Value producers.
//!
//! This module provides the zero-argument contracts:
//!
//! - [`Supplier`]: produces a value on each call
//! - [`Action`]: a supplier of `()`, run purely for its effect
//!
//! Any `Fn() -> R` is a [`Supplier<R>`], and any supplier of `()` is an
//! [`Action`].
//!
//! # Examples
//!
//! ```rust
//! use fn_contracts::prelude::*;
//! use std::cell::RefCell;
//!
//! let counter = RefCell::new(0);
//! let next = || {
//!     *counter.borrow_mut() += 1;
//!     *counter.borrow()
//! };
//!
//! let doubled = next.map(|value: i32| value * 2);
//! assert_eq!(doubled.produce(), 2);
//! assert_eq!(doubled.produce(), 4);
//! ```
//!
//! # Laws
//!
//! - **Map**: `supplier.map(f).produce() == f(supplier.produce())`, with the
//!   supplier invoked exactly once per call

mod action;

pub use action::{Action, Forever, LoopFor, WhileTrue};

use crate::compose::{Consume, Map};
use crate::consumer::Consumer;
use crate::function::Function;
use crate::predicate::Predicate;

#[cfg(feature = "numeric")]
use crate::numeric::Numeric;

#[cfg(feature = "tracing")]
use crate::trace::Traced;

/// A contract that produces a value of type `R`.
///
/// Calling [`produce`](Supplier::produce) twice may return different
/// values; no purity is assumed. All composition methods are lazy: nothing
/// runs until the composed supplier is itself invoked.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::prelude::*;
///
/// let answer = || 42;
/// assert_eq!(answer.produce(), 42);
///
/// let label = answer.map(|value: i32| format!("answer: {value}"));
/// assert_eq!(label.produce(), "answer: 42");
/// ```
pub trait Supplier<R> {
    /// Produces a value.
    fn produce(&self) -> R;

    /// Returns a supplier that threads each produced value through `functor`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fn_contracts::prelude::*;
    ///
    /// let seven = || 7;
    /// assert_eq!(seven.map(|value: i32| value * 6).produce(), 42);
    /// ```
    #[inline]
    fn map<S, G>(self, functor: G) -> Map<Self, G, R>
    where
        Self: Sized,
        G: Function<R, S>,
    {
        Map::new(self, functor)
    }

    /// Returns a supplier of `bool` that tests each produced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fn_contracts::prelude::*;
    ///
    /// let seven = || 7;
    /// let is_odd = seven.map_to_predicate(|value: i32| value % 2 == 1);
    /// assert!(is_odd.produce());
    /// ```
    #[inline]
    fn map_to_predicate<P>(self, predicate: P) -> Map<Self, P, R>
    where
        Self: Sized,
        P: Predicate<R>,
    {
        Map::new(self, predicate)
    }

    /// Returns a supplier of a numeric type computed from each produced value.
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

    /// Returns an [`Action`] that produces one value and hands it to `sink`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fn_contracts::prelude::*;
    /// use std::cell::RefCell;
    ///
    /// let received = RefCell::new(Vec::new());
    /// let action = (|| "ping").consume(|value: &'static str| received.borrow_mut().push(value));
    ///
    /// action.run();
    /// action.run();
    /// assert_eq!(*received.borrow(), vec!["ping", "ping"]);
    /// ```
    #[inline]
    fn consume<C>(self, sink: C) -> Consume<Self, C, R>
    where
        Self: Sized,
        C: Consumer<R>,
    {
        Consume::new(self, sink)
    }

    /// Erases the concrete type of this supplier.
    fn boxed<'a>(self) -> Box<dyn Fn() -> R + 'a>
    where
        Self: Sized + 'a,
        R: 'a,
    {
        Box::new(move || self.produce())
    }

    /// Wraps this supplier so that each call emits a `tracing` event.
    #[cfg(feature = "tracing")]
    #[inline]
    fn traced(self, name: &'static str) -> Traced<Self>
    where
        Self: Sized,
    {
        Traced::new(self, name)
    }
}

impl<R, F> Supplier<R> for F
where
    F: Fn() -> R + ?Sized,
{
    #[inline]
    fn produce(&self) -> R {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_map_invokes_source_once_per_call() {
        let calls = Cell::new(0);
        let source = || {
            calls.set(calls.get() + 1);
            10
        };

        let mapped = source.map(|value: i32| value + 1).map(|value: i32| value * 2);

        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.produce(), 22);
        assert_eq!(calls.get(), 1);
        assert_eq!(mapped.produce(), 22);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_boxed_supplier_is_still_a_supplier() {
        let boxed = (|| 3).map(|value: i32| value * 3).boxed();
        assert_eq!(boxed.produce(), 9);
        assert_eq!(boxed.map(|value: i32| value + 1).produce(), 10);
    }
}
