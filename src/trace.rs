//! Invocation tracing for contracts.
//!
//! Every contract has a `traced(name)` method when the `tracing` feature is
//! enabled. The returned [`Traced`] adapter emits one `TRACE`-level event
//! per invocation, carrying the contract's name and shape, then forwards
//! the call unchanged. Results and panics pass through untouched; nothing
//! is logged about them.
//!
//! ```rust
//! use fn_contracts::prelude::*;
//!
//! let square = (|value: i32| value * value).traced("square");
//! let is_even = (|value: i32| value % 2 == 0).traced("is_even");
//!
//! // Events are only recorded when a subscriber is installed.
//! assert!(square.map(is_even).test(4));
//! ```

use crate::function::{BiFunction, Function, TriFunction};
use crate::supplier::Supplier;

/// A contract that emits a `tracing` event each time it is invoked.
///
/// Returned by the `traced` method of every contract.
#[derive(Clone, Copy)]
pub struct Traced<C> {
    contract: C,
    name: &'static str,
}

impl<C> Traced<C> {
    pub(crate) const fn new(contract: C, name: &'static str) -> Self {
        Self { contract, name }
    }

    /// Returns the name events are recorded under.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<C, R> Supplier<R> for Traced<C>
where
    C: Supplier<R>,
{
    #[inline]
    fn produce(&self) -> R {
        tracing::trace!(contract = self.name, shape = "supplier", "invoking contract");
        self.contract.produce()
    }
}

impl<C, T, R> Function<T, R> for Traced<C>
where
    C: Function<T, R>,
{
    #[inline]
    fn apply(&self, value: T) -> R {
        tracing::trace!(contract = self.name, shape = "function", "invoking contract");
        self.contract.apply(value)
    }
}

impl<C, T, U, R> BiFunction<T, U, R> for Traced<C>
where
    C: BiFunction<T, U, R>,
{
    #[inline]
    fn apply(&self, left: T, right: U) -> R {
        tracing::trace!(contract = self.name, shape = "bi-function", "invoking contract");
        self.contract.apply(left, right)
    }
}

impl<C, T, U, V, R> TriFunction<T, U, V, R> for Traced<C>
where
    C: TriFunction<T, U, V, R>,
{
    #[inline]
    fn apply(&self, left: T, middle: U, right: V) -> R {
        tracing::trace!(contract = self.name, shape = "tri-function", "invoking contract");
        self.contract.apply(left, middle, right)
    }
}
