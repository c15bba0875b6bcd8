//! Output-side composition adapters.

use std::marker::PhantomData;

use crate::consumer::Consumer;
use crate::function::{BiFunction, Function, TriFunction};
use crate::macros::impl_clone_copy;
use crate::supplier::Supplier;

/// Threads the output of a contract through a functor.
///
/// Returned by the `map`, `map_to_predicate` and `map_to_numeric` methods
/// of every contract. `R` is the output type of the source contract.
///
/// # Examples
///
/// ```rust
/// use fn_contracts::compose::Map;
/// use fn_contracts::prelude::*;
///
/// let length = Map::new(|text: &str| text.trim().to_string(), |trimmed: String| trimmed.len());
/// assert_eq!(length.apply("  four "), 4);
/// ```
pub struct Map<F, G, R> {
    source: F,
    functor: G,
    marker: PhantomData<fn() -> R>,
}

impl<F, G, R> Map<F, G, R> {
    /// Composes `source` with `functor`.
    ///
    /// Nothing is invoked until the returned contract is.
    #[inline]
    pub const fn new(source: F, functor: G) -> Self {
        Self {
            source,
            functor,
            marker: PhantomData,
        }
    }
}

impl_clone_copy!(Map<F, G, R> { source: F, functor: G; marker });

impl<F, G, R, S> Supplier<S> for Map<F, G, R>
where
    F: Supplier<R>,
    G: Function<R, S>,
{
    #[inline]
    fn produce(&self) -> S {
        self.functor.apply(self.source.produce())
    }
}

impl<F, G, T, R, S> Function<T, S> for Map<F, G, R>
where
    F: Function<T, R>,
    G: Function<R, S>,
{
    #[inline]
    fn apply(&self, value: T) -> S {
        self.functor.apply(self.source.apply(value))
    }
}

impl<F, G, T, U, R, S> BiFunction<T, U, S> for Map<F, G, R>
where
    F: BiFunction<T, U, R>,
    G: Function<R, S>,
{
    #[inline]
    fn apply(&self, left: T, right: U) -> S {
        self.functor.apply(self.source.apply(left, right))
    }
}

impl<F, G, T, U, V, R, S> TriFunction<T, U, V, S> for Map<F, G, R>
where
    F: TriFunction<T, U, V, R>,
    G: Function<R, S>,
{
    #[inline]
    fn apply(&self, left: T, middle: U, right: V) -> S {
        self.functor.apply(self.source.apply(left, middle, right))
    }
}

/// Hands the output of a contract to a consumer.
///
/// Returned by the `consume` method of every contract. The result is an
/// [`Action`](crate::supplier::Action) when the source is a supplier and a
/// consumer of the source's arguments otherwise.
pub struct Consume<F, C, R> {
    source: F,
    sink: C,
    marker: PhantomData<fn() -> R>,
}

impl<F, C, R> Consume<F, C, R> {
    /// Composes `source` with `sink`.
    #[inline]
    pub const fn new(source: F, sink: C) -> Self {
        Self {
            source,
            sink,
            marker: PhantomData,
        }
    }
}

impl_clone_copy!(Consume<F, C, R> { source: F, sink: C; marker });

impl<F, C, R> Supplier<()> for Consume<F, C, R>
where
    F: Supplier<R>,
    C: Consumer<R>,
{
    #[inline]
    fn produce(&self) {
        self.sink.accept(self.source.produce());
    }
}

impl<F, C, T, R> Function<T, ()> for Consume<F, C, R>
where
    F: Function<T, R>,
    C: Consumer<R>,
{
    #[inline]
    fn apply(&self, value: T) {
        self.sink.accept(self.source.apply(value));
    }
}

impl<F, C, T, U, R> BiFunction<T, U, ()> for Consume<F, C, R>
where
    F: BiFunction<T, U, R>,
    C: Consumer<R>,
{
    #[inline]
    fn apply(&self, left: T, right: U) {
        self.sink.accept(self.source.apply(left, right));
    }
}

impl<F, C, T, U, V, R> TriFunction<T, U, V, ()> for Consume<F, C, R>
where
    F: TriFunction<T, U, V, R>,
    C: Consumer<R>,
{
    #[inline]
    fn apply(&self, left: T, middle: U, right: V) {
        self.sink.accept(self.source.apply(left, middle, right));
    }
}
