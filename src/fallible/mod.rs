//! Contracts that can fail.
//!
//! A contract returning `Result<T, E>` is also a fallible contract:
//!
//! - [`TrySupplier<T, E>`]: `Fn() -> Result<T, E>`
//! - [`TryFunction<T, R, E>`]: `Fn(T) -> Result<R, E>`
//! - [`TryConsumer<T, E>`]: `Fn(T) -> Result<(), E>`
//!
//! Their composition methods short-circuit on the first `Err`: the
//! downstream step is never invoked after an error, and the error is
//! returned unchanged.
//!
//! # Examples
//!
//! ```rust
//! use fn_contracts::prelude::*;
//!
//! let parse = |text: &str| text.trim().parse::<i32>().map_err(|error| error.to_string());
//! let reciprocal = |value: i32| {
//!     if value == 0 {
//!         Err(String::from("division by zero"))
//!     } else {
//!         Ok(100 / value)
//!     }
//! };
//!
//! let pipeline = parse.and_then(reciprocal).map_ok(|value: i32| value + 1);
//!
//! assert_eq!(pipeline.try_apply(" 20 "), Ok(6));
//! assert_eq!(pipeline.try_apply("0"), Err(String::from("division by zero")));
//! assert!(pipeline.try_apply("twenty").is_err());
//! ```

use std::marker::PhantomData;

use crate::function::Function;
use crate::macros::impl_clone_copy;
use crate::supplier::Supplier;

// =============================================================================
// TrySupplier
// =============================================================================

/// A supplier that may fail.
pub trait TrySupplier<T, E>: Supplier<Result<T, E>> {
    /// Produces a value or an error.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying supplier produces.
    #[inline]
    fn try_produce(&self) -> Result<T, E> {
        Supplier::produce(self)
    }

    /// Feeds a successful value into `next`; an error skips `next`.
    #[inline]
    fn and_then<U, G>(self, next: G) -> TryAndThen<Self, G, T>
    where
        Self: Sized,
        G: TryFunction<T, U, E>,
    {
        TryAndThen::new(self, next)
    }

    /// Transforms a successful value with `functor`.
    #[inline]
    fn map_ok<U, G>(self, functor: G) -> MapOk<Self, G, T>
    where
        Self: Sized,
        G: Function<T, U>,
    {
        MapOk::new(self, functor)
    }

    /// Transforms an error with `functor`.
    #[inline]
    fn map_err<D, G>(self, functor: G) -> MapErr<Self, G, E>
    where
        Self: Sized,
        G: Function<E, D>,
    {
        MapErr::new(self, functor)
    }
}

impl<T, E, S> TrySupplier<T, E> for S where S: Supplier<Result<T, E>> + ?Sized {}

// =============================================================================
// TryFunction
// =============================================================================

/// A function that may fail.
pub trait TryFunction<T, R, E>: Function<T, Result<R, E>> {
    /// Applies this function to `value`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying function produces.
    #[inline]
    fn try_apply(&self, value: T) -> Result<R, E> {
        Function::apply(self, value)
    }

    /// Feeds a successful result into `next`; an error skips `next`.
    #[inline]
    fn and_then<S, G>(self, next: G) -> TryAndThen<Self, G, R>
    where
        Self: Sized,
        G: TryFunction<R, S, E>,
    {
        TryAndThen::new(self, next)
    }

    /// Transforms a successful result with `functor`.
    #[inline]
    fn map_ok<S, G>(self, functor: G) -> MapOk<Self, G, R>
    where
        Self: Sized,
        G: Function<R, S>,
    {
        MapOk::new(self, functor)
    }

    /// Transforms an error with `functor`.
    #[inline]
    fn map_err<D, G>(self, functor: G) -> MapErr<Self, G, E>
    where
        Self: Sized,
        G: Function<E, D>,
    {
        MapErr::new(self, functor)
    }
}

impl<T, R, E, F> TryFunction<T, R, E> for F where F: Function<T, Result<R, E>> + ?Sized {}

// =============================================================================
// TryConsumer
// =============================================================================

/// A consumer that may fail.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
///
/// use fn_contracts::prelude::*;
///
/// let stored = RefCell::new(Vec::new());
/// let validate = |value: i32| if value < 0 { Err("negative") } else { Ok(()) };
/// let store = |value: i32| {
///     stored.borrow_mut().push(value);
///     Ok(())
/// };
///
/// let checked_store = validate.then_accept(store);
///
/// assert_eq!(checked_store.try_accept(3), Ok(()));
/// assert_eq!(checked_store.try_accept(-1), Err("negative"));
/// assert_eq!(*stored.borrow(), vec![3]);
/// ```
pub trait TryConsumer<T, E>: Function<T, Result<(), E>> {
    /// Hands `value` to this consumer.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying consumer produces.
    #[inline]
    fn try_accept(&self, value: T) -> Result<(), E> {
        Function::apply(self, value)
    }

    /// Runs `next` on the same value once `self` has succeeded.
    #[inline]
    fn then_accept<B>(self, next: B) -> ThenAccept<Self, B>
    where
        Self: Sized,
        B: TryConsumer<T, E>,
        T: Clone,
    {
        ThenAccept {
            first: self,
            next,
        }
    }
}

impl<T, E, C> TryConsumer<T, E> for C where C: Function<T, Result<(), E>> + ?Sized {}

// =============================================================================
// Adapters
// =============================================================================

/// Chains two fallible contracts. `R` is the success type in between.
///
/// Returned by [`TrySupplier::and_then`] and [`TryFunction::and_then`].
pub struct TryAndThen<F, G, R> {
    first: F,
    next: G,
    marker: PhantomData<fn() -> R>,
}

impl<F, G, R> TryAndThen<F, G, R> {
    const fn new(first: F, next: G) -> Self {
        Self {
            first,
            next,
            marker: PhantomData,
        }
    }
}

impl_clone_copy!(TryAndThen<F, G, R> { first: F, next: G; marker });

impl<F, G, R, S, E> Supplier<Result<S, E>> for TryAndThen<F, G, R>
where
    F: TrySupplier<R, E>,
    G: TryFunction<R, S, E>,
{
    #[inline]
    fn produce(&self) -> Result<S, E> {
        self.next.try_apply(self.first.try_produce()?)
    }
}

impl<F, G, T, R, S, E> Function<T, Result<S, E>> for TryAndThen<F, G, R>
where
    F: TryFunction<T, R, E>,
    G: TryFunction<R, S, E>,
{
    #[inline]
    fn apply(&self, value: T) -> Result<S, E> {
        self.next.try_apply(self.first.try_apply(value)?)
    }
}

/// Transforms the success value of a fallible contract. `R` is the original success type.
///
/// Returned by [`TrySupplier::map_ok`] and [`TryFunction::map_ok`].
pub struct MapOk<F, G, R> {
    source: F,
    functor: G,
    marker: PhantomData<fn() -> R>,
}

impl<F, G, R> MapOk<F, G, R> {
    const fn new(source: F, functor: G) -> Self {
        Self {
            source,
            functor,
            marker: PhantomData,
        }
    }
}

impl_clone_copy!(MapOk<F, G, R> { source: F, functor: G; marker });

impl<F, G, R, S, E> Supplier<Result<S, E>> for MapOk<F, G, R>
where
    F: TrySupplier<R, E>,
    G: Function<R, S>,
{
    #[inline]
    fn produce(&self) -> Result<S, E> {
        self.source
            .try_produce()
            .map(|value| self.functor.apply(value))
    }
}

impl<F, G, T, R, S, E> Function<T, Result<S, E>> for MapOk<F, G, R>
where
    F: TryFunction<T, R, E>,
    G: Function<R, S>,
{
    #[inline]
    fn apply(&self, value: T) -> Result<S, E> {
        self.source
            .try_apply(value)
            .map(|result| self.functor.apply(result))
    }
}

/// Transforms the error of a fallible contract. `E` is the original error type.
///
/// Returned by [`TrySupplier::map_err`] and [`TryFunction::map_err`].
pub struct MapErr<F, G, E> {
    source: F,
    functor: G,
    marker: PhantomData<fn() -> E>,
}

impl<F, G, E> MapErr<F, G, E> {
    const fn new(source: F, functor: G) -> Self {
        Self {
            source,
            functor,
            marker: PhantomData,
        }
    }
}

impl_clone_copy!(MapErr<F, G, E> { source: F, functor: G; marker });

impl<F, G, T, E, D> Supplier<Result<T, D>> for MapErr<F, G, E>
where
    F: TrySupplier<T, E>,
    G: Function<E, D>,
{
    #[inline]
    fn produce(&self) -> Result<T, D> {
        self.source
            .try_produce()
            .map_err(|error| self.functor.apply(error))
    }
}

impl<F, G, T, R, E, D> Function<T, Result<R, D>> for MapErr<F, G, E>
where
    F: TryFunction<T, R, E>,
    G: Function<E, D>,
{
    #[inline]
    fn apply(&self, value: T) -> Result<R, D> {
        self.source
            .try_apply(value)
            .map_err(|error| self.functor.apply(error))
    }
}

/// Two fallible consumers run in sequence on the same value.
///
/// Returned by [`TryConsumer::then_accept`].
#[derive(Clone, Copy)]
pub struct ThenAccept<A, B> {
    first: A,
    next: B,
}

impl<A, B, T, E> Function<T, Result<(), E>> for ThenAccept<A, B>
where
    A: TryConsumer<T, E>,
    B: TryConsumer<T, E>,
    T: Clone,
{
    #[inline]
    fn apply(&self, value: T) -> Result<(), E> {
        self.first.try_accept(value.clone())?;
        self.next.try_accept(value)
    }
}
