//! Sequential composition of effectful contracts.

use crate::consumer::{BiConsumer, Consumer, TriConsumer};
use crate::function::{BiFunction, Function, TriFunction};
use crate::supplier::{Action, Supplier};

/// Runs one effectful contract after another on the same input.
///
/// Returned by [`Action::and_then`], [`Consumer::and_then`],
/// [`BiConsumer::and_then`] and [`TriConsumer::and_then`]. The second
/// contract only runs once the first has returned; a panic in the first
/// skips it.
///
/// Consumers receive their arguments by value, so the arguments are cloned
/// once for the first consumer.
#[derive(Clone, Copy)]
pub struct AndThen<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndThen<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Supplier<()> for AndThen<A, B>
where
    A: Action,
    B: Action,
{
    #[inline]
    fn produce(&self) {
        self.first.run();
        self.second.run();
    }
}

impl<A, B, T> Function<T, ()> for AndThen<A, B>
where
    A: Consumer<T>,
    B: Consumer<T>,
    T: Clone,
{
    #[inline]
    fn apply(&self, value: T) {
        self.first.accept(value.clone());
        self.second.accept(value);
    }
}

impl<A, B, T, U> BiFunction<T, U, ()> for AndThen<A, B>
where
    A: BiConsumer<T, U>,
    B: BiConsumer<T, U>,
    T: Clone,
    U: Clone,
{
    #[inline]
    fn apply(&self, left: T, right: U) {
        self.first.accept(left.clone(), right.clone());
        self.second.accept(left, right);
    }
}

impl<A, B, T, U, V> TriFunction<T, U, V, ()> for AndThen<A, B>
where
    A: TriConsumer<T, U, V>,
    B: TriConsumer<T, U, V>,
    T: Clone,
    U: Clone,
    V: Clone,
{
    #[inline]
    fn apply(&self, left: T, middle: U, right: V) {
        self.first
            .accept(left.clone(), middle.clone(), right.clone());
        self.second.accept(left, middle, right);
    }
}

/// Runs one consumer after another on the same mutable borrow.
///
/// Returned by [`Consumer::and_then_mut`]. The first consumer gets a
/// reborrow, so its writes are visible to the second.
#[derive(Clone, Copy)]
pub struct AndThenMut<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndThenMut<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<'a, A, B, X> Function<&'a mut X, ()> for AndThenMut<A, B>
where
    A: for<'b> Consumer<&'b mut X>,
    B: for<'b> Consumer<&'b mut X>,
    X: ?Sized,
{
    #[inline]
    fn apply(&self, value: &'a mut X) {
        self.first.accept(&mut *value);
        self.second.accept(value);
    }
}
