//! Value sinks.
//!
//! A consumer takes its arguments and returns nothing; it exists for its
//! side effects. Every function contract with `()` output is a consumer:
//!
//! - [`Consumer`]: `Fn(T)`
//! - [`BiConsumer`]: `Fn(T, U)`
//! - [`TriConsumer`]: `Fn(T, U, V)`
//!
//! Chaining with `and_then` runs the consumers in order on the same
//! arguments. Arguments are passed by value, so chaining requires them to
//! be [`Clone`]; shared references always are. Consumers of a `&mut`
//! borrow chain with [`Consumer::and_then_mut`] instead, which reborrows
//! for the first consumer.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//!
//! use fn_contracts::prelude::*;
//!
//! let log = RefCell::new(Vec::new());
//! let record = |value: i32| log.borrow_mut().push(value);
//! let record_doubled = |value: i32| log.borrow_mut().push(value * 2);
//!
//! record.and_then(record_doubled).accept(4);
//!
//! assert_eq!(*log.borrow(), vec![4, 8]);
//! ```

use crate::compose::{AndThen, AndThenMut};
use crate::function::{BiFunction, Function, TriFunction};

/// A contract that accepts a `T` and returns nothing.
pub trait Consumer<T>: Function<T, ()> {
    /// Hands `value` to this consumer.
    #[inline]
    fn accept(&self, value: T) {
        Function::apply(self, value);
    }

    /// Returns a consumer that runs `self` and then `next` on the same value.
    ///
    /// `next` only runs once `self` has returned.
    #[inline]
    fn and_then<B>(self, next: B) -> AndThen<Self, B>
    where
        Self: Sized,
        B: Consumer<T>,
        T: Clone,
    {
        AndThen::new(self, next)
    }

    /// Returns a consumer that runs `self` and then `next` on the same
    /// mutable borrow.
    ///
    /// ```rust
    /// use fn_contracts::prelude::*;
    ///
    /// let push = |values: &mut Vec<i32>| values.push(3);
    /// let sort = |values: &mut Vec<i32>| values.sort_unstable();
    ///
    /// let mut values = vec![5, 1];
    /// push.and_then_mut(sort).accept(&mut values);
    ///
    /// assert_eq!(values, vec![1, 3, 5]);
    /// ```
    #[inline]
    fn and_then_mut<X, B>(self, next: B) -> AndThenMut<Self, B>
    where
        Self: Sized + for<'a> Consumer<&'a mut X>,
        B: for<'a> Consumer<&'a mut X>,
        X: ?Sized,
    {
        AndThenMut::new(self, next)
    }
}

impl<T, C> Consumer<T> for C where C: Function<T, ()> + ?Sized {}

/// A contract that accepts a `T` and a `U` and returns nothing.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
///
/// use fn_contracts::prelude::*;
///
/// let entries = RefCell::new(Vec::new());
/// let put = |key: &'static str, value: i32| entries.borrow_mut().push(format!("{key}={value}"));
/// let touch = |key: &'static str| entries.borrow_mut().push(format!("touched {key}"));
///
/// put.and_then_left(touch).accept("answer", 42);
///
/// assert_eq!(*entries.borrow(), vec!["answer=42", "touched answer"]);
/// ```
pub trait BiConsumer<T, U>: BiFunction<T, U, ()> {
    /// Hands both values to this consumer.
    #[inline]
    fn accept(&self, left: T, right: U) {
        BiFunction::apply(self, left, right);
    }

    /// Returns a bi-consumer that runs `self` and then `next` on the same values.
    #[inline]
    fn and_then<B>(self, next: B) -> AndThen<Self, B>
    where
        Self: Sized,
        B: BiConsumer<T, U>,
        T: Clone,
        U: Clone,
    {
        AndThen::new(self, next)
    }

    /// Returns a bi-consumer that runs `self` and then hands the first value to `next`.
    #[inline]
    fn and_then_left<B>(self, next: B) -> AndThenLeft<Self, B>
    where
        Self: Sized,
        B: Consumer<T>,
        T: Clone,
    {
        AndThenLeft { first: self, next }
    }

    /// Returns a bi-consumer that runs `self` and then hands the second value to `next`.
    #[inline]
    fn and_then_right<B>(self, next: B) -> AndThenRight<Self, B>
    where
        Self: Sized,
        B: Consumer<U>,
        U: Clone,
    {
        AndThenRight { first: self, next }
    }
}

impl<T, U, C> BiConsumer<T, U> for C where C: BiFunction<T, U, ()> + ?Sized {}

/// A contract that accepts three values and returns nothing.
pub trait TriConsumer<T, U, V>: TriFunction<T, U, V, ()> {
    /// Hands all three values to this consumer.
    #[inline]
    fn accept(&self, left: T, middle: U, right: V) {
        TriFunction::apply(self, left, middle, right);
    }

    /// Returns a tri-consumer that runs `self` and then `next` on the same values.
    #[inline]
    fn and_then<B>(self, next: B) -> AndThen<Self, B>
    where
        Self: Sized,
        B: TriConsumer<T, U, V>,
        T: Clone,
        U: Clone,
        V: Clone,
    {
        AndThen::new(self, next)
    }
}

impl<T, U, V, C> TriConsumer<T, U, V> for C where C: TriFunction<T, U, V, ()> + ?Sized {}

/// A bi-consumer followed by a consumer of its first argument.
///
/// Returned by [`BiConsumer::and_then_left`].
#[derive(Clone, Copy)]
pub struct AndThenLeft<A, B> {
    first: A,
    next: B,
}

impl<A, B, T, U> BiFunction<T, U, ()> for AndThenLeft<A, B>
where
    A: BiConsumer<T, U>,
    B: Consumer<T>,
    T: Clone,
{
    #[inline]
    fn apply(&self, left: T, right: U) {
        self.first.accept(left.clone(), right);
        self.next.accept(left);
    }
}

/// A bi-consumer followed by a consumer of its second argument.
///
/// Returned by [`BiConsumer::and_then_right`].
#[derive(Clone, Copy)]
pub struct AndThenRight<A, B> {
    first: A,
    next: B,
}

impl<A, B, T, U> BiFunction<T, U, ()> for AndThenRight<A, B>
where
    A: BiConsumer<T, U>,
    B: Consumer<U>,
    U: Clone,
{
    #[inline]
    fn apply(&self, left: T, right: U) {
        self.first.accept(left, right.clone());
        self.next.accept(right);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_and_then_right_receives_second_argument() {
        let log = RefCell::new(Vec::new());
        let both = |left: i32, right: i32| log.borrow_mut().push(left + right);
        let only_right = |right: i32| log.borrow_mut().push(right);

        both.and_then_right(only_right).accept(1, 10);

        assert_eq!(*log.borrow(), vec![11, 10]);
    }

    #[test]
    fn test_and_then_mut_second_sees_first_write() {
        let append = |text: &mut String| text.push('!');
        let shout = |text: &mut String| text.make_ascii_uppercase();

        let mut text = String::from("hey");
        append.and_then_mut(shout).accept(&mut text);

        assert_eq!(text, "HEY!");
    }

    #[test]
    fn test_tri_consumer_and_then_runs_in_order() {
        let log = RefCell::new(String::new());
        let first = |a: char, b: char, c: char| log.borrow_mut().extend([a, b, c]);
        let second = |a: char, _: char, _: char| log.borrow_mut().push(a.to_ascii_uppercase());

        first.and_then(second).accept('x', 'y', 'z');

        assert_eq!(*log.borrow(), "xyzX");
    }
}
