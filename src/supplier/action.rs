//! Zero-argument, zero-result contracts.

use super::Supplier;
use crate::compose::AndThen;

/// A contract run purely for its effect.
///
/// `Action` is the name for a [`Supplier<()>`]; it is implemented for every
/// such supplier, including every `Fn()` closure and the action returned
/// by [`Supplier::consume`].
///
/// # Examples
///
/// ```rust
/// use fn_contracts::prelude::*;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// let first = || log.borrow_mut().push("first");
/// let second = || log.borrow_mut().push("second");
///
/// first.and_then(second).loop_for(2).run();
/// assert_eq!(*log.borrow(), vec!["first", "second", "first", "second"]);
/// ```
pub trait Action: Supplier<()> {
    /// Runs the action.
    #[inline]
    fn run(&self) {
        self.produce();
    }

    /// Returns an action that runs `self` and then `next`.
    ///
    /// `next` does not run if `self` panics.
    #[inline]
    fn and_then<B>(self, next: B) -> AndThen<Self, B>
    where
        Self: Sized,
        B: Action,
    {
        AndThen::new(self, next)
    }

    /// Returns an action that runs `self` `times` times per invocation.
    #[inline]
    fn loop_for(self, times: usize) -> LoopFor<Self>
    where
        Self: Sized,
    {
        LoopFor {
            action: self,
            times,
        }
    }

    /// Returns an action that runs `self` for as long as `condition`
    /// produces `true`.
    ///
    /// The condition is checked before every run, so the action may run
    /// zero times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fn_contracts::prelude::*;
    /// use std::cell::Cell;
    ///
    /// let remaining = Cell::new(3);
    /// let tick = || remaining.set(remaining.get() - 1);
    ///
    /// tick.while_true(|| remaining.get() > 0).run();
    /// assert_eq!(remaining.get(), 0);
    /// ```
    #[inline]
    fn while_true<C>(self, condition: C) -> WhileTrue<Self, C>
    where
        Self: Sized,
        C: Supplier<bool>,
    {
        WhileTrue {
            action: self,
            condition,
        }
    }

    /// Returns an action that runs `self` over and over.
    ///
    /// The returned action only ever leaves through a panic raised by
    /// `self`.
    #[inline]
    fn forever(self) -> Forever<Self>
    where
        Self: Sized,
    {
        Forever { action: self }
    }
}

impl<A> Action for A where A: Supplier<()> + ?Sized {}

/// Action returned by [`Action::loop_for`].
#[derive(Clone, Copy)]
pub struct LoopFor<A> {
    action: A,
    times: usize,
}

impl<A: Action> Supplier<()> for LoopFor<A> {
    fn produce(&self) {
        for _ in 0..self.times {
            self.action.run();
        }
    }
}

/// Action returned by [`Action::while_true`].
#[derive(Clone, Copy)]
pub struct WhileTrue<A, C> {
    action: A,
    condition: C,
}

impl<A, C> Supplier<()> for WhileTrue<A, C>
where
    A: Action,
    C: Supplier<bool>,
{
    fn produce(&self) {
        while self.condition.produce() {
            self.action.run();
        }
    }
}

/// Action returned by [`Action::forever`].
#[derive(Clone, Copy)]
pub struct Forever<A> {
    action: A,
}

impl<A: Action> Supplier<()> for Forever<A> {
    fn produce(&self) {
        loop {
            self.action.run();
        }
    }
}
