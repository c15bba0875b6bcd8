//! The composition algebra.
//!
//! This module holds the adapters returned by the composition methods of
//! every contract, together with a handful of combinators and macros for
//! composing contracts in a point-free style.
//!
//! # Overview
//!
//! Each adapter implements every contract shape it can stand for. A
//! [`Map`] built from a [`Supplier`](crate::supplier::Supplier) is a
//! supplier, one built from a [`BiFunction`](crate::function::BiFunction) is a
//! bi-function, and so on. The output type then decides which sub-contract
//! applies: a `Map` whose functor returns `bool` is a predicate, a
//! [`Consume`] is a consumer or an action.
//!
//! - [`Map`]: output-side composition, `functor(source(args))`
//! - [`Consume`]: output-side composition into a consumer
//! - [`AndThen`]: sequential composition of actions and consumers
//! - [`AndThenMut`]: sequential composition of consumers sharing a `&mut` borrow
//! - [`BindAll`], [`BindLeft`], [`BindMiddle`], [`BindRight`],
//!   [`BindLeftMiddle`], [`BindLeftRight`], [`BindMiddleRight`]: partial
//!   application
//! - [`Flip`]: argument swapping for bi-functions
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a bi-function
//!
//! # Macros
//!
//! - [`chain!`](crate::chain): `chain!(f, g, h)` is `f.map(g).map(h)`
//! - [`pipe!`](crate::pipe): `pipe!(x, f, g)` is `g.apply(f.apply(x))`
//!
//! # Examples
//!
//! ```
//! use fn_contracts::chain;
//! use fn_contracts::prelude::*;
//!
//! let add = |left: i32, right: i32| left + right;
//! let describe = chain!(add, |sum: i32| sum * 2, |doubled: i32| format!("{doubled}"));
//!
//! assert_eq!(describe.apply(3, 4), "14");
//! ```
//!
//! # Laws
//!
//! ## Map Laws
//!
//! - **Identity**: `f.map(identity) == f`
//! - **Composition**: `f.map(g).map(h) == f.map(g.map(h))`
//! - **Order**: `f.map(g)` computes `f` first and feeds its result to `g`
//!
//! ## Partial Application Laws
//!
//! - **Commutes with map**: `f.map(g).apply_partial(x) == f.apply_partial(x).map(g)`
//! - **Eager capture**: bound values are moved into the adapter when it is built
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

mod chain_macro;
mod map;
mod partial;
mod pipe_macro;
mod sequence;
mod utils;

pub use map::{Consume, Map};
pub use partial::{
    BindAll, BindLeft, BindLeftMiddle, BindLeftRight, BindMiddle, BindMiddleRight, BindRight,
};
pub use sequence::{AndThen, AndThenMut};
pub use utils::{Flip, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::chain;
pub use crate::pipe;

// Adapters are Send, Sync and Copy exactly when their stored parts are; the
// intermediate output type never matters.
static_assertions::assert_impl_all!(Map<fn(i32) -> i32, fn(i32) -> i32, std::rc::Rc<i32>>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Map<std::rc::Rc<i32>, fn(i32) -> i32, i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(BindLeft<fn(i32, i32) -> i32, i32>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(BindLeft<fn(String, i32) -> i32, String>: Copy);
static_assertions::assert_impl_all!(AndThen<fn(), fn()>: Send, Sync, Copy);
static_assertions::assert_impl_all!(AndThenMut<fn(&mut u8), fn(&mut u8)>: Send, Sync, Copy);
