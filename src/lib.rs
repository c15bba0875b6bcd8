//! # fn-contracts
//!
//! Composable functional contracts for Rust.
//!
//! ## Overview
//!
//! A contract is a single-method behavioural trait. Every closure and
//! function item with a matching shape implements the corresponding
//! contract, and every contract carries provided methods that build new
//! contracts from existing ones without running anything early:
//!
//! - **Suppliers**: [`Supplier`](supplier::Supplier) produces a value,
//!   [`Action`](supplier::Action) runs for effect
//! - **Consumers**: [`Consumer`](consumer::Consumer),
//!   [`BiConsumer`](consumer::BiConsumer), [`TriConsumer`](consumer::TriConsumer)
//! - **Functions**: [`Function`](function::Function),
//!   [`BiFunction`](function::BiFunction), [`TriFunction`](function::TriFunction)
//! - **Predicates**: [`Predicate`](predicate::Predicate),
//!   [`BiPredicate`](predicate::BiPredicate), [`TriPredicate`](predicate::TriPredicate)
//! - **Operators**: [`UnaryOperator`](operator::UnaryOperator) (with bounded
//!   recursion), [`BinaryOperator`](operator::BinaryOperator),
//!   [`TernaryOperator`](operator::TernaryOperator)
//!
//! Composition methods (`map`, `consume`, `and_then`, `apply_partial_*`,
//! `recursive*`) return the adapters in [`compose`], which are contracts
//! themselves. The shape of a composed contract follows from its output:
//! a composition producing `bool` is a predicate, one producing `()` is a
//! consumer or an action.
//!
//! Combinator methods take their collaborators through contract bounds,
//! so closure parameters passed to them need explicit type annotations.
//!
//! ## Feature Flags
//!
//! - `numeric`: the [`Numeric`](numeric::Numeric) trait, arithmetic helpers and `map_to_numeric`
//! - `fallible`: contracts returning `Result` with short-circuiting composition
//! - `tracing`: `traced(name)` adapters emitting `tracing` events
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fn_contracts::prelude::*;
//!
//! let add = |left: i32, right: i32| left + right;
//! let add_ten = add.apply_partial_left(10);
//! let is_positive = add_ten.map(|value: i32| value > 0);
//!
//! assert!(is_positive.test(-5));
//! assert!(!is_positive.negate().test(-5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the contract traits, which is all that is needed to call
/// their methods. Adapters and constructor functions stay in their modules.
///
/// # Usage
///
/// ```rust
/// use fn_contracts::prelude::*;
/// ```
pub mod prelude {
    pub use crate::consumer::{BiConsumer, Consumer, TriConsumer};
    pub use crate::function::{BiFunction, Function, TriFunction};
    pub use crate::operator::{BinaryOperator, RecursionPolicy, TernaryOperator, UnaryOperator};
    pub use crate::predicate::{BiPredicate, Predicate, TriPredicate};
    pub use crate::supplier::{Action, Supplier};

    #[cfg(feature = "numeric")]
    pub use crate::numeric::Numeric;

    #[cfg(feature = "fallible")]
    pub use crate::fallible::{TryConsumer, TryFunction, TrySupplier};
}

mod macros;

pub mod compose;
pub mod consumer;
pub mod function;
pub mod operator;
pub mod predicate;
pub mod supplier;

#[cfg(feature = "numeric")]
pub mod numeric;

#[cfg(feature = "fallible")]
pub mod fallible;

#[cfg(feature = "tracing")]
pub mod trace;
