//! The `pipe!` macro for applying contracts in sequence.
//!
//! This module provides the [`pipe!`] macro which applies unary contracts
//! from left to right, mirroring data flow through a pipeline.

/// Pipes a value through unary contracts from left to right.
///
/// `pipe!(x, f, g, h)` evaluates `h.apply(g.apply(f.apply(x)))`. Each step
/// may be a closure, a function item or any adapter implementing
/// [`Function`](crate::function::Function).
///
/// # Examples
///
/// ```
/// use fn_contracts::pipe;
/// use fn_contracts::prelude::*;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11); // add_one(double(5)) = 11
///
/// let add = |left: i32, right: i32| left + right;
/// let result = pipe!(5, add.apply_partial_left(10), double);
/// assert_eq!(result, 30);
/// ```
///
/// ## Equivalence with chain
///
/// ```
/// use fn_contracts::{chain, pipe};
/// use fn_contracts::prelude::*;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let pipe_result = pipe!(10, f, g, h);
/// let chain_result = chain!(f, g, h).apply(10);
///
/// assert_eq!(pipe_result, chain_result);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Apply the first contract, then the rest recursively
    ($value:expr, $function:expr $(, $remaining_functions:expr)* $(,)?) => {
        $crate::pipe!(
            $crate::function::Function::apply(&$function, $value)
            $(, $remaining_functions)*
        )
    };
}
