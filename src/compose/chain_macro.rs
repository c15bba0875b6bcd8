//! The `chain!` macro for contract composition.
//!
//! This module provides the [`chain!`] macro which composes contracts
//! from left to right, the same way repeated `map` calls read.

/// Composes contracts from left to right.
///
/// `chain!(f, g, h)` builds the same contract as `f.map(g).map(h)`: `f`
/// runs first, its output feeds `g`, whose output feeds `h`. The first
/// contract may have any shape (supplier, function, bi-function,
/// tri-function); the remaining ones are unary functions.
///
/// The macro expands to [`Map`](crate::compose::Map) constructors, so no
/// trait needs to be in scope at the call site.
///
/// # Examples
///
/// ```
/// use fn_contracts::chain;
/// use fn_contracts::prelude::*;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// // chain!(f, g)(x) = g(f(x))
/// let composed = chain!(add_one, double);
/// assert_eq!(composed.apply(5), 12);
/// ```
///
/// ## Starting from a supplier
///
/// ```
/// use fn_contracts::chain;
/// use fn_contracts::prelude::*;
///
/// let seed = || 3;
/// let square = |x: i32| x * x;
/// let describe = |x: i32| format!("{x}");
///
/// assert_eq!(chain!(seed, square, describe).produce(), "9");
/// ```
#[macro_export]
macro_rules! chain {
    // Single contract: returned as-is
    ($contract:expr $(,)?) => {
        $contract
    };

    // chain!(f, g, h, ...) = chain!(f.map(g), h, ...)
    ($contract:expr, $functor:expr $(, $remaining_functors:expr)* $(,)?) => {
        $crate::chain!($crate::compose::Map::new($contract, $functor) $(, $remaining_functors)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::function::Function;

    #[test]
    fn test_chain_single() {
        let double = |x: i32| x * 2;
        let composed = chain!(double);
        assert_eq!(composed(5), 10);
    }

    #[test]
    fn test_chain_three() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        // square(double(add_one(3))) = square(8) = 64
        let composed = chain!(add_one, double, square);
        assert_eq!(composed.apply(3), 64);
    }
}
