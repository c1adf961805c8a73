//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which chains functions
//! from left to right into a single new function.

/// Composes functions from left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, that is,
/// `thread!(x, f, g, h)`. The order matches
/// [`compose`](crate::compose::compose) and [`thread`](crate::compose::thread).
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Consistency with thread**: `compose!(f, g)(x) == thread!(x, f, g)`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| g(f(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Type Requirements
///
/// All functions must implement the [`Fn`] trait. The output type of each
/// function must match the input type of the next one.
///
/// # Examples
///
/// ```
/// use muse::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn triple(x: i32) -> i32 { x * 3 }
///
/// // compose!(f, g)(x) = g(f(x)) = triple(add_one(1)) = 6
/// let composed = compose!(add_one, triple);
/// assert_eq!(composed(1), 6);
/// assert_eq!(composed(2), 9);
/// ```
///
/// ## Type conversion
///
/// ```
/// use muse::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digits = compose!(to_string, get_length);
/// assert_eq!(digits(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: returned as-is
    ($function:expr $(,)?) => {
        $function
    };

    // Two functions: compose!(f, g)(x) = g(f(x))
    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // Three or more functions: compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::compose!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
