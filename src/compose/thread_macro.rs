//! The `thread!` macro for left-to-right function application.
//!
//! This module provides the [`thread!`] macro which passes a value through
//! a fixed list of functions, in the order they are written.

/// Threads a value through a series of functions from left to right.
///
/// `thread!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// This is the compile-time form of [`thread`](crate::compose::thread):
/// each function may have a different type, and the list must hold at
/// least one function (an empty list does not compile).
///
/// # Syntax
///
/// - `thread!(x, f)` - Returns `f(x)`
/// - `thread!(x, f, g)` - Returns `g(f(x))`
/// - `thread!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once.
///
/// # Examples
///
/// ```
/// use muse::thread;
///
/// assert_eq!(thread!(1, |x| x + 1, |x| x * 3), 6);
/// ```
///
/// ## Type conversion through the thread
///
/// ```
/// use muse::thread;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// assert_eq!(thread!(12345, to_string, get_length), 5);
/// ```
#[macro_export]
macro_rules! thread {
    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::thread!($function($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_thread_single() {
        let double = |x: i32| x * 2;
        assert_eq!(thread!(5, double), 10);
    }

    #[test]
    fn test_thread_three() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        assert_eq!(thread!(3, square, double, add_one), 19);
    }

    #[test]
    fn test_thread_with_consuming_closure() {
        let suffix = String::from("?");
        let result = thread!(String::from("why"), move |text: String| text + &suffix);
        assert_eq!(result, "why?");
    }
}
