//! The `partial!` macro for partial function application.
//!
//! This module provides the [`partial!`] macro which fixes some arguments of
//! a function while leaving holes for the others.

/// Partially applies arguments to a function.
///
/// Use `__` (double underscore) for each position that should stay open.
/// Every other argument is an expression whose value is fixed. The macro
/// expands to a call to [`partial`](crate::compose::partial), so the result
/// is a [`Partial`](crate::compose::Partial) invoked with `.call(...)`.
///
/// # Syntax
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` fills `b` at call time
/// - `partial!(f, __, value)` fills `a` at call time
/// - `partial!(f, v1, v2)` creates a thunk, called with no values
/// - `partial!(f, __, __)` leaves both open
///
/// Functions of up to six arguments are supported directly; wrap anything
/// larger in a [`Variant`](crate::dispatch::Variant).
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] (the partial may be called many times)
/// - All arguments share one type
///
/// # Examples
///
/// ## Basic partial application
///
/// ```
/// use muse::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_three = partial!(add, 3, __);
/// assert_eq!(add_three.call([4]), Ok(7));
/// assert_eq!(add_three.call([10]), Ok(13));
/// ```
///
/// ## Holes are filled left to right
///
/// ```
/// use muse::partial;
///
/// fn rgb(red: u8, green: u8, blue: u8) -> [u8; 3] { [red, green, blue] }
///
/// let only_green = partial!(rgb, __, 255, __);
/// assert_eq!(only_green.call([1, 2]), Ok([1, 255, 2]));
/// ```
///
/// ## Creating a thunk (all arguments fixed)
///
/// ```
/// use muse::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let thunk = partial!(add, 3, 5);
/// assert_eq!(thunk.call([]), Ok(8));
/// ```
#[macro_export]
macro_rules! partial {
    // All slots consumed: emit the template
    (@slots [$($done:expr,)*]) => {
        ::std::vec![$($done),*]
    };

    // `__` marks a hole
    (@slots [$($done:expr,)*] __ $(, $($rest:tt)*)?) => {
        $crate::partial!(@slots [$($done,)* $crate::compose::Slot::Hole,] $($($rest)*)?)
    };

    // Any other expression is a fixed value
    (@slots [$($done:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::partial!(@slots [$($done,)* $crate::compose::Slot::Filled($next),] $($($rest)*)?)
    };

    ($function:expr $(, $($slots:tt)*)?) => {
        $crate::compose::partial($function, $crate::partial!(@slots [] $($($slots)*)?))
    };
}

#[cfg(test)]
mod tests {
    use crate::compose::Slot;
    use crate::error::MuseError;

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    #[test]
    fn test_partial_first_argument_fixed() {
        let subtract_from_ten = partial!(subtract, 10, __);
        assert_eq!(subtract_from_ten.call([3]), Ok(7));
    }

    #[test]
    fn test_partial_second_argument_fixed() {
        let minus_ten = partial!(subtract, __, 10);
        assert_eq!(minus_ten.call([3]), Ok(-7));
        assert_eq!(minus_ten.template(), &[Slot::Hole, Slot::Filled(10)]);
    }

    #[test]
    fn test_partial_expression_arguments() {
        let base = 4;
        let shifted = partial!(subtract, base * 2, __,);
        assert_eq!(shifted.call([-1]), Ok(9));
    }

    #[test]
    fn test_partial_missing_value() {
        let open = partial!(subtract, __, __);
        assert_eq!(
            open.call([1]),
            Err(MuseError::InsufficientArguments {
                holes: 2,
                supplied: 1,
            })
        );
    }
}
