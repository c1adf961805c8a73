//! Runtime pipelines: threading a value through a list of functions.
//!
//! Unlike the [`thread!`](crate::thread) and [`compose!`](crate::compose)
//! macros, which take a fixed list of possibly different function types at
//! compile time, these functions accept a list built at run time. The list
//! must not be empty.

use crate::error::{MuseError, Result};
use crate::sequence::{Nested, flatten};

/// Applies each function in order, feeding each output into the next.
///
/// `thread(x, [f, g, h]) == h(g(f(x)))`.
///
/// # Errors
///
/// Returns [`MuseError::EmptyPipeline`] if `functions` is empty.
///
/// # Examples
///
/// ```
/// use muse::compose::thread;
///
/// let steps: [fn(i32) -> i32; 2] = [|x| x + 1, |x| x * 3];
/// assert_eq!(thread(1, steps), Ok(6));
///
/// let none: [fn(i32) -> i32; 0] = [];
/// assert!(thread(1, none).is_err());
/// ```
pub fn thread<T, F, I>(value: T, functions: I) -> Result<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> T,
{
    let mut functions = functions.into_iter().peekable();
    if functions.peek().is_none() {
        tracing::debug!("rejected empty pipeline");
        return Err(MuseError::EmptyPipeline);
    }
    Ok(functions.fold(value, |current, function| function(current)))
}

/// Builds a function that threads its argument through `functions`.
///
/// `functions` may be a flat `Vec` or an arbitrarily [`Nested`] list; it is
/// flattened first, so `compose(fns)(x) == thread(x, flatten(fns))`.
///
/// # Errors
///
/// Returns [`MuseError::EmptyPipeline`] if there is no function to apply.
///
/// # Examples
///
/// ```
/// use muse::compose::compose;
/// use muse::sequence::Nested;
///
/// let add_one: fn(i32) -> i32 = |x| x + 1;
/// let triple: fn(i32) -> i32 = |x| x * 3;
///
/// let add_then_triple = compose(vec![add_one, triple]).unwrap();
/// assert_eq!(add_then_triple(1), 6);
///
/// let grouped = compose(Nested::sequence([
///     Nested::Leaf(add_one),
///     Nested::from(vec![triple, add_one]),
/// ]))
/// .unwrap();
/// assert_eq!(grouped(1), 7);
/// ```
pub fn compose<T, F, N>(functions: N) -> Result<impl Fn(T) -> T>
where
    N: Into<Nested<F>>,
    F: Fn(T) -> T,
{
    let functions = flatten(functions.into());
    if functions.is_empty() {
        tracing::debug!("rejected empty composition");
        return Err(MuseError::EmptyPipeline);
    }
    Ok(move |value| {
        functions
            .iter()
            .fold(value, |current, function| function(current))
    })
}
