//! The `nested!` macro for building [`Nested`](crate::sequence::Nested) literals.

/// Builds a [`Nested`](crate::sequence::Nested) sequence from a bracketed literal.
///
/// Every bracketed group becomes an inner sequence; any other expression
/// becomes a leaf. The outermost level is always a sequence, so use
/// [`Nested::Leaf`](crate::sequence::Nested::Leaf) for a lone value.
///
/// # Syntax
///
/// - `nested![]` - an empty sequence
/// - `nested![1, 2]` - a flat sequence of leaves
/// - `nested![1, [2, [3]]]` - nested sequences
///
/// # Examples
///
/// ```
/// use muse::nested;
/// use muse::sequence::{Nested, flatten};
///
/// let tree = nested![1, [2, 3], [], [[4]]];
/// assert_eq!(
///     tree,
///     Nested::sequence([
///         Nested::Leaf(1),
///         Nested::sequence([Nested::Leaf(2), Nested::Leaf(3)]),
///         Nested::Sequence(vec![]),
///         Nested::sequence([Nested::sequence([Nested::Leaf(4)])]),
///     ])
/// );
/// assert_eq!(flatten(tree), vec![1, 2, 3, 4]);
/// ```
///
/// ## Expressions as leaves
///
/// ```
/// use muse::nested;
/// use muse::sequence::flatten;
///
/// let base = 10;
/// assert_eq!(flatten(nested![base + 1, [-base, base * 2]]), vec![11, -10, 20]);
/// ```
#[macro_export]
macro_rules! nested {
    // All elements consumed: emit the sequence
    (@collect [$($done:expr,)*]) => {
        $crate::sequence::Nested::Sequence(::std::vec![$($done),*])
    };

    // Bracketed group: an inner sequence
    (@collect [$($done:expr,)*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::nested!(@collect [$($done,)* $crate::nested![$($inner)*],] $($($rest)*)?)
    };

    // Any other expression: a leaf
    (@collect [$($done:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::nested!(@collect [$($done,)* $crate::sequence::Nested::Leaf($next),] $($($rest)*)?)
    };

    ($($items:tt)*) => {
        $crate::nested!(@collect [] $($items)*)
    };
}
