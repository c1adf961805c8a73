//! Small combinators used alongside partial application and composition.
//!
//! - [`complement`]: negates a predicate
//! - [`Placeholder`] / [`__`]: the hole marker accepted wherever a
//!   [`Slot`](super::Slot) is expected

use super::partial::Slot;

/// Returns a predicate that answers the opposite of `predicate`.
///
/// The returned function passes its argument through unchanged, so
/// `complement(p)(x) == !p(x)` for every `x`.
///
/// # Examples
///
/// ```
/// use muse::compose::complement;
///
/// let is_positive = |value: i32| value > 0;
/// let is_not_positive = complement(is_positive);
///
/// assert!(is_not_positive(-1));
/// assert!(!is_not_positive(1));
/// ```
///
/// # Double complement is identity
///
/// ```
/// use muse::compose::complement;
///
/// let is_even = |value: u32| value % 2 == 0;
/// let twice = complement(complement(is_even));
///
/// assert_eq!(twice(4), is_even(4));
/// assert_eq!(twice(7), is_even(7));
/// ```
#[inline]
pub fn complement<A, P>(predicate: P) -> impl Fn(A) -> bool
where
    P: Fn(A) -> bool,
{
    move |argument| !predicate(argument)
}

/// Marker type for a hole in a partial-application template.
///
/// The [`partial!`](crate::partial) macro recognizes `__` (double
/// underscore) as a literal token, so it never needs to be imported there.
/// Outside the macro, [`__`] converts into [`Slot::Hole`].
///
/// # Examples
///
/// ```
/// use muse::compose::{Slot, __};
///
/// let slot: Slot<i32> = __.into();
/// assert!(slot.is_hole());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Placeholder;

/// The hole constant.
///
/// Note: this is named `__` (double underscore) because `macro_rules!` cannot
/// match a single underscore `_` as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

impl<A> From<Placeholder> for Slot<A> {
    #[inline]
    fn from(_: Placeholder) -> Self {
        Self::Hole
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_with_reference_argument() {
        let is_empty = |text: &str| text.is_empty();
        let has_content = complement(is_empty);
        assert!(has_content("muse"));
        assert!(!has_content(""));
    }

    #[test]
    fn test_placeholder_is_a_hole_for_any_type() {
        let text: Slot<String> = Placeholder.into();
        let flag: Slot<bool> = __.into();
        assert_eq!(text, Slot::Hole);
        assert_eq!(flag, Slot::Hole);
    }
}
