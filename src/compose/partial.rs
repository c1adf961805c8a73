//! Partial application with explicit holes.
//!
//! A template is an ordered list of [`Slot`]s. Each [`Slot::Filled`] position
//! holds a fixed argument; each [`Slot::Hole`] position is filled, left to
//! right, by the values supplied when the partial function is called.
//!
//! Holes are a dedicated variant, so `0`, `false` or an empty string are
//! always fixed arguments and never mistaken for a hole.

use smallvec::SmallVec;

use crate::dispatch::{IntoVariant, Overloaded};
use crate::error::{MuseError, Result};

/// One position of a partial-application template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<A> {
    /// A fixed argument.
    Filled(A),
    /// A position to be filled at call time.
    Hole,
}

impl<A> Slot<A> {
    /// Returns `true` for [`Slot::Hole`].
    #[inline]
    pub const fn is_hole(&self) -> bool {
        matches!(self, Self::Hole)
    }
}

/// Fills the holes of `template` with `supplied`, in order.
///
/// The result has the same length as the template. Values left over once
/// every hole is filled are ignored.
///
/// # Errors
///
/// Returns [`MuseError::InsufficientArguments`] if fewer values are supplied
/// than the template has holes.
///
/// # Examples
///
/// ```
/// use muse::compose::{Slot, fill_holes};
///
/// let template = [Slot::Filled(1), Slot::Filled(2), Slot::Hole, Slot::Filled(3), Slot::Hole];
/// assert_eq!(fill_holes(&template, [3, 5]), Ok(vec![1, 2, 3, 3, 5]));
/// assert!(fill_holes(&template, [3]).is_err());
/// ```
pub fn fill_holes<A, I>(template: &[Slot<A>], supplied: I) -> Result<Vec<A>>
where
    A: Clone,
    I: IntoIterator<Item = A>,
{
    let mut supplied = supplied.into_iter();
    let mut used = 0;
    let mut arguments = Vec::with_capacity(template.len());
    for slot in template {
        match slot {
            Slot::Filled(value) => arguments.push(value.clone()),
            Slot::Hole => {
                let Some(value) = supplied.next() else {
                    let holes = template.iter().filter(|slot| slot.is_hole()).count();
                    tracing::debug!(holes, supplied = used, "not enough values to fill holes");
                    return Err(MuseError::InsufficientArguments {
                        holes,
                        supplied: used,
                    });
                };
                used += 1;
                arguments.push(value);
            }
        }
    }
    Ok(arguments)
}

/// A function with some of its arguments fixed in advance.
///
/// Created by [`partial`], [`Partial::from_overloaded`] or the
/// [`partial!`](crate::partial) macro.
pub struct Partial<A, R> {
    template: SmallVec<[Slot<A>; 4]>,
    target: Box<dyn Fn(Vec<A>) -> Result<R>>,
}

impl<A, R> Partial<A, R>
where
    A: Clone + 'static,
    R: 'static,
{
    /// Applies the template to an overloaded function; the variant is
    /// chosen by the template length.
    ///
    /// # Examples
    ///
    /// ```
    /// use muse::compose::{Partial, Slot};
    /// use muse::defn;
    ///
    /// let join = defn![
    ///     |a: String, b: String| format!("{a}{b}"),
    ///     |a: String, b: String, c: String| format!("{a}{b}{c}"),
    /// ]
    /// .unwrap();
    ///
    /// let quoted = Partial::from_overloaded(
    ///     join,
    ///     [Slot::Filled("'".to_string()), Slot::Hole, Slot::Filled("'".to_string())],
    /// );
    /// assert_eq!(quoted.call(["muse".to_string()]), Ok("'muse'".to_string()));
    /// ```
    pub fn from_overloaded<T>(function: Overloaded<A, R>, template: T) -> Self
    where
        T: IntoIterator<Item = Slot<A>>,
    {
        Self {
            template: template.into_iter().collect(),
            target: Box::new(move |arguments| function.call(arguments)),
        }
    }
}

impl<A: Clone, R> Partial<A, R> {
    /// Fills the holes with `supplied` and calls the function.
    ///
    /// # Errors
    ///
    /// Returns [`MuseError::InsufficientArguments`] if there are fewer
    /// values than holes, or [`MuseError::ArityMismatch`] if the template
    /// length does not match what the function accepts.
    pub fn call<I>(&self, supplied: I) -> Result<R>
    where
        I: IntoIterator<Item = A>,
    {
        let arguments = fill_holes(&self.template, supplied)?;
        (self.target)(arguments)
    }

    /// Returns the number of holes in the template.
    pub fn holes(&self) -> usize {
        self.template.iter().filter(|slot| slot.is_hole()).count()
    }

    /// Returns the template.
    pub fn template(&self) -> &[Slot<A>] {
        &self.template
    }
}

impl<A: std::fmt::Debug, R> std::fmt::Debug for Partial<A, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

/// Fixes some arguments of `function`, leaving holes to be filled later.
///
/// `function` may be a closure or function of up to six arguments, or a
/// [`Variant`](crate::dispatch::Variant) for any arity. The template length
/// must match its arity; a mismatch is reported when the result is called.
///
/// # Examples
///
/// ```
/// use muse::compose::{Slot, partial};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_three = partial(add, [Slot::Filled(3), Slot::Hole]);
/// assert_eq!(add_three.call([4]), Ok(7));
///
/// fn rgb(red: u8, green: u8, blue: u8) -> [u8; 3] { [red, green, blue] }
///
/// let vary_green = partial(rgb, [Slot::Filled(4), Slot::Hole, Slot::Filled(5)]);
/// assert_eq!(vary_green.call([0]), Ok([4, 0, 5]));
/// ```
pub fn partial<A, R, M, F, T>(function: F, template: T) -> Partial<A, R>
where
    A: Clone + 'static,
    R: 'static,
    F: IntoVariant<A, R, M>,
    T: IntoIterator<Item = Slot<A>>,
{
    let variant = function.into_variant();
    Partial {
        template: template.into_iter().collect(),
        target: Box::new(move |arguments| variant.call(arguments)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    #[test]
    fn test_zero_is_a_fixed_value_not_a_hole() {
        let add_zero = partial(add, [Slot::Filled(0), Slot::Hole]);
        assert_eq!(add_zero.holes(), 1);
        assert_eq!(add_zero.call([5]), Ok(5));
    }

    #[test]
    fn test_insufficient_arguments() {
        let both_open = partial(add, [Slot::Hole, Slot::Hole]);
        assert_eq!(
            both_open.call([1]),
            Err(MuseError::InsufficientArguments {
                holes: 2,
                supplied: 1,
            })
        );
    }

    #[test]
    fn test_surplus_values_are_ignored() {
        let add_one = partial(add, [Slot::Hole, Slot::Filled(1)]);
        assert_eq!(add_one.call([1, 100, 1000]), Ok(2));
    }

    #[test]
    fn test_template_longer_than_arity_is_reported_on_call() {
        let too_long = partial(add, [Slot::Filled(1), Slot::Filled(2), Slot::Hole]);
        assert_eq!(
            too_long.call([3]),
            Err(MuseError::ArityMismatch {
                received: 3,
                supported: vec![2],
            })
        );
    }

    #[test]
    fn test_partial_can_be_called_repeatedly() {
        let greeting = partial(
            |greeting: String, name: String| format!("{greeting}, {name}"),
            [Slot::Filled("Hello".to_string()), Slot::Hole],
        );
        assert_eq!(greeting.call(["Ada".to_string()]), Ok("Hello, Ada".to_string()));
        assert_eq!(greeting.call(["Alan".to_string()]), Ok("Hello, Alan".to_string()));
    }

    #[test]
    fn test_debug_shows_template() {
        let add_two = partial(add, [Slot::Filled(2), Slot::Hole]);
        assert_eq!(
            format!("{add_two:?}"),
            "Partial { template: [Filled(2), Hole], .. }"
        );
    }
}
