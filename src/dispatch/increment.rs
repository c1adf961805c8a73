use std::ops::Add;

use num_traits::One;

use super::overloaded::Overloaded;
use super::variant::IntoVariant;

/// Returns an overloaded increment: `inc(value) = value + 1` and
/// `inc(value, step) = value + step`.
///
/// # Examples
///
/// ```
/// use muse::dispatch::inc;
///
/// let inc = inc::<i64>();
/// assert_eq!(inc.call([3]), Ok(4));
/// assert_eq!(inc.call([2, 4]), Ok(6));
/// ```
pub fn inc<T>() -> Overloaded<T, T>
where
    T: Copy + Add<Output = T> + One + 'static,
{
    Overloaded::from_distinct([
        IntoVariant::<T, T, fn(T) -> T>::into_variant(|value: T| value + T::one()),
        IntoVariant::<T, T, fn(T, T) -> T>::into_variant(|value: T, step: T| value + step),
    ])
}
