//! Higher-order wrappers over ordered sequences.
//!
//! These are thin, eager counterparts of the [`Iterator`] adapters: each one
//! accepts anything that implements [`IntoIterator`] and returns an owned
//! result. Failures of the supplied callback are never caught; use
//! [`try_map`] and [`try_reduce`] when the callback itself is fallible.

use num_traits::Zero;

/// Applies `action` to every element, preserving order and length.
///
/// # Examples
///
/// ```
/// use muse::sequence::map;
///
/// assert_eq!(map([1, 2, 3, 4], |value| value + 1), vec![2, 3, 4, 5]);
/// ```
#[inline]
pub fn map<T, U, I, F>(sequence: I, action: F) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> U,
{
    sequence.into_iter().map(action).collect()
}

/// Keeps the elements for which `predicate` holds, in their original order.
///
/// # Examples
///
/// ```
/// use muse::sequence::filter;
///
/// let numbers = filter(["1", "hey", "3", "4"], |text| text.parse::<i32>().is_ok());
/// assert_eq!(numbers, vec!["1", "3", "4"]);
/// ```
#[inline]
pub fn filter<T, I, P>(sequence: I, mut predicate: P) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    sequence
        .into_iter()
        .filter(|element| predicate(element))
        .collect()
}

/// Folds the sequence from left to right, starting from `initial`.
///
/// An empty sequence returns `initial` unchanged.
///
/// # Examples
///
/// ```
/// use muse::sequence::reduce;
///
/// assert_eq!(reduce([1, 2, 3, 4], |total, value| total + value, 10), 20);
/// assert_eq!(reduce(Vec::<i32>::new(), |total, value| total + value, 7), 7);
/// ```
#[inline]
pub fn reduce<T, B, I, F>(sequence: I, function: F, initial: B) -> B
where
    I: IntoIterator<Item = T>,
    F: FnMut(B, T) -> B,
{
    sequence.into_iter().fold(initial, function)
}

/// Folds the sequence from left to right, starting from zero.
///
/// # Examples
///
/// ```
/// use muse::sequence::reduce_zero;
///
/// assert_eq!(reduce_zero([1, 2, 3, 4], |total: i64, value| total + value), 10);
/// ```
#[inline]
pub fn reduce_zero<T, B, I, F>(sequence: I, function: F) -> B
where
    I: IntoIterator<Item = T>,
    B: Zero,
    F: FnMut(B, T) -> B,
{
    reduce(sequence, function, B::zero())
}

/// Invokes `action` once per element, for its side effects only.
///
/// # Examples
///
/// ```
/// use muse::sequence::for_each;
///
/// let mut seen = Vec::new();
/// for_each([1, 2, 3], |value| seen.push(value * 10));
/// assert_eq!(seen, vec![10, 20, 30]);
/// ```
#[inline]
pub fn for_each<T, I, F>(sequence: I, action: F)
where
    I: IntoIterator<Item = T>,
    F: FnMut(T),
{
    sequence.into_iter().for_each(action);
}

/// Like [`map`], but stops at the first `Err` returned by `action`.
///
/// The error is returned exactly as the callback produced it.
///
/// # Errors
///
/// Returns the first error produced by `action`.
///
/// # Examples
///
/// ```
/// use muse::sequence::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(["1", "2"], str::parse::<i32>);
/// assert_eq!(parsed, Ok(vec![1, 2]));
///
/// let failed: Result<Vec<i32>, _> = try_map(["1", "x"], str::parse::<i32>);
/// assert!(failed.is_err());
/// ```
pub fn try_map<T, U, E, I, F>(sequence: I, action: F) -> Result<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Result<U, E>,
{
    sequence.into_iter().map(action).collect()
}

/// Like [`reduce`], but stops at the first `Err` returned by `function`.
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```
/// use muse::sequence::try_reduce;
///
/// let total = try_reduce([1_u8, 2, 3], |total: u8, value| total.checked_add(value).ok_or("overflow"), 0);
/// assert_eq!(total, Ok(6));
///
/// let overflow = try_reduce([200_u8, 100], |total: u8, value| total.checked_add(value).ok_or("overflow"), 0);
/// assert_eq!(overflow, Err("overflow"));
/// ```
pub fn try_reduce<T, B, E, I, F>(sequence: I, function: F, initial: B) -> Result<B, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(B, T) -> Result<B, E>,
{
    sequence.into_iter().try_fold(initial, function)
}
