//! Lazy numeric ranges.
//!
//! A [`Range`] produces `min, min + step, min + 2 * step, ...` on demand and
//! stops once the current value is no longer strictly less than the limit.
//! Without a limit the range is unbounded and only ends if the next value
//! would overflow the numeric type or, for floats, would not grow past the
//! current one. Unbounded ranges must be consumed lazily
//! (`take`, `take_while`, `zip`, ...).
//!
//! Every constructor call returns a fresh, independent sequence; cloning a
//! partially consumed range snapshots its position.
//!
//! # Examples
//!
//! ```rust
//! use muse::sequence::{range, range_from};
//!
//! assert_eq!(range(0, 5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//!
//! let evens: Vec<u64> = range_from(0).filter(|value| value % 2 == 0).take(3).collect();
//! assert_eq!(evens, vec![0, 2, 4]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use num_traits::{CheckedAdd, One, ToPrimitive, Zero};

use crate::error::{MuseError, Result};

/// Numeric types a [`Range`] can count with.
///
/// Implemented for every primitive integer and float type.
pub trait Step: Copy + PartialOrd + Zero + One + fmt::Display {
    /// Returns `self + step`, or `None` when the sum cannot be represented
    /// or would not be greater than `self`.
    fn advance(self, step: Self) -> Option<Self>;
}

macro_rules! impl_step_for_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &step)
                }
            }
        )*
    };
}

macro_rules! impl_step_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    let next = self + step;
                    // A step below the precision of `self` would stall.
                    (next.is_finite() && next > self).then_some(next)
                }
            }
        )*
    };
}

impl_step_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_step_for_float!(f32, f64);

/// A lazy arithmetic sequence: `(current, limit, step)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    current: Option<T>,
    limit: Option<T>,
    step: T,
}

impl<T: Step> Range<T> {
    /// Creates a range from `min`, advancing by `step` while below `limit`.
    ///
    /// A `limit` of `None` makes the range unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`MuseError::InvalidStep`] if `step` is not strictly positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use muse::sequence::Range;
    ///
    /// let odds = Range::new(1, Some(10), 2).unwrap();
    /// assert_eq!(odds.collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
    ///
    /// assert!(Range::new(0, Some(10), 0).is_err());
    /// ```
    pub fn new(min: T, limit: Option<T>, step: T) -> Result<Self> {
        if step.partial_cmp(&T::zero()) != Some(Ordering::Greater) {
            tracing::debug!(%step, "rejected non-positive range step");
            return Err(MuseError::InvalidStep {
                step: step.to_string(),
            });
        }
        Ok(Self {
            current: Some(min),
            limit,
            step,
        })
    }

    /// Returns the exclusive upper bound, or `None` for an unbounded range.
    pub const fn limit(&self) -> Option<T> {
        self.limit
    }

    /// Returns the distance between consecutive values.
    pub const fn step(&self) -> T {
        self.step
    }

    /// Returns `true` if the range has an upper bound.
    pub const fn is_bounded(&self) -> bool {
        self.limit.is_some()
    }
}

impl<T: Step> Default for Range<T> {
    /// The unbounded range `0, 1, 2, ...`.
    fn default() -> Self {
        Self {
            current: Some(T::zero()),
            limit: None,
            step: T::one(),
        }
    }
}

impl<T: Step> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.current?;
        if let Some(limit) = self.limit
            && current.partial_cmp(&limit) != Some(Ordering::Less)
        {
            self.current = None;
            return None;
        }
        self.current = current.advance(self.step);
        Some(current)
    }
}

impl<T: Step> FusedIterator for Range<T> {}

/// Returns the range `min, min + 1, ...` stopping before `max`.
///
/// # Examples
///
/// ```rust
/// use muse::sequence::range;
///
/// assert_eq!(range(2, 5).collect::<Vec<_>>(), vec![2, 3, 4]);
/// assert_eq!(range(5, 5).count(), 0);
/// ```
pub fn range<T: Step>(min: T, max: T) -> Range<T> {
    Range {
        current: Some(min),
        limit: Some(max),
        step: T::one(),
    }
}

/// Returns the unbounded range `min, min + 1, ...`.
///
/// # Examples
///
/// ```rust
/// use muse::sequence::range_from;
///
/// let first: Vec<i64> = range_from(-2).take(4).collect();
/// assert_eq!(first, vec![-2, -1, 0, 1]);
/// ```
pub fn range_from<T: Step>(min: T) -> Range<T> {
    Range {
        current: Some(min),
        limit: None,
        step: T::one(),
    }
}

/// Returns the range `min, min + step, ...` stopping before `max`.
///
/// # Errors
///
/// Returns [`MuseError::InvalidStep`] if `step` is not strictly positive.
///
/// # Examples
///
/// ```rust
/// use muse::sequence::range_by;
///
/// let values: Vec<f64> = range_by(0.0, 1.0, 0.25).unwrap().collect();
/// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn range_by<T: Step>(min: T, max: T, step: T) -> Result<Range<T>> {
    Range::new(min, Some(max), step)
}

/// Returns the unbounded range `min, min + step, ...`.
///
/// # Errors
///
/// Returns [`MuseError::InvalidStep`] if `step` is not strictly positive.
pub fn range_from_by<T: Step>(min: T, step: T) -> Result<Range<T>> {
    Range::new(min, None, step)
}

/// Calls `action` with `0, 1, ..., count - 1` and collects the results.
///
/// `count` may be any primitive number, but it must hold a non-negative
/// integer value.
///
/// # Errors
///
/// Returns [`MuseError::InvalidCount`] if `count` is negative, fractional,
/// not a number, or does not fit in a `usize`.
///
/// # Examples
///
/// ```rust
/// use muse::sequence::times;
///
/// assert_eq!(times(3, |index| index * index).unwrap(), vec![0, 1, 4]);
/// assert!(times(-1, |index| index).is_err());
/// assert!(times(2.5, |index| index).is_err());
/// ```
pub fn times<N, T, F>(count: N, action: F) -> Result<Vec<T>>
where
    N: ToPrimitive + fmt::Display,
    F: FnMut(usize) -> T,
{
    let Some(total) = whole_count(&count) else {
        tracing::debug!(%count, "rejected invalid repetition count");
        return Err(MuseError::InvalidCount {
            count: count.to_string(),
        });
    };
    let mut results = Vec::with_capacity(total);
    results.extend(range(0, total).map(action));
    Ok(results)
}

#[allow(clippy::float_cmp)]
fn whole_count<N: ToPrimitive>(count: &N) -> Option<usize> {
    let as_float = count.to_f64()?;
    if as_float.fract() != 0.0 {
        return None;
    }
    count.to_usize()
}

static_assertions::assert_impl_all!(Range<i64>: Clone, Send, Sync, Iterator, FusedIterator);
