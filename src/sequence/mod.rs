//! Sequence utilities.
//!
//! This module provides eager higher-order wrappers over ordered sequences,
//! lazy numeric ranges, and recursive flattening of nested sequences.
//!
//! # Overview
//!
//! - [`map`], [`filter`], [`reduce`], [`reduce_zero`], [`for_each`]: thin
//!   wrappers over [`Iterator`] adapters that accept any [`IntoIterator`]
//! - [`try_map`], [`try_reduce`]: the same for fallible callbacks
//! - [`range`], [`range_from`], [`range_by`], [`range_from_by`]: lazy,
//!   possibly unbounded arithmetic sequences
//! - [`times`]: collect `action(i)` for `i` in `0..n`
//! - [`Nested`], [`flatten`], [`nested!`](crate::nested): nested sequences
//!
//! # Examples
//!
//! ```
//! use muse::nested;
//! use muse::sequence::{filter, flatten, map, range, reduce};
//!
//! let squares = map(range(0, 5), |value| value * value);
//! assert_eq!(squares, vec![0, 1, 4, 9, 16]);
//!
//! let even = filter(squares, |value| value % 2 == 0);
//! assert_eq!(reduce(even, |total, value| total + value, 0), 20);
//!
//! assert_eq!(flatten(nested![1, [2, [3]]]), vec![1, 2, 3]);
//! ```
//!
//! # Laws
//!
//! - `map(s, f).len() == s.len()` and `map(s, f)[i] == f(s[i])`
//! - Every element of `filter(s, p)` satisfies `p`, in original order
//! - `reduce([], f, init) == init`
//! - `flatten(Nested::from(flatten(x))) == flatten(x)`

mod nested;
mod nested_macro;
mod range;
mod wrappers;

pub use nested::{Leaves, Nested, flatten};
pub use range::{Range, Step, range, range_by, range_from, range_from_by, times};
pub use wrappers::{filter, for_each, map, reduce, reduce_zero, try_map, try_reduce};
