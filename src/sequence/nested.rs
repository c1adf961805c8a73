//! Arbitrarily nested sequences and their flattening.
//!
//! [`Nested<T>`] is either a single value or an ordered sequence of further
//! nested values. Because the tree is owned, it is always finite and acyclic,
//! so [`flatten`] terminates for every value that can be built.
//!
//! Flattening walks the tree with an explicit stack instead of recursion,
//! so very deep nesting cannot exhaust the call stack.

use std::slice;

/// A value or an ordered sequence of nested values.
///
/// # Examples
///
/// ```rust
/// use muse::nested;
/// use muse::sequence::{Nested, flatten};
///
/// let tree: Nested<i32> = nested![1, [2, [3, [4]]]];
/// assert_eq!(flatten(tree), vec![1, 2, 3, 4]);
///
/// assert_eq!(flatten(Nested::Leaf(5)), vec![5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// An ordered sequence of nested values.
    Sequence(Vec<Nested<T>>),
    /// A single value that is not a sequence.
    Leaf(T),
}

impl<T> Nested<T> {
    /// Wraps a single value.
    #[inline]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Builds a sequence from nested elements.
    #[inline]
    pub fn sequence(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Sequence(elements.into_iter().collect())
    }

    /// Returns `true` for a single value.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the nesting depth: `0` for a leaf, `1` for a flat sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use muse::nested;
    /// use muse::sequence::Nested;
    ///
    /// assert_eq!(Nested::Leaf(1).depth(), 0);
    /// assert_eq!(nested![1, 2].depth(), 1);
    /// assert_eq!(nested![1, [2, [3]]].depth(), 3);
    /// ```
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0_usize)];
        while let Some((node, level)) = pending.pop() {
            match node {
                Self::Leaf(_) => deepest = deepest.max(level),
                Self::Sequence(elements) => {
                    deepest = deepest.max(level + 1);
                    pending.extend(elements.iter().map(|element| (element, level + 1)));
                }
            }
        }
        deepest
    }

    /// Returns a lazy iterator over the leaves, depth-first and left to right.
    pub fn leaves(&self) -> Leaves<'_, T> {
        match self {
            Self::Leaf(value) => Leaves {
                single: Some(value),
                stack: Vec::new(),
            },
            Self::Sequence(elements) => Leaves {
                single: None,
                stack: vec![elements.iter()],
            },
        }
    }

    /// Consumes the tree and returns its leaves in order.
    pub fn flatten(self) -> Vec<T> {
        flatten(self)
    }
}

impl<T> From<Vec<T>> for Nested<T> {
    /// A flat sequence of leaves.
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Self::Leaf).collect())
    }
}

impl<T> FromIterator<T> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().map(Self::Leaf).collect())
    }
}

/// Borrowing iterator over the leaves of a [`Nested`] value.
///
/// Created by [`Nested::leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<'a, T> {
    single: Option<&'a T>,
    stack: Vec<slice::Iter<'a, Nested<T>>>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if let Some(value) = self.single.take() {
            return Some(value);
        }
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(Nested::Leaf(value)) => return Some(value),
                Some(Nested::Sequence(elements)) => self.stack.push(elements.iter()),
            }
        }
    }
}

/// Flattens a nested value into one ordered vector of leaves.
///
/// Sequences are flattened recursively, depth-first and left to right; a
/// single value becomes a one-element vector. Flattening is idempotent:
/// `flatten(Nested::from(flatten(x))) == flatten(x)`.
///
/// # Examples
///
/// ```rust
/// use muse::nested;
/// use muse::sequence::flatten;
///
/// assert_eq!(
///     flatten(nested![1, 2, 3, [4, [5, [6, [7, [8, 9]]]]]]),
///     vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
/// );
/// ```
pub fn flatten<T>(value: Nested<T>) -> Vec<T> {
    let mut flat = Vec::new();
    let mut stack = match value {
        Nested::Leaf(single) => return vec![single],
        Nested::Sequence(elements) => vec![elements.into_iter()],
    };
    while let Some(top) = stack.last_mut() {
        match top.next() {
            None => {
                stack.pop();
            }
            Some(Nested::Leaf(leaf)) => flat.push(leaf),
            Some(Nested::Sequence(elements)) => stack.push(elements.into_iter()),
        }
    }
    flat
}

static_assertions::assert_impl_all!(Nested<i32>: Clone, Send, Sync);
