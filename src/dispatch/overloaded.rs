//! Functions overloaded by argument count.
//!
//! An [`Overloaded`] function owns a table from arity to [`Variant`] and
//! forwards each call to the variant registered for the number of arguments
//! it receives. The table is validated once, at construction: duplicate
//! arities and empty tables are rejected instead of being resolved silently.

use std::fmt;

use rustc_hash::FxHashMap;

use super::variant::{IntoVariant, Variant};
use crate::error::{MuseError, Result};

/// A function that selects its implementation by argument count.
///
/// # Examples
///
/// ```
/// use muse::defn;
/// use muse::MuseError;
///
/// let describe = defn![
///     |value: i32| format!("one: {value}"),
///     |first: i32, second: i32| format!("two: {first}, {second}"),
/// ]
/// .unwrap();
///
/// assert_eq!(describe.call([1]), Ok("one: 1".to_string()));
/// assert_eq!(describe.call([1, 2]), Ok("two: 1, 2".to_string()));
/// assert!(matches!(
///     describe.call([1, 2, 3]),
///     Err(MuseError::ArityMismatch { received: 3, .. })
/// ));
/// ```
pub struct Overloaded<A, R> {
    variants: FxHashMap<usize, Variant<A, R>>,
}

impl<A, R> Overloaded<A, R> {
    /// Starts building an overloaded function.
    pub fn builder() -> OverloadedBuilder<A, R> {
        OverloadedBuilder {
            variants: Vec::new(),
        }
    }

    /// Calls the variant registered for the number of supplied arguments.
    ///
    /// # Errors
    ///
    /// Returns [`MuseError::ArityMismatch`] if no variant accepts that many
    /// arguments.
    pub fn call<I>(&self, arguments: I) -> Result<R>
    where
        I: IntoIterator<Item = A>,
    {
        let arguments: Vec<A> = arguments.into_iter().collect();
        match self.variants.get(&arguments.len()) {
            Some(variant) => variant.call(arguments),
            None => {
                let supported = self.arities();
                tracing::debug!(
                    received = arguments.len(),
                    ?supported,
                    "no variant registered for argument count"
                );
                Err(MuseError::ArityMismatch {
                    received: arguments.len(),
                    supported,
                })
            }
        }
    }

    /// Returns the registered arities in ascending order.
    pub fn arities(&self) -> Vec<usize> {
        let mut arities: Vec<usize> = self.variants.keys().copied().collect();
        arities.sort_unstable();
        arities
    }

    /// Returns `true` if a variant accepts `arity` arguments.
    pub fn supports(&self, arity: usize) -> bool {
        self.variants.contains_key(&arity)
    }

    pub(crate) fn from_distinct(variants: impl IntoIterator<Item = Variant<A, R>>) -> Self {
        Self {
            variants: variants
                .into_iter()
                .map(|variant| (variant.arity(), variant))
                .collect(),
        }
    }
}

impl<A: 'static> Overloaded<A, bool> {
    /// Negates the result of every variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use muse::defn;
    ///
    /// let is_ordered = defn![
    ///     |_single: i32| true,
    ///     |first: i32, second: i32| first <= second,
    /// ]
    /// .unwrap();
    /// let is_unordered = is_ordered.complement();
    ///
    /// assert_eq!(is_unordered.call([4]), Ok(false));
    /// assert_eq!(is_unordered.call([4, 2]), Ok(true));
    /// ```
    #[must_use]
    pub fn complement(self) -> Self {
        Self::from_distinct(
            self.variants
                .into_values()
                .map(|variant| variant.map_output(|result: bool| !result)),
        )
    }
}

impl<A, R> fmt::Debug for Overloaded<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Overloaded")
            .field("arities", &self.arities())
            .finish()
    }
}

/// Collects variants for an [`Overloaded`] function.
///
/// Created by [`Overloaded::builder`].
pub struct OverloadedBuilder<A, R> {
    variants: Vec<Variant<A, R>>,
}

impl<A, R> OverloadedBuilder<A, R> {
    /// Adds a variant; its arity is the parameter count of `function`.
    #[must_use]
    pub fn variant<M, F>(mut self, function: F) -> Self
    where
        F: IntoVariant<A, R, M>,
    {
        self.variants.push(function.into_variant());
        self
    }

    /// Validates the collected variants and builds the function.
    ///
    /// # Errors
    ///
    /// Returns [`MuseError::NoVariants`] if no variant was added, or
    /// [`MuseError::DuplicateArity`] if two variants share an arity.
    pub fn build(self) -> Result<Overloaded<A, R>> {
        defn(self.variants)
    }
}

impl<A, R> fmt::Debug for OverloadedBuilder<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OverloadedBuilder")
            .field("variants", &self.variants)
            .finish()
    }
}

/// Builds an overloaded function from a list of variants.
///
/// Most callers use the [`defn!`](crate::defn) macro, which converts plain
/// closures into variants.
///
/// # Errors
///
/// Returns [`MuseError::NoVariants`] for an empty list, or
/// [`MuseError::DuplicateArity`] if two variants share an arity.
///
/// # Examples
///
/// ```
/// use muse::dispatch::{Variant, defn};
///
/// let total = defn([
///     Variant::new(1, |arguments: Vec<i32>| arguments[0]),
///     Variant::new(2, |arguments: Vec<i32>| arguments[0] + arguments[1]),
/// ])
/// .unwrap();
/// assert_eq!(total.call([5, 6]), Ok(11));
/// ```
pub fn defn<A, R>(variants: impl IntoIterator<Item = Variant<A, R>>) -> Result<Overloaded<A, R>> {
    let mut table = FxHashMap::default();
    for variant in variants {
        let arity = variant.arity();
        if table.insert(arity, variant).is_some() {
            tracing::debug!(arity, "rejected duplicate arity");
            return Err(MuseError::DuplicateArity { arity });
        }
    }
    if table.is_empty() {
        tracing::debug!("rejected overloaded function without variants");
        return Err(MuseError::NoVariants);
    }
    let overloaded = Overloaded { variants: table };
    tracing::trace!(arities = ?overloaded.arities(), "built overloaded function");
    Ok(overloaded)
}
