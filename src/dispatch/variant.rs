//! Arity-tagged callables.
//!
//! A [`Variant`] erases a closure of any fixed parameter count into a single
//! shape, `Fn(Vec<A>) -> Result<R>`, while remembering the count it declared.
//! [`IntoVariant`] performs that conversion for closures and functions that
//! take zero to six arguments of the same type.

use std::fmt;

use crate::error::{MuseError, Result};

type Body<A, R> = Box<dyn Fn(Vec<A>) -> Result<R>>;

/// A callable tagged with the number of arguments it accepts.
///
/// # Examples
///
/// ```
/// use muse::dispatch::{IntoVariant, Variant};
///
/// let add = IntoVariant::<i32, i32, _>::into_variant(|first: i32, second: i32| first + second);
/// assert_eq!(add.arity(), 2);
/// assert_eq!(add.call(vec![3, 4]), Ok(7));
/// assert!(add.call(vec![3]).is_err());
///
/// let sum = Variant::new(3, |arguments: Vec<i32>| arguments.iter().sum::<i32>());
/// assert_eq!(sum.call(vec![1, 2, 3]), Ok(6));
/// ```
pub struct Variant<A, R> {
    arity: usize,
    body: Body<A, R>,
}

impl<A: 'static, R: 'static> Variant<A, R> {
    /// Creates a variant of the given arity from a function over the whole
    /// argument list.
    ///
    /// The body is only invoked with exactly `arity` arguments.
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(Vec<A>) -> R + 'static,
    {
        Self {
            arity,
            body: Box::new(move |arguments: Vec<A>| {
                if arguments.len() == arity {
                    Ok(body(arguments))
                } else {
                    Err(MuseError::ArityMismatch {
                        received: arguments.len(),
                        supported: vec![arity],
                    })
                }
            }),
        }
    }

    /// Transforms every result produced by this variant.
    pub(crate) fn map_output<S, F>(self, transform: F) -> Variant<A, S>
    where
        S: 'static,
        F: Fn(R) -> S + 'static,
    {
        let body = self.body;
        Variant {
            arity: self.arity,
            body: Box::new(move |arguments| body(arguments).map(&transform)),
        }
    }
}

impl<A, R> Variant<A, R> {
    /// Returns the number of arguments this variant accepts.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the variant with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns [`MuseError::ArityMismatch`] if `arguments` does not hold
    /// exactly [`arity`](Self::arity) values.
    #[inline]
    pub fn call(&self, arguments: Vec<A>) -> Result<R> {
        (self.body)(arguments)
    }
}

impl<A, R> fmt::Debug for Variant<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Variant")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Conversion into a [`Variant`].
///
/// The `Marker` parameter only distinguishes the implementations for each
/// parameter count; it is always inferred.
pub trait IntoVariant<A, R, Marker> {
    /// Performs the conversion.
    fn into_variant(self) -> Variant<A, R>;
}

impl<A, R> IntoVariant<A, R, ()> for Variant<A, R> {
    #[inline]
    fn into_variant(self) -> Self {
        self
    }
}

macro_rules! impl_into_variant {
    ($arity:literal => $($argument:ident : $argument_type:ident),*) => {
        impl<A, R, F> IntoVariant<A, R, fn($($argument_type),*) -> R> for F
        where
            A: 'static,
            R: 'static,
            F: Fn($($argument_type),*) -> R + 'static,
        {
            fn into_variant(self) -> Variant<A, R> {
                let function = self;
                Variant {
                    arity: $arity,
                    body: Box::new(move |arguments: Vec<A>| {
                        let [$($argument),*] = <[A; $arity]>::try_from(arguments).map_err(
                            |rejected: Vec<A>| MuseError::ArityMismatch {
                                received: rejected.len(),
                                supported: vec![$arity],
                            },
                        )?;
                        Ok(function($($argument),*))
                    }),
                }
            }
        }
    };
}

impl_into_variant!(0 =>);
impl_into_variant!(1 => first: A);
impl_into_variant!(2 => first: A, second: A);
impl_into_variant!(3 => first: A, second: A, third: A);
impl_into_variant!(4 => first: A, second: A, third: A, fourth: A);
impl_into_variant!(5 => first: A, second: A, third: A, fourth: A, fifth: A);
impl_into_variant!(6 => first: A, second: A, third: A, fourth: A, fifth: A, sixth: A);
