//! Function overloading by arity.
//!
//! This module lets several closures of different parameter counts act as a
//! single function. The closure that runs is chosen by the number of
//! arguments supplied at call time.
//!
//! # Overview
//!
//! - [`Variant`]: a callable tagged with its arity
//! - [`IntoVariant`]: converts closures of 0 to 6 parameters into variants
//! - [`Overloaded`] / [`OverloadedBuilder`]: the validated arity table
//! - [`defn`] / [`defn!`](crate::defn): build an overloaded function
//! - [`inc`]: overloaded increment
//!
//! # Examples
//!
//! ```
//! use muse::defn;
//!
//! let inc = defn![
//!     |value: i32| value + 1,
//!     |value: i32, step: i32| value + step,
//! ]
//! .unwrap();
//!
//! assert_eq!(inc.call([3]), Ok(4));
//! assert_eq!(inc.call([2, 4]), Ok(6));
//! assert!(inc.call([1, 2, 3]).is_err());
//! ```
//!
//! # Invariants
//!
//! - At most one variant per arity; duplicates fail at construction
//! - A call with `n` arguments runs exactly the variant of arity `n`, or
//!   fails with [`MuseError::ArityMismatch`](crate::MuseError::ArityMismatch)

mod defn_macro;
mod increment;
mod overloaded;
mod variant;

pub use increment::inc;
pub use overloaded::{Overloaded, OverloadedBuilder, defn};
pub use variant::{IntoVariant, Variant};

