//! Partial application and function composition.
//!
//! This module provides functions and macros for building new functions out
//! of existing ones in a functional programming style.
//!
//! # Overview
//!
//! - [`partial`] / [`partial!`](crate::partial!): fix some arguments, leave holes for others
//! - [`fill_holes`]: the hole-filling step on its own
//! - [`complement`]: negate a predicate
//! - [`thread`] / [`thread!`](crate::thread!): pass a value through functions left to right
//! - [`compose`] / [`compose!`](crate::compose!): build the function that does the threading
//!
//! # Examples
//!
//! ## Partial Application
//!
//! ```
//! use muse::partial;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! // `__` marks a hole, filled when the partial function is called.
//! let add_three = partial!(add, 3, __);
//! assert_eq!(add_three.call([4]), Ok(7));
//! ```
//!
//! ## Threading
//!
//! ```
//! use muse::thread;
//!
//! assert_eq!(thread!(1, |x| x + 1, |x| x * 3), 6);
//! ```
//!
//! ## Composition
//!
//! ```
//! use muse::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn triple(x: i32) -> i32 { x * 3 }
//!
//! let composed = compose!(add_one, triple);
//! assert_eq!(composed(1), 6);
//! ```
//!
//! # Laws
//!
//! - **Complement**: `complement(p)(x) == !p(x)`
//! - **Thread order**: `thread(x, [f, g]) == g(f(x))`
//! - **Compose/thread consistency**: `compose(fns)(x) == thread(x, fns)`
//! - **Hole order**: holes are filled left to right in call order

mod compose_macro;
mod partial;
mod partial_macro;
mod pipeline;
mod thread_macro;
mod utils;

pub use partial::{Partial, Slot, fill_holes, partial};
pub use pipeline::{compose, thread};
pub use utils::{__, Placeholder, complement};
