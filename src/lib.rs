//! # muse
//!
//! Small functional programming utilities for Rust.
//!
//! ## Overview
//!
//! - **Sequences**: `map`, `filter`, `reduce`, `for_each`, lazy `range`s,
//!   `times`, and `flatten` for nested sequences
//! - **Dispatch**: functions overloaded by argument count (`defn!`)
//! - **Composition**: partial application with holes (`partial!`),
//!   `complement`, `thread!`, `compose!`
//! - **Effect**: `promisify` for callback-style functions
//!
//! ## Feature Flags
//!
//! - `sequence`: Higher-order wrappers, ranges and flattening
//! - `dispatch`: Arity-overloaded functions
//! - `compose`: Partial application and composition (implies `sequence` and `dispatch`)
//! - `async`: Callback-to-future conversion
//! - `serde`: `Serialize`/`Deserialize` for nested sequences
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use muse::prelude::*;
//!
//! let inc = defn![|value: i32| value + 1, |value: i32, step: i32| value + step].unwrap();
//! assert_eq!(inc.call([3]), Ok(4));
//! assert_eq!(inc.call([2, 4]), Ok(6));
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! assert_eq!(partial!(add, 3, __).call([4]), Ok(7));
//!
//! assert_eq!(range(0, 5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(flatten(nested![1, [2, [3, [4]]]]), vec![1, 2, 3, 4]);
//! assert_eq!(thread!(1, |x| x + 1, |x| x * 3), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled function, type and macro.
///
/// # Usage
///
/// ```rust
/// use muse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MuseError, Result};

    #[cfg(feature = "sequence")]
    pub use crate::nested;
    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "dispatch")]
    pub use crate::defn;
    #[cfg(feature = "dispatch")]
    pub use crate::dispatch::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
    #[cfg(feature = "compose")]
    pub use crate::{compose, partial, thread};

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

pub mod error;

pub use error::{MuseError, Result};

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "dispatch")]
pub mod dispatch;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "async")]
pub mod effect;

#[cfg(feature = "sequence")]
pub use sequence::{filter, flatten, for_each, map, range, reduce, times};

#[cfg(feature = "dispatch")]
pub use dispatch::defn;

#[cfg(feature = "compose")]
pub use compose::{complement, compose, partial, thread};

#[cfg(feature = "async")]
pub use effect::promisify;
