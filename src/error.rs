//! Error types shared by every module of the crate.
//!
//! All fallible operations in this crate fail fast with a [`MuseError`]
//! describing which argument contract was violated. Failures raised by
//! caller-supplied callbacks (panics, or `Err` values returned through the
//! `try_*` wrappers) are never wrapped: they reach the caller unchanged.

use thiserror::Error;

/// Represents an argument-contract violation detected by this crate.
///
/// # Examples
///
/// ```rust
/// use muse::MuseError;
///
/// let error = MuseError::InsufficientArguments { holes: 2, supplied: 1 };
/// assert_eq!(
///     error.to_string(),
///     "insufficient arguments: 2 hole(s) to fill but 1 value(s) supplied"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MuseError {
    /// An overloaded function was called with an argument count that no
    /// variant accepts.
    #[error("no variant accepts {received} argument(s); supported arities: {supported:?}")]
    ArityMismatch {
        /// The number of arguments the call received.
        received: usize,
        /// The arities that are registered, in ascending order.
        supported: Vec<usize>,
    },

    /// Two variants of an overloaded function declare the same arity.
    #[error("arity {arity} is registered more than once")]
    DuplicateArity {
        /// The arity declared more than once.
        arity: usize,
    },

    /// An overloaded function was built without any variant.
    #[error("an overloaded function needs at least one variant")]
    NoVariants,

    /// A partially applied function received fewer values than it has holes.
    #[error("insufficient arguments: {holes} hole(s) to fill but {supplied} value(s) supplied")]
    InsufficientArguments {
        /// The number of holes in the template.
        holes: usize,
        /// The number of values supplied at call time.
        supplied: usize,
    },

    /// A repetition count is not a non-negative integer.
    #[error("invalid count {count}: expected a non-negative integer")]
    InvalidCount {
        /// The rejected count, rendered for display.
        count: String,
    },

    /// A range was asked to advance by a step that is not strictly positive.
    #[error("invalid step {step}: a range must advance by a positive step")]
    InvalidStep {
        /// The rejected step, rendered for display.
        step: String,
    },

    /// A value was threaded through an empty list of functions.
    #[error("cannot thread a value through an empty list of functions")]
    EmptyPipeline,
}

/// A specialized [`Result`](std::result::Result) whose error defaults to [`MuseError`].
pub type Result<T, E = MuseError> = std::result::Result<T, E>;

static_assertions::assert_impl_all!(MuseError: Send, Sync, std::error::Error);
