//! Asynchronous boundary for callback-style functions.
//!
//! This module converts functions that report their outcome through a
//! success/failure continuation into functions that return a future.
//!
//! - [`promisify`]: wraps a callback-style function
//! - [`deferred`]: a standalone callback/future pair
//! - [`Deferred`], [`DeferredError`], [`Callback`]
//!
//! The futures are runtime-agnostic; they can be awaited on any executor.

mod deferred;

pub use deferred::{Callback, Deferred, DeferredError, deferred, promisify};
