//! Conversion of callback-style functions into futures.
//!
//! A callback-style function receives its input together with a
//! [`Callback`] and settles the outcome by calling it exactly once, possibly
//! from another thread and possibly after returning. [`promisify`] wraps
//! such a function so that it returns a [`Deferred`] future instead.
//!
//! # Settlement
//!
//! - `callback(Ok(value))` resolves the future with `Ok(value)`
//! - `callback(Err(error))` rejects it with [`DeferredError::Rejected`]
//! - dropping the callback unused rejects it with [`DeferredError::Abandoned`]

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use thiserror::Error;

/// The continuation handed to a callback-style function.
pub type Callback<T, E> = Box<dyn FnOnce(Result<T, E>) + Send>;

/// Why a [`Deferred`] did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeferredError<E> {
    /// The function reported a failure through its callback.
    #[error("deferred computation rejected: {0}")]
    Rejected(E),
    /// The callback was dropped without being called.
    #[error("deferred computation dropped its callback without settling")]
    Abandoned,
}

/// A future settled by a [`Callback`].
///
/// Created by [`deferred`] or by a function returned from [`promisify`].
#[derive(Debug)]
#[must_use = "futures do nothing unless awaited"]
pub struct Deferred<T, E> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Future for Deferred<T, E> {
    type Output = Result<T, DeferredError<E>>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(context) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(Ok(value))) => Poll::Ready(Ok(value)),
            Poll::Ready(Ok(Err(error))) => Poll::Ready(Err(DeferredError::Rejected(error))),
            Poll::Ready(Err(oneshot::Canceled)) => {
                tracing::debug!("deferred callback dropped without settling");
                Poll::Ready(Err(DeferredError::Abandoned))
            }
        }
    }
}

/// Creates a connected callback and future pair.
///
/// # Examples
///
/// ```
/// use muse::effect::deferred;
///
/// # futures::executor::block_on(async {
/// let (callback, pending) = deferred::<i32, String>();
/// callback(Ok(42));
/// assert_eq!(pending.await, Ok(42));
/// # });
/// ```
pub fn deferred<T, E>() -> (Callback<T, E>, Deferred<T, E>)
where
    T: Send + 'static,
    E: Send + 'static,
{
    let (sender, receiver) = oneshot::channel();
    let callback: Callback<T, E> = Box::new(move |outcome| {
        // The receiver may already be gone; nobody is left to notify.
        let _ = sender.send(outcome);
    });
    (callback, Deferred { receiver })
}

/// Wraps a callback-style function into one returning a [`Deferred`].
///
/// Functions of several arguments take them as a tuple.
///
/// # Examples
///
/// ```
/// use muse::effect::{Callback, DeferredError, promisify};
///
/// fn divide((numerator, denominator): (i32, i32), callback: Callback<i32, String>) {
///     if denominator == 0 {
///         callback(Err("division by zero".to_string()));
///     } else {
///         callback(Ok(numerator / denominator));
///     }
/// }
///
/// let divide = promisify(divide);
///
/// # futures::executor::block_on(async {
/// assert_eq!(divide((10, 2)).await, Ok(5));
/// assert_eq!(
///     divide((1, 0)).await,
///     Err(DeferredError::Rejected("division by zero".to_string()))
/// );
/// # });
/// ```
pub fn promisify<A, T, E, F>(function: F) -> impl Fn(A) -> Deferred<T, E>
where
    F: Fn(A, Callback<T, E>),
    T: Send + 'static,
    E: Send + 'static,
{
    move |argument| {
        let (callback, pending) = deferred();
        function(argument, callback);
        pending
    }
}
