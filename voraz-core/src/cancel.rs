//! Cooperative cancellation for superseded tour computations.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Shared flag that tells an in-flight computation to stop early.
///
/// Clones observe the same flag. Cancelling is idempotent and cannot be undone.
///
/// # Examples
/// ```
/// use voraz_core::CancellationToken;
///
/// let token = CancellationToken::new();
/// let observer = token.clone();
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every computation observing this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns `true` once [`Self::cancel`] has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
