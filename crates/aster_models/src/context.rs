//! Cancellation-capable execution context.

use tokio_util::sync::CancellationToken;

/// Execution context threaded through model creation.
///
/// Wraps a [`CancellationToken`]. Cloning a context shares the token, so
/// cancelling any clone cancels them all. [`child`](Self::child) derives a
/// context that is cancelled with its parent but can also be cancelled on its
/// own.
///
/// ```
/// use aster_models::ExecutionContext;
///
/// let ctx = ExecutionContext::new();
/// let child = ctx.child();
///
/// ctx.cancel();
/// assert!(child.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    token: CancellationToken,
}

impl ExecutionContext {
    /// Creates a root context that is never cancelled unless [`cancel`](Self::cancel) is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context from an existing token.
    #[must_use]
    pub fn from_token(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Derives a child context.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    /// Cancels this context and all of its children.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once this context or any ancestor has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns the underlying token.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}
