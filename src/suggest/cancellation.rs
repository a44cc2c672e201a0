//! Cooperative cancellation for suggestion batches.
//!
//! A [`CancellationSource`] owns the cancel switch; the
//! [`CancellationToken`]s it hands out observe it. Tokens are cheap to
//! clone and all clones share one state.
//!
//! ```ignore
//! let source = CancellationSource::new();
//! let token = source.token();
//!
//! tokio::select! {
//!     _ = token.cancelled() => { /* stop */ }
//!     result = do_work() => { /* use result */ }
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Shared {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Read-only view of a cancellation state.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

impl CancellationToken {
    /// A token that is never cancelled.
    pub fn never() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once the token is cancelled; immediately if it already is.
    pub async fn cancelled(&self) {
        loop {
            // Register before checking the flag so a concurrent cancel()
            // cannot slip between the check and the await.
            let notified = self.shared.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

/// Owner of a cancellation state.
#[derive(Clone, Debug, Default)]
pub struct CancellationSource {
    token: CancellationToken,
}

impl CancellationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Cancel every token from this source. Idempotent.
    pub fn cancel(&self) {
        self.token.shared.cancelled.store(true, Ordering::SeqCst);
        self.token.shared.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tokens_share_state() {
        let source = CancellationSource::new();
        let a = source.token();
        let b = a.clone();
        assert!(!a.is_cancelled());

        source.cancel();
        assert!(a.is_cancelled());
        assert!(b.is_cancelled());
        assert!(source.is_cancelled());
    }

    #[test]
    fn test_never_token() {
        assert!(!CancellationToken::never().is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_when_already_cancelled() {
        let source = CancellationSource::new();
        source.cancel();
        source.cancel();
        source.token().cancelled().await;
    }

    #[tokio::test]
    async fn test_cancelled_wakes_waiter() {
        let source = CancellationSource::new();
        let token = source.token();

        let waiter = tokio::spawn(async move { token.cancelled().await });
        tokio::task::yield_now().await;
        source.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }
}
