//! Observable read counter.

use std::sync::Arc;
use tokio::sync::watch;

/// Count of read actions, shared by every clone and observable via [`subscribe`].
///
/// Only ever increases.
///
/// [`subscribe`]: ReadCounter::subscribe
#[derive(Debug, Clone)]
pub struct ReadCounter {
    tx: Arc<watch::Sender<u64>>,
}

impl Default for ReadCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadCounter {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    /// Add one and notify observers. Returns the new value.
    pub fn increment(&self) -> u64 {
        let mut value = 0;
        self.tx.send_modify(|count| {
            *count = count.saturating_add(1);
            value = *count;
        });
        tracing::debug!(count = value, "Read counter incremented");
        value
    }

    pub fn get(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Receiver that sees the current value and every later change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(ReadCounter::new().get(), 0);
    }

    #[test]
    fn k_increments_give_k() {
        let counter = ReadCounter::new();
        for k in 1..=25 {
            assert_eq!(counter.increment(), k);
        }
        assert_eq!(counter.get(), 25);
    }

    #[test]
    fn clones_share_state() {
        let a = ReadCounter::new();
        let b = a.clone();
        a.increment();
        b.increment();
        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), 2);
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let counter = ReadCounter::new();
        let mut rx = counter.subscribe();
        assert_eq!(*rx.borrow(), 0);

        counter.increment();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);
    }

    #[test]
    fn increment_works_without_subscribers() {
        // The initial receiver is dropped in `new`; sending must still update.
        let counter = ReadCounter::new();
        counter.increment();
        assert_eq!(counter.get(), 1);
    }
}
