//! Trailing-edge debounce
//!
//! Converts a rapidly-changing input value into a stable, delayed one: the
//! settled value only catches up with the input once the input has stayed
//! unchanged for the full delay. Each new input restarts the timer and the
//! superseded timer never fires. Dropping the debouncer cancels any pending
//! timer, so no update lands after the owner is gone.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Generic trailing-edge debouncer. Consumers read the settled value
/// through [`Debouncer::settled`] or await changes on a [`watch::Receiver`]
/// from [`Debouncer::subscribe`]. Only the most recent input is ever
/// published; intermediate values are discarded, not queued.
pub struct Debouncer<T> {
    delay: Duration,
    tx: watch::Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T, delay: Duration) -> Self {
        let (tx, _) = watch::channel(initial);
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Feeds the latest raw value, restarting the delay. A previously
    /// scheduled publication is cancelled and never fires.
    pub fn update(&mut self, value: T) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver side may already be gone; nothing to do then.
            let _ = tx.send(value);
        }));
    }

    /// The last value that survived a full delay window (or the initial
    /// value if none has yet).
    pub fn settled(&self) -> T {
        self.tx.borrow().clone()
    }

    /// A receiver that resolves whenever a value settles.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn burst_of_inputs_yields_one_trailing_update() {
        let mut debouncer = Debouncer::new(String::new(), DELAY);
        let mut rx = debouncer.subscribe();

        debouncer.update("g".to_string());
        debouncer.update("ga".to_string());
        debouncer.update("gatsby".to_string());

        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow(), "gatsby");

        // No second update arrives: the superseded timers were cancelled.
        let extra = tokio::time::timeout(DELAY * 2, rx.changed()).await;
        assert!(extra.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn value_settles_only_after_the_full_delay() {
        let mut debouncer = Debouncer::new(0u32, DELAY);
        debouncer.update(7);

        // Before the delay elapses the settled value is unchanged.
        assert_eq!(debouncer.settled(), 0);

        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
        assert_eq!(debouncer.settled(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_the_pending_update() {
        let mut debouncer = Debouncer::new(0u32, DELAY);
        let mut rx = debouncer.subscribe();

        debouncer.update(7);
        drop(debouncer);

        // The channel closes without the pending value ever arriving.
        let closed = rx.changed().await;
        assert!(closed.is_err());
        assert_eq!(*rx.borrow(), 0);
    }
}
