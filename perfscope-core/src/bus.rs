//! Selection event bus.
//!
//! Broadcast channel: every subscriber receives every event. Lagging
//! receivers skip old events rather than block the publisher, which is
//! the behavior selection waits want (only the latest selection
//! matters).

use tokio::sync::broadcast;

/// Enough for burst handling without memory bloat.
pub const CHANNEL_CAPACITY: usize = 64;

/// Notification published by the details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsEvent {
    /// A subview became the visible panel; carries its view-name.
    Selected(String),
}

/// Typed publish/subscribe handle for details-pane notifications.
///
/// Cloning shares the underlying channel.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<DetailsEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DetailsEvent> {
        self.tx.subscribe()
    }

    /// One-shot form: resolves with the next event published after the
    /// call. The subscription is taken eagerly, so events emitted
    /// between the call and the first poll are not missed.
    pub fn once(&self) -> impl std::future::Future<Output = DetailsEvent> + Send + 'static {
        let mut rx = self.subscribe();
        async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return event,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    // Reachable only if the bus (and its sender) was
                    // dropped while this future is still held; there
                    // will never be another event, so park forever.
                    Err(broadcast::error::RecvError::Closed) => {
                        std::future::pending::<()>().await;
                    }
                }
            }
        }
    }

    /// Publish. Having no subscribers is not an error.
    pub fn emit(&self, event: DetailsEvent) {
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
