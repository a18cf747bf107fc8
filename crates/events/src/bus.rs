//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus is a fan-out mechanism: every subscriber receives a copy of every
//! message published after it subscribed. It makes no persistence promises; the
//! publisher's own state is the source of truth and subscribers only observe it.

use std::sync::mpsc::Receiver;

/// A subscription to a message stream.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// while let Ok(state) = subscription.try_recv() {
///     render(state);
/// }
/// ```
///
/// Subscriptions are meant for single-threaded consumption. Messages arrive in
/// publication order.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain everything currently queued and return the most recent message.
    ///
    /// Observers that only care about "latest state" use this instead of
    /// replaying every intermediate value.
    pub fn latest(&self) -> Option<M> {
        self.receiver.try_iter().last()
    }
}

/// Transport-agnostic pub/sub abstraction.
///
/// `publish()` can fail (e.g. a poisoned lock); failures are surfaced to the
/// caller. Implementations must be safe to share across threads.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
