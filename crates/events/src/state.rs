//! Observable state holder (single writer, many readers).
//!
//! Readers either poll the latest committed value with [`StateHolder::get`] or
//! subscribe to the stream of committed values. A fresh subscription always
//! starts with the value current at subscription time.

use std::sync::{Mutex, MutexGuard};

use crate::bus::{EventBus, Subscription};
use crate::in_memory_bus::InMemoryEventBus;

#[derive(Debug)]
pub struct StateHolder<S> {
    latest: Mutex<S>,
    bus: InMemoryEventBus<S>,
}

impl<S> StateHolder<S>
where
    S: Clone + Send + 'static,
{
    pub fn new(initial: S) -> Self {
        Self {
            latest: Mutex::new(initial),
            bus: InMemoryEventBus::new(),
        }
    }

    /// The latest committed value.
    pub fn get(&self) -> S {
        self.lock().clone()
    }

    /// Commit a new value and fan it out to subscribers.
    pub fn set(&self, value: S) {
        let mut latest = self.lock();
        *latest = value.clone();
        if let Err(e) = self.bus.publish(value) {
            tracing::warn!(error = %e, "state committed but not delivered to subscribers");
        }
    }

    pub fn subscribe(&self) -> Subscription<S> {
        let latest = self.lock();
        self.bus.subscribe_with(latest.clone())
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        // A panic while holding the lock cannot leave `S` half-written: every
        // write is a whole-value assignment.
        self.latest.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
