//! Weakly-held listeners for task lifecycle events.
//!
//! Registrations never keep an observer alive. Dead entries are pruned the next
//! time an event is delivered, and observers are always invoked outside the
//! registry lock. A panicking observer is logged and skipped; delivery to the
//! remaining observers continues.

use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    sync::{Arc, Weak},
};

use parking_lot::Mutex;
use tracing::warn;

use crate::TaskEvent;

/// Receives every lifecycle event on the worker's execution context.
///
/// Handlers should return quickly: the worker does not dequeue the next task
/// until every observer has been called.
pub trait TaskObserver: Send + Sync {
    fn on_task_event(&self, event: &TaskEvent);
}

#[derive(Default)]
pub struct ObserverRegistry {
    observers: Mutex<Vec<Weak<dyn TaskObserver>>>,
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("registered", &self.len())
            .finish()
    }
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, observer: Weak<dyn TaskObserver>) {
        self.observers.lock().push(observer);
    }

    /// Number of registrations, including ones not yet pruned.
    pub fn len(&self) -> usize {
        self.observers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Prunes dead registrations and returns the live observers in
    /// registration order.
    fn snapshot(&self) -> Vec<Arc<dyn TaskObserver>> {
        let mut observers = self.observers.lock();
        let mut live = Vec::with_capacity(observers.len());

        observers.retain(|weak| match weak.upgrade() {
            Some(observer) => {
                live.push(observer);
                true
            }
            None => false,
        });

        live
    }

    /// Delivers `event` to every live observer. Returns how many observers
    /// handled it without panicking.
    pub fn notify(&self, event: &TaskEvent) -> usize {
        let mut delivered = 0;

        for observer in self.snapshot() {
            match catch_unwind(AssertUnwindSafe(|| observer.on_task_event(event))) {
                Ok(()) => delivered += 1,
                Err(_) => warn!(
                    task = %event.task_name,
                    kind = %event.kind,
                    "observer panicked while handling event"
                ),
            }
        }

        delivered
    }
}
