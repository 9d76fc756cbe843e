use std::collections::VecDeque;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tracing::debug;

use crate::{TaskRef, scheduler::errors::QueueError};

#[derive(Default)]
struct QueueState {
    open: bool,
    epoch: u64,
    tasks: VecDeque<TaskRef>,
}

impl QueueState {
    fn serves(&self, epoch: u64) -> bool {
        self.open && self.epoch == epoch
    }
}

/// Unbounded FIFO drained by a single worker.
///
/// The open flag and the pending tasks live under one lock; `wake` is fired
/// on every enqueue and on close so an idle worker always observes either a
/// new task or the shutdown.
#[derive(Default)]
pub struct TaskQueue {
    state: Mutex<QueueState>,
    wake: Notify,
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("TaskQueue")
            .field("open", &state.open)
            .field("epoch", &state.epoch)
            .field("len", &state.tasks.len())
            .finish()
    }
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    pub fn len(&self) -> usize {
        self.state.lock().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Opens the queue and returns the epoch a worker must present to
    /// [`dequeue`](Self::dequeue).
    pub fn open(&self) -> u64 {
        let mut state = self.state.lock();
        state.open = true;
        state.epoch += 1;
        debug!(epoch = state.epoch, "task queue opened");
        state.epoch
    }

    pub fn enqueue(&self, task: TaskRef) -> Result<(), QueueError> {
        {
            let mut state = self.state.lock();
            if !state.open {
                return Err(QueueError::Closed);
            }
            state.tasks.push_back(task);
            debug!(len = state.tasks.len(), "task enqueued");
        }

        self.wake.notify_waiters();
        Ok(())
    }

    /// Waits for the next task. Returns `None` once the queue is closed or
    /// reopened under a newer epoch; tasks still pending at that point are
    /// left for [`close`](Self::close) to discard.
    pub async fn dequeue(&self, epoch: u64) -> Option<TaskRef> {
        loop {
            let notified = self.wake.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let mut state = self.state.lock();
                if !state.serves(epoch) {
                    debug!(epoch, "dequeue: queue closed");
                    return None;
                }
                if let Some(task) = state.tasks.pop_front() {
                    return Some(task);
                }
            }

            notified.await;
        }
    }

    /// Closes the queue and drops every pending task. Returns the number of
    /// discarded tasks, or `None` if the queue was already closed.
    pub fn close(&self) -> Option<usize> {
        let pending = {
            let mut state = self.state.lock();
            if !state.open {
                return None;
            }
            state.open = false;
            std::mem::take(&mut state.tasks)
        };

        self.wake.notify_waiters();
        Some(pending.len())
    }
}
