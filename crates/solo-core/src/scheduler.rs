//! The scheduler facade: one worker, one FIFO, cooperative cancellation.
//!
//! [`Scheduler`] is a cheap, cloneable handle. The composition root creates
//! one, hands clones to whoever needs to submit work, and drives
//! [`start`](Scheduler::start) / [`stop`](Scheduler::stop).

pub mod errors;
pub mod queue;
mod worker;

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tokio::{runtime::Handle, sync::Mutex as AsyncMutex, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{CancellationToken, LogSink, ObserverRegistry, TaskEvent, TaskObserver, TaskRef};

pub use errors::{QueueError, SchedulerError};
pub use queue::TaskQueue;

#[derive(Default)]
struct Shared {
    queue: TaskQueue,
    current: Mutex<Option<CancellationToken>>,
    observers: ObserverRegistry,
    sink: RwLock<Option<Arc<dyn LogSink>>>,
    // Serialises start/stop; holds the worker until it has been joined.
    worker: AsyncMutex<Option<JoinHandle<()>>>,
}

impl Shared {
    /// Mirrors a diagnostic line to the sink. Write failures are only traced.
    fn log(&self, line: &str) {
        let sink = self.sink.read().clone();
        if let Some(sink) = sink {
            if let Err(err) = sink.write_line(line) {
                warn!(error = %err, "log sink write failed");
            }
        }
    }

    fn publish(&self, event: TaskEvent) {
        debug!(task = %event.task_name, kind = %event.kind, run = %event.run, "notify");
        self.log(&format!("Notify: {event}"));
        self.observers.notify(&event);
    }
}

#[derive(Clone, Default)]
pub struct Scheduler {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("queue", &self.shared.queue)
            .field("observers", &self.shared.observers)
            .finish()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the worker on the current tokio runtime. Does nothing if the
    /// scheduler is already running; waits for a stop in progress to finish.
    pub async fn start(&self, sink: Arc<dyn LogSink>) -> Result<(), SchedulerError> {
        let mut worker = self.shared.worker.lock().await;
        if let Some(handle) = worker.as_mut() {
            if self.shared.queue.is_open() {
                debug!("start: scheduler already running");
                return Ok(());
            }
            // An abandoned stop left the previous worker draining.
            join_worker(handle).await;
            *worker = None;
        }

        let runtime = Handle::try_current()?;

        *self.shared.sink.write() = Some(sink);
        let epoch = self.shared.queue.open();
        *worker = Some(runtime.spawn(worker::worker_loop(Arc::clone(&self.shared), epoch)));

        info!(epoch, "task scheduler started");
        self.shared.log("TaskScheduler started");
        Ok(())
    }

    /// Stops accepting work, discards pending tasks and waits for the worker
    /// to exit. A task already executing runs to completion first.
    ///
    /// The worker handle stays registered until the join completes, so a
    /// `start` racing this call (or following a cancelled `stop`) waits for
    /// the old worker instead of spawning a second one.
    pub async fn stop(&self) {
        let mut worker = self.shared.worker.lock().await;
        let Some(handle) = worker.as_mut() else {
            debug!("stop: scheduler not running");
            return;
        };

        if let Some(discarded) = self.shared.queue.close() {
            if discarded > 0 {
                info!(discarded, "discarding pending tasks");
                self.shared
                    .log(&format!("Discarding {discarded} pending task(s)"));
            }
        }

        join_worker(handle).await;
        *worker = None;

        info!("task scheduler stopped");
        self.shared.log("TaskScheduler stopped");
    }

    /// Fire-and-forget enqueue. Submissions made while the scheduler is
    /// stopped are logged and dropped.
    pub fn submit(&self, task: TaskRef) {
        let name = task.name().to_string();

        match self.shared.queue.enqueue(task) {
            Ok(()) => {
                debug!(task = %name, "task submitted");
                self.shared.log(&format!("Submit: {name}"));
            }
            Err(err) => {
                warn!(task = %name, error = %err, "submit rejected: scheduler not running");
                self.shared
                    .log(&format!("Submit called but scheduler not running: {name}"));
            }
        }
    }

    /// Cancels the token of the task currently executing, if any. Queued
    /// tasks are never affected. Returns whether a token was cancelled.
    pub fn cancel_current(&self) -> bool {
        let Some(token) = self.shared.current.lock().clone() else {
            return false;
        };
        token.cancel();

        info!("cancelling current task");
        self.shared.log("Cancelling current task");
        true
    }

    pub fn add_observer(&self, observer: Weak<dyn TaskObserver>) {
        self.shared.observers.register(observer);
        debug!("observer added");
        self.shared.log("Observer added");
    }

    /// Registers `observer` without taking ownership of it.
    pub fn observe<O: TaskObserver + 'static>(&self, observer: &Arc<O>) {
        let observer: Weak<O> = Arc::downgrade(observer);
        self.add_observer(observer);
    }

    pub fn is_running(&self) -> bool {
        self.shared.queue.is_open()
    }

    /// Tasks waiting behind the one currently executing.
    pub fn pending(&self) -> usize {
        self.shared.queue.len()
    }

    pub fn observer_count(&self) -> usize {
        self.shared.observers.len()
    }
}

async fn join_worker(handle: &mut JoinHandle<()>) {
    if let Err(err) = handle.await {
        warn!(error = %err, "worker exited abnormally");
    }
}
