//! # solo-core
//!
//! A cooperative, single-worker background task scheduler.
//!
//! Tasks are submitted from any thread, executed strictly one at a time in
//! submission order, and may be cancelled while in flight through a
//! [`CancellationToken`] they poll. Every execution produces a `Started` event
//! and exactly one terminal event, delivered to weakly-held
//! [`TaskObserver`]s and mirrored as text lines to a [`LogSink`].

pub mod cancel;
pub mod event;
pub mod ids;
pub mod observer;
pub mod outcome;
pub mod scheduler;
pub mod sink;
pub mod task;

pub use cancel::CancellationToken;
pub use event::{EventKind, TaskEvent};
pub use ids::RunId;
pub use observer::{ObserverRegistry, TaskObserver};
pub use outcome::{UNKNOWN_ERROR, classify, classify_text};
pub use scheduler::{QueueError, Scheduler, SchedulerError, TaskQueue};
pub use sink::{FileLogSink, LogSink, NullSink};
pub use task::{Task, TaskError, TaskOutcome, TaskRef, TaskResult};
