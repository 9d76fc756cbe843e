use tokio::runtime::TryCurrentError;

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("queue is closed")]
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("no tokio runtime to host the worker: {0}")]
    NoRuntime(#[from] TryCurrentError),
}
