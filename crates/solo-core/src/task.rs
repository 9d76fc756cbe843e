use std::sync::Arc;

use thiserror::Error;

use crate::CancellationToken;

/// What a task body reports when it returns normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Free-form result text. Classified by its `cancelled` / `error` markers.
    Text(String),
    Succeeded(String),
    Cancelled(String),
    Failed(String),
}

impl TaskOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskOutcome::Text(_) => "Text",
            TaskOutcome::Succeeded(_) => "Succeeded",
            TaskOutcome::Cancelled(_) => "Cancelled",
            TaskOutcome::Failed(_) => "Failed",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TaskOutcome::Text(m)
            | TaskOutcome::Succeeded(m)
            | TaskOutcome::Cancelled(m)
            | TaskOutcome::Failed(m) => m,
        }
    }
}

impl From<String> for TaskOutcome {
    fn from(text: String) -> Self {
        TaskOutcome::Text(text)
    }
}

impl From<&str> for TaskOutcome {
    fn from(text: &str) -> Self {
        TaskOutcome::Text(text.to_string())
    }
}

/// A failure trapped while running a task body.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("task panicked: {0}")]
    Panicked(String),

    #[error("Unknown error")]
    Unknown,
}

impl TaskError {
    pub fn failed(message: impl Into<String>) -> Self {
        TaskError::Failed(message.into())
    }
}

pub type TaskResult = Result<TaskOutcome, TaskError>;

/// A named unit of work the scheduler can run.
///
/// Implementations know nothing about the queue or observers. Long-running
/// bodies must poll `token` and return promptly once it is cancelled.
pub trait Task: Send + Sync + 'static {
    fn name(&self) -> &str;

    fn execute(&self, token: &CancellationToken) -> TaskResult;
}

/// Shared handle to a submitted task.
pub type TaskRef = Arc<dyn Task>;
