use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::RunId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventKind {
    Started,
    Succeeded,
    Failed,
    Cancelled,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Started => "Started",
            EventKind::Succeeded => "Succeeded",
            EventKind::Failed => "Failed",
            EventKind::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, EventKind::Started)
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle notification published by the worker, twice per task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskEvent {
    pub kind: EventKind,
    pub task_name: String,
    pub message: String,
    pub run: RunId,
}

impl TaskEvent {
    pub fn new(
        kind: EventKind,
        task_name: impl Into<String>,
        message: impl Into<String>,
        run: RunId,
    ) -> Self {
        Self {
            kind,
            task_name: task_name.into(),
            message: message.into(),
            run,
        }
    }

    pub fn started(task_name: impl Into<String>, run: RunId) -> Self {
        Self::new(EventKind::Started, task_name, String::new(), run)
    }
}

impl Display for TaskEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task={} Event={}", self.task_name, self.kind)?;
        if !self.message.is_empty() {
            write!(f, " Msg={}", self.message)?;
        }
        Ok(())
    }
}
