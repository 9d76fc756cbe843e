//! Maps a finished task to its terminal event.
//!
//! Precedence, highest first:
//! 1. token cancelled and the body returned: `Cancelled` with the returned text
//! 2. token cancelled and the body failed: `Cancelled` with the failure text
//! 3. the body failed: `Failed`
//! 4. the returned outcome itself; plain [`TaskOutcome::Text`] is matched
//!    against the cancellation and error markers.

use crate::{EventKind, RunId, TaskError, TaskEvent, TaskOutcome, TaskResult};

pub const UNKNOWN_ERROR: &str = "Unknown error";

const CANCELLED_MARKERS: [&str; 2] = ["cancelled", "Cancelled"];
const ERROR_MARKERS: [&str; 2] = ["error", "Error"];

pub fn classify(task_name: &str, run: RunId, result: &TaskResult, cancelled: bool) -> TaskEvent {
    let (kind, message) = classify_kind(result, cancelled);
    TaskEvent::new(kind, task_name, message, run)
}

fn classify_kind(result: &TaskResult, cancelled: bool) -> (EventKind, String) {
    match result {
        Ok(outcome) if cancelled => (EventKind::Cancelled, outcome.message().to_string()),
        Err(err) if cancelled => (EventKind::Cancelled, err.to_string()),
        Err(err) => (EventKind::Failed, failure_message(err)),
        Ok(TaskOutcome::Succeeded(m)) => (EventKind::Succeeded, m.clone()),
        Ok(TaskOutcome::Cancelled(m)) => (EventKind::Cancelled, m.clone()),
        Ok(TaskOutcome::Failed(m)) => (EventKind::Failed, or_unknown(m)),
        Ok(TaskOutcome::Text(text)) => classify_text(text),
    }
}

/// Marker-based classification of a plain result string.
///
/// Matching is case-sensitive on the exact markers: `cancelled` / `Cancelled`
/// win over `error` / `Error`, so `"CANCELLED"` or `"ERROR"` pass as success.
pub fn classify_text(text: &str) -> (EventKind, String) {
    if CANCELLED_MARKERS.iter().any(|m| text.contains(m)) {
        (EventKind::Cancelled, text.to_string())
    } else if text.is_empty() || ERROR_MARKERS.iter().any(|m| text.contains(m)) {
        (EventKind::Failed, or_unknown(text))
    } else {
        (EventKind::Succeeded, text.to_string())
    }
}

fn failure_message(err: &TaskError) -> String {
    match err {
        TaskError::Unknown => UNKNOWN_ERROR.to_string(),
        err => or_unknown(&err.to_string()),
    }
}

fn or_unknown(message: &str) -> String {
    if message.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message.to_string()
    }
}
