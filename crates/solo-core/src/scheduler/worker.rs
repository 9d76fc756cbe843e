use std::{any::Any, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
    CancellationToken, EventKind, RunId, TaskError, TaskEvent, TaskRef, TaskResult,
    outcome::classify, scheduler::Shared,
};

pub(super) async fn worker_loop(shared: Arc<Shared>, epoch: u64) {
    info!(epoch, "worker started");
    shared.log("Worker started");

    while let Some(task) = shared.queue.dequeue(epoch).await {
        run_task(&shared, task).await;
    }

    shared.log("Worker stopping (running=false)");
    info!(epoch, "worker exited");
}

async fn run_task(shared: &Shared, task: TaskRef) {
    let name = task.name().to_string();
    let run = RunId::new();

    debug!(task = %name, %run, "task dequeued");
    shared.log(&format!("Worker got task: {name}"));

    let token = CancellationToken::new();
    *shared.current.lock() = Some(token.clone());

    shared.publish(TaskEvent::started(&name, run));

    shared.log(&format!("Executing task: {name}"));
    let result = execute(task, token.clone()).await;
    let cancelled = token.is_cancelled();

    match (&result, cancelled) {
        (Ok(_), true) => {
            shared.log(&format!("Task cancelled during execution: {name}"));
        }
        (Err(err), true) => {
            shared.log(&format!("Task cancelled (failure): {name} Error: {err}"));
        }
        (Err(err), false) => {
            shared.log(&format!("Task failed: {name} Error: {err}"));
        }
        (Ok(outcome), false) => {
            debug!(task = %name, outcome = outcome.as_str(), "task returned");
            shared.log(&format!("Task returned: {name} Result: {}", outcome.message()));
        }
    }

    let event = classify(&name, run, &result, cancelled);
    match event.kind {
        EventKind::Succeeded => info!(task = %name, %run, "task succeeded"),
        EventKind::Cancelled => info!(task = %name, %run, "task cancelled"),
        EventKind::Failed => warn!(task = %name, %run, message = %event.message, "task failed"),
        EventKind::Started => {}
    }
    shared.publish(event);

    shared.current.lock().take();
    shared.log(&format!("Task completed: {name}"));
}

/// Runs the task body on the blocking pool; a panic in the body is trapped
/// as a [`TaskError`].
async fn execute(task: TaskRef, token: CancellationToken) -> TaskResult {
    match tokio::task::spawn_blocking(move || task.execute(&token)).await {
        Ok(result) => result,
        Err(err) if err.is_panic() => Err(panic_error(err.into_panic())),
        Err(_) => Err(TaskError::Unknown),
    }
}

fn panic_error(payload: Box<dyn Any + Send>) -> TaskError {
    if let Some(message) = payload.downcast_ref::<&str>() {
        TaskError::Panicked(message.to_string())
    } else if let Some(message) = payload.downcast_ref::<String>() {
        TaskError::Panicked(message.clone())
    } else {
        TaskError::Unknown
    }
}
