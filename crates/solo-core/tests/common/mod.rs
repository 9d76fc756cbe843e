#![allow(dead_code)]

use std::{io, sync::Arc, time::Duration};

use parking_lot::Mutex;
use solo_core::{CancellationToken, LogSink, Task, TaskEvent, TaskObserver, TaskRef, TaskResult};
use tokio::{sync::mpsc, time::timeout};

#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|l| l.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

pub struct FailingSink;

impl LogSink for FailingSink {
    fn write_line(&self, _line: &str) -> io::Result<()> {
        Err(io::Error::other("disk unplugged"))
    }
}

pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<TaskEvent>,
}

impl TaskObserver for ChannelObserver {
    fn on_task_event(&self, event: &TaskEvent) {
        let _ = self.tx.send(event.clone());
    }
}

pub fn channel_observer() -> (Arc<ChannelObserver>, mpsc::UnboundedReceiver<TaskEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(ChannelObserver { tx }), rx)
}

pub async fn next_event(rx: &mut mpsc::UnboundedReceiver<TaskEvent>) -> TaskEvent {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

pub struct FnTask<F> {
    name: String,
    body: F,
}

impl<F> Task for FnTask<F>
where
    F: Fn(&CancellationToken) -> TaskResult + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, token: &CancellationToken) -> TaskResult {
        (self.body)(token)
    }
}

pub fn task<F>(name: &str, body: F) -> TaskRef
where
    F: Fn(&CancellationToken) -> TaskResult + Send + Sync + 'static,
{
    Arc::new(FnTask {
        name: name.to_string(),
        body,
    })
}

pub fn text_task(name: &str, text: &'static str) -> TaskRef {
    task(name, move |_| Ok(text.into()))
}

/// Polls `token` every 5ms; returns the number of polls made before it was
/// cancelled, or `None` if `max` elapsed first.
pub fn wait_for_cancel(token: &CancellationToken, max: Duration) -> Option<u32> {
    let deadline = std::time::Instant::now() + max;
    let mut polls = 0;
    while std::time::Instant::now() < deadline {
        if token.is_cancelled() {
            return Some(polls);
        }
        polls += 1;
        std::thread::sleep(Duration::from_millis(5));
    }
    None
}
