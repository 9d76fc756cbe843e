mod config;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use solo_core::{EventKind, FileLogSink, Scheduler, TaskEvent, TaskObserver};
use solo_tasks::TaskFactory;
use tokio::time::sleep;
use tracing::{info, warn};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Cli;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}

/// Stands in for a front-end: renders every event as a log line.
struct ConsoleObserver;

impl TaskObserver for ConsoleObserver {
    fn on_task_event(&self, event: &TaskEvent) {
        match event.kind {
            EventKind::Failed => warn!(task = %event.task_name, message = %event.message, "[UI] failed"),
            kind => info!(task = %event.task_name, message = %event.message, "[UI] {kind}"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    info!(?cli, "starting scheduler demo");

    let sink = FileLogSink::open(&cli.log_path)
        .with_context(|| format!("opening log file {}", cli.log_path.display()))?;
    let factory = TaskFactory::new(&cli.output_dir);
    std::fs::create_dir_all(factory.data_dir())
        .with_context(|| format!("creating {}", factory.data_dir().display()))?;

    let scheduler = Scheduler::new();
    let console = Arc::new(ConsoleObserver);
    scheduler.observe(&console);
    scheduler.start(Arc::new(sink)).await?;

    scheduler.submit(factory.quick_test("Quick Test 1"));
    scheduler.submit(factory.file_backup());
    scheduler.submit(factory.matrix_multiply());
    scheduler.submit(factory.random_stats());
    scheduler.submit(factory.quick_test("Quick Test 2"));

    info!(pending = scheduler.pending(), "tasks submitted");

    // Reminder timer: interrupt whatever is running.
    let canceller = scheduler.clone();
    let cancel_after = cli.cancel_after();
    tokio::spawn(async move {
        sleep(cancel_after).await;
        if !canceller.cancel_current() {
            info!("reminder fired with nothing running");
        }
    });

    sleep(cli.run_for()).await;

    info!(pending = scheduler.pending(), "shutting down scheduler");
    scheduler.stop().await;

    Ok(())
}
