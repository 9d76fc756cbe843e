use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// Runs the demo task set through a single-worker scheduler.
#[derive(Parser, Debug)]
#[command(name = "scheduler", version, about)]
pub struct Cli {
    /// Scheduler log file.
    #[arg(long, env = "SOLO_LOG_PATH", default_value = "logs/scheduler.log")]
    pub log_path: PathBuf,

    /// Working directory for task output (Data/, Backup/, random_stats.txt).
    #[arg(long, env = "SOLO_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Cancel whatever is running this many milliseconds after submission.
    #[arg(long, env = "SOLO_CANCEL_AFTER_MS", default_value_t = 1500)]
    pub cancel_after_ms: u64,

    /// How long to let the queue drain before stopping, in seconds.
    #[arg(long, env = "SOLO_RUN_SECS", default_value_t = 6)]
    pub run_secs: u64,
}

impl Cli {
    pub fn cancel_after(&self) -> Duration {
        Duration::from_millis(self.cancel_after_ms)
    }

    pub fn run_for(&self) -> Duration {
        Duration::from_secs(self.run_secs)
    }
}
