use std::{path::PathBuf, sync::Arc, time::Duration};

use solo_core::TaskRef;

use crate::{FileBackupTask, MatrixMultiplyTask, RandomStatsTask, StepTask};

/// Builds ready-to-submit tasks rooted at a working directory.
///
/// Layout under `root`: `Data/` is backed up into `Backup/`, and random
/// statistics are appended to `random_stats.txt`.
#[derive(Debug, Clone)]
pub struct TaskFactory {
    root: PathBuf,
}

impl TaskFactory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("Data")
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.root.join("Backup")
    }

    pub fn stats_report(&self) -> PathBuf {
        self.root.join("random_stats.txt")
    }

    pub fn file_backup(&self) -> TaskRef {
        Arc::new(FileBackupTask::new(self.data_dir(), self.backup_dir()))
    }

    pub fn matrix_multiply(&self) -> TaskRef {
        Arc::new(MatrixMultiplyTask::new())
    }

    pub fn random_stats(&self) -> TaskRef {
        Arc::new(RandomStatsTask::new().with_report(self.stats_report()))
    }

    pub fn quick_test(&self, label: &str) -> TaskRef {
        Arc::new(StepTask::quick(label))
    }

    pub fn steps(&self, label: &str, steps: u32, step_delay: Duration) -> TaskRef {
        Arc::new(StepTask::new(label, steps, step_delay))
    }
}
