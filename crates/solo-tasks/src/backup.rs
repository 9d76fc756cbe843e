use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use solo_core::{CancellationToken, Task, TaskOutcome, TaskResult};
use tracing::debug;

const STEPS: u32 = 5;

/// Writes a dated backup manifest for `source` into `destination`.
///
/// The simulated copy phase polls the token between steps; I/O failures while
/// writing the manifest are reported as task errors.
#[derive(Debug, Clone)]
pub struct FileBackupTask {
    source: PathBuf,
    destination: PathBuf,
    step_delay: Duration,
}

impl FileBackupTask {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            step_delay: Duration::from_millis(200),
        }
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    pub fn backup_path(&self) -> PathBuf {
        let date = chrono::Local::now().format("%Y%m%d");
        self.destination.join(format!("backup_{date}.txt"))
    }

    fn write_manifest(&self, path: &Path) -> std::io::Result<()> {
        fs::create_dir_all(&self.destination)?;

        let mut file = fs::File::create(path)?;
        writeln!(file, "=== File Backup ===")?;
        writeln!(file, "Time: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file, "Source: {}", self.source.display())?;
        writeln!(file, "Destination: {}", self.destination.display())?;
        writeln!(file, "Backup file: {}", path.display())?;
        writeln!(file, "Status: SUCCESS")?;
        writeln!(file, "===================")?;
        file.flush()
    }
}

impl Task for FileBackupTask {
    fn name(&self) -> &str {
        "TaskA File Backup"
    }

    fn execute(&self, token: &CancellationToken) -> TaskResult {
        for step in 0..STEPS {
            if token.is_cancelled() {
                return Ok(TaskOutcome::Cancelled(format!("Backup cancelled at step {step}")));
            }
            thread::sleep(self.step_delay);
        }

        let path = self.backup_path();
        self.write_manifest(&path)?;
        debug!(path = %path.display(), "backup manifest written");

        Ok(TaskOutcome::Succeeded(format!("Backup created: {}", path.display())))
    }
}
