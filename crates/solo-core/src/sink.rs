//! Append-only text sinks for the scheduler's diagnostic lines.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use parking_lot::Mutex;
use tracing::debug;

/// Accepts one line of text at a time.
///
/// The scheduler never treats a write failure as fatal; it logs the error and
/// carries on.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn write_line(&self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

fn now_str() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Timestamped, flushed-per-line log file.
///
/// Opening writes a `===== Log Open =====` banner; dropping the sink writes
/// `===== Log Close =====`.
#[derive(Debug)]
pub struct FileLogSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileLogSink {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "===== Log Open: {} =====", now_str())?;
        file.flush()?;

        debug!(path = %path.display(), "log sink opened");

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLogSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self.file.lock();
        writeln!(file, "[{}] {}", now_str(), line)?;
        file.flush()
    }
}

impl Drop for FileLogSink {
    fn drop(&mut self) {
        let file = self.file.get_mut();
        let _ = writeln!(file, "===== Log Close =====");
        let _ = file.flush();
    }
}
