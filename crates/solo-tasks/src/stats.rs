use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use rand::Rng;
use solo_core::{CancellationToken, Task, TaskOutcome, TaskResult};

const DEFAULT_COUNT: usize = 500;
const POLL_EVERY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
}

impl Stats {
    /// Population statistics; `None` for an empty sample.
    pub fn from_samples(samples: &[u32]) -> Option<Self> {
        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let count = samples.len();

        let mean = samples.iter().map(|&s| f64::from(s)).sum::<f64>() / count as f64;
        let variance = samples
            .iter()
            .map(|&s| (f64::from(s) - mean).powi(2))
            .sum::<f64>()
            / count as f64;

        Some(Self {
            count,
            mean,
            variance,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "Generated {} random numbers. Mean: {:.4}, Variance: {:.4}, StdDev: {:.4}",
            self.count, self.mean, self.variance, self.std_dev
        )
    }

    fn append_report(&self, path: &Path) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "=== Random Statistics ===")?;
        writeln!(file, "Time: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file, "Count: {}", self.count)?;
        writeln!(file, "Mean: {:.4}", self.mean)?;
        writeln!(file, "Variance: {:.4}", self.variance)?;
        writeln!(file, "Standard Deviation: {:.4}", self.std_dev)?;
        writeln!(file, "Min: {}", self.min)?;
        writeln!(file, "Max: {}", self.max)?;
        writeln!(file, "=========================")?;
        file.flush()
    }
}

/// Draws integers in `0..=100` and summarises them, optionally appending a
/// report to a file.
#[derive(Debug, Clone)]
pub struct RandomStatsTask {
    count: usize,
    report: Option<PathBuf>,
}

impl Default for RandomStatsTask {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            report: None,
        }
    }
}

impl RandomStatsTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.report = Some(path.into());
        self
    }
}

impl Task for RandomStatsTask {
    fn name(&self) -> &str {
        "TaskE Random Stats"
    }

    fn execute(&self, token: &CancellationToken) -> TaskResult {
        let mut rng = rand::thread_rng();
        let mut samples: Vec<u32> = Vec::with_capacity(self.count);

        for i in 0..self.count {
            if i % POLL_EVERY == 0 && token.is_cancelled() {
                return Ok(TaskOutcome::Cancelled(format!(
                    "Random stats calculation cancelled at iteration {i}"
                )));
            }
            samples.push(rng.gen_range(0..=100));
        }

        let Some(stats) = Stats::from_samples(&samples) else {
            return Ok(TaskOutcome::Failed("no samples drawn".into()));
        };

        if let Some(path) = &self.report {
            stats.append_report(path)?;
        }

        Ok(TaskOutcome::Succeeded(stats.summary()))
    }
}
