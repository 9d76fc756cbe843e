use std::{thread, time::Duration, time::Instant};

use solo_core::{CancellationToken, Task, TaskResult};

/// Simulated work split into fixed-length steps, checking the token before
/// each one.
///
/// Reports in the plain-text style: `Cancelled at step <i>` or
/// `Completed in <ms>ms - <label>`.
#[derive(Debug, Clone)]
pub struct StepTask {
    name: String,
    label: String,
    steps: u32,
    step_delay: Duration,
}

impl StepTask {
    pub fn new(label: impl Into<String>, steps: u32, step_delay: Duration) -> Self {
        let label = label.into();
        Self {
            name: format!("Test: {label}"),
            label,
            steps,
            step_delay,
        }
    }

    /// Five 200ms steps.
    pub fn quick(label: impl Into<String>) -> Self {
        Self::new(label, 5, Duration::from_millis(200))
    }
}

impl Task for StepTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, token: &CancellationToken) -> TaskResult {
        let start = Instant::now();

        for step in 0..self.steps {
            if token.is_cancelled() {
                return Ok(format!("Cancelled at step {step}").into());
            }
            thread::sleep(self.step_delay);
        }

        let ms = start.elapsed().as_millis();
        Ok(format!("Completed in {ms}ms - {}", self.label).into())
    }
}
