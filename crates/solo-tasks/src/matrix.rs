use std::time::Instant;

use rand::Rng;
use solo_core::{CancellationToken, Task, TaskOutcome, TaskResult};

const DEFAULT_SIZE: usize = 100;

/// Multiplies two random `n x n` matrices and reports the trace of the
/// product. Checks the token once per row.
#[derive(Debug, Clone)]
pub struct MatrixMultiplyTask {
    size: usize,
}

impl Default for MatrixMultiplyTask {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

impl MatrixMultiplyTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(size: usize) -> Self {
        Self { size }
    }
}

/// Row-major `n x n` product.
pub fn multiply(a: &[f64], b: &[f64], n: usize, token: &CancellationToken) -> Option<Vec<f64>> {
    let mut c = vec![0.0; n * n];

    for i in 0..n {
        if token.is_cancelled() {
            return None;
        }
        for j in 0..n {
            c[i * n + j] = (0..n).map(|k| a[i * n + k] * b[k * n + j]).sum();
        }
    }

    Some(c)
}

/// An `n`x`n` matrix of values in `0.0..1.0`, row-major. The token is polled
/// once per row.
pub fn random_matrix(n: usize, rng: &mut impl Rng, token: &CancellationToken) -> Option<Vec<f64>> {
    let mut m = Vec::with_capacity(n * n);
    for _ in 0..n {
        if token.is_cancelled() {
            return None;
        }
        m.extend((0..n).map(|_| rng.gen_range(0.0..1.0)));
    }
    Some(m)
}

pub fn trace(m: &[f64], n: usize) -> f64 {
    (0..n).map(|i| m[i * n + i]).sum()
}

impl Task for MatrixMultiplyTask {
    fn name(&self) -> &str {
        "TaskB Matrix Multiply"
    }

    fn execute(&self, token: &CancellationToken) -> TaskResult {
        let n = self.size;
        let mut rng = rand::thread_rng();

        let inputs = random_matrix(n, &mut rng, token)
            .and_then(|a| random_matrix(n, &mut rng, token).map(|b| (a, b)));
        let Some((a, b)) = inputs else {
            return Ok(TaskOutcome::Cancelled("Matrix initialization cancelled".into()));
        };

        let start = Instant::now();
        let Some(c) = multiply(&a, &b, n, token) else {
            return Ok(TaskOutcome::Cancelled("Matrix calculation cancelled".into()));
        };

        Ok(TaskOutcome::Succeeded(format!(
            "Matrix {n}x{n} multiply completed in {}ms. Trace = {:.2}",
            start.elapsed().as_millis(),
            trace(&c, n)
        )))
    }
}
