//! Ready-made tasks for the solo scheduler.
//!
//! Each task polls its [`CancellationToken`](solo_core::CancellationToken)
//! while working. [`StepTask`] reports in the plain-text style classified by
//! marker substrings; the others return explicit
//! [`TaskOutcome`](solo_core::TaskOutcome) tags.

pub mod backup;
pub mod factory;
pub mod matrix;
pub mod stats;
pub mod step;

pub use backup::FileBackupTask;
pub use factory::TaskFactory;
pub use matrix::MatrixMultiplyTask;
pub use stats::{RandomStatsTask, Stats};
pub use step::StepTask;
