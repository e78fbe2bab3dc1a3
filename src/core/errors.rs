//! Terminal outcomes of a generation request.
//!
//! Every failure is reported once, for the whole request. A request that fails
//! never yields partial geometry.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("iterations must be between 0 and {max}, got {iterations}")]
    InvalidInput { iterations: i64, max: u32 },

    #[error(
        "{iterations} iterations would produce {projected_segments} segments, \
         above the configured ceiling of {max_segments}"
    )]
    ResourceBudgetExceeded {
        iterations: u32,
        /// Saturates at `u64::MAX` when the projection overflows.
        projected_segments: u64,
        max_segments: u64,
    },

    #[error("worker for partition {partition} failed: {reason}")]
    WorkerFailure { partition: usize, reason: String },
}

impl GenerateError {
    pub(crate) fn expansion<E: fmt::Display>(partition: usize, err: E) -> Self {
        Self::WorkerFailure {
            partition,
            reason: err.to_string(),
        }
    }

    pub(crate) fn panicked(partition: usize) -> Self {
        Self::WorkerFailure {
            partition,
            reason: "worker panicked".to_string(),
        }
    }

    pub(crate) fn allocation(segments: usize) -> Self {
        Self::WorkerFailure {
            partition: 0,
            reason: format!("could not allocate {} segments", segments),
        }
    }
}
