//! # Stage Registry Errors
//!
//! Error types for stage configuration and activation lookup.

use thiserror::Error;

/// Errors that can occur while configuring or resolving sale stages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StageError {
    /// A stage window has `start_time >= end_time`
    #[error("Stage {index} has an invalid window (start must be strictly before end)")]
    InvalidWindow { index: usize },

    /// Two consecutive stages are closer than the minimum gap
    #[error("Stages {index} and {} violate the minimum gap", index + 1)]
    InsufficientGap { index: usize },

    /// Stage index out of bounds, or no stage active at the queried time
    #[error("Invalid stage")]
    InvalidStage,
}
