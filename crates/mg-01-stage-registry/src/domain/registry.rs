//! # Stage Registry
//!
//! Ordered stage sequence with window and gap validation.
//!
//! ## Invariants
//!
//! - `start_time < end_time` strictly for every stage
//! - `end_time[i] + min_gap <= start_time[i+1]` for consecutive stages, so
//!   activation windows can never be ambiguous or adjacent

use super::entities::Stage;
use super::errors::StageError;
use shared_types::Timestamp;

/// Owner of the ordered sale stage sequence.
///
/// The registry validates configuration invariants and resolves the active
/// stage for a timestamp. It never touches quota counters; resetting those
/// on a full replacement is coordinated by the orchestrator.
#[derive(Debug, Clone)]
pub struct StageRegistry {
    stages: Vec<Stage>,
    min_gap: u64,
}

impl StageRegistry {
    /// Create an empty registry with the given minimum inter-stage gap
    /// (seconds).
    pub fn new(min_gap: u64) -> Self {
        Self {
            stages: Vec::new(),
            min_gap,
        }
    }

    /// Number of configured stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether no stages are configured.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The configured minimum gap between consecutive stages.
    pub fn min_gap(&self) -> u64 {
        self.min_gap
    }

    /// Replace the whole stage sequence.
    ///
    /// Validates every window and every consecutive gap before committing;
    /// on any failure the previous sequence is left untouched.
    pub fn replace_all(&mut self, stages: Vec<Stage>) -> Result<(), StageError> {
        Self::validate_sequence(&stages, self.min_gap)?;

        tracing::info!(count = stages.len(), "stage sequence replaced");
        self.stages = stages;
        Ok(())
    }

    /// Update a single stage in place.
    ///
    /// The updated stage must still satisfy the window invariant and the gap
    /// invariant against both neighbors. Counters for the index are not the
    /// registry's concern and are deliberately left alone.
    pub fn update_one(&mut self, index: usize, stage: Stage) -> Result<(), StageError> {
        if index >= self.stages.len() {
            return Err(StageError::InvalidStage);
        }

        if stage.start_time >= stage.end_time {
            return Err(StageError::InvalidWindow { index });
        }

        if index > 0 {
            let prev = &self.stages[index - 1];
            if !Self::gap_ok(prev.end_time, stage.start_time, self.min_gap) {
                return Err(StageError::InsufficientGap { index: index - 1 });
            }
        }
        if index + 1 < self.stages.len() {
            let next = &self.stages[index + 1];
            if !Self::gap_ok(stage.end_time, next.start_time, self.min_gap) {
                return Err(StageError::InsufficientGap { index });
            }
        }

        tracing::info!(index, "stage updated in place");
        self.stages[index] = stage;
        Ok(())
    }

    /// Resolve the unique stage whose window contains `ts`.
    ///
    /// The gap invariant guarantees at most one match; timestamps in gaps or
    /// outside all windows fail with `InvalidStage`.
    pub fn active_stage_at(&self, ts: Timestamp) -> Result<usize, StageError> {
        self.stages
            .iter()
            .position(|s| s.contains(ts))
            .ok_or(StageError::InvalidStage)
    }

    /// The stage at `index`, or `InvalidStage` if out of bounds.
    pub fn stage_at(&self, index: usize) -> Result<&Stage, StageError> {
        self.stages.get(index).ok_or(StageError::InvalidStage)
    }

    fn gap_ok(prev_end: Timestamp, next_start: Timestamp, gap: u64) -> bool {
        prev_end.checked_add(gap).is_some_and(|edge| edge <= next_start)
    }

    fn validate_sequence(stages: &[Stage], min_gap: u64) -> Result<(), StageError> {
        for (index, stage) in stages.iter().enumerate() {
            if stage.start_time >= stage.end_time {
                return Err(StageError::InvalidWindow { index });
            }
        }

        for (index, pair) in stages.windows(2).enumerate() {
            if !Self::gap_ok(pair[0].end_time, pair[1].start_time, min_gap) {
                return Err(StageError::InsufficientGap { index });
            }
        }

        Ok(())
    }
}
