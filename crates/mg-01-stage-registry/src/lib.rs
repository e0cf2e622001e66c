//! # Stage Registry Subsystem (MG-01)
//!
//! Owns the ordered list of sale stages and their activation windows.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): stage entities and window/gap validation,
//!   no I/O
//!
//! ## Invariants
//!
//! - Every stage window satisfies `start_time < end_time` strictly
//! - Consecutive stages are separated by at least the configured minimum gap,
//!   so at most one stage is active at any timestamp
//! - The registry owns the stage sequence exclusively; quota counters live in
//!   the supply accounting subsystem

pub mod domain;

pub use domain::entities::Stage;
pub use domain::errors::StageError;
pub use domain::registry::StageRegistry;
