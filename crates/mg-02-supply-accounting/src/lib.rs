//! # Supply Accounting Subsystem (MG-02)
//!
//! Owns every quota counter the admission engine consults: global supply,
//! global per-wallet, per-stage, and per-stage-per-wallet.
//!
//! ## Invariants
//!
//! - Counters are monotonically non-decreasing once consumed; the only reset
//!   path is a full stage-sequence replacement
//! - `max_mintable_supply` is a one-way ratchet: it can be lowered or kept
//!   equal, never raised
//! - A reservation checks all four ceilings before mutating anything, then
//!   advances all four counters together

pub mod domain;

pub use domain::errors::SupplyError;
pub use domain::ledger::{StageCaps, SupplyLedger};
