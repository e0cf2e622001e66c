//! # Stage Entities
//!
//! A `Stage` is one phase of the sale: a price, per-wallet and total supply
//! ceilings, an allowlist commitment, and a half-open activation window.

use serde::{Deserialize, Serialize};
use shared_types::{Hash, Timestamp, ZERO_HASH};

/// One phase of the sale.
///
/// Zero-valued limits mean "unlimited"; an all-zero allowlist digest means
/// the stage is open to everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Unit price in the smallest currency unit.
    pub price: u128,
    /// Maximum units a single wallet may mint within this stage (0 = unlimited).
    pub wallet_limit: u64,
    /// Committed Merkle digest over the set of eligible addresses.
    pub allowlist_digest: Hash,
    /// Maximum units mintable within this stage in total (0 = unlimited).
    pub max_stage_supply: u64,
    /// Start of the activation window (inclusive).
    pub start_time: Timestamp,
    /// End of the activation window (exclusive).
    pub end_time: Timestamp,
}

impl Stage {
    /// Whether this stage has no allowlist commitment.
    pub fn is_open(&self) -> bool {
        self.allowlist_digest == ZERO_HASH
    }

    /// Whether `ts` falls inside this stage's `[start, end)` window.
    pub fn contains(&self, ts: Timestamp) -> bool {
        self.start_time <= ts && ts < self.end_time
    }
}
