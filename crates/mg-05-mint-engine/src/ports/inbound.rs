//! # Inbound Ports (Driving Ports / API)
//!
//! The public admission, query, and administrative surface of the engine.
//!
//! Administrative operations perform invariant validation only; owner-style
//! authorization is the caller's responsibility.

use crate::domain::entities::{MintReceipt, MintRequest, StageInfo};
use crate::domain::errors::MintError;
use async_trait::async_trait;
use mg_01_stage_registry::Stage;
use shared_types::{Address, Hash, Timestamp};

/// Primary mint admission API.
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait MintAdmissionApi: Send + Sync {
    // =========================================================================
    // Mint Request Surface
    // =========================================================================

    /// Decide one mint request and, if admitted, materialize it on the
    /// asset ledger. Every failure is terminal for the request.
    async fn mint(&self, request: MintRequest) -> Result<MintReceipt, MintError>;

    // =========================================================================
    // Query Surface
    // =========================================================================

    /// Number of configured stages.
    fn number_of_stages(&self) -> usize;

    /// A stage's configuration plus the wallet's and the stage's minted
    /// counts.
    fn stage_info(&self, index: usize, wallet: Address) -> Result<StageInfo, MintError>;

    /// The stage active at `ts`, if any.
    fn active_stage_at(&self, ts: Timestamp) -> Result<usize, MintError>;

    /// Total units minted across all stages.
    fn total_minted(&self) -> u64;

    /// Total units minted by `wallet` across all stages.
    fn total_minted_by(&self, wallet: Address) -> u64;

    /// The wallet's current cosign replay counter.
    fn cosign_nonce(&self, wallet: Address) -> u64;

    /// The digest a cosigner must sign for this request at the minter's
    /// current nonce.
    fn cosign_digest(
        &self,
        minter: Address,
        quantity: u32,
        timestamp: Timestamp,
    ) -> Result<Hash, MintError>;

    // =========================================================================
    // Administrative Surface
    // =========================================================================

    /// Replace the whole stage sequence, resetting all per-stage counters.
    fn set_stages(&self, stages: Vec<Stage>) -> Result<(), MintError>;

    /// Update one stage in place; counters are left untouched.
    fn update_stage(&self, index: usize, stage: Stage) -> Result<(), MintError>;

    /// Enable or disable minting contract-wide.
    fn set_mintable(&self, mintable: bool);

    /// Configure or clear the designated cosigner.
    fn set_cosigner(&self, cosigner: Option<Address>);

    /// Lower (or keep) the published supply cap.
    fn set_max_mintable_supply(&self, new_cap: u64) -> Result<(), MintError>;

    /// Set the global per-wallet limit.
    fn set_global_wallet_limit(&self, new_limit: u64) -> Result<(), MintError>;

    /// Set the cosign timestamp expiry window.
    fn set_timestamp_expiry_seconds(&self, expiry: u64);

    /// Move the identifier cursor forward within the kind partition.
    fn set_next_identifier_cursor(&self, seq: u64) -> Result<(), MintError>;

    /// Drain accrued payment, returning the amount.
    fn withdraw(&self) -> u128;
}
