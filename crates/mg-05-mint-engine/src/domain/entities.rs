//! # Mint Engine Entities
//!
//! Request, receipt, and configuration types for the admission pipeline.

use mg_01_stage_registry::Stage;
use mg_04_cosign::CosignSignature;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, Timestamp, TokenId};

/// Static engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintConfig {
    /// Identity the cosign digest binds signatures to.
    pub contract_identity: Address,
    /// Chain context the cosign digest binds signatures to.
    pub chain_id: u64,
    /// Kind partition all minted identifiers live in (must not be reserved).
    pub token_kind: u8,
    /// Minimum gap between consecutive stage windows, in seconds.
    pub min_stage_gap: u64,
    /// Published total supply cap.
    pub max_mintable_supply: u64,
    /// Global per-wallet limit (0 = unlimited).
    pub global_wallet_limit: u64,
    /// Cosign timestamp expiry window, in seconds.
    pub timestamp_expiry_seconds: u64,
    /// Whether minting starts enabled.
    pub mintable: bool,
}

/// One mint request as submitted by a requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRequest {
    /// The requesting wallet.
    pub minter: Address,
    /// Units requested.
    pub quantity: u32,
    /// Payment carried with the request, smallest currency unit.
    pub paid_amount: u128,
    /// Sibling path proving allowlist membership (ignored for open and
    /// cosigned stages).
    pub allowlist_proof: Vec<Hash>,
    /// Timestamp the cosigner committed to (ignored when no cosigner is
    /// configured).
    pub cosign_timestamp: Timestamp,
    /// The cosigner's authorization, when one is configured.
    pub cosign_signature: Option<CosignSignature>,
    /// Current time as observed by the caller's environment.
    pub now: Timestamp,
}

/// Eligibility mechanism resolved once per stage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// No allowlist and no cosigner: everyone may mint.
    Open,
    /// Membership in the committed set must be proven.
    Allowlist(Hash),
    /// A cosigner is configured; its authorization overrides the allowlist.
    Delegated,
}

impl Eligibility {
    /// Resolve the mechanism for a stage: a configured cosigner takes
    /// precedence, then the stage's allowlist commitment, then open.
    pub fn resolve(cosigner_configured: bool, stage: &Stage) -> Self {
        if cosigner_configured {
            Eligibility::Delegated
        } else if stage.is_open() {
            Eligibility::Open
        } else {
            Eligibility::Allowlist(stage.allowlist_digest)
        }
    }
}

/// An admitted request, fully committed and ready for the asset ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    /// The admitted wallet.
    pub minter: Address,
    /// First identifier of the assigned range.
    pub first_id: TokenId,
    /// Number of sequential identifiers assigned.
    pub quantity: u64,
    /// Stage the request was admitted under.
    pub stage_index: usize,
}

/// Receipt returned to the caller after the ledger call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    /// The minting wallet.
    pub minter: Address,
    /// First identifier minted.
    pub first_id: TokenId,
    /// Units minted.
    pub quantity: u64,
    /// Stage the mint was admitted under.
    pub stage_index: usize,
}

/// Stage configuration plus minted counts, for the query surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInfo {
    /// The stage configuration.
    pub stage: Stage,
    /// Units the queried wallet has minted within this stage.
    pub wallet_minted: u64,
    /// Units minted within this stage in total.
    pub stage_minted: u64,
}
