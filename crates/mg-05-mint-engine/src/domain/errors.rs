//! # Mint Engine Errors
//!
//! The engine-level error taxonomy. Component errors pass through unchanged
//! so a caller always sees the specific check that rejected the request;
//! nothing is swallowed or downgraded.

use crate::ports::outbound::LedgerError;
use mg_01_stage_registry::StageError;
use mg_02_supply_accounting::SupplyError;
use mg_03_allowlist_proofs::ProofError;
use mg_04_cosign::CosignError;
use thiserror::Error;

/// Errors that can terminate a mint request or an administrative operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MintError {
    /// Contract-wide minting is disabled
    #[error("Minting is disabled")]
    NotMintable,

    /// Payment below stage price times quantity
    #[error("Not enough value paid")]
    NotEnoughValue,

    /// A nested admission attempt while another is in flight
    #[error("Reentrant mint call")]
    ReentrantCall,

    /// The configured kind partition cannot fit the requested range
    #[error("Identifier space exhausted for this kind")]
    IdentifierSpaceExhausted,

    /// The identifier cursor may only move forward
    #[error("Identifier cursor may only move forward")]
    IdentifierCursorRegression,

    /// The engine was configured with the reserved kind partition
    #[error("Token kind {0:#04x} is not mintable")]
    InvalidTokenKind(u8),

    /// Stage configuration or resolution failure
    #[error(transparent)]
    Stage(#[from] StageError),

    /// Quota configuration or reservation failure
    #[error(transparent)]
    Supply(#[from] SupplyError),

    /// Allowlist proof failure
    #[error(transparent)]
    Proof(#[from] ProofError),

    /// Cosign authorization failure
    #[error(transparent)]
    Cosign(#[from] CosignError),

    /// Asset ledger failure after admission
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
