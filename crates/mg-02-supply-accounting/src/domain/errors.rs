//! # Supply Accounting Errors
//!
//! Error types for quota configuration and reservation.

use thiserror::Error;

/// Errors that can occur while configuring limits or reserving quota.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SupplyError {
    /// Attempt to raise the published supply cap
    #[error("Supply cap can only be lowered, not raised")]
    SupplyCapIncrease,

    /// Per-wallet limit larger than the total supply cap
    #[error("Global wallet limit exceeds the supply cap")]
    LimitOverflow,

    /// Reservation would exceed the total supply cap
    #[error("No supply left")]
    NoSupplyLeft,

    /// Reservation would exceed the wallet's global limit
    #[error("Wallet global limit exceeded")]
    WalletGlobalLimitExceeded,

    /// Reservation would exceed the stage's total supply
    #[error("Stage supply exceeded")]
    StageSupplyExceeded,

    /// Reservation would exceed the wallet's limit within the stage
    #[error("Wallet stage limit exceeded")]
    WalletStageLimitExceeded,

    /// Stage index not covered by the counter vectors. This indicates the
    /// caller resolved a stage the accountant was never told about.
    #[error("Unknown stage index {0}")]
    UnknownStage(usize),
}
