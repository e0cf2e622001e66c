//! # Outbound Ports (Driven Ports)
//!
//! The asset ledger collaborator that materializes admitted mints. The
//! ledger records ownership; the engine only decides admission.

use async_trait::async_trait;
use shared_types::{Address, TokenId};
use thiserror::Error;

/// Errors the asset ledger can report for a mint range.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// An identifier in the range already exists
    #[error("Identifier {0} already exists")]
    IdentifierExists(TokenId),

    /// The range touches the reserved kind partition
    #[error("Kind {0:#04x} is reserved")]
    ReservedKind(u8),
}

/// Gateway to the external asset ledger.
///
/// `mint_range` is the only suspension point in the whole admission flow
/// and is always invoked after the engine has committed its state.
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait AssetLedgerGateway: Send + Sync {
    /// Materialize `count` sequential units starting at `first_id` for
    /// `owner`.
    ///
    /// Fails if any identifier in the range already exists or falls in the
    /// reserved kind partition. The engine pre-validates both, so a failure
    /// here indicates a collaborator-side inconsistency.
    async fn mint_range(
        &self,
        owner: Address,
        first_id: TokenId,
        count: u64,
    ) -> Result<(), LedgerError>;
}
