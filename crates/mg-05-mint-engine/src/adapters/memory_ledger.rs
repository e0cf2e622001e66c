//! # In-Memory Asset Ledger
//!
//! An `AssetLedgerGateway` adapter backed by a map. Used by the test suite
//! and as a reference for what the engine expects from a real ledger: the
//! reserved-kind check and the existence check are re-validated here even
//! though the engine pre-validates both.

use crate::ports::outbound::{AssetLedgerGateway, LedgerError};
use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{token_kind, Address, TokenId, RESERVED_KIND};
use std::collections::HashMap;

/// In-memory ownership ledger.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    owners: Mutex<HashMap<TokenId, Address>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner of `id`, if minted.
    pub fn owner_of(&self, id: TokenId) -> Option<Address> {
        self.owners.lock().get(&id).copied()
    }

    /// Number of minted units.
    pub fn total_supply(&self) -> usize {
        self.owners.lock().len()
    }
}

#[async_trait]
impl AssetLedgerGateway for MemoryLedger {
    async fn mint_range(
        &self,
        owner: Address,
        first_id: TokenId,
        count: u64,
    ) -> Result<(), LedgerError> {
        let mut owners = self.owners.lock();

        // Validate the whole range before writing any of it.
        for offset in 0..count {
            let id = first_id + offset;
            if token_kind(id) == RESERVED_KIND {
                return Err(LedgerError::ReservedKind(token_kind(id)));
            }
            if owners.contains_key(&id) {
                return Err(LedgerError::IdentifierExists(id));
            }
        }

        for offset in 0..count {
            owners.insert(first_id + offset, owner);
        }

        tracing::debug!(first_id, count, "range minted");
        Ok(())
    }
}
