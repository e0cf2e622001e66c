//! # Mint Service
//!
//! Application service layer that implements `MintAdmissionApi`.
//!
//! ## Reentrancy Discipline
//!
//! The ledger call may transfer control to code that tries to mint again
//! through this same service. Two measures make that harmless:
//!
//! 1. An in-flight flag is taken at entry (atomic compare-exchange) and a
//!    nested attempt fails deterministically with `ReentrantCall`.
//! 2. The engine lock is released only after the admission is fully
//!    committed, so even a hypothetical nested observer sees updated
//!    counters and is rejected by the same quota checks.
//!
//! The ledger call is the final action of the flow.

use crate::domain::engine::MintEngine;
use crate::domain::entities::{MintConfig, MintReceipt, MintRequest, StageInfo};
use crate::domain::errors::MintError;
use crate::ports::inbound::MintAdmissionApi;
use crate::ports::outbound::AssetLedgerGateway;
use async_trait::async_trait;
use mg_01_stage_registry::Stage;
use parking_lot::Mutex;
use shared_types::{Address, Hash, Timestamp};
use std::sync::atomic::{AtomicBool, Ordering};

/// The mint admission service.
///
/// Owns the engine behind a mutex and the outbound ledger gateway. All
/// admission checks run inside the mutex with no suspension point; the only
/// `await` is the ledger call, performed after the lock is released.
pub struct MintService<L: AssetLedgerGateway> {
    engine: Mutex<MintEngine>,
    ledger: L,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, MintError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                tracing::warn!("reentrant mint attempt rejected");
                MintError::ReentrantCall
            })?;
        Ok(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<L: AssetLedgerGateway> MintService<L> {
    /// Create a service from the engine configuration and a ledger gateway.
    pub fn new(config: MintConfig, ledger: L) -> Result<Self, MintError> {
        Ok(Self {
            engine: Mutex::new(MintEngine::new(config)?),
            ledger,
            in_flight: AtomicBool::new(false),
        })
    }

    /// The outbound ledger gateway.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}

#[async_trait]
impl<L: AssetLedgerGateway> MintAdmissionApi for MintService<L> {
    async fn mint(&self, request: MintRequest) -> Result<MintReceipt, MintError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        // Admission and commit happen atomically under the engine lock.
        let admission = self.engine.lock().admit(&request)?;

        // State is durably committed; the external call is last. A failure
        // here is a collaborator-side inconsistency and is propagated, but
        // the admission itself stands.
        self.ledger
            .mint_range(admission.minter, admission.first_id, admission.quantity)
            .await?;

        Ok(MintReceipt {
            minter: admission.minter,
            first_id: admission.first_id,
            quantity: admission.quantity,
            stage_index: admission.stage_index,
        })
    }

    fn number_of_stages(&self) -> usize {
        self.engine.lock().number_of_stages()
    }

    fn stage_info(&self, index: usize, wallet: Address) -> Result<StageInfo, MintError> {
        self.engine.lock().stage_info(index, &wallet)
    }

    fn active_stage_at(&self, ts: Timestamp) -> Result<usize, MintError> {
        self.engine.lock().active_stage_at(ts)
    }

    fn total_minted(&self) -> u64 {
        self.engine.lock().total_minted()
    }

    fn total_minted_by(&self, wallet: Address) -> u64 {
        self.engine.lock().total_minted_by(&wallet)
    }

    fn cosign_nonce(&self, wallet: Address) -> u64 {
        self.engine.lock().cosign_nonce(&wallet)
    }

    fn cosign_digest(
        &self,
        minter: Address,
        quantity: u32,
        timestamp: Timestamp,
    ) -> Result<Hash, MintError> {
        self.engine.lock().cosign_digest(&minter, quantity, timestamp)
    }

    fn set_stages(&self, stages: Vec<Stage>) -> Result<(), MintError> {
        self.engine.lock().set_stages(stages)
    }

    fn update_stage(&self, index: usize, stage: Stage) -> Result<(), MintError> {
        self.engine.lock().update_stage(index, stage)
    }

    fn set_mintable(&self, mintable: bool) {
        self.engine.lock().set_mintable(mintable);
    }

    fn set_cosigner(&self, cosigner: Option<Address>) {
        self.engine.lock().set_cosigner(cosigner);
    }

    fn set_max_mintable_supply(&self, new_cap: u64) -> Result<(), MintError> {
        self.engine.lock().set_max_mintable_supply(new_cap)
    }

    fn set_global_wallet_limit(&self, new_limit: u64) -> Result<(), MintError> {
        self.engine.lock().set_global_wallet_limit(new_limit)
    }

    fn set_timestamp_expiry_seconds(&self, expiry: u64) {
        self.engine.lock().set_timestamp_expiry_seconds(expiry);
    }

    fn set_next_identifier_cursor(&self, seq: u64) -> Result<(), MintError> {
        self.engine.lock().set_next_identifier_cursor(seq)
    }

    fn withdraw(&self) -> u128 {
        self.engine.lock().withdraw()
    }
}

// =============================================================================
// TESTS
// =============================================================================
