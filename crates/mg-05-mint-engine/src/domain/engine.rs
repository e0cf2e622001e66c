//! # Mint Engine
//!
//! The admission pipeline: mintable switch, stage resolution, payment,
//! eligibility, identifier pre-validation, quota reservation, commit.
//!
//! ## Transactional Discipline
//!
//! Every check runs before any write. `admit` either returns an `Admission`
//! with all counters, the replay nonce, the identifier cursor, and accrued
//! payment committed, or an error with nothing mutated. The external ledger
//! call is not this module's concern; the service layer performs it strictly
//! after commit.

use super::entities::{Admission, Eligibility, MintConfig, MintRequest, StageInfo};
use super::errors::MintError;
use mg_01_stage_registry::{Stage, StageRegistry};
use mg_02_supply_accounting::{StageCaps, SupplyLedger};
use mg_03_allowlist_proofs::verify_inclusion;
use mg_04_cosign::{CosignError, CosignVerifier};
use shared_types::{kind_capacity, token_id, Address, Hash, Timestamp, TokenId, RESERVED_KIND};
use std::collections::HashMap;

/// The staged minting admission engine.
///
/// Exclusively owns the stage registry, the supply ledger, the cosign
/// verifier, and the per-wallet replay nonces. All mutation flows through
/// `admit` and the administrative operations.
#[derive(Debug)]
pub struct MintEngine {
    registry: StageRegistry,
    supply: SupplyLedger,
    cosign: CosignVerifier,
    nonces: HashMap<Address, u64>,
    token_kind: u8,
    next_seq: u64,
    mintable: bool,
    accrued: u128,
}

impl MintEngine {
    /// Create an engine from its static configuration.
    ///
    /// Fails if the kind partition is the reserved namespace or the global
    /// wallet limit exceeds the supply cap.
    pub fn new(config: MintConfig) -> Result<Self, MintError> {
        if config.token_kind == RESERVED_KIND {
            return Err(MintError::InvalidTokenKind(config.token_kind));
        }

        let supply = SupplyLedger::new(config.max_mintable_supply, config.global_wallet_limit)?;
        let cosign = CosignVerifier::new(
            config.contract_identity,
            config.chain_id,
            config.timestamp_expiry_seconds,
        );

        Ok(Self {
            registry: StageRegistry::new(config.min_stage_gap),
            supply,
            cosign,
            nonces: HashMap::new(),
            token_kind: config.token_kind,
            next_seq: 0,
            mintable: config.mintable,
            accrued: 0,
        })
    }

    // =========================================================================
    // Admission
    // =========================================================================

    /// Decide one request and commit it.
    ///
    /// Check order: mintable switch, stage resolution, payment, eligibility,
    /// identifier range, quota. The first failure is returned unchanged and
    /// nothing is written. On success all counters, the minter's nonce, the
    /// identifier cursor, and the accrued payment are committed together.
    pub fn admit(&mut self, request: &MintRequest) -> Result<Admission, MintError> {
        if !self.mintable {
            return Err(MintError::NotMintable);
        }

        let stage_index = self.registry.active_stage_at(request.now)?;
        let stage = self.registry.stage_at(stage_index)?.clone();

        let required = stage
            .price
            .checked_mul(request.quantity as u128)
            .ok_or(MintError::NotEnoughValue)?;
        if request.paid_amount < required {
            return Err(MintError::NotEnoughValue);
        }

        self.check_eligibility(request, stage_index, &stage)?;

        let (first_id, next_seq) = self.assign_range(request.quantity as u64)?;

        self.supply.reserve(
            stage_index,
            StageCaps {
                max_stage_supply: stage.max_stage_supply,
                wallet_limit: stage.wallet_limit,
            },
            request.minter,
            request.quantity as u64,
        )?;

        // All checks passed and quota is reserved: commit the remaining
        // per-request state. The nonce advances on every successful mint,
        // cosigned or not.
        *self.nonces.entry(request.minter).or_insert(0) += 1;
        self.next_seq = next_seq;
        self.accrued += request.paid_amount;

        tracing::info!(
            stage_index,
            quantity = request.quantity,
            first_id,
            "mint admitted"
        );

        Ok(Admission {
            minter: request.minter,
            first_id,
            quantity: request.quantity as u64,
            stage_index,
        })
    }

    fn check_eligibility(
        &self,
        request: &MintRequest,
        stage_index: usize,
        stage: &Stage,
    ) -> Result<(), MintError> {
        match Eligibility::resolve(self.cosign.is_configured(), stage) {
            Eligibility::Open => Ok(()),
            Eligibility::Allowlist(digest) => {
                verify_inclusion(&digest, &request.minter, &request.allowlist_proof)?;
                Ok(())
            }
            Eligibility::Delegated => {
                let signature = request
                    .cosign_signature
                    .as_ref()
                    .ok_or(CosignError::InvalidCosignSignature)?;

                self.cosign.verify(
                    &request.minter,
                    request.quantity,
                    request.cosign_timestamp,
                    self.cosign_nonce(&request.minter),
                    request.now,
                    signature,
                )?;

                // The signed timestamp must resolve to the same stage as the
                // call time, closing the time-of-check/time-of-use gap.
                let signed_stage = self.registry.active_stage_at(request.cosign_timestamp)?;
                if signed_stage != stage_index {
                    return Err(MintError::Stage(
                        mg_01_stage_registry::StageError::InvalidStage,
                    ));
                }
                Ok(())
            }
        }
    }

    /// Pre-validate the identifier range for `quantity` units.
    ///
    /// Returns the first identifier and the cursor value after the range.
    /// The whole range must fit inside the configured kind partition.
    fn assign_range(&self, quantity: u64) -> Result<(TokenId, u64), MintError> {
        let end = self
            .next_seq
            .checked_add(quantity)
            .ok_or(MintError::IdentifierSpaceExhausted)?;
        if end > kind_capacity() + 1 {
            return Err(MintError::IdentifierSpaceExhausted);
        }

        let first_id = token_id(self.token_kind, self.next_seq)
            .map_err(|_| MintError::IdentifierSpaceExhausted)?;
        Ok((first_id, end))
    }

    // =========================================================================
    // Administrative Operations (invariant validation only)
    // =========================================================================

    /// Replace the whole stage sequence and reset all per-stage counters.
    pub fn set_stages(&mut self, stages: Vec<Stage>) -> Result<(), MintError> {
        let count = stages.len();
        self.registry.replace_all(stages)?;
        self.supply.reset_stage_counters(count);
        Ok(())
    }

    /// Update a single stage in place. Counters are untouched: this is a
    /// configuration change, not a reset.
    pub fn update_stage(&mut self, index: usize, stage: Stage) -> Result<(), MintError> {
        self.registry.update_one(index, stage)?;
        Ok(())
    }

    /// Enable or disable minting contract-wide.
    pub fn set_mintable(&mut self, mintable: bool) {
        tracing::info!(mintable, "mintable switch set");
        self.mintable = mintable;
    }

    /// Configure or clear the designated cosigner.
    pub fn set_cosigner(&mut self, cosigner: Option<Address>) {
        self.cosign.set_cosigner(cosigner);
    }

    /// Lower (or keep) the published supply cap.
    pub fn set_max_mintable_supply(&mut self, new_cap: u64) -> Result<(), MintError> {
        self.supply.set_max_mintable_supply(new_cap)?;
        Ok(())
    }

    /// Set the global per-wallet limit.
    pub fn set_global_wallet_limit(&mut self, new_limit: u64) -> Result<(), MintError> {
        self.supply.set_global_wallet_limit(new_limit)?;
        Ok(())
    }

    /// Set the cosign timestamp expiry window.
    pub fn set_timestamp_expiry_seconds(&mut self, expiry: u64) {
        self.cosign.set_expiry_seconds(expiry);
    }

    /// Move the identifier cursor forward.
    ///
    /// Moving backward could re-issue identifiers the ledger already holds,
    /// so regression is rejected outright; the new cursor must also still
    /// fit the kind partition.
    pub fn set_next_identifier_cursor(&mut self, seq: u64) -> Result<(), MintError> {
        if seq < self.next_seq {
            return Err(MintError::IdentifierCursorRegression);
        }
        if seq > kind_capacity() {
            return Err(MintError::IdentifierSpaceExhausted);
        }

        tracing::info!(seq, "identifier cursor advanced");
        self.next_seq = seq;
        Ok(())
    }

    /// Drain accrued payment, returning the amount.
    pub fn withdraw(&mut self) -> u128 {
        let amount = self.accrued;
        self.accrued = 0;
        tracing::info!(amount, "accrued funds withdrawn");
        amount
    }

    // =========================================================================
    // Query Surface
    // =========================================================================

    /// Number of configured stages.
    pub fn number_of_stages(&self) -> usize {
        self.registry.len()
    }

    /// Stage configuration plus the wallet's and the stage's minted counts.
    pub fn stage_info(&self, index: usize, wallet: &Address) -> Result<StageInfo, MintError> {
        let stage = self.registry.stage_at(index)?.clone();
        Ok(StageInfo {
            stage,
            wallet_minted: self.supply.stage_minted_by(index, wallet),
            stage_minted: self.supply.stage_minted(index),
        })
    }

    /// The stage active at `ts`, if any.
    pub fn active_stage_at(&self, ts: Timestamp) -> Result<usize, MintError> {
        Ok(self.registry.active_stage_at(ts)?)
    }

    /// Total units minted across all stages.
    pub fn total_minted(&self) -> u64 {
        self.supply.total_minted()
    }

    /// Total units minted by `wallet`.
    pub fn total_minted_by(&self, wallet: &Address) -> u64 {
        self.supply.minted_by(wallet)
    }

    /// The wallet's current replay counter.
    pub fn cosign_nonce(&self, wallet: &Address) -> u64 {
        self.nonces.get(wallet).copied().unwrap_or(0)
    }

    /// The digest a cosigner must sign for this request at the minter's
    /// current nonce.
    pub fn cosign_digest(
        &self,
        minter: &Address,
        quantity: u32,
        timestamp: Timestamp,
    ) -> Result<Hash, MintError> {
        Ok(self
            .cosign
            .digest_for(minter, quantity, timestamp, self.cosign_nonce(minter))?)
    }

    /// The next identifier the engine will assign.
    pub fn next_token_id(&self) -> Result<TokenId, MintError> {
        token_id(self.token_kind, self.next_seq)
            .map_err(|_| MintError::IdentifierSpaceExhausted)
    }

    /// Accrued, not yet withdrawn payment.
    pub fn accrued(&self) -> u128 {
        self.accrued
    }
}
