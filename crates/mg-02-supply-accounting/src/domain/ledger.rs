//! # Supply Ledger
//!
//! The four quota counters and their check-then-commit reservation.
//!
//! ## Reservation Discipline
//!
//! `reserve` evaluates the four ceilings in a fixed order (global supply,
//! global wallet, stage supply, stage wallet) and mutates nothing until all
//! four have passed. The commit then advances all four counters in one step,
//! so no partial update is ever observable.

use super::errors::SupplyError;
use shared_types::Address;
use std::collections::HashMap;

/// Per-stage ceilings consulted during a reservation.
///
/// The registry owns the stage definitions; callers pass the ceilings of the
/// resolved stage here so the accountant never reaches into foreign state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageCaps {
    /// Maximum units mintable within the stage in total (0 = unlimited).
    pub max_stage_supply: u64,
    /// Maximum units a single wallet may mint within the stage (0 = unlimited).
    pub wallet_limit: u64,
}

/// Owner of all quota counters.
#[derive(Debug, Clone)]
pub struct SupplyLedger {
    max_mintable_supply: u64,
    global_wallet_limit: u64,
    global_minted: u64,
    global_minted_by_wallet: HashMap<Address, u64>,
    stage_minted: Vec<u64>,
    stage_minted_by_wallet: Vec<HashMap<Address, u64>>,
}

impl SupplyLedger {
    /// Create a ledger with the published supply cap and global wallet limit
    /// (0 = unlimited).
    ///
    /// Fails with `LimitOverflow` if the wallet limit exceeds the cap; a
    /// per-wallet allowance larger than total supply is meaningless.
    pub fn new(max_mintable_supply: u64, global_wallet_limit: u64) -> Result<Self, SupplyError> {
        if global_wallet_limit > max_mintable_supply {
            return Err(SupplyError::LimitOverflow);
        }

        Ok(Self {
            max_mintable_supply,
            global_wallet_limit,
            global_minted: 0,
            global_minted_by_wallet: HashMap::new(),
            stage_minted: Vec::new(),
            stage_minted_by_wallet: Vec::new(),
        })
    }

    /// Lower (or keep) the published supply cap.
    ///
    /// Raising the cap fails with `SupplyCapIncrease`: a published cap must
    /// never inflate.
    pub fn set_max_mintable_supply(&mut self, new_cap: u64) -> Result<(), SupplyError> {
        if new_cap > self.max_mintable_supply {
            return Err(SupplyError::SupplyCapIncrease);
        }

        tracing::info!(new_cap, "supply cap lowered");
        self.max_mintable_supply = new_cap;
        Ok(())
    }

    /// Set the global per-wallet limit (0 = unlimited).
    pub fn set_global_wallet_limit(&mut self, new_limit: u64) -> Result<(), SupplyError> {
        if new_limit > self.max_mintable_supply {
            return Err(SupplyError::LimitOverflow);
        }

        tracing::info!(new_limit, "global wallet limit set");
        self.global_wallet_limit = new_limit;
        Ok(())
    }

    /// Reset per-stage counters for a replaced sequence of `stage_count`
    /// stages. Global counters are never reset.
    pub fn reset_stage_counters(&mut self, stage_count: usize) {
        self.stage_minted = vec![0; stage_count];
        self.stage_minted_by_wallet = vec![HashMap::new(); stage_count];
    }

    /// Reserve `quantity` units for `wallet` within `stage_index`.
    ///
    /// All four ceiling checks run before any counter moves; on success all
    /// four counters advance by exactly `quantity`.
    pub fn reserve(
        &mut self,
        stage_index: usize,
        caps: StageCaps,
        wallet: Address,
        quantity: u64,
    ) -> Result<(), SupplyError> {
        if stage_index >= self.stage_minted.len() {
            return Err(SupplyError::UnknownStage(stage_index));
        }

        // (a) global supply cap, always enforced
        let new_global = self
            .global_minted
            .checked_add(quantity)
            .ok_or(SupplyError::NoSupplyLeft)?;
        if new_global > self.max_mintable_supply {
            return Err(SupplyError::NoSupplyLeft);
        }

        // (b) global per-wallet limit
        let wallet_global = self.global_minted_by_wallet.get(&wallet).copied().unwrap_or(0);
        let new_wallet_global = wallet_global
            .checked_add(quantity)
            .ok_or(SupplyError::WalletGlobalLimitExceeded)?;
        if self.global_wallet_limit != 0 && new_wallet_global > self.global_wallet_limit {
            return Err(SupplyError::WalletGlobalLimitExceeded);
        }

        // (c) stage supply
        let new_stage = self.stage_minted[stage_index]
            .checked_add(quantity)
            .ok_or(SupplyError::StageSupplyExceeded)?;
        if caps.max_stage_supply != 0 && new_stage > caps.max_stage_supply {
            return Err(SupplyError::StageSupplyExceeded);
        }

        // (d) stage per-wallet limit
        let wallet_stage = self.stage_minted_by_wallet[stage_index]
            .get(&wallet)
            .copied()
            .unwrap_or(0);
        let new_wallet_stage = wallet_stage
            .checked_add(quantity)
            .ok_or(SupplyError::WalletStageLimitExceeded)?;
        if caps.wallet_limit != 0 && new_wallet_stage > caps.wallet_limit {
            return Err(SupplyError::WalletStageLimitExceeded);
        }

        // All ceilings passed: commit the four counters together.
        self.global_minted = new_global;
        self.global_minted_by_wallet.insert(wallet, new_wallet_global);
        self.stage_minted[stage_index] = new_stage;
        self.stage_minted_by_wallet[stage_index].insert(wallet, new_wallet_stage);

        tracing::debug!(stage_index, quantity, "quota reserved");
        Ok(())
    }

    /// The published supply cap.
    pub fn max_mintable_supply(&self) -> u64 {
        self.max_mintable_supply
    }

    /// The global per-wallet limit (0 = unlimited).
    pub fn global_wallet_limit(&self) -> u64 {
        self.global_wallet_limit
    }

    /// Total units minted across all stages.
    pub fn total_minted(&self) -> u64 {
        self.global_minted
    }

    /// Total units minted by `wallet` across all stages.
    pub fn minted_by(&self, wallet: &Address) -> u64 {
        self.global_minted_by_wallet.get(wallet).copied().unwrap_or(0)
    }

    /// Units minted within stage `index` (0 if the index is unknown).
    pub fn stage_minted(&self, index: usize) -> u64 {
        self.stage_minted.get(index).copied().unwrap_or(0)
    }

    /// Units minted by `wallet` within stage `index` (0 if unknown).
    pub fn stage_minted_by(&self, index: usize, wallet: &Address) -> u64 {
        self.stage_minted_by_wallet
            .get(index)
            .and_then(|m| m.get(wallet))
            .copied()
            .unwrap_or(0)
    }
}
