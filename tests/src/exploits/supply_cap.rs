//! Supply-cap manipulation attempts: the cap only ratchets down and the
//! global check holds even after reconfiguration.

#[cfg(test)]
mod tests {
    use crate::support::*;
    use mg_02_supply_accounting::SupplyError;
    use mg_05_mint_engine::{MemoryLedger, MintAdmissionApi, MintError, MintService};

    /// Raising the cap after deployment is rejected.
    #[tokio::test]
    async fn test_cap_inflation_rejected() {
        let service = open_service(0);

        assert_eq!(
            service.set_max_mintable_supply(1001),
            Err(MintError::Supply(SupplyError::SupplyCapIncrease))
        );
        assert!(service.set_max_mintable_supply(1000).is_ok());
        assert!(service.set_max_mintable_supply(500).is_ok());
        // Once lowered, the old value counts as an increase too.
        assert_eq!(
            service.set_max_mintable_supply(501),
            Err(MintError::Supply(SupplyError::SupplyCapIncrease))
        );
    }

    /// Lowering the cap below what is already minted freezes further
    /// minting without disturbing existing state.
    #[tokio::test]
    async fn test_cap_below_minted_freezes_minting() {
        let service = open_service(0);
        service.mint(request(ALICE, 10, 0, 50)).await.unwrap();

        service.set_max_mintable_supply(5).unwrap();

        assert_eq!(
            service.mint(request(BOB, 1, 0, 50)).await,
            Err(MintError::Supply(SupplyError::NoSupplyLeft))
        );
        assert_eq!(service.total_minted(), 10);
        assert_eq!(service.ledger().total_supply(), 10);
    }

    /// The cap binds even when the stage itself is unlimited.
    #[tokio::test]
    async fn test_cap_binds_over_unlimited_stage() {
        let mut cfg = config();
        cfg.max_mintable_supply = 3;
        let service = MintService::new(cfg, MemoryLedger::new()).unwrap();
        service.set_stages(vec![stage(0, 0, 100)]).unwrap();

        service.mint(request(ALICE, 3, 0, 50)).await.unwrap();

        assert_eq!(
            service.mint(request(ALICE, 1, 0, 50)).await,
            Err(MintError::Supply(SupplyError::NoSupplyLeft))
        );
    }

    /// A global wallet limit above the cap is meaningless and rejected.
    #[tokio::test]
    async fn test_wallet_limit_above_cap_rejected() {
        let service = open_service(0);

        assert_eq!(
            service.set_global_wallet_limit(1001),
            Err(MintError::Supply(SupplyError::LimitOverflow))
        );
        assert!(service.set_global_wallet_limit(1000).is_ok());
    }
}
