//! End-to-end admission scenarios: payment, quotas, allowlists, and the
//! query surface.

#[cfg(test)]
mod tests {
    use crate::support::*;
    use mg_02_supply_accounting::SupplyError;
    use mg_03_allowlist_proofs::{AllowlistTree, ProofError};
    use mg_05_mint_engine::{
        MemoryLedger, MintAdmissionApi, MintError, MintService,
    };
    use shared_types::token_id;

    /// Minting 5 units against a stage supply of 5 succeeds; one more unit
    /// fails with the stage-supply error and no side effects.
    #[tokio::test]
    async fn test_stage_supply_exhaustion() {
        let service = MintService::new(config(), MemoryLedger::new()).unwrap();
        let mut capped = stage(0, 0, 100);
        capped.max_stage_supply = 5;
        service.set_stages(vec![capped]).unwrap();

        service.mint(request(ALICE, 5, 0, 10)).await.unwrap();
        assert_eq!(service.stage_info(0, ALICE).unwrap().stage_minted, 5);

        let result = service.mint(request(BOB, 1, 0, 10)).await;
        assert_eq!(
            result,
            Err(MintError::Supply(SupplyError::StageSupplyExceeded))
        );
        assert_eq!(service.total_minted(), 5);
        assert_eq!(service.ledger().total_supply(), 5);
    }

    /// Underpayment rejects before any quota is consumed.
    #[tokio::test]
    async fn test_payment_gate() {
        let service = open_service(7);

        let result = service.mint(request(ALICE, 3, 20, 10)).await;

        assert_eq!(result, Err(MintError::NotEnoughValue));
        assert!(service.mint(request(ALICE, 3, 21, 10)).await.is_ok());
    }

    /// The mintable switch gates everything.
    #[tokio::test]
    async fn test_mintable_switch() {
        let service = open_service(0);

        service.set_mintable(false);
        assert_eq!(
            service.mint(request(ALICE, 1, 0, 10)).await,
            Err(MintError::NotMintable)
        );

        service.set_mintable(true);
        assert!(service.mint(request(ALICE, 1, 0, 10)).await.is_ok());
    }

    /// Allowlisted stage: members pass with their proof, outsiders fail.
    #[tokio::test]
    async fn test_allowlist_gate() {
        let tree = AllowlistTree::build(&[ALICE, BOB]);
        let service = MintService::new(config(), MemoryLedger::new()).unwrap();
        let mut gated = stage(0, 0, 100);
        gated.allowlist_digest = tree.digest();
        service.set_stages(vec![gated]).unwrap();

        let mut ok = request(ALICE, 1, 0, 10);
        ok.allowlist_proof = tree.proof_for(&ALICE).unwrap();
        service.mint(ok).await.unwrap();

        let mut outsider = request(CAROL, 1, 0, 10);
        outsider.allowlist_proof = tree.proof_for(&BOB).unwrap();
        assert_eq!(
            service.mint(outsider).await,
            Err(MintError::Proof(ProofError::InvalidProof))
        );
    }

    /// Global wallet limit applies across stages.
    #[tokio::test]
    async fn test_global_wallet_limit_spans_stages() {
        let mut cfg = config();
        cfg.global_wallet_limit = 3;
        let service = MintService::new(cfg, MemoryLedger::new()).unwrap();
        service
            .set_stages(vec![stage(0, 0, 10), stage(0, 100, 110)])
            .unwrap();

        service.mint(request(ALICE, 2, 0, 5)).await.unwrap();
        service.mint(request(ALICE, 1, 0, 105)).await.unwrap();

        assert_eq!(
            service.mint(request(ALICE, 1, 0, 105)).await,
            Err(MintError::Supply(SupplyError::WalletGlobalLimitExceeded))
        );
        // Other wallets are unaffected.
        assert!(service.mint(request(BOB, 3, 0, 105)).await.is_ok());
    }

    /// Identifier ranges are sequential across requesters and visible on
    /// the ledger.
    #[tokio::test]
    async fn test_identifier_assignment() {
        let service = open_service(0);

        let a = service.mint(request(ALICE, 2, 0, 10)).await.unwrap();
        let b = service.mint(request(BOB, 1, 0, 10)).await.unwrap();

        assert_eq!(a.first_id, token_id(0x01, 0).unwrap());
        assert_eq!(b.first_id, token_id(0x01, 2).unwrap());
        assert_eq!(service.ledger().owner_of(a.first_id + 1), Some(ALICE));
        assert_eq!(service.ledger().owner_of(b.first_id), Some(BOB));
    }

    /// Withdraw drains exactly the accrued payment.
    #[tokio::test]
    async fn test_withdraw_accrued_payment() {
        let service = open_service(4);

        service.mint(request(ALICE, 2, 8, 10)).await.unwrap();
        // Overpayment accrues in full; refunds are an external concern.
        service.mint(request(BOB, 1, 10, 10)).await.unwrap();

        assert_eq!(service.withdraw(), 18);
        assert_eq!(service.withdraw(), 0);
    }
}
