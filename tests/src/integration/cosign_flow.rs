//! Cosigned admission flows with a real keypair standing in for the
//! off-path authority.

#[cfg(test)]
mod tests {
    use crate::support::*;
    use mg_04_cosign::CosignError;
    use mg_05_mint_engine::{MemoryLedger, MintAdmissionApi, MintError, MintService};

    fn cosigned_service() -> (MintService<MemoryLedger>, TestCosigner) {
        let cosigner = TestCosigner::generate();
        let service = MintService::new(config(), MemoryLedger::new()).unwrap();
        service.set_stages(vec![stage(0, 0, 100)]).unwrap();
        service.set_cosigner(Some(cosigner.address));
        (service, cosigner)
    }

    /// A properly cosigned request is admitted.
    #[tokio::test]
    async fn test_cosigned_mint_accepted() {
        let (service, cosigner) = cosigned_service();

        let digest = service.cosign_digest(ALICE, 2, 40).unwrap();
        let mut req = request(ALICE, 2, 0, 50);
        req.cosign_timestamp = 40;
        req.cosign_signature = Some(cosigner.sign(&digest));

        let receipt = service.mint(req).await.unwrap();
        assert_eq!(receipt.quantity, 2);
        assert_eq!(service.cosign_nonce(ALICE), 1);
    }

    /// With a cosigner configured, a missing signature is rejected even for
    /// an otherwise eligible requester.
    #[tokio::test]
    async fn test_missing_signature_rejected() {
        let (service, _cosigner) = cosigned_service();

        let result = service.mint(request(ALICE, 1, 0, 50)).await;

        assert_eq!(
            result,
            Err(MintError::Cosign(CosignError::InvalidCosignSignature))
        );
    }

    /// The signed timestamp must resolve to the stage active at call time.
    #[tokio::test]
    async fn test_signed_timestamp_must_match_stage() {
        let cosigner = TestCosigner::generate();
        let service = MintService::new(config(), MemoryLedger::new()).unwrap();
        service
            .set_stages(vec![stage(0, 0, 100), stage(0, 200, 1000)])
            .unwrap();
        service.set_cosigner(Some(cosigner.address));

        // Signed while stage 0 was active, submitted during stage 1.
        let digest = service.cosign_digest(ALICE, 1, 50).unwrap();
        let mut req = request(ALICE, 1, 0, 250);
        req.cosign_timestamp = 50;
        req.cosign_signature = Some(cosigner.sign(&digest));

        assert!(service.mint(req).await.is_err());
    }

    /// Expiry boundary: `now - T == expiry` passes, one second more fails.
    #[tokio::test]
    async fn test_expiry_boundary() {
        let cosigner = TestCosigner::generate();
        let mut cfg = config();
        cfg.timestamp_expiry_seconds = 30;
        let service = MintService::new(cfg, MemoryLedger::new()).unwrap();
        service.set_stages(vec![stage(0, 0, 100)]).unwrap();
        service.set_cosigner(Some(cosigner.address));

        let digest = service.cosign_digest(ALICE, 1, 10).unwrap();
        let signature = cosigner.sign(&digest);

        let mut late = request(ALICE, 1, 0, 41);
        late.cosign_timestamp = 10;
        late.cosign_signature = Some(signature.clone());
        assert_eq!(
            service.mint(late).await,
            Err(MintError::Cosign(CosignError::TimestampExpired))
        );

        let mut on_time = request(ALICE, 1, 0, 40);
        on_time.cosign_timestamp = 10;
        on_time.cosign_signature = Some(signature);
        assert!(service.mint(on_time).await.is_ok());
    }

    /// Clearing the cosigner restores allowlist/open eligibility.
    #[tokio::test]
    async fn test_clearing_cosigner_restores_open_stage() {
        let (service, _cosigner) = cosigned_service();

        assert!(service.mint(request(ALICE, 1, 0, 50)).await.is_err());

        service.set_cosigner(None);
        assert!(service.mint(request(ALICE, 1, 0, 50)).await.is_ok());
    }
}
