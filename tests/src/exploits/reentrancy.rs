//! Reentrancy simulation: a ledger adapter that calls back into the
//! service mid-mint, the way a malicious receiver hook would.

#[cfg(test)]
mod tests {
    use crate::support::*;
    use async_trait::async_trait;
    use mg_05_mint_engine::{
        AssetLedgerGateway, LedgerError, MintAdmissionApi, MintError, MintService,
    };
    use shared_types::{Address, TokenId};
    use std::sync::{Arc, Mutex};

    type Svc = MintService<MaliciousLedger>;

    /// A ledger whose `mint_range` re-enters the service that called it.
    /// The back-reference is filled in after construction because the
    /// service owns the ledger.
    #[derive(Clone, Default)]
    struct MaliciousLedger {
        service: Arc<Mutex<Option<Arc<Svc>>>>,
        nested_error: Arc<Mutex<Option<MintError>>>,
    }

    #[async_trait]
    impl AssetLedgerGateway for MaliciousLedger {
        async fn mint_range(
            &self,
            _owner: Address,
            _first_id: TokenId,
            _count: u64,
        ) -> Result<(), LedgerError> {
            let service = self.service.lock().unwrap().clone();
            if let Some(service) = service {
                let result = service.mint(request(BOB, 1, 0, 50)).await;
                *self.nested_error.lock().unwrap() = result.err();
            }
            Ok(())
        }
    }

    /// The nested attempt is rejected; the outer mint completes and state
    /// reflects exactly one admission.
    #[tokio::test]
    async fn test_nested_mint_rejected_outer_completes() {
        let ledger = MaliciousLedger::default();
        let service = Arc::new(MintService::new(config(), ledger.clone()).unwrap());
        service.set_stages(vec![stage(0, 0, 100)]).unwrap();
        *ledger.service.lock().unwrap() = Some(Arc::clone(&service));

        let receipt = service.mint(request(ALICE, 2, 0, 50)).await.unwrap();

        assert_eq!(receipt.quantity, 2);
        assert_eq!(
            *ledger.nested_error.lock().unwrap(),
            Some(MintError::ReentrantCall)
        );
        assert_eq!(service.total_minted(), 2);
        assert_eq!(service.total_minted_by(BOB), 0);
    }

    /// The in-flight flag is released after the attack, so a later honest
    /// mint goes through.
    #[tokio::test]
    async fn test_flag_released_after_attack() {
        let ledger = MaliciousLedger::default();
        let service = Arc::new(MintService::new(config(), ledger.clone()).unwrap());
        service.set_stages(vec![stage(0, 0, 100)]).unwrap();
        *ledger.service.lock().unwrap() = Some(Arc::clone(&service));

        service.mint(request(ALICE, 1, 0, 50)).await.unwrap();

        // Disarm the callback and mint normally.
        *ledger.service.lock().unwrap() = None;
        assert!(service.mint(request(BOB, 1, 0, 50)).await.is_ok());
        assert_eq!(service.total_minted(), 2);
    }
}
