//! Shared fixtures: engine configuration, stages, and a cosigner keypair
//! that signs digests the way an off-path cosign authority would.

use k256::ecdsa::{RecoveryId, SigningKey};
use mg_01_stage_registry::Stage;
use mg_04_cosign::{signer_address, CosignSignature};
use mg_05_mint_engine::{MemoryLedger, MintConfig, MintRequest, MintService};
use shared_types::{Address, Hash, Timestamp, ZERO_HASH};

pub const ALICE: Address = [0xA1; 20];
pub const BOB: Address = [0xB2; 20];
pub const CAROL: Address = [0xC3; 20];

pub fn config() -> MintConfig {
    MintConfig {
        contract_identity: [0x10; 20],
        chain_id: 1,
        token_kind: 0x01,
        min_stage_gap: 60,
        max_mintable_supply: 1000,
        global_wallet_limit: 0,
        timestamp_expiry_seconds: 300,
        mintable: true,
    }
}

pub fn stage(price: u128, start: Timestamp, end: Timestamp) -> Stage {
    Stage {
        price,
        wallet_limit: 0,
        allowlist_digest: ZERO_HASH,
        max_stage_supply: 0,
        start_time: start,
        end_time: end,
    }
}

pub fn request(minter: Address, quantity: u32, paid: u128, now: Timestamp) -> MintRequest {
    MintRequest {
        minter,
        quantity,
        paid_amount: paid,
        allowlist_proof: Vec::new(),
        cosign_timestamp: 0,
        cosign_signature: None,
        now,
    }
}

/// A service over the in-memory ledger with one open stage.
pub fn open_service(price: u128) -> MintService<MemoryLedger> {
    use mg_05_mint_engine::MintAdmissionApi;

    let service = MintService::new(config(), MemoryLedger::new()).unwrap();
    service.set_stages(vec![stage(price, 0, 100)]).unwrap();
    service
}

/// An off-path cosign authority for tests.
pub struct TestCosigner {
    key: SigningKey,
    pub address: Address,
}

impl TestCosigner {
    pub fn generate() -> Self {
        let key = SigningKey::random(&mut rand::thread_rng());
        let address = signer_address(key.verifying_key());
        Self { key, address }
    }

    /// Sign a digest, normalizing S to its low form.
    pub fn sign(&self, digest: &Hash) -> CosignSignature {
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(digest)
            .expect("signing failed");

        let (sig, recid) = match sig.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::try_from(recid.to_byte() ^ 1).expect("parity flip"),
            ),
            None => (sig, recid),
        };

        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        CosignSignature {
            r,
            s,
            v: recid.to_byte() + 27,
        }
    }
}
