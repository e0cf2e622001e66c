//! # Cosign Verification (secp256k1)
//!
//! Recovers the signer of a cosign digest and checks it against the
//! configured cosigner.
//!
//! ## Security Notes
//!
//! - **Malleability**: S must be strictly below half the curve order
//! - **Scalar range**: R and S must be in [1, n-1]
//! - **Constant-time comparisons**: scalar checks use `subtle` so rejection
//!   timing reveals nothing about the signature bytes
//! - Uses the k256 crate for public key recovery

use super::digest::cosign_digest;
use super::entities::CosignSignature;
use super::errors::CosignError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash, Timestamp};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// secp256k1 curve order n.
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order (malleability bound).
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Verifier for delegated-signer authorizations.
///
/// Holds the identity material every digest is bound to (contract identity,
/// chain id), the currently configured cosigner, and the timestamp expiry
/// window. Nonce storage lives with the orchestrator; the current nonce is
/// passed in per verification.
#[derive(Debug, Clone)]
pub struct CosignVerifier {
    contract_identity: Address,
    chain_id: u64,
    cosigner: Option<Address>,
    expiry_seconds: u64,
}

impl CosignVerifier {
    /// Create a verifier with no cosigner configured.
    pub fn new(contract_identity: Address, chain_id: u64, expiry_seconds: u64) -> Self {
        Self {
            contract_identity,
            chain_id,
            cosigner: None,
            expiry_seconds,
        }
    }

    /// Configure or clear the designated cosigner.
    pub fn set_cosigner(&mut self, cosigner: Option<Address>) {
        tracing::info!(configured = cosigner.is_some(), "cosigner updated");
        self.cosigner = cosigner;
    }

    /// The configured cosigner, if any.
    pub fn cosigner(&self) -> Option<Address> {
        self.cosigner
    }

    /// Whether a cosigner is configured (delegated eligibility active).
    pub fn is_configured(&self) -> bool {
        self.cosigner.is_some()
    }

    /// The timestamp expiry window in seconds.
    pub fn expiry_seconds(&self) -> u64 {
        self.expiry_seconds
    }

    /// Update the timestamp expiry window.
    pub fn set_expiry_seconds(&mut self, expiry_seconds: u64) {
        tracing::info!(expiry_seconds, "cosign expiry updated");
        self.expiry_seconds = expiry_seconds;
    }

    /// The digest the cosigner must sign for this request at `nonce`.
    pub fn digest_for(
        &self,
        minter: &Address,
        quantity: u32,
        timestamp: Timestamp,
        nonce: u64,
    ) -> Result<Hash, CosignError> {
        let cosigner = self.cosigner.ok_or(CosignError::CosignerNotSet)?;
        Ok(cosign_digest(
            &self.contract_identity,
            minter,
            quantity,
            &cosigner,
            timestamp,
            self.chain_id,
            nonce,
        ))
    }

    /// Verify a cosigned authorization for the minter's current `nonce`.
    ///
    /// Verification alone never consumes the nonce; only a fully successful
    /// mint advances it, so a rejected attempt leaves the authorization
    /// intact.
    pub fn verify(
        &self,
        minter: &Address,
        quantity: u32,
        timestamp: Timestamp,
        nonce: u64,
        now: Timestamp,
        signature: &CosignSignature,
    ) -> Result<(), CosignError> {
        let expected = self.cosigner.ok_or(CosignError::CosignerNotSet)?;

        let digest = cosign_digest(
            &self.contract_identity,
            minter,
            quantity,
            &expected,
            timestamp,
            self.chain_id,
            nonce,
        );

        let recovered = recover_cosigner(&digest, signature)?;
        if recovered != expected {
            tracing::warn!("cosign signer mismatch");
            return Err(CosignError::InvalidCosignSignature);
        }

        // Expiry only bars the past direction; a timestamp ahead of `now`
        // is constrained by the stage-window agreement check upstream.
        if now.saturating_sub(timestamp) > self.expiry_seconds {
            return Err(CosignError::TimestampExpired);
        }

        Ok(())
    }
}

/// Recover the signer address from a signature over `digest`.
///
/// Every structural failure collapses into `InvalidCosignSignature`: a
/// caller learns nothing about which validation step rejected the bytes.
pub fn recover_cosigner(
    digest: &Hash,
    signature: &CosignSignature,
) -> Result<Address, CosignError> {
    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(CosignError::InvalidCosignSignature);
    }
    if !is_low_s(&signature.s) {
        return Err(CosignError::InvalidCosignSignature);
    }

    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();

    let sig = parsed.map_err(|_| CosignError::InvalidCosignSignature)?;

    let key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| CosignError::InvalidCosignSignature)?;

    Ok(signer_address(&key))
}

/// Derive the Ethereum-style address of a verifying key: last 20 bytes of
/// keccak256 over the uncompressed point without its 0x04 prefix.
pub fn signer_address(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let mut hasher = Keccak256::new();
    hasher.update(&point.as_bytes()[1..]);
    let hash = hasher.finalize();

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Constant-time strict less-than over 32-byte big-endian scalars.
fn ct_less(a: &[u8; 32], b: &[u8; 32]) -> Choice {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let undecided = !(less | greater);
        less |= undecided & Choice::from((a[i] < b[i]) as u8);
        greater |= undecided & Choice::from((a[i] > b[i]) as u8);
    }

    less
}

/// Scalar in [1, n-1], constant time.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    (!is_zero & ct_less(scalar, &SECP256K1_ORDER)).into()
}

/// S strictly below half the curve order, constant time.
fn is_low_s(s: &[u8; 32]) -> bool {
    ct_less(s, &SECP256K1_HALF_ORDER).into()
}

/// Map v to a k256 recovery id. Valid values: 0, 1, 27, 28.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CosignError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(CosignError::InvalidCosignSignature),
    };

    RecoveryId::try_from(id).map_err(|_| CosignError::InvalidCosignSignature)
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// UNIT TESTS
// =============================================================================
