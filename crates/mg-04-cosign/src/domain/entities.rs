//! # Cosign Entities

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use shared_types::{Address, Timestamp};

/// ECDSA signature over a cosign digest, secp256k1 recoverable form.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosignSignature {
    /// R component (32 bytes)
    #[serde_as(as = "Bytes")]
    pub r: [u8; 32],
    /// S component (32 bytes)
    #[serde_as(as = "Bytes")]
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

/// The tuple a cosigner commits to. Ephemeral and single-use: the nonce is
/// the minter's current replay counter, so the authorization dies the moment
/// that minter completes any mint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosignAuthorization {
    /// The requester being authorized.
    pub minter: Address,
    /// Units authorized for this request.
    pub quantity: u32,
    /// The designated signer's address.
    pub cosigner: Address,
    /// When the authorization was issued.
    pub timestamp: Timestamp,
    /// Chain context the authorization is bound to.
    pub chain_id: u64,
    /// The minter's replay counter at issuance time.
    pub nonce: u64,
}
