//! # Cosign Digest
//!
//! Canonical, order-fixed encoding of the seven authorization fields into a
//! single Keccak256 message.
//!
//! The field order and widths below are the wire contract between the engine
//! and the off-path cosigner. Any reordering or width change invalidates all
//! previously issued signatures.

use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash, Timestamp};

/// Compute the cosign message digest.
///
/// Layout, in order:
/// `contract_identity (20) || minter (20) || quantity (4, BE) ||
///  cosigner (20) || timestamp (8, BE) || chain_id (8, BE) || nonce (8, BE)`
#[allow(clippy::too_many_arguments)]
pub fn cosign_digest(
    contract_identity: &Address,
    minter: &Address,
    quantity: u32,
    cosigner: &Address,
    timestamp: Timestamp,
    chain_id: u64,
    nonce: u64,
) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(contract_identity);
    hasher.update(minter);
    hasher.update(quantity.to_be_bytes());
    hasher.update(cosigner);
    hasher.update(timestamp.to_be_bytes());
    hasher.update(chain_id.to_be_bytes());
    hasher.update(nonce.to_be_bytes());

    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}
