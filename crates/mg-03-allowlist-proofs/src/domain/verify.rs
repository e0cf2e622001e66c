//! # Inclusion Verification
//!
//! Recomputes the Merkle root from a claimant address and a sibling path,
//! and compares it to a stage's committed digest.

use super::errors::ProofError;
use shared_types::{keccak256, Address, Hash, ZERO_HASH};

/// Hash a leaf from a claimant address.
pub fn leaf_hash(address: &Address) -> Hash {
    keccak256(address)
}

/// Commutative interior hash: `keccak256(min(a, b) || max(a, b))`.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let mut buf = [0u8; 64];
    if a <= b {
        buf[..32].copy_from_slice(a);
        buf[32..].copy_from_slice(b);
    } else {
        buf[..32].copy_from_slice(b);
        buf[32..].copy_from_slice(a);
    }
    keccak256(&buf)
}

/// Verify that `claimant` is a member of the set committed to by `digest`.
///
/// An all-zero digest means the stage has no allowlist; verification is
/// skipped entirely and every claimant passes. Otherwise the root is
/// recomputed from the leaf through the sibling path and any mismatch is
/// `InvalidProof`.
pub fn verify_inclusion(
    digest: &Hash,
    claimant: &Address,
    proof: &[Hash],
) -> Result<(), ProofError> {
    if *digest == ZERO_HASH {
        return Ok(());
    }

    let mut current = leaf_hash(claimant);
    for sibling in proof {
        current = hash_pair(&current, sibling);
    }

    if current == *digest {
        Ok(())
    } else {
        tracing::debug!("allowlist proof mismatch");
        Err(ProofError::InvalidProof)
    }
}
